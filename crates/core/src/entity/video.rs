use chrono::{DateTime, Datelike, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    creation_timestamp, validate_description, validate_name, CatalogEntity, EntityError,
};

/// Earliest accepted launch year.
const MIN_YEAR_LAUNCHED: u16 = 1888;

/// Advisory age rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "ER")]
    Er,
    #[serde(rename = "L")]
    Free,
    #[serde(rename = "10")]
    Age10,
    #[serde(rename = "12")]
    Age12,
    #[serde(rename = "14")]
    Age14,
    #[serde(rename = "16")]
    Age16,
    #[serde(rename = "18")]
    Age18,
}

/// Descriptive fields of a video, shared by creation and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    pub title: String,
    pub description: String,
    pub year_launched: u16,
    /// Running time in minutes.
    pub duration: u32,
    pub rating: Rating,
    pub opened: bool,
}

impl VideoDetails {
    fn validate(&self) -> Result<(), EntityError> {
        validate_name("title", &self.title)?;
        validate_description(&self.description)?;

        let max_year = Utc::now().year() as u16 + 1;
        if self.year_launched < MIN_YEAR_LAUNCHED || self.year_launched > max_year {
            return Err(EntityError::Invalid {
                field: "year_launched",
                reason: format!(
                    "must be between {} and {}",
                    MIN_YEAR_LAUNCHED, max_year
                ),
            });
        }
        if self.duration == 0 {
            return Err(EntityError::Invalid {
                field: "duration",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// A video. Its title is the listing name; `published` is its activity flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    id: Uuid,
    pub title: String,
    pub description: String,
    pub year_launched: u16,
    pub duration: u32,
    pub rating: Rating,
    pub opened: bool,
    pub published: bool,
    created_at: DateTime<Utc>,
}

impl Video {
    /// New videos start unpublished.
    pub fn new(details: VideoDetails) -> Result<Self, EntityError> {
        details.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: details.title,
            description: details.description,
            year_launched: details.year_launched,
            duration: details.duration,
            rating: details.rating,
            opened: details.opened,
            published: false,
            created_at: creation_timestamp(),
        })
    }

    pub fn update(&mut self, details: VideoDetails) -> Result<(), EntityError> {
        details.validate()?;
        self.title = details.title;
        self.description = details.description;
        self.year_launched = details.year_launched;
        self.duration = details.duration;
        self.rating = details.rating;
        self.opened = details.opened;
        Ok(())
    }

    pub fn publish(&mut self) {
        self.published = true;
    }

    pub fn unpublish(&mut self) {
        self.published = false;
    }

    pub(crate) fn created_on(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at.trunc_subsecs(0);
        self
    }
}

impl CatalogEntity for Video {
    const KIND: &'static str = "video";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn is_active(&self) -> bool {
        self.published
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
