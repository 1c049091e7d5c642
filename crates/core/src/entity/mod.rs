//! Catalog records: categories, genres, cast members and videos.
//!
//! Every record exposes the same listing surface through [`CatalogEntity`],
//! which is all the search layer needs to filter, order and page them.

mod cast_member;
mod category;
mod genre;
mod video;

pub use cast_member::{CastMember, CastMemberType};
pub use category::Category;
pub use genre::Genre;
pub use video::{Rating, Video, VideoDetails};

use chrono::{DateTime, SubsecRound, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Maximum length of a record name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of a free-text description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

/// Listing surface shared by every catalog record.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// Stable lowercase identifier of the record type ("genre", "video", ...).
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    /// Name used for free-text search and name ordering.
    fn name(&self) -> &str;

    fn is_active(&self) -> bool;

    fn created_at(&self) -> DateTime<Utc>;
}

/// Errors raised while building or mutating a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    #[error("{field} should not be empty")]
    Empty { field: &'static str },

    #[error("{field} should be at most {max} characters long")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub(crate) fn validate_name(field: &'static str, value: &str) -> Result<(), EntityError> {
    if value.trim().is_empty() {
        return Err(EntityError::Empty { field });
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(EntityError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

pub(crate) fn validate_description(value: &str) -> Result<(), EntityError> {
    if value.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(EntityError::TooLong {
            field: "description",
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

/// Creation timestamps are kept at whole-second precision.
pub(crate) fn creation_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
