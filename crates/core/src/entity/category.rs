use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    creation_timestamp, validate_description, validate_name, CatalogEntity, EntityError,
};

/// A catalog category ("Movies", "Documentaries", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, EntityError> {
        let name = name.into();
        let description = description.into();
        validate_name("name", &name)?;
        validate_description(&description)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            is_active,
            created_at: creation_timestamp(),
        })
    }

    /// Replace name and, when given, the description.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), EntityError> {
        let name = name.into();
        validate_name("name", &name)?;
        if let Some(ref description) = description {
            validate_description(description)?;
        }
        self.name = name;
        if let Some(description) = description {
            self.description = description;
        }
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub(crate) fn created_on(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at.trunc_subsecs(0);
        self
    }
}

impl CatalogEntity for Category {
    const KIND: &'static str = "category";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
