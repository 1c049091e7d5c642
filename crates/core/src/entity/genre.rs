use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{creation_timestamp, validate_name, CatalogEntity, EntityError};

/// A genre ("Drama", "Horror - Robots", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    id: Uuid,
    pub name: String,
    pub is_active: bool,
    created_at: DateTime<Utc>,
}

impl Genre {
    pub fn new(name: impl Into<String>, is_active: bool) -> Result<Self, EntityError> {
        let name = name.into();
        validate_name("name", &name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            is_active,
            created_at: creation_timestamp(),
        })
    }

    pub fn update(&mut self, name: impl Into<String>) -> Result<(), EntityError> {
        let name = name.into();
        validate_name("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Overrides the creation timestamp (fixtures that need distinct instants).
    pub(crate) fn created_on(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at.trunc_subsecs(0);
        self
    }
}

impl CatalogEntity for Genre {
    const KIND: &'static str = "genre";

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
