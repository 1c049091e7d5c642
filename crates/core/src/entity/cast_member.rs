use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{creation_timestamp, validate_name, CatalogEntity, EntityError};

/// Role of a cast member. Serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CastMemberType {
    Director = 1,
    Actor = 2,
}

impl TryFrom<u8> for CastMemberType {
    type Error = EntityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CastMemberType::Director),
            2 => Ok(CastMemberType::Actor),
            other => Err(EntityError::Invalid {
                field: "type",
                reason: format!("unknown cast member type {}", other),
            }),
        }
    }
}

impl From<CastMemberType> for u8 {
    fn from(kind: CastMemberType) -> Self {
        kind as u8
    }
}

/// A person credited on videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CastMemberType,
    pub is_active: bool,
    created_at: DateTime<Utc>,
}

impl CastMember {
    pub fn new(name: impl Into<String>, kind: CastMemberType) -> Result<Self, EntityError> {
        let name = name.into();
        validate_name("name", &name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            kind,
            is_active: true,
            created_at: creation_timestamp(),
        })
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        kind: CastMemberType,
    ) -> Result<(), EntityError> {
        let name = name.into();
        validate_name("name", &name)?;
        self.name = name;
        self.kind = kind;
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

impl CatalogEntity for CastMember {
    const KIND: &'static str = "cast_member";

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_member_type_serialization() {
        assert_eq!(
            serde_json::to_string(&CastMemberType::Director).unwrap(),
            "1"
        );
        assert_eq!(serde_json::to_string(&CastMemberType::Actor).unwrap(), "2");

        let parsed: CastMemberType = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, CastMemberType::Actor);
    }

    #[test]
    fn test_cast_member_type_unknown_code() {
        let result: Result<CastMemberType, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_cast_member_is_active() {
        let member = CastMember::new("Jane Doe", CastMemberType::Actor).unwrap();
        assert!(member.is_active());
        assert_eq!(member.kind, CastMemberType::Actor);
    }

    #[test]
    fn test_update_cast_member() {
        let mut member = CastMember::new("Jane Doe", CastMemberType::Actor).unwrap();
        member.update("Jane D.", CastMemberType::Director).unwrap();
        assert_eq!(member.name, "Jane D.");
        assert_eq!(member.kind, CastMemberType::Director);
    }

    #[test]
    fn test_serialized_type_field() {
        let member = CastMember::new("Jane Doe", CastMemberType::Director).unwrap();
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["type"], 1);
    }
}
