//! Cast member API handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog_core::{CastMember, CastMemberType, CatalogEntity, Repository};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::listing::{parse_id, DataResponse, Resource};
use crate::state::AppState;

/// Request body for creating or updating a cast member
#[derive(Debug, Deserialize)]
pub struct CastMemberBody {
    pub name: String,
    /// 1 = director, 2 = actor
    #[serde(rename = "type")]
    pub kind: CastMemberType,
    pub is_active: Option<bool>,
}

/// Response for cast member operations
#[derive(Debug, Serialize)]
pub struct CastMemberOutput {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CastMemberType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CastMember> for CastMemberOutput {
    fn from(member: CastMember) -> Self {
        Self {
            id: member.id(),
            is_active: member.is_active(),
            created_at: member.created_at(),
            name: member.name,
            kind: member.kind,
        }
    }
}

impl Resource for CastMember {
    type Output = CastMemberOutput;

    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.cast_members()
    }
}

/// Create a new cast member
pub async fn create_cast_member(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CastMemberBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<CastMemberOutput>>), ApiError> {
    let Json(body) = payload?;
    let mut member = CastMember::new(body.name, body.kind)?;
    if body.is_active == Some(false) {
        member.deactivate();
    }
    state.cast_members().insert(&member)?;

    info!(id = %member.id(), kind = ?member.kind, "Created cast member {}", member.name);
    Ok((StatusCode::CREATED, DataResponse::new(member.into())))
}

/// Update a cast member
pub async fn update_cast_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CastMemberBody>, JsonRejection>,
) -> Result<Json<DataResponse<CastMemberOutput>>, ApiError> {
    let Json(body) = payload?;
    let id = parse_id(&id)?;
    let mut member = state.cast_members().get(id)?;

    member.update(body.name, body.kind)?;
    match body.is_active {
        Some(true) => member.activate(),
        Some(false) => member.deactivate(),
        None => {}
    }
    state.cast_members().update(&member)?;

    Ok(DataResponse::new(member.into()))
}
