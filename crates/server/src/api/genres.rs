//! Genre API handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog_core::{CatalogEntity, Genre, Repository};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::listing::{parse_id, DataResponse, Resource};
use crate::state::AppState;

/// Request body for creating or updating a genre
#[derive(Debug, Deserialize)]
pub struct GenreBody {
    pub name: String,
    /// Defaults to active on create; kept as stored on update.
    pub is_active: Option<bool>,
}

/// Response for genre operations
#[derive(Debug, Serialize)]
pub struct GenreOutput {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Genre> for GenreOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id(),
            is_active: genre.is_active(),
            created_at: genre.created_at(),
            name: genre.name,
        }
    }
}

impl Resource for Genre {
    type Output = GenreOutput;

    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.genres()
    }
}

/// Create a new genre
pub async fn create_genre(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenreBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<GenreOutput>>), ApiError> {
    let Json(body) = payload?;
    let genre = Genre::new(body.name, body.is_active.unwrap_or(true))?;
    state.genres().insert(&genre)?;

    info!(id = %genre.id(), "Created genre {}", genre.name);
    Ok((StatusCode::CREATED, DataResponse::new(genre.into())))
}

/// Rename a genre and optionally toggle it
pub async fn update_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<GenreBody>, JsonRejection>,
) -> Result<Json<DataResponse<GenreOutput>>, ApiError> {
    let Json(body) = payload?;
    let id = parse_id(&id)?;
    let mut genre = state.genres().get(id)?;

    genre.update(body.name)?;
    match body.is_active {
        Some(true) => genre.activate(),
        Some(false) => genre.deactivate(),
        None => {}
    }
    state.genres().update(&genre)?;

    Ok(DataResponse::new(genre.into()))
}
