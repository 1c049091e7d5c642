//! Category API handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog_core::{CatalogEntity, Category, Repository};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::listing::{parse_id, DataResponse, Resource};
use crate::state::AppState;

/// Request body for creating or updating a category
#[derive(Debug, Deserialize)]
pub struct CategoryBody {
    pub name: String,
    /// Empty on create when omitted; kept as stored on update.
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Response for category operations
#[derive(Debug, Serialize)]
pub struct CategoryOutput {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id(),
            is_active: category.is_active(),
            created_at: category.created_at(),
            name: category.name,
            description: category.description,
        }
    }
}

impl Resource for Category {
    type Output = CategoryOutput;

    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.categories()
    }
}

/// Create a new category
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CategoryBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<CategoryOutput>>), ApiError> {
    let Json(body) = payload?;
    let category = Category::new(
        body.name,
        body.description.unwrap_or_default(),
        body.is_active.unwrap_or(true),
    )?;
    state.categories().insert(&category)?;

    info!(id = %category.id(), "Created category {}", category.name);
    Ok((StatusCode::CREATED, DataResponse::new(category.into())))
}

/// Update a category
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryBody>, JsonRejection>,
) -> Result<Json<DataResponse<CategoryOutput>>, ApiError> {
    let Json(body) = payload?;
    let id = parse_id(&id)?;
    let mut category = state.categories().get(id)?;

    category.update(body.name, body.description)?;
    match body.is_active {
        Some(true) => category.activate(),
        Some(false) => category.deactivate(),
        None => {}
    }
    state.categories().update(&category)?;

    Ok(DataResponse::new(category.into()))
}
