//! Handlers shared by every record kind: list, get and delete.
//!
//! Each kind plugs in through [`Resource`], which names its repository and
//! the JSON projection returned to clients.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_core::{
    CatalogEntity, ListingConfig, Repository, SearchInput, SearchOrder, SearchOutput,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use crate::metrics;
use crate::state::AppState;

/// A record kind served over HTTP.
pub trait Resource: CatalogEntity {
    /// Representation sent to clients.
    type Output: Serialize + From<Self> + Send + 'static;

    fn repository(state: &AppState) -> &dyn Repository<Self>;
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for list endpoints
///
/// Paging values are signed so that negative input is reported as a
/// validation error instead of a query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl ListParams {
    /// Resolve defaults from `listing` and reject out-of-range paging.
    pub fn into_search_input(self, listing: &ListingConfig) -> Result<SearchInput, ApiError> {
        let page = clamp_u32(self.page.unwrap_or(1));
        let per_page = clamp_u32(
            self.per_page
                .unwrap_or_else(|| i64::from(listing.default_per_page)),
        );

        let order = match self.dir.as_deref() {
            None | Some("") => SearchOrder::default(),
            Some(dir) => dir.parse()?,
        };

        let input = SearchInput::new(page, per_page)
            .with_search(self.search.unwrap_or_default())
            .with_order(self.sort.unwrap_or_default(), order);
        input.validate(listing.max_per_page)?;
        Ok(input)
    }
}

fn clamp_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Paging metadata of a list response
#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
}

/// Response for list endpoints
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub meta: ListMeta,
    pub data: Vec<T>,
}

impl<T, U: From<T>> From<SearchOutput<T>> for ListResponse<U> {
    fn from(output: SearchOutput<T>) -> Self {
        let output = output.map(U::from);
        Self {
            meta: ListMeta {
                total: output.total,
                current_page: output.current_page,
                per_page: output.per_page,
            },
            data: output.items,
        }
    }
}

/// Response wrapping a single record
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Json<Self> {
        Json(Self { data })
    }
}

/// Parse a record id from the path.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::Validation(format!("Invalid id: {}", raw)))
}

// ============================================================================
// Handlers
// ============================================================================

/// List records with paging, free-text filter and ordering
pub async fn list<T: Resource>(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ListResponse<T::Output>>, ApiError> {
    let Query(params) = params?;
    let input = params.into_search_input(state.listing())?;
    let output = T::repository(&state).search(&input)?;

    metrics::record_search(T::KIND, output.total);

    Ok(Json(ListResponse::from(output)))
}

/// Get a single record by id
pub async fn get<T: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<T::Output>>, ApiError> {
    let id = parse_id(&id)?;
    let entity = T::repository(&state).get(id)?;
    Ok(DataResponse::new(T::Output::from(entity)))
}

/// Delete a record by id
pub async fn delete<T: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let removed = T::repository(&state).delete(id)?;
    info!(kind = T::KIND, id = %removed.id(), "Deleted {}", removed.name());
    Ok(StatusCode::NO_CONTENT)
}
