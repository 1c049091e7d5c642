//! Video API handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog_core::{CatalogEntity, Rating, Repository, Video, VideoDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::error::ApiError;
use super::listing::{parse_id, DataResponse, Resource};
use crate::state::AppState;

/// Request body for creating or updating a video
#[derive(Debug, Deserialize)]
pub struct VideoBody {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub year_launched: u16,
    /// Minutes
    pub duration: u32,
    pub rating: Rating,
    #[serde(default)]
    pub opened: bool,
    pub published: Option<bool>,
}

impl VideoBody {
    fn split(self) -> (VideoDetails, Option<bool>) {
        let details = VideoDetails {
            title: self.title,
            description: self.description,
            year_launched: self.year_launched,
            duration: self.duration,
            rating: self.rating,
            opened: self.opened,
        };
        (details, self.published)
    }
}

/// Response for video operations
#[derive(Debug, Serialize)]
pub struct VideoOutput {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub year_launched: u16,
    pub duration: u32,
    pub rating: Rating,
    pub opened: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Video> for VideoOutput {
    fn from(video: Video) -> Self {
        Self {
            id: video.id(),
            created_at: video.created_at(),
            title: video.title,
            description: video.description,
            year_launched: video.year_launched,
            duration: video.duration,
            rating: video.rating,
            opened: video.opened,
            published: video.published,
        }
    }
}

impl Resource for Video {
    type Output = VideoOutput;

    fn repository(state: &AppState) -> &dyn Repository<Self> {
        state.videos()
    }
}

fn apply_published(video: &mut Video, published: Option<bool>) {
    match published {
        Some(true) => video.publish(),
        Some(false) => video.unpublish(),
        None => {}
    }
}

/// Create a new video (unpublished unless asked otherwise)
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VideoBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<VideoOutput>>), ApiError> {
    let Json(body) = payload?;
    let (details, published) = body.split();
    let mut video = Video::new(details)?;
    apply_published(&mut video, published);
    state.videos().insert(&video)?;

    info!(id = %video.id(), "Created video {}", video.title);
    Ok((StatusCode::CREATED, DataResponse::new(video.into())))
}

/// Update a video
pub async fn update_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<VideoBody>, JsonRejection>,
) -> Result<Json<DataResponse<VideoOutput>>, ApiError> {
    let Json(body) = payload?;
    let id = parse_id(&id)?;
    let mut video = state.videos().get(id)?;

    let (details, published) = body.split();
    video.update(details)?;
    apply_published(&mut video, published);
    state.videos().update(&video)?;

    Ok(DataResponse::new(video.into()))
}
