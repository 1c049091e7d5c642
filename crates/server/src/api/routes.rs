use axum::{middleware, routing::get, Router};
use catalog_core::{CastMember, Category, Genre, Video};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::middleware::metrics_middleware;
use super::{cast_members, categories, genres, handlers, listing, videos};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Categories
        .route(
            "/categories",
            get(listing::list::<Category>).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            get(listing::get::<Category>)
                .put(categories::update_category)
                .delete(listing::delete::<Category>),
        )
        // Genres
        .route(
            "/genres",
            get(listing::list::<Genre>).post(genres::create_genre),
        )
        .route(
            "/genres/{id}",
            get(listing::get::<Genre>)
                .put(genres::update_genre)
                .delete(listing::delete::<Genre>),
        )
        // Cast members
        .route(
            "/cast_members",
            get(listing::list::<CastMember>).post(cast_members::create_cast_member),
        )
        .route(
            "/cast_members/{id}",
            get(listing::get::<CastMember>)
                .put(cast_members::update_cast_member)
                .delete(listing::delete::<CastMember>),
        )
        // Videos
        .route(
            "/videos",
            get(listing::list::<Video>).post(videos::create_video),
        )
        .route(
            "/videos/{id}",
            get(listing::get::<Video>)
                .put(videos::update_video)
                .delete(listing::delete::<Video>),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
