pub mod cast_members;
pub mod categories;
pub mod error;
pub mod genres;
pub mod handlers;
pub mod listing;
pub mod middleware;
pub mod routes;
pub mod videos;

pub use error::ApiError;
pub use routes::create_router;
