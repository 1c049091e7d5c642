//! Core of the video catalog service: records, searchable listings,
//! repositories and configuration.

pub mod config;
pub mod entity;
pub mod repository;
pub mod search;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatabaseBackend,
    DatabaseConfig, ListingConfig, ServerConfig,
};
pub use entity::{
    CastMember, CastMemberType, CatalogEntity, Category, EntityError, Genre, Rating, Video,
    VideoDetails,
};
pub use repository::{InMemoryRepository, Repository, RepositoryError, SqliteRepository};
pub use search::{
    search, SearchError, SearchInput, SearchOrder, SearchOutput, SortField, DEFAULT_PER_PAGE,
};
