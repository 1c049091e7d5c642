use std::path::Path;
use std::sync::Arc;

use catalog_core::{
    CastMember, Category, Config, DatabaseBackend, DatabaseConfig, Genre, InMemoryRepository,
    ListingConfig, Repository, RepositoryError, SqliteRepository, Video,
};

/// One repository per record kind.
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn Repository<Category>>,
    pub genres: Arc<dyn Repository<Genre>>,
    pub cast_members: Arc<dyn Repository<CastMember>>,
    pub videos: Arc<dyn Repository<Video>>,
}

impl Repositories {
    /// Repositories that live only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(InMemoryRepository::new()),
            genres: Arc::new(InMemoryRepository::new()),
            cast_members: Arc::new(InMemoryRepository::new()),
            videos: Arc::new(InMemoryRepository::new()),
        }
    }

    /// SQLite repositories sharing one database file, a table per kind.
    pub fn sqlite(path: &Path) -> Result<Self, RepositoryError> {
        Ok(Self {
            categories: Arc::new(SqliteRepository::new(path)?),
            genres: Arc::new(SqliteRepository::new(path)?),
            cast_members: Arc::new(SqliteRepository::new(path)?),
            videos: Arc::new(SqliteRepository::new(path)?),
        })
    }

    pub fn from_config(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        match config.backend {
            DatabaseBackend::Sqlite => Self::sqlite(&config.path),
            DatabaseBackend::Memory => Ok(Self::in_memory()),
        }
    }
}

/// Shared application state
pub struct AppState {
    config: Config,
    repositories: Repositories,
}

impl AppState {
    pub fn new(config: Config, repositories: Repositories) -> Self {
        Self {
            config,
            repositories,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn listing(&self) -> &ListingConfig {
        &self.config.listing
    }

    pub fn categories(&self) -> &dyn Repository<Category> {
        self.repositories.categories.as_ref()
    }

    pub fn genres(&self) -> &dyn Repository<Genre> {
        self.repositories.genres.as_ref()
    }

    pub fn cast_members(&self) -> &dyn Repository<CastMember> {
        self.repositories.cast_members.as_ref()
    }

    pub fn videos(&self) -> &dyn Repository<Video> {
        self.repositories.videos.as_ref()
    }
}
