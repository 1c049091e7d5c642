use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Listing page sizes are positive and the default fits under the maximum
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let listing = &config.listing;
    if listing.max_per_page == 0 {
        return Err(ConfigError::ValidationError(
            "listing.max_per_page cannot be 0".to_string(),
        ));
    }
    if listing.default_per_page == 0 || listing.default_per_page > listing.max_per_page {
        return Err(ConfigError::ValidationError(format!(
            "listing.default_per_page must be between 1 and {}",
            listing.max_per_page
        )));
    }

    Ok(())
}
