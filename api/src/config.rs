use estate_shared::{
    AuthConfig, CorsConfig, DatabaseConfig, Environment, ListingConfig, LoggingConfig,
    ServerConfig, StorageBackend,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in production")]
    DefaultJwtSecret,

    #[error("DATABASE_URL must be set when STORAGE_BACKEND=mysql")]
    MissingDatabaseUrl,

    #[error("Invalid listing limits: {0}")]
    InvalidListingLimits(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub listing: ListingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        let config = Config {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(environment.is_production()),
            listing: ListingConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
            environment,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultJwtSecret);
        }
        if self.database.backend == StorageBackend::Mysql && self.database.url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        self.validate_listing()
    }

    fn validate_listing(&self) -> Result<(), ConfigError> {
        let listing = &self.listing;
        let invalid = |message: String| -> Result<(), ConfigError> {
            Err(ConfigError::InvalidListingLimits(message))
        };

        if listing.max_page_size == 0 {
            return invalid("LISTING_MAX_PAGE_SIZE must be at least 1".to_string());
        }
        if listing.default_page_size == 0 || listing.default_page_size > listing.max_page_size {
            return invalid(format!(
                "LISTING_DEFAULT_PAGE_SIZE must be between 1 and {}, got {}",
                listing.max_page_size, listing.default_page_size
            ));
        }
        if listing.recent_limit > listing.max_page_size {
            return invalid(format!(
                "LISTING_RECENT_LIMIT must not exceed {}, got {}",
                listing.max_page_size, listing.recent_limit
            ));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
