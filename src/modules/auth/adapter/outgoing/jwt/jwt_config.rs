use std::env;

use crate::config::ConfigError;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // seconds
    pub refresh_token_expiry: i64, // seconds
}

impl JwtConfig {
    fn parse_expiry(key: &'static str, default: i64) -> Result<i64, ConfigError> {
        match env::var(key) {
            Ok(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid(key, raw)),
            Err(_) => Ok(default),
        }
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid(
                "JWT_SECRET",
                "must be at least 32 characters long".to_string(),
            ));
        }

        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", 1800)?;
        let refresh_token_expiry = Self::parse_expiry("JWT_REFRESH_EXPIRY", 604800)?;

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid(
                "JWT_ACCESS_EXPIRY",
                "must be between 1 and 86400 seconds".to_string(),
            ));
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Invalid(
                "JWT_REFRESH_EXPIRY",
                "must be greater than JWT_ACCESS_EXPIRY".to_string(),
            ));
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "talenta".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
