use std::env;

use crate::auth::application::use_cases::ensure_admin::AdminSeed;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{0} is invalid: {1}")]
    Invalid(&'static str, String),
}

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Origin of the public frontend, used in QR payloads.
    pub public_base_url: String,
    pub run_migrations: bool,
    pub admin_seed: Option<AdminSeed>,
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`.
pub fn load_env_files() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(key, raw.to_string())),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let host = optional("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match optional("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            None => 8000,
        };

        let public_base_url = optional("PUBLIC_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let run_migrations = match optional("RUN_MIGRATIONS") {
            Some(raw) => parse_bool("RUN_MIGRATIONS", &raw)?,
            None => false,
        };

        Ok(Self {
            database_url,
            host,
            port,
            public_base_url,
            run_migrations,
            admin_seed: Self::admin_seed_from_env()?,
        })
    }

    /// All three ADMIN_* variables or none of them.
    fn admin_seed_from_env() -> Result<Option<AdminSeed>, ConfigError> {
        let username = optional("ADMIN_USERNAME");
        let email = optional("ADMIN_EMAIL");
        let password = optional("ADMIN_PASSWORD");

        match (username, email, password) {
            (None, None, None) => Ok(None),
            (Some(username), Some(email), Some(password)) => Ok(Some(AdminSeed {
                username,
                email,
                password,
            })),
            (None, _, _) => Err(ConfigError::Missing("ADMIN_USERNAME")),
            (_, None, _) => Err(ConfigError::Missing("ADMIN_EMAIL")),
            (_, _, None) => Err(ConfigError::Missing("ADMIN_PASSWORD")),
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("X", "true"), Ok(true));
        assert_eq!(parse_bool("X", " On "), Ok(true));
        assert_eq!(parse_bool("X", "0"), Ok(false));
        assert!(matches!(
            parse_bool("X", "maybe"),
            Err(ConfigError::Invalid("X", _))
        ));
    }

    #[test]
    fn server_url_joins_host_and_port() {
        let config = AppConfig {
            database_url: "postgres://localhost/talenta".into(),
            host: "0.0.0.0".into(),
            port: 8080,
            public_base_url: "https://talenta.example".into(),
            run_migrations: false,
            admin_seed: None,
        };
        assert_eq!(config.server_url(), "0.0.0.0:8080");
    }

    #[test]
    fn config_error_messages_name_the_variable() {
        assert_eq!(
            ConfigError::Missing("DATABASE_URL").to_string(),
            "DATABASE_URL is not set"
        );
    }
}
