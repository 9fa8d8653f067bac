use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub allow_origins: Vec<String>,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub db: DatabaseConfig,
    pub logger: LoggerConfig,
    pub application: ApplicationConfig,
}

impl AppConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<AppConfig> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Minimal configuration from `DATABASE_URL` and `PORT`, for running
    /// without a config file.
    pub fn from_env() -> anyhow::Result<AppConfig> {
        let url = std::env::var("DATABASE_URL").context("Key `DATABASE_URL` not set")?;
        let port = std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(AppConfig {
            db: DatabaseConfig {
                url,
                max_connections: 5,
            },
            logger: LoggerConfig {
                log_path: "./logs".to_string(),
            },
            application: ApplicationConfig {
                allow_origins: vec!["*".to_string()],
                address: format!("0.0.0.0:{}", port),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::infra::config::AppConfig;

    #[test]
    fn test_config_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
                [db]
                url = "postgres://localhost/directory"
                max_connections = 5

                [logger]
                log_path = "./logs"

                [application]
                allow_origins = ["*"]
                address = "0.0.0.0:8000"
            "#,
        )
        .unwrap();

        assert_eq!(config.db.url, "postgres://localhost/directory");
        assert_eq!(config.application.address, "0.0.0.0:8000");
    }
}
