use crate::error::config::ConfigError;

static DEFAULT_HOST: &str = "0.0.0.0";
static DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = std::env::var("CREWLINE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("CREWLINE_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "CREWLINE_PORT".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}
