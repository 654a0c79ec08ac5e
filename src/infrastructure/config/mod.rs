use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Voice service
    pub elevenlabs_api_key: String,
    pub elevenlabs_base_url: String,
    // Voices hidden from every listing
    pub excluded_voice_ids: Vec<String>,
    // Dubbing poll policy
    pub dubbing_poll_interval_secs: u64,
    pub dubbing_poll_max_attempts: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        // Up to two voice ids can be hidden from the catalog
        let excluded_voice_ids = [env::var("VOICE_ID_ONE"), env::var("VOICE_ID_TWO")]
            .into_iter()
            .filter_map(|v| v.ok())
            .filter(|v| !v.is_empty())
            .collect();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            elevenlabs_api_key: env::var("ELEVENLABS_API_KEY")?,
            elevenlabs_base_url: env::var("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|_| "https://api.elevenlabs.io".to_string()),
            excluded_voice_ids,
            dubbing_poll_interval_secs: env::var("DUBBING_POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
            dubbing_poll_max_attempts: env::var("DUBBING_POLL_MAX_ATTEMPTS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
