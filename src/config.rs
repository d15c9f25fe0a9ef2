use std::{env, str::FromStr, time::Duration};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub nlp_service_url: String,
    pub search_service_url: String,
    pub collaborator_timeout_secs: u64,
    /// Synthetic values tried per question before giving up on filling its options.
    pub synthetic_fill_attempts: usize,
    pub trending_default_max: usize,
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parsed_or("WEB_SERVER_PORT", 8080),
            nlp_service_url: env::var("NLP_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            search_service_url: env::var("SEARCH_SERVICE_URL")
                .unwrap_or_else(|_| "https://en.wikipedia.org".to_string()),
            collaborator_timeout_secs: parsed_or("COLLABORATOR_TIMEOUT_SECS", 120),
            synthetic_fill_attempts: parsed_or("SYNTHETIC_FILL_ATTEMPTS", 100),
            trending_default_max: parsed_or("TRENDING_DEFAULT_MAX", 25),
        }
    }

    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            nlp_service_url: "http://localhost:8000".to_string(),
            search_service_url: "https://en.wikipedia.org".to_string(),
            collaborator_timeout_secs: 5,
            synthetic_fill_attempts: 20,
            trending_default_max: 25,
        }
    }
}
