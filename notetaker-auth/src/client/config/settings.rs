use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    notes_api::DEFAULT_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("NOTETAKER_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(
                config::Environment::with_prefix("NOTETAKER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("api_url is required".to_string());
        }
        if !self.api_url.starts_with("http") {
            return Err("api_url must be a valid HTTP(S) URL".to_string());
        }
        reqwest::Url::parse(&self.api_url)
            .map_err(|e| format!("api_url is not a valid URL: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> Settings {
        Settings {
            api_url: url.to_string(),
        }
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(Settings::default().api_url, "http://localhost:3000");
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_and_non_http_urls() {
        assert!(with_url("").validate().is_err());
        assert!(with_url("ftp://notes.example.com").validate().is_err());
        assert!(with_url("http://").validate().is_err());
    }

    #[test]
    fn accepts_https() {
        assert!(with_url("https://notes.example.com").validate().is_ok());
    }
}
