//! Configuration management for the resume match client

use crate::error::{MatchClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub output: OutputConfig,
    /// Roles offered by the job role selector.
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    /// Unset means the client waits for the network layer to resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub counter_step_ms: u64,
    pub color_output: bool,
    #[serde(default)]
    pub default_location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub include_styles: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Html,
}

const DEFAULT_ROLES: [&str; 10] = [
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "Web Developer",
    "DevOps Engineer",
    "Full Stack Developer",
    "Machine Learning Engineer",
    "Cybersecurity Analyst",
    "Cloud Architect",
    "Business Analyst",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: "http://127.0.0.1:5000".to_string(),
                timeout_secs: None,
            },
            ui: UiConfig {
                counter_step_ms: 10,
                color_output: true,
                default_location: String::new(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                include_styles: true,
            },
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load the file at `path`, writing defaults there on first use.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| MatchClientError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatchClientError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-match")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        let url = self.server.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(MatchClientError::Configuration(format!(
                "server.base_url must be an http(s) URL, got '{}'",
                self.server.base_url
            )));
        }
        if self.ui.counter_step_ms == 0 {
            return Err(MatchClientError::Configuration(
                "ui.counter_step_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Set a single value addressed as `section.key`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "server.base_url" => self.server.base_url = value.trim_end_matches('/').to_string(),
            "server.timeout_secs" => {
                self.server.timeout_secs = if value.is_empty() || value == "none" {
                    None
                } else {
                    Some(parse_number(key, value)?)
                }
            }
            "ui.counter_step_ms" => self.ui.counter_step_ms = parse_number(key, value)?,
            "ui.color_output" => self.ui.color_output = parse_bool(key, value)?,
            "ui.default_location" => self.ui.default_location = value.to_string(),
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(MatchClientError::Configuration)?
            }
            "output.include_styles" => self.output.include_styles = parse_bool(key, value)?,
            _ => {
                return Err(MatchClientError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        self.validate()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role.trim()))
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| MatchClientError::Configuration(format!("{} expects a number, got '{}'", key, value)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(MatchClientError::Configuration(format!(
            "{} expects true or false, got '{}'",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.ui.counter_step_ms, 10);
        assert_eq!(created.roles.len(), 10);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.server.base_url, "http://127.0.0.1:5000");
        assert!(reloaded.server.timeout_secs.is_none());
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("server.base_url", "https://match.example.com/").unwrap();
        config.set_value("ui.counter_step_ms", "25").unwrap();
        config.set_value("output.format", "html").unwrap();

        assert_eq!(config.server.base_url, "https://match.example.com");
        assert_eq!(config.ui.counter_step_ms, 25);
        assert_eq!(config.output.format, OutputFormat::Html);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set_value("ui.counter_step_ms", "0").is_err());
        assert!(config.set_value("ui.color_output", "maybe").is_err());
        assert!(config.set_value("nope", "1").is_err());
    }

    #[test]
    fn test_role_lookup_ignores_case() {
        let config = Config::default();
        assert!(config.has_role("devops engineer"));
        assert!(!config.has_role("Astronaut"));
    }
}
