use crate::core::error::VerseError;
use crate::course::Course;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

fn default_base_url() -> String {
    "http://127.0.0.1:5000/rag".to_string()
}

fn default_response_path() -> String {
    "professorResponse".to_string()
}

fn default_recommendation_path() -> String {
    "professorRecommendation".to_string()
}

/// Where the professor backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_response_path")]
    pub response_path: String,
    #[serde(default = "default_recommendation_path")]
    pub recommendation_path: String,
    /// No timeout unless set; a hung request leaves its turn unanswered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            response_path: default_response_path(),
            recommendation_path: default_recommendation_path(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    /// Course the session starts on. Falls back to English Literature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_course: Option<Course>,
}

impl Config {
    fn config_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join(".verse").join("config.yaml")
    }

    pub fn load() -> Result<Config, VerseError> {
        Self::load_from(&Self::config_path())
    }

    /// Reads the config at `path`, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load_from(path: &Path) -> Result<Config, VerseError> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config = Self::parse(&contents)
                .map_err(|e| VerseError::Config(format!("Parse {}: {}", path.display(), e)))?;
            debug!(path = %path.display(), "loaded config");
            return Ok(config);
        }

        let config = Config::default();
        match config.save_to(path) {
            Ok(()) => info!(path = %path.display(), "wrote default config"),
            Err(e) => debug!(path = %path.display(), error = %e, "could not write default config"),
        }
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Config, VerseError> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yml::from_str::<Config>(contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), VerseError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml_content = serde_yml::to_string(self)?;
        fs::write(path, yaml_content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000/rag");
        assert_eq!(config.api.response_path, "professorResponse");
        assert_eq!(config.api.recommendation_path, "professorRecommendation");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.default_course, None);
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let yaml = "api:\n  base_url: https://verse.example.edu/rag\n  timeout_secs: 30\ndefault_course: Milton\n";
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.api.base_url, "https://verse.example.edu/rag");
        assert_eq!(config.api.response_path, "professorResponse");
        assert_eq!(config.api.timeout_secs, Some(30));
        assert_eq!(config.default_course, Some(Course::Milton));
    }

    #[test]
    fn unknown_course_is_a_parse_error() {
        assert!(Config::parse("default_course: Chaucer\n").is_err());
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = std::env::temp_dir().join(format!("verse-config-{}", std::process::id()));
        let path = dir.join("config.yaml");
        let _ = fs::remove_dir_all(&dir);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
        let _ = fs::remove_dir_all(&dir);
    }
}
