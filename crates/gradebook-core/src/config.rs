//! Gradebook configuration.
//!
//! All settings are optional; a missing config file means defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::console::ScorePolicy;
use crate::model::RecordKind;
use crate::render::OutputFormat;

/// File name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "gradebook.toml";

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Line printed between input and display.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Handling of malformed score input.
    #[serde(default)]
    pub score_policy: ScorePolicy,
    /// Output format for the final listing.
    #[serde(default)]
    pub format: OutputFormat,
    /// Kinds prompted for, in order.
    #[serde(default = "default_order")]
    pub order: Vec<RecordKind>,
}

fn default_separator() -> String {
    "-".repeat(33)
}

fn default_order() -> Vec<RecordKind> {
    RecordKind::ALL.to_vec()
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            score_policy: ScorePolicy::default(),
            format: OutputFormat::default(),
            order: default_order(),
        }
    }
}

/// Parse a configuration from TOML text.
pub fn parse_config(content: &str) -> Result<GradebookConfig> {
    let config: GradebookConfig = toml::from_str(content).context("invalid gradebook config")?;
    if config.order.is_empty() {
        anyhow::bail!("config `order` must name at least one record kind");
    }
    Ok(config)
}

/// Load config from an explicit path, or from `gradebook.toml` in the
/// current directory if present, or fall back to defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(GradebookConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = GradebookConfig::default();
        assert_eq!(config.separator, "---------------------------------");
        assert_eq!(config.score_policy, ScorePolicy::Reject);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(
            config.order,
            vec![RecordKind::Test, RecordKind::Exam, RecordKind::FinalExam]
        );
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
score_policy = "reprompt"
order = ["exam", "final_exam"]
"#,
        )
        .unwrap();
        assert_eq!(config.score_policy, ScorePolicy::Reprompt);
        assert_eq!(config.order, vec![RecordKind::Exam, RecordKind::FinalExam]);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.separator.len(), 33);
    }

    #[test]
    fn parse_rejects_empty_order() {
        assert!(parse_config("order = []").is_err());
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        assert!(parse_config(r#"order = ["quiz"]"#).is_err());
    }

    #[test]
    fn load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "format = \"json\"\nseparator = \"===\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.separator, "===");
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
