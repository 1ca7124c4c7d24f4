use crate::encoder::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::error::{EncodeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one encoding run.
///
/// Loaded from an optional JSON file; any field missing from the file keeps
/// its default. Command-line flags are layered on top with [`Self::merge`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EncoderConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Where to write the JSON encoding report, if anywhere.
    pub report: Option<PathBuf>,
    /// Directory for rolling log files; console only when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            report: None,
            log_dir: None,
        }
    }
}

/// Values supplied on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl EncoderConfig {
    /// # Errors
    ///
    /// [`EncodeError::Io`] if the file cannot be read, [`EncodeError::Config`]
    /// if it is not valid JSON for this struct.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| EncodeError::io(path, source))?;
        Self::from_json(&content)
    }

    /// # Errors
    ///
    /// [`EncodeError::Config`] if `json` does not describe a config.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves the effective config: overrides, then `file`, then defaults.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::from_file`].
    pub fn load(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.merge(overrides))
    }

    #[must_use]
    pub fn merge(self, overrides: ConfigOverrides) -> Self {
        Self {
            input: overrides.input.unwrap_or(self.input),
            output: overrides.output.unwrap_or(self.output),
            report: overrides.report.or(self.report),
            log_dir: overrides.log_dir.or(self.log_dir),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_legacy_paths() {
        let config = EncoderConfig::default();
        assert_eq!(config.input, PathBuf::from("cleaned_heart_data.csv"));
        assert_eq!(
            config.output,
            PathBuf::from("transformed_heart_data_to_numerical.csv")
        );
        assert!(config.report.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() -> Result<()> {
        let config = EncoderConfig::from_json(r#"{ "output": "out.csv" }"#)?;
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        Ok(())
    }

    #[test]
    fn test_overrides_win() {
        let file = EncoderConfig {
            report: Some(PathBuf::from("file_report.json")),
            ..Default::default()
        };
        let merged = file.merge(ConfigOverrides {
            input: Some(PathBuf::from("other.csv")),
            ..Default::default()
        });
        assert_eq!(merged.input, PathBuf::from("other.csv"));
        assert_eq!(merged.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(merged.report, Some(PathBuf::from("file_report.json")));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = EncoderConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, EncodeError::Config(_)));
    }
}
