use std::path::{Path, PathBuf};

use rotomatch::Grouping;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Which search to run on each board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest score, earliest move on ties.
    #[default]
    Best,
    /// Earliest move that qualifies.
    First,
}

/// Solver settings, loadable from TOML. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Smallest group worth counting, and smallest score worth playing.
    pub min_score: isize,
    pub strategy: Strategy,
    pub grouping: Grouping,
    /// Board shape to expect. When unset, the first board read decides.
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            min_score: 3,
            strategy: Strategy::default(),
            grouping: Grouping::default(),
            width: None,
            height: None,
        }
    }
}

impl SolverConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SolverConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, side) in [("width", self.width), ("height", self.height)] {
            if side == Some(0) {
                return Err(ConfigError::Validation(format!("{name} must be > 0")));
            }
        }
        if self.width.is_some() != self.height.is_some() {
            return Err(ConfigError::Validation("width and height must be set together".into()));
        }
        Ok(())
    }

    /// The configured board shape, if any.
    pub fn board_dims(&self) -> Option<(usize, usize)> {
        self.width.zip(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SolverConfig = toml::from_str("grouping = \"union-find\"").unwrap();
        assert_eq!(config.grouping, Grouping::UnionFind);
        assert_eq!(config.min_score, 3);
        assert_eq!(config.strategy, Strategy::Best);
        assert_eq!(config.board_dims(), None);
    }

    #[test]
    fn test_full_toml() {
        let config: SolverConfig = toml::from_str(
            "min_score = 4\nstrategy = \"first\"\ngrouping = \"reference\"\nwidth = 7\nheight = 6\n",
        )
        .unwrap();
        assert_eq!(config.min_score, 4);
        assert_eq!(config.strategy, Strategy::First);
        assert_eq!(config.board_dims(), Some((7, 6)));
    }

    #[test]
    fn test_validation_rejects_zero_side() {
        let config = SolverConfig { width: Some(0), height: Some(6), ..Default::default() };
        assert_eq!(config.validate().unwrap_err().to_string(), "config validation error: width must be > 0");
    }

    #[test]
    fn test_validation_rejects_half_shape() {
        let config = SolverConfig { width: Some(7), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_grouping_is_a_parse_error() {
        let result = toml::from_str::<SolverConfig>("grouping = \"bogus\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SolverConfig::load_or_default(Path::new("/nonexistent/rotomatch.toml")).unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rotomatch.toml");
        std::fs::write(&path, "min_score = 5\nwidth = 4\nheight = 2\n").unwrap();

        let config = SolverConfig::load(&path).unwrap();
        assert_eq!(config.min_score, 5);
        assert_eq!(config.board_dims(), Some((4, 2)));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rotomatch.toml");
        std::fs::write(&path, "height = 0\nwidth = 3\n").unwrap();

        assert!(matches!(SolverConfig::load(&path), Err(ConfigError::Validation(_))));
    }
}
