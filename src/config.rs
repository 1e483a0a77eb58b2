//! Detector configuration, optionally loaded from a TOML file.

use std::path::Path;

use serde::Deserialize;

use crate::index::RecordPolicy;
use crate::types::{MatchError, MatchResult};

/// Tuple size used when neither the command line nor a config file sets one.
pub const DEFAULT_TUPLE_SIZE: usize = 3;

/// Settings for a detection run.
///
/// ```toml
/// tuple_size = 2
/// record_policy = "skip"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Words per tuple.
    pub tuple_size: usize,
    /// Handling of blank lines in the synonym file.
    pub record_policy: RecordPolicy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            tuple_size: DEFAULT_TUPLE_SIZE,
            record_policy: RecordPolicy::default(),
        }
    }
}

impl DetectorConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> MatchResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| MatchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> MatchResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> MatchResult<()> {
        if self.tuple_size == 0 {
            return Err(MatchError::InvalidTupleSize(self.tuple_size));
        }
        Ok(())
    }
}
