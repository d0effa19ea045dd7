//! TOML configuration.
//!
//! ```toml
//! [holidays]
//! substitute_rule = "cascade"
//! historical_gating = "effective-from"
//! ```
//!
//! Every table and key is optional; unknown keys are rejected.

use std::path::Path;

use serde::Deserialize;
use yamada_core::errors::{Error, Result};
use yamada_time::holidays::{HistoricalGating, HolidayRules, SubstituteRule};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "yamada.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YamadaConfig {
    /// Holiday computation rules.
    #[serde(default)]
    pub holidays: HolidayRules,
}

impl YamadaConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Load `path` if given; otherwise [`DEFAULT_CONFIG_FILE`] in `dir` if it
    /// exists; otherwise the defaults.
    ///
    /// An explicitly named file must exist.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            tracing::debug!("no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// The holiday rules after applying command-line overrides.
    pub fn rules_with(
        &self,
        substitute: Option<SubstituteRule>,
        gating: Option<HistoricalGating>,
    ) -> HolidayRules {
        HolidayRules {
            substitute: substitute.unwrap_or(self.holidays.substitute),
            gating: gating.unwrap_or(self.holidays.gating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_means_defaults() {
        let config = YamadaConfig::from_toml_str("").unwrap();
        assert_eq!(config, YamadaConfig::default());
        assert_eq!(config.holidays, HolidayRules::default());
    }

    #[test]
    fn partial_holidays_table() {
        let config = YamadaConfig::from_toml_str("[holidays]\nsubstitute_rule = \"cascade\"\n").unwrap();
        assert_eq!(config.holidays.substitute, SubstituteRule::Cascade);
        assert_eq!(config.holidays.gating, HistoricalGating::Uniform);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = YamadaConfig::from_toml_str("[holidays]\ncascade = true\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(YamadaConfig::from_toml_str("[calendar]\n").is_err());
        assert!(YamadaConfig::from_toml_str("[holidays]\nsubstitute_rule = \"always\"\n").is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let config = YamadaConfig::from_toml_str(
            "[holidays]\nsubstitute_rule = \"cascade\"\nhistorical_gating = \"effective-from\"\n",
        )
        .unwrap();
        let rules = config.rules_with(Some(SubstituteRule::NextDayOnly), None);
        assert_eq!(rules.substitute, SubstituteRule::NextDayOnly);
        assert_eq!(rules.gating, HistoricalGating::EffectiveFrom);
        assert_eq!(config.rules_with(None, None), HolidayRules::statutory());
    }
}
