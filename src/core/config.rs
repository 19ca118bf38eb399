//! Victory configuration.
//!
//! The engine never hardcodes team names. The coalition tiers and the
//! default opponent of a parity rule refer to the tags configured here:
//! - `good_team`: town coalition (default `good`)
//! - `evil_team`: mafia coalition (default `evil`)
//! - `neutral_team`: unaligned players that keep the town alive (default `neutral`)
//!
//! Configs can be built in code or loaded from JSON or TOML:
//!
//! ```
//! use rust_mafia::core::VictoryConfig;
//!
//! let config = VictoryConfig::from_toml_str(r#"
//!     good_team = "village"
//!     evil_team = "wolves"
//! "#).unwrap();
//!
//! assert_eq!(config.good_team.as_str(), "village");
//! assert_eq!(config.neutral_team.as_str(), "neutral");
//! ```

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::team::TeamTag;

/// Team tags with special meaning to the evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VictoryConfig {
    /// Coalition credited by the good-win tier.
    pub good_team: TeamTag,

    /// Coalition credited by the evil-win tier.
    pub evil_team: TeamTag,

    /// Living members of this team let the good tier fire with no good
    /// players left.
    pub neutral_team: TeamTag,
}

impl Default for VictoryConfig {
    fn default() -> Self {
        Self {
            good_team: TeamTag::good(),
            evil_team: TeamTag::evil(),
            neutral_team: TeamTag::neutral(),
        }
    }
}

impl VictoryConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from TOML.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the good coalition tag.
    #[must_use]
    pub fn with_good_team(mut self, team: impl Into<TeamTag>) -> Self {
        self.good_team = team.into();
        self
    }

    /// Set the evil coalition tag.
    #[must_use]
    pub fn with_evil_team(mut self, team: impl Into<TeamTag>) -> Self {
        self.evil_team = team.into();
        self
    }

    /// Set the neutral team tag.
    #[must_use]
    pub fn with_neutral_team(mut self, team: impl Into<TeamTag>) -> Self {
        self.neutral_team = team.into();
        self
    }

    /// Check that all tags are non-empty and the coalitions are distinct.
    pub fn validate(&self) -> ConfigResult<()> {
        let named = [
            ("good_team", &self.good_team),
            ("evil_team", &self.evil_team),
            ("neutral_team", &self.neutral_team),
        ];

        for (field, tag) in named {
            if tag.is_empty() {
                return Err(ConfigError::EmptyTeamTag(field));
            }
        }

        for (i, (_, tag)) in named.iter().enumerate() {
            if named[..i].iter().any(|(_, earlier)| earlier == tag) {
                return Err(ConfigError::DuplicateCoalitionTag((*tag).clone()));
            }
        }

        Ok(())
    }
}
