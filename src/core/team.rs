//! Team tags.
//!
//! Teams are not hardcoded. Role configuration is data-driven, so a team
//! is an open string token. The engine only gives special meaning to the
//! tags named in [`VictoryConfig`](super::VictoryConfig), which default to
//! `good`, `evil` and `neutral`.

use serde::{Deserialize, Serialize};

/// A team affiliation tag such as `good`, `evil`, `neutral` or `solo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamTag(pub String);

impl TeamTag {
    /// Create a new team tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The default town-aligned team.
    pub fn good() -> Self {
        Self::new("good")
    }

    /// The default mafia-aligned team.
    pub fn evil() -> Self {
        Self::new("evil")
    }

    /// The default unaligned team.
    pub fn neutral() -> Self {
        Self::new("neutral")
    }

    /// Conventional tag for lone-wolf roles.
    pub fn solo() -> Self {
        Self::new("solo")
    }

    /// Get the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TeamTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TeamTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for TeamTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
