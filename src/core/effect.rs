//! Timed status effects attached to players.
//!
//! Effects are produced by role abilities (infection, protection, ...)
//! outside this crate. The engine only asks whether an effect of a given
//! type is still active at a given instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::player::Player;

/// Effect type identifier, e.g. `infected` or `protected`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectType(pub String);

impl EffectType {
    /// Create a new effect type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EffectType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EffectType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for EffectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A status effect with an optional expiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEffect {
    /// What kind of effect this is.
    #[serde(rename = "type")]
    pub effect_type: EffectType,

    /// When the effect stops applying. `None` means permanent.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl StatusEffect {
    /// Create a permanent effect.
    pub fn permanent(effect_type: impl Into<EffectType>) -> Self {
        Self {
            effect_type: effect_type.into(),
            expires_at: None,
        }
    }

    /// Create an effect that expires at `expires_at`.
    pub fn until(effect_type: impl Into<EffectType>, expires_at: DateTime<Utc>) -> Self {
        Self {
            effect_type: effect_type.into(),
            expires_at: Some(expires_at),
        }
    }

    /// Active means no expiry, or an expiry strictly after `now`.
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |expiry| expiry > now)
    }
}

/// Check whether `player` carries an active effect of `effect_type` at `now`.
#[must_use]
pub fn has_active_effect(player: &Player, effect_type: &EffectType, now: DateTime<Utc>) -> bool {
    player
        .effects
        .iter()
        .any(|effect| effect.effect_type == *effect_type && effect.is_active_at(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_permanent_effect_is_always_active() {
        let effect = StatusEffect::permanent("infected");
        assert!(effect.is_active_at(at(0)));
        assert!(effect.is_active_at(at(4_000_000_000)));
    }

    #[test]
    fn test_expiry_is_strict() {
        let now = at(1_700_000_000);
        let effect = StatusEffect::until("protected", now);

        assert!(!effect.is_active_at(now));
        assert!(effect.is_active_at(now - Duration::seconds(1)));
        assert!(!effect.is_active_at(now + Duration::seconds(1)));
    }

    #[test]
    fn test_has_active_effect_matches_type() {
        let now = at(1_700_000_000);
        let player = Player::new("p1")
            .with_effect(StatusEffect::until("protected", now - Duration::minutes(5)))
            .with_effect(StatusEffect::permanent("infected"));

        assert!(has_active_effect(&player, &"infected".into(), now));
        assert!(!has_active_effect(&player, &"protected".into(), now));
        assert!(!has_active_effect(&player, &"silenced".into(), now));
    }

    #[test]
    fn test_any_matching_entry_counts() {
        let now = at(1_700_000_000);
        let player = Player::new("p1")
            .with_effect(StatusEffect::until("infected", now - Duration::seconds(10)))
            .with_effect(StatusEffect::until("infected", now + Duration::seconds(10)));

        assert!(has_active_effect(&player, &"infected".into(), now));
    }

    #[test]
    fn test_effect_wire_form() {
        let json = r#"{"type":"infected","expiresAt":"2023-11-14T22:13:20Z"}"#;
        let effect: StatusEffect = serde_json::from_str(json).unwrap();
        assert_eq!(effect.effect_type, EffectType::new("infected"));
        assert_eq!(effect.expires_at, Some(at(1_700_000_000)));

        let permanent: StatusEffect = serde_json::from_str(r#"{"type":"blessed"}"#).unwrap();
        assert_eq!(permanent.expires_at, None);
    }
}
