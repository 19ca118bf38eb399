//! Player identification and the read-only player view.
//!
//! ## PlayerId
//!
//! Opaque player identifier handed over by the game-state subsystem.
//!
//! ## Player
//!
//! Everything the victory evaluator reads about a player: life status,
//! team affiliations, status effects and the role's win predicates.
//! Field names follow the camelCase wire form used by game-state
//! snapshots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::StatusEffect;
use super::team::TeamTag;
use super::wire::null_as_default;
use crate::roles::RolePreset;
use crate::victory::VictoryRule;

/// Team tag list. Most players carry one or two tags.
pub type TeamList = SmallVec<[TeamTag; 2]>;

/// Opaque unique player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A role's win predicates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VictoryConditions {
    /// Coalitions this player is credited with when they win.
    ///
    /// Winnership is by capability, not affiliation: a neutral diplomat
    /// listing `good` here wins alongside the town.
    #[serde(default, deserialize_with = "null_as_default")]
    pub can_win_with_teams: TeamList,

    /// Wins by being the last player alive.
    #[serde(default, deserialize_with = "null_as_default")]
    pub solo_win: bool,

    /// Custom predicates, all of which must hold for a custom win.
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_rules: Vec<VictoryRule>,
}

impl VictoryConditions {
    /// Conditions with no way to win.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a coalition this player can win with.
    #[must_use]
    pub fn with_team(mut self, team: impl Into<TeamTag>) -> Self {
        let team = team.into();
        if !self.can_win_with_teams.contains(&team) {
            self.can_win_with_teams.push(team);
        }
        self
    }

    /// Mark as a last-player-standing role.
    #[must_use]
    pub fn solo(mut self) -> Self {
        self.solo_win = true;
        self
    }

    /// Append a custom rule.
    #[must_use]
    pub fn with_rule(mut self, rule: VictoryRule) -> Self {
        self.custom_rules.push(rule);
        self
    }

    /// Check whether the player can be credited with `team`'s win.
    #[must_use]
    pub fn can_win_with(&self, team: &TeamTag) -> bool {
        self.can_win_with_teams.contains(team)
    }

    #[must_use]
    pub fn has_custom_rules(&self) -> bool {
        !self.custom_rules.is_empty()
    }
}

/// Read-only player view consumed by the evaluator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique identifier.
    pub id: PlayerId,

    /// Life status.
    pub alive: bool,

    /// Team tags, in order of first appearance.
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliations: TeamList,

    /// Status effects, in application order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub effects: Vec<StatusEffect>,

    /// Win predicates of the player's role.
    #[serde(default, deserialize_with = "null_as_default")]
    pub victory_conditions: VictoryConditions,
}

impl Player {
    /// Create a living player with no affiliations, effects or win predicates.
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            alive: true,
            affiliations: TeamList::new(),
            effects: Vec::new(),
            victory_conditions: VictoryConditions::default(),
        }
    }

    /// Create a living player configured from a role preset.
    pub fn from_role(id: impl Into<PlayerId>, role: RolePreset) -> Self {
        let mut player = Self::new(id).with_victory_conditions(role.victory_conditions());
        for team in role.affiliations() {
            player = player.with_affiliation(team);
        }
        player
    }

    /// Add a team affiliation (builder pattern). Duplicates are ignored.
    #[must_use]
    pub fn with_affiliation(mut self, team: impl Into<TeamTag>) -> Self {
        let team = team.into();
        if !self.affiliations.contains(&team) {
            self.affiliations.push(team);
        }
        self
    }

    /// Attach a status effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: StatusEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Replace the win predicates (builder pattern).
    #[must_use]
    pub fn with_victory_conditions(mut self, conditions: VictoryConditions) -> Self {
        self.victory_conditions = conditions;
        self
    }

    /// Mark the player as dead (builder pattern).
    #[must_use]
    pub fn dead(mut self) -> Self {
        self.alive = false;
        self
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Check whether the player carries `team`.
    #[must_use]
    pub fn has_affiliation(&self, team: &TeamTag) -> bool {
        self.affiliations.contains(team)
    }
}
