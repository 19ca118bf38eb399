//! Roster snapshots handed over by the game-state subsystem.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, RosterError, RosterResult};
use crate::victory::{Verdict, VictoryEvaluator, VictoryRule};

/// An ordered, fully materialized list of players.
///
/// Order matters: solo and custom tiers scan players in roster order, and
/// verdicts list winners in roster order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster, rejecting duplicate player ids.
    ///
    /// Custom rules that can never hold are logged here, once per load,
    /// rather than on every evaluation.
    pub fn new(players: Vec<Player>) -> RosterResult<Self> {
        let mut seen: FxHashSet<&PlayerId> = FxHashSet::default();
        for player in &players {
            if !seen.insert(&player.id) {
                return Err(RosterError::DuplicatePlayer(player.id.clone()));
            }
        }

        let roster = Self { players };
        for (player, rule) in roster.unrecognised_rules() {
            tracing::warn!(%player, ?rule, "unrecognised victory rule will never hold");
        }
        Ok(roster)
    }

    /// Load a roster from a JSON array of players in wire form.
    pub fn from_json(json: &str) -> RosterResult<Self> {
        let players: Vec<Player> = serde_json::from_str(json)?;
        Self::new(players)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    /// Number of living players.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.alive).count()
    }

    /// Custom rules with an unknown kind or comparator, in roster order.
    pub fn unrecognised_rules(&self) -> impl Iterator<Item = (&PlayerId, &VictoryRule)> {
        self.players.iter().flat_map(|player| {
            player
                .victory_conditions
                .custom_rules
                .iter()
                .filter(|rule| rule.is_unrecognised())
                .map(move |rule| (&player.id, rule))
        })
    }

    /// Run `evaluator` against this snapshot at the current time.
    #[must_use]
    pub fn evaluate(&self, evaluator: &VictoryEvaluator) -> Option<Verdict> {
        evaluator.evaluate(&self.players)
    }
}
