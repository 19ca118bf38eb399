//! Team aggregation over the living roster.
//!
//! Both views are recomputed from the full player list on every
//! evaluation; nothing is cached between calls. Dead players are ignored.

use rustc_hash::FxHashMap;

use crate::core::{Player, TeamTag};

/// Alive-count per team.
///
/// Teams nobody living carries are absent and read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamCounts {
    counts: FxHashMap<TeamTag, usize>,
}

impl TeamCounts {
    /// Alive-count for `team`, 0 if unknown.
    #[must_use]
    pub fn get(&self, team: &TeamTag) -> usize {
        self.counts.get(team).copied().unwrap_or(0)
    }

    /// Alive-count for an optional team. A missing team reads as 0.
    #[must_use]
    pub fn get_opt(&self, team: Option<&TeamTag>) -> usize {
        team.map_or(0, |team| self.get(team))
    }

    /// Number of distinct teams with at least one living member.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.counts.len()
    }
}

/// Count living players per team.
///
/// A player with N distinct affiliations contributes to N counts.
#[must_use]
pub fn live_team_counts(players: &[Player]) -> TeamCounts {
    let mut counts: FxHashMap<TeamTag, usize> = FxHashMap::default();

    for player in players.iter().filter(|p| p.alive) {
        for (i, team) in player.affiliations.iter().enumerate() {
            // A tag repeated within one player's list counts once.
            if player.affiliations[..i].contains(team) {
                continue;
            }
            *counts.entry(team.clone()).or_insert(0) += 1;
        }
    }

    TeamCounts { counts }
}

/// Group living players by team, keeping input order within each team.
#[must_use]
pub fn group_by_affiliation(players: &[Player]) -> FxHashMap<TeamTag, Vec<&Player>> {
    let mut groups: FxHashMap<TeamTag, Vec<&Player>> = FxHashMap::default();

    for player in players.iter().filter(|p| p.alive) {
        for (i, team) in player.affiliations.iter().enumerate() {
            if player.affiliations[..i].contains(team) {
                continue;
            }
            groups.entry(team.clone()).or_default().push(player);
        }
    }

    groups
}
