//! Boundary validation of team tags.
//!
//! The evaluator tolerates any tag: an unknown team simply has no living
//! members. A typo in role configuration would then silently change who
//! can win, so callers check rosters against the teams of the current game
//! before evaluating.

use rustc_hash::FxHashSet;

use crate::core::{Player, PlayerId, RosterError, RosterResult, TeamTag, VictoryConfig};

/// The set of teams that exist in a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamRoster {
    teams: FxHashSet<TeamTag>,
}

impl TeamRoster {
    /// Create a team roster from a list of tags.
    pub fn new(teams: impl IntoIterator<Item = impl Into<TeamTag>>) -> Self {
        Self {
            teams: teams.into_iter().map(Into::into).collect(),
        }
    }

    /// The coalition teams named in `config`.
    pub fn from_config(config: &VictoryConfig) -> Self {
        Self::new([
            config.good_team.clone(),
            config.evil_team.clone(),
            config.neutral_team.clone(),
        ])
    }

    /// Add a team (builder pattern).
    #[must_use]
    pub fn with_team(mut self, team: impl Into<TeamTag>) -> Self {
        self.teams.insert(team.into());
        self
    }

    #[must_use]
    pub fn contains(&self, team: &TeamTag) -> bool {
        self.teams.contains(team)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Check player ids are unique and every team tag is known.
    ///
    /// Affiliations, `canWinWithTeams` and team fields of custom rules are
    /// all checked. Reports the first problem in roster order.
    pub fn validate(&self, players: &[Player]) -> RosterResult<()> {
        let mut seen: FxHashSet<&PlayerId> = FxHashSet::default();

        for player in players {
            if !seen.insert(&player.id) {
                return Err(RosterError::DuplicatePlayer(player.id.clone()));
            }

            if let Some(team) = player.affiliations.iter().find(|t| !self.contains(t)) {
                return Err(RosterError::UnknownTeam {
                    player: player.id.clone(),
                    team: team.clone(),
                });
            }

            let conditions = &player.victory_conditions;
            let rule_teams = conditions
                .custom_rules
                .iter()
                .flat_map(|rule| rule.teams());
            let unknown = conditions
                .can_win_with_teams
                .iter()
                .chain(rule_teams)
                .find(|t| !self.contains(t));

            if let Some(team) = unknown {
                return Err(RosterError::UnknownRuleTeam {
                    player: player.id.clone(),
                    team: team.clone(),
                });
            }
        }

        Ok(())
    }
}
