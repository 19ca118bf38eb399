//! Errors raised at the crate boundary.
//!
//! The evaluator itself never fails. Loading configuration and validating
//! roster snapshots before evaluation can.

use thiserror::Error;

use super::player::PlayerId;
use super::team::TeamTag;

/// Errors from loading or validating a [`VictoryConfig`](super::VictoryConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Team tag for {0} must not be empty")]
    EmptyTeamTag(&'static str),

    #[error("Team tag {0} is used for more than one coalition")]
    DuplicateCoalitionTag(TeamTag),
}

/// Errors from loading or validating a roster snapshot.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),

    #[error("{player} is affiliated with unknown team {team}")]
    UnknownTeam { player: PlayerId, team: TeamTag },

    #[error("{player} has a victory condition naming unknown team {team}")]
    UnknownRuleTeam { player: PlayerId, team: TeamTag },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type RosterResult<T> = std::result::Result<T, RosterError>;
