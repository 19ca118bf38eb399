//! Core data model: players, teams, status effects, configuration, errors.
//!
//! These are the read-only inputs of the victory evaluator. The game-state
//! subsystem owns and mutates them; the engine only borrows.

pub mod player;
pub mod team;
pub mod effect;
pub mod config;
pub mod error;
pub(crate) mod wire;

pub use player::{Player, PlayerId, TeamList, VictoryConditions};
pub use team::TeamTag;
pub use effect::{has_active_effect, EffectType, StatusEffect};
pub use config::VictoryConfig;
pub use error::{ConfigError, ConfigResult, RosterError, RosterResult};
