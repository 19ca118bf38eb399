//! # rust-mafia
//!
//! Victory-condition evaluation for Mafia/Werewolf-style social deduction
//! games.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Evaluation is a function of the roster snapshot and one
//!    clock reading. No state survives between calls, no player is mutated.
//!
//! 2. **Data-Driven Teams**: Team tags are open strings. Only the tags named
//!    in `VictoryConfig` carry meaning for the coalition tiers.
//!
//! 3. **Fail Closed**: Unknown rule kinds, unknown comparators and missing
//!    fields never grant a win.
//!
//! ## Architecture
//!
//! The surrounding game engine owns the players, runs night actions and
//! votes, then calls the evaluator after each death or effect change. The
//! evaluator answers with `Some(Verdict)` when the game has ended and
//! `None` when it continues.
//!
//! ## Modules
//!
//! - `core`: Players, team tags, status effects, configuration, errors
//! - `victory`: Team aggregation, custom rules, the verdict priority chain
//! - `roster`: Snapshot loading and team-tag validation at the boundary
//! - `roles`: Presets for common roles

pub mod core;
pub mod victory;
pub mod roster;
pub mod roles;

// Re-export commonly used types
pub use crate::core::{
    EffectType, StatusEffect, Player, PlayerId, TeamTag, VictoryConditions,
    VictoryConfig, ConfigError, RosterError,
};

pub use crate::victory::{
    evaluate_victory, evaluate_victory_at, live_team_counts, group_by_affiliation,
    Comparator, RuleContext, RuleEvaluator, TeamCounts, Verdict, VictoryEvaluator,
    VictoryRule, WinnerKind,
};

pub use crate::roster::{Roster, TeamRoster};

pub use crate::roles::RolePreset;
