//! Boundary helpers around the evaluator.
//!
//! The evaluator takes any slice of players. Before a snapshot reaches
//! it, the game-state subsystem can load it from its JSON wire form
//! ([`Roster`]) and check it against the teams of the running game
//! ([`TeamRoster`]).

mod snapshot;
mod validate;

pub use snapshot::Roster;
pub use validate::TeamRoster;
