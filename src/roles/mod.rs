//! Common role presets.
//!
//! Role configuration is normally data-driven. These presets cover the
//! classic Mafia roster so moderators and tests can set up a game without
//! writing victory conditions by hand:
//! - `Villager` / `Mafioso`: plain coalition members
//! - `SerialKiller`: wins only as the last player standing
//! - `Survivor`: neutral, wins alone or alongside whichever coalition wins
//! - `Diplomat`: neutral, credited with a town win
//! - `Infector`: neutral, wins once every other living player is infected

mod presets;

pub use presets::{RolePreset, INFECTED};
