//! Victory-condition evaluation.
//!
//! Given a snapshot of the roster, decide whether the game is over and who
//! won. Evaluation is a pure function of the roster and the evaluation
//! instant: nothing is cached and no player is mutated.
//!
//! ## Key Components
//!
//! - [`live_team_counts`] / [`group_by_affiliation`]: per-team views of the
//!   living roster
//! - [`VictoryRule`]: custom win predicates carried by roles
//! - [`RuleEvaluator`]: checks rules against a [`RuleContext`]
//! - [`VictoryEvaluator`]: the priority chain producing a [`Verdict`]
//!
//! ## Example Usage
//!
//! ```
//! use rust_mafia::core::{Player, VictoryConditions};
//! use rust_mafia::victory::{evaluate_victory, WinnerKind};
//!
//! let town = VictoryConditions::new().with_team("good");
//! let mafia = VictoryConditions::new().with_team("evil");
//!
//! let players = vec![
//!     Player::new("alice").with_affiliation("good").with_victory_conditions(town.clone()),
//!     Player::new("bob").with_affiliation("good").with_victory_conditions(town),
//!     Player::new("carol").with_affiliation("evil").with_victory_conditions(mafia).dead(),
//! ];
//!
//! let verdict = evaluate_victory(&players).unwrap();
//! assert_eq!(verdict.winner, WinnerKind::Good);
//! assert_eq!(verdict.players.len(), 2);
//! ```

mod evaluator;
mod rule;
mod teams;
mod verdict;

pub use evaluator::{evaluate_victory, evaluate_victory_at, VictoryEvaluator};
pub use rule::{Comparator, RuleContext, RuleEvaluator, VictoryRule};
pub use teams::{group_by_affiliation, live_team_counts, TeamCounts};
pub use verdict::{Verdict, WinnerKind};
