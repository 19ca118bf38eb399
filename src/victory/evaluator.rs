//! Victory resolution.
//!
//! The evaluator walks a fixed priority chain and returns the first
//! verdict found:
//!
//! 1. Nobody alive: draw.
//! 2. A solo role is the only living player.
//! 3. Living players whose custom rules all hold.
//! 4. Good coalition: evil wiped out while good or neutral players live.
//! 5. Evil coalition: good wiped out, or evil at parity or majority.
//!
//! A coalition condition with nobody able to claim it is not a verdict
//! and falls through to the next tier. `None` means the game continues.
//!
//! Solo and custom roles are checked first because their survival keeps
//! a coalition verdict from being final.

use chrono::{DateTime, Utc};

use crate::core::{Player, PlayerId, TeamList, TeamTag, VictoryConfig};

use super::rule::{RuleContext, RuleEvaluator};
use super::teams::{live_team_counts, TeamCounts};
use super::verdict::{Verdict, WinnerKind};

/// Stateless victory evaluator.
///
/// Holds only the team tags the coalition tiers refer to. Every call
/// recomputes team counts from the given roster.
#[derive(Clone, Debug, Default)]
pub struct VictoryEvaluator {
    config: VictoryConfig,
}

impl VictoryEvaluator {
    /// Create an evaluator with the given team configuration.
    pub fn new(config: VictoryConfig) -> Self {
        Self { config }
    }

    /// Get the team configuration.
    #[must_use]
    pub fn config(&self) -> &VictoryConfig {
        &self.config
    }

    /// Evaluate the roster at the current wall-clock time.
    ///
    /// The clock is read once, so every effect expiry in this call is
    /// judged against the same instant.
    #[must_use]
    pub fn evaluate(&self, players: &[Player]) -> Option<Verdict> {
        self.evaluate_at(players, Utc::now())
    }

    /// Evaluate the roster with effect expiry judged at `now`.
    #[must_use]
    pub fn evaluate_at(&self, players: &[Player], now: DateTime<Utc>) -> Option<Verdict> {
        let alive: Vec<&Player> = players.iter().filter(|p| p.alive).collect();

        if alive.is_empty() {
            tracing::debug!(roster = players.len(), "no living players, game is a draw");
            return Some(Verdict::draw());
        }

        if let Some(verdict) = Self::solo_win(&alive) {
            return Some(verdict);
        }

        let counts = live_team_counts(players);
        let ctx =
            RuleContext::new(&counts, players, now).with_parity_default(&self.config.good_team);

        Self::custom_win(&alive, &ctx)
            .or_else(|| self.good_win(&alive, &counts))
            .or_else(|| self.evil_win(&alive, &counts))
            .or_else(|| {
                tracing::trace!(alive = alive.len(), "no verdict, game continues");
                None
            })
    }

    fn solo_win(alive: &[&Player]) -> Option<Verdict> {
        match alive {
            [last] if last.victory_conditions.solo_win => {
                tracing::debug!(player = %last.id, "solo win by last player standing");
                Some(Verdict::new(
                    WinnerKind::Solo,
                    vec![last.id.clone()],
                    last.affiliations.clone(),
                ))
            }
            _ => None,
        }
    }

    fn custom_win(alive: &[&Player], ctx: &RuleContext) -> Option<Verdict> {
        let satisfied: Vec<&Player> = alive
            .iter()
            .copied()
            .filter(|p| p.victory_conditions.has_custom_rules())
            .filter(|p| {
                let ctx = ctx.clone().with_self(&p.id);
                RuleEvaluator::evaluate_all(&p.victory_conditions.custom_rules, &ctx)
            })
            .collect();

        let trigger = satisfied.first()?;
        let teams: TeamList = trigger.affiliations.clone();
        let winners: Vec<PlayerId> = satisfied.iter().map(|p| p.id.clone()).collect();

        tracing::debug!(
            trigger = %trigger.id,
            winners = winners.len(),
            "custom victory rules satisfied"
        );
        Some(Verdict::new(WinnerKind::Custom, winners, teams))
    }

    fn good_win(&self, alive: &[&Player], counts: &TeamCounts) -> Option<Verdict> {
        let good = &self.config.good_team;
        let evil_alive = counts.get(&self.config.evil_team);
        let good_alive = counts.get(good);
        let neutral_alive = counts.get(&self.config.neutral_team);

        if evil_alive != 0 || (good_alive == 0 && neutral_alive == 0) {
            return None;
        }

        Self::coalition_win(WinnerKind::Good, alive, good)
    }

    fn evil_win(&self, alive: &[&Player], counts: &TeamCounts) -> Option<Verdict> {
        let evil = &self.config.evil_team;
        let good_alive = counts.get(&self.config.good_team);
        let evil_alive = counts.get(evil);

        if good_alive != 0 && evil_alive < good_alive {
            return None;
        }

        Self::coalition_win(WinnerKind::Evil, alive, evil)
    }

    fn coalition_win(kind: WinnerKind, alive: &[&Player], team: &TeamTag) -> Option<Verdict> {
        let winners: Vec<PlayerId> = alive
            .iter()
            .filter(|p| p.victory_conditions.can_win_with(team))
            .map(|p| p.id.clone())
            .collect();

        if winners.is_empty() {
            tracing::trace!(%team, "coalition condition met but nobody can claim it");
            return None;
        }

        tracing::debug!(%kind, winners = winners.len(), "coalition victory");
        Some(Verdict::coalition(kind, winners, team.clone()))
    }
}

/// Evaluate with the default team tags at the current time.
#[must_use]
pub fn evaluate_victory(players: &[Player]) -> Option<Verdict> {
    VictoryEvaluator::default().evaluate(players)
}

/// Evaluate with the default team tags at `now`.
#[must_use]
pub fn evaluate_victory_at(players: &[Player], now: DateTime<Utc>) -> Option<Verdict> {
    VictoryEvaluator::default().evaluate_at(players, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StatusEffect, VictoryConditions};
    use crate::victory::rule::{Comparator, VictoryRule};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn good(id: &str) -> Player {
        Player::new(id)
            .with_affiliation("good")
            .with_victory_conditions(VictoryConditions::new().with_team("good"))
    }

    fn evil(id: &str) -> Player {
        Player::new(id)
            .with_affiliation("evil")
            .with_victory_conditions(VictoryConditions::new().with_team("evil"))
    }

    fn ids(verdict: &Verdict) -> Vec<&str> {
        verdict.players.iter().map(PlayerId::as_str).collect()
    }

    #[test]
    fn test_empty_roster_is_draw() {
        assert_eq!(evaluate_victory_at(&[], now()), Some(Verdict::draw()));
    }

    #[test]
    fn test_solo_requires_sole_survivor() {
        let killer = Player::new("sk")
            .with_affiliation("solo")
            .with_victory_conditions(VictoryConditions::new().solo());

        let verdict = evaluate_victory_at(&[killer.clone(), good("g1").dead()], now()).unwrap();
        assert_eq!(verdict.winner, WinnerKind::Solo);
        assert_eq!(ids(&verdict), vec!["sk"]);
        assert_eq!(verdict.teams.as_slice(), &[TeamTag::solo()]);

        // Another survivor blocks the solo win; evil alive blocks good.
        assert_eq!(evaluate_victory_at(&[killer, good("g1"), good("g2"), evil("e1")], now()), None);
    }

    #[test]
    fn test_custom_collects_every_satisfied_player() {
        let infector = |id: &str| {
            Player::new(id)
                .with_affiliation("neutral")
                .with_effect(StatusEffect::permanent("infected"))
                .with_victory_conditions(
                    VictoryConditions::new().with_rule(VictoryRule::all_others_have("infected")),
                )
        };
        let players = vec![
            good("g1").with_effect(StatusEffect::permanent("infected")),
            infector("i1"),
            infector("i2"),
            evil("e1").with_effect(StatusEffect::permanent("infected")),
        ];

        let verdict = evaluate_victory_at(&players, now()).unwrap();
        assert_eq!(verdict.winner, WinnerKind::Custom);
        assert_eq!(ids(&verdict), vec!["i1", "i2"]);
        assert_eq!(verdict.teams.as_slice(), &[TeamTag::neutral()]);
    }

    #[test]
    fn test_first_satisfied_player_labels_teams() {
        let players = vec![
            good("g1").with_victory_conditions(
                VictoryConditions::new().with_rule(VictoryRule::alive_at_least("good", 1)),
            ),
            evil("e1").with_affiliation("coven").with_victory_conditions(
                VictoryConditions::new()
                    .with_rule(VictoryRule::parity("evil", Comparator::AtLeast)),
            ),
        ];

        let verdict = evaluate_victory_at(&players, now()).unwrap();
        assert_eq!(ids(&verdict), vec!["g1", "e1"]);
        assert_eq!(verdict.teams.as_slice(), &[TeamTag::good()]);
    }

    #[test]
    fn test_unsatisfied_custom_falls_through() {
        let players = vec![
            good("g1"),
            Player::new("n1").with_affiliation("neutral").with_victory_conditions(
                VictoryConditions::new().with_rule(VictoryRule::eliminate("good")),
            ),
        ];

        let verdict = evaluate_victory_at(&players, now()).unwrap();
        assert_eq!(verdict.winner, WinnerKind::Good);
        assert_eq!(ids(&verdict), vec!["g1"]);
    }

    #[test]
    fn test_good_win_credits_capability_not_tag() {
        let diplomat = Player::new("d1")
            .with_affiliation("neutral")
            .with_victory_conditions(VictoryConditions::new().with_team("good"));
        let players = vec![good("g1"), diplomat, evil("e1").dead()];

        let verdict = evaluate_victory_at(&players, now()).unwrap();
        assert_eq!(verdict.winner, WinnerKind::Good);
        assert_eq!(ids(&verdict), vec!["g1", "d1"]);
        assert_eq!(verdict.teams.as_slice(), &[TeamTag::good()]);
    }

    #[test]
    fn test_neutral_only_without_claimant_continues() {
        let players = vec![
            Player::new("n1").with_affiliation("neutral"),
            Player::new("n2").with_affiliation("neutral"),
            good("g1").dead(),
            evil("e1").dead(),
        ];

        assert_eq!(evaluate_victory_at(&players, now()), None);
    }

    #[test]
    fn test_evil_parity_is_inclusive() {
        let verdict = evaluate_victory_at(&[good("g1"), evil("e1")], now()).unwrap();
        assert_eq!(verdict.winner, WinnerKind::Evil);
        assert_eq!(ids(&verdict), vec!["e1"]);

        assert_eq!(evaluate_victory_at(&[good("g1"), good("g2"), evil("e1")], now()), None);
    }

    #[test]
    fn test_evil_wins_when_good_gone() {
        let players = vec![
            evil("e1"),
            Player::new("n1").with_affiliation("neutral"),
            Player::new("n2").with_affiliation("neutral"),
            good("g1").dead(),
        ];

        let verdict = evaluate_victory_at(&players, now()).unwrap();
        assert_eq!(verdict.winner, WinnerKind::Evil);
        assert_eq!(ids(&verdict), vec!["e1"]);
    }

    #[test]
    fn test_configured_team_tags() {
        let evaluator = VictoryEvaluator::new(
            VictoryConfig::new()
                .with_good_team("village")
                .with_evil_team("wolves"),
        );
        assert_eq!(evaluator.config().good_team, TeamTag::new("village"));
        assert_eq!(evaluator.config().neutral_team, TeamTag::neutral());

        let villager = Player::new("v1")
            .with_affiliation("village")
            .with_victory_conditions(VictoryConditions::new().with_team("village"));
        let wolf = Player::new("w1")
            .with_affiliation("wolves")
            .with_victory_conditions(VictoryConditions::new().with_team("wolves"));

        let verdict = evaluator
            .evaluate_at(&[villager.clone(), wolf.clone().dead()], now())
            .unwrap();
        assert_eq!(verdict.winner, WinnerKind::Good);
        assert_eq!(verdict.teams.as_slice(), &[TeamTag::new("village")]);

        let verdict = evaluator.evaluate_at(&[villager, wolf], now()).unwrap();
        assert_eq!(verdict.winner, WinnerKind::Evil);
        assert_eq!(verdict.teams.as_slice(), &[TeamTag::new("wolves")]);
    }

    #[test]
    fn test_parity_rule_uses_configured_good_team() {
        let evaluator = VictoryEvaluator::new(VictoryConfig::new().with_good_team("village"));
        let players = vec![
            Player::new("v1").with_affiliation("village"),
            Player::new("v2").with_affiliation("village"),
            Player::new("c1").with_affiliation("cult").with_victory_conditions(
                VictoryConditions::new()
                    .with_rule(VictoryRule::parity("cult", Comparator::AtLeast)),
            ),
            Player::new("e1").with_affiliation("evil"),
        ];

        // cult 1 vs village 2: not yet.
        assert_eq!(evaluator.evaluate_at(&players, now()), None);
    }

    #[test]
    fn test_evaluator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VictoryEvaluator>();
    }
}
