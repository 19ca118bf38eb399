//! Custom victory rules.
//!
//! A role may carry custom predicates instead of (or on top of) a plain
//! coalition win: "evil is eliminated", "my team has parity with the
//! town", "everyone else is infected". All of a player's rules must hold
//! for that player to claim a custom win.
//!
//! Rules arrive from data-driven role configuration. A rule of a kind this
//! engine does not know deserializes to [`VictoryRule::Unknown`], which is
//! never satisfied.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::core::wire::null_as_default;
use crate::core::{has_active_effect, EffectType, Player, PlayerId, TeamTag};

use super::teams::TeamCounts;

/// Comparison used by [`VictoryRule::Parity`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `>=`
    #[default]
    AtLeast,
    /// `>`
    GreaterThan,
    /// `===`
    Equal,
    /// Any other operator string. Never satisfied.
    Unknown,
}

impl Comparator {
    /// Wire spelling of the operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::AtLeast => ">=",
            Comparator::GreaterThan => ">",
            Comparator::Equal => "===",
            Comparator::Unknown => "?",
        }
    }

    /// Parse an operator string. Unrecognised operators map to `Unknown`.
    #[must_use]
    pub fn parse(op: &str) -> Self {
        match op {
            ">=" => Comparator::AtLeast,
            ">" => Comparator::GreaterThan,
            "===" => Comparator::Equal,
            _ => Comparator::Unknown,
        }
    }

    /// Apply the comparison.
    #[must_use]
    pub fn compare(self, lhs: usize, rhs: usize) -> bool {
        match self {
            Comparator::AtLeast => lhs >= rhs,
            Comparator::GreaterThan => lhs > rhs,
            Comparator::Equal => lhs == rhs,
            Comparator::Unknown => false,
        }
    }
}

impl Serialize for Comparator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Comparator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let op = String::deserialize(deserializer)?;
        Ok(Comparator::parse(&op))
    }
}

/// A custom win predicate.
///
/// Team and effect fields are optional on the wire. A missing team reads
/// as an alive-count of 0; a missing effect matches no player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VictoryRule {
    /// No living player carries `target_team`.
    Eliminate {
        #[serde(rename = "targetTeam", default)]
        target_team: Option<TeamTag>,
    },

    /// alive(`team`) `comparator` alive(`against`).
    ///
    /// `against` defaults to the configured good team.
    Parity {
        #[serde(default)]
        team: Option<TeamTag>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        against: Option<TeamTag>,
        #[serde(default, deserialize_with = "null_as_default")]
        comparator: Comparator,
    },

    /// alive(`team`) == `count`.
    AliveExactly {
        #[serde(default)]
        team: Option<TeamTag>,
        #[serde(default, deserialize_with = "null_as_default")]
        count: usize,
    },

    /// alive(`team`) <= `count`.
    AliveAtMost {
        #[serde(default)]
        team: Option<TeamTag>,
        #[serde(default, deserialize_with = "null_as_default")]
        count: usize,
    },

    /// alive(`team`) >= `count`.
    AliveAtLeast {
        #[serde(default)]
        team: Option<TeamTag>,
        #[serde(default, deserialize_with = "null_as_default")]
        count: usize,
    },

    /// Every other living player has (or with `negate`, lacks) an active
    /// `effect`. Holds vacuously when nobody else is alive.
    AllOthersHaveEffect {
        #[serde(default)]
        effect: Option<EffectType>,
        #[serde(default, deserialize_with = "null_as_default")]
        negate: bool,
    },

    /// A rule kind this engine does not recognise.
    #[serde(other)]
    Unknown,
}

impl VictoryRule {
    /// Require `team` to have no living members.
    pub fn eliminate(team: impl Into<TeamTag>) -> Self {
        Self::Eliminate {
            target_team: Some(team.into()),
        }
    }

    /// Compare `team` against the default opponent (the good team).
    pub fn parity(team: impl Into<TeamTag>, comparator: Comparator) -> Self {
        Self::Parity {
            team: Some(team.into()),
            against: None,
            comparator,
        }
    }

    /// Compare `team` against an explicit opponent.
    pub fn parity_against(
        team: impl Into<TeamTag>,
        against: impl Into<TeamTag>,
        comparator: Comparator,
    ) -> Self {
        Self::Parity {
            team: Some(team.into()),
            against: Some(against.into()),
            comparator,
        }
    }

    pub fn alive_exactly(team: impl Into<TeamTag>, count: usize) -> Self {
        Self::AliveExactly {
            team: Some(team.into()),
            count,
        }
    }

    pub fn alive_at_most(team: impl Into<TeamTag>, count: usize) -> Self {
        Self::AliveAtMost {
            team: Some(team.into()),
            count,
        }
    }

    pub fn alive_at_least(team: impl Into<TeamTag>, count: usize) -> Self {
        Self::AliveAtLeast {
            team: Some(team.into()),
            count,
        }
    }

    /// Require every other living player to carry `effect`.
    pub fn all_others_have(effect: impl Into<EffectType>) -> Self {
        Self::AllOthersHaveEffect {
            effect: Some(effect.into()),
            negate: false,
        }
    }

    /// Require every other living player to be free of `effect`.
    pub fn all_others_lack(effect: impl Into<EffectType>) -> Self {
        Self::AllOthersHaveEffect {
            effect: Some(effect.into()),
            negate: true,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Check whether the rule can never hold because part of it was not
    /// recognised: an unknown kind, or a parity rule with an unknown
    /// comparator.
    #[must_use]
    pub fn is_unrecognised(&self) -> bool {
        match self {
            Self::Parity { comparator, .. } => *comparator == Comparator::Unknown,
            rule => rule.is_unknown(),
        }
    }

    /// Team tags this rule refers to explicitly.
    #[must_use]
    pub fn teams(&self) -> SmallVec<[&TeamTag; 2]> {
        let mut teams = SmallVec::new();
        match self {
            Self::Eliminate { target_team } => teams.extend(target_team.as_ref()),
            Self::Parity { team, against, .. } => {
                teams.extend(team.as_ref());
                teams.extend(against.as_ref());
            }
            Self::AliveExactly { team, .. }
            | Self::AliveAtMost { team, .. }
            | Self::AliveAtLeast { team, .. } => teams.extend(team.as_ref()),
            Self::AllOthersHaveEffect { .. } | Self::Unknown => {}
        }
        teams
    }
}

/// Context for evaluating victory rules.
#[derive(Clone)]
pub struct RuleContext<'a> {
    /// Alive-count per team for this evaluation.
    pub counts: &'a TeamCounts,
    /// Full roster, dead players included.
    pub players: &'a [Player],
    /// The player whose rules are being checked, if any.
    pub self_id: Option<&'a PlayerId>,
    /// Evaluation instant for effect expiry.
    pub now: DateTime<Utc>,
    /// Opponent of a parity rule with no `against`.
    pub parity_default: Cow<'a, TeamTag>,
}

impl<'a> RuleContext<'a> {
    /// Create a context with no `self` and the good team as parity default.
    pub fn new(counts: &'a TeamCounts, players: &'a [Player], now: DateTime<Utc>) -> Self {
        Self {
            counts,
            players,
            self_id: None,
            now,
            parity_default: Cow::Owned(TeamTag::good()),
        }
    }

    /// Evaluate on behalf of a specific player.
    #[must_use]
    pub fn with_self(mut self, id: &'a PlayerId) -> Self {
        self.self_id = Some(id);
        self
    }

    /// Override the parity default opponent.
    #[must_use]
    pub fn with_parity_default(mut self, team: &'a TeamTag) -> Self {
        self.parity_default = Cow::Borrowed(team);
        self
    }
}

/// Evaluator for victory rules.
pub struct RuleEvaluator;

impl RuleEvaluator {
    /// Check if a rule is satisfied.
    pub fn evaluate(rule: &VictoryRule, ctx: &RuleContext) -> bool {
        let satisfied = match rule {
            VictoryRule::Eliminate { target_team } => {
                ctx.counts.get_opt(target_team.as_ref()) == 0
            }

            VictoryRule::Parity {
                team,
                against,
                comparator,
            } => {
                let against = against.as_ref().unwrap_or(&*ctx.parity_default);
                comparator.compare(ctx.counts.get_opt(team.as_ref()), ctx.counts.get(against))
            }

            VictoryRule::AliveExactly { team, count } => {
                ctx.counts.get_opt(team.as_ref()) == *count
            }

            VictoryRule::AliveAtMost { team, count } => {
                ctx.counts.get_opt(team.as_ref()) <= *count
            }

            VictoryRule::AliveAtLeast { team, count } => {
                ctx.counts.get_opt(team.as_ref()) >= *count
            }

            VictoryRule::AllOthersHaveEffect { effect, negate } => {
                ctx.players
                    .iter()
                    .filter(|p| p.alive && Some(&p.id) != ctx.self_id)
                    .all(|p| {
                        let has = effect
                            .as_ref()
                            .is_some_and(|effect| has_active_effect(p, effect, ctx.now));
                        has != *negate
                    })
            }

            VictoryRule::Unknown => false,
        };

        tracing::trace!(?rule, player = ?ctx.self_id, satisfied, "evaluated victory rule");
        satisfied
    }

    /// Check that every rule holds.
    ///
    /// Every rule is evaluated even after one fails, so tracing output is
    /// the same for every call on the same input. An empty list holds.
    pub fn evaluate_all(rules: &[VictoryRule], ctx: &RuleContext) -> bool {
        rules
            .iter()
            .fold(true, |all, rule| Self::evaluate(rule, ctx) && all)
    }
}
