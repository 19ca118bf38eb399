use serde::{Deserialize, Serialize};

use crate::core::{TeamList, TeamTag, VictoryConditions};
use crate::victory::VictoryRule;

/// Effect type applied by the infector's night action.
pub const INFECTED: &str = "infected";

/// A built-in role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RolePreset {
    Villager,
    Mafioso,
    SerialKiller,
    Survivor,
    Diplomat,
    Infector,
}

impl RolePreset {
    /// All presets, in declaration order.
    pub const ALL: [RolePreset; 6] = [
        RolePreset::Villager,
        RolePreset::Mafioso,
        RolePreset::SerialKiller,
        RolePreset::Survivor,
        RolePreset::Diplomat,
        RolePreset::Infector,
    ];

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RolePreset::Villager => "Villager",
            RolePreset::Mafioso => "Mafioso",
            RolePreset::SerialKiller => "Serial Killer",
            RolePreset::Survivor => "Survivor",
            RolePreset::Diplomat => "Diplomat",
            RolePreset::Infector => "Infector",
        }
    }

    /// Team tags a player with this role carries.
    #[must_use]
    pub fn affiliations(self) -> TeamList {
        let team = match self {
            RolePreset::Villager => TeamTag::good(),
            RolePreset::Mafioso => TeamTag::evil(),
            RolePreset::SerialKiller => TeamTag::solo(),
            RolePreset::Survivor | RolePreset::Diplomat | RolePreset::Infector => {
                TeamTag::neutral()
            }
        };
        let mut teams = TeamList::new();
        teams.push(team);
        teams
    }

    /// Win predicates for this role.
    #[must_use]
    pub fn victory_conditions(self) -> VictoryConditions {
        match self {
            RolePreset::Villager => VictoryConditions::new().with_team(TeamTag::good()),
            RolePreset::Mafioso => VictoryConditions::new().with_team(TeamTag::evil()),
            RolePreset::SerialKiller => VictoryConditions::new().solo(),
            RolePreset::Survivor => VictoryConditions::new()
                .with_team(TeamTag::good())
                .with_team(TeamTag::evil())
                .solo(),
            RolePreset::Diplomat => VictoryConditions::new().with_team(TeamTag::good()),
            RolePreset::Infector => {
                VictoryConditions::new().with_rule(VictoryRule::all_others_have(INFECTED))
            }
        }
    }
}

impl std::fmt::Display for RolePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
