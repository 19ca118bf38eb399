//! Game-ending verdicts.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, TeamList, TeamTag};

/// Which tier of the victory chain ended the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinnerKind {
    /// Nobody is alive.
    Draw,
    /// A solo role is the last player standing.
    Solo,
    /// One or more players satisfied their custom rules.
    Custom,
    /// The good coalition won.
    Good,
    /// The evil coalition won.
    Evil,
}

impl std::fmt::Display for WinnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WinnerKind::Draw => "draw",
            WinnerKind::Solo => "solo",
            WinnerKind::Custom => "custom",
            WinnerKind::Good => "good",
            WinnerKind::Evil => "evil",
        };
        f.write_str(name)
    }
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// How the game was won.
    pub winner: WinnerKind,
    /// Winning players in roster order. Empty for a draw.
    pub players: Vec<PlayerId>,
    /// Teams associated with the win.
    pub teams: TeamList,
}

impl Verdict {
    /// Nobody wins.
    pub fn draw() -> Self {
        Self {
            winner: WinnerKind::Draw,
            players: Vec::new(),
            teams: TeamList::new(),
        }
    }

    /// Create a verdict.
    pub fn new(winner: WinnerKind, players: Vec<PlayerId>, teams: TeamList) -> Self {
        Self {
            winner,
            players,
            teams,
        }
    }

    /// Create a coalition verdict credited to a single team.
    pub fn coalition(winner: WinnerKind, players: Vec<PlayerId>, team: TeamTag) -> Self {
        let mut teams = TeamList::new();
        teams.push(team);
        Self::new(winner, players, teams)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        self.players.contains(player)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner == WinnerKind::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_is_winner() {
        let verdict = Verdict::coalition(
            WinnerKind::Good,
            vec![PlayerId::new("a"), PlayerId::new("c")],
            TeamTag::good(),
        );
        assert!(verdict.is_winner(&PlayerId::new("a")));
        assert!(!verdict.is_winner(&PlayerId::new("b")));
        assert!(verdict.is_winner(&PlayerId::new("c")));
        assert!(!verdict.is_draw());

        let draw = Verdict::draw();
        assert!(draw.is_draw());
        assert!(!draw.is_winner(&PlayerId::new("a")));
        assert!(draw.players.is_empty());
        assert!(draw.teams.is_empty());
    }

    #[test]
    fn test_verdict_wire_form() {
        let verdict =
            Verdict::coalition(WinnerKind::Evil, vec![PlayerId::new("m1")], TeamTag::evil());
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(json, r#"{"winner":"evil","players":["m1"],"teams":["evil"]}"#);
    }

    #[test]
    fn test_winner_kind_display() {
        assert_eq!(WinnerKind::Custom.to_string(), "custom");
        assert_eq!(WinnerKind::Draw.to_string(), "draw");
    }
}
