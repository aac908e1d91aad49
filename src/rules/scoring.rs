//! Final scoring and standings.
//!
//! A player's score is the point value of every card they melded minus the
//! point value of every card left in their hand. Lay-off melds count only the
//! cards the player contributed.

use serde::{Deserialize, Serialize};

use super::engine::GameResult;
use crate::core::{GameState, Player};

/// One row of the final standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub score: i32,
}

/// Score a single player.
///
/// ```
/// use rust_rummy::cards::parse_cards;
/// use rust_rummy::core::Player;
/// use rust_rummy::melds::{Meld, MeldKind};
/// use rust_rummy::rules::score;
///
/// let player = Player::new("p0", parse_cards("AS").unwrap(), false)
///     .with_meld(Meld::new("p0", MeldKind::Set, parse_cards("10H 10S 10C").unwrap()));
/// assert_eq!(score(&player), 15);
/// ```
#[must_use]
pub fn score(player: &Player) -> i32 {
    player.melded_points() - player.hand_points()
}

/// Every player's score, highest first. Equal scores are ordered by name.
#[must_use]
pub fn standings(state: &GameState) -> Vec<Standing> {
    let mut rows: Vec<Standing> = state
        .players()
        .map(|player| Standing {
            name: player.name().to_string(),
            score: score(player),
        })
        .collect();

    rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// Winner(s) from sorted standings: everyone sharing the top score.
#[must_use]
pub fn result(standings: &[Standing]) -> GameResult {
    let Some(best) = standings.first().map(|row| row.score) else {
        return GameResult::Winners(Vec::new());
    };

    let mut top: Vec<String> = standings
        .iter()
        .take_while(|row| row.score == best)
        .map(|row| row.name.clone())
        .collect();

    match top.len() {
        1 => GameResult::Winner(top.remove(0)),
        _ => GameResult::Winners(top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Deck};
    use crate::melds::{Meld, MeldKind, MeldRef};

    fn cards(s: &str) -> Vec<crate::cards::Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn test_score_meld_minus_hand() {
        let player = Player::new("p0", cards("AS"), false)
            .with_meld(Meld::new("p0", MeldKind::Set, cards("10H 10S 10C")));
        assert_eq!(score(&player), 15);
    }

    #[test]
    fn test_score_empty_player() {
        assert_eq!(score(&Player::new("p0", Vec::new(), false)), 0);
    }

    #[test]
    fn test_layoff_scores_own_cards() {
        let player = Player::new("p1", Vec::new(), false)
            .with_meld(Meld::new("p1", MeldKind::Run, cards("7C")).with_reference(MeldRef::new("p0", 0)));
        assert_eq!(score(&player), 7);
    }

    #[test]
    fn test_standings_order() {
        let players = vec![
            Player::new("b", cards("2D"), false),
            Player::new("a", cards("2H"), false),
            Player::new("c", cards("KS"), true)
                .with_meld(Meld::new("c", MeldKind::Set, cards("3D 3H 3C"))),
        ];
        let state = GameState::from_players(players, Deck::new(), Vec::new()).unwrap();
        let rows = standings(&state);

        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
        // c: 9 melded - 10 in hand; a and b tie on -2 and sort by name
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(rows[0].score, -1);
        assert_eq!(rows[1].score, -2);
        assert_eq!(rows[2].score, -2);
    }

    #[test]
    fn test_result_single_winner() {
        let rows = vec![
            Standing { name: "p0".into(), score: 20 },
            Standing { name: "c1".into(), score: 5 },
        ];
        assert_eq!(result(&rows), GameResult::Winner("p0".into()));
    }

    #[test]
    fn test_result_tie() {
        let rows = vec![
            Standing { name: "a".into(), score: 5 },
            Standing { name: "b".into(), score: 5 },
            Standing { name: "c".into(), score: -3 },
        ];
        assert_eq!(result(&rows), GameResult::Winners(vec!["a".into(), "b".into()]));
    }
}
