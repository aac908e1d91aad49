//! Meld engine tests through the public API.
//!
//! Detection and validation are checked against the card model, and lay-offs
//! are checked against a live `GameState` table.

use rust_rummy::cards::{parse_cards, Card, Deck};
use rust_rummy::core::{GameError, GameState, Player, Violation};
use rust_rummy::melds::{check, find_melds, validate, Meld, MeldKind, MeldProposal, MeldRef};
use rust_rummy::rules::{score, DrawSource};

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

/// Table with a run owned by `p0` and a set owned by `p1`. `p0` is to act.
fn table() -> GameState {
    let players = vec![
        Player::new("p0", cards("7C 8C 7D KH"), false)
            .with_meld(Meld::new("p0", MeldKind::Run, cards("4C 5C 6C"))),
        Player::new("p1", cards("2S"), false)
            .with_meld(Meld::new("p1", MeldKind::Set, cards("JH JS JD"))),
    ];
    GameState::from_players(players, Deck::from_cards(cards("3S 4S")), Vec::new()).unwrap()
}

/// Four of a kind is one set, not four sub-sets.
#[test]
fn test_detect_four_of_a_kind() {
    let found = find_melds(&cards("2D 2H 2C 2S"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, MeldKind::Set);
    assert_eq!(found[0].len(), 4);
}

/// A gap in a suit splits the run.
#[test]
fn test_detect_run_with_gap() {
    let found = find_melds(&cards("3H 4H 5H 7H"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, MeldKind::Run);
    assert_eq!(found[0].cards.to_vec(), cards("3H 4H 5H"));
}

/// Fewer than three cards never validate.
#[test]
fn test_validate_rejects_small_groups() {
    let state = table();
    for group in ["", "2D", "2D 2H", "4H 5H"] {
        assert!(!validate(&cards(group), None, &state), "{group:?}");
    }
}

/// Lay-off onto a run: same suit extends it, another suit does not.
#[test]
fn test_layoff_validation() {
    let state = table();
    let run = MeldRef::new("p0", 0);

    assert!(validate(&cards("7C"), Some(&run), &state));
    assert!(!validate(&cards("7D"), Some(&run), &state));
    assert!(validate(&cards("7C 8C"), Some(&run), &state));
    assert!(validate(&cards("JC"), Some(&MeldRef::new("p1", 0)), &state));
}

/// Stale and unknown references are validation failures, not panics.
#[test]
fn test_stale_references() {
    let state = table();

    assert_eq!(
        check(&cards("7C"), Some(&MeldRef::new("p0", 3)), &state),
        Err(Violation::NoSuchMeld {
            owner: "p0".into(),
            index: 3
        })
    );
    assert_eq!(
        check(&cards("7C"), Some(&MeldRef::new("nobody", 0)), &state),
        Err(Violation::UnknownPlayer("nobody".into()))
    );
}

/// A lay-off through the turn API creates a new meld for the acting player
/// and leaves the referenced meld with its owner.
#[test]
fn test_layoff_through_turn() {
    let mut state = table();
    state.draw(DrawSource::Stock).unwrap();

    let index = state
        .meld(&MeldProposal::layoff(MeldRef::new("p0", 0), cards("7C 8C")))
        .unwrap();
    assert_eq!(index, 1);

    let p0 = state.player("p0").unwrap();
    assert_eq!(p0.melds()[0].cards.len(), 3);
    assert_eq!(p0.melds()[1].reference, Some(MeldRef::new("p0", 0)));
    assert!(!p0.holds(&cards("7C")[0]));

    // Extend the extension
    let err = state
        .meld(&MeldProposal::layoff(MeldRef::new("p0", 1), cards("7D")))
        .unwrap_err();
    assert!(matches!(err, GameError::Validation(Violation::Mixed)));
}

/// A lay-off scores only the cards the acting player contributed.
#[test]
fn test_layoff_scoring() {
    let mut state = table();
    state.draw(DrawSource::Stock).unwrap();
    // A king does not join a set of jacks
    state
        .meld(&MeldProposal::layoff(MeldRef::new("p1", 0), cards("KH")))
        .unwrap_err();

    let before = score(state.player("p0").unwrap());
    state
        .meld(&MeldProposal::layoff(MeldRef::new("p0", 0), cards("7C")))
        .unwrap();
    let after = score(state.player("p0").unwrap());

    // 7 moves from the hand column to the meld column
    assert_eq!(after - before, 14);
    assert_eq!(score(state.player("p1").unwrap()), 30 - 2);
}

/// Scoring example: a set of tens and an ace left over.
#[test]
fn test_scoring_example() {
    let player = Player::new("p0", cards("AS"), false)
        .with_meld(Meld::new("p0", MeldKind::Set, cards("10H 10S 10C")));
    assert_eq!(score(&player), 15);
}
