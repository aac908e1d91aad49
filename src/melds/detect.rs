//! Meld detection: candidate sets and runs in a hand.
//!
//! ## Ordering
//!
//! Candidates are returned largest first. Ties are broken by total point
//! value (highest first) and then by card order, so the result is stable for
//! a given hand regardless of input order.
//!
//! ## Runs
//!
//! Only **maximal** runs are emitted: `3H 4H 5H 6H` yields one candidate, not
//! its three-card sub-runs. A repeated rank within a suit breaks a run.

use rustc_hash::FxHashMap;

use super::meld::{Candidate, MeldCards, MeldKind, MIN_MELD};
use crate::cards::{Card, Rank, Suit};

/// Find every candidate set and maximal run in `hand`.
///
/// ```
/// use rust_rummy::cards::parse_cards;
/// use rust_rummy::melds::{find_melds, MeldKind};
///
/// let hand = parse_cards("3H 4H 5H 7H 9C").unwrap();
/// let found = find_melds(&hand);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].kind, MeldKind::Run);
/// ```
pub fn find_melds<'a>(hand: impl IntoIterator<Item = &'a Card>) -> Vec<Candidate> {
    let hand: Vec<Card> = hand.into_iter().copied().collect();

    let mut candidates = find_sets(&hand);
    candidates.extend(find_runs(&hand));
    candidates.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| b.points().cmp(&a.points()))
            .then_with(|| a.cards.cmp(&b.cards))
    });

    candidates
}

/// Groups of three or more distinct cards sharing a rank.
pub fn find_sets(hand: &[Card]) -> Vec<Candidate> {
    let mut by_rank: FxHashMap<Rank, MeldCards> = FxHashMap::default();
    for &card in hand {
        let group = by_rank.entry(card.rank).or_default();
        if !group.contains(&card) {
            group.push(card);
        }
    }

    by_rank
        .into_values()
        .filter(|group| group.len() >= MIN_MELD)
        .map(|mut cards| {
            cards.sort_unstable();
            Candidate {
                kind: MeldKind::Set,
                cards,
            }
        })
        .collect()
}

/// Maximal runs of three or more consecutive cards within a suit.
pub fn find_runs(hand: &[Card]) -> Vec<Candidate> {
    let mut by_suit: FxHashMap<Suit, Vec<Card>> = FxHashMap::default();
    for &card in hand {
        by_suit.entry(card.suit).or_default().push(card);
    }

    let mut runs = Vec::new();
    for mut cards in by_suit.into_values() {
        cards.sort_by_key(|card| card.order());

        let mut run = MeldCards::new();
        for card in cards {
            match run.last() {
                Some(last) if card.order() == last.order() + 1 => run.push(card),
                _ => {
                    flush_run(&mut run, &mut runs);
                    run.push(card);
                }
            }
        }
        flush_run(&mut run, &mut runs);
    }

    runs
}

fn flush_run(run: &mut MeldCards, out: &mut Vec<Candidate>) {
    let cards = std::mem::take(run);
    if cards.len() >= MIN_MELD {
        out.push(Candidate {
            kind: MeldKind::Run,
            cards,
        });
    }
}
