//! Meld legality checks.
//!
//! A proposal is legal when the proposed cards, together with any referenced
//! table meld, form at least three distinct cards that are either all one rank
//! (a set) or all one suit with consecutive ordering values (a run).
//!
//! Lay-off references are resolved against the table every time. A referenced
//! meld that is itself a lay-off contributes its own referenced cards too, so
//! extensions can be stacked.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::meld::{MeldKind, MeldRef, MeldTable, MIN_MELD};
use crate::cards::Card;
use crate::core::Violation;

/// Classify a complete card group as a set or a run.
pub fn classify(cards: &[Card]) -> Result<MeldKind, Violation> {
    if cards.len() < MIN_MELD {
        return Err(Violation::TooFewCards(cards.len()));
    }

    let mut seen = FxHashSet::default();
    if let Some(dup) = cards.iter().find(|card| !seen.insert(**card)) {
        return Err(Violation::DuplicateCard(*dup));
    }

    let first = cards[0];
    if cards.iter().all(|card| card.rank == first.rank) {
        return Ok(MeldKind::Set);
    }
    if !cards.iter().all(|card| card.suit == first.suit) {
        return Err(Violation::Mixed);
    }

    let mut orders: SmallVec<[u8; 8]> = cards.iter().map(|card| card.order()).collect();
    orders.sort_unstable();

    if orders.windows(2).all(|pair| pair[1] == pair[0] + 1) {
        Ok(MeldKind::Run)
    } else {
        Err(Violation::NotConsecutive)
    }
}

/// Collect the cards of a referenced meld, following nested lay-offs.
///
/// Unknown owners and out-of-range indices are reported as violations.
pub fn resolve<T: MeldTable + ?Sized>(table: &T, reference: &MeldRef) -> Result<Vec<Card>, Violation> {
    let mut cards = Vec::new();
    let mut visited = FxHashSet::default();
    let mut next = Some(reference);

    while let Some(current) = next {
        if !visited.insert((current.owner.as_str(), current.index)) {
            break;
        }
        if !table.has_player(&current.owner) {
            return Err(Violation::UnknownPlayer(current.owner.clone()));
        }

        let meld = table
            .meld(&current.owner, current.index)
            .ok_or_else(|| Violation::NoSuchMeld {
                owner: current.owner.clone(),
                index: current.index,
            })?;

        cards.extend(meld.cards.iter().copied());
        next = meld.reference.as_ref();
    }

    Ok(cards)
}

/// Check a proposal, returning the kind of the combined meld.
pub fn check<T: MeldTable + ?Sized>(
    cards: &[Card],
    reference: Option<&MeldRef>,
    table: &T,
) -> Result<MeldKind, Violation> {
    if cards.is_empty() {
        return Err(Violation::EmptyProposal);
    }

    let mut combined = cards.to_vec();
    if let Some(reference) = reference {
        combined.extend(resolve(table, reference)?);
    }

    classify(&combined)
}

/// Whether a proposal is legal.
pub fn validate<T: MeldTable + ?Sized>(cards: &[Card], reference: Option<&MeldRef>, table: &T) -> bool {
    check(cards, reference, table).is_ok()
}
