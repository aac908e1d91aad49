//! Meld records, lay-off references and proposals.
//!
//! ## Ownership
//!
//! A `Meld` stores only the cards its owner contributed. A lay-off meld
//! carries a `MeldRef` to the table meld it extends; the referenced cards stay
//! with their own owner and are looked up again every time they are needed.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{self, Card};
use crate::core::GameError;

/// Minimum number of cards in a meld (including referenced cards).
pub const MIN_MELD: usize = 3;

/// Card storage for melds. Most melds have 3 or 4 cards.
pub type MeldCards = SmallVec<[Card; 4]>;

/// Set or run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Identical rank, distinct suits.
    Set,
    /// Identical suit, consecutive ranks.
    Run,
}

impl fmt::Display for MeldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeldKind::Set => f.write_str("set"),
            MeldKind::Run => f.write_str("run"),
        }
    }
}

/// Weak reference to a table meld, written `owner:index`.
///
/// Never holds the meld itself: it is resolved against the table each time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeldRef {
    pub owner: String,
    pub index: usize,
}

impl MeldRef {
    /// Create a reference to `owner`'s meld at `index`.
    pub fn new(owner: impl Into<String>, index: usize) -> Self {
        Self {
            owner: owner.into(),
            index,
        }
    }
}

impl fmt::Display for MeldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.owner, self.index)
    }
}

impl FromStr for MeldRef {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, index) = s
            .split_once(':')
            .ok_or_else(|| GameError::parse(s, "expected <player>:<index>"))?;

        if owner.is_empty() {
            return Err(GameError::parse(s, "missing player name before ':'"));
        }

        let index = index
            .parse::<usize>()
            .map_err(|_| GameError::parse(s, "meld index must be a non-negative number"))?;

        Ok(MeldRef::new(owner, index))
    }
}

/// A meld on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    /// Cards contributed by the owner.
    pub cards: MeldCards,

    /// Kind of the combined meld (including referenced cards).
    pub kind: MeldKind,

    /// Name of the player who laid it down.
    pub owner: String,

    /// Table meld this one extends, if it is a lay-off.
    pub reference: Option<MeldRef>,
}

impl Meld {
    /// Create a meld with no reference.
    pub fn new(owner: impl Into<String>, kind: MeldKind, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            kind,
            owner: owner.into(),
            reference: None,
        }
    }

    /// Attach a lay-off reference.
    #[must_use]
    pub fn with_reference(mut self, reference: MeldRef) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Whether this meld extends another.
    #[must_use]
    pub fn is_layoff(&self) -> bool {
        self.reference.is_some()
    }

    /// Points of the cards this meld owns.
    #[must_use]
    pub fn points(&self) -> i32 {
        cards::points(&self.cards)
    }
}

/// A meld found in a hand by detection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub kind: MeldKind,
    pub cards: MeldCards,
}

impl Candidate {
    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the candidate has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total point value.
    #[must_use]
    pub fn points(&self) -> i32 {
        cards::points(&self.cards)
    }

    /// Whether the candidate uses `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

/// A meld an agent wants to lay down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeldProposal {
    /// Cards from the acting player's hand.
    pub cards: Vec<Card>,

    /// Table meld to extend, if any.
    pub reference: Option<MeldRef>,
}

impl MeldProposal {
    /// Propose a fresh meld.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            reference: None,
        }
    }

    /// Propose a lay-off onto `reference`.
    pub fn layoff(reference: MeldRef, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            reference: Some(reference),
        }
    }
}

impl From<&Candidate> for MeldProposal {
    fn from(candidate: &Candidate) -> Self {
        MeldProposal::new(candidate.cards.iter().copied())
    }
}

/// Read access to the melds on the table, for resolving references.
pub trait MeldTable {
    /// Whether a player with this name is seated.
    fn has_player(&self, name: &str) -> bool;

    /// The meld at `index` in `owner`'s meld list.
    fn meld(&self, owner: &str, index: usize) -> Option<&Meld>;
}

impl MeldTable for BTreeMap<String, Vec<Meld>> {
    fn has_player(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn meld(&self, owner: &str, index: usize) -> Option<&Meld> {
        self.get(owner)?.get(index)
    }
}
