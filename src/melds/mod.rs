//! Meld engine: detection and validation of sets and runs.
//!
//! ## Key Types
//!
//! - `Meld`: a set or run on the table, owned by one player
//! - `MeldRef`: `owner:index` lay-off reference, resolved on demand
//! - `Candidate`: a meld detected in a hand
//! - `MeldProposal`: what an agent asks to lay down
//! - `MeldTable`: read access to table melds for reference resolution
//!
//! ## Operations
//!
//! - `find_melds`: candidate sets and maximal runs, largest first
//! - `check` / `validate`: legality of a proposal, with optional lay-off

pub mod detect;
pub mod meld;
pub mod validate;

pub use detect::{find_melds, find_runs, find_sets};
pub use meld::{Candidate, Meld, MeldCards, MeldKind, MeldProposal, MeldRef, MeldTable, MIN_MELD};
pub use validate::{check, classify, resolve, validate};
