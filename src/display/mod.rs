//! Text rendering for the terminal: the table view and the final scores.

pub mod scores;
pub mod table;

pub use scores::{render_scores, ScoreReport};
pub use table::{render_table, show_cards, show_hand, show_meld, TableView};
