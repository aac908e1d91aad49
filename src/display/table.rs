//! Table view shown to interactive players.

use std::fmt;

use crate::cards::Card;
use crate::core::GameState;
use crate::melds::Meld;

/// Width of one player column in the meld table.
const COLUMN_WIDTH: usize = 20;

/// Cards with suit symbols, space separated.
#[must_use]
pub fn show_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards
        .into_iter()
        .map(|card| card.symbol())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cards ordered by point value (then card order), with suit symbols.
#[must_use]
pub fn show_hand<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    let mut cards: Vec<&Card> = cards.into_iter().collect();
    cards.sort_by(|a, b| a.points().cmp(&b.points()).then_with(|| a.cmp(b)));
    show_cards(cards)
}

/// One line of a player's meld column, e.g. `0: 7♣ (ref: p0:0)`.
#[must_use]
pub fn show_meld(index: usize, meld: &Meld) -> String {
    match &meld.reference {
        Some(reference) => format!("{index}: {} (ref: {reference})", show_cards(&meld.cards)),
        None => format!("{index}: {}", show_cards(&meld.cards)),
    }
}

/// The table as seen by one player.
///
/// With `reveal` set, every hand and the stock contents are shown as well.
#[derive(Clone, Copy, Debug)]
pub struct TableView<'a> {
    pub state: &'a GameState,
    pub viewer: &'a str,
    pub reveal: bool,
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        let rule = "=".repeat(60);

        writeln!(f, "Current player: {}", self.viewer)?;
        writeln!(f, "Round: {}", state.round())?;
        writeln!(f, "Stock remaining: {}", state.stock().len())?;
        if self.reveal {
            writeln!(f, "Stock: {}", show_cards(state.stock().cards()))?;
        }
        if state.discard_pile().is_empty() {
            writeln!(f, "Discard: empty")?;
        } else {
            writeln!(f, "Discard: {}", show_cards(state.discard_pile()))?;
        }
        writeln!(f, "\n{rule}")?;

        // One column per player: name, underline, then melds
        let columns: Vec<Vec<String>> = state
            .players()
            .map(|player| {
                let mut column = vec![player.name().to_string(), "-".repeat(player.name().len())];
                column.extend(player.melds().iter().enumerate().map(|(i, meld)| show_meld(i, meld)));
                column
            })
            .collect();

        let depth = columns.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..depth {
            let line = columns
                .iter()
                .map(|column| {
                    let cell = column.get(row).map_or("", String::as_str);
                    format!("{cell:<width$}", width = COLUMN_WIDTH)
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        writeln!(f, "\n{rule}")?;

        if self.reveal {
            for player in state.players() {
                writeln!(f, "{}'s hand: {}", player.name(), show_hand(player.hand()))?;
            }
        } else if let Some(player) = state.player(self.viewer) {
            writeln!(f, "Your hand: {}", show_hand(player.hand()))?;
        }

        writeln!(f, "\n{rule}")
    }
}

/// Render the table as seen by `viewer`.
#[must_use]
pub fn render_table(state: &GameState, viewer: &str, reveal: bool) -> String {
    TableView { state, viewer, reveal }.to_string()
}
