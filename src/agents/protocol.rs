//! Text protocol for interactive play.
//!
//! ## Grammar
//!
//! - Draw: `S` (stock) or `D<n>` (top `n` cards of the discard pile)
//! - Meld: card tokens, optionally prefixed by an `owner:index` lay-off
//!   reference, or `discard` to end the meld phase
//! - Discard: one card token
//!
//! Everything is case-insensitive. Parse failures are `GameError::Parse`
//! with a message meant to be shown to the player.

use crate::cards::{parse_cards, Card};
use crate::core::GameError;
use crate::melds::{MeldProposal, MeldRef};
use crate::rules::DrawSource;

/// Word that ends the meld phase.
pub const END_MELD: &str = "discard";

/// A parsed meld-phase command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeldCommand {
    /// Stop melding and go on to the discard.
    Done,
    /// Lay down (or lay off) these cards.
    Meld(MeldProposal),
}

/// Parse a draw choice.
///
/// ```
/// use rust_rummy::agents::parse_draw;
/// use rust_rummy::rules::DrawSource;
///
/// assert_eq!(parse_draw("s").unwrap(), DrawSource::Stock);
/// assert_eq!(parse_draw("D3").unwrap(), DrawSource::Discard(3));
/// assert!(parse_draw("D").is_err());
/// ```
pub fn parse_draw(input: &str) -> Result<DrawSource, GameError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(GameError::parse(input, "enter a draw option (S or D<n>)"));
    }
    if input.eq_ignore_ascii_case("s") {
        return Ok(DrawSource::Stock);
    }

    let count = input
        .strip_prefix(&['d', 'D'][..])
        .ok_or_else(|| GameError::parse(input, "draw with S (stock) or D<n> (discard)"))?;

    match count.parse::<usize>() {
        Ok(0) => Err(GameError::parse(input, "must draw at least one card from the discard pile")),
        Ok(count) => Ok(DrawSource::Discard(count)),
        Err(_) => Err(GameError::parse(
            input,
            "specify how many cards to take, e.g. \"D3\" draws 3 from the discard pile",
        )),
    }
}

/// Parse a meld-phase command.
pub fn parse_meld(input: &str) -> Result<MeldCommand, GameError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(END_MELD) {
        return Ok(MeldCommand::Done);
    }

    let mut tokens = input.split_whitespace();
    let first = tokens
        .next()
        .ok_or_else(|| GameError::parse(input, "enter cards to meld or 'discard' to end melding"))?;

    let (reference, rest) = if first.contains(':') {
        (Some(first.parse::<MeldRef>()?), tokens.collect::<Vec<_>>().join(" "))
    } else {
        (None, input.to_string())
    };

    let cards = parse_cards(&rest)?;
    if cards.is_empty() {
        return Err(GameError::parse(input, "name the cards to lay off after the reference"));
    }

    Ok(MeldCommand::Meld(match reference {
        Some(reference) => MeldProposal::layoff(reference, cards),
        None => MeldProposal::new(cards),
    }))
}

/// Parse a discard choice.
pub fn parse_discard(input: &str) -> Result<Card, GameError> {
    let input = input.trim();
    let mut tokens = input.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.parse().map_err(|_| {
            GameError::parse(
                input,
                "enter a discard of the form <RANK><SUIT>, e.g. \"4C\" for four of clubs",
            )
        }),
        (None, _) => Err(GameError::parse(input, "enter a card to discard")),
        (Some(_), Some(_)) => Err(GameError::parse(input, "discard exactly one card")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn test_parse_draw() {
        assert_eq!(parse_draw("S").unwrap(), DrawSource::Stock);
        assert_eq!(parse_draw("  s \n").unwrap(), DrawSource::Stock);
        assert_eq!(parse_draw("d1").unwrap(), DrawSource::Discard(1));
        assert_eq!(parse_draw("D12").unwrap(), DrawSource::Discard(12));
    }

    #[test]
    fn test_parse_draw_rejects() {
        for input in ["", "x", "D", "D0", "Dx", "D-1", "SS"] {
            let err = parse_draw(input).unwrap_err();
            assert!(matches!(err, GameError::Parse { .. }), "{input}");
        }
    }

    #[test]
    fn test_parse_meld() {
        assert_eq!(parse_meld("discard").unwrap(), MeldCommand::Done);
        assert_eq!(parse_meld(" DISCARD ").unwrap(), MeldCommand::Done);
        assert_eq!(
            parse_meld("4c 5c 6c").unwrap(),
            MeldCommand::Meld(MeldProposal::new(cards("4C 5C 6C")))
        );
    }

    #[test]
    fn test_parse_layoff() {
        assert_eq!(
            parse_meld("p1:0 7C").unwrap(),
            MeldCommand::Meld(MeldProposal::layoff(MeldRef::new("p1", 0), cards("7C")))
        );
    }

    #[test]
    fn test_parse_meld_rejects() {
        assert!(parse_meld("").is_err());
        assert!(parse_meld("p1:0").is_err());
        assert!(parse_meld("p1:x 7C").is_err());
        assert!(parse_meld(":0 7C").is_err());
        assert!(parse_meld("4C 5C ZZ").is_err());
    }

    #[test]
    fn test_parse_discard() {
        assert_eq!(parse_discard("10h").unwrap(), cards("10H")[0]);
        assert!(parse_discard("").is_err());
        assert!(parse_discard("4C 5C").is_err());

        let err = parse_discard("4X").unwrap_err();
        assert!(err.to_string().contains("<RANK><SUIT>"));
    }
}
