//! Human player reading commands from a line source.
//!
//! Each prompt repeats until the input parses. Rule violations found by the
//! engine come back through `rejected` and are printed before the next prompt.
//! End of input cancels the game.

use std::io::{self, BufRead, Write};

use super::agent::Agent;
use super::protocol::{parse_discard, parse_draw, parse_meld, MeldCommand};
use crate::cards::Card;
use crate::core::{GameError, GameState};
use crate::display::{render_table, show_hand};
use crate::melds::MeldProposal;
use crate::rules::DrawSource;

const DRAW_PROMPT: &str = "Please select draw option (<S>/<D#>): ";
const MELD_PROMPT: &str = "Specify meld or type 'discard' to discard and end your turn: ";
const DISCARD_PROMPT: &str = "Please select discard option: ";

/// Source of input lines.
///
/// `io::Stdin` is read without holding its lock between prompts, so several
/// interactive seats can share the terminal.
pub trait LineSource {
    /// Append the next line to `buf`, returning the bytes read (0 at end).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Interactive agent over a line source and an output sink.
#[derive(Debug)]
pub struct InteractiveAgent<R, W> {
    input: R,
    output: W,
    reveal: bool,
}

impl InteractiveAgent<io::Stdin, io::Stdout> {
    /// Agent reading stdin and writing stdout.
    #[must_use]
    pub fn stdio(reveal: bool) -> Self {
        Self::new(io::stdin(), io::stdout(), reveal)
    }
}

impl<R: LineSource, W: Write> InteractiveAgent<R, W> {
    /// Create an agent. With `reveal` set, the table view shows every hand.
    pub fn new(input: R, output: W, reveal: bool) -> Self {
        Self { input, output, reveal }
    }

    /// Consume the agent, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `prompt` and parse lines with `parse` until one succeeds.
    fn ask<T>(
        &mut self,
        me: &str,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(GameError::Cancelled(me.to_string()));
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn show_table(&mut self, state: &GameState, me: &str) -> Result<(), GameError> {
        write!(self.output, "{}", render_table(state, me, self.reveal))?;
        Ok(())
    }

    fn show_own_hand(&mut self, state: &GameState, me: &str) -> Result<(), GameError> {
        if let Some(player) = state.player(me) {
            writeln!(self.output, "Your hand: {}", show_hand(player.hand()))?;
        }
        Ok(())
    }
}

impl<R: LineSource, W: Write> Agent for InteractiveAgent<R, W> {
    fn draw(&mut self, state: &GameState, me: &str) -> Result<DrawSource, GameError> {
        self.show_table(state, me)?;
        self.ask(me, DRAW_PROMPT, parse_draw)
    }

    fn meld(&mut self, state: &GameState, me: &str) -> Result<Option<MeldProposal>, GameError> {
        self.show_own_hand(state, me)?;
        match self.ask(me, MELD_PROMPT, parse_meld)? {
            MeldCommand::Done => Ok(None),
            MeldCommand::Meld(proposal) => Ok(Some(proposal)),
        }
    }

    fn discard(&mut self, state: &GameState, me: &str) -> Result<Card, GameError> {
        self.show_table(state, me)?;
        self.ask(me, DISCARD_PROMPT, parse_discard)
    }

    fn rejected(&mut self, error: &GameError) {
        let _ = writeln!(self.output, "{error}");
    }
}
