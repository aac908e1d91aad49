//! Final score report.

use std::fmt;

use crate::rules::{GameOutcome, GameResult};

/// Printable end-of-game summary.
#[derive(Clone, Copy, Debug)]
pub struct ScoreReport<'a>(pub &'a GameOutcome);

impl fmt::Display for ScoreReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        let rule = "=".repeat(60);

        writeln!(f, "{rule}")?;
        writeln!(f, "Game over: {} after {} rounds.", outcome.ending, outcome.rounds)?;
        match &outcome.result {
            GameResult::Winner(name) => write!(f, "{name} wins.")?,
            GameResult::Winners(names) => write!(f, "{} tie.", names.join(" and "))?,
        }
        writeln!(f, " Final scores:")?;
        for row in &outcome.standings {
            writeln!(f, "\t{}: {}", row.name, row.score)?;
        }
        writeln!(f, "{rule}")
    }
}

/// Render the final scores.
#[must_use]
pub fn render_scores(outcome: &GameOutcome) -> String {
    ScoreReport(outcome).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ending;
    use crate::rules::Standing;

    fn outcome(result: GameResult) -> GameOutcome {
        GameOutcome {
            ending: Ending::PlayerOut("p0".into()),
            standings: vec![
                Standing { name: "p0".into(), score: 15 },
                Standing { name: "c1".into(), score: -4 },
            ],
            result,
            rounds: 3,
        }
    }

    #[test]
    fn test_single_winner() {
        let out = render_scores(&outcome(GameResult::Winner("p0".into())));

        assert!(out.contains("Game over: p0 went out after 3 rounds."));
        assert!(out.contains("p0 wins. Final scores:"));
        assert!(out.contains("\tp0: 15\n\tc1: -4\n"));
    }

    #[test]
    fn test_shared_win() {
        let out = render_scores(&outcome(GameResult::Winners(vec!["c1".into(), "p0".into()])));
        assert!(out.contains("c1 and p0 tie. Final scores:"));
    }
}
