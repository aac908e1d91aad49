//! Rummy CLI
//!
//! Seats `-n` human players and `-c` computer players, plays one game to the
//! end and prints the final scores.
//!
//! Options: --computers, --num_players, --debug, --seed, --hand-size

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use rust_rummy::display::render_scores;
use rust_rummy::{Game, GameConfig};

#[derive(Parser, Debug)]
#[command(name = "rummy")]
#[command(about = "Play rummy against people and greedy computer players")]
struct Args {
    /// Number of computer players
    #[arg(short, long, default_value_t = 0)]
    computers: usize,

    /// Number of human players
    #[arg(short = 'n', long = "num_players", default_value_t = 1)]
    num_players: usize,

    /// Show every hand and the stock, and log each move
    #[arg(short, long)]
    debug: bool,

    /// Shuffle seed, for replaying a game
    #[arg(long)]
    seed: Option<u64>,

    /// Cards dealt to each player (default: 13 heads-up, 7 otherwise)
    #[arg(long)]
    hand_size: Option<usize>,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::new(self.num_players, self.computers).with_debug(self.debug);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(size) = self.hand_size {
            config = config.with_hand_size(size);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the default level
    let level = if args.debug { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = args.config();
    let mut game = Game::new(&config).context("could not set up the game")?;
    let outcome = game.play().context("game aborted")?;

    print!("{}", render_scores(&outcome));
    Ok(())
}
