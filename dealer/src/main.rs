use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dealer::{builtin_deck, load_deck, play_game, Config, MatchScore, Recorder, Seats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use trunfo::{render_summary, GameConfig, TieRule};

#[derive(Parser)]
struct Args {
    /// Path to a JSON deck. Defaults to the built-in car deck
    #[arg(long)]
    deck: Option<PathBuf>,

    /// How many computer players sit at the table
    #[arg(short = 'b', long, default_value_t = 3)]
    num_bots: usize,

    /// Name of the human player
    #[arg(long, default_value = "Player")]
    name: String,

    /// Leave out the human player and let the computer players play alone
    #[arg(long, default_value_t = false)]
    bots_only: bool,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// What happens to the cards of players left out of a tie
    #[arg(long, value_enum, default_value_t = TieRuleArg::Discard)]
    tie_rule: TieRuleArg,

    /// End a game after this many rounds. Defaults to ten rounds per card
    #[arg(long)]
    max_rounds: Option<usize>,

    /// Record the games' rounds as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum TieRuleArg {
    Discard,
    CarryOver,
}

impl From<TieRuleArg> for TieRule {
    fn from(arg: TieRuleArg) -> Self {
        match arg {
            TieRuleArg::Discard => TieRule::Discard,
            TieRuleArg::CarryOver => TieRule::CarryOver,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seats = Seats {
        human: (!args.bots_only).then(|| args.name.clone()),
        num_bots: args.num_bots,
    };
    let names = seats.names();
    if names.len() < 2 {
        anyhow::bail!(
            "At least two players are needed, but only {} would sit at the table",
            names.len()
        );
    }

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };
    let mut config = Config {
        rng: StdRng::seed_from_u64(seed),
        recorder,
        game: GameConfig {
            tie_rule: args.tie_rule.into(),
            max_rounds: args.max_rounds,
        },
    };

    let mut match_score = MatchScore::new(names.len());
    for game_idx in 0..args.num_games {
        // Cards are moved around during a game, so every game gets a fresh deck.
        let deck = match &args.deck {
            Some(path) => load_deck(path)?,
            None => builtin_deck()?,
        };
        let standings = play_game(&mut config, seats.players(), deck, seats.has_human())?;
        debug!(game_idx, rounds = standings.rounds_played, end_reason = ?standings.end_reason);
        if seats.has_human() || args.num_games == 1 {
            println!("\n{}", render_summary(&standings));
        }
        match_score.record(&standings);
    }

    if args.num_games > 1 {
        eprintln!("{}", match_score.render(&names));
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
