//! Hangman - CLI
//!
//! Hangman with TUI and CLI modes, plus an automated player for simulations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SimulationConfig, run_simple, run_simulation},
    game::GameEngine,
    interactive::{App, run_tui},
    logging::init_tracing,
    output::print_simulation_result,
    persistence::load_game,
    solver::GuesserType,
    wordlists::{RandomWordSource, SelectedWords, valid_words},
};
use std::path::{Path, PathBuf};

type Engine = GameEngine<RandomWordSource<SelectedWords>>;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word game with a terminal UI, a text mode and an automated player",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "HANGMAN_WORDLIST",
        default_value = "embedded"
    )]
    wordlist: String,

    /// File used by save and load
    #[arg(
        short = 'f',
        long,
        global = true,
        env = "HANGMAN_SAVE_FILE",
        default_value = "hangman.json"
    )]
    save_file: PathBuf,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Resume the game in the save file
        #[arg(short, long)]
        load: bool,
    },

    /// Simple CLI mode (line-oriented, no TUI)
    Simple {
        /// Resume the game in the save file
        #[arg(short, long)]
        load: bool,
    },

    /// Play every word in the list with an automated guesser
    Simulate {
        /// Limit number of words to play
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Guesser: candidates (default) or frequency
        #[arg(short, long, default_value = "candidates")]
        strategy: String,

        /// Never take the hint
        #[arg(long)]
        no_hints: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let words = SelectedWords::from_arg(&cli.wordlist);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { load: false });

    match command {
        Commands::Play { load } => {
            let engine = build_engine(words, cli.seed, &cli.save_file, load)?;
            run_tui(App::new(engine, cli.save_file))
        }
        Commands::Simple { load } => {
            let mut engine = build_engine(words, cli.seed, &cli.save_file, load)?;
            run_simple(&mut engine, &cli.save_file)
        }
        Commands::Simulate {
            count,
            strategy,
            no_hints,
        } => run_simulate_command(&words, count, &strategy, no_hints),
    }
}

fn build_engine(
    words: SelectedWords,
    seed: Option<u64>,
    save_file: &Path,
    load: bool,
) -> Result<Engine> {
    let source = match seed {
        Some(seed) => RandomWordSource::seeded(words, seed),
        None => RandomWordSource::new(words),
    };
    let mut engine = GameEngine::new(source);

    if load {
        load_game(&mut engine, save_file)
            .with_context(|| format!("could not resume {}", save_file.display()))?;
    }
    Ok(engine)
}

fn run_simulate_command(
    words: &SelectedWords,
    count: Option<usize>,
    strategy_name: &str,
    no_hints: bool,
) -> Result<()> {
    let valid = valid_words(words)?;
    let guesser = GuesserType::from_name(strategy_name, &valid.words);

    println!(
        "Simulating {} games with the {} guesser...",
        count.unwrap_or(valid.words.len()).min(valid.words.len()),
        guesser.name()
    );

    let config = SimulationConfig {
        limit: count,
        use_hints: !no_hints,
        ..SimulationConfig::default()
    };
    let result = run_simulation(&valid.words, &guesser, config)?;
    print_simulation_result(&result);
    Ok(())
}
