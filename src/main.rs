//! Wordle Game - CLI
//!
//! Play Wordle in a TUI or a plain line prompt, or score guesses directly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{evaluate_pair, run_audit, run_simple},
    game::Session,
    output::{print_audit_result, print_evaluation},
    vocabulary::{WordList, loader::load_vocabulary},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line); defaults to the embedded list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for secret selection (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line prompt without TUI)
    Simple,

    /// Score one guess against one secret
    Evaluate {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Check the evaluator against every word pair in the vocabulary
    Audit {
        /// Limit number of guess words to check
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let vocabulary = load_vocabulary(cli.wordlist.as_deref())?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&vocabulary, rng),
        Commands::Simple => run_simple_command(&vocabulary, rng),
        Commands::Evaluate { secret, guess } => run_evaluate_command(&secret, &guess, &vocabulary),
        Commands::Audit { limit } => {
            print_audit_result(&run_audit(&vocabulary, limit));
            Ok(())
        }
    }
}

fn run_play_command(vocabulary: &WordList, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(vocabulary, rng);
    run_tui(app)
}

fn run_simple_command(vocabulary: &WordList, mut rng: StdRng) -> Result<()> {
    let mut session = Session::new(vocabulary, &mut rng);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_simple(&mut session, &mut rng, &mut input, &mut out)?;
    Ok(())
}

fn run_evaluate_command(secret: &str, guess: &str, vocabulary: &WordList) -> Result<()> {
    let result = evaluate_pair(secret, guess, vocabulary)
        .with_context(|| format!("cannot score {guess:?} against {secret:?}"))?;
    print_evaluation(&result.secret, &result.guess, &result.feedback);
    if !result.in_vocabulary {
        println!("\nNote: not every word is in the word list");
    }
    Ok(())
}
