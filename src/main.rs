//! Wordle TUI - CLI
//!
//! Play Wordle in the terminal: today's official puzzle by default, or a
//! random or fixed answer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_tui::{
    answer::AnswerSource,
    core::{Verdicts, Word},
    interactive::{App, run_tui},
    output::print_score_result,
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Play Wordle in the terminal with the official daily puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer pool: 'embedded' (default) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    pool: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - plays today's official puzzle)
    Play {
        /// Play a fixed answer instead of fetching today's puzzle
        #[arg(short, long)]
        answer: Option<String>,

        /// Play a random answer from the pool instead
        #[arg(short, long, conflicts_with = "answer")]
        random: bool,
    },

    /// Score a guess against an answer without playing
    Score {
        /// The guess to score
        guess: String,

        /// The answer to score it against
        answer: String,
    },
}

/// Load the answer pool based on the -w flag
fn load_pool(pool_mode: &str) -> Result<Vec<Word>> {
    use wordle_tui::wordlists::loader::load_from_file;

    match pool_mode {
        "embedded" => Ok(words_from_slice(ANSWERS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Load the answer pool based on the -w flag
    let pool = load_pool(&cli.pool)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        answer: None,
        random: false,
    });

    match command {
        Commands::Play { answer, random } => run_play_command(answer.as_deref(), random, pool),
        Commands::Score { guess, answer } => run_score_command(&guess, &answer),
    }
}

fn run_play_command(answer: Option<&str>, random: bool, pool: Vec<Word>) -> Result<()> {
    let source = match answer {
        Some(text) => AnswerSource::Fixed(Word::new(text)?),
        None if random => AnswerSource::Random,
        None => AnswerSource::Daily,
    };

    let app = App::new(source, pool);
    run_tui(app)
}

fn run_score_command(guess: &str, answer: &str) -> Result<()> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let verdicts = Verdicts::score(&guess, &answer);

    print_score_result(&guess, &answer, verdicts);
    Ok(())
}
