//! Tweet Trivia - guess which of two tweets is real
//!
//! Single-session, single-player terminal game. Ten rounds, one score,
//! nothing persisted between runs.

mod cli;
mod config;
mod data;
mod error;
mod session;

use clap::Parser;
use cli::{Command, Display, InputHandler};
use config::{Args, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use session::{expire_feedback, reset, submit_answer, SessionState};
use std::error::Error;
use std::fs::File;
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Route logs to a file when asked, otherwise keep stderr quiet so the
/// game screen is not overwritten
fn init_logging(args: &Args) -> Result<(), Box<dyn Error>> {
    let default_level = if args.debug { "debug" } else { "info" };

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| format!("tweet_trivia={}", default_level).into()),
                )
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "tweet_trivia=warn".into()),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn render(display: &Display, state: &SessionState) -> Result<(), Box<dyn Error>> {
    display.clear()?;

    let Some(round) = state.current() else {
        display.show_summary(&state.summary())?;
        display.show_help(7, state.phase())?;
        return Ok(());
    };

    display.show_header(state.current_round(), state.total_rounds(), state.score())?;

    let mut row = 4;
    for slot in [session::Slot::First, session::Slot::Second] {
        row = display.show_tweet(row, slot, round.text(slot))?;
    }

    if let Some(feedback) = state.last_feedback() {
        display.show_feedback(row, feedback)?;
    }
    display.show_help(row + 2, state.phase())?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(&args)?;
    let config = GameConfig::from(&args);

    let pool = match data::load_pool(&config.data_path) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "cannot start game");
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut state = SessionState::start(&pool, config.total_rounds, &mut rng)?;
    let mut games_played = 0u32;

    let display = Display::new();
    let input = InputHandler::new();
    InputHandler::enable_raw_mode()?;
    display.hide_cursor()?;

    // Redraw only when something changed
    let mut dirty = true;

    'game: loop {
        let had_feedback = state.last_feedback().is_some();
        state = expire_feedback(state, Instant::now(), config.feedback_ttl);
        dirty |= had_feedback && state.last_feedback().is_none();

        if dirty {
            render(&display, &state)?;
            dirty = false;
        }

        let Some(key) = input.read_key()? else {
            continue;
        };

        match InputHandler::command(&key, state.phase()) {
            Some(Command::Quit) => break 'game,
            Some(Command::Choose(slot)) => {
                let transition = submit_answer(state, slot, Instant::now());
                state = transition.state;
                if transition.verdict.is_some() && state.is_game_over() {
                    games_played += 1;
                }
                dirty = transition.verdict.is_some();
            }
            Some(Command::PlayAgain) => {
                state = reset(state, &pool, &mut rng)?;
                dirty = true;
            }
            None => {}
        }
    }

    // Cleanup
    InputHandler::disable_raw_mode()?;
    display.clear()?;
    display.shutdown()?;

    if state.is_game_over() {
        let summary = state.summary();
        println!(
            "🏁 Final score: {} / {} ({}%) {}",
            summary.score,
            summary.total_rounds,
            summary.percent,
            summary.rating.label()
        );
    }
    tracing::info!(games_played, "exiting");
    println!("🇺🇸 Thanks for playing!");

    Ok(())
}
