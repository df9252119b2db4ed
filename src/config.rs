//! Command-line arguments and the game configuration built from them

use crate::session::{DEFAULT_FEEDBACK_TTL, DEFAULT_TOTAL_ROUNDS};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "Tweet Trivia")]
#[command(about = "Two tweets, one is real. Can you tell which?")]
pub struct Args {
    /// Path to the JSON file of real/fake tweet pairs
    #[arg(short, long, default_value = "tweets.json")]
    pub data: PathBuf,

    /// Rounds per session
    #[arg(short, long, default_value_t = DEFAULT_TOTAL_ROUNDS, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Seed for reproducible round selection
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How long answer feedback stays on screen (milliseconds)
    #[arg(long, default_value_t = DEFAULT_FEEDBACK_TTL.as_millis() as u64)]
    pub feedback_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Settings the game loop runs with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub data_path: PathBuf,
    pub total_rounds: u32,
    pub seed: Option<u64>,
    pub feedback_ttl: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            data_path: PathBuf::from("tweets.json"),
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            seed: None,
            feedback_ttl: DEFAULT_FEEDBACK_TTL,
        }
    }
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        GameConfig {
            data_path: args.data.clone(),
            total_rounds: args.rounds,
            seed: args.seed,
            feedback_ttl: Duration::from_millis(args.feedback_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match() {
        let args = Args::parse_from(["tweet-trivia"]);
        assert_eq!(GameConfig::from(&args), GameConfig::default());
        assert!(!args.debug);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "tweet-trivia",
            "-d",
            "data/pairs.json",
            "-r",
            "5",
            "-s",
            "42",
            "--feedback-ms",
            "800",
        ]);
        let config = GameConfig::from(&args);
        assert_eq!(config.data_path, PathBuf::from("data/pairs.json"));
        assert_eq!(config.total_rounds, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.feedback_ttl, Duration::from_millis(800));
    }

    #[test]
    fn test_default_data_file_ships_with_repo() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(GameConfig::default().data_path);
        let pool = crate::data::load_pool(path).unwrap();
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(Args::try_parse_from(["tweet-trivia", "--rounds", "0"]).is_err());
    }
}
