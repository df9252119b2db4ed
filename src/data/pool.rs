//! Tweet pool loading
//!
//! The data file is a JSON array of `{ "real": "...", "fake": "..." }`
//! objects. Pairs with a blank side are dropped; an empty result is an error.

use crate::error::GameError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One real tweet and its fabricated counterpart
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TweetPair {
    pub real: String,
    pub fake: String,
}

impl TweetPair {
    #[cfg(test)]
    pub fn new(real: impl Into<String>, fake: impl Into<String>) -> Self {
        TweetPair {
            real: real.into(),
            fake: fake.into(),
        }
    }

    fn is_playable(&self) -> bool {
        !self.real.trim().is_empty() && !self.fake.trim().is_empty()
    }
}

/// Load the tweet pool from a JSON file
pub fn load_pool(path: impl AsRef<Path>) -> Result<Vec<TweetPair>, GameError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(GameError::DataNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let pool = parse_pool(&content)?;

    tracing::info!(path = %path.display(), pairs = pool.len(), "tweet pool loaded");
    Ok(pool)
}

/// Parse and validate an in-memory JSON pool
pub fn parse_pool(json: &str) -> Result<Vec<TweetPair>, GameError> {
    let raw: Vec<TweetPair> = serde_json::from_str(json)?;
    let total = raw.len();

    let pool: Vec<TweetPair> = raw.into_iter().filter(TweetPair::is_playable).collect();

    if pool.len() < total {
        tracing::warn!(
            skipped = total - pool.len(),
            "skipping tweet pairs with blank text"
        );
    }

    if pool.is_empty() {
        return Err(GameError::EmptyPool);
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_pool() {
        let pool = parse_pool(r#"[{"real": "A", "fake": "B"}, {"real": "C", "fake": "D"}]"#)
            .unwrap();
        assert_eq!(pool, vec![TweetPair::new("A", "B"), TweetPair::new("C", "D")]);
    }

    #[test]
    fn test_blank_pairs_skipped() {
        let pool = parse_pool(r#"[{"real": "  ", "fake": "B"}, {"real": "C", "fake": "D"}]"#)
            .unwrap();
        assert_eq!(pool, vec![TweetPair::new("C", "D")]);
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert!(matches!(parse_pool("[]"), Err(GameError::EmptyPool)));
        assert!(matches!(
            parse_pool(r#"[{"real": "", "fake": ""}]"#),
            Err(GameError::EmptyPool)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_pool(r#"{"real": "A"}"#),
            Err(GameError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tweets.json");
        match load_pool(&path) {
            Err(GameError::DataNotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("expected DataNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"real": "Big day today!", "fake": "Small day today."}}]"#).unwrap();

        let pool = load_pool(file.path()).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].real, "Big day today!");
    }
}
