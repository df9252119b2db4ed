//! Data: the labeled tweet pool
//!
//! # Components
//! - `pool.rs`: `TweetPair` and JSON loading

pub mod pool;

pub use pool::{load_pool, TweetPair};
