//! Accuracy rating for the end-of-game summary
//!
//! Buckets:
//! - ≥90%: Trump Psychic
//! - ≥70%: Tweet Whisperer
//! - ≥50%: Not Bad... But Suspicious
//! - below: Easily Fooled by Fake News

/// Accuracy as a whole percentage: the ratio scaled by 100 in floating
/// point, then rounded half to even
pub fn accuracy_percent(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(score) / f64::from(total) * 100.0).round_ties_even() as u32
}

/// Qualitative label bucketed by accuracy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccuracyRating {
    Psychic,
    Whisperer,
    Suspicious,
    Fooled,
}

impl AccuracyRating {
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 90 {
            AccuracyRating::Psychic
        } else if percent >= 70 {
            AccuracyRating::Whisperer
        } else if percent >= 50 {
            AccuracyRating::Suspicious
        } else {
            AccuracyRating::Fooled
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccuracyRating::Psychic => "🧠 Trump Psychic!",
            AccuracyRating::Whisperer => "🕵️ Tweet Whisperer",
            AccuracyRating::Suspicious => "🧐 Not Bad... But Suspicious",
            AccuracyRating::Fooled => "🤡 Easily Fooled by Fake News",
        }
    }
}

/// Final result of a finished session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub total_rounds: u32,
    pub percent: u32,
    pub rating: AccuracyRating,
}

impl SessionSummary {
    pub fn new(score: u32, total_rounds: u32) -> Self {
        let percent = accuracy_percent(score, total_rounds);
        SessionSummary {
            score,
            total_rounds,
            percent,
            rating: AccuracyRating::from_percent(percent),
        }
    }
}
