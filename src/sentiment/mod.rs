//! Manual sentiment classification for free-text reviews.
//!
//! The dashboard lets a user type a review for one of the catalog shows and
//! get an instant verdict. Scoring is delegated to a [`PolarityScorer`], which
//! maps text to a polarity in `[-1, 1]`; this module only thresholds that
//! value.
//!
//! ## Verdicts
//!
//! | Polarity | Verdict  |
//! |----------|----------|
//! | `p > 0`  | Positive |
//! | `p < 0`  | Negative |
//! | `p == 0` | Neutral  |
//!
//! `Neutral` only exists here. The dataset itself is two-class
//! ([`crate::dataset::Sentiment`]) and the two label sets are kept apart.
//!
//! ## Scorers
//!
//! - [`LexiconScorer`]: word-list scorer with intensifier and negation handling
//! - any `Fn(&str) -> f64` closure, handy for tests and for plugging in an
//!   external model

pub mod lexicon;
pub use lexicon::LexiconScorer;

use serde::Serialize;
use std::fmt;

pub const EMPTY_REVIEW_WARNING: &str = "Please enter a review to analyze.";

/// Opaque polarity function.
pub trait PolarityScorer {
    /// Polarity of `text`, expected in `[-1, 1]`.
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Three-way label for manually entered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Positive,
    Negative,
    Neutral,
}

impl Verdict {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Verdict::Positive
        } else if polarity < 0.0 {
            Verdict::Negative
        } else {
            Verdict::Neutral
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Positive => "Positive",
            Verdict::Negative => "Negative",
            Verdict::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Classification {
    Scored { verdict: Verdict, polarity: f64 },
    EmptyInput,
}

/// Score `text` unless it is blank.
pub fn classify_text<S: PolarityScorer + ?Sized>(text: &str, scorer: &S) -> Classification {
    if text.trim().is_empty() {
        return Classification::EmptyInput;
    }
    let polarity = scorer.polarity(text);
    Classification::Scored {
        verdict: Verdict::from_polarity(polarity),
        polarity,
    }
}

/// Status line for a scored review of `title`.
pub fn describe(title: &str, verdict: Verdict, polarity: f64) -> String {
    format!("{title} → Sentiment: {verdict} (Polarity: {polarity:.2})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn sign_decides_verdict() {
        assert_eq!(classify_text("x", &|_: &str| 0.4), Classification::Scored {
            verdict: Verdict::Positive,
            polarity: 0.4
        });
        assert_eq!(classify_text("x", &|_: &str| -0.01), Classification::Scored {
            verdict: Verdict::Negative,
            polarity: -0.01
        });
        assert_eq!(classify_text("x", &|_: &str| 0.0), Classification::Scored {
            verdict: Verdict::Neutral,
            polarity: 0.0
        });
    }

    #[test]
    fn blank_text_is_not_scored() {
        let calls = Cell::new(0);
        let scorer = |_: &str| {
            calls.set(calls.get() + 1);
            1.0
        };
        assert_eq!(classify_text("   ", &scorer), Classification::EmptyInput);
        assert_eq!(classify_text("", &scorer), Classification::EmptyInput);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn description_rounds_to_two_places() {
        assert_eq!(
            describe("Dark", Verdict::Positive, 0.456),
            "Dark → Sentiment: Positive (Polarity: 0.46)"
        );
        assert_eq!(
            describe("Dark", Verdict::Negative, -0.333),
            "Dark → Sentiment: Negative (Polarity: -0.33)"
        );
    }
}
