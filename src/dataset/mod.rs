//! Review dataset: loading, label normalization and synthetic augmentation.
//!
//! The dataset is built in three typed stages:
//!
//! 1. [`loader`] parses CSV rows into [`RawReview`] after checking that the
//!    `review` and `sentiment` columns exist.
//! 2. [`normalize`] capitalizes labels and keeps only Positive/Negative rows
//!    as [`LabeledReview`].
//! 3. [`augment`] attaches a synthetic show title and year to every row,
//!    producing the read-only [`Dataset`].

pub mod augment;
pub mod loader;
pub mod normalize;

pub use augment::augment;
pub use loader::{load_archive, load_csv, load_upload, DataSource};
pub use normalize::{capitalize, normalize};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A row as it appears in the source table. Cells missing from a short row
/// read as empty strings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawReview {
    #[serde(default, deserialize_with = "empty_if_missing")]
    pub review: String,
    #[serde(default, deserialize_with = "empty_if_missing")]
    pub sentiment: String,
}

fn empty_if_missing<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Two-class label carried by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Fixed order used by the comparison chart.
    pub const ALL: [Sentiment; 2] = [Sentiment::Positive, Sentiment::Negative];

    /// Exact match against an already capitalized label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Positive" => Some(Sentiment::Positive),
            "Negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledReview {
    pub review: String,
    pub sentiment: Sentiment,
}

/// A fully augmented row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRecord {
    pub review: String,
    pub sentiment: Sentiment,
    pub title: String,
    pub year: u16,
}

/// Augmented dataset, read-only for the rest of an interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ReviewRecord>,
}

impl Dataset {
    pub fn new(records: Vec<ReviewRecord>) -> Self {
        Dataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    pub fn head(&self, n: usize) -> &[ReviewRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Distinct titles in order of first appearance.
    pub fn titles(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if !seen.iter().any(|t| t == &record.title) {
                seen.push(record.title.clone());
            }
        }
        seen
    }

    pub fn for_title<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a ReviewRecord> + 'a {
        self.records.iter().filter(move |r| r.title == title)
    }
}
