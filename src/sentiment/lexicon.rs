//! Lexicon-based polarity scorer for short reviews.
//! Word polarities are averaged; an intensifier scales the immediately
//! following word and negations flip and dampen opinion words in a short window.

use super::PolarityScorer;
use std::collections::HashMap;

// Opinion words with polarity in [-1, 1]
const OPINION_WORDS: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("captivating", 0.7),
    ("charming", 0.6),
    ("clever", 0.5),
    ("compelling", 0.6),
    ("delightful", 0.8),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("enjoyable", 0.5),
    ("excellent", 1.0),
    ("fantastic", 0.8),
    ("fun", 0.3),
    ("funny", 0.25),
    ("gorgeous", 0.7),
    ("great", 0.8),
    ("good", 0.7),
    ("gripping", 0.6),
    ("happy", 0.8),
    ("hilarious", 0.6),
    ("incredible", 0.9),
    ("interesting", 0.5),
    ("like", 0.2),
    ("liked", 0.3),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("masterpiece", 1.0),
    ("nice", 0.6),
    ("outstanding", 0.9),
    ("perfect", 1.0),
    ("powerful", 0.4),
    ("recommend", 0.5),
    ("superb", 1.0),
    ("terrific", 0.9),
    ("wonderful", 1.0),
    ("worth", 0.3),
    // negative
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("bland", -0.4),
    ("boring", -1.0),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("dreadful", -0.9),
    ("dull", -0.5),
    ("hate", -0.8),
    ("hated", -0.9),
    ("horrible", -1.0),
    ("lame", -0.5),
    ("mediocre", -0.5),
    ("mess", -0.5),
    ("pathetic", -1.0),
    ("pointless", -0.6),
    ("poor", -0.4),
    ("predictable", -0.3),
    ("ridiculous", -0.5),
    ("sad", -0.5),
    ("slow", -0.3),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("ugly", -0.7),
    ("waste", -0.6),
    ("weak", -0.4),
    ("worse", -0.6),
    ("worst", -1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("completely", 1.5),
    ("extremely", 1.6),
    ("highly", 1.4),
    ("incredibly", 1.5),
    ("pretty", 1.1),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.2),
    ("totally", 1.5),
    ("truly", 1.3),
    ("utterly", 1.6),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "cannot", "can't", "won't",
    "wouldn't", "shouldn't", "couldn't", "doesn't", "didn't", "don't", "isn't", "aren't",
    "wasn't", "weren't", "hasn't", "haven't", "hadn't",
];

/// Tokens after a negation that it still applies to.
const NEGATION_WINDOW: usize = 3;
/// Negated opinion words flip sign and lose half their weight.
const NEGATION_FACTOR: f64 = -0.5;

pub struct LexiconScorer {
    opinions: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        LexiconScorer {
            opinions: OPINION_WORDS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphabetic() && c != '\'')
            .map(|w| w.trim_matches('\''))
            .filter(|w| !w.is_empty())
            .map(|w| w.to_string())
            .collect()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores: Vec<f64> = Vec::new();
        let mut intensity = 1.0;
        let mut negation_left = 0usize;

        for token in Self::tokenize(text) {
            let token = token.as_str();
            if NEGATIONS.contains(&token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }

            if let Some(&factor) = self.intensifiers.get(token) {
                intensity *= factor;
            } else {
                if let Some(&polarity) = self.opinions.get(token) {
                    let mut score = (polarity * intensity).clamp(-1.0, 1.0);
                    if negation_left > 0 {
                        score *= NEGATION_FACTOR;
                    }
                    scores.push(score);
                }
                intensity = 1.0;
            }
            negation_left = negation_left.saturating_sub(1);
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
