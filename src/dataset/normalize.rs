use super::{LabeledReview, RawReview, Sentiment};
use tracing::debug;

/// First character uppercased, the rest lowercased. No trimming.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Keep rows whose capitalized label is exactly Positive or Negative.
pub fn normalize(raw: Vec<RawReview>) -> Vec<LabeledReview> {
    let total = raw.len();
    let kept: Vec<LabeledReview> = raw
        .into_iter()
        .filter_map(|row| {
            Sentiment::from_label(&capitalize(&row.sentiment)).map(|sentiment| LabeledReview {
                review: row.review,
                sentiment,
            })
        })
        .collect();
    debug!(kept = kept.len(), dropped = total - kept.len(), "normalized sentiment labels");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(review: &str, sentiment: &str) -> RawReview {
        RawReview {
            review: review.to_string(),
            sentiment: sentiment.to_string(),
        }
    }

    #[test]
    fn capitalize_matches_label_casing() {
        assert_eq!(capitalize("NEGATIVE"), "Negative");
        assert_eq!(capitalize("positive"), "Positive");
        assert_eq!(capitalize("pOSITIVE"), "Positive");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize(" positive"), " positive");
    }

    #[test]
    fn other_labels_are_dropped_not_coerced() {
        let rows = normalize(vec![
            raw("a", "NEGATIVE"),
            raw("b", "Neutral"),
            raw("c", "positive"),
            raw("d", ""),
            raw("e", "pos"),
            raw("f", "Positive "),
        ]);
        let labels: Vec<(&str, Sentiment)> =
            rows.iter().map(|r| (r.review.as_str(), r.sentiment)).collect();
        assert_eq!(labels, vec![("a", Sentiment::Negative), ("c", Sentiment::Positive)]);
    }

    #[test]
    fn review_text_is_untouched() {
        let rows = normalize(vec![raw("  MiXeD Case  ", "negative")]);
        assert_eq!(rows[0].review, "  MiXeD Case  ");
    }
}
