//! Chart data for the dashboard: overall distribution, per-show pie and the
//! two-show comparison.

pub mod render;

use crate::dataset::{Dataset, ReviewRecord, Sentiment};
use serde::Serialize;

pub const NO_PIE_DATA_WARNING: &str = "No reviews available for the selected show.";
pub const NO_COMPARISON_DATA_WARNING: &str = "One of the selected shows has no reviews to compare.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Counts per sentiment, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distribution {
    pub counts: Vec<SentimentCount>,
}

impl Distribution {
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a ReviewRecord>) -> Self {
        let mut counts: Vec<SentimentCount> = Vec::new();
        for record in records {
            match counts.iter_mut().find(|c| c.sentiment == record.sentiment) {
                Some(entry) => entry.count += 1,
                None => counts.push(SentimentCount {
                    sentiment: record.sentiment,
                    count: 1,
                }),
            }
        }
        Distribution { counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.counts
            .iter()
            .find(|c| c.sentiment == sentiment)
            .map_or(0, |c| c.count)
    }

    /// Share of `sentiment` in percent; 0 when absent or when nothing was counted.
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(sentiment) as f64 / total as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub sentiment: Sentiment,
    pub count: usize,
    pub percent: f64,
}

impl PieSlice {
    pub fn label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonBar {
    pub sentiment: Sentiment,
    pub first: f64,
    pub second: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first: String,
    pub second: String,
    pub bars: Vec<ComparisonBar>,
    pub y_range: (f64, f64),
}

pub fn overall_distribution(dataset: &Dataset) -> Distribution {
    Distribution::tally(dataset.records())
}

/// Pie data for one show; `None` when the show has no rows.
///
/// Only the classes present for the show get a slice.
pub fn show_pie(dataset: &Dataset, title: &str) -> Option<PieChart> {
    let distribution = Distribution::tally(dataset.for_title(title));
    if distribution.total() == 0 {
        return None;
    }
    let slices = distribution
        .counts
        .iter()
        .map(|c| PieSlice {
            sentiment: c.sentiment,
            count: c.count,
            percent: distribution.percentage(c.sentiment),
        })
        .collect();
    Some(PieChart {
        title: title.to_string(),
        slices,
    })
}

/// Options for the second comparison picker: every title except the first pick.
pub fn comparison_options(titles: &[String], first: &str) -> Vec<String> {
    titles.iter().filter(|t| t.as_str() != first).cloned().collect()
}

/// Positive/Negative percentages of two shows side by side.
///
/// `None` when either show has no rows.
pub fn compare_shows(dataset: &Dataset, first: &str, second: &str) -> Option<Comparison> {
    let a = Distribution::tally(dataset.for_title(first));
    let b = Distribution::tally(dataset.for_title(second));
    if a.total() == 0 || b.total() == 0 {
        return None;
    }
    let bars = Sentiment::ALL
        .iter()
        .map(|&sentiment| ComparisonBar {
            sentiment,
            first: a.percentage(sentiment),
            second: b.percentage(sentiment),
        })
        .collect();
    Some(Comparison {
        first: first.to_string(),
        second: second.to_string(),
        bars,
        y_range: (0.0, 100.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, sentiment: Sentiment) -> ReviewRecord {
        ReviewRecord {
            review: String::new(),
            sentiment,
            title: title.to_string(),
            year: 2018,
        }
    }

    fn sample() -> Dataset {
        use Sentiment::*;
        Dataset::new(vec![
            record("Dark", Negative),
            record("Dark", Positive),
            record("Dark", Positive),
            record("Ozark", Positive),
            record("Beef", Negative),
            record("Dark", Negative),
        ])
    }

    #[test]
    fn overall_follows_first_occurrence() {
        let dist = overall_distribution(&sample());
        assert_eq!(dist.counts[0].sentiment, Sentiment::Negative);
        assert_eq!(dist.count(Sentiment::Negative), 3);
        assert_eq!(dist.count(Sentiment::Positive), 3);
        assert_eq!(dist.total(), 6);
    }

    #[test]
    fn pie_only_has_present_classes() {
        let pie = show_pie(&sample(), "Ozark").unwrap();
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].percent, 100.0);
        assert_eq!(pie.slices[0].label(), "100.0%");
    }

    #[test]
    fn pie_for_unknown_show_is_empty() {
        assert!(show_pie(&sample(), "The Crown").is_none());
    }

    #[test]
    fn comparison_fills_missing_class_with_zero() {
        let cmp = compare_shows(&sample(), "Dark", "Ozark").unwrap();
        assert_eq!(cmp.bars[0].sentiment, Sentiment::Positive);
        assert_eq!(cmp.bars[0].first, 50.0);
        assert_eq!(cmp.bars[0].second, 100.0);
        assert_eq!(cmp.bars[1].sentiment, Sentiment::Negative);
        assert_eq!(cmp.bars[1].second, 0.0);
        assert_eq!(cmp.y_range, (0.0, 100.0));
    }

    #[test]
    fn comparison_needs_rows_on_both_sides() {
        assert!(compare_shows(&sample(), "Dark", "You").is_none());
        assert!(compare_shows(&sample(), "You", "Dark").is_none());
    }

    #[test]
    fn second_picker_excludes_first() {
        let titles = sample().titles();
        assert_eq!(comparison_options(&titles, "Ozark"), vec!["Dark", "Beef"]);
    }
}
