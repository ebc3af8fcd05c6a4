use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use review_sentiment::dataset::{
    augment, capitalize, load_archive, load_upload, normalize, LabeledReview, RawReview,
};
use review_sentiment::report::{compare_shows, overall_distribution, show_pie};
use review_sentiment::{
    classify_text, Classification, Error, Sentiment, Verdict, SHOW_CATALOG, YEAR_RANGE,
};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn write_archive(dir: &TempDir, member: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("data.csv.zip");
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);
    zip.start_file(member, SimpleFileOptions::default()).unwrap();
    zip.write_all(content.as_bytes()).unwrap();
    zip.finish().unwrap();
    path
}

fn labeled(n: usize) -> Vec<LabeledReview> {
    (0..n)
        .map(|i| LabeledReview {
            review: format!("r{i}"),
            sentiment: if i < n / 2 { Sentiment::Positive } else { Sentiment::Negative },
        })
        .collect()
}

// ═══════════════════════════════════════════════
// Loading
// ═══════════════════════════════════════════════

#[test]
fn archive_member_is_parsed() {
    let tmp = TempDir::new().unwrap();
    let path = write_archive(
        &tmp,
        "reviews.csv",
        "review,sentiment\nGreat,positive\nBad,NEGATIVE\n",
    );
    let rows = load_archive(&path, "reviews.csv").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].sentiment, "NEGATIVE");
}

#[test]
fn missing_archive_member_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = write_archive(&tmp, "other.csv", "review,sentiment\n");
    let err = load_archive(&path, "reviews.csv").unwrap_err();
    assert!(matches!(err, Error::ArchiveMember { .. }));
    assert!(!err.is_reportable());
}

#[test]
fn non_zip_archive_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.zip");
    std::fs::write(&path, b"definitely not a zip").unwrap();
    assert!(matches!(load_archive(&path, "reviews.csv"), Err(Error::Zip(_))));
}

#[test]
fn bundled_archive_loads() {
    let rows = load_archive("data/reviews.csv.zip", "reviews.csv").unwrap();
    let labeled = normalize(rows);
    assert_eq!(labeled.len(), 48);
}

// ═══════════════════════════════════════════════
// Normalize + augment
// ═══════════════════════════════════════════════

#[test]
fn uppercase_label_is_kept_and_neutral_dropped() {
    let rows = load_upload(b"review,sentiment\nmeh,Neutral\nugh,NEGATIVE\nyay,positive\n").unwrap();
    let labeled = normalize(rows);
    let sentiments: Vec<Sentiment> = labeled.iter().map(|r| r.sentiment).collect();
    assert_eq!(sentiments, vec![Sentiment::Negative, Sentiment::Positive]);
}

#[test]
fn thirty_two_balanced_rows_give_two_per_title() {
    let mut rng = StdRng::seed_from_u64(2024);
    let dataset = augment(labeled(32), &SHOW_CATALOG, &mut rng).unwrap();
    for title in SHOW_CATALOG {
        assert_eq!(dataset.for_title(title).count(), 2, "{title}");
    }
    let overall = overall_distribution(&dataset);
    assert_eq!(overall.count(Sentiment::Positive), 16);
    assert_eq!(overall.count(Sentiment::Negative), 16);
}

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[pP][oO][sS][iI][tT][iI][vV][eE]",
        "[nN][eE][gG][aA][tT][iI][vV][eE]",
        "\\PC{0,12}",
    ]
}

proptest! {
    #[test]
    fn normalize_keeps_exactly_two_class_rows(labels in prop::collection::vec(label_strategy(), 0..40)) {
        let rows: Vec<RawReview> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| RawReview { review: format!("r{i}"), sentiment: label.clone() })
            .collect();
        let expected: Vec<(String, Sentiment)> = rows
            .iter()
            .filter_map(|r| {
                let label = capitalize(&r.sentiment);
                match label.as_str() {
                    "Positive" => Some((r.review.clone(), Sentiment::Positive)),
                    "Negative" => Some((r.review.clone(), Sentiment::Negative)),
                    _ => None,
                }
            })
            .collect();

        let kept: Vec<(String, Sentiment)> =
            normalize(rows).into_iter().map(|r| (r.review, r.sentiment)).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn verdict_follows_polarity_sign(p in -1.0f64..=1.0, text in "[a-z]{1,20}") {
        let scorer = move |_: &str| p;
        let expected = if p > 0.0 {
            Verdict::Positive
        } else if p < 0.0 {
            Verdict::Negative
        } else {
            Verdict::Neutral
        };
        let first = classify_text(&text, &scorer);
        prop_assert_eq!(first, Classification::Scored { verdict: expected, polarity: p });
        prop_assert_eq!(classify_text(&text, &scorer), first);
    }

    #[test]
    fn title_counts_stay_within_one(n in 0usize..400, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let dataset = augment(labeled(n), &SHOW_CATALOG, &mut rng).unwrap();

        let mut counts: HashMap<&str, usize> = SHOW_CATALOG.iter().map(|t| (*t, 0)).collect();
        for record in dataset.records() {
            *counts.get_mut(record.title.as_str()).unwrap() += 1;
            prop_assert!(YEAR_RANGE.contains(&record.year));
        }
        let floor = n / SHOW_CATALOG.len();
        let ceil = n.div_ceil(SHOW_CATALOG.len());
        for count in counts.values() {
            prop_assert!(*count == floor || *count == ceil);
        }
        prop_assert_eq!(dataset.len(), n);
    }

    #[test]
    fn comparison_percentages_sum_to_hundred(n in 2usize..200, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let dataset = augment(labeled(n), &SHOW_CATALOG, &mut rng).unwrap();
        let titles = dataset.titles();
        prop_assume!(titles.len() >= 2);

        let cmp = compare_shows(&dataset, &titles[0], &titles[1]).unwrap();
        let first: f64 = cmp.bars.iter().map(|b| b.first).sum();
        let second: f64 = cmp.bars.iter().map(|b| b.second).sum();
        prop_assert!((first - 100.0).abs() < 1e-9);
        prop_assert!((second - 100.0).abs() < 1e-9);
        for bar in &cmp.bars {
            prop_assert!((0.0..=100.0).contains(&bar.first));
            prop_assert!((0.0..=100.0).contains(&bar.second));
        }
    }
}

#[test]
fn pie_for_absent_show_reports_no_data() {
    let mut rng = StdRng::seed_from_u64(5);
    // Four rows only cover the first four catalog titles.
    let dataset = augment(labeled(4), &SHOW_CATALOG, &mut rng).unwrap();
    assert!(show_pie(&dataset, "Beef").is_none());
    assert!(show_pie(&dataset, SHOW_CATALOG[0]).is_some());
}
