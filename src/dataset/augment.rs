use super::{Dataset, LabeledReview, ReviewRecord};
use crate::catalog::YEAR_RANGE;
use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

/// Attach a synthetic title and year to every review.
///
/// Titles come from `catalog` repeated cyclically to the dataset length and
/// then shuffled, so per-title counts differ by at most one. Years are drawn
/// independently and uniformly from [`YEAR_RANGE`].
pub fn augment<R: Rng + ?Sized>(
    reviews: Vec<LabeledReview>,
    catalog: &[&str],
    rng: &mut R,
) -> Result<Dataset> {
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let mut titles: Vec<&str> = catalog.iter().cycle().take(reviews.len()).copied().collect();
    titles.shuffle(rng);

    let records: Vec<ReviewRecord> = reviews
        .into_iter()
        .zip(titles)
        .map(|(review, title)| ReviewRecord {
            review: review.review,
            sentiment: review.sentiment,
            title: title.to_string(),
            year: rng.gen_range(YEAR_RANGE),
        })
        .collect();

    info!(records = records.len(), titles = catalog.len(), "augmented dataset");
    Ok(Dataset::new(records))
}
