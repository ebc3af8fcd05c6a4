//! Request/response handler behind the dashboard.
//!
//! Every UI interaction is one call to [`Dashboard::handle`] with a snapshot
//! of the widget values. The pipeline runs top to bottom (load, normalize,
//! augment, classify, aggregate) and returns a [`Page`] describing what to
//! draw. The only state kept between calls is the [`DatasetCache`].

pub mod cache;
pub mod events;
pub mod page;

pub use cache::DatasetCache;
pub use events::{Event, EVENT_HELP};
pub use page::{
    ChartSection, ComparisonSection, ManualSection, Notice, NoticeLevel, Page, PieSection,
    Presentation,
};

use crate::catalog::{catalog_titles, SHOW_CATALOG};
use crate::config::Config;
use crate::dataset::{augment, normalize, DataSource, Dataset};
use crate::error::Result;
use crate::report::{
    compare_shows, comparison_options, overall_distribution, show_pie, NO_COMPARISON_DATA_WARNING,
    NO_PIE_DATA_WARNING,
};
use crate::sentiment::{
    classify_text, describe, Classification, PolarityScorer, EMPTY_REVIEW_WARNING,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::{info, warn};

pub const DEFAULT_SOURCE_INFO: &str = "No file uploaded. Using default dataset.";
pub const DATASET_LOADED: &str = "Dataset loaded successfully.";
pub const MISSING_COLUMNS_ERROR: &str = "Dataset must contain 'review' and 'sentiment' columns.";

#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Snapshot of every widget value at the time of an interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    pub upload: Option<Upload>,
    pub manual_title: Option<String>,
    pub manual_text: String,
    /// The analyze button; only true for the interaction that pressed it.
    pub analyze: bool,
    pub pie_show: Option<String>,
    pub compare_first: Option<String>,
    pub compare_second: Option<String>,
}

impl WidgetState {
    /// Reset momentary widgets once a page has been rendered.
    pub fn end_turn(&mut self) {
        self.analyze = false;
    }
}

/// Resolve a picker value the way a select box does: a value outside the
/// options falls back to the first option.
pub fn resolve_selection(options: &[String], requested: Option<&str>) -> Option<String> {
    match requested {
        Some(value) if options.iter().any(|o| o == value) => Some(value.to_string()),
        Some(value) => {
            warn!(requested = value, "selection not among options, using first option");
            options.first().cloned()
        }
        None => options.first().cloned(),
    }
}

pub struct Dashboard<S, R = StdRng> {
    config: Config,
    scorer: S,
    rng: R,
    cache: DatasetCache,
}

impl<S: PolarityScorer> Dashboard<S, StdRng> {
    /// Seeded from `config.augment.seed`, or from entropy when unset.
    pub fn from_config(config: Config, scorer: S) -> Self {
        let rng = match config.augment.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Dashboard::new(config, scorer, rng)
    }
}

impl<S: PolarityScorer, R: Rng> Dashboard<S, R> {
    pub fn new(config: Config, scorer: S, rng: R) -> Self {
        Dashboard {
            config,
            scorer,
            rng,
            cache: DatasetCache::new(),
        }
    }

    /// Run the whole pipeline for one interaction.
    ///
    /// A table without the required columns is reported on the page. Any
    /// other load failure is returned as an error.
    pub fn handle(&mut self, state: &WidgetState) -> Result<Page> {
        let mut notices = Vec::new();
        let source = match &state.upload {
            Some(upload) => DataSource::Upload {
                name: upload.name.clone(),
                bytes: upload.bytes.clone(),
            },
            None => {
                notices.push(Notice::info(DEFAULT_SOURCE_INFO));
                DataSource::DefaultArchive {
                    path: PathBuf::from(&self.config.data.archive_path),
                    member: self.config.data.archive_member.clone(),
                }
            }
        };
        let source_name = match &source {
            DataSource::Upload { name, .. } => name.clone(),
            DataSource::DefaultArchive { path, member } => format!("{}#{}", path.display(), member),
        };

        let manual = state.analyze.then(|| self.manual_section(state));

        let key = source.fingerprint();
        let rng = &mut self.rng;
        let loaded = self.cache.get_or_try_insert(&key, || build_dataset(&source, rng));

        let presentation = match loaded {
            Ok(dataset) => {
                notices.push(Notice::success(DATASET_LOADED));
                Some(present(dataset, state, self.config.display.preview_rows))
            }
            Err(e) if e.is_reportable() => {
                warn!(error = %e, "dataset rejected");
                notices.push(Notice::error(MISSING_COLUMNS_ERROR));
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Page {
            source: source_name,
            notices,
            manual,
            presentation,
        })
    }

    fn manual_section(&self, state: &WidgetState) -> ManualSection {
        classify_manual(state.manual_title.as_deref(), &state.manual_text, &self.scorer)
    }
}

/// The "try it yourself" panel: classify `text` written about `title`.
///
/// `title` is resolved against the show catalog.
pub fn classify_manual<S: PolarityScorer + ?Sized>(
    title: Option<&str>,
    text: &str,
    scorer: &S,
) -> ManualSection {
    let title = resolve_selection(&catalog_titles(), title)
        .unwrap_or_else(|| SHOW_CATALOG[0].to_string());
    let classification = classify_text(text, scorer);
    let notice = match classification {
        Classification::Scored { verdict, polarity } => {
            info!(title = %title, %verdict, polarity, "classified manual review");
            Notice::success(describe(&title, verdict, polarity))
        }
        Classification::EmptyInput => Notice::warning(EMPTY_REVIEW_WARNING),
    };
    ManualSection {
        title,
        classification,
        notice,
    }
}

fn build_dataset<R: Rng>(source: &DataSource, rng: &mut R) -> Result<Dataset> {
    let raw = source.load()?;
    let labeled = normalize(raw);
    augment(labeled, &SHOW_CATALOG, rng)
}

fn present(dataset: &Dataset, state: &WidgetState, preview_rows: usize) -> Presentation {
    let titles = dataset.titles();

    let pie_selected = resolve_selection(&titles, state.pie_show.as_deref());
    let pie_chart = pie_selected.as_deref().and_then(|title| show_pie(dataset, title));
    let pie = PieSection {
        options: titles.clone(),
        selected: pie_selected,
        chart: ChartSection::from_option(pie_chart, NO_PIE_DATA_WARNING),
    };

    let first = resolve_selection(&titles, state.compare_first.as_deref());
    let second_options = match &first {
        Some(first) => comparison_options(&titles, first),
        None => Vec::new(),
    };
    let second = resolve_selection(&second_options, state.compare_second.as_deref());
    let comparison_chart = match (&first, &second) {
        (Some(a), Some(b)) => compare_shows(dataset, a, b),
        _ => None,
    };
    let comparison = ComparisonSection {
        first_options: titles,
        second_options,
        first,
        second,
        chart: ChartSection::from_option(comparison_chart, NO_COMPARISON_DATA_WARNING),
    };

    Presentation {
        total_records: dataset.len(),
        preview: dataset.head(preview_rows).to_vec(),
        overall: overall_distribution(dataset),
        pie,
        comparison,
    }
}
