//! Review sentiment dashboard.
//!
//! Loads a labeled review dataset (an uploaded CSV or the bundled zip
//! archive), keeps the Positive/Negative rows, tags every row with a
//! synthetic show title and year, and computes the data behind the
//! dashboard's charts. Free text typed by the user is classified with a
//! pluggable [`PolarityScorer`].
//!
//! ```no_run
//! use review_sentiment::{Config, Dashboard, LexiconScorer, WidgetState};
//!
//! let mut dashboard = Dashboard::from_config(Config::default(), LexiconScorer::new());
//! let page = dashboard.handle(&WidgetState::default())?;
//! println!("{}", review_sentiment::render_text(&page));
//! # Ok::<(), review_sentiment::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod report;
pub mod sentiment;
pub mod session;

pub use catalog::{SHOW_CATALOG, YEAR_RANGE};
pub use config::Config;
pub use dataset::{Dataset, ReviewRecord, Sentiment};
pub use error::{Error, Result};
pub use report::render::render_text;
pub use sentiment::{classify_text, Classification, LexiconScorer, PolarityScorer, Verdict};
pub use session::{Dashboard, Event, Page, Upload, WidgetState};
