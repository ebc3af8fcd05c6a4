use crate::dataset::ReviewRecord;
use crate::report::{Comparison, Distribution, PieChart};
use crate::sentiment::Classification;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { level: NoticeLevel::Error, message: message.into() }
    }
}

/// A chart that was either drawn or skipped with a warning.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartSection<T> {
    Rendered { chart: T },
    Skipped { warning: Notice },
}

impl<T> ChartSection<T> {
    pub fn from_option(chart: Option<T>, warning: &str) -> Self {
        match chart {
            Some(chart) => ChartSection::Rendered { chart },
            None => ChartSection::Skipped { warning: Notice::warning(warning) },
        }
    }

    pub fn chart(&self) -> Option<&T> {
        match self {
            ChartSection::Rendered { chart } => Some(chart),
            ChartSection::Skipped { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManualSection {
    pub title: String,
    pub classification: Classification,
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSection {
    pub options: Vec<String>,
    pub selected: Option<String>,
    pub chart: ChartSection<PieChart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSection {
    pub first_options: Vec<String>,
    pub second_options: Vec<String>,
    pub first: Option<String>,
    pub second: Option<String>,
    pub chart: ChartSection<Comparison>,
}

/// Everything past the column check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub total_records: usize,
    pub preview: Vec<ReviewRecord>,
    pub overall: Distribution,
    pub pie: PieSection,
    pub comparison: ComparisonSection,
}

/// Render model for one interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub source: String,
    pub notices: Vec<Notice>,
    pub manual: Option<ManualSection>,
    pub presentation: Option<Presentation>,
}
