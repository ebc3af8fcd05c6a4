use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Dataset shape
    #[error("Dataset must contain 'review' and 'sentiment' columns (missing: {})", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Line {line}: expected {expected} fields, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Archive {archive} has no member named {member}")]
    ArchiveMember { archive: String, member: String },

    // Augmentation
    #[error("Show catalog is empty")]
    EmptyCatalog,

    // Interactive input
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    // Configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    // Pass-through from dependencies
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shape errors are reported on the page; everything else aborts the run.
    pub fn is_reportable(&self) -> bool {
        matches!(self, Error::MissingColumns { .. })
    }
}
