use super::RawReview;
use crate::error::{Error, Result};
use csv::ReaderBuilder;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use zip::result::ZipError;
use zip::ZipArchive;

pub const REQUIRED_COLUMNS: [&str; 2] = ["review", "sentiment"];

/// Where the current interaction's dataset comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Upload { name: String, bytes: Vec<u8> },
    DefaultArchive { path: PathBuf, member: String },
}

impl DataSource {
    /// Cache key: content hash for uploads, archive identity for the default.
    pub fn fingerprint(&self) -> String {
        match self {
            DataSource::Upload { bytes, .. } => {
                let mut hasher = Sha256::new();
                hasher.update(bytes);
                format!("upload:{:x}", hasher.finalize())
            }
            DataSource::DefaultArchive { path, member } => {
                format!("archive:{}#{}", path.display(), member)
            }
        }
    }

    pub fn load(&self) -> Result<Vec<RawReview>> {
        match self {
            DataSource::Upload { bytes, .. } => load_upload(bytes),
            DataSource::DefaultArchive { path, member } => load_archive(path, member),
        }
    }
}

/// Parse a comma-delimited table with a header row.
///
/// Column presence is checked before any row is read, so a table without
/// `review` or `sentiment` fails with [`Error::MissingColumns`] even when it
/// has no data rows. Short rows are read with their missing cells empty;
/// rows longer than the header are rejected.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<RawReview>> {
    let start = Instant::now();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns { missing });
    }

    let mut records: Vec<RawReview> = Vec::new();
    for row in rdr.records() {
        let row = row?;
        if row.len() > headers.len() {
            return Err(Error::TooManyFields {
                line: row.position().map_or(0, |p| p.line()),
                expected: headers.len(),
                found: row.len(),
            });
        }
        records.push(row.deserialize(Some(&headers))?);
    }
    info!(
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parsed review table"
    );
    Ok(records)
}

pub fn load_upload(bytes: &[u8]) -> Result<Vec<RawReview>> {
    load_csv(Cursor::new(bytes))
}

/// Open `member` inside the zip archive at `path` and parse it.
pub fn load_archive(path: impl AsRef<Path>, member: &str) -> Result<Vec<RawReview>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let entry = match archive.by_name(member) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(Error::ArchiveMember {
                archive: path.display().to_string(),
                member: member.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };
    info!(archive = %path.display(), member, "reading bundled dataset");
    load_csv(entry)
}
