use crate::dataset::Dataset;
use crate::error::Result;
use tracing::debug;

struct CacheEntry {
    key: String,
    dataset: Dataset,
}

/// Keeps the last built dataset so repeated interactions against the same
/// source see the same synthetic titles and years.
#[derive(Default)]
pub struct DatasetCache {
    entry: Option<CacheEntry>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `key`, building it on a miss.
    ///
    /// A failed build leaves the cache empty.
    pub fn get_or_try_insert<F>(&mut self, key: &str, build: F) -> Result<&Dataset>
    where
        F: FnOnce() -> Result<Dataset>,
    {
        let entry = match self.entry.take() {
            Some(entry) if entry.key == key => {
                debug!(key, "dataset cache hit");
                entry
            }
            _ => {
                debug!(key, "dataset cache miss");
                CacheEntry {
                    key: key.to_string(),
                    dataset: build()?,
                }
            }
        };
        Ok(&self.entry.insert(entry).dataset)
    }

    #[cfg(test)]
    fn key(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.key.as_str())
    }
}
