//! Content-addressed persistence for extracted records.

use crate::error::Result;
use crate::record::RiffRecord;
use md5::{Digest, Md5};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension given to every persisted record.
pub const OUTPUT_EXTENSION: &str = "at3";

/// Writes records into an output directory, one file per distinct content
/// fingerprint.
///
/// The filename is the lowercase hex MD5 of the full record bytes, so two
/// byte-identical records map to the same path regardless of where in the
/// source they were found. A path that already exists is left untouched:
/// same fingerprint, same content, and re-runs against a populated directory
/// are no-ops.
pub struct RecordStore {
    out_dir: PathBuf,
}

impl RecordStore {
    /// Creates the output directory if needed.
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir)?;
        Ok(Self { out_dir })
    }

    #[inline]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Persists `record`, returning the fingerprint-derived path.
    pub fn persist(&self, record: &RiffRecord) -> Result<PathBuf> {
        let digest = Md5::digest(record.as_bytes());
        let path = self
            .out_dir
            .join(format!("{}.{}", hex::encode(digest), OUTPUT_EXTENSION));

        if !path.exists() {
            fs::write(&path, record.as_bytes())?;
            tracing::debug!(path = %path.display(), bytes = record.len(), "record written");
        }

        Ok(path)
    }
}
