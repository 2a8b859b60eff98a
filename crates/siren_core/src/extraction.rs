//! End-to-end extraction driver: scan, read, store, report.

use crate::error::Result;
use crate::progress::ProgressMeter;
use crate::record::read_record;
use crate::scanner::{RiffScanner, ScanStep};
use crate::store::RecordStore;
use crate::traits::BlockSource;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Outcome of one extraction run.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    /// Distinct output paths; duplicate records collapse to one entry.
    pub paths: HashSet<PathBuf>,
    /// Markers matched, duplicates included.
    pub matches_found: u64,
}

impl ExtractionReport {
    pub fn distinct_files(&self) -> usize {
        self.paths.len()
    }
}

/// Scans `source` start to end and persists every RIFF record found.
///
/// The scan is strictly sequential: one cursor walks the source in
/// [`BLOCK_SIZE`](crate::scanner::BLOCK_SIZE) fills, and each confirmed
/// marker is materialized and stored before scanning resumes past its
/// payload. `on_progress` receives each newly distinct percentage value
/// (without the `%` sign), once per loop iteration at most.
///
/// Any I/O or truncation error aborts the run immediately; files already
/// persisted stay on disk, and re-running after a fix is idempotent thanks
/// to fingerprint naming.
pub fn extract_all<S, F>(source: S, out_dir: &Path, mut on_progress: F) -> Result<ExtractionReport>
where
    S: BlockSource,
    F: FnMut(&str),
{
    let store = RecordStore::new(out_dir)?;
    let total = source.size();
    let mut meter = ProgressMeter::new(total);
    let mut scanner = RiffScanner::new(source);
    let mut report = ExtractionReport::default();

    loop {
        match scanner.step()? {
            ScanStep::Match(m) => {
                let record = read_record(scanner.source_mut(), m.body_offset)?;
                scanner.seek(m.marker_offset + record.len() as u64);

                let path = store.persist(&record)?;
                report.matches_found += 1;
                tracing::debug!(
                    offset = m.marker_offset,
                    bytes = record.len(),
                    "record extracted"
                );
                report.paths.insert(path);
            }
            ScanStep::Advanced => {}
            ScanStep::Eof => break,
        }

        if let Some(value) = meter.update(scanner.position().min(total)) {
            on_progress(&value);
        }
    }

    Ok(report)
}
