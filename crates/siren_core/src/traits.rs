//! Core traits defining the seams between domain logic and infrastructure.
//!
//! These traits follow the Ports & Adapters pattern: the scan and decode
//! logic in this crate only sees these interfaces, and `siren_io` supplies
//! the concrete file and process implementations.

use crate::error::Result;
use std::path::Path;

/// A source of raw block data, typically a container file on disk.
///
/// This trait abstracts away the underlying storage, allowing the same
/// scanning logic to work on container files, disk images, or in-memory
/// fixtures in tests.
pub trait BlockSource {
    /// Reads a chunk of data from the source at the specified offset.
    ///
    /// Returns the number of bytes actually read, which may be less than
    /// `buffer.len()` if the end of the source is reached.
    fn read_chunk(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize>;

    /// Returns the total size of the source in bytes.
    fn size(&self) -> u64;
}

/// Outcome of a single external decode invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The decoder exited successfully.
    Completed,
    /// The decoder exited with a non-zero status (`None` if killed by signal).
    Failed(Option<i32>),
}

/// An external audio decoder, invoked once per extracted file.
///
/// Modeled as a capability rather than a concrete process spawn so the
/// conversion driver can be exercised without the real tool installed.
/// `siren_io::At3Tool` is the production implementation.
pub trait AudioDecoder {
    /// Decodes `input` into `output`, blocking until the decoder finishes.
    ///
    /// An `Err` means the decoder could not be run at all (e.g. the tool
    /// binary is missing); a completed run with a bad exit status is
    /// reported through [`DecodeStatus::Failed`] instead.
    fn decode(&self, input: &Path, output: &Path) -> Result<DecodeStatus>;
}
