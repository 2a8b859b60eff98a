//! Block reader implementation for container files.

use siren_core::{BlockSource, Result};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// A read-only block source over a container file on disk.
///
/// `ContainerReader` implements the `BlockSource` trait for any file-like
/// input holding embedded RIFF payloads — typically a PSP `cfc.dig`-style
/// game data container, but any opaque binary file works.
///
/// The file is opened read-only and never written to; the scan holds the
/// only handle for its duration.
pub struct ContainerReader {
    file: File,
    size: u64,
}

impl ContainerReader {
    /// Opens `path` for scanning.
    ///
    /// Fails if the file does not exist, cannot be read, or its size cannot
    /// be determined.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(false)
            .open(path.as_ref())?;

        #[cfg(target_os = "linux")]
        {
            use rustix::fs::{fadvise, Advice};

            // One forward pass over a potentially large file.
            let _ = fadvise(&file, 0, None, Advice::Sequential);
            let _ = fadvise(&file, 0, None, Advice::NoReuse);
        }

        let size = file.seek(SeekFrom::End(0))?;
        file.seek(SeekFrom::Start(0))?;

        Ok(Self { file, size })
    }
}

impl BlockSource for ContainerReader {
    fn read_chunk(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
        self.file.seek(SeekFrom::Start(offset))?;
        let bytes_read = self.file.read(buffer)?;

        Ok(bytes_read)
    }

    fn size(&self) -> u64 {
        self.size
    }
}
