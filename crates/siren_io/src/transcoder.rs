//! External decoder adapter for `psp_at3tool`.

use siren_core::{AudioDecoder, DecodeStatus, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs the external ATRAC3 decoder, one blocking process per file.
///
/// The tool is invoked as `<tool> -d <input> <output>` and this adapter
/// simply waits for it to exit; interpreting the exit status (and deciding
/// whether to continue the batch) is left to the caller.
pub struct At3Tool {
    tool: PathBuf,
}

impl At3Tool {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    #[inline]
    pub fn tool_path(&self) -> &Path {
        &self.tool
    }
}

impl AudioDecoder for At3Tool {
    fn decode(&self, input: &Path, output: &Path) -> Result<DecodeStatus> {
        tracing::debug!(
            tool = %self.tool.display(),
            input = %input.display(),
            output = %output.display(),
            "spawning decoder"
        );

        let status = Command::new(&self.tool)
            .arg("-d")
            .arg(input)
            .arg(output)
            .status()?;

        if status.success() {
            Ok(DecodeStatus::Completed)
        } else {
            Ok(DecodeStatus::Failed(status.code()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn successful_exit_maps_to_completed() {
        let tool = At3Tool::new("true");
        let status = tool
            .decode(Path::new("in.at3"), Path::new("out.wav"))
            .unwrap();
        assert_eq!(status, DecodeStatus::Completed);
    }

    #[test]
    #[cfg(unix)]
    fn nonzero_exit_maps_to_failed() {
        let tool = At3Tool::new("false");
        let status = tool
            .decode(Path::new("in.at3"), Path::new("out.wav"))
            .unwrap();
        assert_eq!(status, DecodeStatus::Failed(Some(1)));
    }

    #[test]
    fn missing_tool_is_an_error() {
        let tool = At3Tool::new("/nonexistent/psp_at3tool");
        assert!(tool
            .decode(Path::new("in.at3"), Path::new("out.wav"))
            .is_err());
    }
}
