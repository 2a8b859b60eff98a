//! Batch conversion of extracted records through an external decoder.

use crate::traits::{AudioDecoder, DecodeStatus};
use std::path::PathBuf;

/// Outcome of a conversion batch.
#[derive(Debug, Default)]
pub struct DecodeSummary {
    /// WAV paths written by successful invocations.
    pub converted: Vec<PathBuf>,
    /// Input paths whose conversion failed or could not be started.
    pub failed: Vec<PathBuf>,
}

/// Decodes every input sequentially, one decoder invocation per file.
///
/// Output paths are the inputs with their extension replaced by `wav`.
/// Failures are logged and skipped: a bad exit status or an unrunnable
/// decoder never stops the rest of the batch, and extraction results on
/// disk are unaffected either way.
pub fn decode_all<D: AudioDecoder>(decoder: &D, inputs: &[PathBuf]) -> DecodeSummary {
    let mut summary = DecodeSummary::default();
    let total = inputs.len();

    for (i, input) in inputs.iter().enumerate() {
        let output = input.with_extension("wav");

        match decoder.decode(input, &output) {
            Ok(DecodeStatus::Completed) => {
                tracing::info!(
                    input = %input.display(),
                    output = %output.display(),
                    "converted ({}/{})",
                    i + 1,
                    total
                );
                summary.converted.push(output);
            }
            Ok(DecodeStatus::Failed(code)) => {
                tracing::warn!(
                    input = %input.display(),
                    exit_code = ?code,
                    "decoder reported failure, skipping file"
                );
                summary.failed.push(input.clone());
            }
            Err(e) => {
                tracing::warn!(
                    input = %input.display(),
                    error = %e,
                    "decoder could not be run, skipping file"
                );
                summary.failed.push(input.clone());
            }
        }
    }

    summary
}
