use crate::error::{IoContext, SplitError};
use crate::reader::FastxReader;
use crate::writer::ChunkWriter;

use std::path::Path;

/// Totals reported after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSummary {
    pub records: u64,
    pub chunks: u64,
}

/// Split `input` into size-capped FASTA chunks under `out_dir`.
///
/// Pulls records from [`FastxReader`] one at a time and hands each to
/// [`ChunkWriter`]; no more than one record is held in memory. The first
/// I/O error on either side aborts the run.
pub fn split_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    out_dir: Q,
    max_bytes: u64,
) -> Result<SplitSummary, SplitError> {
    let input = input.as_ref();
    let in_size = std::fs::metadata(input)
        .map(|m| m.len())
        .map_err(|e| {
            SplitError::read_err(
                e,
                IoContext {
                    byte_pos: 0,
                    line_num: 0,
                },
            )
        })?;
    log::info!(
        "Reading from: {} ({} bytes), writing {} byte chunks to {}",
        input.display(),
        in_size,
        max_bytes,
        out_dir.as_ref().display()
    );

    let reader = FastxReader::from_path(input)?;
    let mut writer = ChunkWriter::new(out_dir, max_bytes)?;

    let mut records = 0u64;
    for rec in reader {
        writer.write(&rec?)?;
        records += 1;
    }
    let chunks = writer.finish()?;

    let summary = SplitSummary { records, chunks };
    log::info!(
        "All done: {} records across {} chunk files",
        summary.records,
        summary.chunks
    );
    Ok(summary)
}
