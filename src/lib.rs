//! Streaming FASTA/FASTQ splitter.
//!
//! - Plain and `.gz` input (auto-detect).
//! - Streaming, record-by-record (no full-file buffering).
//! - Handles multi-line sequences and multi-line quality blocks.
//! - Truncated FASTQ degrades to a FASTA-shaped record instead of erroring.
//! - Output is re-chunked into size-capped files, split only at record
//!   boundaries, always FASTA-shaped (quality is discarded).

pub mod error;
pub mod reader;
pub mod record;
pub mod split;
pub mod writer;
mod util;

pub use crate::error::{IoContext, SplitError};
pub use crate::reader::FastxReader;
pub use crate::record::FastxRecord;
pub use crate::split::{SplitSummary, split_file};
pub use crate::writer::ChunkWriter;
