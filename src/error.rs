use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Position in the input stream where a read failed.
#[derive(Debug, Clone, Copy)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

/// Fatal I/O failures. Malformed records are not errors: truncated FASTQ
/// quality degrades to a FASTA-shaped record inside the parser instead.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("input read error at {ctx:?}: {source}")]
    Read {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("output write error on {path:?}: {source}")]
    Write {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
}

impl SplitError {
    pub(crate) fn read_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Read { source, ctx }
    }
    pub(crate) fn write_err(source: io::Error, path: PathBuf) -> Self {
        Self::Write { source, path }
    }
}
