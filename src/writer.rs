use crate::error::SplitError;
use crate::record::FastxRecord;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Size-capped rotating record writer.
///
/// Records are appended to numbered files `ntdbout{N}.fasta` in the output
/// directory. After each record the accumulated byte count of the current
/// file is checked against the cap; once it is reached the file is closed
/// and the next one opened. The check runs only after a complete record, so
/// a record is never split across files and the record that pushes a chunk
/// over the cap stays in that chunk.
///
/// Output is always FASTA-shaped (`>` + name + newline + sequence, with no
/// newline after the sequence); quality strings are discarded.
pub struct ChunkWriter {
    out_dir: PathBuf,
    max_bytes: u64,
    index: u64,
    current_path: PathBuf,
    current: BufWriter<File>,
    written: u64,
}

fn open_chunk(path: &Path) -> Result<BufWriter<File>, SplitError> {
    let f = File::create(path).map_err(|e| SplitError::write_err(e, path.to_path_buf()))?;
    log::info!("Writing to {}...", path.display());
    Ok(BufWriter::new(f))
}

impl ChunkWriter {
    /// Create the writer and open chunk 0 immediately (truncating any
    /// existing file of the same name).
    pub fn new<P: AsRef<Path>>(out_dir: P, max_bytes: u64) -> Result<Self, SplitError> {
        let out_dir = out_dir.as_ref().to_path_buf();
        let current_path = chunk_path(&out_dir, 0);
        let current = open_chunk(&current_path)?;
        Ok(Self {
            out_dir,
            max_bytes,
            index: 0,
            current_path,
            current,
            written: 0,
        })
    }

    fn rotate(&mut self) -> Result<(), SplitError> {
        self.current
            .flush()
            .map_err(|e| SplitError::write_err(e, self.current_path.clone()))?;
        self.index += 1;
        self.current_path = chunk_path(&self.out_dir, self.index);
        self.current = open_chunk(&self.current_path)?;
        self.written = 0;
        Ok(())
    }

    /// Append one record to the current chunk, then rotate if the chunk has
    /// reached the size cap. Rotation is eager: a cap hit on the final record
    /// still opens (and leaves behind) the next, empty chunk file.
    pub fn write(&mut self, rec: &FastxRecord) -> Result<(), SplitError> {
        let w = &mut self.current;
        w.write_all(b">")
            .and_then(|_| w.write_all(rec.name.as_bytes()))
            .and_then(|_| w.write_all(b"\n"))
            .and_then(|_| w.write_all(rec.seq.as_bytes()))
            .map_err(|e| SplitError::write_err(e, self.current_path.clone()))?;
        self.written += 1 + rec.name.len() as u64 + 1 + rec.seq.len() as u64;

        if self.written >= self.max_bytes {
            self.rotate()?;
        }
        Ok(())
    }

    /// Flush and close the current chunk file, returning the number of chunk
    /// files this writer produced.
    pub fn finish(mut self) -> Result<u64, SplitError> {
        self.current
            .flush()
            .map_err(|e| SplitError::write_err(e, self.current_path.clone()))?;
        Ok(self.index + 1)
    }
}

/// Path of chunk `n` inside the output directory.
pub fn chunk_path(out_dir: &Path, n: u64) -> PathBuf {
    out_dir.join(format!("ntdbout{n}.fasta"))
}
