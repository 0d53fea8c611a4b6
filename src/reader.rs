use crate::error::{IoContext, SplitError};
use crate::record::FastxRecord;
use crate::util::{looks_like_gzip, open_file};

use flate2::read::MultiGzDecoder;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Sync FASTA/FASTQ reader (plain/.gz), streaming.
///
/// Records are pulled one at a time; the only state carried between pulls is
/// a single line of lookahead, holding a sentinel-prefixed line that was read
/// while scanning past the end of the previous record. The stream is consumed
/// exactly once and is not restartable.
///
/// Format detection is per-record and sentinel-based: a record whose sequence
/// block is followed by a `+` line is a FASTQ candidate; anything else is
/// FASTA. A FASTQ candidate whose quality block hits EOF before reaching the
/// sequence length is yielded with `qual = None`, the same shape a FASTA
/// record has. Lines are classified by their first character only, so a
/// sequence line starting with `>`, `@` or `+` is taken as a boundary; this
/// matches the reference grammar and is deliberately not guarded against.
pub struct FastxReader {
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
    byte_pos: u64,
    // One line of lookahead: a header (or '+') line already read from the
    // stream but belonging to the record not yet parsed.
    last: Option<String>,
}

impl FastxReader {
    /// Open from a file path. Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SplitError> {
        let path = path.as_ref();
        let start = IoContext {
            byte_pos: 0,
            line_num: 0,
        };
        let f = open_file(path).map_err(|e| SplitError::read_err(e, start))?;

        let is_gz = path.extension().and_then(|s| s.to_str()) == Some("gz")
            || looks_like_gzip(&f).unwrap_or(false);

        let rdr: Box<dyn BufRead + Send> = if is_gz {
            #[cfg(feature = "gzip")]
            {
                let dec = MultiGzDecoder::new(f);
                Box::new(BufReader::with_capacity(256 * 1024, dec))
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(SplitError::read_err(
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "gzip input requires the `gzip` feature",
                    ),
                    start,
                ));
            }
        } else {
            Box::new(BufReader::with_capacity(256 * 1024, f))
        };

        Ok(Self {
            rdr,
            line_num: 0,
            byte_pos: 0,
            last: None,
        })
    }

    /// Wrap an arbitrary `BufRead` (stdin, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            rdr: Box::new(reader),
            line_num: 0,
            byte_pos: 0,
            last: None,
        }
    }

    /// Iterator-style `next` record.
    pub fn next(&mut self) -> Option<Result<FastxRecord, SplitError>> {
        self.read_one().transpose()
    }

    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_line(buf)?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            if buf.ends_with('\n') {
                buf.pop();
            }
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(n)
    }

    fn read_one(&mut self) -> Result<Option<FastxRecord>, SplitError> {
        let mut line = String::with_capacity(256);

        // Scan forward to the next header line unless one is already buffered.
        if self.last.is_none() {
            loop {
                let n = self
                    .read_line(&mut line)
                    .map_err(|e| SplitError::read_err(e, self.ctx()))?;
                if n == 0 {
                    return Ok(None);
                }
                if line.starts_with('>') || line.starts_with('@') {
                    self.last = Some(line.clone());
                    break;
                }
            }
        }
        let header = match self.last.take() {
            Some(h) => h,
            None => return Ok(None),
        };

        // Name is the token after the sentinel, up to the first whitespace;
        // any description text after it is dropped.
        let name = header[1..]
            .splitn(2, char::is_whitespace)
            .next()
            .unwrap_or("")
            .to_string();

        // Sequence lines run until the next sentinel-prefixed line or EOF.
        let mut seq = String::with_capacity(256);
        loop {
            let n = self
                .read_line(&mut line)
                .map_err(|e| SplitError::read_err(e, self.ctx()))?;
            if n == 0 {
                break;
            }
            if line.starts_with('@') || line.starts_with('+') || line.starts_with('>') {
                self.last = Some(line.clone());
                break;
            }
            seq.push_str(&line);
        }

        // No '+' separator: FASTA record. The buffered header (if any) opens
        // the next record on the following pull.
        let has_plus = matches!(self.last.as_deref(), Some(l) if l.starts_with('+'));
        if !has_plus {
            return Ok(Some(FastxRecord {
                name,
                seq,
                qual: None,
            }));
        }

        // FASTQ candidate: consume quality lines until their cumulative
        // length reaches the sequence length. The check runs after each line
        // is appended, so the final line is kept whole even when it overshoots.
        self.last = None;
        let mut qual = String::with_capacity(seq.len());
        loop {
            let n = self
                .read_line(&mut line)
                .map_err(|e| SplitError::read_err(e, self.ctx()))?;
            if n == 0 {
                // EOF before enough quality: degrade to a FASTA-shaped record.
                return Ok(Some(FastxRecord {
                    name,
                    seq,
                    qual: None,
                }));
            }
            qual.push_str(&line);
            if qual.len() >= seq.len() {
                break;
            }
        }
        Ok(Some(FastxRecord {
            name,
            seq,
            qual: Some(qual),
        }))
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for FastxReader {
    type Item = Result<FastxRecord, SplitError>;
    fn next(&mut self) -> Option<Self::Item> {
        FastxReader::next(self)
    }
}
