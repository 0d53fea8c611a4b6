/// One record pulled from the input stream: header name, sequence, and an
/// optional quality string.
///
/// `qual` is `Some` only when the record was a well-formed FASTQ record whose
/// quality block reached the sequence length before EOF; it is `None` both
/// for FASTA records and for FASTQ records with a truncated quality block.
/// When present, `qual.len() >= seq.len()` (the final quality line is kept
/// whole, overshoot included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastxRecord {
    pub name: String,
    pub seq: String,
    pub qual: Option<String>,
}

impl FastxRecord {
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
    /// True when a full quality block was read for this record.
    #[inline]
    pub fn is_fastq(&self) -> bool {
        self.qual.is_some()
    }
}
