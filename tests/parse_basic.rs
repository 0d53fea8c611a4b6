use fastx_split::{FastxReader, FastxRecord};
use std::io::BufReader;

fn read_all(input: &'static str) -> Vec<FastxRecord> {
    FastxReader::from_bufread(BufReader::new(input.as_bytes()))
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn parse_two_fasta_records() {
    let recs = read_all(">r1 some description\nACGT\n>r2\nTTTT\n");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].name, "r1");
    assert_eq!(recs[0].seq, "ACGT");
    assert_eq!(recs[0].qual, None);
    assert_eq!(recs[1].name, "r2");
    assert_eq!(recs[1].seq, "TTTT");
    assert_eq!(recs[1].qual, None);
}

#[test]
fn multi_line_sequence_is_joined() {
    let recs = read_all(">a\nAC\nGT\nTT\n>b\nGG\n");
    assert_eq!(recs[0].seq, "ACGTTT");
    assert_eq!(recs[1].seq, "GG");
}

#[test]
fn parse_single_fastq_record() {
    let recs = read_all("@read1 desc\nACGTN\n+\n!!!!!\n");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].name, "read1");
    assert_eq!(recs[0].seq, "ACGTN");
    assert_eq!(recs[0].qual.as_deref(), Some("!!!!!"));
    assert!(recs[0].is_fastq());
}

#[test]
fn multi_line_quality_accumulates_by_length() {
    // quality is complete once its cumulative length reaches the sequence
    // length, not after a fixed number of lines
    let recs = read_all("@r\nACGTAC\n+\n!!!\n###\n@r2\nTT\n+\n%%\n");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].seq, "ACGTAC");
    assert_eq!(recs[0].qual.as_deref(), Some("!!!###"));
    assert_eq!(recs[1].name, "r2");
    assert_eq!(recs[1].qual.as_deref(), Some("%%"));
}

#[test]
fn quality_overshoot_is_retained() {
    // the final quality line is kept whole even past the sequence length
    let recs = read_all("@r\nACGT\n+\n!!\n#####\n");
    assert_eq!(recs.len(), 1);
    let q = recs[0].qual.as_deref().unwrap();
    assert_eq!(q, "!!#####");
    assert!(q.len() >= recs[0].seq.len());
}

#[test]
fn truncated_quality_degrades_to_fasta_shape() {
    let recs = read_all("@r1\nACGT\n+\n!!\n");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].name, "r1");
    assert_eq!(recs[0].seq, "ACGT");
    assert_eq!(recs[0].qual, None);
}

#[test]
fn missing_quality_block_degrades_to_fasta_shape() {
    let recs = read_all("@r1\nACGT\n+\n");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].qual, None);
}

#[test]
fn header_only_record_has_empty_sequence() {
    let recs = read_all(">lonely\n");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].name, "lonely");
    assert_eq!(recs[0].seq, "");
    assert_eq!(recs[0].qual, None);
    assert!(recs[0].is_empty());
}

#[test]
fn at_header_without_plus_is_fasta_shaped() {
    // '@' headers with no '+' separator parse as plain records
    let recs = read_all("@r1\nACGT\n@r2\nTTTT\n");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].qual, None);
    assert_eq!(recs[1].qual, None);
}

#[test]
fn gt_header_with_plus_reads_quality() {
    // record type is decided per-record by the '+' separator, not by the
    // header sentinel
    let recs = read_all(">r1\nACGT\n+\n!!!!\n>r2\nAA\n");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].qual.as_deref(), Some("!!!!"));
    assert_eq!(recs[1].name, "r2");
}

#[test]
fn leading_junk_is_skipped() {
    let recs = read_all("junk line\nmore junk\n>r1\nAC\n");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].name, "r1");
}

#[test]
fn extra_lines_after_quality_are_skipped_before_next_header() {
    let recs = read_all("@r1\nACGT\n+\n!!!!\nstray\n@r2\nTT\n+\n##\n");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].qual.as_deref(), Some("!!!!"));
    assert_eq!(recs[1].name, "r2");
}

#[test]
fn empty_sequence_fastq_candidate_consumes_one_quality_line() {
    // the length check runs after each quality line is appended, so even a
    // zero-length sequence takes one quality line with it
    let recs = read_all(">a\n+\n!!!\n");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].seq, "");
    assert_eq!(recs[0].qual.as_deref(), Some("!!!"));
}

#[test]
fn sentinel_prefixed_quality_lines_are_consumed_as_quality() {
    // inside a quality block lines are taken verbatim until the length is
    // reached, even when they start with '>', '@' or '+'
    let recs = read_all("@r1\nACGT\n+\n@#\n>!\n@r2\nTT\n+\n##\n");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].qual.as_deref(), Some("@#>!"));
    assert_eq!(recs[1].name, "r2");
    assert_eq!(recs[1].qual.as_deref(), Some("##"));
}

#[test]
fn empty_input_yields_nothing() {
    assert!(read_all("").is_empty());
    assert!(read_all("no header anywhere\n").is_empty());
}

#[test]
fn empty_lines_contribute_nothing() {
    let recs = read_all("\n>r1\nAC\n\nGT\n");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].seq, "ACGT");
}

#[test]
fn crlf_line_endings_are_stripped() {
    let recs = read_all(">r1\r\nACGT\r\n");
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].seq, "ACGT");
}

#[test]
fn sequences_concatenate_all_non_sentinel_lines_in_order() {
    let input = ">a\nAA\nCC\n>b\nGG\nTT\nNN\n";
    let recs = read_all(input);
    let joined: String = recs.iter().map(|r| r.seq.as_str()).collect();
    let expected: String = input
        .lines()
        .filter(|l| !l.starts_with('>'))
        .collect();
    assert_eq!(joined, expected);
}
