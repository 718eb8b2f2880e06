//! FASTA file parser
//!
//! Each record starts with a `>` marker line naming the gene; every
//! following line up to the next marker (or end of file) is trimmed and
//! concatenated into the sequence body. A record is only emitted when
//! both the name and the body are non-empty, so a marker with no body,
//! or body text before the first marker, is silently skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One parsed FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub gene_name: String,
    pub sequence: String,
}

/// Parse a FASTA file from a file path
pub fn parse_file(path: &Path) -> io::Result<Vec<FastaRecord>> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parse FASTA data from a buffered reader
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut gene_name = String::new();
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(marker) = line.strip_prefix('>') {
            flush(&mut records, &gene_name, &sequence);
            gene_name = marker.trim().to_string();
            sequence.clear();
        } else {
            sequence.push_str(line);
        }
    }

    // Loop-end flush: the last record has no trailing marker
    flush(&mut records, &gene_name, &sequence);

    Ok(records)
}

fn flush(records: &mut Vec<FastaRecord>, gene_name: &str, sequence: &str) {
    if !gene_name.is_empty() && !sequence.is_empty() {
        records.push(FastaRecord {
            gene_name: gene_name.to_string(),
            sequence: sequence.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Vec<FastaRecord> {
        parse_reader(Cursor::new(input)).unwrap()
    }

    #[test]
    fn multiline_sequences_are_concatenated() {
        let records = parse(">TP53\nMEEPQ\nSDPSV\n>EGFR\nMRPSG\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].gene_name, "TP53");
        assert_eq!(records[0].sequence, "MEEPQSDPSV");
        assert_eq!(records[1].gene_name, "EGFR");
        assert_eq!(records[1].sequence, "MRPSG");
    }

    #[test]
    fn final_record_is_flushed_without_trailing_marker() {
        let records = parse(">BRCA1\nMDLSA");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, "MDLSA");
    }

    #[test]
    fn marker_without_body_is_skipped() {
        assert!(parse(">EMPTY\n").is_empty());
        // Mid-file empty record, neighbors still parse
        let records = parse(">A\nMK\n>EMPTY\n>B\nVL\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].gene_name, "A");
        assert_eq!(records[1].gene_name, "B");
    }

    #[test]
    fn body_without_marker_is_skipped() {
        assert!(parse("MKVL\nAAAA\n").is_empty());
    }

    #[test]
    fn marker_line_whitespace_is_trimmed() {
        let records = parse("> TP53 \nMKV\n");
        assert_eq!(records[0].gene_name, "TP53");
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse("").is_empty());
    }
}
