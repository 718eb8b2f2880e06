//! Expression TSV parser
//!
//! Tab-separated input: the first line is a column header and is
//! discarded; each following non-blank line is
//! `gene_name \t v1 \t .. \t v6`. Empty value fields mean absent and map
//! to `None`; non-empty fields must parse as integers or the whole load
//! fails. Rows with fewer than six value columns pad the missing
//! trailing slots with `None`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

use crate::db::SAMPLE_COUNT;
use genex_common::GenexError;

/// One parsed expression row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionRow {
    pub gene_name: String,
    pub samples: [Option<i64>; SAMPLE_COUNT],
}

/// Errors from expression TSV parsing
#[derive(Debug, Error)]
pub enum ExpressionParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: sample value '{value}' is not an integer")]
    InvalidSample { line: usize, value: String },
}

impl From<ExpressionParseError> for GenexError {
    fn from(err: ExpressionParseError) -> Self {
        match err {
            ExpressionParseError::Io(e) => GenexError::Io(e),
            other => GenexError::Parse(other.to_string()),
        }
    }
}

/// Parse an expression TSV file from a file path
pub fn parse_file(path: &Path) -> Result<Vec<ExpressionRow>, ExpressionParseError> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parse expression TSV data from a buffered reader
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<ExpressionRow>, ExpressionParseError> {
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        // First line is the header, discarded
        if index == 0 {
            continue;
        }

        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let gene_name = fields.next().unwrap_or_default().trim().to_string();

        let mut samples = [None; SAMPLE_COUNT];
        for (slot, field) in samples.iter_mut().zip(fields) {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            *slot = Some(field.parse::<i64>().map_err(|_| {
                ExpressionParseError::InvalidSample {
                    line: index + 1,
                    value: field.to_string(),
                }
            })?);
        }

        rows.push(ExpressionRow { gene_name, samples });
    }

    Ok(rows)
}
