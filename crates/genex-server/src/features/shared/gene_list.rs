//! Gene-list input contract
//!
//! Every read endpoint takes a comma-separated `genes` query parameter.
//! Parsing trims each entry and discards empty ones; validation caps the
//! list at [`MAX_GENES`] entries and, where the endpoint requires it,
//! rejects an empty list.

use thiserror::Error;

/// Maximum number of gene names accepted per request.
pub const MAX_GENES: usize = 10;

/// Errors that can occur during gene-list validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneListError {
    #[error("No gene names provided")]
    Empty,

    #[error("Maximum {max} genes allowed")]
    TooMany { max: usize },
}

/// Split a raw `genes` parameter into gene names
///
/// Entries are trimmed; empty entries are discarded.
pub fn parse_gene_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate a parsed gene list
///
/// # Arguments
/// * `genes` - The parsed list
/// * `require_non_empty` - Whether an empty list is a client error
pub fn validate_gene_list(genes: &[String], require_non_empty: bool) -> Result<(), GeneListError> {
    if require_non_empty && genes.is_empty() {
        return Err(GeneListError::Empty);
    }

    if genes.len() > MAX_GENES {
        return Err(GeneListError::TooMany { max: MAX_GENES });
    }

    Ok(())
}
