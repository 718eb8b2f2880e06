//! Shared request-parsing and validation utilities

pub mod gene_list;

pub use gene_list::{parse_gene_list, validate_gene_list, GeneListError, MAX_GENES};
