pub mod queries;
pub mod routes;

pub use queries::export_fasta::ExportFastaQuery;
pub use routes::sequences_routes;
