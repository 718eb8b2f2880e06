pub mod queries;
pub mod routes;

pub use queries::export_tsv::ExportTsvQuery;
pub use queries::heatmap::HeatmapQuery;
pub use routes::expression_routes;
