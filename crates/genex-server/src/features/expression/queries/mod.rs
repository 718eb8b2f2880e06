pub mod export_tsv;
pub mod heatmap;
