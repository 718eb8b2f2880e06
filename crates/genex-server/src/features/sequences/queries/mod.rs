pub mod export_fasta;
