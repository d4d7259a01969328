pub mod alignment_matrix;
pub mod column_statistics;
pub mod engine;
pub mod error;
pub mod fasta_parser;
pub mod pipeline;
pub mod report;
pub mod scoring;
