pub mod fasta;
pub mod graph_writer;
