pub mod ends;
pub mod kmer;

pub use ends::EndIndex;
pub use kmer::{Alphabet, EndKmer};
