pub mod describe;
pub mod extract;
pub mod motifs;
