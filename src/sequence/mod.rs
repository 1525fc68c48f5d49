pub mod analysis;
pub mod codon;
pub mod orf;
pub mod translation;

pub use analysis::*;
pub use codon::*;
pub use orf::*;
pub use translation::*;
