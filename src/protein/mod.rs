pub mod biophysics;
pub mod filter;
pub mod function;
pub mod profile;
pub mod scales;
pub mod shape;

pub use biophysics::*;
pub use filter::*;
pub use function::*;
pub use profile::*;
pub use scales::*;
pub use shape::*;
