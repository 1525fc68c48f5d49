//! orfprofile - gene discovery and protein characterization
//!
//! This library scans raw DNA for open reading frames, translates them,
//! filters the resulting proteins, and estimates biophysical properties and
//! a likely functional category for each one.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod protein;
pub mod report;
pub mod sequence;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::PipelineConfig;
pub use pipeline::{discover, profile_discovered, Discovery};
pub use protein::{
    classify_function, classify_shape, estimate_biophysics, filter_unique, profile_protein,
    AnnotationEvidence, ProteinProfile, Verdict,
};
pub use sequence::{find_genes, translate, Gene};
