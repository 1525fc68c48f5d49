use log::debug;

use crate::protein::biophysics::{estimate_biophysics, Biophysics};
use crate::protein::function::{classify_function, AnnotationEvidence, ObservedTraits, Verdict};
use crate::protein::shape::{classify_shape, ShapeCategory};

/// Everything derived for one protein sequence
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinProfile {
    pub sequence: String,
    pub biophysics: Biophysics,
    pub shape: ShapeCategory,
    pub verdict: Verdict,
}

/// Render a possibly-unknown quantity with a fixed number of decimals
pub fn format_quantity(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "Unknown".to_string(),
    }
}

/// `sequence` is expected to be free of stop symbols.
pub fn profile_protein(
    sequence: &str,
    reported_mass: Option<f64>,
    evidence: &AnnotationEvidence,
    ph: f64,
) -> ProteinProfile {
    let biophysics = estimate_biophysics(Some(sequence), reported_mass, ph);
    let shape = classify_shape(sequence.chars().count());
    let traits = ObservedTraits {
        charge: biophysics.charge,
        hydrophobicity: biophysics.hydrophobicity,
        shape: Some(shape),
        diffusion: biophysics.diffusion,
    };
    let verdict = classify_function(&traits, evidence);

    debug!(
        "Profiled {} residues: {} ({}%)",
        sequence.len(),
        verdict.category,
        verdict.confidence
    );

    ProteinProfile {
        sequence: sequence.to_string(),
        biophysics,
        shape,
        verdict,
    }
}

impl ProteinProfile {
    pub fn length(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Label/value pairs in display order
    pub fn rows(&self, ph: f64) -> Vec<(String, String)> {
        let b = &self.biophysics;
        let alternatives = if self.verdict.alternatives.is_empty() {
            "None".to_string()
        } else {
            self.verdict
                .alternatives
                .iter()
                .map(|(category, score)| format!("{category} {score}%"))
                .collect::<Vec<_>>()
                .join(", ")
        };

        vec![
            ("Length".to_string(), self.length().to_string()),
            ("Mass (Da)".to_string(), format_quantity(b.mass, 2)),
            (format!("Charge at pH {ph:.1}"), format_quantity(b.charge, 2)),
            ("Hydrophobicity".to_string(), format_quantity(b.hydrophobicity, 2)),
            ("Radius (nm)".to_string(), format_quantity(b.radius, 3)),
            ("Diffusion".to_string(), format_quantity(b.diffusion, 5)),
            ("Lifetime".to_string(), format_quantity(b.lifetime, 2)),
            ("Predicted Shape".to_string(), self.shape.to_string()),
            ("Predicted Function".to_string(), self.verdict.category.to_string()),
            ("Confidence (%)".to_string(), self.verdict.confidence.to_string()),
            ("Alternative Functions".to_string(), alternatives),
            ("Prediction Notes".to_string(), self.verdict.notes.join("; ")),
        ]
    }
}
