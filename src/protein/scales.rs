//! Per-residue constants for the biophysical estimates
//!
//! Hydropathy values follow the Kyte-Doolittle scale. Ionizable side chains
//! carry a single pKa each; the termini have their own pair of constants.

/// Average residue mass in Daltons, used when no measured mass is available
pub const AVERAGE_RESIDUE_MASS: f64 = 110.0;

pub const N_TERMINUS_PKA: f64 = 9.0;
pub const C_TERMINUS_PKA: f64 = 2.0;

/// Charge behaviour of an ionizable side chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ionizable {
    /// Loses a proton above its pKa and turns negative
    Acidic(f64),
    /// Holds a proton below its pKa and stays positive
    Basic(f64),
}

/// Get the hydropathy value of a residue by its single-letter code
pub fn hydrophobicity_value(residue: char) -> Option<f64> {
    match residue {
        'A' => Some(1.8),   // Alanine
        'C' => Some(2.5),   // Cysteine
        'D' => Some(-3.5),  // Aspartic acid
        'E' => Some(-3.5),  // Glutamic acid
        'F' => Some(2.8),   // Phenylalanine
        'G' => Some(-0.4),  // Glycine
        'H' => Some(-0.5),  // Histidine
        'I' => Some(4.5),   // Isoleucine
        'K' => Some(-3.9),  // Lysine
        'L' => Some(3.8),   // Leucine
        'M' => Some(1.9),   // Methionine
        'N' => Some(-3.5),  // Asparagine
        'P' => Some(-1.6),  // Proline
        'Q' => Some(-3.5),  // Glutamine
        'R' => Some(-4.5),  // Arginine
        'S' => Some(-0.8),  // Serine
        'T' => Some(-0.7),  // Threonine
        'V' => Some(4.2),   // Valine
        'W' => Some(-0.9),  // Tryptophan
        'Y' => Some(-1.3),  // Tyrosine
        _ => None,
    }
}

/// Get the side-chain ionization of a residue, if it has one
pub fn side_chain_ionization(residue: char) -> Option<Ionizable> {
    match residue {
        'D' => Some(Ionizable::Acidic(3.9)),
        'E' => Some(Ionizable::Acidic(4.1)),
        'C' => Some(Ionizable::Acidic(8.3)),
        'Y' => Some(Ionizable::Acidic(10.1)),
        'H' => Some(Ionizable::Basic(6.0)),
        'K' => Some(Ionizable::Basic(10.5)),
        'R' => Some(Ionizable::Basic(12.5)),
        _ => None,
    }
}
