//! Biophysical estimates for a protein sequence
//!
//! Every quantity here may be missing. A missing sequence leaves charge and
//! hydrophobicity unknown; a missing or non-positive mass leaves radius,
//! diffusion and lifetime unknown. Nothing in this module panics or errors on
//! odd input, it reports `None` instead.

use log::trace;

use crate::protein::scales::{
    hydrophobicity_value, side_chain_ionization, Ionizable, AVERAGE_RESIDUE_MASS, C_TERMINUS_PKA,
    N_TERMINUS_PKA,
};

/// pH used when the caller does not ask for another one
pub const REFERENCE_PH: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Biophysics {
    /// Daltons
    pub mass: Option<f64>,
    pub charge: Option<f64>,
    pub hydrophobicity: Option<f64>,
    /// Nanometers
    pub radius: Option<f64>,
    pub diffusion: Option<f64>,
    pub lifetime: Option<f64>,
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Measured mass if there is a usable one, otherwise length x 110 Da.
pub fn estimate_mass(sequence: Option<&str>, reported_mass: Option<f64>) -> Option<f64> {
    if let Some(mass) = reported_mass.and_then(finite) {
        return Some(mass);
    }

    let length = sequence.map(|s| s.chars().count()).unwrap_or(0);
    if length == 0 {
        return None;
    }
    Some(round_to(length as f64 * AVERAGE_RESIDUE_MASS, 2))
}

/// Net charge at `ph` by Henderson-Hasselbalch summation, two decimals.
pub fn net_charge(sequence: &str, ph: f64) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }

    let mut charge = 1.0 / (1.0 + 10f64.powf(ph - N_TERMINUS_PKA));
    charge -= 1.0 / (1.0 + 10f64.powf(C_TERMINUS_PKA - ph));

    for residue in sequence.chars() {
        match side_chain_ionization(residue) {
            Some(Ionizable::Acidic(pka)) => charge -= 1.0 / (1.0 + 10f64.powf(pka - ph)),
            Some(Ionizable::Basic(pka)) => charge += 1.0 / (1.0 + 10f64.powf(ph - pka)),
            None => {}
        }
    }

    round_to(charge, 2)
}

/// Mean hydropathy over residues the scale knows, two decimals.
pub fn hydrophobicity(sequence: &str) -> f64 {
    let (sum, count) = sequence
        .chars()
        .filter_map(hydrophobicity_value)
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        return 0.0;
    }
    round_to(sum / count as f64, 2)
}

fn positive_mass(mass: Option<f64>) -> Option<f64> {
    mass.and_then(finite).filter(|&m| m > 0.0)
}

/// R ~ 0.066 x M^0.37, in nanometers
pub fn hydrodynamic_radius(mass: Option<f64>) -> Option<f64> {
    positive_mass(mass).map(|m| round_to(0.066 * m.powf(0.37), 3))
}

pub fn diffusion_coefficient(mass: Option<f64>) -> Option<f64> {
    positive_mass(mass).map(|m| round_to(1.0 / m.sqrt(), 5))
}

/// Empirical decay-based lifetime, arbitrary units
pub fn lifetime(mass: Option<f64>) -> Option<f64> {
    positive_mass(mass)
        .map(|m| round_to(10f64.powf(5.0 - m / 50_000.0), 2))
        .and_then(finite)
}

pub fn estimate_biophysics(sequence: Option<&str>, reported_mass: Option<f64>, ph: f64) -> Biophysics {
    let mass = estimate_mass(sequence, reported_mass);
    let charge = sequence
        .filter(|_| ph.is_finite())
        .map(|s| net_charge(s, ph))
        .and_then(finite);

    let estimate = Biophysics {
        mass,
        charge,
        hydrophobicity: sequence.map(hydrophobicity),
        radius: hydrodynamic_radius(mass),
        diffusion: diffusion_coefficient(mass),
        lifetime: lifetime(mass),
    };

    trace!("Biophysics at pH {ph}: {estimate:?}");
    estimate
}
