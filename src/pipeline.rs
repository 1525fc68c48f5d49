//! Gene discovery and characterization, end to end
//!
//! `discover` runs scan -> translate -> filter over one DNA sequence;
//! `profile_discovered` characterizes what survived the filter. A protein
//! that comes with its own record (measured mass, annotations) goes through
//! `profile_supplied` instead. All of them are pure.

use std::collections::BTreeSet;

use log::info;

use crate::input::normalize_sequence;
use crate::protein::{filter_unique, profile_protein, AnnotationEvidence, ProteinProfile};
use crate::sequence::{find_genes, strip_stop, translate, Gene};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub genes: Vec<Gene>,
    /// Translation of each gene, same order as `genes`, stop symbol kept
    pub proteins: Vec<String>,
    pub retained: BTreeSet<String>,
}

impl Discovery {
    /// First gene whose translation is `protein`
    pub fn gene_for(&self, protein: &str) -> Option<&Gene> {
        self.proteins
            .iter()
            .position(|p| p == protein)
            .map(|index| &self.genes[index])
    }

    /// How many genes translate to `protein`
    pub fn copies_of(&self, protein: &str) -> usize {
        self.proteins.iter().filter(|p| *p == protein).count()
    }
}

pub fn discover(dna: &str, min_length: usize) -> Discovery {
    let genes = find_genes(dna);
    let proteins: Vec<String> = genes.iter().map(|gene| translate(&gene.sequence)).collect();
    let retained = filter_unique(&proteins, min_length);

    info!(
        "Discovered {} genes, {} unique proteins of at least {min_length} residues",
        genes.len(),
        retained.len()
    );

    Discovery {
        genes,
        proteins,
        retained,
    }
}

/// Profile each retained protein with its stop symbol removed. No external
/// evidence or measured mass exists for freshly translated proteins.
pub fn profile_discovered(discovery: &Discovery, ph: f64) -> Vec<ProteinProfile> {
    let evidence = AnnotationEvidence::default();
    discovery
        .retained
        .iter()
        .map(|protein| profile_protein(&strip_stop(protein), None, &evidence, ph))
        .collect()
}

/// Profile a protein taken from an external record. The sequence is cleaned
/// the same way DNA input is, stop symbols included.
pub fn profile_supplied(
    sequence: &str,
    reported_mass: Option<f64>,
    evidence: &AnnotationEvidence,
    ph: f64,
) -> ProteinProfile {
    let sequence = strip_stop(&normalize_sequence(sequence));
    info!(
        "Profiling supplied protein of {} residues ({} EC numbers, {} localizations)",
        sequence.len(),
        evidence.ec_numbers.len(),
        evidence.localization.len()
    );
    profile_protein(&sequence, reported_mass, evidence, ph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protein::{FunctionCategory, ShapeCategory};

    /// ATG + `codons` x GCT + TAA
    fn gene(codons: usize) -> String {
        format!("ATG{}TAA", "GCT".repeat(codons))
    }

    #[test]
    fn test_discover_filters_short_and_duplicate_proteins() {
        let dna = format!("CC{}GG{}T{}", gene(60), gene(3), gene(60));
        let discovery = discover(&dna, 50);

        assert_eq!(discovery.genes.len(), 3);
        assert_eq!(discovery.proteins.len(), 3);
        assert_eq!(discovery.proteins[1], "MAAA*");
        assert_eq!(discovery.retained.len(), 1);

        let protein = discovery.retained.iter().next().unwrap();
        assert_eq!(protein.len(), 62);
        assert!(protein.ends_with('*'));
        assert_eq!(discovery.gene_for(protein).map(|g| g.start), Some(2));
        assert_eq!(discovery.copies_of(protein), 2);
    }

    #[test]
    fn test_profiles_use_stripped_sequences() {
        let dna = gene(120);
        let discovery = discover(&dna, 50);
        let profiles = profile_discovered(&discovery, 7.0);

        assert_eq!(profiles.len(), 1);
        assert!(!profiles[0].sequence.contains('*'));
        assert_eq!(profiles[0].length(), 121);
        assert_eq!(profiles[0].biophysics.mass, Some(13310.0));
        assert_eq!(profiles[0].shape, ShapeCategory::MediumWithDomains);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let dna = format!("{}AC{}GTATG{}", gene(55), gene(70), gene(80));
        let first = discover(&dna, 50);
        let second = discover(&dna, 50);
        assert_eq!(first, second);
        assert_eq!(profile_discovered(&first, 7.0), profile_discovered(&second, 7.0));
    }

    #[test]
    fn test_empty_sequence() {
        let discovery = discover("", 50);
        assert!(discovery.genes.is_empty());
        assert!(discovery.retained.is_empty());
        assert!(profile_discovered(&discovery, 7.0).is_empty());
    }

    #[test]
    fn test_supplied_record_uses_mass_and_evidence() {
        let evidence = AnnotationEvidence {
            ec_numbers: vec!["3.4.21.4".to_string()],
            ..AnnotationEvidence::default()
        };
        let profile = profile_supplied(" mkv*\n", Some(50000.0), &evidence, 7.0);

        assert_eq!(profile.sequence, "MKV");
        assert_eq!(profile.biophysics.mass, Some(50000.0));
        assert_eq!(profile.shape, ShapeCategory::CompactSpherical);
        // Compact shape and the EC number outscore the compact-neutral signaling rule.
        assert_eq!(profile.verdict.category, FunctionCategory::Enzyme);
        assert_eq!(profile.verdict.confidence, 50);
        assert_eq!(profile.verdict.alternatives.get(&FunctionCategory::Signaling), Some(&30));
        assert!(profile
            .verdict
            .notes
            .iter()
            .any(|note| note.ends_with("(3.4.21.4)")));
    }

    #[test]
    fn test_supplied_record_without_evidence_matches_discovery() {
        let dna = gene(60);
        let discovery = discover(&dna, 50);
        let discovered = profile_discovered(&discovery, 7.0);

        let protein = discovery.retained.iter().next().unwrap();
        let supplied = profile_supplied(protein, None, &AnnotationEvidence::default(), 7.0);
        assert_eq!(discovered, vec![supplied]);
    }
}
