//! Plain-text output for use outside the terminal UI
//!
//! `write_report` summarizes a DNA run, `write_profile` describes a single
//! protein, and `write_fasta` emits the retained proteins as FASTA records.

use std::io::{self, Write};

use crate::config::PipelineConfig;
use crate::pipeline::Discovery;
use crate::protein::ProteinProfile;
use crate::sequence::calculate_gc_content;

pub fn write_report<W: Write>(
    out: &mut W,
    source: &str,
    dna: &str,
    config: &PipelineConfig,
    discovery: &Discovery,
    profiles: &[ProteinProfile],
) -> io::Result<()> {
    writeln!(out, "Source: {source}")?;
    writeln!(out, "Sequence length: {} bp", dna.len())?;
    writeln!(out, "GC content: {:.1}%", calculate_gc_content(dna))?;
    writeln!(out, "Genes found: {}", discovery.genes.len())?;
    writeln!(
        out,
        "Unique proteins >= {} aa: {}",
        config.min_protein_length,
        discovery.retained.len()
    )?;

    for (i, (protein, profile)) in discovery.retained.iter().zip(profiles).enumerate() {
        writeln!(out)?;
        writeln!(out, ">Protein_{}", i + 1)?;
        if let Some(gene) = discovery.gene_for(protein) {
            writeln!(out, "Gene: {}..{}", gene.start, gene.end)?;
        }
        write_profile(out, profile, config.ph)?;
    }

    Ok(())
}

/// Sequence line followed by one `label: value` line per profile row
pub fn write_profile<W: Write>(out: &mut W, profile: &ProteinProfile, ph: f64) -> io::Result<()> {
    writeln!(out, "Sequence: {}", profile.sequence)?;
    for (label, value) in profile.rows(ph) {
        writeln!(out, "{label}: {value}")?;
    }
    Ok(())
}

/// `>Protein_<n>` header and translated sequence for each retained protein,
/// numbered in the same order as the report.
pub fn write_fasta<W: Write>(out: &mut W, discovery: &Discovery) -> io::Result<()> {
    for (i, protein) in discovery.retained.iter().enumerate() {
        writeln!(out, ">Protein_{}", i + 1)?;
        writeln!(out, "{protein}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{discover, profile_discovered, profile_supplied};
    use crate::protein::AnnotationEvidence;

    #[test]
    fn test_report_lists_retained_proteins() {
        let dna = format!("CCATG{}TAAGG", "AAG".repeat(60));
        let config = PipelineConfig::default();
        let discovery = discover(&dna, config.min_protein_length);
        let profiles = profile_discovered(&discovery, config.ph);

        let mut out = Vec::new();
        write_report(&mut out, "sample.txt", &dna, &config, &discovery, &profiles).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Source: sample.txt"));
        assert!(text.contains("Genes found: 1"));
        assert!(text.contains("Unique proteins >= 50 aa: 1"));
        assert!(text.contains(">Protein_1"));
        assert!(text.contains("Gene: 2..188"));
        assert!(text.contains("Charge at pH 7.0: "));
        assert!(text.contains(&format!("Sequence: M{}\n", "K".repeat(60))));
    }

    #[test]
    fn test_report_without_genes() {
        let dna = "CCCGGG";
        let config = PipelineConfig::default();
        let discovery = discover(dna, config.min_protein_length);

        let mut out = Vec::new();
        write_report(&mut out, "none.txt", dna, &config, &discovery, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Genes found: 0"));
        assert!(!text.contains(">Protein_"));
    }

    #[test]
    fn test_fasta_holds_only_headers_and_sequences() {
        let dna = format!("ATG{}TAAC{}ATG{}TGA", "AAG".repeat(60), "G".repeat(4), "GCT".repeat(55));
        let discovery = discover(&dna, 50);

        let mut out = Vec::new();
        write_fasta(&mut out, &discovery).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ">Protein_1");
        assert_eq!(lines[2], ">Protein_2");
        let sequences: Vec<&str> = vec![lines[1], lines[3]];
        let expected: Vec<&str> = discovery.retained.iter().map(String::as_str).collect();
        assert_eq!(sequences, expected);
    }

    #[test]
    fn test_profile_lists_evidence_notes() {
        let evidence = AnnotationEvidence {
            ec_numbers: vec!["2.7.11.1".to_string()],
            ..AnnotationEvidence::default()
        };
        let profile = profile_supplied("MKV", None, &evidence, 7.0);

        let mut out = Vec::new();
        write_profile(&mut out, &profile, 7.0).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Sequence: MKV\n"));
        assert!(text.contains("Prediction Notes: "));
        assert!(text.contains("EC number present, supports enzymatic activity (2.7.11.1)"));
    }
}
