//! Whole-sequence composition figures shown next to the gene list

pub fn calculate_gc_content(dna: &str) -> f64 {
    if dna.is_empty() {
        return 0.0;
    }

    let gc_count = dna.bytes().filter(|&b| b == b'G' || b == b'C').count();

    (gc_count as f64 / dna.len() as f64) * 100.0
}

/// Share of the sequence (in percent) covered by the given genes.
pub fn calculate_coding_fraction(dna_len: usize, genes: &[crate::sequence::Gene]) -> f64 {
    if dna_len == 0 {
        return 0.0;
    }

    let covered: usize = genes.iter().map(|g| g.len()).sum();
    (covered as f64 / dna_len as f64) * 100.0
}
