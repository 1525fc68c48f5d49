use crate::sequence::codon::{lookup, STOP_SYMBOL};

/// Translate a nucleotide span codon by codon. Trailing 1-2 bases are dropped;
/// a terminal stop codon shows up as `*`.
pub fn translate(span: &str) -> String {
    span.as_bytes().chunks_exact(3).map(lookup).collect()
}

/// Remove stop symbols before a protein goes into analysis.
pub fn strip_stop(protein: &str) -> String {
    protein.chars().filter(|&c| c != STOP_SYMBOL).collect()
}

/// Count of complete codons and whether a partial codon trails them.
pub fn count_complete_incomplete_codons(dna: &str) -> (usize, usize) {
    let complete = dna.len() / 3;
    let incomplete = if dna.len() % 3 > 0 { 1 } else { 0 };
    (complete, incomplete)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_gene() {
        assert_eq!(translate("ATGAAATAA"), "MK*");
    }

    #[test]
    fn test_translate_drops_trailing_bases() {
        assert_eq!(translate("ATGAAATA"), "MK");
        assert_eq!(translate("AT"), "");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn test_translate_placeholder_for_unmatched() {
        assert_eq!(translate("ATGNNNTGG"), "M?W");
        assert_eq!(translate("atgAAA"), "?K");
    }

    #[test]
    fn test_strip_stop() {
        assert_eq!(strip_stop("MK*"), "MK");
        assert_eq!(strip_stop("M*K*"), "MK");
        assert_eq!(strip_stop(""), "");
    }

    #[test]
    fn test_codon_completeness() {
        assert_eq!(count_complete_incomplete_codons("ATGAA"), (1, 1));
        assert_eq!(count_complete_incomplete_codons("ATGAAA"), (2, 0));
    }
}
