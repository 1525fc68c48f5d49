use std::collections::BTreeSet;

use log::debug;

/// Proteins shorter than this are not worth characterizing
pub const DEFAULT_MIN_PROTEIN_LENGTH: usize = 50;

/// Distinct proteins with at least `min_length` residues.
///
/// Length is counted in residues as translated, a trailing stop symbol
/// included. The returned set is ordered by sequence, not by input position.
pub fn filter_unique<S: AsRef<str>>(proteins: &[S], min_length: usize) -> BTreeSet<String> {
    let unique: BTreeSet<String> = proteins
        .iter()
        .map(|protein| protein.as_ref())
        .filter(|protein| protein.chars().count() >= min_length)
        .map(str::to_string)
        .collect();

    debug!(
        "Kept {} unique proteins of {} (min length {min_length})",
        unique.len(),
        proteins.len()
    );
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_dedups_and_applies_threshold() {
        let long = "M".to_string() + &"A".repeat(49);
        let proteins = vec!["ABC".to_string(), "ABC".to_string(), long.clone(), long.clone()];

        let kept = filter_unique(&proteins, DEFAULT_MIN_PROTEIN_LENGTH);
        assert_eq!(kept.len(), 1);
        assert!(kept.contains(&long));
        assert!(!kept.contains("ABC"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let kept = filter_unique(&["MKV", "MK", "MKVL"], 3);
        assert_eq!(kept, BTreeSet::from(["MKV".to_string(), "MKVL".to_string()]));
    }

    #[test]
    fn test_empty_input() {
        let proteins: Vec<String> = Vec::new();
        assert!(filter_unique(&proteins, 0).is_empty());
        assert_eq!(filter_unique(&[""], 0).len(), 1);
    }
}
