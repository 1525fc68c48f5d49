//! Codon lookup over the standard genetic code
//!
//! The table is filled once from `bio-seq`'s standard translation table and is
//! read-only afterwards. Lookups never fail: anything that is not one of the
//! 64 uppercase ACGT triplets comes back as [`UNKNOWN_SYMBOL`].

use std::collections::HashMap;
use std::sync::LazyLock;

use bio_seq::prelude::*;
use bio_seq::translation::{TranslationTable, STANDARD};

pub const START_CODON: &[u8; 3] = b"ATG";
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Residue symbol emitted for a stop codon
pub const STOP_SYMBOL: char = '*';
/// Residue symbol emitted for a triplet outside the table
pub const UNKNOWN_SYMBOL: char = '?';

const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

static CODON_TABLE: LazyLock<HashMap<[u8; 3], char>> = LazyLock::new(build_codon_table);

fn build_codon_table() -> HashMap<[u8; 3], char> {
    let mut table = HashMap::with_capacity(64);

    for &first in &NUCLEOTIDES {
        for &second in &NUCLEOTIDES {
            for &third in &NUCLEOTIDES {
                let codon = [first, second, third];
                if let Some(amino) = standard_amino(&codon) {
                    table.insert(codon, amino);
                }
            }
        }
    }

    table
}

fn standard_amino(codon: &[u8; 3]) -> Option<char> {
    let text = std::str::from_utf8(codon).ok()?;
    let codon_seq = text.parse::<Seq<Dna>>().ok()?;
    if codon_seq.len() != 3 {
        return None;
    }
    STANDARD.to_amino(&codon_seq).to_string().chars().next()
}

/// Translate one triplet. Short slices and non-ACGT bytes give `?`.
pub fn lookup(triplet: &[u8]) -> char {
    <[u8; 3]>::try_from(triplet)
        .ok()
        .and_then(|codon| CODON_TABLE.get(&codon).copied())
        .unwrap_or(UNKNOWN_SYMBOL)
}

pub fn is_start_codon(triplet: &[u8]) -> bool {
    triplet == START_CODON
}

pub fn is_stop_codon(triplet: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| triplet == *stop)
}

/// Count every position (any frame) holding a start codon.
pub fn count_start_codons(dna: &str) -> usize {
    dna.as_bytes().windows(3).filter(|w| is_start_codon(w)).count()
}

/// Count every position (any frame) holding a stop codon.
pub fn count_stop_codons(dna: &str) -> usize {
    dna.as_bytes().windows(3).filter(|w| is_stop_codon(w)).count()
}
