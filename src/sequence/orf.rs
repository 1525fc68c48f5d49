//! Open reading frame scanning
//!
//! Every offset is tried as a potential `ATG`. Once a start codon is found the
//! gene runs to the first stop codon in its frame, and the scan carries on
//! right after it, so genes never overlap. A start codon whose frame runs off
//! the end without a stop is dropped and the scan continues one base after it.
//!
//! The first in-frame stop for every offset is computed up front in one
//! backward pass, so each start codon is resolved in constant time.

use log::{debug, trace};

use crate::sequence::codon::{is_start_codon, is_stop_codon};

/// A start-to-stop span of the input sequence, stop codon included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gene {
    pub start: usize,
    pub end: usize,
    pub sequence: String,
}

impl Gene {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of codons, start and stop included
    pub fn codon_count(&self) -> usize {
        self.len() / 3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingStart { at: usize },
    SeekingStop { start: usize },
}

/// For each offset, the offset of the first stop codon at or after it in the
/// same frame. Padded by one codon so `at + 3` is always a valid index.
fn next_stops(bytes: &[u8]) -> Vec<Option<usize>> {
    let mut next = vec![None; bytes.len() + 3];
    for at in (0..bytes.len()).rev() {
        next[at] = if bytes.get(at..at + 3).is_some_and(is_stop_codon) {
            Some(at)
        } else {
            next[at + 3]
        };
    }
    next
}

pub fn find_genes(dna: &str) -> Vec<Gene> {
    let bytes = dna.as_bytes();
    let next_stop = next_stops(bytes);
    let mut genes = Vec::new();
    let mut state = ScanState::SeekingStart { at: 0 };

    loop {
        state = match state {
            ScanState::SeekingStart { at } => {
                let Some(triplet) = bytes.get(at..at + 3) else {
                    break;
                };
                if is_start_codon(triplet) {
                    ScanState::SeekingStop { start: at }
                } else {
                    ScanState::SeekingStart { at: at + 1 }
                }
            }
            ScanState::SeekingStop { start } => match next_stop[start + 3] {
                None => {
                    trace!("Start codon at {start} has no in-frame stop");
                    ScanState::SeekingStart { at: start + 1 }
                }
                Some(stop) => {
                    let end = stop + 3;
                    // Both ends sit on ASCII codons, so these are char boundaries.
                    genes.push(Gene {
                        start,
                        end,
                        sequence: dna[start..end].to_string(),
                    });
                    ScanState::SeekingStart { at: end }
                }
            },
        };
    }

    debug!("Found {} genes in {} bases", genes.len(), bytes.len());
    genes
}
