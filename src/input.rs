//! Loading raw DNA text from disk
//!
//! Files ending in `.gz` are decompressed on the fly. Whitespace and line
//! breaks are removed and the text is uppercased, which is the form the
//! scanner expects.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} contains no sequence", .0.display())]
    Empty(PathBuf),
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Strip whitespace and uppercase.
pub fn normalize_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn read_dna_file(path: &Path) -> Result<String, InputError> {
    let io_error = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut raw = String::new();
    if is_gzip(path) {
        let mut reader = BufReader::new(GzDecoder::new(file));
        reader.read_to_string(&mut raw).map_err(io_error)?;
    } else {
        let mut reader = BufReader::new(file);
        reader.read_to_string(&mut raw).map_err(io_error)?;
    }

    let dna = normalize_sequence(&raw);
    if dna.is_empty() {
        return Err(InputError::Empty(path.to_path_buf()));
    }

    let unexpected = dna
        .bytes()
        .filter(|b| !matches!(b, b'A' | b'C' | b'G' | b'T'))
        .count();
    if unexpected > 0 {
        warn!("{unexpected} non-ACGT characters in {path:?}; affected codons translate to '?'");
    }

    info!("Read {} bases from {path:?}", dna.len());
    Ok(dna)
}
