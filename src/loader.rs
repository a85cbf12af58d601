//! Plain-text loaders for the interaction matrix and the show names.
//!
//! - Interactions: one user per line, whitespace-separated non-negative
//!   integers, no header. Blank lines are skipped.
//! - Show names: one UTF-8 name per line, trimmed. Blank lines inside the
//!   file are kept as empty names so indices stay aligned with columns.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::errors::{RecommendError, Result};
use crate::interactions::InteractionMatrix;
use crate::registry::ShowRegistry;

/// Parses a whitespace-separated integer matrix.
///
/// # Errors
///
/// - `Parse` on a token that is not a non-negative integer.
/// - `MalformedMatrix` on ragged rows or an input without rows.
///
/// # Examples
///
/// ```
/// use showspace::loader::parse_interactions;
///
/// let r = parse_interactions("1 0 1\n0 1 1\n").unwrap();
/// assert_eq!(r.shape(), (2, 3));
/// ```
pub fn parse_interactions(text: &str) -> Result<InteractionMatrix> {
    let mut rows: Vec<Vec<u32>> = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let l = line.trim();
        if l.is_empty() {
            continue;
        }
        let row = l
            .split_whitespace()
            .map(|tok| {
                tok.parse::<u32>().map_err(|e| RecommendError::Parse {
                    line: lineno + 1,
                    message: format!("invalid interaction count {:?}: {}", tok, e),
                })
            })
            .collect::<Result<Vec<u32>>>()?;
        rows.push(row);
    }

    debug!("Parsed {} interaction rows", rows.len());
    InteractionMatrix::from_rows(rows)
}

/// Parses one show name per line.
pub fn parse_show_names(text: &str) -> ShowRegistry {
    ShowRegistry::new(text.lines())
}

/// Reads and parses an interaction matrix file.
pub fn load_interactions<P: AsRef<Path>>(path: P) -> Result<InteractionMatrix> {
    let path = path.as_ref();
    info!("Loading interactions from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_interactions(&text)
}

/// Reads a show-name file.
pub fn load_show_names<P: AsRef<Path>>(path: P) -> Result<ShowRegistry> {
    let path = path.as_ref();
    info!("Loading show names from {}", path.display());
    let text = fs::read_to_string(path)?;
    Ok(parse_show_names(&text))
}
