//! Deterministic top-K selection over a candidate set.
//!
//! Ordering is by (score desc, index asc): equal scores always resolve to the
//! lower item index first, so rankings are reproducible across runs and
//! platforms. Fewer than K candidates simply yields a shorter list.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::errors::{RecommendError, Result};
use crate::registry::ShowRegistry;

/// One ranked item.
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub index: usize,
    pub score: f64,
    pub name: String,
}

impl Recommendation {
    pub fn new(index: usize, score: f64, name: impl Into<String>) -> Self {
        Self { index, score, name: name.into() }
    }
}

/// Ranks `candidates` by their entry in `scores` and returns at most `k` of
/// them, named from `registry`.
///
/// Duplicate candidate indices are ranked once. Neither `scores` nor
/// `candidates` is modified.
///
/// # Errors
///
/// `ItemIndexOutOfBounds` if a candidate is outside `scores` or `registry`.
///
/// # Examples
///
/// ```
/// use showspace::ranking::top_recommendations;
/// use showspace::registry::ShowRegistry;
///
/// let registry = ShowRegistry::new(["A", "B", "C"]);
/// let top = top_recommendations(&[5.0, 3.0, 3.0], &[1, 2], 5, &registry).unwrap();
///
/// assert_eq!(top.len(), 2);
/// assert_eq!((top[0].index, top[0].name.as_str()), (1, "B"));
/// assert_eq!((top[1].index, top[1].name.as_str()), (2, "C"));
/// ```
pub fn top_recommendations(
    scores: &[f64],
    candidates: &[usize],
    k: usize,
    registry: &ShowRegistry,
) -> Result<Vec<Recommendation>> {
    let unique: BTreeSet<usize> = candidates.iter().copied().collect();
    trace!("Ranking {} unique candidates, k={}", unique.len(), k);

    let bound = scores.len().min(registry.len());
    if let Some(&bad) = unique.iter().find(|&&idx| idx >= bound) {
        return Err(RecommendError::ItemIndexOutOfBounds { index: bad, nitems: bound });
    }

    let mut ranked: Vec<(usize, f64)> = unique.into_iter().map(|idx| (idx, scores[idx])).collect();
    ranked.sort_unstable_by(|a, b| {
        b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(k);

    let top = ranked
        .into_iter()
        .map(|(idx, score)| -> Result<Recommendation> {
            Ok(Recommendation::new(idx, score, registry.name(idx)?))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Top {} of {} candidates selected (best score {:?})",
        top.len(),
        candidates.len(),
        top.first().map(|r| r.score)
    );
    Ok(top)
}
