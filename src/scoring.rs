//! Score propagation: turn one user's neighbourhood into a dense score over
//! every item.
//!
//! - user-user: `scores = Su[u, :] · R`, items popular among similar users
//! - item-item: `scores = (R · Si)[u, :]`, items similar to what `u` already has
//!
//! Both paths return all `nitems` scores, including items the user has
//! already seen; restricting to candidates is done by `ranking`. Self
//! similarity is part of the propagation, so a user's own history feeds back
//! into its scores.

use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use log::{debug, trace};

use crate::config::CfMethod;
use crate::errors::{RecommendError, Result};
use crate::interactions::InteractionMatrix;

/// User-user scores for `user`: `Σ_k Su[user,k] · R[k,:]`.
///
/// # Errors
///
/// - `UserIndexOutOfBounds` if `user >= nusers`.
/// - `DimensionMismatch` if `su` is not `nusers × nusers`.
pub fn user_user_scores(
    r: &InteractionMatrix,
    su: &DenseMatrix<f64>,
    user: usize,
) -> Result<Vec<f64>> {
    r.check_user(user)?;
    check_square(su, r.nusers())?;
    trace!("Propagating user-user scores for user {}", user);

    let mut scores = vec![0.0f64; r.nitems()];
    for (k, row) in r.by_user().outer_iterator().enumerate() {
        let s = *su.get((user, k));
        if s == 0.0 {
            continue;
        }
        for (j, &v) in row.iter() {
            scores[j] += s * v;
        }
    }

    log_scores("user-user", user, &scores);
    Ok(scores)
}

/// Item-item scores for `user`: `Σ_l R[user,l] · Si[l,:]`.
///
/// # Errors
///
/// - `UserIndexOutOfBounds` if `user >= nusers`.
/// - `DimensionMismatch` if `si` is not `nitems × nitems`.
pub fn item_item_scores(
    r: &InteractionMatrix,
    si: &DenseMatrix<f64>,
    user: usize,
) -> Result<Vec<f64>> {
    r.check_user(user)?;
    check_square(si, r.nitems())?;
    trace!("Propagating item-item scores for user {}", user);

    let mut scores = vec![0.0f64; r.nitems()];
    if let Some(history) = r.by_user().outer_view(user) {
        for (l, &v) in history.iter() {
            for (j, score) in scores.iter_mut().enumerate() {
                *score += v * *si.get((l, j));
            }
        }
    }

    log_scores("item-item", user, &scores);
    Ok(scores)
}

/// Dispatches to the propagation path selected by `method`. `similarity`
/// must be Su for `UserUser` and Si for `ItemItem`.
pub fn score_user(
    method: CfMethod,
    r: &InteractionMatrix,
    similarity: &DenseMatrix<f64>,
    user: usize,
) -> Result<Vec<f64>> {
    match method {
        CfMethod::UserUser => user_user_scores(r, similarity, user),
        CfMethod::ItemItem => item_item_scores(r, similarity, user),
    }
}

fn check_square(matrix: &DenseMatrix<f64>, expected: usize) -> Result<()> {
    let shape = matrix.shape();
    if shape != (expected, expected) {
        return Err(RecommendError::DimensionMismatch {
            expected: (expected, expected),
            actual: shape,
        });
    }
    Ok(())
}

fn log_scores(kind: &str, user: usize, scores: &[f64]) {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    debug!(
        "{} scores for user {}: {} items, max={:.4}",
        kind,
        user,
        scores.len(),
        max
    );
}
