//! # Symmetric degree-normalised similarity matrices
//!
//! Given the interaction matrix R (m users × n items) and its degree matrices
//! P and Q:
//!
//! - user-user: `Su = P^(-1/2) · R · Rᵀ · P^(-1/2)` (m×m)
//! - item-item: `Si = Q^(-1/2) · Rᵀ · R · Q^(-1/2)` (n×n)
//!
//! `Su[i,k]` is the co-interaction count of users i and k divided by
//! `sqrt(deg(i) · deg(k))`, which keeps heavy users from dominating every
//! neighbourhood. The diagonal holds the normalised self-similarity and is
//! not forced to 1.
//!
//! ## Zero degrees
//!
//! A user or item with no interactions would divide by zero. The
//! normalisation factor of such a node is computed from a unit divisor
//! instead (`inverse_sqrt_normaliser`). Its co-interaction counts are all
//! zero anyway, so its whole row and column come out as exact zeros.
//!
//! ## Computation
//!
//! The products are never formed densely. Row i of `R · Rᵀ` is accumulated by
//! walking the items of user i and, for each item, the users of that item:
//!
//! 1. **Normaliser**: `w = 1/sqrt(guard(diag(P)))` - `O(m)`
//! 2. **Co-occurrence rows**: one sparse walk per user - `O(Σ_j deg(j)²)`,
//!    `O(m²n)` for a fully dense R
//! 3. **Scaling**: `Su[i,k] = c[i,k] · (w_i · w_k)` - `O(m²)`
//!
//! Rows are built in parallel with rayon. Every entry is summed in ascending
//! item order, so the result is identical between runs and `Su[i,k]` is
//! bit-for-bit equal to `Su[k,i]`.

use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;
use sprs::CsMat;

use rayon::prelude::*;
use log::{debug, info, trace};

use crate::degree::diagonal;
use crate::errors::{RecommendError, Result};
use crate::interactions::InteractionMatrix;

/// Elementwise `1/sqrt(d)` over a degree diagonal, with every zero degree
/// replaced by 1.0 first.
///
/// # Examples
///
/// ```
/// use showspace::similarity::inverse_sqrt_normaliser;
///
/// let w = inverse_sqrt_normaliser(&[4.0, 0.0, 1.0]);
/// assert_eq!(w, vec![0.5, 1.0, 1.0]);
/// ```
pub fn inverse_sqrt_normaliser(degrees: &[f64]) -> Vec<f64> {
    degrees
        .iter()
        .map(|&d| {
            let guarded = if d == 0.0 { 1.0 } else { d };
            1.0 / guarded.sqrt()
        })
        .collect()
}

/// User-user similarity `Su = P^(-1/2) · R · Rᵀ · P^(-1/2)`.
///
/// # Errors
///
/// `DimensionMismatch` if `p` is not `nusers × nusers`.
///
/// # Examples
///
/// ```
/// use showspace::interactions::InteractionMatrix;
/// use showspace::degree::compute_degree_matrices;
/// use showspace::similarity::compute_user_similarity;
/// use smartcore::linalg::basic::arrays::Array;
///
/// let r = InteractionMatrix::from_rows(vec![vec![1, 0, 1], vec![0, 1, 1]]).unwrap();
/// let deg = compute_degree_matrices(&r);
/// let su = compute_user_similarity(&r, &deg.p).unwrap();
///
/// assert_eq!(su.shape(), (2, 2));
/// assert!((*su.get((0, 1)) - 0.5).abs() < 1e-12);
/// ```
pub fn compute_user_similarity(
    r: &InteractionMatrix,
    p: &DenseMatrix<f64>,
) -> Result<DenseMatrix<f64>> {
    info!("Computing user-user similarity for {} users", r.nusers());
    let degrees = checked_diagonal(p, r.nusers())?;
    let weights = inverse_sqrt_normaliser(&degrees);
    Ok(normalised_cooccurrence(r.by_user(), r.by_item(), &weights))
}

/// Item-item similarity `Si = Q^(-1/2) · Rᵀ · R · Q^(-1/2)`.
///
/// # Errors
///
/// `DimensionMismatch` if `q` is not `nitems × nitems`.
pub fn compute_item_similarity(
    r: &InteractionMatrix,
    q: &DenseMatrix<f64>,
) -> Result<DenseMatrix<f64>> {
    info!("Computing item-item similarity for {} items", r.nitems());
    let degrees = checked_diagonal(q, r.nitems())?;
    let weights = inverse_sqrt_normaliser(&degrees);
    Ok(normalised_cooccurrence(r.by_item(), r.by_user(), &weights))
}

fn checked_diagonal(degree: &DenseMatrix<f64>, expected: usize) -> Result<Vec<f64>> {
    let shape = degree.shape();
    if shape != (expected, expected) {
        return Err(RecommendError::DimensionMismatch {
            expected: (expected, expected),
            actual: shape,
        });
    }
    diagonal(degree)
}

/// Builds `W · A · Aᵀ · W` where `outer` is A in CSR form, `inner` is Aᵀ in
/// CSR form and W is `diag(weights)`.
fn normalised_cooccurrence(
    outer: &CsMat<f64>,
    inner: &CsMat<f64>,
    weights: &[f64],
) -> DenseMatrix<f64> {
    let n = outer.rows();
    debug_assert_eq!(weights.len(), n);

    debug!("Accumulating co-occurrence rows for {} nodes", n);
    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut acc = vec![0.0f64; n];
            if let Some(links) = outer.outer_view(i) {
                for (j, &a) in links.iter() {
                    if let Some(back) = inner.outer_view(j) {
                        for (k, &b) in back.iter() {
                            acc[k] += a * b;
                        }
                    }
                }
            }
            let wi = weights[i];
            for (k, v) in acc.iter_mut().enumerate() {
                *v *= wi * weights[k];
            }
            acc
        })
        .collect();

    trace!("Flattening {} similarity rows", rows.len());
    let matrix = DenseMatrix::from_iterator(rows.into_iter().flatten(), n, n, 0);

    let nnz = (0..n)
        .flat_map(|i| (0..n).map(move |k| (i, k)))
        .filter(|&(i, k)| *matrix.get((i, k)) != 0.0)
        .count();
    debug!(
        "Similarity matrix {}x{} with {} non-zeros ({:.2}% sparse)",
        n,
        n,
        nnz,
        if n > 0 { (1.0 - nnz as f64 / (n * n) as f64) * 100.0 } else { 0.0 }
    );

    matrix
}
