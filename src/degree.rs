//! Degree matrices of the interaction graph.
//!
//! Seen as a bipartite graph, the interaction matrix R has one node per user
//! and one per item. A user's degree is its row sum, an item's degree its
//! column sum:
//!
//! - `P[i,i] = Σ_j R[i,j]` (m×m, users)
//! - `Q[j,j] = Σ_i R[i,j]` (n×n, items)
//!
//! Zero degrees are kept as-is here; the guard against dividing by them
//! lives in the similarity stage.

use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use log::{debug, info, trace, warn};

use crate::errors::{RecommendError, Result};
use crate::interactions::InteractionMatrix;

/// User (`p`) and item (`q`) degree matrices derived from one interaction matrix.
#[derive(Debug, Clone)]
pub struct DegreeMatrices {
    pub p: DenseMatrix<f64>,
    pub q: DenseMatrix<f64>,
}

impl DegreeMatrices {
    /// Diagonal of P: total interactions per user.
    pub fn user_degrees(&self) -> Vec<f64> {
        diagonal_of(&self.p)
    }

    /// Diagonal of Q: total interactions per item.
    pub fn item_degrees(&self) -> Vec<f64> {
        diagonal_of(&self.q)
    }
}

/// Computes P (row sums) and Q (column sums) as dense diagonal matrices.
///
/// A 1×1 or all-zero R is valid and yields zero matrices.
///
/// # Examples
///
/// ```
/// use showspace::interactions::InteractionMatrix;
/// use showspace::degree::compute_degree_matrices;
///
/// let r = InteractionMatrix::from_rows(vec![vec![1, 0, 1], vec![0, 1, 1]]).unwrap();
/// let deg = compute_degree_matrices(&r);
///
/// assert_eq!(deg.user_degrees(), vec![2.0, 2.0]);
/// assert_eq!(deg.item_degrees(), vec![1.0, 1.0, 2.0]);
/// ```
pub fn compute_degree_matrices(r: &InteractionMatrix) -> DegreeMatrices {
    info!("Computing degree matrices for {}x{} interactions", r.nusers(), r.nitems());

    let user_degrees: Vec<f64> = r
        .by_user()
        .outer_iterator()
        .map(|row| row.iter().map(|(_, &w)| w).sum::<f64>())
        .collect();
    let item_degrees: Vec<f64> = r
        .by_item()
        .outer_iterator()
        .map(|col| col.iter().map(|(_, &w)| w).sum::<f64>())
        .collect();

    log_degree_stats("user", &user_degrees);
    log_degree_stats("item", &item_degrees);

    DegreeMatrices {
        p: diagonal_matrix(&user_degrees),
        q: diagonal_matrix(&item_degrees),
    }
}

/// Builds a square dense matrix with `values` on the diagonal.
pub fn diagonal_matrix(values: &[f64]) -> DenseMatrix<f64> {
    let n = values.len();
    trace!("Building {}x{} diagonal matrix", n, n);
    DenseMatrix::from_iterator(
        (0..n * n).map(|idx| {
            let (i, j) = (idx / n, idx % n);
            if i == j {
                values[i]
            } else {
                0.0
            }
        }),
        n,
        n,
        0,
    )
}

/// Extracts the diagonal of a square matrix.
///
/// # Errors
///
/// `DimensionMismatch` if the matrix is not square.
pub fn diagonal(matrix: &DenseMatrix<f64>) -> Result<Vec<f64>> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(RecommendError::DimensionMismatch {
            expected: (rows, rows),
            actual: (rows, cols),
        });
    }
    Ok(diagonal_of(matrix))
}

fn diagonal_of(matrix: &DenseMatrix<f64>) -> Vec<f64> {
    let n = matrix.shape().0;
    (0..n).map(|i| *matrix.get((i, i))).collect()
}

fn log_degree_stats(kind: &str, degrees: &[f64]) {
    let (min, max) = degrees
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &d| {
            (min.min(d), max.max(d))
        });
    let zeros = degrees.iter().filter(|&&d| d == 0.0).count();
    debug!(
        "{} degrees: n={}, min={:.1}, max={:.1}",
        kind,
        degrees.len(),
        min,
        max
    );
    if zeros > 0 {
        warn!(
            "{} {} node(s) have zero degree; their similarities will be zero",
            zeros, kind
        );
    }
}
