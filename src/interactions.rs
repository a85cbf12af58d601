//! InteractionMatrix: the immutable user × item count matrix every other
//! structure is derived from.
//!
//! Rows are users, columns are items. Counts are stored once, row-major, and
//! two read-only sparse views are materialised at construction:
//!
//! - a CSR matrix over users (row `i` lists the items user `i` touched),
//! - a CSR matrix over items (row `j` lists the users that touched item `j`).
//!
//! A dense `DenseMatrix<f64>` copy is only built on request (`dense()`).
//!
//! The two sparse views let the similarity stage accumulate co-occurrences
//! by walking only non-zero entries, which is what makes the user-user and
//! item-item products tractable on real, mostly empty, watch histories.
//!
//! # Examples
//!
//! ```
//! use showspace::interactions::InteractionMatrix;
//!
//! let r = InteractionMatrix::from_rows(vec![
//!     vec![1, 0, 1],
//!     vec![0, 1, 1],
//! ]).unwrap();
//!
//! assert_eq!(r.shape(), (2, 3));
//! assert_eq!(r.get(1, 2), 1);
//! assert_eq!(r.nnz(), 4);
//! ```

use smartcore::linalg::basic::arrays::Array2;
use smartcore::linalg::basic::matrix::DenseMatrix;
use sprs::{CsMat, TriMat};

use log::{debug, info, trace};

use crate::errors::{RecommendError, Result};

#[derive(Debug, Clone)]
pub struct InteractionMatrix {
    nusers: usize,
    nitems: usize,
    counts: Vec<u32>, // row-major, counts[user * nitems + item]
    by_user: CsMat<f64>,
    by_item: CsMat<f64>,
}

impl InteractionMatrix {
    /// Builds the matrix from equally sized user rows.
    ///
    /// # Errors
    ///
    /// `MalformedMatrix` if there are no rows, no columns, or rows of
    /// differing lengths.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let nusers = rows.len();
        if nusers == 0 {
            return Err(RecommendError::MalformedMatrix(
                "matrix has no rows".to_string(),
            ));
        }
        let nitems = rows[0].len();
        if nitems == 0 {
            return Err(RecommendError::MalformedMatrix(
                "matrix has no columns".to_string(),
            ));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != nitems) {
            return Err(RecommendError::MalformedMatrix(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                nitems
            )));
        }

        let counts: Vec<u32> = rows.into_iter().flatten().collect();
        Ok(Self::from_counts(counts, nusers, nitems))
    }

    /// Builds the matrix from a row-major flat buffer.
    ///
    /// # Errors
    ///
    /// `MalformedMatrix` if either dimension is zero or the buffer length is
    /// not `nusers * nitems`.
    pub fn from_row_major(counts: Vec<u32>, nusers: usize, nitems: usize) -> Result<Self> {
        if nusers == 0 || nitems == 0 {
            return Err(RecommendError::MalformedMatrix(format!(
                "matrix dimensions must be positive, got {}x{}",
                nusers, nitems
            )));
        }
        let expected = nusers.checked_mul(nitems).ok_or_else(|| {
            RecommendError::MalformedMatrix(format!(
                "dimensions {}x{} overflow the addressable size",
                nusers, nitems
            ))
        })?;
        if counts.len() != expected {
            return Err(RecommendError::MalformedMatrix(format!(
                "buffer holds {} values, expected {}x{}={}",
                counts.len(),
                nusers,
                nitems,
                expected
            )));
        }
        Ok(Self::from_counts(counts, nusers, nitems))
    }

    fn from_counts(counts: Vec<u32>, nusers: usize, nitems: usize) -> Self {
        info!("Building interaction matrix: {} users x {} items", nusers, nitems);

        trace!("Collecting non-zero interactions into triplets");
        let mut user_triplets = TriMat::new((nusers, nitems));
        let mut item_triplets = TriMat::new((nitems, nusers));
        for (idx, &c) in counts.iter().enumerate() {
            if c > 0 {
                let (u, j) = (idx / nitems, idx % nitems);
                user_triplets.add_triplet(u, j, c as f64);
                item_triplets.add_triplet(j, u, c as f64);
            }
        }
        let by_user: CsMat<f64> = user_triplets.to_csr();
        let by_item: CsMat<f64> = item_triplets.to_csr();

        let total = (nusers * nitems) as f64;
        debug!(
            "Interaction matrix has {} non-zeros ({:.2}% dense)",
            by_user.nnz(),
            by_user.nnz() as f64 / total * 100.0
        );

        Self { nusers, nitems, counts, by_user, by_item }
    }

    /// Number of users (rows).
    #[inline]
    pub fn nusers(&self) -> usize {
        self.nusers
    }

    /// Number of items (columns).
    #[inline]
    pub fn nitems(&self) -> usize {
        self.nitems
    }

    /// Returns (nusers, nitems).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nusers, self.nitems)
    }

    /// Interaction count of `user` with `item`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, user: usize, item: usize) -> u32 {
        assert!(
            user < self.nusers && item < self.nitems,
            "Index out of bounds: ({}, {}) for {}x{} matrix",
            user,
            item,
            self.nusers,
            self.nitems
        );
        self.counts[user * self.nitems + item]
    }

    /// Zero-copy view of one user's interaction row.
    ///
    /// # Panics
    ///
    /// Panics if `user` is out of bounds.
    #[inline]
    pub fn user_row(&self, user: usize) -> &[u32] {
        let start = user * self.nitems;
        &self.counts[start..start + self.nitems]
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.by_user.nnz()
    }

    /// Dense f64 copy, row-major users × items. Allocates `nusers * nitems`
    /// values on every call.
    pub fn dense(&self) -> DenseMatrix<f64> {
        trace!("Materialising dense {}x{} interaction matrix", self.nusers, self.nitems);
        DenseMatrix::from_iterator(
            self.counts.iter().map(|&c| c as f64),
            self.nusers,
            self.nitems,
            0,
        )
    }

    /// CSR view with one outer row per user.
    pub fn by_user(&self) -> &CsMat<f64> {
        &self.by_user
    }

    /// CSR view of the transpose: one outer row per item.
    pub fn by_item(&self) -> &CsMat<f64> {
        &self.by_item
    }

    /// Checks a user index against the row count.
    pub fn check_user(&self, user: usize) -> Result<()> {
        if user >= self.nusers {
            return Err(RecommendError::UserIndexOutOfBounds {
                index: user,
                nusers: self.nusers,
            });
        }
        Ok(())
    }

    /// Checks an item index against the column count.
    pub fn check_item(&self, item: usize) -> Result<()> {
        if item >= self.nitems {
            return Err(RecommendError::ItemIndexOutOfBounds {
                index: item,
                nitems: self.nitems,
            });
        }
        Ok(())
    }

    /// Items the user has never interacted with, in ascending order.
    /// This is the usual candidate set handed to ranking.
    pub fn unseen_items(&self, user: usize) -> Result<Vec<usize>> {
        self.check_user(user)?;
        let unseen: Vec<usize> = self
            .user_row(user)
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == 0)
            .map(|(j, _)| j)
            .collect();
        trace!("User {} has {} unseen items", user, unseen.len());
        Ok(unseen)
    }
}
