//! Display names for the item columns of the interaction matrix.

use log::debug;

use crate::errors::{RecommendError, Result};

/// Ordered show names; `names[j]` names column `j` of the interaction matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowRegistry {
    names: Vec<String>,
}

impl ShowRegistry {
    /// Builds the registry, trimming surrounding whitespace from every name.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .collect();
        debug!("Show registry holds {} names", names.len());
        Self { names }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of item `idx`.
    ///
    /// # Errors
    ///
    /// `ItemIndexOutOfBounds` if `idx >= len()`.
    pub fn name(&self, idx: usize) -> Result<&str> {
        self.names
            .get(idx)
            .map(String::as_str)
            .ok_or(RecommendError::ItemIndexOutOfBounds {
                index: idx,
                nitems: self.names.len(),
            })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
