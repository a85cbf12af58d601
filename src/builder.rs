use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use log::{debug, info, trace};

use crate::config::{CfMethod, RecommenderConfig};
use crate::degree::{compute_degree_matrices, DegreeMatrices};
use crate::errors::{RecommendError, Result};
use crate::interactions::InteractionMatrix;
use crate::ranking::{top_recommendations, Recommendation};
use crate::registry::ShowRegistry;
use crate::scoring::score_user;
use crate::similarity::{compute_item_similarity, compute_user_similarity};

/// Immutable bundle of an interaction matrix, its show names and every
/// matrix derived from it.
///
/// All derived matrices are computed together in `RecommenderBuilder::build`
/// from the same R, so they are always consistent with it. To change R,
/// build a new context.
#[derive(Debug, Clone)]
pub struct RecommenderContext {
    interactions: InteractionMatrix,
    registry: ShowRegistry,
    degrees: DegreeMatrices,
    user_similarity: DenseMatrix<f64>,
    item_similarity: DenseMatrix<f64>,
    config: RecommenderConfig,
}

impl RecommenderContext {
    pub fn interactions(&self) -> &InteractionMatrix {
        &self.interactions
    }

    pub fn registry(&self) -> &ShowRegistry {
        &self.registry
    }

    pub fn degrees(&self) -> &DegreeMatrices {
        &self.degrees
    }

    /// Su, m×m.
    pub fn user_similarity(&self) -> &DenseMatrix<f64> {
        &self.user_similarity
    }

    /// Si, n×n.
    pub fn item_similarity(&self) -> &DenseMatrix<f64> {
        &self.item_similarity
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Similarity matrix the given method propagates through.
    pub fn similarity(&self, method: CfMethod) -> &DenseMatrix<f64> {
        match method {
            CfMethod::UserUser => &self.user_similarity,
            CfMethod::ItemItem => &self.item_similarity,
        }
    }

    /// Full score vector (length `nitems`) for `user`.
    pub fn scores(&self, user: usize, method: CfMethod) -> Result<Vec<f64>> {
        score_user(method, &self.interactions, self.similarity(method), user)
    }

    /// Top `config.top_k` candidates for `user` under `method`.
    pub fn recommend(
        &self,
        user: usize,
        candidates: &[usize],
        method: CfMethod,
    ) -> Result<Vec<Recommendation>> {
        debug!(
            "Recommending for user {} with {} over {} candidates",
            user,
            method,
            candidates.len()
        );
        let scores = self.scores(user, method)?;
        top_recommendations(&scores, candidates, self.config.top_k, &self.registry)
    }

    /// Same as `recommend` with the configured method and, as candidates,
    /// every item the user has not interacted with.
    pub fn recommend_unseen(&self, user: usize) -> Result<Vec<Recommendation>> {
        let candidates = self.interactions.unseen_items(user)?;
        self.recommend(user, &candidates, self.config.method)
    }
}

pub struct RecommenderBuilder {
    config: RecommenderConfig,
}

impl Default for RecommenderBuilder {
    fn default() -> Self {
        debug!("Creating RecommenderBuilder with default parameters");
        Self { config: RecommenderConfig::default() }
    }
}

impl RecommenderBuilder {
    pub fn new() -> Self {
        info!("Initializing new RecommenderBuilder");
        Self::default()
    }

    /// Replace the whole configuration, e.g. one deserialised from a file.
    pub fn with_config(mut self, config: RecommenderConfig) -> Self {
        info!("Using configuration: {:?}", config);
        self.config = config;
        self
    }

    /// Number of recommendations returned per query.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        info!("Setting top_k: {}", top_k);
        self.config.top_k = top_k;
        self
    }

    /// Method used by `RecommenderContext::recommend_unseen`.
    pub fn with_method(mut self, method: CfMethod) -> Self {
        info!("Setting default method: {}", method);
        self.config.method = method;
        self
    }

    /// Computes P, Q, Su and Si for `interactions` and freezes them together
    /// with `registry`.
    ///
    /// # Errors
    ///
    /// `RegistryMismatch` if `registry.len() != interactions.nitems()`.
    pub fn build(
        self,
        interactions: InteractionMatrix,
        registry: ShowRegistry,
    ) -> Result<RecommenderContext> {
        info!(
            "Building recommender context from {} users x {} items",
            interactions.nusers(), interactions.nitems()
        );
        if registry.len() != interactions.nitems() {
            return Err(RecommendError::RegistryMismatch {
                names: registry.len(),
                nitems: interactions.nitems(),
            });
        }

        trace!("Degree matrices");
        let degrees = compute_degree_matrices(&interactions);

        trace!("Similarity matrices");
        let user_similarity = compute_user_similarity(&interactions, &degrees.p)?;
        let item_similarity = compute_item_similarity(&interactions, &degrees.q)?;
        debug!(
            "Su shape {:?}, Si shape {:?}",
            user_similarity.shape(),
            item_similarity.shape()
        );

        info!("Recommender context built successfully");
        Ok(RecommenderContext {
            interactions,
            registry,
            degrees,
            user_similarity,
            item_similarity,
            config: self.config,
        })
    }
}
