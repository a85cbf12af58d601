//! # showspace
//!
//! Degree-normalised collaborative filtering over a user × item interaction
//! matrix.
//!
//! Pipeline (each stage a pure function of the previous one):
//!
//! 1. `interactions`: immutable counts R (m users × n items)
//! 2. `degree`: diagonal degree matrices P (row sums) and Q (column sums)
//! 3. `similarity`: `Su = P^-1/2 R Rᵀ P^-1/2` and `Si = Q^-1/2 Rᵀ R Q^-1/2`
//! 4. `scoring`: one user's dense score vector through Su or Si
//! 5. `ranking`: top-K of a candidate set, ties broken by lower index
//!
//! `builder::RecommenderBuilder` runs stages 2-3 once and freezes the result
//! into an immutable `RecommenderContext` for repeated queries.
//!
//! ```
//! use showspace::builder::RecommenderBuilder;
//! use showspace::config::CfMethod;
//! use showspace::interactions::InteractionMatrix;
//! use showspace::registry::ShowRegistry;
//!
//! let r = InteractionMatrix::from_rows(vec![
//!     vec![1, 0, 1],
//!     vec![0, 1, 1],
//!     vec![1, 1, 0],
//! ]).unwrap();
//! let ctx = RecommenderBuilder::new()
//!     .build(r, ShowRegistry::new(["A", "B", "C"]))
//!     .unwrap();
//!
//! let top = ctx.recommend(0, &[1, 2], CfMethod::UserUser).unwrap();
//! assert_eq!(top[0].name, "C");
//! ```

pub mod builder;
pub mod config;
pub mod degree;
pub mod errors;
pub mod evaluation;
pub mod interactions;
pub mod loader;
pub mod ranking;
pub mod registry;
pub mod scoring;
pub mod similarity;

#[cfg(test)]
mod tests;
