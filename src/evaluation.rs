//! Numeric comparison of the user-user and item-item rankings.
//!
//! Covers the parts of an evaluation that do not need a plot: best scores,
//! overlap between the two lists, and the pass/fail check of the best scores
//! against fixed thresholds.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use log::info;

use crate::ranking::Recommendation;

/// Best score in a ranking, `None` when it is empty.
pub fn max_score(recs: &[Recommendation]) -> Option<f64> {
    recs.iter().map(|r| r.score).fold(None, |acc, s| match acc {
        Some(m) if m >= s => Some(m),
        _ => Some(s),
    })
}

/// Set comparison of two rankings by show name. Name sets are sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapReport {
    pub user_user_count: usize,
    pub item_item_count: usize,
    pub common: Vec<String>,
    pub only_user_user: Vec<String>,
    pub only_item_item: Vec<String>,
}

pub fn compare_recommendations(
    user_user: &[Recommendation],
    item_item: &[Recommendation],
) -> OverlapReport {
    let uu: BTreeSet<&str> = user_user.iter().map(|r| r.name.as_str()).collect();
    let ii: BTreeSet<&str> = item_item.iter().map(|r| r.name.as_str()).collect();

    let report = OverlapReport {
        user_user_count: uu.len(),
        item_item_count: ii.len(),
        common: uu.intersection(&ii).map(|s| s.to_string()).collect(),
        only_user_user: uu.difference(&ii).map(|s| s.to_string()).collect(),
        only_item_item: ii.difference(&uu).map(|s| s.to_string()).collect(),
    };

    info!(
        "User-User: {}, Item-Item: {}, overlap: {}, unique UU: {}, unique II: {}",
        report.user_user_count,
        report.item_item_count,
        report.common.len(),
        report.only_user_user.len(),
        report.only_item_item.len()
    );
    for show in &report.common {
        info!("  common: {}", show);
    }
    report
}

/// Minimum best scores each method must exceed (strictly).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationThresholds {
    pub user_user: f64,
    pub item_item: f64,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self { user_user: 900.0, item_item: 31.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub user_user_max: f64,
    pub item_item_max: f64,
    pub user_user_pass: bool,
    pub item_item_pass: bool,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.user_user_pass && self.item_item_pass
    }
}

pub fn validate_requirements(
    user_user_max: f64,
    item_item_max: f64,
    thresholds: &ValidationThresholds,
) -> ValidationReport {
    let report = ValidationReport {
        user_user_max,
        item_item_max,
        user_user_pass: user_user_max > thresholds.user_user,
        item_item_pass: item_item_max > thresholds.item_item,
    };
    info!(
        "User-User max score {:.2} (> {}): {}",
        user_user_max,
        thresholds.user_user,
        if report.user_user_pass { "pass" } else { "fail" }
    );
    info!(
        "Item-Item max score {:.2} (> {}): {}",
        item_item_max,
        thresholds.item_item,
        if report.item_item_pass { "pass" } else { "fail" }
    );
    report
}
