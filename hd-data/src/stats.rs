//! Grouped box-plot statistics.
//!
//! For every group at a [`GroupingLevel`] this computes the quartiles,
//! the Tukey fences at 1.5×IQR and, per observation, whether its count
//! falls strictly outside its group's fences.
//!
//! # Quantile convention
//!
//! Quantiles use linear interpolation between order statistics (the
//! "type 7" estimator): for an ascending sample of size `n` the q-th
//! quantile sits at rank `q·(n−1)`. With `[1, 2, …, 14, 100]`:
//!
//! | quantile | rank | value |
//! |----------|------|-------|
//! | q1       | 3.5  | 4.5   |
//! | q2       | 7    | 8     |
//! | q3       | 10.5 | 11.5  |
//!
//! giving IQR = 7 and fences −6 and 22, so only 100 is an outlier.
//!
//! Fences are not clamped: a lower fence below zero is reported as is
//! even though counts cannot be negative.

use crate::error::EmptyGroupError;
use crate::observation::{GroupingLevel, Observation, ObservationTable};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Quantile ranks of the three quartiles.
pub const QUARTILES: [f64; 3] = [0.25, 0.5, 0.75];

/// Fence distance from the box, in IQRs.
pub const FENCE_FACTOR: f64 = 1.5;

/// Type 7 quantile of an ascending sample.
///
/// Returns `None` for an empty sample or `q` outside `[0, 1]`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Distribution summary of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStatistics {
    /// The group key (a region or sub-region name).
    pub key: String,
    /// Number of observations in the group.
    pub count: usize,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    /// `q1 - 1.5 * IQR`
    pub lower: f64,
    /// `q3 + 1.5 * IQR`
    pub upper: f64,
}

impl GroupStatistics {
    /// Compute the statistics of `values` (in any order).
    pub fn from_values(key: impl Into<String>, values: &[f64]) -> Result<Self, EmptyGroupError> {
        let key = key.into();
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let [q1, q2, q3] = match QUARTILES.map(|q| quantile(&sorted, q)) {
            [Some(q1), Some(q2), Some(q3)] => [q1, q2, q3],
            _ => return Err(EmptyGroupError { key }),
        };
        let iqr = q3 - q1;

        Ok(Self {
            key,
            count: sorted.len(),
            q1,
            q2,
            q3,
            lower: q1 - FENCE_FACTOR * iqr,
            upper: q3 + FENCE_FACTOR * iqr,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// True when `value` lies strictly outside `[lower, upper]`.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Everything the box plot of one grouping level needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    pub level: GroupingLevel,
    /// Group keys in first-appearance order.
    pub keys: Vec<String>,
    /// One entry per key, same order as `keys`.
    pub stats: Vec<GroupStatistics>,
    /// One flag per table row, in table order.
    pub outlier_mask: Vec<bool>,
}

impl LevelSummary {
    pub fn stats_for(&self, key: &str) -> Option<&GroupStatistics> {
        self.stats.iter().find(|s| s.key == key)
    }

    /// Flagged observations in table order.
    ///
    /// `table` must be the table this summary was computed from.
    pub fn outliers<'a>(&self, table: &'a ObservationTable) -> Vec<&'a Observation> {
        table
            .iter()
            .zip(&self.outlier_mask)
            .filter(|(_, flagged)| **flagged)
            .map(|(o, _)| o)
            .collect()
    }

    pub fn outlier_count(&self) -> usize {
        self.outlier_mask.iter().filter(|&&flagged| flagged).count()
    }

    /// `(key, count)` per group, in key order.
    pub fn group_counts(&self) -> Vec<(&str, usize)> {
        self.stats.iter().map(|s| (s.key.as_str(), s.count)).collect()
    }
}

/// Summarize `table` at `level`, taking the group keys from the data.
pub fn summarize(
    table: &ObservationTable,
    level: GroupingLevel,
) -> Result<LevelSummary, EmptyGroupError> {
    let keys = table.distinct_keys(level);
    summarize_with_keys(table, level, &keys)
}

/// Summarize `table` at `level` for an explicit key list.
///
/// Fails on the first key without observations. Rows whose key is not in
/// `keys` are never flagged. Duplicate keys are kept once.
pub fn summarize_with_keys(
    table: &ObservationTable,
    level: GroupingLevel,
    keys: &[String],
) -> Result<LevelSummary, EmptyGroupError> {
    let mut groups: HashMap<&str, Vec<f64>> = HashMap::new();
    for observation in table {
        groups
            .entry(level.key(observation))
            .or_default()
            .push(f64::from(observation.total_days));
    }

    let mut seen = HashSet::new();
    let mut unique_keys = Vec::with_capacity(keys.len());
    for key in keys {
        if seen.insert(key.as_str()) {
            unique_keys.push(key.clone());
        }
    }
    let keys = unique_keys;

    let stats = keys
        .iter()
        .map(|key| {
            let values = groups.get(key.as_str()).map(Vec::as_slice).unwrap_or(&[]);
            GroupStatistics::from_values(key.as_str(), values)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let by_key: HashMap<&str, &GroupStatistics> =
        stats.iter().map(|s| (s.key.as_str(), s)).collect();
    let outlier_mask: Vec<bool> = table
        .iter()
        .map(|o| {
            by_key
                .get(level.key(o))
                .is_some_and(|s| s.is_outlier(f64::from(o.total_days)))
        })
        .collect();

    log::info!(
        "[HD] stats: {} level has {} groups, {} outliers among {} observations",
        level,
        stats.len(),
        outlier_mask.iter().filter(|&&flagged| flagged).count(),
        table.len()
    );

    Ok(LevelSummary {
        level,
        keys,
        stats,
        outlier_mask,
    })
}
