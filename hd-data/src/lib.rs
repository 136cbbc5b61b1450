//! Headache day observations and their grouped distribution statistics.
//!
//! This crate holds everything the dashboard computes before anything is
//! drawn. It compiles for both native targets (the CLI) and
//! `wasm32-unknown-unknown` (the Dioxus dashboard), so it stays free of
//! any UI or JS dependency.
//!
//! # Pipeline
//!
//! 1. [`loader`] reads the station CSV (ISO-8859-1) into an
//!    [`ObservationTable`], keeping input row order.
//! 2. [`stats`] groups the table by a [`GroupingLevel`] and computes
//!    quartiles, IQR fences and an outlier mask per level.
//! 3. [`dashboard`] bundles the table with both level summaries.
//! 4. [`export`] serializes the raw table back to UTF-8 CSV.
//!
//! # Usage
//!
//! ```rust
//! use hd_data::{loader, stats, GroupingLevel};
//!
//! let csv = "Station Name,Region,Sub Region,State,Year,Total Days\n\
//!            Boston,Northeast,New England,MA,2022,41\n\
//!            Hartford,Northeast,New England,CT,2022,47\n";
//! let table = loader::parse_str(csv).unwrap();
//! let summary = stats::summarize(&table, GroupingLevel::Region).unwrap();
//!
//! assert_eq!(summary.keys, vec!["Northeast".to_string()]);
//! assert_eq!(summary.stats[0].q2, 44.0);
//! assert!(summary.outlier_mask.iter().all(|flagged| !flagged));
//! ```

pub mod dashboard;
pub mod error;
pub mod export;
pub mod loader;
pub mod observation;
pub mod palette;
pub mod stats;

pub use dashboard::Dashboard;
pub use error::{DataLoadError, EmptyGroupError};
pub use observation::{GroupingLevel, Observation, ObservationTable};
pub use stats::{GroupStatistics, LevelSummary};
