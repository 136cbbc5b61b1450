//! The table plus both level summaries, built once per page or command.

use crate::error::EmptyGroupError;
use crate::observation::{GroupingLevel, ObservationTable};
use crate::stats::{self, LevelSummary};

/// Immutable result of the whole statistics pipeline.
///
/// Each level is computed independently, so a failure at one level
/// leaves the other usable.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub table: ObservationTable,
    pub region: Result<LevelSummary, EmptyGroupError>,
    pub sub_region: Result<LevelSummary, EmptyGroupError>,
}

impl Dashboard {
    pub fn build(table: ObservationTable) -> Self {
        let region = stats::summarize(&table, GroupingLevel::Region);
        let sub_region = stats::summarize(&table, GroupingLevel::SubRegion);
        for (level, result) in [
            (GroupingLevel::Region, &region),
            (GroupingLevel::SubRegion, &sub_region),
        ] {
            if let Err(e) = result {
                log::error!("[HD] dashboard: {} level failed: {}", level, e);
            }
        }
        Self {
            table,
            region,
            sub_region,
        }
    }

    pub fn level(&self, level: GroupingLevel) -> &Result<LevelSummary, EmptyGroupError> {
        match level {
            GroupingLevel::Region => &self.region,
            GroupingLevel::SubRegion => &self.sub_region,
        }
    }
}
