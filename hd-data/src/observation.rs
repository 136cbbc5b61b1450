use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Column names of the station CSV, in file order.
pub const STATION_NAME: &str = "Station Name";
pub const REGION: &str = "Region";
pub const SUB_REGION: &str = "Sub Region";
pub const STATE: &str = "State";
pub const YEAR: &str = "Year";
pub const TOTAL_DAYS: &str = "Total Days";

/// Every column the loader requires, in the order the export writes them.
pub const COLUMNS: [&str; 6] = [STATION_NAME, REGION, SUB_REGION, STATE, YEAR, TOTAL_DAYS];

/// One station's headache day count for one year.
///
/// Field renames match the CSV header so the same struct serializes
/// straight back to the original column names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "Station Name")]
    pub station_name: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Sub Region")]
    pub sub_region: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Total Days")]
    pub total_days: u32,
}

/// Which categorical attribute observations are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingLevel {
    Region,
    SubRegion,
}

impl GroupingLevel {
    /// Both levels, coarsest first.
    pub const ALL: [GroupingLevel; 2] = [GroupingLevel::Region, GroupingLevel::SubRegion];

    /// The group key of `observation` at this level.
    pub fn key(self, observation: &Observation) -> &str {
        match self {
            GroupingLevel::Region => &observation.region,
            GroupingLevel::SubRegion => &observation.sub_region,
        }
    }

    /// The CSV column holding this level's key.
    pub fn column(self) -> &'static str {
        match self {
            GroupingLevel::Region => REGION,
            GroupingLevel::SubRegion => SUB_REGION,
        }
    }
}

impl fmt::Display for GroupingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for GroupingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" => Ok(GroupingLevel::Region),
            "sub-region" | "sub_region" | "subregion" | "sub region" => Ok(GroupingLevel::SubRegion),
            other => Err(format!(
                "unknown grouping level '{}' (expected 'region' or 'sub-region')",
                other
            )),
        }
    }
}

/// The loaded station table. Row order is input order and never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.rows.iter()
    }

    /// Distinct keys at `level`, ordered by first appearance.
    pub fn distinct_keys(&self, level: GroupingLevel) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|o| level.key(o))
            .filter(|key| seen.insert(*key))
            .map(str::to_string)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ObservationTable {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<Observation> for ObservationTable {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
