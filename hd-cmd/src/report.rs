//! `stats` and `outliers` subcommands.
//!
//! Formatting is kept separate from printing so the tables can be checked
//! in tests without capturing stdout.

use hd_data::stats::{self, LevelSummary};
use hd_data::{GroupingLevel, ObservationTable};
use log::info;
use std::fmt::Write;
use std::path::Path;

use crate::{load_table, selected_levels};

pub fn run_stats(input: &Path, level: Option<GroupingLevel>) -> anyhow::Result<()> {
    let table = load_table(input)?;
    info!("Loaded {} observations from {}", table.len(), input.display());

    for level in selected_levels(level) {
        let summary = stats::summarize(&table, level)?;
        print!("{}", format_stats(&summary, &table));
    }
    Ok(())
}

pub fn run_outliers(input: &Path, level: Option<GroupingLevel>) -> anyhow::Result<()> {
    let table = load_table(input)?;
    info!("Loaded {} observations from {}", table.len(), input.display());

    for level in selected_levels(level) {
        let summary = stats::summarize(&table, level)?;
        print!("{}", format_outliers(&summary, &table));
    }
    Ok(())
}

/// One row per group: count, quartiles, fences and flagged stations.
pub fn format_stats(summary: &LevelSummary, table: &ObservationTable) -> String {
    let outliers = summary.outliers(table);

    let mut out = String::new();
    let _ = writeln!(out, "{}", summary.level);
    let _ = writeln!(
        out,
        "{:<24} {:>5} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Group", "N", "Q1", "Median", "Q3", "Lower", "Upper", "Outliers"
    );
    for group in &summary.stats {
        let flagged = outliers
            .iter()
            .filter(|o| summary.level.key(o) == group.key)
            .count();
        let _ = writeln!(
            out,
            "{:<24} {:>5} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8}",
            group.key,
            group.count,
            group.q1,
            group.q2,
            group.q3,
            group.lower,
            group.upper,
            flagged
        );
    }
    out.push('\n');
    out
}

/// Flagged observations in table order, with the fence each one crossed.
pub fn format_outliers(summary: &LevelSummary, table: &ObservationTable) -> String {
    let outliers = summary.outliers(table);

    let mut out = String::new();
    let _ = writeln!(out, "{} outliers: {}", summary.level, outliers.len());
    for observation in outliers {
        let key = summary.level.key(observation);
        let side = match summary.stats_for(key) {
            Some(group) if f64::from(observation.total_days) > group.upper => {
                format!("above {:.2}", group.upper)
            }
            Some(group) => format!("below {:.2}", group.lower),
            None => String::new(),
        };
        let _ = writeln!(
            out,
            "  {:<24} {:<28} {:<3} {:>4} {:>5}  {}",
            key,
            observation.station_name,
            observation.state,
            observation.year,
            observation.total_days,
            side
        );
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_data::loader::parse_str;

    const CSV: &str = "\
Station Name,Region,Sub Region,State,Year,Total Days
A,West,Pacific,CA,2022,10
B,West,Pacific,OR,2022,11
C,West,Mountain,CO,2022,12
D,West,Mountain,UT,2022,13
E,West,Mountain,WY,2022,90
F,South,South Atlantic,FL,2022,40
";

    #[test]
    fn stats_table_lists_every_group_in_order() {
        let table = parse_str(CSV).unwrap();
        let summary = stats::summarize(&table, GroupingLevel::Region).unwrap();
        let text = format_stats(&summary, &table);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Region");
        assert!(lines[1].starts_with("Group"));
        assert!(lines[2].starts_with("West"));
        assert!(lines[3].starts_with("South"));
        // West: 10 11 12 13 90 -> q1 11, median 12, q3 13, one outlier
        assert!(lines[2].contains("11.00"));
        assert!(lines[2].contains("12.00"));
        assert!(lines[2].trim_end().ends_with('1'));
        assert!(lines[3].trim_end().ends_with('0'));
    }

    #[test]
    fn outlier_listing_names_station_and_fence() {
        let table = parse_str(CSV).unwrap();
        let summary = stats::summarize(&table, GroupingLevel::Region).unwrap();
        let text = format_outliers(&summary, &table);

        assert!(text.starts_with("Region outliers: 1"));
        let row = text.lines().nth(1).unwrap();
        assert!(row.contains("West"));
        assert!(row.contains("WY"));
        assert!(row.contains("above 16.00"));
    }

    #[test]
    fn no_outliers_prints_just_the_count() {
        let table = parse_str(CSV).unwrap();
        let summary = stats::summarize(&table, GroupingLevel::SubRegion).unwrap();
        let text = format_outliers(&summary, &table);
        // Mountain: 12 13 90 -> q1 12.5, q3 51.5, fences -46 and 110
        assert_eq!(text, "Sub Region outliers: 0\n\n");
    }
}
