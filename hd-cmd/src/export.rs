//! `export` and `validate` subcommands.

use anyhow::{bail, ensure, Context};
use hd_data::loader::{self, Encoding};
use hd_data::{export, Dashboard, GroupingLevel, ObservationTable};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::load_table;

pub fn run_export(input: &Path, output: &Path) -> anyhow::Result<()> {
    let table = load_table(input)?;
    write_table(&table, output)?;
    info!(
        "Exported {} observations to {}",
        table.len(),
        output.display()
    );
    Ok(())
}

/// Write `table` as UTF-8 CSV at `output`.
pub fn write_table(table: &ObservationTable, output: &Path) -> anyhow::Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    export::write_csv(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

pub fn run_validate(input: &Path) -> anyhow::Result<()> {
    let table = load_table(input)?;
    let report = validate_table(&table)?;
    println!("{}", report);
    Ok(())
}

/// Outcome of a successful `validate` run.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub observations: usize,
    /// `(level, groups, outliers)` per level.
    pub levels: Vec<(GroupingLevel, usize, usize)>,
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OK: {} observations", self.observations)?;
        for (level, groups, outliers) in &self.levels {
            write!(f, "; {}: {} groups, {} outliers", level, groups, outliers)?;
        }
        Ok(())
    }
}

/// Aggregate both levels and confirm the export re-parses to the same table.
pub fn validate_table(table: &ObservationTable) -> anyhow::Result<ValidationReport> {
    ensure!(!table.is_empty(), "Station table has no observations");

    let dashboard = Dashboard::build(table.clone());
    let mut levels = Vec::new();
    for level in GroupingLevel::ALL {
        let summary = match dashboard.level(level) {
            Ok(summary) => summary,
            Err(e) => bail!("{} aggregation failed: {}", level, e),
        };
        let grouped: usize = summary.group_counts().iter().map(|(_, n)| n).sum();
        ensure!(
            grouped == table.len(),
            "{} groups cover {} of {} observations",
            level,
            grouped,
            table.len()
        );
        levels.push((level, summary.keys.len(), summary.outlier_count()));
    }

    let bytes = export::to_csv_bytes(table)?;
    let reparsed = loader::parse_bytes(&bytes, Encoding::Utf8)
        .context("Exported CSV failed to parse")?;
    ensure!(
        &reparsed == table,
        "Export round trip changed the table ({} rows in, {} rows out)",
        table.len(),
        reparsed.len()
    );
    info!("Export round trip preserved {} rows", table.len());

    Ok(ValidationReport {
        observations: table.len(),
        levels,
    })
}
