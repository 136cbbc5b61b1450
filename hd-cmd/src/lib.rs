//! Command implementations for the HD CLI.
//!
//! Every subcommand loads the station CSV once, then either prints the
//! grouped statistics, lists outliers, re-exports the table or checks
//! that the whole pipeline holds together.

use clap::Subcommand;
use hd_data::GroupingLevel;
use std::path::PathBuf;

pub mod export;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Print quartiles and IQR fences per group
    Stats {
        /// Path to the ISO-8859-1 station CSV
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Only this level ('region' or 'sub-region'); both when omitted
        #[arg(short = 'l', long)]
        level: Option<GroupingLevel>,
    },

    /// List stations whose count falls outside their group's fences
    Outliers {
        /// Path to the ISO-8859-1 station CSV
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Only this level ('region' or 'sub-region'); both when omitted
        #[arg(short = 'l', long)]
        level: Option<GroupingLevel>,
    },

    /// Write the raw table as UTF-8 CSV
    Export {
        /// Path to the ISO-8859-1 station CSV
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Output path for the UTF-8 CSV
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Check the table aggregates at both levels and survives an export round trip
    Validate {
        /// Path to the ISO-8859-1 station CSV
        #[arg(short = 'i', long)]
        input: PathBuf,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stats { input, level } => report::run_stats(&input, level),
        Command::Outliers { input, level } => report::run_outliers(&input, level),
        Command::Export { input, output } => export::run_export(&input, &output),
        Command::Validate { input } => export::run_validate(&input),
    }
}

/// The levels a command should cover.
pub(crate) fn selected_levels(level: Option<GroupingLevel>) -> Vec<GroupingLevel> {
    match level {
        Some(level) => vec![level],
        None => GroupingLevel::ALL.to_vec(),
    }
}

/// Load the station file, adding the path to any error.
pub(crate) fn load_table(input: &std::path::Path) -> anyhow::Result<hd_data::ObservationTable> {
    use anyhow::Context;
    hd_data::loader::load_path(input)
        .with_context(|| format!("Failed to load station data from {}", input.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_level_selects_both() {
        assert_eq!(selected_levels(None), GroupingLevel::ALL.to_vec());
        assert_eq!(
            selected_levels(Some(GroupingLevel::SubRegion)),
            vec![GroupingLevel::SubRegion]
        );
    }
}
