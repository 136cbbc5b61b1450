//! Raw table export to UTF-8 CSV.
//!
//! The output header matches the input column names, rows stay in table
//! order, and quoting follows the `csv` crate's defaults (fields are
//! quoted only when they contain a delimiter, quote or newline). Parsing
//! the output with [`crate::loader::parse_bytes`] in UTF-8 mode yields the
//! original table.

use crate::observation::ObservationTable;
use std::io::Write;

/// File name offered to the browser for the dashboard download.
pub const EXPORT_FILENAME: &str = "headache_days.csv";

/// MIME type of the exported bytes.
pub const EXPORT_MIME: &str = "text/csv;charset=utf-8";

/// Write `table` as CSV with a header row.
pub fn write_csv<W: Write>(table: &ObservationTable, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    if table.is_empty() {
        // serde-driven headers only appear with the first row
        wtr.write_record(crate::observation::COLUMNS)?;
    }
    for observation in table {
        wtr.serialize(observation)?;
    }
    wtr.flush()?;
    Ok(())
}

/// The CSV export as bytes.
pub fn to_csv_bytes(table: &ObservationTable) -> Result<Vec<u8>, csv::Error> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    log::info!(
        "[HD] export: Serialized {} observations ({} bytes)",
        table.len(),
        buf.len()
    );
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{self, Encoding};
    use crate::observation::Observation;

    fn obs(station: &str, region: &str, sub_region: &str, state: &str, year: i32, days: u32) -> Observation {
        Observation {
            station_name: station.to_string(),
            region: region.to_string(),
            sub_region: sub_region.to_string(),
            state: state.to_string(),
            year,
            total_days: days,
        }
    }

    #[test]
    fn export_writes_header_and_rows_in_order() {
        let table = ObservationTable::new(vec![
            obs("Boston Logan", "Northeast", "New England", "MA", 2022, 41),
            obs("Miami Intl", "South", "South Atlantic", "FL", 2021, 12),
        ]);
        let text = String::from_utf8(to_csv_bytes(&table).unwrap()).unwrap();
        assert_eq!(
            text,
            "\
Station Name,Region,Sub Region,State,Year,Total Days
Boston Logan,Northeast,New England,MA,2022,41
Miami Intl,South,South Atlantic,FL,2021,12
"
        );
    }

    #[test]
    fn empty_table_still_has_header() {
        let text = String::from_utf8(to_csv_bytes(&ObservationTable::default()).unwrap()).unwrap();
        assert_eq!(text, "Station Name,Region,Sub Region,State,Year,Total Days\n");
    }

    #[test]
    fn fields_with_commas_and_quotes_are_quoted() {
        let table = ObservationTable::new(vec![obs(
            "Portland, \"PDX\"",
            "West",
            "Pacific",
            "OR",
            2022,
            60,
        )]);
        let text = String::from_utf8(to_csv_bytes(&table).unwrap()).unwrap();
        assert!(
            text.contains("\"Portland, \"\"PDX\"\"\",West"),
            "got: {}",
            text
        );
    }

    #[test]
    fn export_then_parse_reproduces_table() {
        let table = ObservationTable::new(vec![
            obs("Bogot\u{e1} Consulate", "South", "West South Central", "TX", 2020, 30),
            obs("Portland, \"PDX\"", "West", "Pacific", "OR", 2022, 60),
            obs("Fargo", "Midwest", "West North Central", "ND", 2021, 0),
            obs("  Padded  ", "West", "Mountain", "UT", 2019, 7),
        ]);

        let bytes = to_csv_bytes(&table).unwrap();
        let reparsed = loader::parse_bytes(&bytes, Encoding::Utf8).unwrap();
        assert_eq!(reparsed, table);

        // and a second pass is byte-identical
        assert_eq!(to_csv_bytes(&reparsed).unwrap(), bytes);
    }
}
