//! CSV loading for the station table.
//!
//! The input file has a fixed header:
//!
//! ```text
//! Station Name,Region,Sub Region,State,Year,Total Days
//! ```
//!
//! Columns are located by exact name (whitespace around header cells is
//! ignored), so their order in the file is free and extra columns are
//! skipped. There is no auto-detection: renaming a column means updating
//! the constants in [`crate::observation`].
//!
//! The published dataset is ISO-8859-1. Exported files are UTF-8, so the
//! encoding is a parameter rather than a fixed assumption.

use crate::error::DataLoadError;
use crate::observation::{
    Observation, ObservationTable, REGION, STATE, STATION_NAME, SUB_REGION, TOTAL_DAYS, YEAR,
};
use csv::StringRecord;
use std::borrow::Cow;
use std::path::Path;
use std::str::FromStr;

/// Text encoding of the input bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// ISO-8859-1: every byte is the code point of the same value.
    #[default]
    Latin1,
    Utf8,
}

impl Encoding {
    /// Decode `bytes` into text, borrowing when no conversion is needed.
    pub fn decode(self, bytes: &[u8]) -> Result<Cow<'_, str>, DataLoadError> {
        match self {
            Encoding::Utf8 => {
                let text = std::str::from_utf8(bytes)?;
                Ok(Cow::Borrowed(text.strip_prefix('\u{feff}').unwrap_or(text)))
            }
            Encoding::Latin1 if bytes.is_ascii() => Ok(Cow::Borrowed(std::str::from_utf8(bytes)?)),
            Encoding::Latin1 => Ok(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())),
        }
    }
}

/// Read and parse an ISO-8859-1 station file.
pub fn load_path(path: impl AsRef<Path>) -> Result<ObservationTable, DataLoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("[HD] loader: Read {} bytes from {}", bytes.len(), path.display());
    parse_bytes(&bytes, Encoding::Latin1)
}

/// Parse raw file bytes in the given encoding.
pub fn parse_bytes(bytes: &[u8], encoding: Encoding) -> Result<ObservationTable, DataLoadError> {
    let text = encoding.decode(bytes)?;
    parse_str(&text)
}

/// Parse already-decoded CSV text.
pub fn parse_str(csv_data: &str) -> Result<ObservationTable, DataLoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(csv_data.as_bytes());

    let columns = ColumnMap::from_headers(rdr.headers()?)?;

    let mut rows = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        rows.push(columns.observation(&record, index + 1)?);
    }

    log::info!("[HD] loader: Loaded {} observations", rows.len());
    Ok(ObservationTable::new(rows))
}

/// Positions of the required columns within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    station_name: usize,
    region: usize,
    sub_region: usize,
    state: usize,
    year: usize,
    total_days: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DataLoadError::MissingColumn(name))
        };
        Ok(Self {
            station_name: position(STATION_NAME)?,
            region: position(REGION)?,
            sub_region: position(SUB_REGION)?,
            state: position(STATE)?,
            year: position(YEAR)?,
            total_days: position(TOTAL_DAYS)?,
        })
    }

    /// Build the observation for data row `row` (1-based, header excluded).
    fn observation(&self, record: &StringRecord, row: usize) -> Result<Observation, DataLoadError> {
        let text = |idx: usize| record.get(idx).unwrap_or("");

        Ok(Observation {
            station_name: text(self.station_name).to_string(),
            region: text(self.region).to_string(),
            sub_region: text(self.sub_region).to_string(),
            state: text(self.state).to_string(),
            year: parse_number(text(self.year), row, YEAR)?,
            total_days: parse_number(text(self.total_days), row, TOTAL_DAYS)?,
        })
    }
}

fn parse_number<T: FromStr>(raw: &str, row: usize, column: &'static str) -> Result<T, DataLoadError> {
    raw.trim().parse().map_err(|_| DataLoadError::InvalidValue {
        row,
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Station Name,Region,Sub Region,State,Year,Total Days
Boston Logan,Northeast,New England,MA,2022,41
Denver Intl,West,Mountain,CO,2022,88
Miami Intl,South,South Atlantic,FL,2021,12
";

    #[test]
    fn parse_preserves_row_order_and_values() {
        let table = parse_str(SAMPLE_CSV).unwrap();
        assert_eq!(table.len(), 3);

        let names: Vec<&str> = table.iter().map(|o| o.station_name.as_str()).collect();
        assert_eq!(names, vec!["Boston Logan", "Denver Intl", "Miami Intl"]);

        let denver = &table.rows()[1];
        assert_eq!(denver.region, "West");
        assert_eq!(denver.sub_region, "Mountain");
        assert_eq!(denver.state, "CO");
        assert_eq!(denver.year, 2022);
        assert_eq!(denver.total_days, 88);
    }

    #[test]
    fn columns_are_matched_by_name_not_position() {
        let csv = "\
Total Days,State,Elevation,Year,Sub Region,Region,Station Name
41,MA,19,2022,New England,Northeast,Boston Logan
";
        let table = parse_str(csv).unwrap();
        let boston = &table.rows()[0];
        assert_eq!(boston.station_name, "Boston Logan");
        assert_eq!(boston.region, "Northeast");
        assert_eq!(boston.total_days, 41);
    }

    #[test]
    fn header_whitespace_is_ignored() {
        let csv = "Station Name, Region, Sub Region, State, Year, Total Days\nA,B,C,D,2020,5\n";
        let table = parse_str(csv).unwrap();
        assert_eq!(table.rows()[0].region, "B");
        assert_eq!(table.rows()[0].total_days, 5);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "Station Name,Region,State,Year,Total Days\nA,B,D,2020,5\n";
        match parse_str(csv) {
            Err(DataLoadError::MissingColumn(name)) => assert_eq!(name, "Sub Region"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_is_missing_columns() {
        assert!(matches!(
            parse_str(""),
            Err(DataLoadError::MissingColumn("Station Name"))
        ));
    }

    #[test]
    fn header_only_yields_empty_table() {
        let table = parse_str("Station Name,Region,Sub Region,State,Year,Total Days\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn non_numeric_total_days_is_invalid_value() {
        let csv = "\
Station Name,Region,Sub Region,State,Year,Total Days
A,B,C,D,2020,5
E,F,G,H,2020,lots
";
        match parse_str(csv) {
            Err(DataLoadError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Total Days");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn negative_count_is_rejected() {
        let csv = "Station Name,Region,Sub Region,State,Year,Total Days\nA,B,C,D,2020,-3\n";
        assert!(matches!(
            parse_str(csv),
            Err(DataLoadError::InvalidValue { column: "Total Days", .. })
        ));
    }

    #[test]
    fn ragged_row_is_csv_error() {
        let csv = "Station Name,Region,Sub Region,State,Year,Total Days\nA,B,C\n";
        assert!(matches!(parse_str(csv), Err(DataLoadError::Csv(_))));
    }

    #[test]
    fn latin1_bytes_decode_to_unicode() {
        // "Bogotá" with 0xE1 for 'á' as ISO-8859-1 encodes it
        let mut bytes = b"Station Name,Region,Sub Region,State,Year,Total Days\nBogot".to_vec();
        bytes.push(0xE1);
        bytes.extend_from_slice(b",South,West South Central,TX,2022,30\n");

        let table = parse_bytes(&bytes, Encoding::Latin1).unwrap();
        assert_eq!(table.rows()[0].station_name, "Bogot\u{e1}");
    }

    #[test]
    fn latin1_bytes_are_not_valid_utf8() {
        let bytes = [b'A', 0xE1, b'\n'];
        assert!(matches!(
            Encoding::Utf8.decode(&bytes),
            Err(DataLoadError::Utf8(_))
        ));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(SAMPLE_CSV.as_bytes());
        let table = parse_bytes(&bytes, Encoding::Utf8).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn ascii_latin1_borrows() {
        let decoded = Encoding::Latin1.decode(b"plain ascii").unwrap();
        assert!(matches!(decoded, Cow::Borrowed("plain ascii")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_path("definitely/not/here/cities.csv");
        match result {
            Err(DataLoadError::Io { path, .. }) => {
                assert!(path.ends_with("cities.csv"));
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
