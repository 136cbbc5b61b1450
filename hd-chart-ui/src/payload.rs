//! JSON payloads for the D3.js renderers.
//!
//! Everything here is plain data, built once per render from the
//! immutable [`Dashboard`](hd_data::Dashboard) values.

use hd_data::observation::COLUMNS;
use hd_data::palette;
use hd_data::{LevelSummary, ObservationTable};
use serde::Serialize;

/// One box of a box plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub key: String,
    pub count: usize,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
    pub color: &'static str,
}

/// One scatter point drawn outside the whiskers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierPoint {
    pub key: String,
    pub station: String,
    pub state: String,
    pub year: i32,
    pub total_days: u32,
}

/// Input of `renderBoxPlot`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotData {
    pub groups: Vec<BoxGroup>,
    pub outliers: Vec<OutlierPoint>,
}

impl BoxPlotData {
    /// Boxes in key order, colored by key position, plus the flagged rows.
    pub fn from_summary(summary: &LevelSummary, table: &ObservationTable) -> Self {
        let colors = palette::factor_colors(&summary.keys);
        let groups = summary
            .stats
            .iter()
            .zip(colors)
            .map(|(s, (_, color))| BoxGroup {
                key: s.key.clone(),
                count: s.count,
                q1: s.q1,
                q2: s.q2,
                q3: s.q3,
                lower: s.lower,
                upper: s.upper,
                color,
            })
            .collect();

        let outliers = summary
            .outliers(table)
            .into_iter()
            .map(|o| OutlierPoint {
                key: summary.level.key(o).to_string(),
                station: o.station_name.clone(),
                state: o.state.clone(),
                year: o.year,
                total_days: o.total_days,
            })
            .collect();

        Self { groups, outliers }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Styling of one box plot. Serialized in camelCase for the JS side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPlotConfig {
    pub title: String,
    pub y_axis_label: String,
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub bar_width: f64,
    pub whisker_head_size: u32,
    pub outlier_radius: f64,
    pub outlier_color: &'static str,
    pub outlier_opacity: f64,
    pub label_font_size: &'static str,
    pub axis_label_font_size: &'static str,
    pub stretch_width: bool,
}

impl BoxPlotConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            y_axis_label: "Headache Days".to_string(),
            width,
            height,
            background: "#eaefef",
            bar_width: 0.7,
            whisker_head_size: 20,
            outlier_radius: 3.0,
            outlier_color: "black",
            outlier_opacity: 0.3,
            label_font_size: "10px",
            axis_label_font_size: "10px",
            stretch_width: false,
        }
    }

    pub fn label_font_size(mut self, size: &'static str) -> Self {
        self.label_font_size = size;
        self
    }

    pub fn stretch_width(mut self) -> Self {
        self.stretch_width = true;
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Raw rows for `renderDataTable`, keyed by the original column names.
pub fn table_rows_json(table: &ObservationTable) -> String {
    serde_json::to_string(table.rows()).unwrap_or_else(|_| "[]".to_string())
}

/// Column layout for `renderDataTable`: every column sortable, in file order.
pub fn table_config_json(height: u32) -> String {
    let columns: Vec<serde_json::Value> = COLUMNS
        .iter()
        .map(|&name| {
            let numeric = name == hd_data::observation::YEAR
                || name == hd_data::observation::TOTAL_DAYS;
            serde_json::json!({
                "key": name,
                "label": name,
                "sortable": true,
                "type": if numeric { "number" } else { "string" },
            })
        })
        .collect();

    serde_json::json!({
        "columns": columns,
        "height": height,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_data::{loader, stats, GroupingLevel};

    const CSV: &str = "\
Station Name,Region,Sub Region,State,Year,Total Days
W0,West,Pacific,CA,2022,1
W1,West,Pacific,CA,2022,2
W2,West,Pacific,CA,2022,3
W3,West,Pacific,CA,2022,4
W4,West,Pacific,CA,2022,100
S0,South,South Atlantic,FL,2022,20
";

    #[test]
    fn box_plot_data_carries_stats_colors_and_outliers() {
        let table = loader::parse_str(CSV).unwrap();
        let summary = stats::summarize(&table, GroupingLevel::Region).unwrap();
        let data = BoxPlotData::from_summary(&summary, &table);

        assert_eq!(data.groups.len(), 2);
        assert_eq!(data.groups[0].key, "West");
        assert_eq!(data.groups[0].color, "#882E72");
        assert_eq!(data.groups[1].key, "South");
        assert_eq!(data.groups[1].color, "#1965B0");
        assert_eq!(data.groups[0].q2, 3.0);

        assert_eq!(data.outliers.len(), 1);
        assert_eq!(data.outliers[0].station, "W4");
        assert_eq!(data.outliers[0].key, "West");
        assert_eq!(data.outliers[0].total_days, 100);
    }

    #[test]
    fn box_plot_json_shape() {
        let table = loader::parse_str(CSV).unwrap();
        let summary = stats::summarize(&table, GroupingLevel::SubRegion).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&BoxPlotData::from_summary(&summary, &table).to_json()).unwrap();

        assert_eq!(value["groups"][0]["key"], "Pacific");
        assert_eq!(value["groups"][1]["lower"], 20.0);
        assert_eq!(value["outliers"][0]["total_days"], 100);
    }

    #[test]
    fn config_serializes_camel_case() {
        let config = BoxPlotConfig::new("Headache Days distribution by US Region", 400, 600);
        let value: serde_json::Value = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(value["yAxisLabel"], "Headache Days");
        assert_eq!(value["whiskerHeadSize"], 20);
        assert_eq!(value["background"], "#eaefef");
        assert_eq!(value["stretchWidth"], false);
    }

    #[test]
    fn table_rows_use_original_column_names() {
        let table = loader::parse_str(CSV).unwrap();
        let value: serde_json::Value = serde_json::from_str(&table_rows_json(&table)).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 6);
        assert_eq!(value[0]["Station Name"], "W0");
        assert_eq!(value[5]["Total Days"], 20);
    }

    #[test]
    fn table_config_lists_all_columns() {
        let value: serde_json::Value = serde_json::from_str(&table_config_json(600)).unwrap();
        let keys: Vec<&str> = value["columns"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, COLUMNS.to_vec());
        assert_eq!(value["columns"][5]["type"], "number");
        assert_eq!(value["columns"][0]["type"], "string");
    }
}
