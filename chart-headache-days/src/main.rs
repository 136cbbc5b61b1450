//! Headache Days Dashboard
//!
//! Shows how many "headache days" US weather stations record per year,
//! grouped by Census region and sub region. Each level gets a box plot
//! (quartile boxes, whiskers at the 1.5×IQR fences, outlier points), and
//! the raw rows are listed in a sortable table with a CSV download button.
//!
//! Data flow:
//! 1. `build.rs` copies `cities.csv` into `OUT_DIR`.
//! 2. `include_bytes!` embeds the ISO-8859-1 bytes into the WASM binary.
//! 3. On mount, the loader decodes and parses the table, and both grouping
//!    levels are summarized once into an immutable `Dashboard`.
//! 4. Once the dashboard is set, the box plots and table are handed to
//!    `renderBoxPlot()` / `renderDataTable()` for D3.js rendering.

use dioxus::prelude::*;
use hd_chart_ui::components::{
    ChartContainer, ChartHeader, DownloadButton, ErrorDisplay, LoadingSpinner, PageIntro,
};
use hd_chart_ui::js_bridge;
use hd_chart_ui::payload::{self, BoxPlotConfig, BoxPlotData};
use hd_chart_ui::state::AppState;
use hd_data::loader::{self, Encoding};
use hd_data::{Dashboard, GroupingLevel};
use std::rc::Rc;

/// Station table as published (ISO-8859-1).
const CITIES_CSV: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/cities.csv"));
/// Introductory text shown above the charts.
const DESCRIPTION_HTML: &str = include_str!("../assets/description.html");

const BACK_LINK_HREF: &str = "https://dataviz.dustincremascoli.com";
const BACK_LINK_TEXT: &str = "Go back to Data Visualizations Main Page";

/// DOM ids D3.js renders into.
const REGION_CHART_ID: &str = "region-box-plot";
const SUB_REGION_CHART_ID: &str = "sub-region-box-plot";
const TABLE_ID: &str = "headache-days-table";

const CHART_HEIGHT: u32 = 600;
const REGION_CHART_WIDTH: u32 = 400;
const SUB_REGION_CHART_WIDTH: u32 = 800;
const TABLE_HEIGHT: u32 = 600;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("headache-days-root"))
        .launch(App);
}

/// Container id of the box plot for `level`.
fn chart_id(level: GroupingLevel) -> &'static str {
    match level {
        GroupingLevel::Region => REGION_CHART_ID,
        GroupingLevel::SubRegion => SUB_REGION_CHART_ID,
    }
}

/// Box plot styling per level. The sub region chart has more groups, so
/// it stretches and uses smaller tick labels.
fn chart_config(level: GroupingLevel) -> BoxPlotConfig {
    match level {
        GroupingLevel::Region => BoxPlotConfig::new(
            "Headache Days distribution by US Region",
            REGION_CHART_WIDTH,
            CHART_HEIGHT,
        ),
        GroupingLevel::SubRegion => BoxPlotConfig::new(
            "Headache Days distribution by US Sub Region",
            SUB_REGION_CHART_WIDTH,
            CHART_HEIGHT,
        )
        .label_font_size("8px")
        .stretch_width(),
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load and summarize once on mount ───
    use_effect(move || {
        match loader::parse_bytes(CITIES_CSV, Encoding::Latin1) {
            Ok(table) => {
                web_sys::console::log_1(
                    &format!("[HD Debug] chart-headache-days: Loaded {} stations", table.len()).into(),
                );
                state.dashboard.set(Some(Rc::new(Dashboard::build(table))));
            }
            Err(e) => {
                log::error!("Failed to load station data: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load station data: {}", e)));
            }
        }
        state.loading.set(false);

        // Initialize D3.js chart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Render charts and table once the dashboard exists ───
    use_effect(move || {
        let Some(dashboard) = (state.dashboard)() else {
            return;
        };

        for level in GroupingLevel::ALL {
            match dashboard.level(level) {
                Ok(summary) => {
                    let data = BoxPlotData::from_summary(summary, &dashboard.table);
                    js_bridge::render_box_plot(
                        chart_id(level),
                        &data.to_json(),
                        &chart_config(level).to_json(),
                    );
                }
                Err(_) => js_bridge::destroy_chart(chart_id(level)),
            }
        }

        js_bridge::render_data_table(
            TABLE_ID,
            &payload::table_rows_json(&dashboard.table),
            &payload::table_config_json(TABLE_HEIGHT),
        );
    });

    // ─── Render ───
    rsx! {
        div {
            style: "font-family: system-ui, -apple-system, sans-serif; width: 100%;",

            PageIntro {
                description_html: DESCRIPTION_HTML.to_string(),
                back_link_href: BACK_LINK_HREF.to_string(),
                back_link_text: BACK_LINK_TEXT.to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; align-items: flex-start; width: 100%;",
                    LevelChart { level: GroupingLevel::Region, width: REGION_CHART_WIDTH }
                    LevelChart { level: GroupingLevel::SubRegion }
                }

                DownloadButton {}

                div {
                    style: "margin: 10px 250px 25px 250px;",
                    ChartHeader {
                        title: "Station data".to_string(),
                        subtitle: "Click a column header to sort".to_string(),
                    }
                    ChartContainer {
                        id: TABLE_ID.to_string(),
                        min_height: 200,
                    }
                }
            }
        }
    }
}

/// One box plot, or an error box if that level could not be summarized.
#[component]
fn LevelChart(level: GroupingLevel, width: Option<u32>) -> Element {
    let state = use_context::<AppState>();
    let failure = state
        .dashboard
        .read()
        .as_ref()
        .and_then(|d| d.level(level).as_ref().err().map(|e| e.to_string()));

    match failure {
        Some(message) => rsx! {
            ErrorDisplay {
                title: format!("{} chart unavailable", level),
                message,
            }
        },
        None => match width {
            Some(px) => rsx! {
                ChartContainer {
                    id: chart_id(level).to_string(),
                    min_height: CHART_HEIGHT,
                    width: px,
                }
            },
            None => rsx! {
                ChartContainer {
                    id: chart_id(level).to_string(),
                    min_height: CHART_HEIGHT,
                }
            },
        },
    }
}
