//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js renderers are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.
//!
//! Payloads are spliced into the generated JS as JSON literals rather than
//! quoted strings, so station names containing quotes or backslashes need
//! no extra escaping.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BOX_PLOT_JS: &str = include_str!("../assets/js/box-plot-chart.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Global functions promoted to `window` once the scripts are evaluated.
const EXPORTED_FUNCTIONS: [&str; 5] = [
    "renderBoxPlot",
    "renderDataTable",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions via `function` declarations. To make
/// them global (not block-scoped inside the setInterval callback), they are
/// evaluated with an indirect `eval()` once D3 is ready and each exported
/// function is then promoted to `window.*`. Safe to call more than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BOX_PLOT_JS, DATA_TABLE_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope.
    let store_js = format!(
        "if (!window.__hdChartsReady) {{ window.__hdChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = EXPORTED_FUNCTIONS
        .iter()
        .map(|name| {
            format!(
                "if (typeof {name} !== 'undefined') window.{name} = {name};\n",
                name = name
            )
        })
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            if (window.__hdChartsReady || window.__hdChartsInitializing) return;
            window.__hdChartsInitializing = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__hdChartScripts);
                    delete window.__hdChartScripts;
                    {promote}
                    window.__hdChartsReady = true;
                    console.log('HD charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    );
    let _ = js_sys::eval(&init_js);
}

/// Poll until D3, the chart scripts and the container exist, then call
/// `window.<function>(containerId, data, config)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let id_literal = serde_json::to_string(container_id).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__hdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id_literal})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id_literal}, {data_json}, {config_json});
                    }} catch(e) {{ console.error('[HD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a box-and-whisker chart with an outlier scatter overlay.
///
/// `data_json` is a [`crate::payload::BoxPlotData`] serialized to JSON.
pub fn render_box_plot(container_id: &str, data_json: &str, config_json: &str) {
    log::info!("[HD] js_bridge: render_box_plot into #{}", container_id);
    render_when_ready("renderBoxPlot", container_id, data_json, config_json);
}

/// Render a sortable, scrollable data table.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    log::info!("[HD] js_bridge: render_data_table into #{}", container_id);
    render_when_ready("renderDataTable", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let id_literal = serde_json::to_string(container_id).unwrap_or_default();
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        id_literal
    ));
}
