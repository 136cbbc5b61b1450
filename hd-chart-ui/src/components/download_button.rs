//! Button that downloads the raw table as CSV.

use crate::download;
use crate::state::AppState;
use dioxus::prelude::*;

/// Serializes the loaded table and hands it to the browser as a file.
///
/// Runs entirely client side; nothing is recomputed.
#[component]
pub fn DownloadButton(
    #[props(default = "Click to Download data to a .csv file".to_string())] label: String,
) -> Element {
    let mut state = use_context::<AppState>();
    let disabled = state.dashboard.read().is_none();

    let on_click = move |_| {
        let Some(dashboard) = state.dashboard.read().clone() else {
            return;
        };
        match download::download_table_csv(&dashboard.table) {
            Ok(()) => state.download_error.set(None),
            Err(e) => {
                log::error!("[HD] download: {}", e);
                state.download_error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            style: "margin: 40px 5px 10px 250px;",
            button {
                style: "padding: 6px 12px; background: #5CB85C; color: white; border: 1px solid #4CAE4C; border-radius: 4px; cursor: pointer; font-size: 13px;",
                disabled,
                onclick: on_click,
                "{label}"
            }
            if let Some(err) = (state.download_error)() {
                span {
                    style: "margin-left: 12px; color: #C62828; font-size: 12px;",
                    "{err}"
                }
            }
        }
    }
}
