//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use hd_data::Dashboard;
use std::rc::Rc;

/// Shared application state for the dashboard page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded table and both level summaries (None until loaded)
    pub dashboard: Signal<Option<Rc<Dashboard>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Fatal load error; when set nothing else is rendered
    pub error_msg: Signal<Option<String>>,
    /// Last download failure, shown next to the button
    pub download_error: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            download_error: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
