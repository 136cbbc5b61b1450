//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 600)]
    pub min_height: u32,
    /// Fixed width in pixels; `None` stretches to the available width
    pub width: Option<u32>,
}

/// A container div for D3.js charts with loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let width = match props.width {
        Some(px) => format!("width: {}px; flex: 0 0 auto;", px),
        None => "flex: 1 1 0; min-width: 0;".to_string(),
    };
    let style = format!(
        "min-height: {}px; position: relative; margin: 10px 25px; {}",
        props.min_height, width
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
