//! Reusable Dioxus RSX components for the headache days dashboard.

mod chart_container;
mod chart_header;
mod download_button;
mod error_display;
mod loading_spinner;
mod page_intro;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use download_button::DownloadButton;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use page_intro::PageIntro;
