//! Shared Dioxus components and D3.js bridge for the headache days dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js box plot and data table via `js_sys::eval()`
//! - `payload`: JSON payloads handed to those renderers
//! - `download`: typed browser download of the CSV export
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (containers, headers, buttons, etc.)

pub mod components;
pub mod download;
pub mod js_bridge;
pub mod payload;
pub mod state;
