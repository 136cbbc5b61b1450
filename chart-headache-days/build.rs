//! Build script for chart-headache-days.
//!
//! Copies the station CSV to OUT_DIR so it can be embedded via
//! `include_bytes!` at compile time. The file is copied byte for byte;
//! ISO-8859-1 decoding happens in the loader at startup.

use std::env;
use std::fs;
use std::path::Path;

/// Header-only stand-in used when the fixture is missing.
const PLACEHOLDER_CSV: &str = "Station Name,Region,Sub Region,State,Year,Total Days\n";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let files = vec![("../fixtures/cities.csv", "cities.csv")];

    for (src_path, dest_name) in &files {
        let src = Path::new(src_path);
        let dest = Path::new(&out_dir).join(dest_name);
        if src.exists() {
            fs::copy(src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
            });
        } else {
            fs::write(&dest, PLACEHOLDER_CSV).unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using header-only placeholder",
                src_path
            );
        }
        println!("cargo:rerun-if-changed={}", src_path);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
