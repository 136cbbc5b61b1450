//! Categorical colors for group keys.

/// Paul Tol's seven-color discrete rainbow.
pub const TOL_RAINBOW_7: [&str; 7] = [
    "#882E72", "#1965B0", "#7BAFDE", "#4EB265", "#CAE0AB", "#F7F056", "#DC050C",
];

/// Color for keys past the end of the palette.
pub const FALLBACK_COLOR: &str = "gray";

/// Color of the `index`-th distinct key.
pub fn color_at(index: usize) -> &'static str {
    TOL_RAINBOW_7.get(index).copied().unwrap_or(FALLBACK_COLOR)
}

/// Colors for an ordered list of distinct keys, position by position.
pub fn factor_colors<S: AsRef<str>>(keys: &[S]) -> Vec<(&str, &'static str)> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| (key.as_ref(), color_at(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_take_palette_in_order() {
        let keys = ["West", "South", "Northeast"];
        let colors = factor_colors(&keys);
        assert_eq!(
            colors,
            vec![("West", "#882E72"), ("South", "#1965B0"), ("Northeast", "#7BAFDE")]
        );
    }

    #[test]
    fn keys_past_palette_fall_back() {
        let keys: Vec<String> = (0..9).map(|i| format!("k{}", i)).collect();
        let colors = factor_colors(&keys);
        assert_eq!(colors[6].1, "#DC050C");
        assert_eq!(colors[7].1, FALLBACK_COLOR);
        assert_eq!(colors[8].1, FALLBACK_COLOR);
    }

    #[test]
    fn assignment_is_stable() {
        let keys = ["a", "b", "c"];
        assert_eq!(factor_colors(&keys), factor_colors(&keys));
    }
}
