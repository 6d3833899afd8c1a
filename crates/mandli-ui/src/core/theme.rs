//! Brand palette tokens used by charts and badges.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the shade (e.g., "600").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Series colors for report charts, cycled by index.
pub const CHART_SERIES: [ColorToken; 3] = [
    ColorToken {
        name: "600",
        hex: "#7c3aed",
    },
    ColorToken {
        name: "500",
        hex: "#a855f7",
    },
    ColorToken {
        name: "400",
        hex: "#c084fc",
    },
];

/// Color for the `index`-th chart series.
#[must_use]
pub const fn series_color(index: usize) -> &'static str {
    CHART_SERIES[index % CHART_SERIES.len()].hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_cycle() {
        assert_eq!(series_color(0), "#7c3aed");
        assert_eq!(series_color(3), series_color(0));
        assert_eq!(series_color(4), "#a855f7");
    }
}
