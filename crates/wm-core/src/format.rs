//! Number formatting and edit configuration.
//!
//! Values written into map text by a mutator are formatted with a fixed
//! precision (`0.70`, not `0.7`). Pixel values used for live previews are
//! never rounded.

use serde::Deserialize;

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration shared by the mutators, orchestrators, and gesture tools.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditConfig {
    /// Decimal places for every number written into map text. Default: **2**.
    pub precision: usize,

    /// Minimum preview width and height, in pixels, for a drawn or resized
    /// region to count as valid. Default: **10.0**.
    pub min_region_size: f64,

    /// Clamp pointer-derived map coordinates to `[0, 1]`. Default: **true**.
    pub clamp: bool,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            min_region_size: 10.0,
            clamp: true,
        }
    }
}

// ─── Formatting ───────────────────────────────────────────────────────────

/// Format `value` with exactly `precision` decimals. Negative zero prints as zero.
pub fn format_decimal(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    match formatted.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|c| c == '0' || c == '.') => {
            magnitude.to_string()
        }
        _ => formatted,
    }
}

/// Whether two values print identically at `precision`.
pub fn same_at_precision(a: f64, b: f64, precision: usize) -> bool {
    format_decimal(a, precision) == format_decimal(b, precision)
}
