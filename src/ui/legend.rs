use crate::bands::{Band, TravelMode};

/// One legend entry: a color swatch and its range label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub color: &'static str,
    pub label: String,
}

/// Formats a range endpoint: integers with no decimals, everything else
/// with exactly one decimal place.
pub fn format_range_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Builds legend rows from a band list, smallest range first. Band order is
/// already innermost-first, so this is a straight mapping.
pub fn build_legend(bands: &[Band], mode: TravelMode) -> Vec<LegendRow> {
    let unit = mode.unit();
    bands
        .iter()
        .map(|band| LegendRow {
            color: band.color,
            label: format!(
                "{} - {} {}",
                format_range_value(band.range_start),
                format_range_value(band.range_end),
                unit
            ),
        })
        .collect()
}
