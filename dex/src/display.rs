//! Formatting helpers for rendered comparison rows

use crate::compare::StatAttribute;

/// Format a raw attribute value for display.
///
/// Height and weight arrive in game-engine units (tenths of a meter and
/// tenths of a kilogram).
pub fn format_stat_value(attr: StatAttribute, value: u32) -> String {
    match attr {
        StatAttribute::Height => format!("{:.1}m", value as f64 / 10.0),
        StatAttribute::Weight => format!("{:.1}kg", value as f64 / 10.0),
        StatAttribute::BaseExperience => value.to_string(),
    }
}

/// Label for an effectiveness multiplier badge.
pub fn effectiveness_label(multiplier: f32) -> &'static str {
    if multiplier == 0.0 {
        "No effect"
    } else if multiplier == 0.25 {
        "Very weak"
    } else if multiplier == 0.5 {
        "Not very effective"
    } else if multiplier == 1.0 {
        "Normal"
    } else if multiplier == 2.0 {
        "Super effective"
    } else if multiplier == 4.0 {
        "Extremely effective"
    } else {
        "Unknown"
    }
}
