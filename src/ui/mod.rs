//! Form-facing state: control panel, status banner, and legend rows.
//!
//! The concrete form widgets (text fields, radios, buttons) belong to the
//! host UI; these types are the state they read from and write into.

pub mod controls;
pub mod legend;

pub use controls::{ControlPanel, StatusLevel, StatusMessage};
pub use legend::{build_legend, format_range_value, LegendRow};
