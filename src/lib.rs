//! # Isoband
//!
//! A small, Leaflet-flavored engine that draws approximate "isochrone-like"
//! concentric bands around a chosen map point.
//!
//! The crate is a thin interactive controller over a map-widget capability:
//! it resolves a center (named location, map click, or map view center),
//! synthesizes one irregular polygon per band from a distance or time budget,
//! and coordinates drawing, legend building, and view fitting. There is no
//! routing, geocoding, or terrain data behind it — band shapes are a visual
//! approximation, perturbed randomly around ideal circles.

pub mod app;
pub mod bands;
pub mod catalog;
pub mod core;
pub mod prelude;
pub mod resolve;
pub mod surface;
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::geo::{LatLng, LatLngBounds};

pub use app::{AppEvent, IsobandApp};

pub use bands::{generate_bands, irregular_polygon, Band, BandRequest, TravelMode};

pub use catalog::{KnownLocation, KNOWN_LOCATIONS};

pub use resolve::{resolve_center, CenterSource, ResolvedCenter};

pub use surface::{FitBoundsOptions, HeadlessSurface, LayerId, MapSurface, PolygonStyle};

pub use ui::{controls::ControlPanel, legend::LegendRow};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum BandError {
    /// The total budget was missing, non-numeric, non-finite, or not
    /// positive. `field` names the active input ("distance" or "time") so
    /// the message points at the control the user actually filled in.
    #[error("Please enter a valid positive total {field}.")]
    InvalidTotal { field: &'static str },

    /// The band count was missing, fractional, or outside [1, 10]. The upper
    /// bound exists solely because the color palette has ten entries.
    #[error("Number of bands must be between 1 and 10 (due to color palette).")]
    InvalidBandCount,
}

/// Error type alias for convenience
pub type Error = BandError;
