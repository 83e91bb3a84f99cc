//! Engine-wide constants for band geometry, styling, and view fitting.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

use crate::core::geo::LatLng;

/// Band color palette ordered near to far (green through red into purples).
/// The palette length is the hard ceiling on the number of bands.
pub const BAND_PALETTE: [&str; 10] = [
    "#66BB6A", "#FFEE58", "#FFA726", "#EF5350", "#D81B60", "#B71C1C",
    "#880E4F", "#4A148C", "#311B92", "#1A237E",
];

/// Flat-earth approximation: meters per degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_111.0;

/// Distance mode: the budget is entered in kilometers.
pub const METERS_PER_KM: f64 = 1000.0;

/// Time mode: assumed travel rate of 200 m per minute (~12 km/h). A rough
/// simulation rate, not a routing result.
pub const METERS_PER_MINUTE: f64 = 200.0;

/// Vertex count of a synthesized band polygon.
pub const DEFAULT_VERTICES: usize = 16;

/// Per-vertex radius perturbation factor range: [1 - x, 1 + x].
pub const DEFAULT_IRREGULARITY: f64 = 0.35;

/// Fill opacity of a drawn band polygon.
pub const FILL_OPACITY: f32 = 0.35;

/// Stroke weight of a drawn band polygon.
pub const STROKE_WEIGHT: f32 = 1.5;

/// Pixel padding passed to fit-bounds after drawing.
pub const FIT_PADDING_PX: f64 = 50.0;

/// Below this zoom the current view is considered too wide to keep when
/// fitting around a clicked point or the map center.
pub const WIDE_VIEW_ZOOM: f64 = 10.0;

/// Fallback zoom hint used instead of an unreasonably wide current view.
pub const CLOSE_UP_ZOOM: f64 = 13.0;

/// Initial map view (Paris).
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 48.8566,
    lng: 2.3522,
};

/// Initial map zoom.
pub const DEFAULT_ZOOM: f64 = 6.0;

/// OpenStreetMap tile URL template for the base layer.
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution string for the base tile layer.
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Cosmetic pause before geometry work so a loading indicator can render.
pub const GENERATE_PAUSE_MS: u64 = 100;
