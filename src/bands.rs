//! Band geometry generation.
//!
//! Splits a validated distance or time budget into contiguous bands and
//! synthesizes one irregular polygon per band. The polygons are perturbed
//! circles, not reachability isochrones: radius conversion uses a fixed
//! rate and the meters-to-degrees step is a flat-earth approximation that
//! degrades near the poles and over large radii. Good enough for the stated
//! visual-approximation goal, not for real geodesy.

use crate::{
    core::{
        constants::{
            BAND_PALETTE, DEFAULT_IRREGULARITY, DEFAULT_VERTICES, METERS_PER_DEGREE_LAT,
            METERS_PER_KM, METERS_PER_MINUTE,
        },
        geo::LatLng,
    },
    BandError,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// How the user's total budget is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelMode {
    /// Budget entered in kilometers.
    Distance,
    /// Budget entered in minutes.
    Time,
}

impl TravelMode {
    /// Unit label shown in legend rows.
    pub fn unit(&self) -> &'static str {
        match self {
            TravelMode::Distance => "km",
            TravelMode::Time => "min",
        }
    }

    /// Name of the form field carrying the budget, used in validation
    /// messages.
    pub fn field_name(&self) -> &'static str {
        match self {
            TravelMode::Distance => "distance",
            TravelMode::Time => "time",
        }
    }
}

impl Default for TravelMode {
    fn default() -> Self {
        TravelMode::Time
    }
}

/// A validated generation request. Construction through [`BandRequest::new`]
/// is the single validation gate: once a value of this type exists, the
/// budget is a positive finite number and the band count is within the
/// palette's reach, so geometry code never re-checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRequest {
    total_value: f64,
    num_bands: usize,
    mode: TravelMode,
}

impl BandRequest {
    /// Validates raw inputs into a request. Rejects before any geometry
    /// work; nothing partial is ever produced from bad input.
    pub fn new(total_value: f64, num_bands: i64, mode: TravelMode) -> Result<Self, BandError> {
        if !total_value.is_finite() || total_value <= 0.0 {
            return Err(BandError::InvalidTotal {
                field: mode.field_name(),
            });
        }
        if num_bands < 1 || num_bands as usize > BAND_PALETTE.len() {
            return Err(BandError::InvalidBandCount);
        }
        Ok(Self {
            total_value,
            num_bands: num_bands as usize,
            mode,
        })
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn num_bands(&self) -> usize {
        self.num_bands
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Width of a single band in budget units.
    pub fn increment(&self) -> f64 {
        self.total_value / self.num_bands as f64
    }
}

/// One generated band: its value range, radius, color, and polygon ring.
/// The ring is closed implicitly (last point connects back to the first).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    /// 0 = innermost.
    pub index: usize,
    pub range_start: f64,
    pub range_end: f64,
    pub radius_meters: f64,
    pub color: &'static str,
    pub polygon: Vec<LatLng>,
}

/// Converts a budget value to a base radius in meters. In time mode this
/// assumes the fixed ~12 km/h rate; an explicit approximation, not a
/// routing computation.
pub fn radius_meters(value: f64, mode: TravelMode) -> f64 {
    match mode {
        TravelMode::Distance => value * METERS_PER_KM,
        TravelMode::Time => value * METERS_PER_MINUTE,
    }
}

/// Synthesizes an irregular ring around `center`: `vertices` points at equal
/// angular steps, each pushed out to `radius_meters` scaled by an
/// independent uniform factor in [1 - irregularity, 1 + irregularity].
pub fn irregular_polygon(
    center: LatLng,
    radius_meters: f64,
    vertices: usize,
    irregularity: f64,
    rng: &mut impl Rng,
) -> Vec<LatLng> {
    let angle_step = 2.0 * PI / vertices as f64;
    let meters_per_degree_lng = METERS_PER_DEGREE_LAT * center.lat.to_radians().cos();

    (0..vertices)
        .map(|i| {
            let angle = i as f64 * angle_step;
            let factor = 1.0 + (rng.gen::<f64>() - 0.5) * 2.0 * irregularity;
            let perturbed = radius_meters * factor;

            let lat_offset = perturbed * angle.sin() / METERS_PER_DEGREE_LAT;
            let lng_offset = perturbed * angle.cos() / meters_per_degree_lng;

            LatLng::new(center.lat + lat_offset, center.lng + lng_offset)
        })
        .collect()
}

/// Generates the full band list for a request, innermost first. Band `i`
/// covers `(i * increment, (i + 1) * increment]` and takes its color from
/// the palette by index, so ranges are contiguous with no gaps or overlaps.
///
/// The rng is injected so callers that need reproducible rings (tests,
/// snapshots) can pass a seeded source.
pub fn generate_bands(center: LatLng, request: &BandRequest, rng: &mut impl Rng) -> Vec<Band> {
    let increment = request.increment();

    (0..request.num_bands())
        .map(|index| {
            let range_start = index as f64 * increment;
            let range_end = (index + 1) as f64 * increment;
            let radius = radius_meters(range_end, request.mode());

            Band {
                index,
                range_start,
                range_end,
                radius_meters: radius,
                color: BAND_PALETTE[index % BAND_PALETTE.len()],
                polygon: irregular_polygon(
                    center,
                    radius,
                    DEFAULT_VERTICES,
                    DEFAULT_IRREGULARITY,
                    rng,
                ),
            }
        })
        .collect()
}
