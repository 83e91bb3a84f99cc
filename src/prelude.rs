//! Prelude module for common isoband types and traits
//!
//! This module re-exports the most commonly used types, traits, and
//! functions for easy importing with `use isoband::prelude::*;`

pub use crate::core::{
    constants,
    geo::{LatLng, LatLngBounds},
};

pub use crate::app::{AppEvent, IsobandApp};

pub use crate::bands::{
    generate_bands, irregular_polygon, radius_meters, Band, BandRequest, TravelMode,
};

pub use crate::catalog::{lookup, KnownLocation, KNOWN_LOCATIONS};

pub use crate::resolve::{resolve_center, CenterSource, ResolvedCenter};

pub use crate::surface::{
    FitBoundsOptions, HeadlessSurface, LayerId, MapSurface, PolygonStyle, RecordedLayer,
};

pub use crate::ui::{
    controls::{ControlPanel, StatusLevel, StatusMessage},
    legend::{build_legend, format_range_value, LegendRow},
};

pub use crate::{BandError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
