//! Fixed catalog of named locations available for text-based lookup.
//!
//! This is the only "geocoding" the demo supports: a small read-only table
//! built once at startup. Arbitrary place names are out of scope; anything
//! not listed here degrades to the map-center fallback in the resolver.

use crate::core::geo::LatLng;
use once_cell::sync::Lazy;

/// A fixed catalog entry: lookup key, coordinates, and the zoom the view
/// should jump to when the entry is selected by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownLocation {
    /// Lookup key, stored lower-case; matching is case-insensitive.
    pub name: &'static str,
    pub center: LatLng,
    pub default_zoom: f64,
}

/// The read-only location table, constructed once for the process lifetime.
pub static KNOWN_LOCATIONS: Lazy<Vec<KnownLocation>> = Lazy::new(|| {
    vec![
        KnownLocation {
            name: "eiffel tower",
            center: LatLng::new(48.8584, 2.2945),
            default_zoom: 14.0,
        },
        KnownLocation {
            name: "statue of liberty",
            center: LatLng::new(40.6892, -74.0445),
            default_zoom: 15.0,
        },
        KnownLocation {
            name: "brandenburg gate",
            center: LatLng::new(52.5163, 13.3777),
            default_zoom: 15.0,
        },
        KnownLocation {
            name: "colosseum",
            center: LatLng::new(41.8902, 12.4922),
            default_zoom: 15.0,
        },
        KnownLocation {
            name: "sydney opera house",
            center: LatLng::new(-33.8568, 151.2153),
            default_zoom: 16.0,
        },
    ]
});

/// Finds a catalog entry by name. The query is trimmed and case-folded
/// before matching.
pub fn lookup<'a>(catalog: &'a [KnownLocation], name: &str) -> Option<&'a KnownLocation> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    catalog.iter().find(|location| location.name == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(KNOWN_LOCATIONS.len(), 5);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let entry = lookup(&KNOWN_LOCATIONS, "Eiffel Tower").unwrap();
        assert_eq!(entry.center, LatLng::new(48.8584, 2.2945));
        assert_eq!(entry.default_zoom, 14.0);

        assert!(lookup(&KNOWN_LOCATIONS, "EIFFEL TOWER").is_some());
        assert!(lookup(&KNOWN_LOCATIONS, "  colosseum  ").is_some());
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup(&KNOWN_LOCATIONS, "Atlantis").is_none());
        assert!(lookup(&KNOWN_LOCATIONS, "").is_none());
        assert!(lookup(&KNOWN_LOCATIONS, "   ").is_none());
    }

    #[test]
    fn test_southern_hemisphere_entry() {
        let opera = lookup(&KNOWN_LOCATIONS, "sydney opera house").unwrap();
        assert!(opera.center.lat < 0.0);
        assert!(opera.center.is_valid());
    }
}
