//! Center resolution policy.
//!
//! Decides which geographic point a generation run is anchored to, in strict
//! priority order: a typed catalog name beats the last map click, which
//! beats the current map view center. An unrecognized typed name is not an
//! error; it falls through to the map center with an informational message
//! so generation is never blocked.

use crate::{
    catalog::{self, KnownLocation},
    core::{
        constants::{CLOSE_UP_ZOOM, WIDE_VIEW_ZOOM},
        geo::LatLng,
    },
};

/// Which input won the priority contest. The controller uses this to decide
/// whether the remembered click is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterSource {
    Named,
    Clicked,
    MapCenter,
}

/// Outcome of center resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCenter {
    pub center: LatLng,
    /// Upper zoom cap for the post-draw view fit.
    pub zoom_hint: f64,
    /// Shown in the center marker popup.
    pub label: String,
    /// Status banner text for this resolution.
    pub message: String,
    pub source: CenterSource,
}

/// Keeps the current zoom as the fit cap unless the view is unreasonably
/// wide, in which case a close-up default is used instead.
fn zoom_hint_from_view(current_zoom: f64) -> f64 {
    if current_zoom < WIDE_VIEW_ZOOM {
        CLOSE_UP_ZOOM
    } else {
        current_zoom
    }
}

/// Resolves the center for a generation run.
///
/// `typed_name` is matched against the catalog after trimming and case
/// folding; the label preserves the name exactly as typed.
pub fn resolve_center(
    typed_name: &str,
    last_clicked: Option<LatLng>,
    current_center: LatLng,
    current_zoom: f64,
    catalog: &[KnownLocation],
) -> ResolvedCenter {
    let raw_name = typed_name.trim();

    if let Some(known) = catalog::lookup(catalog, raw_name) {
        return ResolvedCenter {
            center: known.center,
            zoom_hint: known.default_zoom,
            label: raw_name.to_string(),
            message: format!(
                "Showing isochrones for \"{}\". This is a visual approximation.",
                raw_name
            ),
            source: CenterSource::Named,
        };
    }

    if let Some(clicked) = last_clicked {
        return ResolvedCenter {
            center: clicked,
            zoom_hint: zoom_hint_from_view(current_zoom),
            label: "Clicked Point".to_string(),
            message: "Generating isochrones around the point selected on the map. \
                      This is a visual approximation."
                .to_string(),
            source: CenterSource::Clicked,
        };
    }

    // The typed-but-unrecognized case must be distinguishable from typing
    // nothing at all.
    let message = if raw_name.is_empty() {
        "Generating isochrones around the current map center. \
         Pan/zoom map or click to select a point."
            .to_string()
    } else {
        format!(
            "Location \"{}\" not recognized. Generating around current map center. \
             Pan/zoom map or click to select a point.",
            raw_name
        )
    };

    ResolvedCenter {
        center: current_center,
        zoom_hint: zoom_hint_from_view(current_zoom),
        label: "Current Map Center".to_string(),
        message,
        source: CenterSource::MapCenter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KNOWN_LOCATIONS;

    const MAP_CENTER: LatLng = LatLng {
        lat: 48.8566,
        lng: 2.3522,
    };

    #[test]
    fn test_named_location_wins_over_click() {
        let clicked = Some(LatLng::new(50.0, 3.0));
        let resolved = resolve_center("Eiffel Tower", clicked, MAP_CENTER, 6.0, &KNOWN_LOCATIONS);

        assert_eq!(resolved.source, CenterSource::Named);
        assert_eq!(resolved.center, LatLng::new(48.8584, 2.2945));
        assert_eq!(resolved.zoom_hint, 14.0);
        assert_eq!(resolved.label, "Eiffel Tower");
        assert!(resolved.message.contains("Eiffel Tower"));
        assert!(resolved.message.contains("visual approximation"));
    }

    #[test]
    fn test_clicked_point_used_when_no_name() {
        let clicked = LatLng::new(50.0, 3.0);
        let resolved = resolve_center("", Some(clicked), MAP_CENTER, 12.0, &KNOWN_LOCATIONS);

        assert_eq!(resolved.source, CenterSource::Clicked);
        assert_eq!(resolved.center, clicked);
        assert_eq!(resolved.zoom_hint, 12.0);
        assert_eq!(resolved.label, "Clicked Point");
    }

    #[test]
    fn test_wide_view_zoom_replaced() {
        let clicked = LatLng::new(50.0, 3.0);
        let resolved = resolve_center("", Some(clicked), MAP_CENTER, 6.0, &KNOWN_LOCATIONS);
        assert_eq!(resolved.zoom_hint, CLOSE_UP_ZOOM);

        // Exactly at the threshold the current zoom is kept.
        let resolved = resolve_center("", Some(clicked), MAP_CENTER, 10.0, &KNOWN_LOCATIONS);
        assert_eq!(resolved.zoom_hint, 10.0);
    }

    #[test]
    fn test_map_center_fallback_nothing_entered() {
        let resolved = resolve_center("", None, MAP_CENTER, 11.0, &KNOWN_LOCATIONS);

        assert_eq!(resolved.source, CenterSource::MapCenter);
        assert_eq!(resolved.center, MAP_CENTER);
        assert_eq!(resolved.label, "Current Map Center");
        assert!(!resolved.message.contains("not recognized"));
    }

    #[test]
    fn test_unrecognized_name_degrades_with_explicit_message() {
        let resolved = resolve_center("Atlantis", None, MAP_CENTER, 11.0, &KNOWN_LOCATIONS);

        assert_eq!(resolved.source, CenterSource::MapCenter);
        assert_eq!(resolved.center, MAP_CENTER);
        assert!(resolved.message.contains("\"Atlantis\" not recognized"));
    }

    #[test]
    fn test_whitespace_only_name_is_nothing_entered() {
        let resolved = resolve_center("   ", None, MAP_CENTER, 11.0, &KNOWN_LOCATIONS);
        assert!(!resolved.message.contains("not recognized"));
    }

    #[test]
    fn test_label_preserves_typed_casing() {
        let resolved = resolve_center("  sTaTuE oF LiBeRtY ", None, MAP_CENTER, 6.0, &KNOWN_LOCATIONS);
        assert_eq!(resolved.source, CenterSource::Named);
        assert_eq!(resolved.label, "sTaTuE oF LiBeRtY");
    }
}
