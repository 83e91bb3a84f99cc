//! The interactive controller tying resolver, generator, and surface
//! together.
//!
//! [`IsobandApp`] owns the session state: the last clicked point, the
//! handles of everything it has drawn, and the control panel. All mutation
//! happens on the single event path, and every generate run fully replaces
//! the drawn state, so at most one center marker and one band set are ever
//! visible.

use crate::{
    bands::{generate_bands, TravelMode},
    catalog::KNOWN_LOCATIONS,
    core::{
        constants::{FIT_PADDING_PX, GENERATE_PAUSE_MS, OSM_ATTRIBUTION, OSM_TILE_URL},
        geo::{LatLng, LatLngBounds},
    },
    resolve::{resolve_center, CenterSource},
    surface::{FitBoundsOptions, LayerId, MapSurface, PolygonStyle},
    ui::{controls::ControlPanel, legend::build_legend},
    Result,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// External events delivered to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The map widget reported a click at this coordinate.
    MapClick(LatLng),
    /// The mode selector changed.
    ModeChanged(TravelMode),
    /// The generate button was pressed.
    GeneratePressed,
}

/// The band-demo controller over a map surface.
pub struct IsobandApp<S: MapSurface> {
    surface: S,
    controls: ControlPanel,
    clicked: Option<LatLng>,
    band_layers: Vec<LayerId>,
    center_marker: Option<LayerId>,
    rng: ChaCha8Rng,
}

impl<S: MapSurface> IsobandApp<S> {
    /// Creates the controller and adds the base tile layer. Band
    /// perturbation is entropy-seeded; visuals differ between runs, as the
    /// demo intends.
    pub fn new(surface: S) -> Self {
        Self::with_rng(surface, ChaCha8Rng::from_entropy())
    }

    /// Creates the controller with a fixed perturbation seed, for
    /// reproducible output.
    pub fn with_seed(surface: S, seed: u64) -> Self {
        Self::with_rng(surface, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(mut surface: S, rng: ChaCha8Rng) -> Self {
        surface.add_tile_layer(OSM_TILE_URL, OSM_ATTRIBUTION);
        Self {
            surface,
            controls: ControlPanel::new(),
            clicked: None,
            band_layers: Vec::new(),
            center_marker: None,
            rng,
        }
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlPanel {
        &mut self.controls
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The point the last map click selected, if still live.
    pub fn clicked(&self) -> Option<LatLng> {
        self.clicked
    }

    /// Dispatches one external event to completion.
    pub async fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::MapClick(position) => {
                self.on_map_click(position);
                Ok(())
            }
            AppEvent::ModeChanged(mode) => {
                self.controls.set_mode(mode);
                Ok(())
            }
            AppEvent::GeneratePressed => self.generate().await,
        }
    }

    /// Records a clicked center candidate and marks it provisionally.
    /// The click supersedes any stale typed name, so the text field is
    /// cleared.
    pub fn on_map_click(&mut self, position: LatLng) {
        self.clicked = Some(position);
        self.controls.location.clear();

        self.clear_features();

        let marker = self.surface.add_marker(position);
        self.surface
            .bind_popup(marker, "New center selected. Press 'Generate'.");
        self.surface.open_popup(marker);
        self.center_marker = Some(marker);

        self.controls.show_info(
            "New center selected on map. Adjust parameters and click 'Generate Isochrone'.",
        );
        log::debug!(
            "map clicked, new candidate center: {:.4}, {:.4}",
            position.lat,
            position.lng
        );
    }

    /// Removes everything this controller has drawn and empties the legend.
    /// Safe to call with nothing drawn.
    pub fn clear_features(&mut self) {
        if let Some(marker) = self.center_marker.take() {
            self.surface.remove_layer(marker);
        }
        for layer in self.band_layers.drain(..) {
            self.surface.remove_layer(layer);
        }
        self.controls.legend.clear();
    }

    /// Runs one full generation: validate, clear, resolve, draw, legend,
    /// fit. Invalid input aborts before any map mutation and leaves prior
    /// drawn state untouched.
    pub async fn generate(&mut self) -> Result<()> {
        let request = match self.controls.parse_request() {
            Ok(request) => request,
            Err(error) => {
                self.controls.show_error(error.to_string());
                return Ok(());
            }
        };

        self.controls.loading = true;
        self.controls.generate_enabled = false;
        self.controls.status = None;

        self.clear_features();

        // Lets a "working" indicator render before the synchronous geometry
        // work below; no correctness purpose.
        tokio::time::sleep(Duration::from_millis(GENERATE_PAUSE_MS)).await;

        let resolved = resolve_center(
            &self.controls.location,
            self.clicked,
            self.surface.center(),
            self.surface.zoom(),
            &KNOWN_LOCATIONS,
        );
        log::debug!(
            "resolved center {:.4}, {:.4} ({}), zoom hint {}",
            resolved.center.lat,
            resolved.center.lng,
            resolved.label,
            resolved.zoom_hint
        );

        match resolved.source {
            CenterSource::Named => {
                // A typed name supersedes the remembered click; jump the
                // view to the catalog entry before drawing.
                self.clicked = None;
                self.surface.set_view(resolved.center, resolved.zoom_hint);
            }
            CenterSource::MapCenter => {
                self.clicked = None;
            }
            CenterSource::Clicked => {}
        }

        let marker = self.surface.add_marker(resolved.center);
        self.surface
            .bind_popup(marker, &format!("Center: {}", resolved.label));
        self.surface.open_popup(marker);
        self.center_marker = Some(marker);

        let bands = generate_bands(resolved.center, &request, &mut self.rng);

        // Outermost first so the inner, nearer-colored bands draw on top.
        let mut cumulative: Option<LatLngBounds> = None;
        for band in bands.iter().rev() {
            let style = PolygonStyle::band(band.color);
            let layer = self.surface.add_polygon(&band.polygon, &style);
            self.band_layers.push(layer);

            if let Some(bounds) = self.surface.polygon_bounds(layer) {
                if bounds.is_valid() && !bounds.is_degenerate() {
                    cumulative = Some(match cumulative {
                        Some(accumulated) => accumulated.union(&bounds),
                        None => bounds,
                    });
                }
            }
        }

        self.controls.legend = build_legend(&bands, request.mode());

        match cumulative {
            Some(bounds) if !self.band_layers.is_empty() => {
                self.surface.fit_bounds(
                    &bounds,
                    FitBoundsOptions {
                        padding_px: FIT_PADDING_PX,
                        max_zoom: resolved.zoom_hint,
                    },
                );
            }
            _ => {
                log::debug!(
                    "no valid band bounds, centering on marker at zoom {}",
                    resolved.zoom_hint
                );
                self.surface.set_view(resolved.center, resolved.zoom_hint);
            }
        }

        self.controls.show_info(resolved.message.clone());
        self.controls.loading = false;
        self.controls.generate_enabled = true;

        log::info!(
            "generated {} bands around {:.4}, {:.4} ({})",
            bands.len(),
            resolved.center.lat,
            resolved.center.lng,
            resolved.label
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{DEFAULT_CENTER, DEFAULT_ZOOM};
    use crate::surface::HeadlessSurface;
    use crate::ui::controls::StatusLevel;

    fn test_app() -> IsobandApp<HeadlessSurface> {
        let surface = HeadlessSurface::new(DEFAULT_CENTER, DEFAULT_ZOOM);
        IsobandApp::with_seed(surface, 42)
    }

    #[test]
    fn test_new_app_has_tile_layer_only() {
        let app = test_app();
        assert_eq!(app.surface().layer_count(), 1);
        assert!(app.surface().markers().is_empty());
        assert!(app.controls().legend.is_empty());
    }

    #[test]
    fn test_map_click_places_provisional_marker() {
        let mut app = test_app();
        app.controls_mut().location = "Eiffel Tower".to_string();

        let clicked = LatLng::new(48.86, 2.35);
        app.on_map_click(clicked);

        assert_eq!(app.clicked(), Some(clicked));
        // Click supersedes stale typed text.
        assert!(app.controls().location.is_empty());

        let markers = app.surface().markers();
        assert_eq!(markers.len(), 1);
        match markers[0] {
            crate::surface::RecordedLayer::Marker {
                position,
                popup,
                popup_open,
            } => {
                assert_eq!(*position, clicked);
                assert_eq!(popup.as_deref(), Some("New center selected. Press 'Generate'."));
                assert!(*popup_open);
            }
            other => panic!("unexpected layer {:?}", other),
        }
        assert_eq!(
            app.controls().status.as_ref().unwrap().level,
            StatusLevel::Info
        );
    }

    #[test]
    fn test_repeated_clicks_keep_one_marker() {
        let mut app = test_app();
        app.on_map_click(LatLng::new(48.0, 2.0));
        app.on_map_click(LatLng::new(49.0, 3.0));

        assert_eq!(app.surface().markers().len(), 1);
        assert_eq!(app.clicked(), Some(LatLng::new(49.0, 3.0)));
    }

    #[test]
    fn test_clear_features_is_idempotent() {
        let mut app = test_app();
        app.on_map_click(LatLng::new(48.0, 2.0));

        app.clear_features();
        assert_eq!(app.surface().layer_count(), 1); // tile layer only
        assert!(app.controls().legend.is_empty());

        app.clear_features();
        assert_eq!(app.surface().layer_count(), 1);
        assert!(app.controls().legend.is_empty());
    }
}
