//! The map-widget capability consumed by the controller.
//!
//! The actual widget (tile loading, pan/zoom, event plumbing, pixel
//! rendering) is an external collaborator. [`MapSurface`] is the seam:
//! everything the controller needs is "draw this", "remove that", "move the
//! view". [`HeadlessSurface`] is the in-memory implementation backing the
//! demo binary and the test suite.

use crate::{
    core::geo::{LatLng, LatLngBounds},
    prelude::HashMap,
};
use serde::{Deserialize, Serialize};

/// Opaque handle to a drawn layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(u64);

/// Style for a filled band polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    /// Stroke color
    pub color: String,
    /// Fill color
    pub fill_color: String,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f32,
    /// Stroke width
    pub weight: f32,
}

impl PolygonStyle {
    /// Band styling: one color for stroke and fill, translucent fill, thin
    /// stroke.
    pub fn band(color: &str) -> Self {
        Self {
            color: color.to_string(),
            fill_color: color.to_string(),
            fill_opacity: crate::constants::FILL_OPACITY,
            weight: crate::constants::STROKE_WEIGHT,
        }
    }
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            color: "#3388ff".to_string(),
            fill_color: "#3388ff".to_string(),
            fill_opacity: 0.2,
            weight: 3.0,
        }
    }
}

/// Options for fitting the view to a bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBoundsOptions {
    /// Margin kept around the bounds, in pixels.
    pub padding_px: f64,
    /// Never zoom in past this level, however small the bounds are.
    pub max_zoom: f64,
}

/// Map-widget capability: the full surface the controller draws on.
///
/// Implementations are expected to be cheap and non-blocking; the widget's
/// own failures (tile fetches etc.) stay on the widget's side of the seam.
pub trait MapSurface {
    /// Adds a base tile layer from a slippy-map URL template.
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) -> LayerId;

    /// Places a marker and returns its handle.
    fn add_marker(&mut self, position: LatLng) -> LayerId;

    /// Attaches popup text to a marker. Unknown handles are ignored.
    fn bind_popup(&mut self, layer: LayerId, text: &str);

    /// Opens a previously bound popup. Unknown handles are ignored.
    fn open_popup(&mut self, layer: LayerId);

    /// Draws a filled polygon ring and returns its handle.
    fn add_polygon(&mut self, points: &[LatLng], style: &PolygonStyle) -> LayerId;

    /// Bounding box of a drawn polygon, `None` for unknown or non-polygon
    /// handles.
    fn polygon_bounds(&self, layer: LayerId) -> Option<LatLngBounds>;

    /// Removes a drawn layer. Removing an already-removed handle is a no-op.
    fn remove_layer(&mut self, layer: LayerId);

    /// Jumps the view to a center and zoom.
    fn set_view(&mut self, center: LatLng, zoom: f64);

    /// Adjusts the view to contain `bounds` with padding, capped at
    /// `options.max_zoom`.
    fn fit_bounds(&mut self, bounds: &LatLngBounds, options: FitBoundsOptions);

    /// Current view center.
    fn center(&self) -> LatLng;

    /// Current view zoom.
    fn zoom(&self) -> f64;
}

/// What a headless surface remembers about one drawn layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedLayer {
    Tile {
        url_template: String,
        attribution: String,
    },
    Marker {
        position: LatLng,
        popup: Option<String>,
        popup_open: bool,
    },
    Polygon {
        points: Vec<LatLng>,
        style: PolygonStyle,
    },
}

impl RecordedLayer {
    /// Layer introspection as JSON, mirroring how widget layers expose
    /// their options.
    pub fn options(&self) -> serde_json::Value {
        match self {
            RecordedLayer::Tile {
                url_template,
                attribution,
            } => serde_json::json!({
                "type": "tile",
                "url_template": url_template,
                "attribution": attribution,
            }),
            RecordedLayer::Marker {
                position,
                popup,
                popup_open,
            } => serde_json::json!({
                "type": "marker",
                "position": { "lat": position.lat, "lng": position.lng },
                "popup": popup,
                "popup_open": popup_open,
            }),
            RecordedLayer::Polygon { points, style } => serde_json::json!({
                "type": "polygon",
                "vertices": points.len(),
                "style": style,
            }),
        }
    }
}

/// In-memory [`MapSurface`] with no rendering behind it.
///
/// Layers are kept in insertion order, the order a real widget would paint
/// them in, so tests can assert stacking. Fitting has no pixel viewport to
/// measure against, so it centers on the bounds and adopts the zoom cap,
/// recording the request for inspection.
pub struct HeadlessSurface {
    layers: HashMap<LayerId, RecordedLayer>,
    insertion_order: Vec<LayerId>,
    next_id: u64,
    center: LatLng,
    zoom: f64,
    last_fit: Option<(LatLngBounds, FitBoundsOptions)>,
}

impl HeadlessSurface {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            layers: HashMap::default(),
            insertion_order: Vec::new(),
            next_id: 0,
            center,
            zoom,
            last_fit: None,
        }
    }

    fn insert(&mut self, layer: RecordedLayer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.insert(id, layer);
        self.insertion_order.push(id);
        id
    }

    /// Gets a recorded layer by handle.
    pub fn layer(&self, id: LayerId) -> Option<&RecordedLayer> {
        self.layers.get(&id)
    }

    /// All live layers in paint order.
    pub fn layers_in_order(&self) -> Vec<&RecordedLayer> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.layers.get(id))
            .collect()
    }

    /// Live polygons in paint order.
    pub fn polygons_in_order(&self) -> Vec<(&Vec<LatLng>, &PolygonStyle)> {
        self.layers_in_order()
            .into_iter()
            .filter_map(|layer| match layer {
                RecordedLayer::Polygon { points, style } => Some((points, style)),
                _ => None,
            })
            .collect()
    }

    /// Live markers in paint order.
    pub fn markers(&self) -> Vec<&RecordedLayer> {
        self.layers_in_order()
            .into_iter()
            .filter(|layer| matches!(layer, RecordedLayer::Marker { .. }))
            .collect()
    }

    /// Number of live layers of any kind.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// The most recent fit-bounds request, if any.
    pub fn last_fit(&self) -> Option<&(LatLngBounds, FitBoundsOptions)> {
        self.last_fit.as_ref()
    }
}

impl MapSurface for HeadlessSurface {
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) -> LayerId {
        self.insert(RecordedLayer::Tile {
            url_template: url_template.to_string(),
            attribution: attribution.to_string(),
        })
    }

    fn add_marker(&mut self, position: LatLng) -> LayerId {
        self.insert(RecordedLayer::Marker {
            position,
            popup: None,
            popup_open: false,
        })
    }

    fn bind_popup(&mut self, layer: LayerId, text: &str) {
        if let Some(RecordedLayer::Marker { popup, .. }) = self.layers.get_mut(&layer) {
            *popup = Some(text.to_string());
        }
    }

    fn open_popup(&mut self, layer: LayerId) {
        if let Some(RecordedLayer::Marker {
            popup, popup_open, ..
        }) = self.layers.get_mut(&layer)
        {
            if popup.is_some() {
                *popup_open = true;
            }
        }
    }

    fn add_polygon(&mut self, points: &[LatLng], style: &PolygonStyle) -> LayerId {
        self.insert(RecordedLayer::Polygon {
            points: points.to_vec(),
            style: style.clone(),
        })
    }

    fn polygon_bounds(&self, layer: LayerId) -> Option<LatLngBounds> {
        match self.layers.get(&layer)? {
            RecordedLayer::Polygon { points, .. } => LatLngBounds::from_points(points),
            _ => None,
        }
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.layers.remove(&layer);
        self.insertion_order.retain(|id| *id != layer);
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, options: FitBoundsOptions) {
        self.center = bounds.center();
        self.zoom = options.max_zoom;
        self.last_fit = Some((bounds.clone(), options));
        log::debug!(
            "fit view to ({:.4}, {:.4})..({:.4}, {:.4}), zoom cap {}",
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng,
            options.max_zoom
        );
    }

    fn center(&self) -> LatLng {
        self.center
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }
}
