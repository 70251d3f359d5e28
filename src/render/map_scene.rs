//! Retained Karten-Szene fuer die egui-Zeichenflaeche.

use std::cell::RefCell;

use glam::DVec2;
use indexmap::IndexMap;

use super::{HitTest, LayerId, LayerSpec, MapSink};
use crate::core::{LatLon, MapCamera, MarkerId, SpatialIndex, ViewAnimation};
use crate::shared::SceneMarker;

/// Feature mit zugeordneter Ebene.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFeature {
    pub layer: LayerId,
    pub marker: SceneMarker,
}

/// Ebenen, Features, Kamera und laufende Kamerafahrt.
///
/// Der Spatial-Index wird nach jeder Mutation verworfen und beim naechsten
/// Hit-Test neu gebaut.
pub struct MapScene {
    layers: Vec<LayerSpec>,
    features: IndexMap<MarkerId, PlacedFeature>,
    spatial: RefCell<Option<SpatialIndex>>,
    camera: MapCamera,
    viewport: DVec2,
    animation: Option<ViewAnimation>,
    pick_radius_px: f64,
}

impl MapScene {
    pub fn new(camera: MapCamera, pick_radius_px: f64) -> Self {
        Self {
            layers: Vec::new(),
            features: IndexMap::new(),
            spatial: RefCell::new(None),
            camera,
            viewport: DVec2::new(800.0, 600.0),
            animation: None,
            pick_radius_px,
        }
    }

    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    pub fn viewport(&self) -> DVec2 {
        self.viewport
    }

    /// Setzt die Groesse der Zeichenflaeche in Pixeln.
    pub fn set_viewport(&mut self, size: DVec2) {
        if size.x > 0.0 && size.y > 0.0 {
            self.viewport = size;
        }
    }

    /// Manuelles Verschieben bricht eine laufende Kamerafahrt ab.
    pub fn pan_pixels(&mut self, delta_px: DVec2) {
        self.animation = None;
        self.camera.pan_pixels(delta_px);
    }

    /// Manuelles Zoomen bricht eine laufende Kamerafahrt ab.
    pub fn zoom_around(&mut self, delta: f64, focus_px: DVec2) {
        self.animation = None;
        self.camera.zoom_around(delta, focus_px, self.viewport);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Schreitet eine laufende Kamerafahrt um `dt` Sekunden fort.
    /// Gibt `true` zurueck, solange weitere Frames noetig sind.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        self.camera = animation.advance(dt);
        if animation.is_finished() {
            self.animation = None;
            return false;
        }
        true
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn feature(&self, id: &MarkerId) -> Option<&PlacedFeature> {
        self.features.get(id)
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    /// Features nach Ebene (unten zuerst), selektierte zuletzt.
    pub fn draw_order(&self) -> Vec<&SceneMarker> {
        let mut placed: Vec<&PlacedFeature> = self.features.values().collect();
        placed.sort_by_key(|f| (f.marker.selected, self.z_order(f.layer)));
        placed.into_iter().map(|f| &f.marker).collect()
    }

    /// Pixelposition eines Features bei aktueller Kamera.
    pub fn to_pixel(&self, world: DVec2) -> DVec2 {
        self.camera.world_to_pixel(world, self.viewport)
    }

    fn z_order(&self, layer: LayerId) -> i32 {
        self.layers.get(layer.0).map_or(0, |spec| spec.z_order)
    }

    fn invalidate_spatial(&mut self) {
        self.spatial.get_mut().take();
    }

    fn upsert(&mut self, layer: LayerId, feature: &SceneMarker) {
        self.features.insert(
            feature.id.clone(),
            PlacedFeature {
                layer,
                marker: feature.clone(),
            },
        );
        self.invalidate_spatial();
    }
}

impl MapSink for MapScene {
    fn add_layer(&mut self, spec: LayerSpec) -> LayerId {
        log::debug!("Ebene '{}' angelegt (z={})", spec.name, spec.z_order);
        self.layers.push(spec);
        LayerId(self.layers.len() - 1)
    }

    fn add_feature(&mut self, layer: LayerId, feature: &SceneMarker) {
        self.upsert(layer, feature);
    }

    fn update_feature(&mut self, layer: LayerId, feature: &SceneMarker) {
        self.upsert(layer, feature);
    }

    fn remove_feature(&mut self, id: &MarkerId) {
        if self.features.shift_remove(id).is_some() {
            self.invalidate_spatial();
        }
    }

    fn animate_view_to(&mut self, center: LatLon, zoom: f64, duration_ms: u32) {
        let target = MapCamera::new(center.projected(), zoom);
        self.animation = Some(ViewAnimation::new(self.camera, target, duration_ms));
    }
}

impl HitTest for MapScene {
    fn hit_test_at_pixel(&self, pixel: DVec2) -> Option<MarkerId> {
        let world = self.camera.pixel_to_world(pixel, self.viewport);
        let radius = self.pick_radius_px * self.camera.resolution();

        let mut spatial = self.spatial.borrow_mut();
        let index = spatial.get_or_insert_with(|| {
            SpatialIndex::from_points(
                self.features
                    .iter()
                    .map(|(id, f)| (id, f.marker.position)),
            )
        });

        // Gleiche Rangfolge wie draw_order: selektiert, dann oberste Ebene,
        // innerhalb davon der naechste Treffer
        index
            .within_radius(world, radius)
            .into_iter()
            .filter_map(|hit| {
                let feature = self.features.get(&hit.id)?;
                Some(((feature.marker.selected, self.z_order(feature.layer)), hit))
            })
            .max_by(|(za, a), (zb, b)| za.cmp(zb).then(b.distance.total_cmp(&a.distance)))
            .map(|(_, hit)| hit.id)
    }
}
