//! Render-Adapter: uebersetzt Szenen-Diffs in imperative Karten-Aufrufe.
//!
//! Die App kennt nur `MapSink` und `HitTest`. `MapScene` ist die
//! mitgelieferte Implementierung fuer die egui-Karte.

mod map_scene;

pub use map_scene::{MapScene, PlacedFeature};

use glam::DVec2;

use crate::app::ViewRequest;
use crate::core::{LatLon, MarkerId, MarkerKind};
use crate::shared::{SceneDiff, SceneMarker};

/// Handle einer Vektor-Ebene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub usize);

/// Beschreibung einer Vektor-Ebene.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub name: String,
    /// Hoehere Werte liegen oben
    pub z_order: i32,
}

impl LayerSpec {
    pub fn new(name: impl Into<String>, z_order: i32) -> Self {
        Self {
            name: name.into(),
            z_order,
        }
    }
}

/// Schreibende Seite der Karten-Bibliothek.
pub trait MapSink {
    fn add_layer(&mut self, spec: LayerSpec) -> LayerId;
    fn add_feature(&mut self, layer: LayerId, feature: &SceneMarker);
    fn update_feature(&mut self, layer: LayerId, feature: &SceneMarker);
    fn remove_feature(&mut self, id: &MarkerId);
    fn animate_view_to(&mut self, center: LatLon, zoom: f64, duration_ms: u32);
}

/// Pixel-Hit-Test der Karten-Bibliothek.
pub trait HitTest {
    /// Marker unter dem Pixel (Ursprung oben links), falls vorhanden.
    fn hit_test_at_pixel(&self, pixel: DVec2) -> Option<MarkerId>;
}

/// Je eine Ebene pro Marker-Art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerLayers {
    pub places: LayerId,
    pub rooms: LayerId,
    pub faculty: LayerId,
}

impl MarkerLayers {
    /// Legt die drei Marker-Ebenen an (Orte unten, Fakultaet oben).
    pub fn install(sink: &mut dyn MapSink) -> Self {
        Self {
            places: sink.add_layer(LayerSpec::new("places", 0)),
            rooms: sink.add_layer(LayerSpec::new("rooms", 1)),
            faculty: sink.add_layer(LayerSpec::new("faculty", 2)),
        }
    }

    pub fn for_kind(&self, kind: MarkerKind) -> LayerId {
        match kind {
            MarkerKind::OsmNode => self.places,
            MarkerKind::Course => self.rooms,
            MarkerKind::Faculty => self.faculty,
        }
    }
}

/// Wendet einen Szenen-Diff auf die Karte an.
pub fn apply_diff(sink: &mut dyn MapSink, layers: &MarkerLayers, diff: &SceneDiff) {
    for id in &diff.removed {
        sink.remove_feature(id);
    }
    for marker in &diff.updated {
        sink.update_feature(layers.for_kind(marker.kind), marker);
    }
    for marker in &diff.added {
        sink.add_feature(layers.for_kind(marker.kind), marker);
    }

    if !diff.is_empty() {
        log::trace!(
            "Szenen-Diff angewendet: +{} ~{} -{}",
            diff.added.len(),
            diff.updated.len(),
            diff.removed.len()
        );
    }
}

/// Leitet eine Kamera-Anforderung an die Karte weiter.
pub fn apply_view_request(sink: &mut dyn MapSink, request: ViewRequest) {
    match request {
        ViewRequest::AnimateTo {
            center,
            zoom,
            duration_ms,
        } => sink.animate_view_to(center, zoom, duration_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Zeichnet alle Aufrufe auf.
    #[derive(Default)]
    struct RecordingSink {
        layers: Vec<LayerSpec>,
        calls: Vec<String>,
    }

    impl MapSink for RecordingSink {
        fn add_layer(&mut self, spec: LayerSpec) -> LayerId {
            self.layers.push(spec);
            LayerId(self.layers.len() - 1)
        }

        fn add_feature(&mut self, layer: LayerId, feature: &SceneMarker) {
            self.calls.push(format!("add {} {}", layer.0, feature.id));
        }

        fn update_feature(&mut self, layer: LayerId, feature: &SceneMarker) {
            self.calls.push(format!("update {} {}", layer.0, feature.id));
        }

        fn remove_feature(&mut self, id: &MarkerId) {
            self.calls.push(format!("remove {id}"));
        }

        fn animate_view_to(&mut self, center: LatLon, zoom: f64, duration_ms: u32) {
            self.calls.push(format!(
                "animate {:.4} {:.4} {zoom} {duration_ms}",
                center.lat, center.lon
            ));
        }
    }

    fn scene_marker(id: MarkerId, kind: MarkerKind) -> SceneMarker {
        SceneMarker {
            id,
            kind,
            position: DVec2::ZERO,
            color: [1.0; 4],
            radius_px: 6.0,
            selected: false,
            label: String::new(),
        }
    }

    #[test]
    fn diff_is_routed_to_layer_of_marker_kind() {
        let mut sink = RecordingSink::default();
        let layers = MarkerLayers::install(&mut sink);
        let diff = SceneDiff {
            added: vec![
                scene_marker(MarkerId::faculty("7"), MarkerKind::Faculty),
                scene_marker(MarkerId::place("100"), MarkerKind::OsmNode),
            ],
            updated: vec![scene_marker(MarkerId::room("A1"), MarkerKind::Course)],
            removed: vec![MarkerId::room("B2")],
        };

        apply_diff(&mut sink, &layers, &diff);

        assert_eq!(sink.layers.len(), 3);
        assert_eq!(
            sink.calls,
            vec![
                "remove room:B2",
                "update 1 room:A1",
                "add 2 faculty:7",
                "add 0 osm:100",
            ]
        );
    }

    #[test]
    fn view_request_becomes_animate_call() {
        let mut sink = RecordingSink::default();
        apply_view_request(
            &mut sink,
            ViewRequest::AnimateTo {
                center: LatLon::new(39.8914, 32.7843),
                zoom: 19.0,
                duration_ms: 1000,
            },
        );

        assert_eq!(sink.calls, vec!["animate 39.8914 32.7843 19 1000"]);
    }
}
