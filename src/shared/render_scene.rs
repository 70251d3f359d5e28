//! Render-Szene als expliziter Uebergabevertrag zwischen App und Render-Adapter.
//!
//! Die App baut pro Frame eine deklarative Marker-Liste. Der Adapter
//! bekommt nur den Diff zur vorherigen Liste und fuehrt die imperativen
//! Aufrufe der Karten-Bibliothek aus.

use glam::DVec2;
use indexmap::IndexMap;

use crate::core::{MarkerId, MarkerKind};

/// Ein zu zeichnender Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMarker {
    pub id: MarkerId,
    pub kind: MarkerKind,
    /// Position in projizierten Metern
    pub position: DVec2,
    pub color: [f32; 4],
    pub radius_px: f32,
    pub selected: bool,
    pub label: String,
}

/// Read-only Marker-Liste fuer einen Frame, in Zeichenreihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerScene {
    markers: IndexMap<MarkerId, SceneMarker>,
}

impl MarkerScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuegt einen Marker hinzu (spaetere Eintraege liegen oben).
    pub fn push(&mut self, marker: SceneMarker) {
        self.markers.insert(marker.id.clone(), marker);
    }

    pub fn get(&self, id: &MarkerId) -> Option<&SceneMarker> {
        self.markers.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneMarker> {
        self.markers.values()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Unterschied zwischen zwei Szenen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDiff {
    pub added: Vec<SceneMarker>,
    pub updated: Vec<SceneMarker>,
    pub removed: Vec<MarkerId>,
}

impl SceneDiff {
    /// Berechnet den Diff von `previous` nach `next`.
    pub fn between(previous: &MarkerScene, next: &MarkerScene) -> Self {
        let mut diff = Self::default();

        for marker in next.iter() {
            match previous.get(&marker.id) {
                None => diff.added.push(marker.clone()),
                Some(old) if old != marker => diff.updated.push(marker.clone()),
                Some(_) => {}
            }
        }

        diff.removed = previous
            .iter()
            .filter(|old| next.get(&old.id).is_none())
            .map(|old| old.id.clone())
            .collect();

        diff
    }

    /// `true`, wenn nichts zu tun ist.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}
