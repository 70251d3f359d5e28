//! Geparste OSM-Nodes einer Dokument-Ladung.

use std::sync::Arc;

use glam::DVec2;
use indexmap::IndexMap;

use super::projection;
use super::Tags;

/// Ein getaggter Punkt aus dem Geo-Dokument (WGS84-Grad).
#[derive(Debug, Clone, PartialEq)]
pub struct GeoNode {
    /// Node-ID, eindeutig innerhalb einer Ladung
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub tags: Tags,
}

impl GeoNode {
    /// Erstellt einen neuen Node.
    pub fn new(id: impl Into<String>, lat: f64, lon: f64, tags: Tags) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            tags,
        }
    }

    /// Position in projizierten Metern (Web Mercator).
    pub fn projected(&self) -> DVec2 {
        projection::lon_lat_to_meters(self.lon, self.lat)
    }
}

/// Alle Nodes einer Ladung, in Dokument-Reihenfolge.
///
/// Nodes sind nach dem Parsen unveraenderlich und werden per `Arc`
/// an Marker weitergereicht.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoNodes {
    nodes: IndexMap<String, Arc<GeoNode>>,
}

impl GeoNodes {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuegt einen Node ein. Eine doppelte ID ersetzt die Daten,
    /// behaelt aber die Position der ersten Nennung.
    pub fn insert(&mut self, node: GeoNode) -> Option<Arc<GeoNode>> {
        self.nodes.insert(node.id.clone(), Arc::new(node))
    }

    pub fn get(&self, id: &str) -> Option<&Arc<GeoNode>> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iteriert in Dokument-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<GeoNode>> {
        self.nodes.values()
    }
}

impl FromIterator<GeoNode> for GeoNodes {
    fn from_iter<I: IntoIterator<Item = GeoNode>>(iter: I) -> Self {
        let mut nodes = GeoNodes::new();
        for node in iter {
            nodes.insert(node);
        }
        nodes
    }
}
