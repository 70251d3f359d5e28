//! Marker-Index: fuehrt OSM-Nodes, Fakultaetsmitglieder und Kurse zu einer
//! adressierbaren Marker-Sammlung zusammen.
//!
//! Der Index wird bei jedem abgeschlossenen Fetch komplett neu gebaut,
//! nie inkrementell gemergt.

use std::sync::Arc;

use glam::DVec2;
use indexmap::IndexMap;

use super::{
    classify, CourseRecord, FacultyRecord, FeatureCategory, GeoNode, GeoNodes, LatLon,
    SpatialIndex, SpatialMatch,
};
use crate::shared::MapOptions;

/// Art eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Faculty,
    Course,
    OsmNode,
}

impl MarkerKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Faculty => "faculty",
            Self::Course => "room",
            Self::OsmNode => "osm",
        }
    }
}

/// Eindeutige Marker-ID, pro Quelle mit Praefix (`faculty:`, `room:`, `osm:`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(String);

impl MarkerId {
    fn with_kind(kind: MarkerKind, key: &str) -> Self {
        Self(format!("{}:{}", kind.prefix(), key))
    }

    pub fn faculty(id: &str) -> Self {
        Self::with_kind(MarkerKind::Faculty, id)
    }

    pub fn room(room: &str) -> Self {
        Self::with_kind(MarkerKind::Course, room)
    }

    pub fn place(node_id: &str) -> Self {
        Self::with_kind(MarkerKind::OsmNode, node_id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Alle Kurse eines physischen Raums.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomEntry {
    pub room: String,
    /// Kurse in Fetch-Reihenfolge; der erste mit Koordinate bestimmt die Position
    pub courses: Vec<Arc<CourseRecord>>,
    pub coordinate: Option<LatLon>,
}

impl RoomEntry {
    /// Kurse sortiert nach Wochentag und Startzeit (fuer das Detail-Panel).
    pub fn schedule(&self) -> Vec<&CourseRecord> {
        let mut courses: Vec<&CourseRecord> = self.courses.iter().map(Arc::as_ref).collect();
        courses.sort_by_key(|c| (c.slot.day, c.slot.start_minutes()));
        courses
    }
}

/// Herkunft eines Markers.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerSource {
    Faculty(Arc<FacultyRecord>),
    Room(Arc<RoomEntry>),
    Place(Arc<GeoNode>, FeatureCategory),
}

/// Renderbarer Punkt auf der Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub kind: MarkerKind,
    pub coordinate: LatLon,
    pub color: [f32; 4],
    pub source: MarkerSource,
}

impl Marker {
    /// Position in projizierten Metern.
    pub fn projected(&self) -> DVec2 {
        self.coordinate.projected()
    }

    /// Beschriftung fuer Liste und Tooltip.
    pub fn label(&self) -> String {
        match &self.source {
            MarkerSource::Faculty(record) => record.name.clone(),
            MarkerSource::Room(room) => room.room.clone(),
            MarkerSource::Place(node, category) => node
                .tags
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} {}", category.label(), node.id)),
        }
    }
}

/// Adressierbare Marker-Sammlung einer Karten-Ansicht.
#[derive(Debug, Clone, Default)]
pub struct MarkerIndex {
    markers: IndexMap<MarkerId, Marker>,
    faculty: IndexMap<String, Arc<FacultyRecord>>,
    rooms: IndexMap<String, Arc<RoomEntry>>,
    spatial: SpatialIndex,
}

impl MarkerIndex {
    /// Leerer Index (Ausgangszustand vor dem ersten Fetch).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Baut den Index aus allen drei Quellen neu auf.
    ///
    /// Reihenfolge der Marker: OSM-Nodes, Fakultaet, Raeume, jeweils in
    /// Quell-Reihenfolge. Gleiche Eingaben ergeben den gleichen Index.
    pub fn build(
        geo: &GeoNodes,
        faculty: &[FacultyRecord],
        courses: &[CourseRecord],
        options: &MapOptions,
    ) -> Self {
        let mut markers: IndexMap<MarkerId, Marker> = IndexMap::new();

        for node in geo.iter() {
            let Some(category) = classify(node) else {
                continue;
            };
            let id = MarkerId::place(&node.id);
            markers.insert(
                id.clone(),
                Marker {
                    id,
                    kind: MarkerKind::OsmNode,
                    coordinate: LatLon::new(node.lat, node.lon),
                    color: category.color(options),
                    source: MarkerSource::Place(Arc::clone(node), category),
                },
            );
        }

        let mut faculty_by_id: IndexMap<String, Arc<FacultyRecord>> = IndexMap::new();
        for record in faculty {
            let record = Arc::new(record.clone());
            if let Some(coordinate) = record.coordinate {
                let id = MarkerId::faculty(&record.id);
                markers.insert(
                    id.clone(),
                    Marker {
                        id,
                        kind: MarkerKind::Faculty,
                        coordinate,
                        color: options.color_faculty,
                        source: MarkerSource::Faculty(Arc::clone(&record)),
                    },
                );
            }
            faculty_by_id.insert(record.id.clone(), record);
        }

        let rooms = reduce_rooms(courses);
        for entry in rooms.values() {
            let Some(coordinate) = entry.coordinate else {
                continue;
            };
            let id = MarkerId::room(&entry.room);
            markers.insert(
                id.clone(),
                Marker {
                    id,
                    kind: MarkerKind::Course,
                    coordinate,
                    color: options.color_course,
                    source: MarkerSource::Room(Arc::clone(entry)),
                },
            );
        }

        let spatial = SpatialIndex::from_points(markers.iter().map(|(id, m)| (id, m.projected())));

        log::debug!(
            "Marker-Index gebaut: {} Marker ({} Raeume, {} Fakultaet)",
            markers.len(),
            rooms.len(),
            faculty_by_id.len()
        );

        Self {
            markers,
            faculty: faculty_by_id,
            rooms,
            spatial,
        }
    }

    pub fn get(&self, id: &MarkerId) -> Option<&Marker> {
        self.markers.get(id)
    }

    /// Fakultaetsmitglied nach Record-ID (auch ohne Koordinate).
    pub fn faculty(&self, id: &str) -> Option<&Arc<FacultyRecord>> {
        self.faculty.get(id)
    }

    /// Raum nach Namen (auch ohne Koordinate).
    pub fn room(&self, room: &str) -> Option<&Arc<RoomEntry>> {
        self.rooms.get(room)
    }

    /// Alle Marker in Index-Reihenfolge.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Alle Raeume in Fetch-Reihenfolge.
    pub fn rooms(&self) -> impl Iterator<Item = &Arc<RoomEntry>> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Naechster Marker zu einer projizierten Position.
    pub fn nearest(&self, point: DVec2, max_distance: f64) -> Option<SpatialMatch> {
        self.spatial.nearest_within(point, max_distance)
    }
}

/// Praefix fuer Raum-Eintraege von Kursen ohne Raumnamen.
pub const UNASSIGNED_ROOM_PREFIX: &str = "#";

/// Reduziert Kurse auf genau einen Eintrag pro Raum.
///
/// Kurse ohne Raumnamen bekommen einen eigenen Eintrag unter
/// `#<Kurs-ID>`, getrennt von echten Raumnamen.
fn reduce_rooms(courses: &[CourseRecord]) -> IndexMap<String, Arc<RoomEntry>> {
    let mut rooms: IndexMap<String, RoomEntry> = IndexMap::new();
    for course in courses {
        let key = if course.room.is_empty() {
            format!("{UNASSIGNED_ROOM_PREFIX}{}", course.id)
        } else {
            course.room.clone()
        };
        let entry = rooms.entry(key.clone()).or_insert_with(|| RoomEntry {
            room: key,
            courses: Vec::new(),
            coordinate: None,
        });
        if entry.coordinate.is_none() {
            entry.coordinate = course.coordinate;
        }
        entry.courses.push(Arc::new(course.clone()));
    }

    rooms
        .into_iter()
        .map(|(key, entry)| (key, Arc::new(entry)))
        .collect()
}

#[cfg(test)]
mod tests;
