use std::sync::Arc;

use crate::app::state::FetchSource;
use crate::core::{CourseRecord, FacultyRecord, GeoNodes, MarkerId};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Geo-Nodes komplett ersetzen
    ReplaceGeoNodes { nodes: Arc<GeoNodes> },
    /// Fakultaets-Records komplett ersetzen
    ReplaceFaculty { records: Arc<Vec<FacultyRecord>> },
    /// Kurs-Records komplett ersetzen
    ReplaceCourses { records: Arc<Vec<CourseRecord>> },
    /// Marker-Index aus den aktuellen Quellen neu bauen
    RebuildMarkerIndex,
    /// Fehlgeschlagenen Fetch protokollieren (State bleibt unveraendert)
    LogFetchFailure {
        source: FetchSource,
        message: String,
    },
    /// Marker per ID selektieren
    SelectMarker { marker_id: MarkerId },
    /// Fakultaetsmitglied per Record-ID selektieren
    SelectFaculty { faculty_id: String },
    /// Raum per Name selektieren
    SelectRoom { room: String },
    /// Neu-Laden beim Host anfordern
    RequestRefresh,
}
