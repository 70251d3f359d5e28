//! Application State: zentrale Datenhaltung.

mod app_state;
mod selection;
mod view;

pub use app_state::AppState;
pub use selection::{SelectedEntity, SelectedItem, SelectionState};
pub use view::{ViewRequest, ViewState};

use crate::core::{CourseRecord, FacultyRecord, GeoNodes};
use std::sync::Arc;

/// Zuletzt erfolgreich geladene Quellen des Marker-Index.
///
/// Jede Quelle wird einzeln ersetzt; der Index wird danach aus allen drei
/// komplett neu gebaut.
#[derive(Debug, Clone, Default)]
pub struct MapSources {
    pub geo_nodes: Arc<GeoNodes>,
    pub faculty: Arc<Vec<FacultyRecord>>,
    pub courses: Arc<Vec<CourseRecord>>,
}

/// Herkunft eines asynchronen Fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchSource {
    GeoDocument,
    Faculty,
    Courses,
}

impl FetchSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::GeoDocument => "Geo-Dokument",
            Self::Faculty => "Fakultaet",
            Self::Courses => "Kurse",
        }
    }
}

/// Lade-Fortschritt fuer Statusleiste und Leer-Anzeigen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStatus {
    pub geo_loaded: bool,
    pub faculty_loaded: bool,
    pub courses_loaded: bool,
    /// Letzter Fetch-Fehler (nur zur Anzeige, nicht fatal)
    pub last_error: Option<FetchFailure>,
}

/// Fehlgeschlagener Fetch mit Herkunft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub source: FetchSource,
    pub message: String,
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source.label(), self.message)
    }
}

impl LoadStatus {
    /// Markiert eine Quelle als mindestens einmal abgeschlossen.
    pub fn mark_loaded(&mut self, source: FetchSource) {
        match source {
            FetchSource::GeoDocument => self.geo_loaded = true,
            FetchSource::Faculty => self.faculty_loaded = true,
            FetchSource::Courses => self.courses_loaded = true,
        }
    }

    /// Verwirft den letzten Fehler, wenn er von `source` stammt.
    pub fn clear_error_from(&mut self, source: FetchSource) {
        if self.last_error.as_ref().is_some_and(|e| e.source == source) {
            self.last_error = None;
        }
    }

    /// `true`, solange noch eine Quelle aussteht.
    pub fn is_loading(&self) -> bool {
        !(self.geo_loaded && self.faculty_loaded && self.courses_loaded)
    }
}
