use crate::core::{CourseRecord, FacultyRecord, GeoNodes, MarkerId};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Geo-Dokument wurde gelesen und geparst.
    ///
    /// `Err` nur bei I/O-Fehlern; ein unparsbares Dokument kommt als leeres
    /// `Ok` an.
    GeoDocumentLoaded { result: Result<GeoNodes, String> },
    /// Fakultaets-Fetch abgeschlossen
    FacultyFetched {
        result: Result<Vec<FacultyRecord>, String>,
    },
    /// Kurs-Fetch abgeschlossen
    CoursesFetched {
        result: Result<Vec<CourseRecord>, String>,
    },
    /// Klick auf die Karte, bereits per Hit-Test aufgeloest
    /// (`None` = kein Feature unter dem Pixel)
    MarkerClicked { marker_id: Option<MarkerId> },
    /// Eintrag der Fakultaetsliste aktiviert
    FacultyListEntryActivated { faculty_id: String },
    /// Eintrag der Raumliste aktiviert
    RoomListEntryActivated { room: String },
    /// Alle Quellen neu laden
    RefreshRequested,
}
