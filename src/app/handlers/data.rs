//! Handler für Quellen, Index-Rebuild und Neu-Laden.

use std::sync::Arc;

use crate::app::state::FetchSource;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CourseRecord, FacultyRecord, GeoNodes};

/// Ersetzt die Geo-Nodes.
pub fn replace_geo_nodes(state: &mut AppState, nodes: Arc<GeoNodes>) {
    use_cases::marker_index::replace_geo_nodes(state, nodes);
}

/// Ersetzt die Fakultaets-Records.
pub fn replace_faculty(state: &mut AppState, records: Arc<Vec<FacultyRecord>>) {
    use_cases::marker_index::replace_faculty(state, records);
}

/// Ersetzt die Kurs-Records.
pub fn replace_courses(state: &mut AppState, records: Arc<Vec<CourseRecord>>) {
    use_cases::marker_index::replace_courses(state, records);
}

/// Baut den Marker-Index neu.
pub fn rebuild_index(state: &mut AppState) {
    use_cases::marker_index::rebuild(state);
}

/// Protokolliert einen fehlgeschlagenen Fetch.
pub fn log_fetch_failure(state: &mut AppState, source: FetchSource, message: &str) {
    use_cases::marker_index::log_fetch_failure(state, source, message);
}

/// Fordert beim Host ein Neu-Laden aller Quellen an.
pub fn request_refresh(state: &mut AppState) {
    log::info!("Neu-Laden angefordert");
    state.request_refresh();
}
