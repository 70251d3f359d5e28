//! Use-Case-Funktionen für Quellen und Marker-Index.
//!
//! Jede Quelle wird bei Erfolg komplett ersetzt. Fehlgeschlagene Fetches
//! lassen den vorherigen Stand stehen.

use std::sync::Arc;

use crate::app::state::{FetchFailure, FetchSource};
use crate::app::AppState;
use crate::core::{CourseRecord, FacultyRecord, GeoNodes, MarkerIndex};

/// Ersetzt die Geo-Nodes (auch durch eine leere Menge nach Parse-Fehler).
pub fn replace_geo_nodes(state: &mut AppState, nodes: Arc<GeoNodes>) {
    log::info!("Geo-Dokument geladen: {} Nodes", nodes.len());
    state.sources.geo_nodes = nodes;
    mark_success(state, FetchSource::GeoDocument);
}

/// Ersetzt die Fakultaets-Records.
pub fn replace_faculty(state: &mut AppState, records: Arc<Vec<FacultyRecord>>) {
    log::info!("Fakultaet geladen: {} Eintraege", records.len());
    state.sources.faculty = records;
    mark_success(state, FetchSource::Faculty);
}

/// Ersetzt die Kurs-Records.
pub fn replace_courses(state: &mut AppState, records: Arc<Vec<CourseRecord>>) {
    log::info!("Kurse geladen: {} Eintraege", records.len());
    state.sources.courses = records;
    mark_success(state, FetchSource::Courses);
}

/// Baut den Marker-Index aus den aktuellen Quellen komplett neu.
pub fn rebuild(state: &mut AppState) {
    let index = MarkerIndex::build(
        &state.sources.geo_nodes,
        &state.sources.faculty,
        &state.sources.courses,
        &state.options,
    );
    state.index = Arc::new(index);
    super::selection::repoint_after_rebuild(state);
}

/// Protokolliert einen fehlgeschlagenen Fetch. Quellen und Index bleiben.
pub fn log_fetch_failure(state: &mut AppState, source: FetchSource, message: &str) {
    log::warn!("{} konnte nicht geladen werden: {}", source.label(), message);
    state.load_status.mark_loaded(source);
    state.load_status.last_error = Some(FetchFailure {
        source,
        message: message.to_string(),
    });
}

fn mark_success(state: &mut AppState, source: FetchSource) {
    state.load_status.mark_loaded(source);
    state.load_status.clear_error_from(source);
}
