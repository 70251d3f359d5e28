//! Mapping von UI-Intents auf mutierende App-Commands.

use std::sync::Arc;

use super::state::FetchSource;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::GeoDocumentLoaded { result } => match result {
            Ok(nodes) => vec![
                AppCommand::ReplaceGeoNodes {
                    nodes: Arc::new(nodes),
                },
                AppCommand::RebuildMarkerIndex,
            ],
            Err(message) => vec![AppCommand::LogFetchFailure {
                source: FetchSource::GeoDocument,
                message,
            }],
        },
        AppIntent::FacultyFetched { result } => match result {
            Ok(records) => vec![
                AppCommand::ReplaceFaculty {
                    records: Arc::new(records),
                },
                AppCommand::RebuildMarkerIndex,
            ],
            Err(message) => vec![AppCommand::LogFetchFailure {
                source: FetchSource::Faculty,
                message,
            }],
        },
        AppIntent::CoursesFetched { result } => match result {
            Ok(records) => vec![
                AppCommand::ReplaceCourses {
                    records: Arc::new(records),
                },
                AppCommand::RebuildMarkerIndex,
            ],
            Err(message) => vec![AppCommand::LogFetchFailure {
                source: FetchSource::Courses,
                message,
            }],
        },
        // Klick ins Leere: Auswahl bleibt stehen
        AppIntent::MarkerClicked { marker_id: None } => vec![],
        AppIntent::MarkerClicked {
            marker_id: Some(marker_id),
        } => vec![AppCommand::SelectMarker { marker_id }],
        AppIntent::FacultyListEntryActivated { faculty_id } => {
            vec![AppCommand::SelectFaculty { faculty_id }]
        }
        AppIntent::RoomListEntryActivated { room } => vec![AppCommand::SelectRoom { room }],
        AppIntent::RefreshRequested => vec![AppCommand::RequestRefresh],
    }
}

#[cfg(test)]
mod tests;
