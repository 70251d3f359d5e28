use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{GeoNodes, MarkerId};

use super::map_intent_to_commands;

#[test]
fn loaded_document_maps_to_replace_and_rebuild_in_order() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::GeoDocumentLoaded {
            result: Ok(GeoNodes::new()),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ReplaceGeoNodes { .. }));
    assert!(matches!(commands[1], AppCommand::RebuildMarkerIndex));
}

#[test]
fn failed_fetch_maps_to_single_log_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CoursesFetched {
            result: Err("Verbindung abgelehnt".into()),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        AppCommand::LogFetchFailure { message, .. } if message == "Verbindung abgelehnt"
    ));
}

#[test]
fn click_without_hit_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::MarkerClicked { marker_id: None });

    assert!(commands.is_empty());
}

#[test]
fn click_with_hit_maps_to_select_marker() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MarkerClicked {
            marker_id: Some(MarkerId::room("A1")),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        AppCommand::SelectMarker { marker_id } if marker_id.as_str() == "room:A1"
    ));
}
