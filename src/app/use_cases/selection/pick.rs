//! Use-Case: Auswahl per Karten-Klick.

use crate::app::state::SelectedItem;
use crate::app::AppState;
use crate::core::MarkerId;

use super::helpers::{apply_selection, entity_from_source};

/// Selektiert den Marker mit der gegebenen ID.
///
/// Unbekannte IDs (z.B. ein Klick auf einen Marker, der zwischen Hit-Test
/// und Verarbeitung durch einen Rebuild verschwunden ist) aendern nichts.
pub fn select_marker(state: &mut AppState, marker_id: &MarkerId) {
    let Some(marker) = state.index.get(marker_id) else {
        log::debug!("Klick auf unbekannten Marker {marker_id}");
        return;
    };

    let item = SelectedItem {
        id: marker.id.clone(),
        kind: marker.kind,
        entity: entity_from_source(&marker.source),
    };
    apply_selection(state, item);
}
