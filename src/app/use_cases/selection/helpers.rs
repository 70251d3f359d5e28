//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use std::sync::Arc;

use crate::app::state::{SelectedEntity, SelectedItem, SelectionState, ViewRequest};
use crate::app::AppState;
use crate::core::MarkerSource;

/// Entitaet hinter einer Marker-Quelle.
pub(super) fn entity_from_source(source: &MarkerSource) -> SelectedEntity {
    match source {
        MarkerSource::Faculty(record) => SelectedEntity::Faculty(Arc::clone(record)),
        MarkerSource::Room(room) => SelectedEntity::Room(Arc::clone(room)),
        MarkerSource::Place(node, category) => SelectedEntity::Place(Arc::clone(node), *category),
    }
}

/// Setzt die Auswahl und fordert bei bekannter Koordinate eine Kamerafahrt an.
///
/// Ersetzt eine bestehende Auswahl immer; ohne Koordinate bleibt die
/// Ansicht unveraendert.
pub(super) fn apply_selection(state: &mut AppState, item: SelectedItem) {
    match item.entity.coordinate() {
        Some(center) => state.view.request(ViewRequest::AnimateTo {
            center,
            zoom: state.options.select_zoom,
            duration_ms: state.options.select_animation_ms,
        }),
        None => log::debug!("{} hat keine Koordinate, Ansicht bleibt", item.id),
    }

    log::info!("Auswahl: {}", item.id);
    state.selection = SelectionState::Selected(item);
}

/// Zeigt eine bestehende Auswahl nach einem Index-Rebuild auf die frische
/// Entitaet. Existiert die ID nicht mehr, bleibt die alte Auswahl stehen.
///
/// Loest keine Kamerafahrt aus.
pub fn repoint_after_rebuild(state: &mut AppState) {
    let SelectionState::Selected(item) = &state.selection else {
        return;
    };

    let fresh = match &item.entity {
        SelectedEntity::Faculty(record) => state
            .index
            .faculty(&record.id)
            .map(|r| SelectedEntity::Faculty(Arc::clone(r))),
        SelectedEntity::Room(room) => state
            .index
            .room(&room.room)
            .map(|r| SelectedEntity::Room(Arc::clone(r))),
        SelectedEntity::Place(..) => state
            .index
            .get(&item.id)
            .map(|marker| entity_from_source(&marker.source)),
    };

    match fresh {
        Some(entity) => {
            if let SelectionState::Selected(item) = &mut state.selection {
                item.entity = entity;
            }
        }
        None => log::debug!("Ausgewaehlte ID {} nicht mehr im Index", item.id),
    }
}
