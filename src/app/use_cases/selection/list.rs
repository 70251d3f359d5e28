//! Use-Case: Auswahl per Listeneintrag.

use std::sync::Arc;

use crate::app::state::{SelectedEntity, SelectedItem};
use crate::app::AppState;
use crate::core::{MarkerId, MarkerKind};

use super::helpers::apply_selection;

/// Selektiert ein Fakultaetsmitglied, auch wenn es keinen Marker hat.
pub fn select_faculty(state: &mut AppState, faculty_id: &str) {
    let Some(record) = state.index.faculty(faculty_id) else {
        log::debug!("Fakultaetsmitglied {faculty_id} nicht im Index");
        return;
    };

    let item = SelectedItem {
        id: MarkerId::faculty(&record.id),
        kind: MarkerKind::Faculty,
        entity: SelectedEntity::Faculty(Arc::clone(record)),
    };
    apply_selection(state, item);
}

/// Selektiert einen Raum mit allen seinen Kursen.
pub fn select_room(state: &mut AppState, room: &str) {
    let Some(entry) = state.index.room(room) else {
        log::debug!("Raum {room} nicht im Index");
        return;
    };

    let item = SelectedItem {
        id: MarkerId::room(&entry.room),
        kind: MarkerKind::Course,
        entity: SelectedEntity::Room(Arc::clone(entry)),
    };
    apply_selection(state, item);
}
