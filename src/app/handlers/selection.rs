//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MarkerId;

/// Selektiert einen Marker nach Karten-Klick.
pub fn select_marker(state: &mut AppState, marker_id: &MarkerId) {
    use_cases::selection::select_marker(state, marker_id);
}

/// Selektiert ein Fakultaetsmitglied aus der Liste.
pub fn select_faculty(state: &mut AppState, faculty_id: &str) {
    use_cases::selection::select_faculty(state, faculty_id);
}

/// Selektiert einen Raum aus der Liste.
pub fn select_room(state: &mut AppState, room: &str) {
    use_cases::selection::select_room(state, room);
}
