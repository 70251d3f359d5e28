//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{MarkerScene, SceneMarker};

/// Baut die Marker-Szene aus dem aktuellen AppState.
///
/// Der selektierte Marker wird zuletzt eingefuegt, damit er oben liegt.
pub fn build(state: &AppState) -> MarkerScene {
    let mut scene = MarkerScene::new();
    let mut selected = None;

    for marker in state.index.markers() {
        let is_selected = state.selection.is_selected(&marker.id);
        let radius_px = if is_selected {
            state.options.marker_radius_px * state.options.selected_radius_factor
        } else {
            state.options.marker_radius_px
        };
        let scene_marker = SceneMarker {
            id: marker.id.clone(),
            kind: marker.kind,
            position: marker.projected(),
            color: marker.color,
            radius_px,
            selected: is_selected,
            label: marker.label(),
        };

        if is_selected {
            selected = Some(scene_marker);
        } else {
            scene.push(scene_marker);
        }
    }

    if let Some(marker) = selected {
        scene.push(marker);
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{SelectedEntity, SelectedItem, SelectionState};
    use crate::core::{CourseRecord, LatLon, MarkerId, MarkerIndex, MarkerKind};
    use crate::core::{GeoNodes, ScheduleSlot};
    use std::sync::Arc;

    fn course(id: &str, room: &str, lat: f64) -> CourseRecord {
        CourseRecord {
            id: id.into(),
            code: format!("C{id}"),
            name: String::new(),
            instructor: String::new(),
            room: room.into(),
            slot: ScheduleSlot::default(),
            coordinate: Some(LatLon::new(lat, 32.78)),
        }
    }

    #[test]
    fn selected_marker_is_drawn_last_and_larger() {
        let mut state = AppState::new();
        let courses = vec![course("1", "A1", 39.89), course("2", "B2", 39.90)];
        state.index = Arc::new(MarkerIndex::build(
            &GeoNodes::new(),
            &[],
            &courses,
            &state.options,
        ));
        let room = state
            .index
            .room("A1")
            .cloned()
            .expect("Raum A1 erwartet");
        state.selection = SelectionState::Selected(SelectedItem {
            id: MarkerId::room("A1"),
            kind: MarkerKind::Course,
            entity: SelectedEntity::Room(room),
        });

        let scene = build(&state);
        let order: Vec<&str> = scene.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(order, vec!["room:B2", "room:A1"]);

        let selected = scene.get(&MarkerId::room("A1")).expect("Marker erwartet");
        assert!(selected.selected);
        assert!(selected.radius_px > state.options.marker_radius_px);
    }
}
