use std::sync::Arc;

use crate::core::{
    FacultyRecord, FeatureCategory, GeoNode, LatLon, MarkerId, MarkerKind, RoomEntry,
};

/// Entitaet hinter einer Auswahl.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedEntity {
    Faculty(Arc<FacultyRecord>),
    Room(Arc<RoomEntry>),
    Place(Arc<GeoNode>, FeatureCategory),
}

impl SelectedEntity {
    /// Koordinate der Entitaet, falls bekannt.
    pub fn coordinate(&self) -> Option<LatLon> {
        match self {
            Self::Faculty(record) => record.coordinate,
            Self::Room(room) => room.coordinate,
            Self::Place(node, _) => Some(LatLon::new(node.lat, node.lon)),
        }
    }
}

/// Aktuell ausgewaehltes Element.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub id: MarkerId,
    pub kind: MarkerKind,
    pub entity: SelectedEntity,
}

/// Auswahl-Zustandsmaschine: keine Auswahl oder genau ein Element.
///
/// Einmal gesetzt, wird die Auswahl nur ersetzt, nie geloescht.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Selected(SelectedItem),
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::NoSelection
    }

    pub fn selected(&self) -> Option<&SelectedItem> {
        match self {
            Self::NoSelection => None,
            Self::Selected(item) => Some(item),
        }
    }

    pub fn selected_id(&self) -> Option<&MarkerId> {
        self.selected().map(|item| &item.id)
    }

    pub fn is_selected(&self, id: &MarkerId) -> bool {
        self.selected_id() == Some(id)
    }
}
