//! Feature-Filter: entscheidet, welche Nodes als Marker erscheinen.

use super::{GeoNode, TagKey};
use crate::shared::MapOptions;

/// Anzeige-Kategorie eines OSM-Nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureCategory {
    Building,
    Amenity,
    Office,
    /// Kein erkannter Tag, aber ein `name`
    Named,
}

impl FeatureCategory {
    /// Bezeichner fuer Logs und Detail-Panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Amenity => "amenity",
            Self::Office => "office",
            Self::Named => "named",
        }
    }

    /// Marker-Farbe dieser Kategorie.
    pub fn color(self, options: &MapOptions) -> [f32; 4] {
        match self {
            Self::Building => options.color_building,
            Self::Amenity => options.color_amenity,
            Self::Office => options.color_office,
            Self::Named => options.color_named,
        }
    }
}

/// Klassifiziert einen Node. `None` = nicht anzeigen.
///
/// Reihenfolge ist fest, der erste Treffer gewinnt:
/// `building` → `amenity` → `office` → `name`.
pub fn classify(node: &GeoNode) -> Option<FeatureCategory> {
    let tags = &node.tags;
    if tags.contains(&TagKey::Building) {
        Some(FeatureCategory::Building)
    } else if tags.contains(&TagKey::Amenity) {
        Some(FeatureCategory::Amenity)
    } else if tags.contains(&TagKey::Office) {
        Some(FeatureCategory::Office)
    } else if tags.contains(&TagKey::Name) {
        Some(FeatureCategory::Named)
    } else {
        None
    }
}
