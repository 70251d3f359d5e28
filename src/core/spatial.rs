//! Spatial-Index (KD-Tree) fuer schnelle Marker-Abfragen in projizierten Metern.

use glam::DVec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use super::MarkerId;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Markers
    pub id: MarkerId,
    /// Euklidische Distanz zum Suchpunkt (Meter)
    pub distance: f64,
}

/// Read-only Spatial-Index ueber Marker-Positionen.
///
/// Jede Position steht genau einmal im KD-Tree; Marker an identischer
/// Position teilen sich einen Eintrag. Der Tree vertraegt nicht beliebig
/// viele Punkte mit gleicher Koordinate (z.B. fehlende `lat`/`lon` = 0.0).
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    /// Marker-IDs je Tree-Eintrag, in Einfuege-Reihenfolge
    slots: Vec<Vec<MarkerId>>,
    len: usize,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Baut einen neuen Index aus (ID, Position)-Paaren.
    pub fn from_points<'a>(points: impl IntoIterator<Item = (&'a MarkerId, DVec2)>) -> Self {
        let mut slot_by_position: IndexMap<[u64; 2], usize> = IndexMap::new();
        let mut slots: Vec<Vec<MarkerId>> = Vec::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut len = 0;

        for (id, position) in points {
            // -0.0 und 0.0 sind dieselbe Position
            let key = [(position.x + 0.0).to_bits(), (position.y + 0.0).to_bits()];
            let slot = *slot_by_position.entry(key).or_insert_with(|| {
                entries.push([position.x, position.y]);
                slots.push(Vec::new());
                slots.len() - 1
            });
            slots[slot].push(id.clone());
            len += 1;
        }

        let tree: KdTree<f64, 2> = (&entries).into();
        Self { tree, slots, len }
    }

    /// Anzahl indexierter Positionen.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true`, wenn keine Positionen im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Naechster Marker zur Position, sofern innerhalb von `max_distance`.
    ///
    /// Bei mehreren Markern an derselben Position gewinnt der zuerst
    /// eingefuegte.
    pub fn nearest_within(&self, query: DVec2, max_distance: f64) -> Option<SpatialMatch> {
        if self.is_empty() || max_distance.is_sign_negative() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let distance = result.distance.sqrt();
        if distance > max_distance {
            return None;
        }
        let id = self.slots.get(result.item as usize)?.first()?.clone();

        Some(SpatialMatch { id, distance })
    }

    /// Alle Marker innerhalb eines Radius, aufsteigend nach Distanz.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let ids = self.slots.get(entry.item as usize)?;
                let distance = entry.distance.sqrt();
                Some(ids.iter().map(move |id| SpatialMatch {
                    id: id.clone(),
                    distance,
                }))
            })
            .flatten()
            .collect::<Vec<_>>();

        // stabil: gleiche Distanz behaelt die Einfuege-Reihenfolge je Position
        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SpatialIndex {
        let ids = [
            MarkerId::place("1"),
            MarkerId::place("2"),
            MarkerId::place("3"),
        ];
        let positions = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(4.0, 3.0),
        ];
        SpatialIndex::from_points(ids.iter().zip(positions))
    }

    #[test]
    fn nearest_returns_expected_marker() {
        let hit = sample()
            .nearest_within(DVec2::new(3.9, 2.9), 1.0)
            .expect("Treffer erwartet");
        assert_eq!(hit.id, MarkerId::place("3"));
        assert!(hit.distance < 0.2);
    }

    #[test]
    fn nearest_outside_radius_is_none() {
        assert!(sample().nearest_within(DVec2::new(50.0, 50.0), 5.0).is_none());
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let ids: Vec<MarkerId> = sample()
            .within_radius(DVec2::ZERO, 6.0)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![MarkerId::place("1"), MarkerId::place("3")]);
    }

    #[test]
    fn many_markers_on_one_position_are_indexed() {
        let ids: Vec<MarkerId> = (0..100).map(|i| MarkerId::place(&i.to_string())).collect();
        let index = SpatialIndex::from_points(ids.iter().map(|id| (id, DVec2::ZERO)));

        assert_eq!(index.len(), 100);
        let hit = index
            .nearest_within(DVec2::new(1.0, 0.0), 2.0)
            .expect("Treffer erwartet");
        assert_eq!(hit.id, MarkerId::place("0"));

        let all = index.within_radius(DVec2::ZERO, 0.5);
        assert_eq!(all.len(), 100);
        assert_eq!(all[99].id, MarkerId::place("99"));
    }

    #[test]
    fn shared_position_next_to_distinct_points() {
        let ids = [
            MarkerId::place("a"),
            MarkerId::place("b"),
            MarkerId::place("c"),
        ];
        let positions = [
            DVec2::new(5.0, 5.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(5.0, 5.0),
        ];
        let index = SpatialIndex::from_points(ids.iter().zip(positions));

        let near: Vec<MarkerId> = index
            .within_radius(DVec2::new(5.0, 5.0), 1.0)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(near, vec![MarkerId::place("a"), MarkerId::place("c")]);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();
        assert!(index.is_empty());
        assert!(index.nearest_within(DVec2::ZERO, 100.0).is_none());
    }
}
