//! Typisierte OSM-Tags: feste Schluesselmenge plus `Other`-Bucket.

use indexmap::IndexMap;

/// Bekannter Tag-Schluessel eines OSM-Nodes.
///
/// Nur die fuer die Klassifizierung relevanten Schluessel sind eigene
/// Varianten, alles andere landet unveraendert in [`TagKey::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKey {
    /// `building=*`
    Building,
    /// `amenity=*`
    Amenity,
    /// `office=*`
    Office,
    /// `name=*`
    Name,
    /// Jeder andere Schluessel (z.B. `addr:street`, `level`)
    Other(String),
}

impl TagKey {
    /// Ordnet einen Roh-Schluessel aus dem Dokument zu (case-sensitive).
    pub fn parse(raw: &str) -> Self {
        match raw {
            "building" => Self::Building,
            "amenity" => Self::Amenity,
            "office" => Self::Office,
            "name" => Self::Name,
            other => Self::Other(other.to_string()),
        }
    }

    /// Schluessel so, wie er im Dokument steht.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Building => "building",
            Self::Amenity => "amenity",
            Self::Office => "office",
            Self::Name => "name",
            Self::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for TagKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag-Menge eines Nodes in Dokument-Reihenfolge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    entries: IndexMap<TagKey, String>,
}

impl Tags {
    /// Erstellt eine leere Tag-Menge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt einen Tag. Ein doppelter Schluessel ueberschreibt den Wert.
    pub fn insert(&mut self, key: TagKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    /// Wert zu einem Schluessel.
    pub fn get(&self, key: &TagKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Prueft, ob der Schluessel vorhanden ist.
    pub fn contains(&self, key: &TagKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Inhalt des `name`-Tags.
    pub fn name(&self) -> Option<&str> {
        self.get(&TagKey::Name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert in Dokument-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&TagKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for (key, value) in iter {
            tags.insert(TagKey::parse(key.as_ref()), value);
        }
        tags
    }
}
