//! Remote-Store: generische Zeilen-Schnittstelle zum Backend.
//!
//! Die Karte behandelt das Backend als opaken Zeilen-Store mit benannten
//! Tabellen und Funktionen. `InMemoryStore` implementiert die Schnittstelle
//! fuer Tests und den Offline-Betrieb aus einer JSON-Fixture.

pub mod error;
pub mod memory;
pub mod query;
pub mod repository;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use query::{Filter, Order, Query};
pub use repository::{fetch_courses, fetch_faculty, fetch_public_faculty};

pub use crate::core::Row;

/// Tabelle der Fakultaetsmitglieder.
pub const FACULTY_TABLE: &str = "faculty_members";
/// Tabelle der Kurstermine.
pub const COURSES_TABLE: &str = "courses";
/// Read-only Projektion mit den oeffentlichen Fakultaetsfeldern.
pub const PUBLIC_FACULTY_FUNCTION: &str = "get_public_faculty_members";

/// Zeilen-orientierter Remote-Store.
pub trait RemoteStore: Send + Sync {
    /// Gefilterte, sortierte Zeilen einer Tabelle.
    fn select(&self, query: &Query) -> Result<Vec<Row>, StoreError>;

    /// Ruft eine benannte Read-only-Funktion auf.
    fn call(&self, function: &str) -> Result<Vec<Row>, StoreError>;

    /// Fuegt eine Zeile ein und liefert sie (inkl. vergebener `id`) zurueck.
    fn insert(&self, table: &str, row: Row) -> Result<Row, StoreError>;

    /// Aktualisiert passende Zeilen spaltenweise. Liefert die Anzahl.
    fn update(&self, table: &str, filter: &Filter, changes: Row) -> Result<usize, StoreError>;

    /// Loescht passende Zeilen. Liefert die Anzahl.
    fn delete(&self, table: &str, filter: &Filter) -> Result<usize, StoreError>;
}
