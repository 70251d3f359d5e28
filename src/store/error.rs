//! Fehler-Taxonomie des Remote-Stores.

use thiserror::Error;

/// Fehler einer Store-Abfrage oder -Mutation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unbekannte Tabelle: {0}")]
    UnknownTable(String),
    #[error("unbekannte Funktion: {0}")]
    UnknownFunction(String),
    #[error("ungueltige Zeile fuer {table}: {reason}")]
    InvalidRow { table: String, reason: String },
    #[error("Backend-Fehler: {0}")]
    Backend(String),
}
