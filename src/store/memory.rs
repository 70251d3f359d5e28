//! In-Memory-Implementierung des Remote-Stores.

use std::sync::RwLock;

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde_json::Value;

use super::query::{sort_rows, Filter, Order, Query};
use super::{RemoteStore, Row, StoreError};
use super::{COURSES_TABLE, FACULTY_TABLE, PUBLIC_FACULTY_FUNCTION};

/// Spalten, die die oeffentliche Fakultaets-Projektion weitergibt.
pub const PUBLIC_FACULTY_COLUMNS: &[&str] = &[
    "id",
    "name",
    "title",
    "department",
    "email",
    "phone",
    "linkedin",
    "office",
    "image_url",
    "education",
    "specialization",
    "category",
    "display_order",
    "email_display_order",
    "phone_display_order",
    "linkedin_display_order",
    "office_display_order",
    "education_display_order",
    "specialization_display_order",
    "latitude",
    "longitude",
];

#[derive(Default)]
struct Tables {
    rows: IndexMap<String, Vec<Row>>,
    next_id: u64,
}

/// Store mit Tabellen im Speicher, threadsicher ueber `RwLock`.
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Leerer Store mit den Standard-Tabellen.
    pub fn new() -> Self {
        let mut tables = Tables::default();
        tables.rows.insert(FACULTY_TABLE.to_string(), Vec::new());
        tables.rows.insert(COURSES_TABLE.to_string(), Vec::new());
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Laedt Tabellen aus JSON: `{ "<tabelle>": [ {..}, .. ], .. }`.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("Store-Fixture ist kein JSON")?;
        let Value::Object(tables) = value else {
            bail!("Store-Fixture muss ein Objekt mit Tabellen sein");
        };

        let store = Self::new();
        {
            let mut guard = store
                .tables
                .write()
                .map_err(|_| anyhow::anyhow!("Store-Lock vergiftet"))?;
            for (table, rows) in tables {
                let Value::Array(rows) = rows else {
                    bail!("Tabelle '{}' ist keine Liste", table);
                };
                let rows: Vec<Row> = rows
                    .into_iter()
                    .filter_map(|row| match row {
                        Value::Object(map) => Some(map),
                        other => {
                            log::warn!("{}: Eintrag ist kein Objekt: {}", table, other);
                            None
                        }
                    })
                    .collect();
                guard.rows.insert(table, rows);
            }
        }

        Ok(store)
    }

    /// Laedt die Fixture-Datei von der Platte.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Store-Fixture nicht lesbar: {}", path.display()))?;
        let store = Self::from_json_str(&content)?;
        log::info!("Store-Fixture geladen aus: {}", path.display());
        Ok(store)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::Backend("Store-Lock vergiftet".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::Backend("Store-Lock vergiftet".to_string()))
    }
}

fn project(row: &Row, columns: &[&str]) -> Row {
    row.iter()
        .filter(|(key, _)| columns.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

impl RemoteStore for InMemoryStore {
    fn select(&self, query: &Query) -> Result<Vec<Row>, StoreError> {
        let tables = self.read()?;
        let rows = tables
            .rows
            .get(&query.table)
            .ok_or_else(|| StoreError::UnknownTable(query.table.clone()))?;

        let mut result: Vec<Row> = rows.iter().filter(|r| query.matches(r)).cloned().collect();
        query.sort_rows(&mut result);
        Ok(result)
    }

    fn call(&self, function: &str) -> Result<Vec<Row>, StoreError> {
        if function != PUBLIC_FACULTY_FUNCTION {
            return Err(StoreError::UnknownFunction(function.to_string()));
        }

        let tables = self.read()?;
        let rows = tables
            .rows
            .get(FACULTY_TABLE)
            .ok_or_else(|| StoreError::UnknownTable(FACULTY_TABLE.to_string()))?;

        let mut result: Vec<Row> = rows
            .iter()
            .map(|r| project(r, PUBLIC_FACULTY_COLUMNS))
            .collect();
        sort_rows(
            &mut result,
            &[
                Order {
                    column: "display_order".to_string(),
                    ascending: true,
                },
                Order {
                    column: "name".to_string(),
                    ascending: true,
                },
            ],
        );
        Ok(result)
    }

    fn insert(&self, table: &str, mut row: Row) -> Result<Row, StoreError> {
        let mut tables = self.write()?;
        tables.next_id += 1;
        let generated = format!("gen-{}", tables.next_id);

        let rows = tables
            .rows
            .get_mut(table)
            .ok_or_else(|| StoreError::UnknownTable(table.to_string()))?;

        let id = match row.get("id") {
            None | Some(Value::Null) => {
                row.insert("id".to_string(), Value::String(generated));
                row.get("id").cloned().unwrap_or(Value::Null)
            }
            Some(id) => id.clone(),
        };
        if rows.iter().any(|r| r.get("id") == Some(&id)) {
            return Err(StoreError::InvalidRow {
                table: table.to_string(),
                reason: format!("id {} existiert bereits", id),
            });
        }

        rows.push(row.clone());
        log::debug!("{}: Zeile {} eingefuegt", table, id);
        Ok(row)
    }

    fn update(&self, table: &str, filter: &Filter, changes: Row) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        let rows = tables
            .rows
            .get_mut(table)
            .ok_or_else(|| StoreError::UnknownTable(table.to_string()))?;

        let mut count = 0;
        for row in rows.iter_mut().filter(|r| filter.matches(r)) {
            for (key, value) in &changes {
                row.insert(key.clone(), value.clone());
            }
            count += 1;
        }
        Ok(count)
    }

    fn delete(&self, table: &str, filter: &Filter) -> Result<usize, StoreError> {
        let mut tables = self.write()?;
        let rows = tables
            .rows
            .get_mut(table)
            .ok_or_else(|| StoreError::UnknownTable(table.to_string()))?;

        let before = rows.len();
        rows.retain(|r| !filter.matches(r));
        Ok(before - rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap_or_default()
    }

    fn fixture() -> InMemoryStore {
        InMemoryStore::from_json_str(
            r#"{
                "faculty_members": [
                    {"id": "f2", "name": "Zeki", "display_order": 1, "internal_note": "x"},
                    {"id": "f1", "name": "Ali", "display_order": 1}
                ],
                "courses": [
                    {"id": "c1", "room": "A1"},
                    {"id": "c2", "room": "B2"}
                ]
            }"#,
        )
        .expect("Fixture erwartet")
    }

    #[test]
    fn select_filters_rows() {
        let store = fixture();
        let rows = store
            .select(&Query::table(COURSES_TABLE).filter(Filter::eq("room", "B2")))
            .expect("Select erwartet");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("id"), Some(&json!("c2")));
    }

    #[test]
    fn unknown_table_is_an_error() {
        let err = fixture()
            .select(&Query::table("nope"))
            .expect_err("Fehler erwartet");
        assert!(matches!(err, StoreError::UnknownTable(t) if t == "nope"));
    }

    #[test]
    fn public_projection_drops_internal_columns_and_orders() {
        let rows = fixture()
            .call(PUBLIC_FACULTY_FUNCTION)
            .expect("Call erwartet");
        assert_eq!(rows[0].get("id"), Some(&json!("f1")));
        assert!(rows.iter().all(|r| !r.contains_key("internal_note")));
    }

    #[test]
    fn unknown_function_is_an_error() {
        assert!(matches!(
            fixture().call("drop_everything"),
            Err(StoreError::UnknownFunction(_))
        ));
    }

    #[test]
    fn insert_generates_id_and_rejects_duplicates() {
        let store = fixture();
        let inserted = store
            .insert(FACULTY_TABLE, row(json!({"name": "Yeni"})))
            .expect("Insert erwartet");
        assert!(inserted.get("id").and_then(Value::as_str).is_some());

        let dup = store.insert(FACULTY_TABLE, row(json!({"id": "f1"})));
        assert!(matches!(dup, Err(StoreError::InvalidRow { .. })));
    }

    #[test]
    fn update_and_delete_report_counts() {
        let store = fixture();
        let updated = store
            .update(
                COURSES_TABLE,
                &Filter::eq("id", "c1"),
                row(json!({"room": "C3"})),
            )
            .expect("Update erwartet");
        assert_eq!(updated, 1);

        let deleted = store
            .delete(COURSES_TABLE, &Filter::eq("room", "C3"))
            .expect("Delete erwartet");
        assert_eq!(deleted, 1);
        assert_eq!(
            store
                .select(&Query::table(COURSES_TABLE))
                .map(|r| r.len())
                .unwrap_or_default(),
            1
        );
    }

    #[test]
    fn non_object_fixture_is_rejected() {
        assert!(InMemoryStore::from_json_str("[1, 2]").is_err());
        assert!(InMemoryStore::from_json_str("{\"courses\": 3}").is_err());
    }
}
