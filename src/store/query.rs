//! Generische Abfrage-Beschreibung: Tabelle, Spaltenfilter, Sortierung.

use std::cmp::Ordering;

use serde_json::Value;

use crate::core::Row;

/// Gleichheitsfilter auf einer Spalte.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Prueft eine Zeile gegen den Filter.
    pub fn matches(&self, row: &Row) -> bool {
        row.get(&self.column) == Some(&self.value)
    }
}

/// Sortierung nach einer Spalte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// Gefilterte, sortierte Zeilen-Abfrage.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub table: String,
    pub filters: Vec<Filter>,
    pub order: Vec<Order>,
}

impl Query {
    /// Startet eine Abfrage auf einer Tabelle.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filters: Vec::new(),
            order: Vec::new(),
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order.push(Order {
            column: column.into(),
            ascending,
        });
        self
    }

    /// `true`, wenn alle Filter passen.
    pub fn matches(&self, row: &Row) -> bool {
        self.filters.iter().all(|f| f.matches(row))
    }

    /// Sortiert Zeilen stabil nach den Order-Klauseln.
    pub fn sort_rows(&self, rows: &mut [Row]) {
        sort_rows(rows, &self.order);
    }
}

/// Sortiert Zeilen stabil; fehlende Werte liegen hinten.
pub fn sort_rows(rows: &mut [Row], order: &[Order]) {
    rows.sort_by(|a, b| {
        for clause in order {
            let ordering = compare_values(a.get(&clause.column), b.get(&clause.column));
            let ordering = if clause.ascending {
                ordering
            } else {
                ordering.reverse()
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Greater,
        (_, None | Some(Value::Null)) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
