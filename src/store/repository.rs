//! Typisierte Lese-Operationen ueber dem Remote-Store.

use super::{Query, RemoteStore, StoreError};
use super::{COURSES_TABLE, FACULTY_TABLE, PUBLIC_FACULTY_FUNCTION};
use crate::core::{decode_rows, CourseRecord, FacultyRecord};

/// Oeffentliche Fakultaetsdaten ueber die Read-only-Projektion.
pub fn fetch_public_faculty(store: &dyn RemoteStore) -> Result<Vec<FacultyRecord>, StoreError> {
    let rows = store.call(PUBLIC_FACULTY_FUNCTION)?;
    Ok(decode_rows(&rows, FacultyRecord::from_row, FACULTY_TABLE))
}

/// Vollstaendige Fakultaetstabelle, sortiert wie in der Verwaltung.
pub fn fetch_faculty(store: &dyn RemoteStore) -> Result<Vec<FacultyRecord>, StoreError> {
    let query = Query::table(FACULTY_TABLE)
        .order_by("display_order", true)
        .order_by("name", true);
    let rows = store.select(&query)?;
    Ok(decode_rows(&rows, FacultyRecord::from_row, FACULTY_TABLE))
}

/// Alle Kurstermine, sortiert nach Kurs-Code.
pub fn fetch_courses(store: &dyn RemoteStore) -> Result<Vec<CourseRecord>, StoreError> {
    let query = Query::table(COURSES_TABLE).order_by("code", true);
    let rows = store.select(&query)?;
    Ok(decode_rows(&rows, CourseRecord::from_row, COURSES_TABLE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn malformed_rows_are_defaulted_or_skipped() {
        let store = InMemoryStore::from_json_str(
            r#"{
                "faculty_members": [
                    {"id": "f1", "name": "Ayşe", "latitude": 39.9, "longitude": 32.8},
                    {"name": "ohne id"},
                    {"id": "f2", "name": null, "display_order": "kaputt"}
                ],
                "courses": [
                    {"id": "c2", "code": "PHYS101", "room": "B2"},
                    {"id": "c1", "code": "CENG101", "room": "A1"}
                ]
            }"#,
        )
        .expect("Fixture erwartet");

        let faculty = fetch_public_faculty(&store).expect("Fetch erwartet");
        assert_eq!(faculty.len(), 2);
        let f2 = faculty.iter().find(|f| f.id == "f2").expect("f2 erwartet");
        assert_eq!(f2.name, "");
        assert_eq!(f2.display_order, 0);

        let courses = fetch_courses(&store).expect("Fetch erwartet");
        let codes: Vec<&str> = courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["CENG101", "PHYS101"]);
    }

    #[test]
    fn admin_listing_is_ordered() {
        let store = InMemoryStore::from_json_str(
            r#"{"faculty_members": [
                {"id": "a", "name": "Zehra", "display_order": 0},
                {"id": "b", "name": "Emre", "display_order": 0},
                {"id": "c", "name": "Ahmet", "display_order": 5}
            ]}"#,
        )
        .expect("Fixture erwartet");

        let ids: Vec<String> = fetch_faculty(&store)
            .expect("Fetch erwartet")
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
