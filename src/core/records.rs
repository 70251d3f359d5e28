//! Externe Datensaetze aus dem Remote-Store: Fakultaetsmitglieder und Kurse.
//!
//! Die Records werden nicht besessen, sondern bei jedem Fetch neu dekodiert.
//! Fehlende oder falsch typisierte Felder fallen auf leer/abwesend zurueck,
//! statt den ganzen Batch zu verwerfen. Nur eine fehlende `id` verwirft die Zeile.

use indexmap::IndexMap;
use serde_json::Value;

use super::LatLon;

/// Eine Tabellenzeile aus dem Remote-Store.
pub type Row = serde_json::Map<String, Value>;

/// Kategorie fuer Mitglieder ohne `category`.
pub const DEFAULT_CATEGORY: &str = "Diğer";

/// Fakultaetsmitglied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacultyRecord {
    pub id: String,
    pub name: String,
    pub title: String,
    pub department: String,
    pub office: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub image_url: Option<String>,
    pub education: Option<String>,
    pub specialization: Option<String>,
    pub category: Option<String>,
    pub display_order: i32,
    pub office_display_order: i32,
    pub email_display_order: i32,
    pub phone_display_order: i32,
    pub linkedin_display_order: i32,
    pub education_display_order: i32,
    pub specialization_display_order: i32,
    pub coordinate: Option<LatLon>,
}

/// Ein anzeigbares Profilfeld im Detail-Panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub order: i32,
    /// Wert ist eine URL (LinkedIn-Profil)
    pub is_link: bool,
}

impl FacultyRecord {
    /// Dekodiert eine Store-Zeile. `None`, wenn keine `id` vorhanden ist.
    pub fn from_row(row: &Row) -> Option<Self> {
        let id = id_field(row)?;
        Some(Self {
            id,
            name: text_field(row, "name").unwrap_or_default(),
            title: text_field(row, "title").unwrap_or_default(),
            department: text_field(row, "department").unwrap_or_default(),
            office: text_field(row, "office"),
            email: text_field(row, "email"),
            phone: text_field(row, "phone"),
            linkedin: text_field(row, "linkedin"),
            image_url: text_field(row, "image_url"),
            education: text_field(row, "education"),
            specialization: text_field(row, "specialization"),
            category: text_field(row, "category"),
            display_order: int_field(row, "display_order"),
            office_display_order: int_field(row, "office_display_order"),
            email_display_order: int_field(row, "email_display_order"),
            phone_display_order: int_field(row, "phone_display_order"),
            linkedin_display_order: int_field(row, "linkedin_display_order"),
            education_display_order: int_field(row, "education_display_order"),
            specialization_display_order: int_field(row, "specialization_display_order"),
            coordinate: coordinate_fields(row),
        })
    }

    /// Nicht-leere Profilfelder, sortiert nach ihrer Anzeige-Reihenfolge.
    ///
    /// Gleiche Reihenfolge-Werte behalten die feste Grundreihenfolge
    /// (Buero, E-Mail, Telefon, LinkedIn, Ausbildung, Fachgebiet).
    pub fn detail_fields(&self) -> Vec<DetailField> {
        let candidates = [
            ("office", "Oda", &self.office, self.office_display_order, false),
            ("email", "E-posta", &self.email, self.email_display_order, false),
            ("phone", "Telefon", &self.phone, self.phone_display_order, false),
            (
                "linkedin",
                "LinkedIn",
                &self.linkedin,
                self.linkedin_display_order,
                true,
            ),
            (
                "education",
                "Eğitim Geçmişi",
                &self.education,
                self.education_display_order,
                false,
            ),
            (
                "specialization",
                "Uzmanlık Alanı",
                &self.specialization,
                self.specialization_display_order,
                false,
            ),
        ];

        let mut fields: Vec<DetailField> = candidates
            .into_iter()
            .filter_map(|(key, label, value, order, is_link)| {
                value.as_ref().map(|value| DetailField {
                    key,
                    label,
                    value: value.clone(),
                    order,
                    is_link,
                })
            })
            .collect();
        // sort_by_key ist stabil
        fields.sort_by_key(|field| field.order);
        fields
    }

    /// Kategorie fuer die Gruppierung der Liste.
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

/// Gruppiert Mitglieder nach Kategorie.
///
/// Kategorien sind aufsteigend sortiert, Mitglieder innerhalb einer Kategorie
/// nach `display_order`, dann `name`.
pub fn group_by_category(members: &[FacultyRecord]) -> Vec<(String, Vec<&FacultyRecord>)> {
    let mut groups: IndexMap<String, Vec<&FacultyRecord>> = IndexMap::new();
    for member in members {
        groups
            .entry(member.category_or_default().to_string())
            .or_default()
            .push(member);
    }
    groups.sort_keys();

    groups
        .into_iter()
        .map(|(category, mut members)| {
            members.sort_by(|a, b| {
                a.display_order
                    .cmp(&b.display_order)
                    .then_with(|| a.name.cmp(&b.name))
            });
            (category, members)
        })
        .collect()
}

/// Wochentag eines Kurstermins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    #[default]
    Unknown,
}

impl Weekday {
    /// Liest englische/tuerkische Namen, Kuerzel oder ISO-Nummern (1 = Montag).
    pub fn parse(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        match lower.as_str() {
            "1" | "mon" | "monday" | "pzt" | "pazartesi" => Self::Monday,
            "2" | "tue" | "tuesday" | "sal" | "salı" | "sali" => Self::Tuesday,
            "3" | "wed" | "wednesday" | "çar" | "çarşamba" | "carsamba" => Self::Wednesday,
            "4" | "thu" | "thursday" | "per" | "perşembe" | "persembe" => Self::Thursday,
            "5" | "fri" | "friday" | "cum" | "cuma" => Self::Friday,
            "6" | "sat" | "saturday" | "cmt" | "cumartesi" => Self::Saturday,
            "7" | "sun" | "sunday" | "paz" | "pazar" => Self::Sunday,
            _ => Self::Unknown,
        }
    }

    /// Tuerkischer Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Pazartesi",
            Self::Tuesday => "Salı",
            Self::Wednesday => "Çarşamba",
            Self::Thursday => "Perşembe",
            Self::Friday => "Cuma",
            Self::Saturday => "Cumartesi",
            Self::Sunday => "Pazar",
            Self::Unknown => "?",
        }
    }
}

/// Woechentlicher Termin eines Kurses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleSlot {
    pub day: Weekday,
    /// Roh-Startzeit, z.B. `"09:30"`
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleSlot {
    /// Startzeit in Minuten seit Mitternacht (unlesbar → `u32::MAX`).
    pub fn start_minutes(&self) -> u32 {
        parse_clock_minutes(&self.start_time).unwrap_or(u32::MAX)
    }
}

/// Parst `HH:MM` oder `HH:MM:SS` in Minuten seit Mitternacht.
pub fn parse_clock_minutes(raw: &str) -> Option<u32> {
    let mut parts = raw.trim().split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Kurs-Termin in einem Raum.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseRecord {
    pub id: String,
    pub code: String,
    pub name: String,
    pub instructor: String,
    pub room: String,
    pub slot: ScheduleSlot,
    pub coordinate: Option<LatLon>,
}

impl CourseRecord {
    /// Dekodiert eine Store-Zeile. `None`, wenn keine `id` vorhanden ist.
    pub fn from_row(row: &Row) -> Option<Self> {
        let id = id_field(row)?;
        Some(Self {
            id,
            code: text_field(row, "code").unwrap_or_default(),
            name: text_field(row, "name").unwrap_or_default(),
            instructor: text_field(row, "instructor").unwrap_or_default(),
            room: text_field(row, "room").unwrap_or_default(),
            slot: ScheduleSlot {
                day: text_field(row, "day")
                    .map(|d| Weekday::parse(&d))
                    .unwrap_or_default(),
                start_time: text_field(row, "start_time").unwrap_or_default(),
                end_time: text_field(row, "end_time").unwrap_or_default(),
            },
            coordinate: coordinate_fields(row),
        })
    }

    /// Anzeige-Titel, z.B. `"CENG101 Programlamaya Giriş"`.
    pub fn display_title(&self) -> String {
        match (self.code.is_empty(), self.name.is_empty()) {
            (false, false) => format!("{} {}", self.code, self.name),
            (false, true) => self.code.clone(),
            (true, false) => self.name.clone(),
            (true, true) => self.id.clone(),
        }
    }
}

/// Dekodiert alle Zeilen, ueberspringt Zeilen ohne `id`.
pub fn decode_rows<T>(rows: &[Row], decode: fn(&Row) -> Option<T>, table: &str) -> Vec<T> {
    let mut skipped = 0usize;
    let records: Vec<T> = rows
        .iter()
        .filter_map(|row| {
            let record = decode(row);
            if record.is_none() {
                skipped += 1;
            }
            record
        })
        .collect();
    if skipped > 0 {
        log::warn!("{}: {} Zeile(n) ohne id uebersprungen", table, skipped);
    }
    records
}

fn id_field(row: &Row) -> Option<String> {
    match row.get("id")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Text-Feld; leere Strings gelten als abwesend.
fn text_field(row: &Row, key: &str) -> Option<String> {
    match row.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn int_field(row: &Row, key: &str) -> i32 {
    match row.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(|v| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn float_field(row: &Row, key: &str) -> Option<f64> {
    match row.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coordinate_fields(row: &Row) -> Option<LatLon> {
    LatLon::from_parts(float_field(row, "latitude"), float_field(row, "longitude"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            other => panic!("Objekt erwartet, erhalten: {other}"),
        }
    }

    #[test]
    fn faculty_row_with_missing_fields_defaults() {
        let record = FacultyRecord::from_row(&row(json!({
            "id": "f1",
            "name": "Ayşe Yılmaz",
            "title": 42,
            "office": "",
            "display_order": "3",
        })))
        .expect("Record erwartet");

        assert_eq!(record.name, "Ayşe Yılmaz");
        assert_eq!(record.title, "42");
        assert_eq!(record.department, "");
        assert_eq!(record.office, None);
        assert_eq!(record.display_order, 3);
        assert_eq!(record.coordinate, None);
    }

    #[test]
    fn row_without_id_is_rejected() {
        assert!(FacultyRecord::from_row(&row(json!({ "name": "X" }))).is_none());
        assert!(CourseRecord::from_row(&row(json!({ "id": "  " }))).is_none());
    }

    #[test]
    fn half_coordinate_is_absent() {
        let record = CourseRecord::from_row(&row(json!({
            "id": 7,
            "room": "A1",
            "latitude": 39.9,
        })))
        .expect("Record erwartet");
        assert_eq!(record.id, "7");
        assert_eq!(record.coordinate, None);
    }

    #[test]
    fn course_row_parses_schedule() {
        let record = CourseRecord::from_row(&row(json!({
            "id": "c1",
            "code": "CENG101",
            "day": "Salı",
            "start_time": "09:30",
            "end_time": "11:20",
            "latitude": "39.9",
            "longitude": 32.8,
        })))
        .expect("Record erwartet");

        assert_eq!(record.slot.day, Weekday::Tuesday);
        assert_eq!(record.slot.start_minutes(), 570);
        assert_eq!(record.coordinate, Some(LatLon::new(39.9, 32.8)));
        assert_eq!(record.display_title(), "CENG101");
    }

    #[test]
    fn clock_parsing_rejects_garbage() {
        assert_eq!(parse_clock_minutes("13:05:00"), Some(785));
        assert_eq!(parse_clock_minutes("25:00"), None);
        assert_eq!(parse_clock_minutes("nine"), None);
    }

    #[test]
    fn detail_fields_follow_display_order() {
        let record = FacultyRecord {
            id: "f1".into(),
            office: Some("B-204".into()),
            email: Some("a@uni.edu.tr".into()),
            linkedin: Some("https://linkedin.com/in/a".into()),
            office_display_order: 2,
            email_display_order: 1,
            linkedin_display_order: 1,
            ..Default::default()
        };

        let keys: Vec<&str> = record.detail_fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["email", "linkedin", "office"]);
        assert!(record.detail_fields()[1].is_link);
    }

    #[test]
    fn grouping_sorts_categories_and_members() {
        let members = vec![
            FacultyRecord {
                id: "1".into(),
                name: "Zeynep".into(),
                category: Some("Profesör".into()),
                display_order: 1,
                ..Default::default()
            },
            FacultyRecord {
                id: "2".into(),
                name: "Ali".into(),
                category: Some("Profesör".into()),
                display_order: 1,
                ..Default::default()
            },
            FacultyRecord {
                id: "3".into(),
                name: "Can".into(),
                ..Default::default()
            },
        ];

        let groups = group_by_category(&members);
        let categories: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(categories, vec![DEFAULT_CATEGORY, "Profesör"]);

        let names: Vec<&str> = groups[1].1.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ali", "Zeynep"]);
    }
}
