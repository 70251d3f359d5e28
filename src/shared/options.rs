//! Zentrale Konfiguration fuer die Campus-Karte.
//!
//! `MapOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Datenquellen ────────────────────────────────────────────────────

/// Relativer Pfad des Geo-Dokuments.
pub const GEO_DOCUMENT_PATH: &str = "data/campus.osm";
/// Relativer Pfad der Store-Fixture (JSON mit Tabellen).
pub const STORE_FIXTURE_PATH: &str = "data/store.json";

// ── Start-Ansicht ───────────────────────────────────────────────────

/// Start-Mittelpunkt (Breite, Grad).
pub const INITIAL_LAT: f64 = 39.8914;
/// Start-Mittelpunkt (Laenge, Grad).
pub const INITIAL_LON: f64 = 32.7843;
/// Start-Zoomstufe.
pub const INITIAL_ZOOM: f64 = 16.0;

// ── Selektion ───────────────────────────────────────────────────────

/// Zoomstufe nach dem Zentrieren auf eine Auswahl.
pub const SELECT_ZOOM: f64 = 19.0;
/// Dauer der Kamerafahrt zur Auswahl in Millisekunden.
pub const SELECT_ANIMATION_MS: u32 = 1000;
/// Pick-Radius fuer Klick-Hit-Tests in Screen-Pixeln.
pub const PICK_RADIUS_PX: f64 = 10.0;

// ── Marker-Rendering ───────────────────────────────────────────────

/// Marker-Radius in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 6.0;
/// Radius-Faktor fuer den selektierten Marker.
pub const SELECTED_RADIUS_FACTOR: f32 = 1.6;
/// Gebaeude (RGBA: Blau).
pub const COLOR_BUILDING: [f32; 4] = [0.23, 0.51, 0.96, 1.0];
/// Einrichtungen (RGBA: Gruen).
pub const COLOR_AMENITY: [f32; 4] = [0.13, 0.77, 0.37, 1.0];
/// Bueros (RGBA: Orange).
pub const COLOR_OFFICE: [f32; 4] = [0.98, 0.57, 0.24, 1.0];
/// Nur benannte Nodes (RGBA: Grau).
pub const COLOR_NAMED: [f32; 4] = [0.55, 0.55, 0.60, 1.0];
/// Fakultaetsmitglieder (RGBA: Violett).
pub const COLOR_FACULTY: [f32; 4] = [0.55, 0.36, 0.96, 1.0];
/// Raeume mit Kursen (RGBA: Rot).
pub const COLOR_COURSE: [f32; 4] = [0.94, 0.27, 0.27, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Karten-Optionen.
/// Wird als `campus_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapOptions {
    // ── Datenquellen ────────────────────────────────────────────
    /// Pfad zum OSM-Dokument (relativ zum Arbeitsverzeichnis)
    pub geo_document_path: String,
    /// Pfad zur Store-Fixture
    pub store_fixture_path: String,

    // ── Ansicht ─────────────────────────────────────────────────
    pub initial_lat: f64,
    pub initial_lon: f64,
    pub initial_zoom: f64,

    // ── Selektion ───────────────────────────────────────────────
    /// Zoomstufe beim Zentrieren auf eine Auswahl
    pub select_zoom: f64,
    /// Dauer der Kamerafahrt in Millisekunden
    pub select_animation_ms: u32,
    /// Pick-Radius in Screen-Pixeln
    pub pick_radius_px: f64,

    // ── Marker ──────────────────────────────────────────────────
    pub marker_radius_px: f32,
    pub selected_radius_factor: f32,
    pub color_building: [f32; 4],
    pub color_amenity: [f32; 4],
    pub color_office: [f32; 4],
    pub color_named: [f32; 4],
    pub color_faculty: [f32; 4],
    pub color_course: [f32; 4],
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            geo_document_path: GEO_DOCUMENT_PATH.to_string(),
            store_fixture_path: STORE_FIXTURE_PATH.to_string(),
            initial_lat: INITIAL_LAT,
            initial_lon: INITIAL_LON,
            initial_zoom: INITIAL_ZOOM,
            select_zoom: SELECT_ZOOM,
            select_animation_ms: SELECT_ANIMATION_MS,
            pick_radius_px: PICK_RADIUS_PX,
            marker_radius_px: MARKER_RADIUS_PX,
            selected_radius_factor: SELECTED_RADIUS_FACTOR,
            color_building: COLOR_BUILDING,
            color_amenity: COLOR_AMENITY,
            color_office: COLOR_OFFICE,
            color_named: COLOR_NAMED,
            color_faculty: COLOR_FACULTY,
            color_course: COLOR_COURSE,
        }
    }
}

impl MapOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("campus_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("campus_map.toml")
    }
}
