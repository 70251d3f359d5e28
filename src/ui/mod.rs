//! UI-Komponenten: Verzeichnis, Detail-Panel, Karten-Flaeche, Statusleiste.

/// UI-Layer mit egui
///
/// Panels lesen den AppState nur und geben `AppIntent`s zurueck. Die
/// Karten-Flaeche steuert zusaetzlich die Kamera der `MapScene`.
pub mod detail;
pub mod directory;
pub mod map_view;
pub mod status;

pub use detail::render_detail_panel;
pub use directory::render_directory_panel;
pub use map_view::render_map_view;
pub use status::render_status_bar;

/// RGBA-Float → egui-Farbe.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]).into()
}
