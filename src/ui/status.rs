//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::MapCamera;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, camera: &MapCamera) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Marker: {} | Fakultät: {} | Kurse: {} | Geo-Nodes: {}",
                state.marker_count(),
                state.sources.faculty.len(),
                state.sources.courses.len(),
                state.sources.geo_nodes.len()
            ));

            ui.separator();

            ui.label(format!("Zoom: {:.1}", camera.zoom));

            ui.separator();

            match state.selection.selected_id() {
                Some(id) => ui.label(format!("Auswahl: {}", id)),
                None => ui.label("Auswahl: -"),
            };

            if state.load_status.is_loading() {
                ui.separator();
                ui.spinner();
                ui.label("Lade…");
            }

            if let Some(ref msg) = state.load_status.last_error {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
