//! Karten-Flaeche: Marker zeichnen, Klick → Hit-Test, Pan und Scroll-Zoom.

use glam::DVec2;

use super::to_color32;
use crate::app::{AppIntent, AppState};
use crate::render::{HitTest, MapScene};

/// Zoom-Aenderung pro Scroll-Schritt (Zoomstufen).
const SCROLL_ZOOM_STEP: f64 = 0.25;
/// Scroll-Delta in Punkten, das einem Schritt entspricht.
const SCROLL_POINTS_PER_STEP: f32 = 50.0;

/// Rendert die Karten-Flaeche im CentralPanel und gibt erzeugte Events zurück.
///
/// Pan und Zoom wirken direkt auf die Kamera der `MapScene`; nur aufgeloeste
/// Klicks gehen als `AppIntent::MarkerClicked` an die App.
pub fn render_map_view(
    ctx: &egui::Context,
    scene: &mut MapScene,
    state: &AppState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
            scene.set_viewport(DVec2::new(f64::from(rect.width()), f64::from(rect.height())));

            handle_pan(scene, &response);
            handle_scroll_zoom(ui, scene, &response);

            if response.clicked_by(egui::PointerButton::Primary) {
                if let Some(pointer_pos) = response.interact_pointer_pos() {
                    let marker_id = scene.hit_test_at_pixel(local_pixel(pointer_pos, rect));
                    events.push(AppIntent::MarkerClicked { marker_id });
                }
            }

            paint(ui, scene, rect, &response);

            if state.index.is_empty() {
                let text = if state.load_status.is_loading() {
                    "Harita verileri yükleniyor…"
                } else {
                    "Gösterilecek işaret yok"
                };
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(20.0),
                    egui::Color32::WHITE,
                );
            }
        });

    events
}

fn local_pixel(pos: egui::Pos2, rect: egui::Rect) -> DVec2 {
    let local = pos - rect.min;
    DVec2::new(f64::from(local.x), f64::from(local.y))
}

fn handle_pan(scene: &mut MapScene, response: &egui::Response) {
    if response.dragged_by(egui::PointerButton::Primary)
        || response.dragged_by(egui::PointerButton::Middle)
    {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            scene.pan_pixels(DVec2::new(f64::from(delta.x), f64::from(delta.y)));
        }
    }
}

fn handle_scroll_zoom(ui: &egui::Ui, scene: &mut MapScene, response: &egui::Response) {
    if !response.hovered() {
        return;
    }
    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }

    let focus = response
        .hover_pos()
        .map(|pos| local_pixel(pos, response.rect))
        .unwrap_or(scene.viewport() * 0.5);
    let delta = f64::from(scroll / SCROLL_POINTS_PER_STEP) * SCROLL_ZOOM_STEP;
    scene.zoom_around(delta, focus);
}

fn paint(ui: &egui::Ui, scene: &MapScene, rect: egui::Rect, response: &egui::Response) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(32));

    let origin = rect.min.to_vec2();
    let hovered = response
        .hover_pos()
        .and_then(|pos| scene.hit_test_at_pixel(local_pixel(pos, rect)));

    for marker in scene.draw_order() {
        let pixel = scene.to_pixel(marker.position);
        let center = egui::pos2(pixel.x as f32, pixel.y as f32) + origin;
        if !rect.expand(marker.radius_px).contains(center) {
            continue;
        }

        let stroke = if marker.selected {
            egui::Stroke::new(2.0, egui::Color32::WHITE)
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_black_alpha(160))
        };
        painter.circle(center, marker.radius_px, to_color32(marker.color), stroke);

        if marker.selected || hovered.as_ref() == Some(&marker.id) {
            painter.text(
                center + egui::vec2(0.0, -marker.radius_px - 4.0),
                egui::Align2::CENTER_BOTTOM,
                &marker.label,
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
        }
    }
}
