//! Detail-Panel (rechte Seitenleiste) fuer die aktuelle Auswahl.

use crate::app::{AppState, SelectedEntity};
use crate::core::{FacultyRecord, FeatureCategory, GeoNode, RoomEntry};

/// Rendert das Detail-Panel.
pub fn render_detail_panel(ctx: &egui::Context, state: &AppState) {
    egui::SidePanel::right("detail_panel")
        .default_width(260.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Detaylar");
            ui.separator();

            let Some(item) = state.selection.selected() else {
                ui.label("Haritadan veya listeden bir öğe seçin");
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| match &item.entity {
                SelectedEntity::Faculty(record) => render_faculty(ui, record),
                SelectedEntity::Room(room) => render_room(ui, room),
                SelectedEntity::Place(node, category) => render_place(ui, node, *category),
            });
        });
}

fn render_faculty(ui: &mut egui::Ui, record: &FacultyRecord) {
    ui.label(egui::RichText::new(&record.name).strong().size(16.0));
    if !record.title.is_empty() {
        ui.label(&record.title);
    }
    if !record.department.is_empty() {
        ui.label(&record.department);
    }
    ui.separator();

    egui::Grid::new("faculty_fields")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for field in record.detail_fields() {
                ui.label(field.label);
                if field.is_link {
                    ui.hyperlink_to(&field.value, &field.value);
                } else {
                    ui.label(&field.value);
                }
                ui.end_row();
            }
        });

    if record.coordinate.is_none() {
        ui.add_space(4.0);
        ui.weak("Konum bilgisi yok");
    }
}

fn render_room(ui: &mut egui::Ui, room: &RoomEntry) {
    ui.label(egui::RichText::new(format!("Derslik {}", room.room)).strong().size(16.0));
    ui.separator();

    egui::Grid::new("room_schedule")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            for course in room.schedule() {
                ui.label(course.slot.day.label());
                ui.label(format!("{}–{}", course.slot.start_time, course.slot.end_time));
                ui.vertical(|ui| {
                    ui.label(course.display_title());
                    if !course.instructor.is_empty() {
                        ui.weak(&course.instructor);
                    }
                });
                ui.end_row();
            }
        });
}

fn render_place(ui: &mut egui::Ui, node: &GeoNode, category: FeatureCategory) {
    let title = node.tags.name().unwrap_or(category.label());
    ui.label(egui::RichText::new(title).strong().size(16.0));
    ui.label(format!("{} · OSM {}", category.label(), node.id));
    ui.separator();

    egui::Grid::new("place_tags")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (key, value) in node.tags.iter() {
                ui.label(key.as_str());
                ui.label(value);
                ui.end_row();
            }
        });
}
