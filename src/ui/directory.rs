//! Verzeichnis (linke Seitenleiste): Fakultaet nach Kategorie und Raeume.

use crate::app::{AppIntent, AppState};
use crate::core::{group_by_category, MarkerId};

/// Rendert das Verzeichnis und gibt erzeugte Events zurück.
pub fn render_directory_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("directory_panel")
        .default_width(240.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Akademik Kadro");
                if ui.small_button("⟳").on_hover_text("Neu laden").clicked() {
                    events.push(AppIntent::RefreshRequested);
                }
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    render_faculty_groups(ui, state, &mut events);
                    ui.separator();
                    render_rooms(ui, state, &mut events);
                });
        });

    events
}

fn render_faculty_groups(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if state.sources.faculty.is_empty() {
        ui.label(if state.load_status.faculty_loaded {
            "Kayıt yok"
        } else {
            "Yükleniyor…"
        });
        return;
    }

    for (category, members) in group_by_category(&state.sources.faculty) {
        egui::CollapsingHeader::new(format!("{} ({})", category, members.len()))
            .id_salt(("faculty_group", category.as_str()))
            .default_open(true)
            .show(ui, |ui| {
                for member in members {
                    let selected = state.selection.is_selected(&MarkerId::faculty(&member.id));
                    let label = if member.title.is_empty() {
                        member.name.clone()
                    } else {
                        format!("{} {}", member.title, member.name)
                    };
                    let mut response = ui.selectable_label(selected, label);
                    if member.coordinate.is_none() {
                        response = response.on_hover_text("Konum bilgisi yok");
                    }
                    if response.clicked() {
                        events.push(AppIntent::FacultyListEntryActivated {
                            faculty_id: member.id.clone(),
                        });
                    }
                }
            });
    }
}

fn render_rooms(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    egui::CollapsingHeader::new("Derslikler")
        .default_open(false)
        .show(ui, |ui| {
            let mut any = false;
            for room in state.index.rooms() {
                any = true;
                let selected = state.selection.is_selected(&MarkerId::room(&room.room));
                let label = format!("{} ({} ders)", room.room, room.courses.len());
                if ui.selectable_label(selected, label).clicked() {
                    events.push(AppIntent::RoomListEntryActivated {
                        room: room.room.clone(),
                    });
                }
            }
            if !any {
                ui.label("Kayıt yok");
            }
        });
}
