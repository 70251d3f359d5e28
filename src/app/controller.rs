//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{MarkerScene, SceneDiff};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Haelt die zuletzt an den Render-Adapter uebergebene Szene, um pro Frame
/// nur den Diff auszuliefern.
#[derive(Default)]
pub struct AppController {
    presented: MarkerScene,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Quellen & Index ===
            AppCommand::ReplaceGeoNodes { nodes } => {
                handlers::data::replace_geo_nodes(state, nodes)
            }
            AppCommand::ReplaceFaculty { records } => {
                handlers::data::replace_faculty(state, records)
            }
            AppCommand::ReplaceCourses { records } => {
                handlers::data::replace_courses(state, records)
            }
            AppCommand::RebuildMarkerIndex => handlers::data::rebuild_index(state),
            AppCommand::LogFetchFailure { source, message } => {
                handlers::data::log_fetch_failure(state, source, &message)
            }
            AppCommand::RequestRefresh => handlers::data::request_refresh(state),

            // === Selektion ===
            AppCommand::SelectMarker { marker_id } => {
                handlers::selection::select_marker(state, &marker_id)
            }
            AppCommand::SelectFaculty { faculty_id } => {
                handlers::selection::select_faculty(state, &faculty_id)
            }
            AppCommand::SelectRoom { room } => handlers::selection::select_room(state, &room),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> MarkerScene {
        render_scene::build(state)
    }

    /// Baut die aktuelle Szene und liefert den Diff zur zuletzt
    /// ausgelieferten. Die neue Szene gilt danach als ausgeliefert.
    pub fn next_scene_diff(&mut self, state: &AppState) -> SceneDiff {
        let next = self.build_render_scene(state);
        let diff = SceneDiff::between(&self.presented, &next);
        self.presented = next;
        diff
    }

    /// Zuletzt ausgelieferte Szene.
    pub fn presented_scene(&self) -> &MarkerScene {
        &self.presented
    }
}
