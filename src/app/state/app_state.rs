use crate::app::CommandLog;
use crate::core::MarkerIndex;
use crate::shared::MapOptions;
use std::sync::Arc;

use super::{LoadStatus, MapSources, SelectionState, ViewRequest, ViewState};

/// Hauptzustand der Karten-Ansicht.
///
/// Wird ausschliesslich auf dem UI-Thread mutiert; Fetch-Ergebnisse kommen
/// als Intents an.
pub struct AppState {
    /// Zuletzt geladene Quellen
    pub sources: MapSources,
    /// Aktueller Marker-Index (nach jedem Fetch komplett ersetzt)
    pub index: Arc<MarkerIndex>,
    /// Selection-State
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// Lade-Fortschritt
    pub load_status: LoadStatus,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: MapOptions,
    /// Host soll alle Quellen neu laden
    refresh_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(MapOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: MapOptions) -> Self {
        Self {
            sources: MapSources::default(),
            index: Arc::new(MarkerIndex::empty()),
            selection: SelectionState::new(),
            view: ViewState::new(),
            load_status: LoadStatus::default(),
            command_log: CommandLog::new(),
            options,
            refresh_requested: false,
        }
    }

    /// Anzahl der Marker (fuer UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.index.len()
    }

    /// Holt eine offene Kamera-Anforderung ab (Host → Render-Adapter).
    pub fn take_view_request(&mut self) -> Option<ViewRequest> {
        self.view.take_request()
    }

    pub(crate) fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Holt eine offene Neu-Lade-Anforderung ab.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }
}
