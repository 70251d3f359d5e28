//! Campus-Karte.
//!
//! Desktop-Ansicht der Fakultaets- und Raum-Marker auf dem Campus,
//! mit egui + eframe.

use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use campus_map::core::LatLon;
use campus_map::fetch::{self, IntentSender};
use campus_map::render::{self, MarkerLayers};
use campus_map::{ui, AppController, AppIntent, AppState, MapCamera, MapOptions};
use campus_map::{InMemoryStore, RemoteStore};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Campus-Karte v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Kampüs Haritası"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Kampüs Haritası",
            options,
            Box::new(|cc| Ok(Box::new(MapApp::new(cc.egui_ctx.clone())))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController,
    scene: render::MapScene,
    layers: MarkerLayers,
    store: Arc<dyn RemoteStore>,
    sender: IntentSender,
    receiver: Receiver<AppIntent>,
}

impl MapApp {
    fn new(ctx: egui::Context) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MapOptions::config_path();
        let map_options = MapOptions::load_from_file(&config_path);

        let store = open_store(Path::new(&map_options.store_fixture_path));

        let start = LatLon::new(map_options.initial_lat, map_options.initial_lon);
        let mut scene = render::MapScene::new(
            MapCamera::new(start.projected(), map_options.initial_zoom),
            map_options.pick_radius_px,
        );
        let layers = MarkerLayers::install(&mut scene);

        let (sender, receiver) = mpsc::channel();
        let sender = IntentSender::new(sender).with_repaint(ctx);
        fetch::spawn_all(&map_options, Arc::clone(&store), &sender);

        Self {
            state: AppState::with_options(map_options),
            controller: AppController::new(),
            scene,
            layers,
            store,
            sender,
            receiver,
        }
    }
}

/// Oeffnet den Store aus der Fixture; ohne Fixture startet er leer.
fn open_store(path: &Path) -> Arc<dyn RemoteStore> {
    match InMemoryStore::load_from_file(path) {
        Ok(store) => {
            log::info!("Store-Fixture geladen: {}", path.display());
            Arc::new(store)
        }
        Err(e) => {
            log::warn!("Store-Fixture nicht verfuegbar, starte leer: {:#}", e);
            Arc::new(InMemoryStore::new())
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<AppIntent> = self.receiver.try_iter().collect();
        let has_fetch_results = !events.is_empty();

        events.extend(self.collect_ui_events(ctx));
        let has_meaningful_events = has_fetch_results || !events.is_empty();

        self.process_events(events);
        self.sync_scene();
        self.maybe_refresh();

        let dt = f64::from(ctx.input(|i| i.stable_dt));
        let animating = self.scene.tick(dt);

        self.maybe_request_repaint(ctx, has_meaningful_events || animating);
    }
}

impl MapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state, self.scene.camera());
        events.extend(ui::render_directory_panel(ctx, &self.state));
        ui::render_detail_panel(ctx, &self.state);
        events.extend(ui::render_map_view(ctx, &mut self.scene, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Uebertraegt Szenen-Diff und Kamera-Anforderung an die Karte.
    fn sync_scene(&mut self) {
        let diff = self.controller.next_scene_diff(&self.state);
        render::apply_diff(&mut self.scene, &self.layers, &diff);

        if let Some(request) = self.state.take_view_request() {
            render::apply_view_request(&mut self.scene, request);
        }
    }

    fn maybe_refresh(&mut self) {
        if self.state.take_refresh_request() {
            fetch::spawn_all(&self.state.options, Arc::clone(&self.store), &self.sender);
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.load_status.is_loading()
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
