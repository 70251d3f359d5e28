//! Hintergrund-Fetches: Geo-Dokument und Store-Tabellen.
//!
//! Jeder Fetch laeuft auf einem eigenen Thread und liefert sein Ergebnis
//! als `AppIntent` ueber einen Kanal an den UI-Thread und weckt ihn danach
//! auf. Der Thread mutiert nie den App-State.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::Context;

use crate::app::AppIntent;
use crate::core::GeoNodes;
use crate::osm::load_geo_nodes;
use crate::shared::MapOptions;
use crate::store::{self, RemoteStore};

/// Kanal zum UI-Thread plus Weck-Funktion.
///
/// Ohne Wecken bleibt ein Ergebnis im Kanal liegen, bis die UI aus
/// anderem Grund neu zeichnet.
#[derive(Clone)]
pub struct IntentSender {
    sender: Sender<AppIntent>,
    wake: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl IntentSender {
    pub fn new(sender: Sender<AppIntent>) -> Self {
        Self { sender, wake: None }
    }

    /// Setzt die Funktion, die nach jeder Zustellung aufgerufen wird.
    pub fn with_wake(mut self, wake: impl Fn() + Send + Sync + 'static) -> Self {
        self.wake = Some(Arc::new(wake));
        self
    }

    /// Weckt den UI-Thread ueber `egui::Context::request_repaint`.
    pub fn with_repaint(self, ctx: egui::Context) -> Self {
        self.with_wake(move || ctx.request_repaint())
    }

    fn deliver(&self, intent: AppIntent) {
        if self.sender.send(intent).is_err() {
            log::debug!("Empfaenger geschlossen, Fetch-Ergebnis verworfen");
            return;
        }
        if let Some(wake) = &self.wake {
            wake();
        }
    }
}

/// Liest und parst das Geo-Dokument.
///
/// I/O-Fehler werden zurueckgegeben; ein unparsbares Dokument ergibt eine
/// leere Menge.
pub fn load_geo_document(path: &Path) -> anyhow::Result<GeoNodes> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Geo-Dokument {} nicht lesbar", path.display()))?;
    Ok(load_geo_nodes(&text))
}

/// Startet das Laden des Geo-Dokuments im Hintergrund.
pub fn spawn_geo_document(
    path: PathBuf,
    sender: IntentSender,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("geo-fetch".into())
        .spawn(move || {
            let result = load_geo_document(&path).map_err(|e| format!("{e:#}"));
            sender.deliver(AppIntent::GeoDocumentLoaded { result });
        })
}

/// Startet Fakultaets- und Kurs-Fetch im Hintergrund (nacheinander auf
/// einem Thread, jedes Ergebnis wird einzeln geliefert).
pub fn spawn_store_fetches(
    store: Arc<dyn RemoteStore>,
    sender: IntentSender,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("store-fetch".into())
        .spawn(move || {
            let result = store::fetch_public_faculty(store.as_ref()).map_err(|e| e.to_string());
            sender.deliver(AppIntent::FacultyFetched { result });

            let result = store::fetch_courses(store.as_ref()).map_err(|e| e.to_string());
            sender.deliver(AppIntent::CoursesFetched { result });
        })
}

/// Startet alle Fetches. Fehler beim Thread-Start werden geloggt.
pub fn spawn_all(options: &MapOptions, store: Arc<dyn RemoteStore>, sender: &IntentSender) {
    let geo_path = PathBuf::from(&options.geo_document_path);
    if let Err(e) = spawn_geo_document(geo_path, sender.clone()) {
        log::error!("Geo-Fetch konnte nicht gestartet werden: {e}");
    }
    if let Err(e) = spawn_store_fetches(store, sender.clone()) {
        log::error!("Store-Fetch konnte nicht gestartet werden: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::mpsc;

    #[test]
    fn missing_geo_document_is_reported_as_error() {
        let (sender, receiver) = mpsc::channel();
        let path = std::env::temp_dir().join("campus_map_missing_dir/none.osm");

        spawn_geo_document(path, IntentSender::new(sender))
            .expect("Thread erwartet")
            .join()
            .expect("Join erwartet");

        match receiver.recv().expect("Intent erwartet") {
            AppIntent::GeoDocumentLoaded { result: Err(message) } => {
                assert!(message.contains("nicht lesbar"));
            }
            other => panic!("Unerwarteter Intent: {other:?}"),
        }
    }

    #[test]
    fn unparsable_geo_document_yields_empty_mapping() {
        let tmp = std::env::temp_dir().join("campus_map_fetch_garbage.osm");
        std::fs::write(&tmp, "kein xml").expect("Schreiben erwartet");

        let nodes = load_geo_document(&tmp).expect("Lesen erwartet");
        assert!(nodes.is_empty());

        let _ = std::fs::remove_file(&tmp);
    }

    #[test]
    fn store_fetches_deliver_faculty_then_courses() {
        let store = InMemoryStore::from_json_str(
            r#"{
                "faculty_members": [{"id": "f1", "name": "Ayşe"}],
                "courses": [{"id": "c1", "code": "CENG101", "room": "A1"}]
            }"#,
        )
        .expect("Fixture erwartet");
        let (sender, receiver) = mpsc::channel();
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let sender = IntentSender::new(sender).with_wake(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        spawn_store_fetches(Arc::new(store), sender)
            .expect("Thread erwartet")
            .join()
            .expect("Join erwartet");

        let intents: Vec<AppIntent> = receiver.try_iter().collect();
        assert_eq!(intents.len(), 2);
        assert_eq!(wakes.load(Ordering::SeqCst), 2);
        assert!(matches!(
            &intents[0],
            AppIntent::FacultyFetched { result: Ok(records) } if records.len() == 1
        ));
        assert!(matches!(
            &intents[1],
            AppIntent::CoursesFetched { result: Ok(records) } if records.len() == 1
        ));
    }

    #[test]
    fn closed_receiver_does_not_wake() {
        let (sender, receiver) = mpsc::channel();
        drop(receiver);
        let woken = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&woken);
        let sender =
            IntentSender::new(sender).with_wake(move || flag.store(true, Ordering::SeqCst));

        spawn_store_fetches(Arc::new(InMemoryStore::new()), sender)
            .expect("Thread erwartet")
            .join()
            .expect("Join erwartet");

        assert!(!woken.load(Ordering::SeqCst));
    }
}
