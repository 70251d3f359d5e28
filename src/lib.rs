//! Campus-Karte: Geo-Tag-Parser, Marker-Index und Auswahl-Steuerung.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod fetch;
pub mod osm;
pub mod render;
pub mod shared;
pub mod store;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, ViewRequest};
pub use crate::core::{
    classify, CourseRecord, FacultyRecord, FeatureCategory, GeoNode, GeoNodes, LatLon, MapCamera,
    Marker, MarkerId, MarkerIndex, MarkerKind, SpatialIndex, SpatialMatch,
};
pub use osm::{load_geo_nodes, parse_geo_document};
pub use shared::{MapOptions, MarkerScene, SceneDiff};
pub use store::{InMemoryStore, RemoteStore, StoreError};
