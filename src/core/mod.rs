//! Core-Domaenentypen: Geo-Nodes, Tags, Records, Marker-Index, Kamera, Spatial-Index.

pub mod camera;
pub mod classify;
pub mod geo_node;
pub mod markers;
pub mod projection;
pub mod records;
pub mod spatial;
pub mod tags;

pub use camera::{MapCamera, ViewAnimation};
pub use classify::{classify, FeatureCategory};
pub use geo_node::{GeoNode, GeoNodes};
pub use markers::{
    Marker, MarkerId, MarkerIndex, MarkerKind, MarkerSource, RoomEntry, UNASSIGNED_ROOM_PREFIX,
};
pub use projection::LatLon;
pub use records::{
    decode_rows, group_by_category, CourseRecord, DetailField, FacultyRecord, Row,
    ScheduleSlot, Weekday, DEFAULT_CATEGORY,
};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use tags::{TagKey, Tags};
