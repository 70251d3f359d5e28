//! Geteilte Typen fuer layer-uebergreifende Vertraege.
//!
//! Enthaelt Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhaengigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::MapOptions;
pub use render_scene::{MarkerScene, SceneDiff, SceneMarker};
