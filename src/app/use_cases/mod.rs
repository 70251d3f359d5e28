//! Use-Cases der Application-Layer-Orchestrierung.

pub mod marker_index;
pub mod selection;
