//! Import von Geo-Dokumenten im OSM-XML-Format.
//!
//! Das Format besteht aus `<node>`-Elementen mit `id`/`lat`/`lon`-Attributen
//! und beliebig vielen `<tag k v/>`-Kindern. Ways und Relations werden
//! uebersprungen.

pub mod parser;

pub use parser::{load_geo_nodes, parse_geo_document};
