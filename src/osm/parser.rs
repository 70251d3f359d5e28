//! Parser fuer OSM-XML: `<node id lat lon>` mit `<tag k v/>`-Kindern.

use anyhow::{bail, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::{GeoNode, GeoNodes, TagKey, Tags};

/// Parsed ein Geo-Dokument in eine Node-Sammlung (strikte Variante).
///
/// Schlaegt nur fehl, wenn der Text kein strukturiertes Markup ist.
/// Fehlende oder unlesbare `lat`/`lon` werden zu `0.0`.
pub fn parse_geo_document(xml_content: &str) -> Result<GeoNodes> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    let mut nodes = GeoNodes::new();

    let mut depth = 0usize;
    let mut saw_element = false;
    let mut current_node: Option<GeoNode> = None;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                saw_element = true;
                match e.name().as_ref() {
                    b"node" => current_node = read_node(&reader, e)?,
                    b"tag" => apply_tag(&reader, e, current_node.as_mut())?,
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                saw_element = true;
                match e.name().as_ref() {
                    b"node" => {
                        if let Some(node) = read_node(&reader, e)? {
                            push_node(&mut nodes, node);
                        }
                    }
                    b"tag" => apply_tag(&reader, e, current_node.as_mut())?,
                    _ => {}
                }
            }
            Ok(Event::End(ref e)) => {
                depth = depth.saturating_sub(1);
                if e.name().as_ref() == b"node" {
                    if let Some(node) = current_node.take() {
                        push_node(&mut nodes, node);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des Geo-Dokuments"),
            _ => {}
        }

        buffer.clear();
    }

    if !saw_element {
        bail!("Geo-Dokument enthaelt kein Markup");
    }
    if depth != 0 {
        bail!("Geo-Dokument ist unvollstaendig ({} offene Elemente)", depth);
    }

    log::info!("Geo-Dokument geparst: {} Nodes", nodes.len());
    Ok(nodes)
}

/// Lenient-Variante: loggt Fehler und liefert eine leere Sammlung.
///
/// Die Karte zeigt dann keine Basis-Overlays, der Aufrufer laeuft weiter.
pub fn load_geo_nodes(xml_content: &str) -> GeoNodes {
    match parse_geo_document(xml_content) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::error!("Geo-Dokument konnte nicht gelesen werden: {:#}", e);
            GeoNodes::new()
        }
    }
}

fn push_node(nodes: &mut GeoNodes, node: GeoNode) {
    let id = node.id.clone();
    if nodes.insert(node).is_some() {
        log::debug!("Doppelte Node-ID {}, spaetere Daten gewinnen", id);
    }
}

/// Liest `id`, `lat`, `lon` eines `<node>`-Elements. `None` ohne `id`.
fn read_node(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Option<GeoNode>> {
    let mut id: Option<String> = None;
    let mut lat: Option<String> = None;
    let mut lon: Option<String> = None;

    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?;
        match &*key {
            "id" => id = Some(attr.unescape_value()?.into_owned()),
            "lat" => lat = Some(attr.unescape_value()?.into_owned()),
            "lon" => lon = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
        log::warn!("<node> ohne id uebersprungen");
        return Ok(None);
    };

    let lat = parse_coordinate(lat.as_deref(), &id, "lat");
    let lon = parse_coordinate(lon.as_deref(), &id, "lon");

    Ok(Some(GeoNode::new(id.trim(), lat, lon, Tags::new())))
}

/// Haengt ein `<tag k v/>` an den offenen Node. Tags ausserhalb eines
/// Nodes (z.B. unter `<way>`) werden ignoriert.
fn apply_tag(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
    node: Option<&mut GeoNode>,
) -> Result<()> {
    let Some(node) = node else {
        return Ok(());
    };

    let mut key: Option<String> = None;
    let mut value: Option<String> = None;
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let name = reader.decoder().decode(attr.key.as_ref())?;
        match &*name {
            "k" => key = Some(attr.unescape_value()?.into_owned()),
            "v" => value = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    if let Some(key) = key {
        node.tags
            .insert(TagKey::parse(&key), value.unwrap_or_default());
    }
    Ok(())
}

fn parse_coordinate(raw: Option<&str>, id: &str, field: &str) -> f64 {
    match raw.map(|s| s.trim().parse::<f64>()) {
        Some(Ok(value)) if value.is_finite() => value,
        _ => {
            log::debug!("Node {}: {} fehlt oder ungueltig, verwende 0.0", id, field);
            0.0
        }
    }
}
