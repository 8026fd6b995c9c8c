//! Writer für KMM-Dateien.

use glam::UVec2;

use crate::core::{Color, Coordinate, MetroMap};

use super::{FOOTER, HEADER_V2, SECTION_SEP, STATION_END, STROKE_END};

/// Serialisiert einen Netzplan als KMM-Datei der Version 2.
///
/// Koordinaten werden im Pixel-Raum der übergebenen Canvas-Größe
/// geschrieben; der Parser rechnet sie beim Laden wieder zurück.
/// Als Sektions-Trenner wird durchgehend `0xFE` erzeugt.
pub fn write_kmm(map: &MetroMap, canvas: UVec2) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(HEADER_V2);

    for station in &map.stations {
        let px = station.position.to_pixel(canvas);
        out.extend_from_slice(station.name.as_bytes());
        out.push(0x00);
        out.extend_from_slice(px.x.to_string().as_bytes());
        out.push(0x01);
        out.extend_from_slice(px.y.to_string().as_bytes());
        out.push(0x02);
        out.extend_from_slice(station.direction.bits().to_string().as_bytes());
        out.push(STATION_END);
    }
    out.push(SECTION_SEP);

    for connection in &map.connections {
        write_stroke(&mut out, connection.termini, connection.color, canvas);
    }
    out.push(SECTION_SEP);

    for river in &map.rivers {
        write_stroke(&mut out, river.termini, river.color, canvas);
    }

    out.extend_from_slice(FOOTER);
    out
}

/// Schreibt einen Strecken-Datensatz (Verbindung oder Fluss).
fn write_stroke(
    out: &mut Vec<u8>,
    termini: (Coordinate, Coordinate),
    color: Color,
    canvas: UVec2,
) {
    let first = termini.0.to_pixel(canvas);
    let second = termini.1.to_pixel(canvas);
    out.extend_from_slice(first.x.to_string().as_bytes());
    out.push(0x00);
    out.extend_from_slice(first.y.to_string().as_bytes());
    out.push(0x01);
    out.extend_from_slice(second.x.to_string().as_bytes());
    out.push(0x02);
    out.extend_from_slice(second.y.to_string().as_bytes());
    out.push(0x03);
    out.extend_from_slice(color.to_packed().to_string().as_bytes());
    out.push(STROKE_END);
}
