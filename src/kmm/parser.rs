//! Parser für KMM-Dateien.

use anyhow::{bail, Context, Result};
use glam::{UVec2, Vec2};

use crate::core::{Color, Connection, Coordinate, MetroMap, River, Station, TextDirection};

use super::{HEADER_V1, HEADER_V2, SECTION_SEP, SECTION_SEP_LEGACY, STATION_END, STROKE_END};

/// Parsed eine KMM-Datei in einen frischen Netzplan.
///
/// Ganz-oder-gar-nicht: bei jedem Formatfehler kommt ein `Err` zurück
/// und der Aufrufer behält sein bisheriges Modell. Sowohl `0xFE` als
/// auch das historische `0xFF` werden als Sektions-Trenner akzeptiert.
pub fn parse_kmm(data: &[u8], canvas: UVec2) -> Result<MetroMap> {
    let with_rivers = if data.starts_with(HEADER_V2) {
        true
    } else if data.starts_with(HEADER_V1) {
        false
    } else {
        bail!("Unbekannter Datei-Header, keine KMM-Datei");
    };

    let normalized = normalize_separators(data);
    let sections: Vec<&[u8]> = normalized.split(|&b| b == SECTION_SEP).collect();

    let mut map = MetroMap::new();

    for record in section(&sections, 1).split(|&b| b == STATION_END) {
        if record.is_empty() {
            continue;
        }
        map.add_station(parse_station(record, canvas)?);
    }

    for record in section(&sections, 2).split(|&b| b == STROKE_END) {
        if record.is_empty() {
            continue;
        }
        let (termini, color) = parse_stroke(record, canvas)?;
        map.add_connection(Connection::new(termini, color));
    }

    if with_rivers {
        for record in section(&sections, 3).split(|&b| b == STROKE_END) {
            if record.is_empty() {
                continue;
            }
            let (termini, color) = parse_stroke(record, canvas)?;
            map.add_river(River::new(termini, color));
        }
    }

    log::info!(
        "KMM-Datei geladen: {} Stationen, {} Verbindungen, {} Flüsse",
        map.station_count(),
        map.connection_count(),
        map.river_count()
    );
    Ok(map)
}

/// Ersetzt das historische Trennbyte `0xFF` durch `0xFE`.
fn normalize_separators(data: &[u8]) -> Vec<u8> {
    data.iter()
        .map(|&b| if b == SECTION_SEP_LEGACY { SECTION_SEP } else { b })
        .collect()
}

/// Greift auf eine Sektion zu; fehlende Sektionen gelten als leer.
fn section<'a>(sections: &[&'a [u8]], index: usize) -> &'a [u8] {
    sections.get(index).copied().unwrap_or(&[])
}

/// Parsed einen Stations-Datensatz: `name \x00 x \x01 y \x02 richtung`.
fn parse_station(record: &[u8], canvas: UVec2) -> Result<Station> {
    let (name, rest) = split_field(record, 0x00, "Stationsname")?;
    let (x, rest) = split_field(rest, 0x01, "Stations-X")?;
    let (y, direction) = split_field(rest, 0x02, "Stations-Y")?;

    let name = std::str::from_utf8(name)
        .context("Stationsname ist kein gültiges UTF-8")?
        .to_string();
    let position = pixel_coordinate(x, y, canvas)?;
    let bits: u8 = parse_number(direction, "Beschriftungsrichtung")?;
    let direction = TextDirection::from_bits(bits)
        .with_context(|| format!("Ungültige Beschriftungsrichtung {}", bits))?;

    Ok(Station::with_direction(position, name, direction))
}

/// Parsed einen Strecken-Datensatz: `x1 \x00 y1 \x01 x2 \x02 y2 \x03 farbe`.
fn parse_stroke(record: &[u8], canvas: UVec2) -> Result<((Coordinate, Coordinate), Color)> {
    let (x1, rest) = split_field(record, 0x00, "Strecken-X1")?;
    let (y1, rest) = split_field(rest, 0x01, "Strecken-Y1")?;
    let (x2, rest) = split_field(rest, 0x02, "Strecken-X2")?;
    let (y2, color) = split_field(rest, 0x03, "Strecken-Y2")?;

    let termini = (pixel_coordinate(x1, y1, canvas)?, pixel_coordinate(x2, y2, canvas)?);
    let packed: u32 = parse_number(color, "Streckenfarbe")?;
    Ok((termini, Color::from_packed(packed)))
}

/// Trennt ein Feld am erwarteten Steuerbyte ab.
fn split_field<'a>(data: &'a [u8], sep: u8, what: &str) -> Result<(&'a [u8], &'a [u8])> {
    let position = data
        .iter()
        .position(|&b| b == sep)
        .with_context(|| format!("Feld '{}' ohne Trennbyte 0x{:02X}", what, sep))?;
    Ok((&data[..position], &data[position + 1..]))
}

/// Parsed einen dezimalen Zahlenwert aus UTF-8-Text.
fn parse_number<T: std::str::FromStr>(data: &[u8], what: &str) -> Result<T> {
    let text = std::str::from_utf8(data)
        .with_context(|| format!("Feld '{}' ist kein gültiges UTF-8", what))?;
    match text.trim().parse() {
        Ok(value) => Ok(value),
        Err(_) => bail!("Feld '{}' ist keine gültige Zahl: {:?}", what, text),
    }
}

/// Baut aus zwei Pixel-Feldern eine normalisierte Koordinate.
fn pixel_coordinate(x: &[u8], y: &[u8], canvas: UVec2) -> Result<Coordinate> {
    let x: i32 = parse_number(x, "Pixel-X")?;
    let y: i32 = parse_number(y, "Pixel-Y")?;
    Ok(Coordinate::from_pixel(Vec2::new(x as f32, y as f32), canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmm::write_kmm;
    use glam::IVec2;

    const CANVAS: UVec2 = UVec2::new(1200, 800);

    fn sample_map() -> MetroMap {
        let mut map = MetroMap::new();
        let a = Coordinate::from_pixel(Vec2::new(300.0, 200.0), CANVAS);
        let b = Coordinate::from_pixel(Vec2::new(900.0, 600.0), CANVAS);
        map.add_station(Station::with_direction(a, "Nordbahnhof", TextDirection::LEFT));
        map.add_station(Station::new(b, "Südkreuz"));
        map.add_connection(Connection::new((a, b), Color::from_packed(0x00FF00)));
        map.add_river(River::new(
            (
                Coordinate::from_pixel(Vec2::new(0.0, 400.0), CANVAS),
                Coordinate::from_pixel(Vec2::new(1200.0, 400.0), CANVAS),
            ),
            Color::from_packed(0x3366FF),
        ));
        map
    }

    #[test]
    fn test_roundtrip_v2() {
        let map = sample_map();
        let data = write_kmm(&map, CANVAS);
        let loaded = parse_kmm(&data, CANVAS).expect("Roundtrip muss gelingen");

        assert_eq!(loaded.station_count(), 2);
        assert_eq!(loaded.stations[0].name, "Nordbahnhof");
        assert_eq!(loaded.stations[0].direction, TextDirection::LEFT);
        assert_eq!(loaded.stations[0].position.to_pixel(CANVAS), IVec2::new(300, 200));
        assert_eq!(loaded.connection_count(), 1);
        assert_eq!(loaded.connections[0].color.to_packed(), 0x00FF00);
        assert_eq!(loaded.river_count(), 1);
        assert_eq!(loaded.rivers[0].color.to_packed(), 0x3366FF);
    }

    #[test]
    fn test_v1_file_without_river_section() {
        let data: Vec<u8> = [
            b"KMM.1\xfe".as_slice(),
            b"Mitte\x00600\x01400\x022\x03",
            b"\xfe",
            b"600\x00400\x01700\x02400\x03255\x04",
            b"\xfeThank you for using KMetroMaker.\x04\x05",
        ]
        .concat();

        let loaded = parse_kmm(&data, CANVAS).expect("V1-Datei muss lesbar sein");
        assert_eq!(loaded.station_count(), 1);
        assert_eq!(loaded.connection_count(), 1);
        assert_eq!(loaded.connections[0].color.to_packed(), 255);
        assert_eq!(loaded.river_count(), 0);
    }

    #[test]
    fn test_legacy_separator_is_accepted() {
        // Ältere Writer trennten Sektionen mit 0xFF statt 0xFE
        let data: Vec<u8> = [
            b"KMM.2\xfe".as_slice(),
            b"Mitte\x00600\x01400\x022\x03",
            b"\xff",
            b"\xff",
            b"0\x00400\x011200\x02400\x03255\x04",
        ]
        .concat();

        let loaded = parse_kmm(&data, CANVAS).expect("0xFF-Trenner müssen lesbar sein");
        assert_eq!(loaded.station_count(), 1);
        assert_eq!(loaded.river_count(), 1);
    }

    #[test]
    fn test_unknown_header_is_rejected() {
        assert!(parse_kmm(b"KMM.3\xfe\xfe\xfe", CANVAS).is_err());
        assert!(parse_kmm(b"<?xml version=\"1.0\"?>", CANVAS).is_err());
        assert!(parse_kmm(b"", CANVAS).is_err());
    }

    #[test]
    fn test_malformed_number_is_rejected() {
        let data: Vec<u8> = [
            b"KMM.2\xfe".as_slice(),
            b"Mitte\x00abc\x01400\x022\x03",
            b"\xfe\xfe",
        ]
        .concat();
        assert!(parse_kmm(&data, CANVAS).is_err());
    }

    #[test]
    fn test_invalid_direction_is_rejected() {
        let data: Vec<u8> = [
            b"KMM.2\xfe".as_slice(),
            b"Mitte\x00600\x01400\x020\x03",
            b"\xfe\xfe",
        ]
        .concat();
        assert!(parse_kmm(&data, CANVAS).is_err());
    }

    #[test]
    fn test_truncated_sections_count_as_empty() {
        let loaded = parse_kmm(b"KMM.2\xfe", CANVAS).expect("Header allein ist ein leerer Plan");
        assert_eq!(loaded.station_count(), 0);
        assert_eq!(loaded.connection_count(), 0);
        assert_eq!(loaded.river_count(), 0);
    }
}
