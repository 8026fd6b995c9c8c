//! Integrationstests für den KMM-Codec über die öffentliche API.

use glam::{UVec2, Vec2};
use kmetro_maker::{parse_kmm, write_kmm};
use kmetro_maker::{Color, Connection, Coordinate, MetroMap, River, Station, TextDirection};

const CANVAS: UVec2 = UVec2::new(1200, 800);

fn at_pixel(x: f32, y: f32) -> Coordinate {
    Coordinate::from_pixel(Vec2::new(x, y), CANVAS)
}

fn busy_map() -> MetroMap {
    let mut map = MetroMap::new();
    let a = at_pixel(120.0, 80.0);
    let b = at_pixel(600.0, 400.0);
    let c = at_pixel(1080.0, 720.0);

    map.add_station(Station::with_direction(a, "Königsplatz", TextDirection::LEFT));
    map.add_station(Station::with_direction(
        b,
        "Mitte",
        TextDirection::UP | TextDirection::RIGHT,
    ));
    map.add_station(Station::new(c, "Ostkreuz"));

    // Parallelstrecke zwischen A und B plus eine weitere Linie
    map.add_connection(Connection::new((a, b), Color::from_packed(0xFF0000)));
    map.add_connection(Connection::new((b, a), Color::from_packed(0x0000FF)));
    map.add_connection(Connection::new((b, c), Color::from_packed(0x00FF00)));

    map.add_river(River::new(
        (at_pixel(0.0, 300.0), at_pixel(1200.0, 340.0)),
        Color::from_packed(0x3366FF),
    ));
    map
}

#[test]
fn test_full_roundtrip_preserves_order_and_fields() {
    let map = busy_map();
    let data = write_kmm(&map, CANVAS);
    let loaded = parse_kmm(&data, CANVAS).expect("Roundtrip muss gelingen");

    assert_eq!(loaded.station_count(), 3);
    assert_eq!(loaded.stations[0].name, "Königsplatz");
    assert_eq!(loaded.stations[0].direction, TextDirection::LEFT);
    assert_eq!(
        loaded.stations[1].direction,
        TextDirection::UP | TextDirection::RIGHT
    );
    assert_eq!(loaded.stations[2].direction, TextDirection::default());

    assert_eq!(loaded.connection_count(), 3);
    for (original, parsed) in map.connections.iter().zip(loaded.connections.iter()) {
        assert_eq!(original.color, parsed.color);
        assert_eq!(original.termini, parsed.termini);
    }

    assert_eq!(loaded.river_count(), 1);
    assert_eq!(loaded.rivers[0].color, Color::from_packed(0x3366FF));
}

#[test]
fn test_second_save_is_byte_identical() {
    let map = busy_map();
    let first = write_kmm(&map, CANVAS);
    let reloaded = parse_kmm(&first, CANVAS).expect("Erste Runde muss gelingen");
    let second = write_kmm(&reloaded, CANVAS);
    assert_eq!(first, second);
}

#[test]
fn test_positions_stay_in_pixel_space_across_canvas_sizes() {
    let mut map = MetroMap::new();
    map.add_station(Station::new(at_pixel(300.0, 200.0), "Viertel"));

    let data = write_kmm(&map, CANVAS);
    // Gespeichert wird der Pixel-Raum zum Speicherzeitpunkt; eine größere
    // Canvas verschiebt die relative Position, der Pixel bleibt derselbe
    let bigger = UVec2::new(2400, 1600);
    let loaded = parse_kmm(&data, bigger).expect("Laden muss gelingen");
    assert_eq!(loaded.stations[0].position.to_pixel(bigger), glam::IVec2::new(300, 200));
}

#[test]
fn test_malformed_records_fail_as_a_whole() {
    let map = busy_map();
    let mut data = write_kmm(&map, CANVAS);
    // Ersten Ziffern-Byte nach dem Header zerstören
    let header_len = 6;
    let position = data[header_len..]
        .iter()
        .position(|b| b.is_ascii_digit())
        .expect("Datei enthält Zahlen")
        + header_len;
    data[position] = b'x';

    assert!(parse_kmm(&data, CANVAS).is_err());
}
