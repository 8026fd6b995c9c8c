use super::*;
use approx::assert_relative_eq;

fn coord(x: f32, y: f32) -> Coordinate {
    Coordinate::new(x, y)
}

fn map_with_two_stations() -> (MetroMap, Coordinate, Coordinate) {
    let mut map = MetroMap::new();
    let a = coord(0.25, 0.5);
    let b = coord(0.75, 0.5);
    map.add_station(Station::new(a, "Nordbahnhof"));
    map.add_station(Station::new(b, "Südkreuz"));
    (map, a, b)
}

#[test]
fn test_find_station_by_position() {
    let (map, a, _) = map_with_two_stations();
    assert_eq!(map.find_station(a), Some(0));
    assert_eq!(map.find_station(coord(0.9, 0.9)), None);
}

#[test]
fn test_duplicate_station_position_is_rejected() {
    let (mut map, a, _) = map_with_two_stations();
    map.add_station(Station::new(a, "Doppelgänger"));
    assert_eq!(map.station_count(), 2);
    assert_eq!(map.stations[0].name, "Nordbahnhof");
}

#[test]
fn test_self_loop_connection_is_rejected() {
    let (mut map, a, _) = map_with_two_stations();
    map.add_connection(Connection::new((a, a), Color::from_packed(0xFF0000)));
    assert_eq!(map.connection_count(), 0);
}

#[test]
fn test_connection_lookup_is_symmetric() {
    let (mut map, a, b) = map_with_two_stations();
    map.add_connection(Connection::new((a, b), Color::from_packed(0x00FF00)));
    assert_eq!(map.find_connection((a, b)), Some(0));
    assert_eq!(map.find_connection((b, a)), Some(0));
}

#[test]
fn test_parallel_connections_keep_insertion_order() {
    let (mut map, a, b) = map_with_two_stations();
    map.add_connection(Connection::new((a, b), Color::from_packed(1)));
    map.add_connection(Connection::new((b, a), Color::from_packed(2)));
    map.add_connection(Connection::new((a, b), Color::from_packed(3)));
    assert_eq!(map.find_all_connections((a, b)), vec![0, 1, 2]);
    assert_eq!(map.find_connection((b, a)), Some(0));
}

#[test]
fn test_lane_splits_symmetrically() {
    let (mut map, a, b) = map_with_two_stations();
    map.add_connection(Connection::new((a, b), Color::from_packed(1)));
    map.add_connection(Connection::new((a, b), Color::from_packed(2)));
    map.add_connection(Connection::new((a, b), Color::from_packed(3)));

    // Drei Spuren: mittlere liegt auf der Ideallinie
    assert_relative_eq!(map.connection_lane(0), -1.0);
    assert_relative_eq!(map.connection_lane(1), 0.0);
    assert_relative_eq!(map.connection_lane(2), 1.0);
}

#[test]
fn test_lane_for_even_count() {
    let (mut map, a, b) = map_with_two_stations();
    map.add_connection(Connection::new((a, b), Color::from_packed(1)));
    map.add_connection(Connection::new((a, b), Color::from_packed(2)));

    assert_relative_eq!(map.connection_lane(0), -0.5);
    assert_relative_eq!(map.connection_lane(1), 0.5);
}

#[test]
fn test_remove_station_cascades_connections_but_not_rivers() {
    let (mut map, a, b) = map_with_two_stations();
    let c = coord(0.5, 0.9);
    map.add_station(Station::new(c, "Westtor"));
    map.add_connection(Connection::new((a, b), Color::from_packed(1)));
    map.add_connection(Connection::new((b, c), Color::from_packed(2)));
    map.add_connection(Connection::new((a, c), Color::from_packed(3)));
    // Fluss mit positionsgleichem Endpunkt zu Station A
    map.add_river(River::new((a, coord(0.1, 0.1)), Color::from_packed(4)));

    let removed = map.remove_station(0).expect("Station A existiert");
    assert_eq!(removed.name, "Nordbahnhof");

    // Nur die Verbindung B–C bleibt übrig
    assert_eq!(map.connection_count(), 1);
    assert!(map.find_connection((b, c)).is_some());
    assert_eq!(map.river_count(), 1);
}

#[test]
fn test_remove_station_with_invalid_index() {
    let (mut map, _, _) = map_with_two_stations();
    assert!(map.remove_station(99).is_none());
    assert_eq!(map.station_count(), 2);
}

#[test]
fn test_rename_and_redirect_station() {
    let (mut map, _, _) = map_with_two_stations();
    map.rename_station(0, "Hauptbahnhof");
    map.set_station_direction(0, TextDirection::LEFT | TextDirection::UP);
    assert_eq!(map.stations[0].name, "Hauptbahnhof");
    assert!(map.stations[0].direction.contains(TextDirection::LEFT));
}

#[test]
fn test_recolor_connection_and_river() {
    let (mut map, a, b) = map_with_two_stations();
    map.add_connection(Connection::new((a, b), Color::from_packed(1)));
    map.add_river(River::new((a, b), Color::from_packed(2)));

    map.recolor_connection(0, Color::from_packed(0xABCDEF));
    map.recolor_river(0, Color::from_packed(0x123456));

    assert_eq!(map.connections[0].color.to_packed(), 0xABCDEF);
    assert_eq!(map.rivers[0].color.to_packed(), 0x123456);
}

#[test]
fn test_river_endpoints_need_no_station() {
    let mut map = MetroMap::new();
    map.add_river(River::new(
        (coord(0.1, 0.2), coord(0.8, 0.3)),
        Color::from_packed(0x3366FF),
    ));
    assert_eq!(map.river_count(), 1);
    assert!(map
        .find_river((coord(0.8, 0.3), coord(0.1, 0.2)))
        .is_some());
}
