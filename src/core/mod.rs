//! Core-Domänentypen: Koordinaten, Stationen, Verbindungen, Flüsse, View.

pub mod color;
pub mod coordinate;
pub mod link;
/// Core-Datenmodell des Netzplans
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - MetroMap: Container für Stationen, Verbindungen und Flüsse
/// - Station: Haltepunkt mit Position, Name und Beschriftungsrichtung
/// - Connection/River: farbige Strecke zwischen zwei Endpunkten
pub mod metro_map;
pub mod station;
pub mod text_direction;
pub mod view;

pub use color::Color;
pub use coordinate::Coordinate;
pub use link::{termini_contain, termini_match, Connection, River};
pub use metro_map::MetroMap;
pub use station::Station;
pub use text_direction::TextDirection;
pub use view::{ViewTransform, ZOOM_MAX, ZOOM_MIN};
