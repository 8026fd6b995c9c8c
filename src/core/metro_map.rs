//! Die zentrale MetroMap-Datenstruktur mit Stationen, Verbindungen und Flüssen.

use super::link::{termini_contain, termini_match};
use super::{Color, Connection, Coordinate, River, Station, TextDirection};

/// Container für den gesamten Netzplan.
///
/// Alleiniger Eigentümer aller Entitäten; der Codec liest nur einen
/// vollständigen Snapshot bzw. ersetzt den Plan atomar beim Laden.
#[derive(Debug, Clone, Default)]
pub struct MetroMap {
    /// Alle Stationen, in Einfügereihenfolge
    pub stations: Vec<Station>,
    /// Alle Verbindungen; parallele Strecken bleiben in Einfügereihenfolge
    pub connections: Vec<Connection>,
    /// Alle Flüsse
    pub rivers: Vec<River>,
}

impl MetroMap {
    /// Erstellt einen leeren Netzplan.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Findet eine Station über exakte (gerasterte) Positionsgleichheit.
    pub fn find_station(&self, position: Coordinate) -> Option<usize> {
        self.stations
            .iter()
            .position(|station| station.position == position)
    }

    /// Findet die erste Verbindung zwischen zwei Endpunkten (symmetrisch).
    pub fn find_connection(&self, pair: (Coordinate, Coordinate)) -> Option<usize> {
        self.connections
            .iter()
            .position(|connection| termini_match(&connection.termini, pair))
    }

    /// Findet alle Verbindungen zwischen zwei Endpunkten, in Einfügereihenfolge.
    /// Grundlage für die Spur-Aufteilung paralleler Strecken.
    pub fn find_all_connections(&self, pair: (Coordinate, Coordinate)) -> Vec<usize> {
        self.connections
            .iter()
            .enumerate()
            .filter(|(_, connection)| termini_match(&connection.termini, pair))
            .map(|(index, _)| index)
            .collect()
    }

    /// Findet den ersten Fluss zwischen zwei Endpunkten (symmetrisch).
    pub fn find_river(&self, pair: (Coordinate, Coordinate)) -> Option<usize> {
        self.rivers
            .iter()
            .position(|river| termini_match(&river.termini, pair))
    }

    /// Berechnet den Spur-Versatz einer Verbindung relativ zu ihren Parallelen.
    ///
    /// `position_im_parallelbündel - (anzahl - 1) / 2`: eine ungerade Anzahl
    /// Spuren zentriert sich auf der Ideallinie, eine gerade teilt sich
    /// symmetrisch auf beide Seiten auf.
    pub fn connection_lane(&self, index: usize) -> f32 {
        let Some(connection) = self.connections.get(index) else {
            return 0.0;
        };
        let parallel = self.find_all_connections(connection.termini);
        let slot = parallel.iter().position(|&i| i == index).unwrap_or(0);
        slot as f32 - (parallel.len().saturating_sub(1)) as f32 / 2.0
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Fügt eine Station hinzu. Belegte Positionen werden still ignoriert.
    pub fn add_station(&mut self, station: Station) {
        if self.find_station(station.position).is_some() {
            log::warn!("Position {:?} ist bereits belegt", station.position);
            return;
        }
        self.stations.push(station);
    }

    /// Entfernt eine Station und kaskadiert auf ihre Verbindungen:
    /// jede Verbindung mit der Stationsposition als Endpunkt wird gelöscht.
    /// Flüsse bleiben unberührt, auch bei positionsgleichen Endpunkten.
    pub fn remove_station(&mut self, index: usize) -> Option<Station> {
        if index >= self.stations.len() {
            return None;
        }
        let removed = self.stations.remove(index);
        self.connections
            .retain(|connection| !termini_contain(&connection.termini, removed.position));
        Some(removed)
    }

    /// Benennt eine Station um.
    pub fn rename_station(&mut self, index: usize, name: impl Into<String>) {
        if let Some(station) = self.stations.get_mut(index) {
            station.name = name.into();
        }
    }

    /// Ändert die Beschriftungsrichtung einer Station.
    pub fn set_station_direction(&mut self, index: usize, direction: TextDirection) {
        if let Some(station) = self.stations.get_mut(index) {
            station.direction = direction;
        }
    }

    /// Fügt eine Verbindung hinzu. Self-Loops werden still ignoriert.
    pub fn add_connection(&mut self, connection: Connection) {
        if connection.termini.0 == connection.termini.1 {
            log::warn!("Degenerierte Verbindung verworfen (beide Endpunkte gleich)");
            return;
        }
        self.connections.push(connection);
    }

    /// Entfernt eine Verbindung über ihren Index.
    pub fn remove_connection(&mut self, index: usize) -> Option<Connection> {
        if index >= self.connections.len() {
            return None;
        }
        Some(self.connections.remove(index))
    }

    /// Färbt eine Verbindung um.
    pub fn recolor_connection(&mut self, index: usize, color: Color) {
        if let Some(connection) = self.connections.get_mut(index) {
            connection.color = color;
        }
    }

    /// Fügt einen Fluss hinzu. Self-Loops werden still ignoriert.
    pub fn add_river(&mut self, river: River) {
        if river.termini.0 == river.termini.1 {
            log::warn!("Degenerierter Fluss verworfen (beide Endpunkte gleich)");
            return;
        }
        self.rivers.push(river);
    }

    /// Entfernt einen Fluss über seinen Index.
    pub fn remove_river(&mut self, index: usize) -> Option<River> {
        if index >= self.rivers.len() {
            return None;
        }
        Some(self.rivers.remove(index))
    }

    /// Färbt einen Fluss um.
    pub fn recolor_river(&mut self, index: usize, color: Color) {
        if let Some(river) = self.rivers.get_mut(index) {
            river.color = color;
        }
    }

    // ── Zähler ──────────────────────────────────────────────────────

    /// Gibt die Anzahl der Stationen zurück.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Gibt die Anzahl der Verbindungen zurück.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Gibt die Anzahl der Flüsse zurück.
    pub fn river_count(&self) -> usize {
        self.rivers.len()
    }
}

#[cfg(test)]
mod tests;
