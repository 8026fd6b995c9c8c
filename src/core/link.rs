//! Verbindungen und Flüsse: farbige Strecken zwischen zwei Endpunkten.

use super::{Color, Coordinate};

/// Eine Verbindung zwischen zwei Stations-Positionen.
///
/// Die Endpunkte sind reine Positionen, keine Referenzen — beim Löschen
/// einer Station räumt der Editor betroffene Verbindungen explizit auf.
/// Mehrere Verbindungen zwischen demselben Paar sind erlaubt und werden
/// als parallele Spuren gezeichnet.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Die beiden Endpunkte (Reihenfolge ohne Bedeutung für Lookups)
    pub termini: (Coordinate, Coordinate),
    /// Linienfarbe
    pub color: Color,
}

impl Connection {
    /// Erstellt eine neue Verbindung.
    pub fn new(termini: (Coordinate, Coordinate), color: Color) -> Self {
        Self { termini, color }
    }
}

/// Ein Fluss zwischen zwei beliebigen Punkten.
///
/// Im Gegensatz zu Verbindungen müssen die Endpunkte keine Stationen
/// sein; Flüsse überleben deshalb auch das Löschen einer Station,
/// selbst wenn ein Endpunkt positionsgleich war.
#[derive(Debug, Clone, PartialEq)]
pub struct River {
    /// Die beiden Endpunkte (Reihenfolge ohne Bedeutung für Lookups)
    pub termini: (Coordinate, Coordinate),
    /// Linienfarbe
    pub color: Color,
}

impl River {
    /// Erstellt einen neuen Fluss.
    pub fn new(termini: (Coordinate, Coordinate), color: Color) -> Self {
        Self { termini, color }
    }
}

/// Prüft ob ein Endpunkt-Paar eine gespeicherte Strecke trifft.
///
/// Symmetrisch: `(A,B)` trifft auch eine Strecke mit Endpunkten `(B,A)`.
pub fn termini_match(stored: &(Coordinate, Coordinate), pair: (Coordinate, Coordinate)) -> bool {
    (stored.0 == pair.0 && stored.1 == pair.1) || (stored.0 == pair.1 && stored.1 == pair.0)
}

/// Prüft ob eine Position unter den Endpunkten einer Strecke vorkommt.
pub fn termini_contain(stored: &(Coordinate, Coordinate), position: Coordinate) -> bool {
    stored.0 == position || stored.1 == position
}
