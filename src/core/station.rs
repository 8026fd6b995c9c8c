//! Repräsentiert eine Station im Netzplan.

use super::{Coordinate, TextDirection};

/// Eine Station mit Position, Name und Beschriftungsrichtung.
///
/// Stationen haben keine explizite ID — ihre Identität ist die
/// (gerasterte) Position. Der Editor verhindert, dass zwei Stationen
/// dieselbe Gitterzelle belegen.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Position im normalisierten Raum (nach Grid-Snap)
    pub position: Coordinate,
    /// Anzeigename der Station
    pub name: String,
    /// Richtung(en) der Namensbeschriftung
    pub direction: TextDirection,
}

impl Station {
    /// Erstellt eine neue Station mit Standard-Beschriftungsrichtung.
    pub fn new(position: Coordinate, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            direction: TextDirection::default(),
        }
    }

    /// Erstellt eine Station mit expliziter Beschriftungsrichtung.
    pub fn with_direction(
        position: Coordinate,
        name: impl Into<String>,
        direction: TextDirection,
    ) -> Self {
        Self {
            position,
            name: name.into(),
            direction,
        }
    }
}
