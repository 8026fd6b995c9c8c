//! Bitmaske für die Platzierungsrichtung von Stations-Beschriftungen.

use std::ops::{BitOr, BitOrAssign};

/// Richtung(en), in die der Stationsname vom Marker weg versetzt wird.
///
/// Jede nicht-leere Teilmenge der vier Richtungen ist gültig,
/// z.B. LEFT|UP für eine Beschriftung links oberhalb des Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextDirection(u8);

impl TextDirection {
    /// Beschriftung links vom Marker
    pub const LEFT: TextDirection = TextDirection(1);
    /// Beschriftung rechts vom Marker
    pub const RIGHT: TextDirection = TextDirection(2);
    /// Beschriftung oberhalb des Markers
    pub const UP: TextDirection = TextDirection(4);
    /// Beschriftung unterhalb des Markers
    pub const DOWN: TextDirection = TextDirection(8);

    const ALL_BITS: u8 = 0b1111;

    /// Gibt den rohen Bitwert zurück (Persistenz-Format).
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Erstellt eine Richtung aus einem Bitwert.
    ///
    /// Leere Masken und unbekannte Bits werden abgelehnt —
    /// gespeicherte Richtungen müssen eine nicht-leere Teilmenge sein.
    pub fn from_bits(bits: u8) -> Option<TextDirection> {
        if bits == 0 || bits & !Self::ALL_BITS != 0 {
            return None;
        }
        Some(TextDirection(bits))
    }

    /// Prüft ob eine Richtung in der Maske enthalten ist.
    pub fn contains(self, direction: TextDirection) -> bool {
        self.0 & direction.0 != 0
    }

    /// Parst eine Benutzereingabe aus den Buchstaben L/R/U/D.
    ///
    /// Andere Zeichen werden ignoriert; ohne gültigen Buchstaben `None`.
    pub fn parse(input: &str) -> Option<TextDirection> {
        let mut bits = 0u8;
        if input.contains('L') {
            bits |= Self::LEFT.0;
        }
        if input.contains('R') {
            bits |= Self::RIGHT.0;
        }
        if input.contains('U') {
            bits |= Self::UP.0;
        }
        if input.contains('D') {
            bits |= Self::DOWN.0;
        }
        Self::from_bits(bits)
    }
}

impl Default for TextDirection {
    /// Neue Stationen beschriften rechts.
    fn default() -> Self {
        Self::RIGHT
    }
}

impl BitOr for TextDirection {
    type Output = TextDirection;

    fn bitor(self, other: TextDirection) -> TextDirection {
        TextDirection(self.0 | other.0)
    }
}

impl BitOrAssign for TextDirection {
    fn bitor_assign(&mut self, other: TextDirection) {
        self.0 |= other.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_letters() {
        assert_eq!(TextDirection::parse("L"), Some(TextDirection::LEFT));
        assert_eq!(TextDirection::parse("R"), Some(TextDirection::RIGHT));
        assert_eq!(TextDirection::parse("U"), Some(TextDirection::UP));
        assert_eq!(TextDirection::parse("D"), Some(TextDirection::DOWN));
    }

    #[test]
    fn test_parse_combination() {
        let combined = TextDirection::parse("LU").expect("LU ist gültig");
        assert!(combined.contains(TextDirection::LEFT));
        assert!(combined.contains(TextDirection::UP));
        assert!(!combined.contains(TextDirection::RIGHT));
    }

    #[test]
    fn test_parse_ignores_other_characters() {
        assert_eq!(TextDirection::parse("xRy"), Some(TextDirection::RIGHT));
        assert_eq!(TextDirection::parse(""), None);
        assert_eq!(TextDirection::parse("xyz"), None);
    }

    #[test]
    fn test_from_bits_rejects_empty_and_unknown() {
        assert_eq!(TextDirection::from_bits(0), None);
        assert_eq!(TextDirection::from_bits(16), None);
        assert_eq!(TextDirection::from_bits(3).map(TextDirection::bits), Some(3));
    }

    #[test]
    fn test_bits_roundtrip() {
        let all = TextDirection::LEFT | TextDirection::RIGHT | TextDirection::UP | TextDirection::DOWN;
        assert_eq!(TextDirection::from_bits(all.bits()), Some(all));
    }
}
