//! 24-Bit-RGB-Farben mit gepackter Integer-Darstellung.

/// Eine RGB-Farbe mit 8 Bit pro Kanal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Rot-Kanal
    pub r: u8,
    /// Grün-Kanal
    pub g: u8,
    /// Blau-Kanal
    pub b: u8,
}

impl Color {
    /// Größter gültiger gepackter Farbwert (weiß).
    pub const MAX_PACKED: i64 = 0xFF_FF_FF;

    /// Erstellt eine Farbe aus den drei Kanälen.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Entpackt einen Integer-Farbwert (`r*65536 + g*256 + b`).
    ///
    /// Werte oberhalb von 24 Bit werden modular abgeschnitten;
    /// das Clamping passiert bei der Eingabe, nicht hier.
    pub fn from_packed(value: u32) -> Self {
        Self {
            r: (value / 65536 % 256) as u8,
            g: (value / 256 % 256) as u8,
            b: (value % 256) as u8,
        }
    }

    /// Packt die Farbe in einen Integer-Wert.
    pub fn to_packed(self) -> u32 {
        self.r as u32 * 65536 + self.g as u32 * 256 + self.b as u32
    }

    /// Begrenzt einen Eingabewert auf den gültigen 24-Bit-Bereich.
    pub fn clamp_packed(value: i64) -> u32 {
        value.clamp(0, Self::MAX_PACKED) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_bijection() {
        for packed in [0u32, 0x00_00_01, 0x00_FF_00, 0x12_34_56, 0xFF_FF_FF] {
            assert_eq!(Color::from_packed(packed).to_packed(), packed);
        }
    }

    #[test]
    fn test_unpack_channels() {
        let color = Color::from_packed(0x12_34_56);
        assert_eq!(color, Color::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_unpack_wraps_overflow() {
        // Nur die unteren 24 Bit zählen
        assert_eq!(Color::from_packed(0x01_00_00_02), Color::new(0, 0, 2));
    }

    #[test]
    fn test_clamp_packed() {
        assert_eq!(Color::clamp_packed(-5), 0);
        assert_eq!(Color::clamp_packed(0x1_00_00_00), 0xFF_FF_FF);
        assert_eq!(Color::clamp_packed(0x00_FF_00), 0x00_FF_00);
    }
}
