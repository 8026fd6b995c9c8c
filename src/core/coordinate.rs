//! Auflösungsunabhängige Koordinaten im normalisierten Raum `[0,1]×[0,1]`.

use glam::{IVec2, UVec2, Vec2};
use std::ops::{Add, Mul, Sub};

/// Eine 2D-Position als Bruchteil der Canvas-Größe.
///
/// Alle Vergleiche und das Grid-Snapping finden in diesem Raum statt,
/// dadurch bleibt der Netzplan unabhängig von der Fenster-Auflösung.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// Horizontaler Anteil (0.0 = linker Rand, 1.0 = rechter Rand)
    pub x: f32,
    /// Vertikaler Anteil (0.0 = oberer Rand, 1.0 = unterer Rand)
    pub y: f32,
}

impl Coordinate {
    /// Erstellt eine Koordinate aus normalisierten Anteilen.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Erstellt eine Koordinate aus einer Pixel-Position.
    ///
    /// Akzeptiert bewusst `Vec2` statt `IVec2`: beim Projizieren entstehen
    /// skalierte Zwischenwerte, die erst hier wieder normalisiert werden.
    pub fn from_pixel(px: Vec2, canvas: UVec2) -> Self {
        Self {
            x: px.x / canvas.x as f32,
            y: px.y / canvas.y as f32,
        }
    }

    /// Erstellt eine Koordinate aus einer Pixel-Position relativ zur Canvas-Mitte.
    pub fn from_pixel_cartesian(px: Vec2, canvas: UVec2) -> Self {
        Self::from_pixel(
            Vec2::new(
                px.x + (canvas.x / 2) as f32,
                px.y + (canvas.y / 2) as f32,
            ),
            canvas,
        )
    }

    /// Gibt die Position in ganzen Pixeln zurück (floor).
    pub fn to_pixel(&self, canvas: UVec2) -> IVec2 {
        IVec2::new(
            (self.x * canvas.x as f32).floor() as i32,
            (self.y * canvas.y as f32).floor() as i32,
        )
    }

    /// Gibt die normalisierte Position relativ zur Canvas-Mitte zurück.
    /// Unabhängig von der Canvas-Größe, für Winkel- und Offset-Mathematik.
    pub fn to_cartesian(&self) -> Vec2 {
        Vec2::new(self.x - 0.5, self.y - 0.5)
    }

    /// Gibt die Pixel-Position relativ zur Canvas-Mitte zurück.
    pub fn to_pixel_cartesian(&self, canvas: UVec2) -> IVec2 {
        let px = self.to_pixel(canvas);
        IVec2::new(px.x - (canvas.x / 2) as i32, px.y - (canvas.y / 2) as i32)
    }

    /// Rastet die Koordinate auf ein Gitter mit `resolution` Zellen pro Achse ein.
    ///
    /// `floor(v*res + 0.5)/res` pro Achse. Wiederholtes Anwenden ist ein No-op.
    /// Auflösung 0 (etwa aus einer kaputten Konfiguration) zählt als 1,
    /// sonst entstünden NaN-Positionen, an denen kein Lookup mehr greift.
    pub fn snapped_to_grid(&self, resolution: u32) -> Self {
        let res = resolution.max(1) as f32;
        Self {
            x: ((self.x * res) + 0.5).floor() / res,
            y: ((self.y * res) + 0.5).floor() / res,
        }
    }

    /// Formatiert die Position als Pixel-Paar, z.B. `(240, 160)`.
    pub fn format_pixel(&self, canvas: UVec2) -> String {
        let px = self.to_pixel(canvas);
        format!("({}, {})", px.x, px.y)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul for Coordinate {
    type Output = Coordinate;

    fn mul(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x * other.x, self.y * other.y)
    }
}

impl Mul<f32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, factor: f32) -> Coordinate {
        Coordinate::new(self.x * factor, self.y * factor)
    }
}
