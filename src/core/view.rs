//! View-Transformation: Zoom und Pan zwischen Modell- und Bildschirmraum.

use glam::{UVec2, Vec2};

use super::Coordinate;

/// Kleinster erlaubter Zoomfaktor (5 Stufen heraus).
pub const ZOOM_MIN: f32 = 0.031_25;
/// Größter erlaubter Zoomfaktor (5 Stufen hinein).
pub const ZOOM_MAX: f32 = 32.0;

/// Die aktuelle Ansicht auf den Netzplan.
///
/// Zoom skaliert um die Canvas-Mitte, Pan verschiebt im normalisierten
/// Raum. `pan_origin` hält den Pan-Stand beim Start einer Drag-Geste
/// fest, damit die Verschiebung relativ zum Startpunkt bleibt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Zoomfaktor, immer eine Zweierpotenz in `[ZOOM_MIN, ZOOM_MAX]`
    pub zoom: f32,
    /// Aktuelle Verschiebung im normalisierten Raum
    pub pan: Coordinate,
    /// Pan-Stand beim Beginn der laufenden Drag-Geste
    pub pan_origin: Coordinate,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Coordinate::default(),
            pan_origin: Coordinate::default(),
        }
    }
}

impl ViewTransform {
    /// Verdoppelt den Zoomfaktor, bis zur Obergrenze.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * 2.0).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Halbiert den Zoomfaktor, bis zur Untergrenze.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / 2.0).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Setzt Zoom und Pan auf die Ausgangsansicht zurück.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Coordinate::default();
        self.pan_origin = Coordinate::default();
    }

    /// Projiziert eine Modell-Koordinate in den Bildschirmraum.
    ///
    /// Skaliert um die Canvas-Mitte und verschiebt anschließend um den
    /// zoom-skalierten Pan, so wandert der Planinhalt beim Zoomen nicht
    /// unter dem Mauszeiger weg.
    pub fn project(&self, model: Coordinate, canvas: UVec2) -> Coordinate {
        let centered = model.to_pixel_cartesian(canvas).as_vec2() * self.zoom;
        Coordinate::from_pixel_cartesian(centered, canvas) + self.pan * self.zoom
    }

    /// Rechnet eine Bildschirm-Pixelposition zurück in den Modellraum.
    ///
    /// Exakte Umkehrung von [`project`](Self::project); jede
    /// Zeiger-Eingabe läuft hier durch, bevor sie gerastert wird.
    pub fn unproject(&self, pointer_px: Vec2, canvas: UVec2) -> Coordinate {
        let shifted = Coordinate::from_pixel(pointer_px, canvas) - self.pan * self.zoom;
        let centered = Vec2::new(
            shifted.x * canvas.x as f32 - (canvas.x / 2) as f32,
            shifted.y * canvas.y as f32 - (canvas.y / 2) as f32,
        );
        Coordinate::from_pixel_cartesian(centered / self.zoom, canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CANVAS: UVec2 = UVec2::new(1200, 800);

    #[test]
    fn test_zoom_in_doubles_and_clamps() {
        let mut view = ViewTransform::default();
        for _ in 0..4 {
            view.zoom_in();
        }
        assert_relative_eq!(view.zoom, 16.0);
        for _ in 0..5 {
            view.zoom_in();
        }
        assert_relative_eq!(view.zoom, ZOOM_MAX);
    }

    #[test]
    fn test_zoom_out_halves_and_clamps() {
        let mut view = ViewTransform::default();
        for _ in 0..20 {
            view.zoom_out();
        }
        assert_relative_eq!(view.zoom, ZOOM_MIN);
    }

    #[test]
    fn test_reset_restores_default_view() {
        let mut view = ViewTransform::default();
        view.zoom_in();
        view.pan = Coordinate::new(0.2, -0.1);
        view.pan_origin = view.pan;
        view.reset();
        assert_eq!(view, ViewTransform::default());
    }

    #[test]
    fn test_project_keeps_center_fixed_without_pan() {
        let mut view = ViewTransform::default();
        view.zoom_in();
        view.zoom_in();
        let center = Coordinate::new(0.5, 0.5);
        let projected = view.project(center, CANVAS);
        assert_relative_eq!(projected.x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(projected.y, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_unproject_inverts_project() {
        let mut view = ViewTransform::default();
        view.zoom_in();
        view.pan = Coordinate::new(0.125, -0.0625);

        let model = Coordinate::new(0.3, 0.7);
        let screen = view.project(model, CANVAS);
        let screen_px = Vec2::new(screen.x * CANVAS.x as f32, screen.y * CANVAS.y as f32);
        let back = view.unproject(screen_px, CANVAS);

        // Pixel-Floor kostet höchstens einen Pixel Genauigkeit
        assert_relative_eq!(back.x, model.x, epsilon = 2.0 / CANVAS.x as f32);
        assert_relative_eq!(back.y, model.y, epsilon = 2.0 / CANVAS.y as f32);
    }

    #[test]
    fn test_unproject_applies_pan() {
        let mut view = ViewTransform::default();
        view.pan = Coordinate::new(0.1, 0.0);

        // Zeiger auf der verschobenen Mitte trifft die Modell-Mitte
        let pointer = Vec2::new((0.6 * CANVAS.x as f32).floor(), (0.5 * CANVAS.y as f32).floor());
        let model = view.unproject(pointer, CANVAS);
        assert_relative_eq!(model.x, 0.5, epsilon = 2.0 / CANVAS.x as f32);
        assert_relative_eq!(model.y, 0.5, epsilon = 2.0 / CANVAS.y as f32);
    }
}
