//! Handler für Zoom, Pan und Canvas-Größe.

use glam::UVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Coordinate;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Setzt die Ansicht auf den Ausgangszustand zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Beginnt eine Pan-Geste.
pub fn begin_pan(state: &mut AppState, pointer: Coordinate) {
    use_cases::camera::begin_pan(state, pointer);
}

/// Schreibt eine laufende Pan-Geste fort.
pub fn update_pan(state: &mut AppState, pointer: Coordinate) {
    use_cases::camera::update_pan(state, pointer);
}

/// Beendet eine Pan-Geste.
pub fn end_pan(state: &mut AppState) {
    use_cases::camera::end_pan(state);
}

/// Übernimmt eine neue Canvas-Größe.
pub fn set_canvas_size(state: &mut AppState, size: UVec2) {
    use_cases::camera::set_canvas_size(state, size);
}
