//! Use-Case-Funktionen für Zoom, Pan und Canvas-Größe.

use glam::UVec2;

use crate::app::state::PanDrag;
use crate::app::AppState;
use crate::core::Coordinate;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.transform.zoom_in();
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.transform.zoom_out();
}

/// Setzt Zoom und Pan auf die Ausgangsansicht zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.transform.reset();
    state.view.pan_drag = None;
}

/// Beginnt eine Pan-Geste an der Zeigerposition.
pub fn begin_pan(state: &mut AppState, pointer: Coordinate) {
    state.view.transform.pan_origin = state.view.transform.pan;
    state.view.pan_drag = Some(PanDrag {
        origin_pan: state.view.transform.pan,
        origin_pointer: pointer,
    });
}

/// Schreibt eine laufende Pan-Geste fort.
///
/// Ohne begonnene Geste ist die Bewegung ein No-op; das passiert,
/// wenn die Sekundärtaste außerhalb des Fensters gedrückt wurde.
pub fn update_pan(state: &mut AppState, pointer: Coordinate) {
    let Some(drag) = state.view.pan_drag else {
        return;
    };
    state.view.transform.pan = drag.origin_pan + (pointer - drag.origin_pointer);
}

/// Beendet eine Pan-Geste und friert den erreichten Stand ein.
pub fn end_pan(state: &mut AppState) {
    state.view.transform.pan_origin = state.view.transform.pan;
    state.view.pan_drag = None;
}

/// Übernimmt eine neue Canvas-Größe.
pub fn set_canvas_size(state: &mut AppState, size: UVec2) {
    if size.x == 0 || size.y == 0 {
        log::warn!("Canvas-Größe {:?} ignoriert", size);
        return;
    }
    state.view.canvas_size = size;
}
