//! Baut die RenderScene aus dem AppState.
//!
//! Die gesamte View-Mathematik (Projektion, Zoom-Skalierung,
//! Spur-Versatz paralleler Verbindungen) passiert hier; das Frontend
//! zeichnet die fertigen Pixel-Primitive nur noch.

use glam::IVec2;

use super::AppState;
use crate::shared::{ConnectionLine, RenderScene, RiverLine, StationLabel, StationMarker};

/// Baut die Zeichenliste für den aktuellen Zustand.
///
/// Reihenfolge: Flüsse, dann Verbindungen, dann Stationen mit Labels.
pub fn build(state: &AppState) -> RenderScene {
    let canvas = state.view.canvas_size;
    let view = &state.view.transform;
    let zoom = view.zoom;
    let options = &state.options;

    let mut scene = RenderScene::default();

    for river in &state.map.rivers {
        let stroke =
            ((options.river_stroke as f32 * zoom).floor() as i64).clamp(1, 1000) as u32;
        scene.rivers.push(RiverLine {
            from_px: view.project(river.termini.0, canvas).to_pixel(canvas),
            to_px: view.project(river.termini.1, canvas).to_pixel(canvas),
            color: river.color,
            stroke_px: stroke,
            cap_radius_px: stroke as f32 / 2.0,
        });
    }

    for (index, connection) in state.map.connections.iter().enumerate() {
        // Parallele Strecken fächern quer zur Streckenrichtung auf
        let lane = state.map.connection_lane(index);
        let from_c = connection.termini.0.to_pixel_cartesian(canvas).as_vec2();
        let to_c = connection.termini.1.to_pixel_cartesian(canvas).as_vec2();
        let angle = (to_c.y - from_c.y).atan2(to_c.x - from_c.x);

        let stroke_base = options.connection_stroke as f32;
        let offset = IVec2::new(
            (stroke_base * lane * angle.sin() + 0.5).floor() as i32,
            (stroke_base * lane * angle.cos() + 0.5).floor() as i32,
        );

        scene.connections.push(ConnectionLine {
            from_px: view.project(connection.termini.0, canvas).to_pixel(canvas) + offset,
            to_px: view.project(connection.termini.1, canvas).to_pixel(canvas) + offset,
            color: connection.color,
            stroke_px: ((stroke_base * zoom).floor() as i64).clamp(1, 10000) as u32,
        });
    }

    for station in &state.map.stations {
        let center = view.project(station.position, canvas).to_pixel(canvas);
        scene.stations.push(StationMarker {
            center_px: center,
            ring_radius_px: zoom * (options.station_stroke + options.station_size) as f32,
            core_radius_px: zoom * options.station_size as f32,
        });
        scene.labels.push(StationLabel {
            anchor_px: center,
            text: station.name.clone(),
            direction: station.direction,
            offset_px: options.name_distance as f32 * zoom,
            size_px: options.name_text_size as f32 * zoom,
        });
    }

    scene
}
