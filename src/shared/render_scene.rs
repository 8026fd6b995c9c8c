//! Render-Szene als expliziter Übergabevertrag zwischen App und Frontend.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Frontend sie nur
//! noch zeichnet. Alle Größen sind bereits zoom-skaliert und in
//! Bildschirm-Pixeln; das Frontend braucht keine View-Mathematik mehr.

use glam::IVec2;

use crate::core::{Color, TextDirection};

/// Read-only Zeichenliste für einen Frame.
///
/// Die Reihenfolge der Listen ist die Zeichenreihenfolge: Flüsse
/// unter Verbindungen, Verbindungen unter Stationen und Labels.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Flüsse, zuerst gezeichnet
    pub rivers: Vec<RiverLine>,
    /// Verbindungen, über den Flüssen
    pub connections: Vec<ConnectionLine>,
    /// Stations-Marker, über den Strecken
    pub stations: Vec<StationMarker>,
    /// Namens-Beschriftungen, zuoberst
    pub labels: Vec<StationLabel>,
}

/// Eine Verbindungs-Linie in Bildschirm-Pixeln.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionLine {
    /// Startpunkt, inklusive Spur-Versatz bei Parallelstrecken
    pub from_px: IVec2,
    /// Endpunkt, inklusive Spur-Versatz
    pub to_px: IVec2,
    /// Linienfarbe
    pub color: Color,
    /// Zoom-skalierte Linienstärke
    pub stroke_px: u32,
}

/// Eine Fluss-Linie in Bildschirm-Pixeln.
#[derive(Debug, Clone, PartialEq)]
pub struct RiverLine {
    /// Startpunkt
    pub from_px: IVec2,
    /// Endpunkt
    pub to_px: IVec2,
    /// Linienfarbe
    pub color: Color,
    /// Zoom-skalierte Linienstärke
    pub stroke_px: u32,
    /// Radius der runden Endkappen (halbe Linienstärke)
    pub cap_radius_px: f32,
}

/// Ein Stations-Marker: weißer Kern mit schwarzem Ring.
#[derive(Debug, Clone, PartialEq)]
pub struct StationMarker {
    /// Mittelpunkt in Bildschirm-Pixeln
    pub center_px: IVec2,
    /// Außenradius des Rings
    pub ring_radius_px: f32,
    /// Radius des Kerns
    pub core_radius_px: f32,
}

/// Eine Namens-Beschriftung neben einem Stations-Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct StationLabel {
    /// Marker-Mittelpunkt, von dem der Versatz ausgeht
    pub anchor_px: IVec2,
    /// Anzeigetext
    pub text: String,
    /// Richtung(en) des Versatzes
    pub direction: TextDirection,
    /// Zoom-skalierter Versatz vom Marker
    pub offset_px: f32,
    /// Zoom-skalierte Schriftgröße
    pub size_px: f32,
}
