//! Zentrale Konfiguration für KMetroMaker.
//!
//! `EditorOptions` enthält alle aus `config.toml` ladbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// ── Fenster ─────────────────────────────────────────────────────────

/// Fensterbreite in Pixeln.
pub const WINDOW_WIDTH: u32 = 1200;
/// Fensterhöhe in Pixeln.
pub const WINDOW_HEIGHT: u32 = 800;

// ── Beschriftung ────────────────────────────────────────────────────

/// Schriftgröße der Stationsnamen in Punkten (bei Zoom 1.0).
pub const NAME_TEXT_SIZE: u32 = 24;
/// Abstand der Beschriftung vom Stations-Marker in Pixeln (bei Zoom 1.0).
pub const NAME_DISTANCE: u32 = 15;

// ── Gitter ──────────────────────────────────────────────────────────

/// Gitterzellen pro Achse für das Positions-Snapping.
pub const GRID_SPACE: u32 = 20;

// ── Strichstärken ───────────────────────────────────────────────────

/// Ringstärke der Stations-Marker in Pixeln (bei Zoom 1.0).
pub const STATION_STROKE: u32 = 2;
/// Kernradius der Stations-Marker in Pixeln (bei Zoom 1.0).
pub const STATION_SIZE: u32 = 8;
/// Linienstärke der Verbindungen in Pixeln (bei Zoom 1.0).
pub const CONNECTION_STROKE: u32 = 6;
/// Linienstärke der Flüsse in Pixeln (bei Zoom 1.0).
pub const RIVER_STROKE: u32 = 25;

/// Alle ladbaren Editor-Optionen.
///
/// Die TOML-Schlüssel sind camelCase; jeder fehlende Schlüssel fällt
/// einzeln auf seinen Default zurück, eine teilbefüllte Datei ist
/// also völlig legitim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorOptions {
    /// Fensterbreite in Pixeln
    pub window_width: u32,
    /// Fensterhöhe in Pixeln
    pub window_height: u32,
    /// Pfad zur Beschriftungs-Schriftart
    pub font: String,
    /// Schriftgröße der Stationsnamen (bei Zoom 1.0)
    pub name_text_size: u32,
    /// Abstand der Beschriftung vom Marker (bei Zoom 1.0)
    pub name_distance: u32,
    /// Gitterzellen pro Achse
    pub grid_space: u32,
    /// Ringstärke der Stations-Marker
    pub station_stroke: u32,
    /// Kernradius der Stations-Marker
    pub station_size: u32,
    /// Linienstärke der Verbindungen
    pub connection_stroke: u32,
    /// Linienstärke der Flüsse
    pub river_stroke: u32,
    /// `#hex`-Syntax in der Farbeingabe erlauben
    pub hex_compatible: bool,
    /// Benannte Farben für die `$name`-Syntax der Farbeingabe
    pub palette_colors: HashMap<String, u32>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            font: "resources/Roboto.png".to_string(),
            name_text_size: NAME_TEXT_SIZE,
            name_distance: NAME_DISTANCE,
            grid_space: GRID_SPACE,
            station_stroke: STATION_STROKE,
            station_size: STATION_SIZE,
            connection_stroke: CONNECTION_STROKE,
            river_stroke: RIVER_STROKE,
            hex_compatible: true,
            palette_colors: HashMap::new(),
        }
    }
}

impl EditorOptions {
    /// Lädt die Optionen über die Standard-Kette:
    /// `config.toml`, sonst `resources/default.toml`, sonst Defaults.
    pub fn load() -> Self {
        Self::load_from_file(Path::new("config.toml"))
            .or_else(|| Self::load_from_file(Path::new("resources/default.toml")))
            .unwrap_or_else(|| {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            })
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: `None`.
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(options) => {
                log::info!("Optionen geladen aus: {}", path.display());
                Some(options)
            }
            Err(e) => {
                log::warn!("Optionen-Datei {} fehlerhaft: {}", path.display(), e);
                None
            }
        }
    }

    /// Fenstergröße als Vektor.
    pub fn window_size(&self) -> glam::UVec2 {
        glam::UVec2::new(self.window_width, self.window_height)
    }
}
