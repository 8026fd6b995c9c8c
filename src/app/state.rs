//! Application State — zentrale Datenhaltung.

use std::path::PathBuf;

use glam::{UVec2, Vec2};

use super::CommandLog;
use crate::core::{Coordinate, MetroMap, ViewTransform};
use crate::shared::EditorOptions;

/// Wartender erster Schritt einer zweistufigen Operation.
///
/// Die Modi schließen sich gegenseitig aus: ein neuer erster Klick
/// einer anderen Operation ersetzt den gemerkten Zustand vollständig.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PendingSelection {
    /// Keine Operation wartet auf einen zweiten Klick
    #[default]
    Idle,
    /// Erster Endpunkt einer Verbindungs-Operation (Stations-Index)
    Station { index: usize },
    /// Erster Endpunkt einer Fluss-Operation (freier Punkt)
    RiverPoint { at: Coordinate },
}

/// Zustand der zweistufigen Editier-Operationen.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorState {
    /// Gemerkter erster Klick
    pub pending: PendingSelection,
}

/// Laufende Pan-Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanDrag {
    /// Pan-Stand beim Gestenbeginn
    pub origin_pan: Coordinate,
    /// Zeigerposition beim Gestenbeginn (normalisierter Bildschirmraum)
    pub origin_pointer: Coordinate,
}

/// View-bezogener Anwendungszustand.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Zoom- und Pan-Transformation
    pub transform: ViewTransform,
    /// Aktuelle Canvas-Größe in Pixeln
    pub canvas_size: UVec2,
    /// Laufende Pan-Geste, falls die Sekundärtaste gehalten wird
    pub pan_drag: Option<PanDrag>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand mit gegebener Canvas-Größe.
    pub fn new(canvas_size: UVec2) -> Self {
        Self {
            transform: ViewTransform::default(),
            canvas_size,
            pan_drag: None,
        }
    }

    /// Rechnet eine Zeiger-Pixelposition in eine gerasterte Modellposition um.
    ///
    /// Jede Klick-Eingabe läuft durch diese Umkehrung der View-Transformation,
    /// dadurch treffen Klicks auch bei Zoom und Pan die richtige Gitterzelle.
    pub fn pointer_to_model(&self, pointer_px: Vec2, grid: u32) -> Coordinate {
        self.transform
            .unproject(pointer_px, self.canvas_size)
            .snapped_to_grid(grid)
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Zielpfad eines angeforderten PNG-Exports; das Frontend rendert
    /// den nächsten Frame, schreibt die Datei und räumt das Feld ab
    pub pending_image_export: Option<PathBuf>,
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Der aktuelle Netzplan
    pub map: MetroMap,
    /// View-State
    pub view: ViewState,
    /// Editor-State (zweistufige Operationen)
    pub editor: EditorState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let canvas = options.window_size();
        Self {
            map: MetroMap::new(),
            view: ViewState::new(canvas),
            editor: EditorState::default(),
            ui: UiState::default(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
