use glam::UVec2;

use crate::core::Coordinate;

/// Aktion einer zweistufigen Strecken-Operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwoStepAction {
    /// Neue Strecke anlegen (Farbe wird abgefragt)
    Add,
    /// Bestehende Strecke entfernen (mit Rückfrage)
    Remove,
    /// Bestehende Strecke umfärben (Farbe wird abgefragt)
    Recolor,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
/// Positionen sind hier bereits in den Modellraum umgerechnet und gerastert.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Station an Modellposition anlegen
    AddStation { at: Coordinate },
    /// Station an Modellposition entfernen
    RemoveStation { at: Coordinate },
    /// Station an Modellposition umbenennen
    RenameStation { at: Coordinate },
    /// Beschriftungsrichtung der Station an Modellposition ändern
    ChangeTextDirection { at: Coordinate },

    /// Klick einer zweistufigen Verbindungs-Operation
    ConnectionClick { at: Coordinate, action: TwoStepAction },
    /// Klick einer zweistufigen Fluss-Operation
    RiverClick { at: Coordinate, action: TwoStepAction },

    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Ansicht zurücksetzen
    ResetView,

    /// Pan-Geste beginnen (Zeiger im normalisierten Bildschirmraum)
    BeginPan { pointer: Coordinate },
    /// Pan-Geste fortschreiben
    UpdatePan { pointer: Coordinate },
    /// Pan-Geste abschließen
    EndPan,

    /// Canvas-Größe setzen
    SetCanvasSize { size: UVec2 },

    /// Datei unter neuem Pfad speichern
    SaveFileAs,
    /// Datei öffnen und Modell ersetzen
    OpenFile,
    /// Ansicht als PNG exportieren
    ExportImage,
    /// Anwendung beenden
    RequestExit,
}
