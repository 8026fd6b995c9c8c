use glam::{UVec2, Vec2};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik;
/// Zeigerpositionen sind rohe Bildschirm-Pixel, noch ohne View-Mathematik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Station unter dem Zeiger anlegen
    AddStationRequested { pointer_px: Vec2 },
    /// Station unter dem Zeiger entfernen
    RemoveStationRequested { pointer_px: Vec2 },
    /// Station unter dem Zeiger umbenennen
    RenameStationRequested { pointer_px: Vec2 },
    /// Beschriftungsrichtung der Station unter dem Zeiger ändern
    ChangeTextDirectionRequested { pointer_px: Vec2 },

    /// Verbindung anlegen (zweistufig, Klick auf einen Endpunkt)
    AddConnectionRequested { pointer_px: Vec2 },
    /// Verbindung entfernen (zweistufig)
    RemoveConnectionRequested { pointer_px: Vec2 },
    /// Verbindung umfärben (zweistufig)
    RecolorConnectionRequested { pointer_px: Vec2 },

    /// Fluss anlegen (zweistufig, Endpunkte sind freie Punkte)
    AddRiverRequested { pointer_px: Vec2 },
    /// Fluss entfernen (zweistufig)
    RemoveRiverRequested { pointer_px: Vec2 },
    /// Fluss umfärben (zweistufig)
    RecolorRiverRequested { pointer_px: Vec2 },

    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Zoom und Pan auf die Ausgangsansicht zurücksetzen
    ResetViewRequested,

    /// Pan-Geste beginnt (Sekundärtaste gedrückt)
    PanStarted { pointer_px: Vec2 },
    /// Pan-Geste läuft (Zeiger bewegt sich bei gehaltener Sekundärtaste)
    PanMoved { pointer_px: Vec2 },
    /// Pan-Geste beendet
    PanEnded,

    /// Viewport-Größe hat sich geändert
    ViewportResized { size: UVec2 },

    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Datei öffnen
    OpenFileRequested,
    /// Ansicht als PNG exportieren
    ExportImageRequested,
    /// Anwendung beenden
    ExitRequested,
}
