//! Tastatur- und Maus-Akkorde des Editors.
//!
//! Übersetzt rohe Eingabe-Events plus gehaltene Tasten in `AppIntent`s.
//! Editier-Akkorde (Alt+…) feuern beim Loslassen der Primärtaste,
//! globale Akkorde (Ctrl+…) direkt beim Tastendruck.

use glam::{UVec2, Vec2};

use crate::app::AppIntent;


/// Momentaufnahme der gehaltenen Tasten.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKeys {
    /// Alt (links oder rechts)
    pub alt: bool,
    /// Ctrl (links oder rechts)
    pub ctrl: bool,
    /// Buchstabe S
    pub s: bool,
    /// Buchstabe C
    pub c: bool,
    /// Buchstabe V
    pub v: bool,
    /// Buchstabe R
    pub r: bool,
    /// Buchstabe N
    pub n: bool,
    /// Buchstabe D
    pub d: bool,
    /// Buchstabe O
    pub o: bool,
    /// Buchstabe E
    pub e: bool,
    /// Plus-Taste
    pub plus: bool,
    /// Gleichheitszeichen (Plus ohne Shift auf vielen Layouts)
    pub equals: bool,
    /// Minus-Taste
    pub minus: bool,
    /// Ziffer 0
    pub zero: bool,
}

/// Rohe Eingabe-Events des Frontends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Eine Taste wurde gedrückt (gehaltene Tasten stehen in `HeldKeys`)
    KeyDown,
    /// Primärtaste (links) wurde losgelassen
    PrimaryReleased { pointer_px: Vec2 },
    /// Sekundärtaste (rechts) wurde gedrückt
    SecondaryPressed { pointer_px: Vec2 },
    /// Sekundärtaste wurde losgelassen
    SecondaryReleased,
    /// Zeiger bewegt sich bei gehaltener Sekundärtaste
    PointerDragged { pointer_px: Vec2 },
    /// Fenstergröße hat sich geändert
    Resized { size: UVec2 },
    /// Fenster-Schließen wurde angefordert
    Quit,
}

/// Übersetzt ein Eingabe-Event in einen `AppIntent`.
///
/// `None` bedeutet: keine bekannte Kombination, Event wird verworfen.
pub fn map_input(event: InputEvent, keys: &HeldKeys) -> Option<AppIntent> {
    match event {
        InputEvent::Quit => Some(AppIntent::ExitRequested),
        InputEvent::Resized { size } => Some(AppIntent::ViewportResized { size }),
        InputEvent::SecondaryPressed { pointer_px } => Some(AppIntent::PanStarted { pointer_px }),
        InputEvent::PointerDragged { pointer_px } => Some(AppIntent::PanMoved { pointer_px }),
        InputEvent::SecondaryReleased => Some(AppIntent::PanEnded),
        InputEvent::KeyDown => map_key_down(keys),
        InputEvent::PrimaryReleased { pointer_px } => map_primary_released(pointer_px, keys),
    }
}

/// Globale Akkorde: Ctrl+S/O/E, Ctrl+Plus/Minus/0.
fn map_key_down(keys: &HeldKeys) -> Option<AppIntent> {
    if !keys.ctrl {
        return None;
    }
    if keys.s {
        return Some(AppIntent::SaveAsRequested);
    }
    if keys.o {
        return Some(AppIntent::OpenFileRequested);
    }
    if keys.e {
        return Some(AppIntent::ExportImageRequested);
    }
    if keys.minus {
        return Some(AppIntent::ZoomOutRequested);
    }
    if keys.plus || keys.equals {
        return Some(AppIntent::ZoomInRequested);
    }
    if keys.zero {
        return Some(AppIntent::ResetViewRequested);
    }
    None
}

/// Editier-Akkorde beim Loslassen der Primärtaste.
///
/// Alt+C wird vor Alt+S vor Alt+V geprüft; innerhalb eines Akkords
/// gewinnt R vor N vor D vor der Basis-Operation.
fn map_primary_released(pointer_px: Vec2, keys: &HeldKeys) -> Option<AppIntent> {
    if !keys.alt {
        return None;
    }

    if keys.c {
        if keys.r {
            return Some(AppIntent::RemoveConnectionRequested { pointer_px });
        }
        if keys.n {
            return Some(AppIntent::RecolorConnectionRequested { pointer_px });
        }
        return Some(AppIntent::AddConnectionRequested { pointer_px });
    }

    if keys.s {
        if keys.r {
            return Some(AppIntent::RemoveStationRequested { pointer_px });
        }
        if keys.n {
            return Some(AppIntent::RenameStationRequested { pointer_px });
        }
        if keys.d {
            return Some(AppIntent::ChangeTextDirectionRequested { pointer_px });
        }
        return Some(AppIntent::AddStationRequested { pointer_px });
    }

    if keys.v {
        if keys.r {
            return Some(AppIntent::RemoveRiverRequested { pointer_px });
        }
        if keys.n {
            return Some(AppIntent::RecolorRiverRequested { pointer_px });
        }
        return Some(AppIntent::AddRiverRequested { pointer_px });
    }

    None
}
