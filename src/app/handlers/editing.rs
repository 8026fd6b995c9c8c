//! Handler für Stations-, Verbindungs- und Fluss-Operationen.

use crate::app::events::TwoStepAction;
use crate::app::prompt::Prompter;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Coordinate;

/// Legt eine Station an der Modellposition an.
pub fn add_station(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate) {
    use_cases::stations::add(state, prompter, at);
}

/// Entfernt die Station an der Modellposition.
pub fn remove_station(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate) {
    use_cases::stations::remove(state, prompter, at);
}

/// Benennt die Station an der Modellposition um.
pub fn rename_station(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate) {
    use_cases::stations::rename(state, prompter, at);
}

/// Ändert die Beschriftungsrichtung der Station an der Modellposition.
pub fn change_text_direction(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate) {
    use_cases::stations::change_text_direction(state, prompter, at);
}

/// Verarbeitet einen Klick einer zweistufigen Verbindungs-Operation.
pub fn connection_click(
    state: &mut AppState,
    prompter: &dyn Prompter,
    at: Coordinate,
    action: TwoStepAction,
) {
    use_cases::connections::click(state, prompter, at, action);
}

/// Verarbeitet einen Klick einer zweistufigen Fluss-Operation.
pub fn river_click(
    state: &mut AppState,
    prompter: &dyn Prompter,
    at: Coordinate,
    action: TwoStepAction,
) {
    use_cases::rivers::click(state, prompter, at, action);
}
