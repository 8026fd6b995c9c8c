//! Use-Cases für zweistufige Verbindungs-Operationen.

use crate::app::events::TwoStepAction;
use crate::app::prompt::Prompter;
use crate::app::state::PendingSelection;
use crate::app::use_cases::color_input;
use crate::app::AppState;
use crate::core::{Connection, Coordinate};

/// Verarbeitet einen Klick einer Verbindungs-Operation.
///
/// Beide Endpunkte müssen Stationen sein; ein Klick ins Leere lässt
/// einen eventuell wartenden ersten Endpunkt unangetastet. Nach dem
/// zweiten Klick auf eine andere Station endet die Operation in jedem
/// Fall im Leerlauf, auch bei Abbruch eines Dialogs.
pub fn click(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate, action: TwoStepAction) {
    let Some(station) = state.map.find_station(at) else {
        return;
    };

    let first = match state.editor.pending {
        PendingSelection::Station { index } => index,
        _ => {
            state.editor.pending = PendingSelection::Station { index: station };
            return;
        }
    };

    state.editor.pending = PendingSelection::Idle;
    if first == station {
        return;
    }

    let termini = (
        state.map.stations[first].position,
        state.map.stations[station].position,
    );

    match action {
        TwoStepAction::Add => {
            let Some(color) = color_input::prompt_color(
                prompter,
                &state.options,
                "Enter connection color",
                "What is the connection color? (blank to cancel)",
            ) else {
                return;
            };
            state.map.add_connection(Connection::new(termini, color));
        }
        TwoStepAction::Remove => {
            let Some(index) = state.map.find_connection(termini) else {
                return;
            };
            let prompt = format!(
                "Are you sure you want to remove the connection between \"{}\" and \"{}\"?",
                state.map.stations[first].name, state.map.stations[station].name
            );
            if !prompter.confirm("Remove connection", &prompt) {
                return;
            }
            state.map.remove_connection(index);
        }
        TwoStepAction::Recolor => {
            let Some(index) = state.map.find_connection(termini) else {
                return;
            };
            let Some(color) = color_input::prompt_color(
                prompter,
                &state.options,
                "Enter new connection color",
                "What is the new connection color? (blank to cancel)",
            ) else {
                return;
            };
            state.map.recolor_connection(index, color);
        }
    }
}
