//! Use-Cases für zweistufige Fluss-Operationen.

use crate::app::events::TwoStepAction;
use crate::app::prompt::Prompter;
use crate::app::state::PendingSelection;
use crate::app::use_cases::color_input;
use crate::app::AppState;
use crate::core::{Coordinate, River};

/// Verarbeitet einen Klick einer Fluss-Operation.
///
/// Fluss-Endpunkte sind freie, gerasterte Punkte und brauchen keine
/// Station. Nach dem zweiten Klick auf einen anderen Punkt endet die
/// Operation in jedem Fall im Leerlauf.
pub fn click(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate, action: TwoStepAction) {
    let first = match state.editor.pending {
        PendingSelection::RiverPoint { at: first } => first,
        _ => {
            state.editor.pending = PendingSelection::RiverPoint { at };
            return;
        }
    };

    state.editor.pending = PendingSelection::Idle;
    if first == at {
        return;
    }

    let termini = (first, at);
    let canvas = state.view.canvas_size;

    match action {
        TwoStepAction::Add => {
            let Some(color) = color_input::prompt_color(
                prompter,
                &state.options,
                "Enter river color",
                "What is the river color? (blank to cancel)",
            ) else {
                return;
            };
            state.map.add_river(River::new(termini, color));
        }
        TwoStepAction::Remove => {
            let Some(index) = state.map.find_river(termini) else {
                return;
            };
            let prompt = format!(
                "Are you sure you want to remove the river between \"{}\" and \"{}\"?",
                first.format_pixel(canvas),
                at.format_pixel(canvas)
            );
            if !prompter.confirm("Remove river", &prompt) {
                return;
            }
            state.map.remove_river(index);
        }
        TwoStepAction::Recolor => {
            let Some(index) = state.map.find_river(termini) else {
                return;
            };
            let Some(color) = color_input::prompt_color(
                prompter,
                &state.options,
                "Enter new river color",
                "What is the new river color? (blank to cancel)",
            ) else {
                return;
            };
            state.map.recolor_river(index, color);
        }
    }
}
