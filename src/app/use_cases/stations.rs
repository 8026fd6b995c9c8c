//! Use-Cases für Stations-Operationen mit Benutzer-Dialogen.

use crate::app::prompt::Prompter;
use crate::app::state::PendingSelection;
use crate::app::AppState;
use crate::core::{Coordinate, Station, TextDirection};

/// Legt eine Station an der Modellposition an.
///
/// Belegte Positionen werden still ignoriert; leerer Name oder
/// abgebrochener Dialog brechen ohne Änderung ab.
pub fn add(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate) {
    if state.map.find_station(at).is_some() {
        return;
    }

    let Some(name) = prompter.ask_string(
        "Enter station name",
        "What is the station name? (blank to cancel)",
    ) else {
        return;
    };
    if name.is_empty() {
        return;
    }

    state.map.add_station(Station::new(at, name));
}

/// Entfernt die Station an der Modellposition, nach Rückfrage.
///
/// Verbindungen mit der Station als Endpunkt werden mitgelöscht;
/// ein wartender Verbindungs-Endpunkt wird umindiziert oder verworfen.
pub fn remove(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate) {
    let Some(index) = state.map.find_station(at) else {
        return;
    };

    let name = state.map.stations[index].name.clone();
    if !prompter.confirm(
        "Remove station",
        &format!("Are you sure you want to remove the station \"{}\"?", name),
    ) {
        return;
    }

    state.map.remove_station(index);

    state.editor.pending = match state.editor.pending {
        PendingSelection::Station { index: pending } if pending == index => PendingSelection::Idle,
        PendingSelection::Station { index: pending } if pending > index => {
            PendingSelection::Station { index: pending - 1 }
        }
        other => other,
    };
}

/// Benennt die Station an der Modellposition um.
pub fn rename(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate) {
    let Some(index) = state.map.find_station(at) else {
        return;
    };

    let old_name = state.map.stations[index].name.clone();
    let Some(name) = prompter.ask_string(
        "Enter new station name",
        &format!(
            "What is the new station name of \"{}\"? (blank to cancel)",
            old_name
        ),
    ) else {
        return;
    };
    if name.is_empty() {
        return;
    }

    state.map.rename_station(index, name);
}

/// Ändert die Beschriftungsrichtung der Station an der Modellposition.
pub fn change_text_direction(state: &mut AppState, prompter: &dyn Prompter, at: Coordinate) {
    let Some(index) = state.map.find_station(at) else {
        return;
    };

    let Some(input) = prompter.ask_string(
        "Enter new station text direction",
        "What is the new station text direction? (blank to cancel, any combination of LRUD is valid)",
    ) else {
        return;
    };

    // Eingaben ohne gültigen Richtungsbuchstaben lassen die Station unverändert
    let Some(direction) = TextDirection::parse(&input) else {
        return;
    };

    state.map.set_station_direction(index, direction);
}
