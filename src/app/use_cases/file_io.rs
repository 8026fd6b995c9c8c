//! Use-Cases für Laden und Speichern von KMM-Dateien.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::app::prompt::Prompter;
use crate::app::state::PendingSelection;
use crate::app::AppState;
use crate::core::Coordinate;
use crate::kmm::{parse_kmm, write_kmm};

/// Speichert den Netzplan unter einem abgefragten Pfad.
///
/// Die Endung `.kmm` wird bei Bedarf angehängt. Ein abgebrochener
/// Dialog ist kein Fehler.
pub fn save_as(state: &mut AppState, prompter: &dyn Prompter) -> Result<()> {
    let Some(path) = prompter.ask_save_path() else {
        return Ok(());
    };
    let path = with_extension(path, ".kmm");

    let data = write_kmm(&state.map, state.view.canvas_size);
    std::fs::write(&path, data)
        .with_context(|| format!("Konnte Datei {} nicht schreiben", path.display()))?;
    log::info!("Netzplan gespeichert nach: {}", path.display());
    Ok(())
}

/// Lädt einen Netzplan aus einer abgefragten Datei.
///
/// Formatfehler ersetzen das Modell nicht: der Benutzer bekommt einen
/// Dialog und arbeitet mit dem bisherigen Plan weiter. Nach erfolgreichem
/// Laden wird der Pan zurückgesetzt, der Zoom bleibt erhalten.
pub fn open(state: &mut AppState, prompter: &dyn Prompter) -> Result<()> {
    let Some(path) = prompter.ask_open_path() else {
        return Ok(());
    };

    let data = std::fs::read(&path)
        .with_context(|| format!("Konnte Datei {} nicht lesen", path.display()))?;

    match parse_kmm(&data, state.view.canvas_size) {
        Ok(map) => {
            state.map = map;
            state.editor.pending = PendingSelection::Idle;
            state.view.transform.pan = Coordinate::default();
            state.view.transform.pan_origin = Coordinate::default();
        }
        Err(e) => {
            log::warn!("Laden von {} fehlgeschlagen: {:#}", path.display(), e);
            prompter.show_error(
                "Invalid file",
                "The file selected is not a valid KMetroMaker file.",
            );
        }
    }
    Ok(())
}

/// Hängt eine Endung an, falls der Pfad sie noch nicht trägt.
pub(crate) fn with_extension(path: PathBuf, extension: &str) -> PathBuf {
    if path.to_string_lossy().ends_with(extension) {
        return path;
    }
    let mut os_string = path.into_os_string();
    os_string.push(extension);
    os_string.into()
}
