//! Handler für Datei-Operationen und Export.

use crate::app::prompt::Prompter;
use crate::app::use_cases;
use crate::app::AppState;

/// Speichert den Netzplan unter einem abgefragten Pfad.
pub fn save_as(state: &mut AppState, prompter: &dyn Prompter) -> anyhow::Result<()> {
    use_cases::file_io::save_as(state, prompter)
}

/// Lädt einen Netzplan aus einer abgefragten Datei.
pub fn open(state: &mut AppState, prompter: &dyn Prompter) -> anyhow::Result<()> {
    use_cases::file_io::open(state, prompter)
}

/// Merkt einen PNG-Export der aktuellen Ansicht vor.
pub fn export_image(state: &mut AppState, prompter: &dyn Prompter) {
    use_cases::export::request_export(state, prompter);
}
