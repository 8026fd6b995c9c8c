//! Abstraktion über modale Benutzer-Dialoge.
//!
//! Der Controller spricht nie direkt mit einem Dialog-Toolkit, sondern
//! nur mit diesem Trait. Ein Frontend injiziert seine Dialoge, Tests
//! und Automatisierung injizieren den [`ScriptedPrompter`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Modale Rückfragen an den Benutzer.
///
/// `None` bedeutet überall "Dialog abgebrochen"; die aufrufende
/// Operation endet dann ohne Änderung am Modell.
pub trait Prompter {
    /// Fragt eine Texteingabe ab.
    fn ask_string(&self, title: &str, prompt: &str) -> Option<String>;

    /// Stellt eine Ja/Nein-Frage.
    fn confirm(&self, title: &str, prompt: &str) -> bool;

    /// Fragt einen Pfad zum Öffnen ab.
    fn ask_open_path(&self) -> Option<PathBuf>;

    /// Fragt einen Pfad zum Speichern ab.
    fn ask_save_path(&self) -> Option<PathBuf>;

    /// Zeigt eine Fehlermeldung an.
    fn show_error(&self, title: &str, message: &str);
}

impl<P: Prompter + ?Sized> Prompter for std::rc::Rc<P> {
    fn ask_string(&self, title: &str, prompt: &str) -> Option<String> {
        (**self).ask_string(title, prompt)
    }

    fn confirm(&self, title: &str, prompt: &str) -> bool {
        (**self).confirm(title, prompt)
    }

    fn ask_open_path(&self) -> Option<PathBuf> {
        (**self).ask_open_path()
    }

    fn ask_save_path(&self) -> Option<PathBuf> {
        (**self).ask_save_path()
    }

    fn show_error(&self, title: &str, message: &str) {
        (**self).show_error(title, message)
    }
}

/// Prompter mit vorab eingeplanten Antworten, für Tests und Automatisierung.
///
/// Jede Abfrage konsumiert die jeweils vorderste eingeplante Antwort;
/// eine leere Queue zählt als abgebrochener Dialog.
#[derive(Default)]
pub struct ScriptedPrompter {
    strings: RefCell<VecDeque<Option<String>>>,
    confirmations: RefCell<VecDeque<bool>>,
    open_paths: RefCell<VecDeque<Option<PathBuf>>>,
    save_paths: RefCell<VecDeque<Option<PathBuf>>>,
    errors: RefCell<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    /// Erstellt einen Prompter ohne eingeplante Antworten.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant eine Texteingabe ein.
    pub fn push_string(&self, answer: impl Into<String>) {
        self.strings.borrow_mut().push_back(Some(answer.into()));
    }

    /// Plant einen abgebrochenen Text-Dialog ein.
    pub fn push_string_cancel(&self) {
        self.strings.borrow_mut().push_back(None);
    }

    /// Plant eine Ja/Nein-Antwort ein.
    pub fn push_confirm(&self, answer: bool) {
        self.confirmations.borrow_mut().push_back(answer);
    }

    /// Plant einen Öffnen-Pfad ein.
    pub fn push_open_path(&self, path: impl Into<PathBuf>) {
        self.open_paths.borrow_mut().push_back(Some(path.into()));
    }

    /// Plant einen Speichern-Pfad ein.
    pub fn push_save_path(&self, path: impl Into<PathBuf>) {
        self.save_paths.borrow_mut().push_back(Some(path.into()));
    }

    /// Liefert alle bisher angezeigten Fehlermeldungen (Titel, Text).
    pub fn shown_errors(&self) -> Vec<(String, String)> {
        self.errors.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_string(&self, _title: &str, _prompt: &str) -> Option<String> {
        self.strings.borrow_mut().pop_front().flatten()
    }

    fn confirm(&self, _title: &str, _prompt: &str) -> bool {
        self.confirmations.borrow_mut().pop_front().unwrap_or(false)
    }

    fn ask_open_path(&self) -> Option<PathBuf> {
        self.open_paths.borrow_mut().pop_front().flatten()
    }

    fn ask_save_path(&self) -> Option<PathBuf> {
        self.save_paths.borrow_mut().pop_front().flatten()
    }

    fn show_error(&self, title: &str, message: &str) {
        log::warn!("Dialog-Fehler angezeigt: {}: {}", title, message);
        self.errors
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}
