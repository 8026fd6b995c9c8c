//! Verlauf ausgeführter Commands, Ansatzpunkt für spätere Undo/Redo-Arbeit.

use std::collections::VecDeque;

use super::AppCommand;

/// Begrenzter Verlauf der ausgeführten Commands, älteste zuerst.
///
/// Der Controller protokolliert jeden Command vor der Ausführung;
/// beim Erreichen der Kapazität fällt der jeweils älteste Eintrag raus.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    const CAPACITY: usize = 1000;

    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Protokolliert einen ausgeführten Command.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
    }

    /// Gibt die Anzahl der protokollierten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch nichts protokolliert wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert über die Einträge, älteste zuerst.
    pub fn entries(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }

    /// Gibt den zuletzt protokollierten Command zurück.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_execution_order() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());

        log.record(AppCommand::ZoomIn);
        log.record(AppCommand::ZoomOut);
        log.record(AppCommand::ResetView);

        assert_eq!(log.len(), 3);
        assert!(matches!(log.entries().next(), Some(AppCommand::ZoomIn)));
        assert!(matches!(log.last(), Some(AppCommand::ResetView)));
    }

    #[test]
    fn test_capacity_drops_oldest_entry() {
        let mut log = CommandLog::new();
        log.record(AppCommand::SaveFileAs);
        for _ in 0..CommandLog::CAPACITY {
            log.record(AppCommand::ZoomIn);
        }

        assert_eq!(log.len(), CommandLog::CAPACITY);
        // Der älteste Eintrag (SaveFileAs) ist verdrängt
        assert!(log.entries().all(|c| matches!(c, AppCommand::ZoomIn)));
    }
}
