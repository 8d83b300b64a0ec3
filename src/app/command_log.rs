//! Begrenztes Command-Log der ausgeführten Commands.

use super::SketchCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<SketchCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &SketchCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[SketchCommand] {
        &self.entries
    }

    /// Jüngster Command, der nicht bloß der Zeigerbewegung folgt.
    pub fn last_action(&self) -> Option<&SketchCommand> {
        self.entries
            .iter()
            .rev()
            .find(|command| !command.is_pointer_tracking())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_drops_older_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&SketchCommand::FinishConstruction);
        }
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);

        log.record(&SketchCommand::CancelConstruction);
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert!(matches!(
            log.entries().last(),
            Some(SketchCommand::CancelConstruction)
        ));
    }

    #[test]
    fn test_last_action_skips_pointer_tracking() {
        let mut log = CommandLog::new();
        assert!(log.last_action().is_none());

        log.record(&SketchCommand::ClickAt {
            logical: glam::Vec2::ONE,
        });
        log.record(&SketchCommand::SetCursor {
            logical: glam::Vec2::ZERO,
        });
        log.record(&SketchCommand::RefreshHover {
            device: glam::Vec2::ZERO,
        });
        log.record(&SketchCommand::RefreshPreview {
            logical: glam::Vec2::ZERO,
        });

        assert_eq!(log.last_action().map(SketchCommand::label), Some("Klick"));
    }
}
