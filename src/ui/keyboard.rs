//! Keyboard-Shortcuts der Zeichenfläche.
//!
//! Enter/Escape steuern die laufende Konstruktion, Ziffern wählen das Werkzeug.

use crate::app::{SketchIntent, SketchKey};
use crate::core::FigureKind;

/// Ziffern-Shortcuts: `0` = kein Werkzeug, `1..=4` = Figurenarten in Toolbar-Reihenfolge.
const TOOL_KEYS: [(egui::Key, Option<FigureKind>); 5] = [
    (egui::Key::Num0, None),
    (egui::Key::Num1, Some(FigureKind::Point)),
    (egui::Key::Num2, Some(FigureKind::Polyline)),
    (egui::Key::Num3, Some(FigureKind::Contour)),
    (egui::Key::Num4, Some(FigureKind::Marker)),
];

/// Verarbeitet Keyboard-Shortcuts und gibt SketchIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<SketchIntent> {
    let mut events = Vec::new();

    let (modifiers, key_enter_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_enter_pressed {
        events.push(SketchIntent::KeyPressed {
            key: SketchKey::Enter,
        });
    }
    if key_escape_pressed {
        events.push(SketchIntent::KeyPressed {
            key: SketchKey::Escape,
        });
    }

    if modifiers.command {
        return events;
    }
    for (key, tool) in TOOL_KEYS {
        if ui.input(|i| i.key_pressed(key)) {
            events.push(SketchIntent::ToolSelected { tool });
        }
    }

    events
}
