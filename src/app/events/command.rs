use crate::app::state::SurfaceMetrics;
use crate::core::{FigureId, FigureKind};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchCommand {
    /// Aktives Werkzeug setzen
    SetTool { tool: Option<FigureKind> },
    /// Klick an eingerasteter logischer Position verarbeiten
    ClickAt { logical: glam::Vec2 },
    /// Eingerastete Cursor-Position speichern
    SetCursor { logical: glam::Vec2 },
    /// Hover-Menge gegen den rohen Cursor (Geräte-Pixel) neu berechnen
    RefreshHover { device: glam::Vec2 },
    /// Vorschau an eingerasteter logischer Position aktualisieren
    RefreshPreview { logical: glam::Vec2 },
    /// Laufende Konstruktion abschließen
    FinishConstruction,
    /// Laufende Konstruktion abbrechen
    CancelConstruction,
    /// Zeichenfläche neu vermessen und Ursprung zentrieren
    ResizeSurface { metrics: SurfaceMetrics },
    /// Figur aus der Liste entfernen
    RemoveFigure { id: FigureId },
}

impl SketchCommand {
    /// Kurzname für Status-Bar und Log.
    pub fn label(&self) -> &'static str {
        match self {
            SketchCommand::SetTool { .. } => "Werkzeug",
            SketchCommand::ClickAt { .. } => "Klick",
            SketchCommand::SetCursor { .. } => "Cursor",
            SketchCommand::RefreshHover { .. } => "Hover",
            SketchCommand::RefreshPreview { .. } => "Vorschau",
            SketchCommand::FinishConstruction => "Abschluss",
            SketchCommand::CancelConstruction => "Abbruch",
            SketchCommand::ResizeSurface { .. } => "Größe",
            SketchCommand::RemoveFigure { .. } => "Entfernen",
        }
    }

    /// `true` für die Commands, die jede Zeigerbewegung erzeugt.
    pub fn is_pointer_tracking(&self) -> bool {
        matches!(
            self,
            SketchCommand::SetCursor { .. }
                | SketchCommand::RefreshHover { .. }
                | SketchCommand::RefreshPreview { .. }
        )
    }
}
