use crate::app::state::SurfaceMetrics;
use crate::core::{FigureId, FigureKind};

/// Vom Engine-Kern erkannte Tasten. Alle anderen Tasten werden ignoriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchKey {
    /// Konstruktion abschließen
    Enter,
    /// Konstruktion abbrechen
    Escape,
}

/// Eingabequellen, an die die Engine nach `init` gebunden ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Primärklick auf die Zeichenfläche
    PointerClick,
    /// Zeigerbewegung über der Zeichenfläche
    PointerMove,
    /// Globale Tastatur
    Keyboard,
    /// Größenänderung der Zeichenfläche
    Resize,
    /// Kontextmenü (wird unterdrückt)
    ContextMenu,
}

impl Listener {
    /// Alle Eingabequellen in Registrierungsreihenfolge.
    pub const ALL: [Listener; 5] = [
        Listener::PointerClick,
        Listener::PointerMove,
        Listener::Keyboard,
        Listener::Resize,
        Listener::ContextMenu,
    ];
}

/// Sketch-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum SketchIntent {
    /// Primärklick in Geräte-Pixeln (relativ zur Zeichenfläche)
    PointerClicked { device: glam::Vec2 },
    /// Zeigerbewegung in Geräte-Pixeln
    PointerMoved { device: glam::Vec2 },
    /// Sekundärklick; Kontextmenü wird unterdrückt
    ContextMenuRequested,
    /// Erkannte Taste gedrückt
    KeyPressed { key: SketchKey },
    /// Werkzeug gewählt (`None` = kein Werkzeug)
    ToolSelected { tool: Option<FigureKind> },
    /// Zeichenfläche hat neue Maße (`None` = keine Fläche vorhanden)
    SurfaceResized { metrics: Option<SurfaceMetrics> },
    /// Figur entfernen
    RemoveFigureRequested { id: FigureId },
}

impl SketchIntent {
    /// Eingabequelle, die für diesen Intent gebunden sein muss.
    ///
    /// `None` = Intent kommt nicht von der Zeichenfläche und ist immer zulässig.
    pub fn listener(&self) -> Option<Listener> {
        match self {
            SketchIntent::PointerClicked { .. } => Some(Listener::PointerClick),
            SketchIntent::PointerMoved { .. } => Some(Listener::PointerMove),
            SketchIntent::ContextMenuRequested => Some(Listener::ContextMenu),
            SketchIntent::KeyPressed { .. } => Some(Listener::Keyboard),
            SketchIntent::SurfaceResized { .. } => Some(Listener::Resize),
            SketchIntent::ToolSelected { .. } | SketchIntent::RemoveFigureRequested { .. } => None,
        }
    }
}
