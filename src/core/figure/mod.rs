//! Figuren: Trait-basierte Schnittstelle für alle zeichenbaren Geometrien.
//!
//! Jede Figur implementiert [`Figure`]. Mehrstufig konstruierte Figuren
//! (Polylinie, Kontur) implementieren zusätzlich [`Constructible`] und geben
//! sich über `as_constructible_mut` zu erkennen.

pub mod animation;
mod contour;
mod marker;
mod point;
mod polyline;

pub use contour::ContourFigure;
pub use marker::MarkerFigure;
pub use point::PointFigure;
pub use polyline::PolylineFigure;

use super::projection::ProjectParams;
use super::surface::Surface;
use glam::Vec2;
use std::fmt;

/// Stabile Identität einer Figur innerhalb der Figurenliste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(pub u64);

impl FigureId {
    /// Reservierte ID für Vorschau-Instanzen (nie in der Figurenliste).
    pub const PREVIEW: FigureId = FigureId(0);
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geschlossene Menge der Figurenarten (gleichzeitig Tool-Kennung).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FigureKind {
    /// Einzelner Punkt
    Point,
    /// Offener Linienzug
    Polyline,
    /// Geschlossene Kontur
    Contour,
    /// Pin-Marker
    Marker,
}

impl FigureKind {
    /// Alle Arten in Toolbar-Reihenfolge.
    pub const ALL: [FigureKind; 4] = [
        FigureKind::Point,
        FigureKind::Polyline,
        FigureKind::Contour,
        FigureKind::Marker,
    ];

    /// Technischer Name (Registry-Schlüssel in Logs).
    pub fn as_str(&self) -> &'static str {
        match self {
            FigureKind::Point => "point",
            FigureKind::Polyline => "polyline",
            FigureKind::Contour => "contour",
            FigureKind::Marker => "marker",
        }
    }

    /// Anzeigename für die Toolbar.
    pub fn label(&self) -> &'static str {
        match self {
            FigureKind::Point => "• Punkt",
            FigureKind::Polyline => "〰 Polylinie",
            FigureKind::Contour => "⬠ Kontur",
            FigureKind::Marker => "📍 Marker",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometrische Attribute einer Figur (read-only Sicht).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FigureGeometry<'a> {
    /// Einzelne logische Koordinate
    Single(Vec2),
    /// Geordnete Folge logischer Koordinaten
    Path {
        /// Stützpunkte (bei geschlossener Kontur ist der letzte == erster)
        points: &'a [Vec2],
        /// Ob die Folge geschlossen ist
        closed: bool,
    },
}

/// Aufbauzustand einer konstruierbaren Figur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Noch kein Punkt gesetzt (oder abgebrochen)
    Empty,
    /// Mindestens ein Punkt, weitere Punkte möglich
    Building,
    /// Kontur geschlossen (letzter Punkt == erster)
    Closed,
    /// Pfad abgeschlossen, bleibt offen
    Finalized,
}

/// Schnittstelle aller Figuren.
pub trait Figure {
    /// Stabile ID (bei Vorschau-Instanzen [`FigureId::PREVIEW`]).
    fn id(&self) -> FigureId;

    /// Figurenart.
    fn kind(&self) -> FigureKind;

    /// Geometrische Attribute.
    fn geometry(&self) -> FigureGeometry<'_>;

    /// Zeichnet die Figur in Geräte-Pixeln.
    fn draw(&self, surface: &mut dyn Surface, params: &ProjectParams);

    /// Ein Animations-Frame (einmal pro gezeichnetem Frame).
    fn tick(&mut self) {}

    /// Besitzt die Figur einen Hit-Test?
    fn has_hit_test(&self) -> bool {
        false
    }

    /// Trifft der Cursor (Geräte-Pixel) die Figur?
    fn hit_test(&self, _device: Vec2, _params: &ProjectParams) -> bool {
        false
    }

    /// Hover-Flag.
    fn is_hovered(&self) -> bool;

    /// Setzt das Hover-Flag (nur durch die Hover-Engine).
    fn set_hovered(&mut self, hovered: bool);

    /// Reaktion beim Betreten der Hover-Menge.
    fn hover_start(&mut self) {}

    /// Reaktion beim Verlassen der Hover-Menge.
    fn hover_end(&mut self) {}

    /// Vorschau-Instanz (halbtransparent, keine Hover-Reaktionen)?
    fn is_preview(&self) -> bool {
        false
    }

    /// Konstruktions-Schnittstelle, falls die Figur mehrstufig aufgebaut wird.
    fn as_constructible(&self) -> Option<&dyn Constructible> {
        None
    }

    /// Mutable Konstruktions-Schnittstelle.
    fn as_constructible_mut(&mut self) -> Option<&mut dyn Constructible> {
        None
    }
}

/// Lifecycle mehrstufig aufgebauter Figuren.
pub trait Constructible {
    /// Beginnt den Aufbau mit dem ersten Punkt (verwirft bisherige Punkte).
    fn start(&mut self, p: Vec2);

    /// Fügt einen Stützpunkt hinzu; No-op außerhalb von `Building`.
    fn add_vertex(&mut self, p: Vec2);

    /// Unterstützt die Figur eine Live-Vorschau des nächsten Punkts?
    fn supports_preview(&self) -> bool {
        false
    }

    /// Setzt den Vorschau-Punkt (Geisterkante vom letzten Stützpunkt).
    fn update_preview(&mut self, _p: Vec2) {}

    /// Schließt den Aufbau ab.
    fn finish(&mut self);

    /// Bricht ab: leer, offen, ohne Vorschau-Punkt.
    fn cancel(&mut self);

    /// Anzahl gesetzter Stützpunkte.
    fn point_count(&self) -> usize;

    /// Aktueller Aufbauzustand.
    fn build_state(&self) -> BuildState;

    /// Geschlossen?
    fn is_closed(&self) -> bool {
        self.build_state() == BuildState::Closed
    }
}

/// Abstand Punkt → Segment. Degenerierte Segmente fallen auf Punktabstand zurück.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let v = b - a;
    let len2 = v.length_squared();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(v) / len2).clamp(0.0, 1.0);
    p.distance(a + v * t)
}
