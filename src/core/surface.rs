//! Zeichenfläche als Abstraktion über den konkreten Painter.
//!
//! Figuren und Hintergrund zeichnen ausschließlich über diesen Trait in
//! Geräte-Pixeln. Die egui-Implementierung liegt in `render`, Tests nutzen
//! die aufzeichnende Variante.

use glam::Vec2;

/// RGBA-Farbe (0.0–1.0 pro Kanal).
pub type Rgba = [f32; 4];

/// Linienstil für Strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Linienbreite in Geräte-Pixeln
    pub width: f32,
    /// Linienfarbe
    pub color: Rgba,
}

impl StrokeStyle {
    /// Erstellt einen Linienstil.
    pub const fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}

/// 2D-Zeichenfläche in Geräte-Pixeln.
pub trait Surface {
    /// Größe der Fläche in Geräte-Pixeln.
    fn size(&self) -> Vec2;

    /// Löscht den gesamten Inhalt.
    fn clear(&mut self);

    /// Einzelnes Liniensegment.
    fn line(&mut self, a: Vec2, b: Vec2, stroke: StrokeStyle);

    /// Linienzug, optional geschlossen.
    fn polyline(&mut self, points: &[Vec2], closed: bool, stroke: StrokeStyle);

    /// Gefülltes Polygon.
    fn fill_polygon(&mut self, points: &[Vec2], fill: Rgba);

    /// Gefüllter Kreis.
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Rgba);

    /// Bézier-Pfad (bereits in Geräte-Pixeln) füllen und/oder umranden.
    fn path(&mut self, path: &kurbo::BezPath, fill: Option<Rgba>, stroke: Option<StrokeStyle>);

    /// Setzt die globale Deckkraft bis zum passenden `pop_alpha`.
    ///
    /// Der Wert ersetzt die bisher gültige Deckkraft, er wird nicht mit ihr
    /// multipliziert. Ohne Eintrag auf dem Stapel gilt 1.0.
    fn push_alpha(&mut self, alpha: f32);

    /// Stellt die vor dem letzten `push_alpha` gültige Deckkraft wieder her.
    fn pop_alpha(&mut self);
}
