//! Aufzeichnende Zeichenfläche für Tests und Benchmarks.

use crate::core::{Rgba, StrokeStyle, Surface};
use glam::Vec2;

/// Eine aufgezeichnete Zeichenoperation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fläche gelöscht
    Clear,
    /// Liniensegment
    Line { a: Vec2, b: Vec2, stroke: StrokeStyle },
    /// Linienzug
    Polyline {
        points: Vec<Vec2>,
        closed: bool,
        stroke: StrokeStyle,
    },
    /// Gefülltes Polygon
    FillPolygon { points: Vec<Vec2>, fill: Rgba },
    /// Gefüllter Kreis
    FillCircle { center: Vec2, radius: f32, fill: Rgba },
    /// Bézier-Pfad mit Anzahl Pfadelemente
    Path {
        elements: usize,
        fill: Option<Rgba>,
        stroke: Option<StrokeStyle>,
    },
    /// Globale Deckkraft gesetzt
    PushAlpha(f32),
    /// Globale Deckkraft entfernt
    PopAlpha,
}

/// Zeichenfläche, die jede Operation in eine Liste schreibt.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<DrawOp>,
    alpha: Vec<f32>,
}

impl RecordingSurface {
    /// Erstellt eine leere Aufzeichnung mit gegebener Größe.
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
            alpha: Vec::new(),
        }
    }

    /// Alle Operationen seit dem letzten `clear` (inklusive `Clear`).
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Aktuelle Tiefe des Deckkraft-Stapels.
    pub fn alpha_depth(&self) -> usize {
        self.alpha.len()
    }

    /// Gerade gültige globale Deckkraft (zuletzt gesetzter Wert, sonst 1.0).
    pub fn current_alpha(&self) -> f32 {
        self.alpha.last().copied().unwrap_or(1.0)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn line(&mut self, a: Vec2, b: Vec2, stroke: StrokeStyle) {
        self.ops.push(DrawOp::Line { a, b, stroke });
    }

    fn polyline(&mut self, points: &[Vec2], closed: bool, stroke: StrokeStyle) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            closed,
            stroke,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], fill: Rgba) {
        self.ops.push(DrawOp::FillPolygon {
            points: points.to_vec(),
            fill,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Rgba) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            fill,
        });
    }

    fn path(&mut self, path: &kurbo::BezPath, fill: Option<Rgba>, stroke: Option<StrokeStyle>) {
        self.ops.push(DrawOp::Path {
            elements: path.elements().len(),
            fill,
            stroke,
        });
    }

    fn push_alpha(&mut self, alpha: f32) {
        self.alpha.push(alpha);
        self.ops.push(DrawOp::PushAlpha(alpha));
    }

    fn pop_alpha(&mut self) {
        self.alpha.pop();
        self.ops.push(DrawOp::PopAlpha);
    }
}
