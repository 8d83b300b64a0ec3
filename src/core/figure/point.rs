//! Punkt-Figur: gefüllter Kreis mit Hover-Vergrößerung.

use super::animation::{Eased, EASE};
use super::{Figure, FigureGeometry, FigureId, FigureKind};
use crate::core::projection::ProjectParams;
use crate::core::surface::{Rgba, Surface};
use glam::Vec2;

const FILL: Rgba = [0.118, 0.533, 0.898, 1.0];

/// Einzelner Punkt an einer logischen Koordinate.
#[derive(Debug, Clone)]
pub struct PointFigure {
    id: FigureId,
    pos: Vec2,
    preview: bool,
    hovered: bool,
    scale: Eased,
    alpha: Eased,
}

impl PointFigure {
    /// Basis-Radius in Geräte-Pixeln.
    pub const BASE_RADIUS: f32 = 5.0;
    /// Skalierung im Hover.
    pub const HOVER_SCALE: f32 = 1.5;
    /// Deckkraft im Hover.
    pub const HOVER_ALPHA: f32 = 0.5;
    /// Deckkraft einer Vorschau-Instanz.
    pub const PREVIEW_ALPHA: f32 = 0.4;

    /// Erstellt einen Punkt; `preview` markiert eine Vorschau-Instanz.
    pub fn new(id: FigureId, pos: Vec2, preview: bool) -> Self {
        let alpha = if preview { Self::PREVIEW_ALPHA } else { 1.0 };
        Self {
            id,
            pos,
            preview,
            hovered: false,
            scale: Eased::new(1.0),
            alpha: Eased::new(alpha),
        }
    }

    /// Logische Position.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Aktuelle (animierte) Skalierung.
    pub fn current_scale(&self) -> f32 {
        self.scale.current
    }

    /// Aktuelle (animierte) Deckkraft.
    pub fn current_alpha(&self) -> f32 {
        self.alpha.current
    }
}

impl Figure for PointFigure {
    fn id(&self) -> FigureId {
        self.id
    }

    fn kind(&self) -> FigureKind {
        FigureKind::Point
    }

    fn geometry(&self) -> FigureGeometry<'_> {
        FigureGeometry::Single(self.pos)
    }

    fn draw(&self, surface: &mut dyn Surface, params: &ProjectParams) {
        let alpha = if self.preview {
            Self::PREVIEW_ALPHA
        } else {
            self.alpha.current
        };
        let radius = Self::BASE_RADIUS * self.scale.current;
        surface.push_alpha(alpha);
        surface.fill_circle(params.to_device(self.pos), radius, FILL);
        surface.pop_alpha();
    }

    fn tick(&mut self) {
        self.scale.step(EASE);
        self.alpha.step(EASE);
    }

    fn has_hit_test(&self) -> bool {
        true
    }

    fn hit_test(&self, device: Vec2, params: &ProjectParams) -> bool {
        let d = device - params.to_device(self.pos);
        d.length_squared() < (Self::BASE_RADIUS * 2.0).powi(2)
    }

    fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    fn hover_start(&mut self) {
        if self.preview {
            return;
        }
        self.scale.set_target(Self::HOVER_SCALE);
        self.alpha.set_target(Self::HOVER_ALPHA);
    }

    fn hover_end(&mut self) {
        if self.preview {
            return;
        }
        self.scale.set_target(1.0);
        self.alpha.set_target(1.0);
    }

    fn is_preview(&self) -> bool {
        self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> ProjectParams {
        let mut p = ProjectParams::new(100.0);
        p.set_origin(Vec2::new(200.0, 200.0));
        p
    }

    #[test]
    fn test_hit_test_uses_double_radius() {
        let fig = PointFigure::new(FigureId(1), Vec2::new(1.0, 0.0), false);
        // Zentrum in Geräte-Pixeln: (300, 200)
        assert!(fig.hit_test(Vec2::new(309.0, 200.0), &params()));
        assert!(!fig.hit_test(Vec2::new(310.0, 200.0), &params()));
    }

    #[test]
    fn test_hover_animates_towards_targets() {
        let mut fig = PointFigure::new(FigureId(1), Vec2::ZERO, false);
        fig.hover_start();
        fig.tick();
        assert_relative_eq!(fig.current_scale(), 1.0 + 0.5 * EASE);
        assert_relative_eq!(fig.current_alpha(), 1.0 - 0.5 * EASE);

        fig.hover_end();
        for _ in 0..200 {
            fig.tick();
        }
        assert_relative_eq!(fig.current_scale(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_draw_sets_own_alpha_around_opaque_fill() {
        use crate::render::{DrawOp, RecordingSurface};

        let mut fig = PointFigure::new(FigureId(1), Vec2::ZERO, false);
        fig.hover_start();
        fig.tick();
        let mut surface = RecordingSurface::new(Vec2::splat(400.0));
        fig.draw(&mut surface, &params());

        let ops = surface.ops();
        assert_eq!(ops.len(), 3);
        let DrawOp::PushAlpha(alpha) = ops[0] else {
            panic!("erste Operation muss die Deckkraft setzen: {:?}", ops[0]);
        };
        assert_relative_eq!(alpha, 1.0 - 0.5 * EASE);
        assert!(matches!(ops[1], DrawOp::FillCircle { fill, .. } if fill == FILL));
        assert_eq!(ops[2], DrawOp::PopAlpha);
    }

    #[test]
    fn test_preview_ignores_hover_reactions() {
        let mut fig = PointFigure::new(FigureId::PREVIEW, Vec2::ZERO, true);
        fig.hover_start();
        fig.tick();
        assert_relative_eq!(fig.current_scale(), 1.0);
        assert_relative_eq!(fig.current_alpha(), PointFigure::PREVIEW_ALPHA);
    }
}
