//! Statischer Hintergrund: zweistufiges Raster und Achsen.
//!
//! Das Raster ist am Projektions-Ursprung ausgerichtet, damit eingerastete
//! Punkte auf sichtbaren Linien liegen.

use crate::core::{ProjectParams, Rgba, StrokeStyle, Surface};
use crate::shared::SketchOptions;
use glam::Vec2;

const FINE_COLOR: Rgba = [0.0, 0.0, 0.0, 0.2];
const COARSE_COLOR: Rgba = [0.0, 0.0, 0.0, 0.5];
const AXIS_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];

/// Unterhalb dieses Linienabstands (Pixel) wird eine Rasterstufe ausgelassen.
const MIN_LINE_SPACING_PX: f32 = 2.0;

/// Zeichnet feines und grobes Raster über die gesamte Fläche.
pub fn draw_grid(surface: &mut dyn Surface, size: Vec2, params: &ProjectParams, options: &SketchOptions) {
    let fine = StrokeStyle::new(1.0, FINE_COLOR);
    let coarse = StrokeStyle::new(1.0, COARSE_COLOR);
    draw_lines(surface, size, params.origin(), options.fine_step_px(params.scale), fine);
    draw_lines(surface, size, params.origin(), options.coarse_step_px(params.scale), coarse);
}

/// Zeichnet X- und Y-Achse auf den groben Rasterlinien nächst der Flächenmitte.
pub fn draw_axes(surface: &mut dyn Surface, size: Vec2, params: &ProjectParams, options: &SketchOptions) {
    let step = options.coarse_step_px(params.scale);
    if !step.is_finite() || step <= 0.0 {
        return;
    }
    let axis = axis_position(size, params.origin(), step);
    let stroke = StrokeStyle::new(2.0, AXIS_COLOR);
    surface.line(Vec2::new(0.0, axis.y), Vec2::new(size.x, axis.y), stroke);
    surface.line(Vec2::new(axis.x, 0.0), Vec2::new(axis.x, size.y), stroke);
}

/// Position der Achsen: grobe Rasterlinie, die der Flächenmitte am nächsten liegt.
pub fn axis_position(size: Vec2, origin: Vec2, step: f32) -> Vec2 {
    let center = size / 2.0;
    let snap = |c: f32, o: f32| o + ((c - o) / step).round() * step;
    Vec2::new(snap(center.x, origin.x), snap(center.y, origin.y))
}

fn draw_lines(surface: &mut dyn Surface, size: Vec2, origin: Vec2, step: f32, stroke: StrokeStyle) {
    if !step.is_finite() || step < MIN_LINE_SPACING_PX {
        return;
    }
    let mut x = origin.x.rem_euclid(step);
    while x <= size.x {
        surface.line(Vec2::new(x, 0.0), Vec2::new(x, size.y), stroke);
        x += step;
    }
    let mut y = origin.y.rem_euclid(step);
    while y <= size.y {
        surface.line(Vec2::new(0.0, y), Vec2::new(size.x, y), stroke);
        y += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawOp, RecordingSurface};
    use approx::assert_relative_eq;

    #[test]
    fn test_axes_on_coarse_line_nearest_center() {
        let axis = axis_position(Vec2::new(800.0, 600.0), Vec2::new(400.0, 300.0), 100.0);
        assert_relative_eq!(axis.x, 400.0);
        assert_relative_eq!(axis.y, 300.0);

        let axis = axis_position(Vec2::new(800.0, 600.0), Vec2::new(130.0, 20.0), 100.0);
        assert_relative_eq!(axis.x, 430.0);
        assert_relative_eq!(axis.y, 320.0);
    }

    #[test]
    fn test_grid_lines_align_with_origin() {
        let mut surface = RecordingSurface::new(Vec2::new(200.0, 100.0));
        let mut params = ProjectParams::new(100.0);
        params.set_origin(Vec2::new(105.0, 50.0));
        draw_grid(&mut surface, Vec2::new(200.0, 100.0), &params, &SketchOptions::default());

        let vertical_x: Vec<f32> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { a, b, .. } if a.x == b.x => Some(a.x),
                _ => None,
            })
            .collect();
        // fein: 5, 15, …, 195 (20 Linien); grob: 5, 105 (2 Linien)
        assert_eq!(vertical_x.len(), 22);
        assert!(vertical_x.iter().all(|x| {
            let k = (x - 5.0) / 10.0;
            (k - k.round()).abs() < 1e-3
        }));
    }

    #[test]
    fn test_dense_fine_grid_is_skipped() {
        let mut surface = RecordingSurface::new(Vec2::new(100.0, 100.0));
        let params = ProjectParams::new(10.0);
        draw_grid(&mut surface, Vec2::new(100.0, 100.0), &params, &SketchOptions::default());
        // fein = 1 px → ausgelassen; grob = 10 px → 11 + 11 Linien
        assert_eq!(surface.ops().len(), 22);
    }
}
