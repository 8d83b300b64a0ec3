//! Zeichenhilfen für 3-D-Daten des Geometrie-Kerns über die Perspektiv-Projektion.

use crate::core::{ProjectParams, Rgba, StrokeStyle, Surface};
use glam::{Vec2, Vec3};

/// Offener Linienzug; weniger als zwei Punkte zeichnen nichts.
pub fn draw_polyline_3d(
    surface: &mut dyn Surface,
    points: &[Vec3],
    params: &ProjectParams,
    stroke: StrokeStyle,
) {
    if points.len() < 2 {
        return;
    }
    let device: Vec<Vec2> = points.iter().map(|&p| params.to_device_3d(p)).collect();
    surface.polyline(&device, false, stroke);
}

/// Gefüllter Kreis je Punkt.
pub fn draw_points_3d(
    surface: &mut dyn Surface,
    points: &[Vec3],
    radius: f32,
    fill: Rgba,
    params: &ProjectParams,
) {
    for &p in points {
        surface.fill_circle(params.to_device_3d(p), radius, fill);
    }
}

/// Dreiecks-Marker mit Spitze `size` Pixel über dem Punkt.
pub fn draw_triangle_marker(
    surface: &mut dyn Surface,
    pos: Vec3,
    size: f32,
    fill: Rgba,
    params: &ProjectParams,
) {
    let c = params.to_device_3d(pos);
    let tri = [
        Vec2::new(c.x, c.y - size),
        Vec2::new(c.x - size * 0.6, c.y + size),
        Vec2::new(c.x + size * 0.6, c.y + size),
    ];
    surface.fill_polygon(&tri, fill);
}
