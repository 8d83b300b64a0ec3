//! Handler für Maße der Zeichenfläche und Projektion.

use crate::app::state::SurfaceMetrics;
use crate::app::SketchState;
use glam::Vec2;

/// Übernimmt neue Flächenmaße und zentriert den Ursprung.
///
/// Die Höhe fällt ohne Angabe auf `fallback_surface_height` zurück und wird
/// nach unten auf `min_surface_height` begrenzt. Die Backing-Auflösung folgt
/// der Pixeldichte.
pub fn resize_surface(state: &mut SketchState, metrics: SurfaceMetrics) {
    let ppp = if metrics.pixels_per_point.is_finite() && metrics.pixels_per_point > 0.0 {
        metrics.pixels_per_point
    } else {
        1.0
    };
    let width = if metrics.size.x.is_finite() {
        metrics.size.x.max(0.0)
    } else {
        0.0
    };
    let reported_height = if metrics.size.y.is_finite() && metrics.size.y > 0.0 {
        metrics.size.y
    } else {
        state.options.fallback_surface_height
    };
    let height = reported_height.max(state.options.min_surface_height);

    let view = &mut state.view;
    view.surface_size = Vec2::new(width, height);
    view.pixels_per_point = ppp;
    view.backing_size = [(width * ppp).floor() as u32, (height * ppp).floor() as u32];
    view.params.set_origin(view.surface_size / 2.0);

    log::info!(
        "Zeichenfläche: {}×{} pt, Backing {}×{} px",
        width,
        height,
        view.backing_size[0],
        view.backing_size[1]
    );
}
