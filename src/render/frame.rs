//! Ein Frame: Löschen, Hintergrund, Figuren in Listenreihenfolge, Vorschau obenauf.

use super::{background, primitives};
use crate::app::SketchState;
use crate::core::{Rgba, Surface};
use glam::Vec3;

const LATTICE_COLOR: Rgba = [0.4, 0.4, 0.4, 0.8];
const LATTICE_RADIUS: f32 = 2.0;

/// Zeichnet den kompletten Frame.
///
/// Animationen aller Figuren werden genau einmal pro Frame vor dem Zeichnen
/// weitergeschaltet. `lattice` sind optionale 3-D-Punkte des Geometrie-Kerns.
pub fn render_frame(state: &mut SketchState, surface: &mut dyn Surface, lattice: &[Vec3]) {
    let params = state.view.params;
    let size = surface.size();

    surface.clear();
    background::draw_grid(surface, size, &params, &state.options);
    background::draw_axes(surface, size, &params, &state.options);
    primitives::draw_points_3d(surface, lattice, LATTICE_RADIUS, LATTICE_COLOR, &params);

    for figure in state.figures.iter_mut() {
        figure.tick();
        figure.draw(surface, &params);
    }

    if let Some(preview) = state.preview.as_mut() {
        preview.tick();
        surface.push_alpha(state.options.preview_alpha);
        preview.draw(surface, &params);
        surface.pop_alpha();
    }
}
