//! Rendering: Zeichenflächen (egui, aufzeichnend), Hintergrund, Frame und 3-D-Hilfen.

pub mod background;
mod egui_surface;
mod frame;
pub mod primitives;
mod recording;

pub use egui_surface::EguiSurface;
pub use frame::render_frame;
pub use recording::{DrawOp, RecordingSurface};
