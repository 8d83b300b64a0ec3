//! Plane Sketch Library.
//! Interaktive 2D-Figurenkonstruktion als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    ConstructionState, SketchCommand, SketchController, SketchEngine, SketchIntent, SketchKey,
    SketchState, SurfaceMetrics, ViewState,
};
pub use core::{
    Figure, FigureId, FigureKind, FigureList, FigureRegistry, GeomCore, GeomLoader, ProjectParams,
    Surface, ToolCategory,
};
pub use render::{EguiSurface, RecordingSurface};
pub use shared::SketchOptions;
