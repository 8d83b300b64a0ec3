//! Core-Domänentypen: Projektion, Figuren, Registry, Figurenliste, Geometrie-Kern.

pub mod figure;
pub mod figure_list;
pub mod geom;
pub mod projection;
pub mod registry;
pub mod surface;

pub use figure::{
    BuildState, Constructible, ContourFigure, Figure, FigureGeometry, FigureId, FigureKind,
    MarkerFigure, PointFigure, PolylineFigure,
};
pub use figure_list::FigureList;
pub use geom::{GeomCore, GeomError, GeomLoader};
pub use projection::ProjectParams;
pub use registry::{FigureFactory, FigureRegistry, ToolCategory, UnknownKindError};
pub use surface::{Rgba, StrokeStyle, Surface};
