//! UI-Komponenten: Toolbar, Status-Bar, Eingabe der Zeichenfläche.

pub mod input;
mod keyboard;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
