//! Application Controller für zentrale Event-Verarbeitung.

use super::{SketchCommand, SketchIntent, SketchState};

/// Orchestriert UI-Events und Handler auf den SketchState.
#[derive(Debug, Default)]
pub struct SketchController;

impl SketchController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut SketchState,
        intent: SketchIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &SketchState, intent: SketchIntent) -> Vec<SketchCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem SketchState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut SketchState,
        command: SketchCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger ===
            SketchCommand::ClickAt { logical } => handlers::pointer::click(state, logical)?,
            SketchCommand::SetCursor { logical } => handlers::pointer::set_cursor(state, logical),
            SketchCommand::RefreshHover { device } => {
                handlers::pointer::refresh_hover(state, device)
            }
            SketchCommand::RefreshPreview { logical } => {
                handlers::pointer::refresh_preview(state, logical)
            }

            // === Werkzeug & Konstruktion ===
            SketchCommand::SetTool { tool } => handlers::editing::set_tool(state, tool),
            SketchCommand::FinishConstruction => handlers::editing::finish_construction(state),
            SketchCommand::CancelConstruction => handlers::editing::cancel_construction(state),
            SketchCommand::RemoveFigure { id } => handlers::editing::remove_figure(state, id),

            // === Zeichenfläche ===
            SketchCommand::ResizeSurface { metrics } => {
                handlers::view::resize_surface(state, metrics)
            }
        }

        Ok(())
    }
}
