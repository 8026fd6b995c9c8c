//! Application Controller für zentrale Event-Verarbeitung.

use super::prompt::Prompter;
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Der Controller hält den injizierten [`Prompter`]; alle modalen
/// Rückfragen der Use-Cases laufen über ihn.
pub struct AppController {
    prompter: Box<dyn Prompter>,
}

impl AppController {
    /// Erstellt einen Controller mit dem gegebenen Dialog-Backend.
    pub fn new(prompter: Box<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;
        let prompter = self.prompter.as_ref();

        match command {
            // === Editing ===
            AppCommand::AddStation { at } => handlers::editing::add_station(state, prompter, at),
            AppCommand::RemoveStation { at } => {
                handlers::editing::remove_station(state, prompter, at)
            }
            AppCommand::RenameStation { at } => {
                handlers::editing::rename_station(state, prompter, at)
            }
            AppCommand::ChangeTextDirection { at } => {
                handlers::editing::change_text_direction(state, prompter, at)
            }
            AppCommand::ConnectionClick { at, action } => {
                handlers::editing::connection_click(state, prompter, at, action)
            }
            AppCommand::RiverClick { at, action } => {
                handlers::editing::river_click(state, prompter, at, action)
            }

            // === View ===
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::BeginPan { pointer } => handlers::view::begin_pan(state, pointer),
            AppCommand::UpdatePan { pointer } => handlers::view::update_pan(state, pointer),
            AppCommand::EndPan => handlers::view::end_pan(state),
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),

            // === Datei-I/O ===
            AppCommand::SaveFileAs => handlers::file_io::save_as(state, prompter)?,
            AppCommand::OpenFile => handlers::file_io::open(state, prompter)?,
            AppCommand::ExportImage => handlers::file_io::export_image(state, prompter),
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Baut die Zeichenliste für den aktuellen Zustand.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
