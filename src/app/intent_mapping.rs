//! Mapping von UI-Intents auf mutierende App-Commands.

use glam::Vec2;

use super::events::TwoStepAction;
use super::{AppCommand, AppIntent, AppState};
use crate::core::Coordinate;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Klick-Positionen werden hier über die View-Transformation in den
/// Modellraum zurückgerechnet und gerastert; Pan-Positionen bleiben
/// ungerastert im normalisierten Bildschirmraum.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let pick = |pointer_px: Vec2| {
        state
            .view
            .pointer_to_model(pointer_px, state.options.grid_space)
    };
    let screen = |pointer_px: Vec2| Coordinate::from_pixel(pointer_px, state.view.canvas_size);

    match intent {
        AppIntent::AddStationRequested { pointer_px } => {
            vec![AppCommand::AddStation { at: pick(pointer_px) }]
        }
        AppIntent::RemoveStationRequested { pointer_px } => {
            vec![AppCommand::RemoveStation { at: pick(pointer_px) }]
        }
        AppIntent::RenameStationRequested { pointer_px } => {
            vec![AppCommand::RenameStation { at: pick(pointer_px) }]
        }
        AppIntent::ChangeTextDirectionRequested { pointer_px } => {
            vec![AppCommand::ChangeTextDirection { at: pick(pointer_px) }]
        }

        AppIntent::AddConnectionRequested { pointer_px } => vec![AppCommand::ConnectionClick {
            at: pick(pointer_px),
            action: TwoStepAction::Add,
        }],
        AppIntent::RemoveConnectionRequested { pointer_px } => vec![AppCommand::ConnectionClick {
            at: pick(pointer_px),
            action: TwoStepAction::Remove,
        }],
        AppIntent::RecolorConnectionRequested { pointer_px } => vec![AppCommand::ConnectionClick {
            at: pick(pointer_px),
            action: TwoStepAction::Recolor,
        }],

        AppIntent::AddRiverRequested { pointer_px } => vec![AppCommand::RiverClick {
            at: pick(pointer_px),
            action: TwoStepAction::Add,
        }],
        AppIntent::RemoveRiverRequested { pointer_px } => vec![AppCommand::RiverClick {
            at: pick(pointer_px),
            action: TwoStepAction::Remove,
        }],
        AppIntent::RecolorRiverRequested { pointer_px } => vec![AppCommand::RiverClick {
            at: pick(pointer_px),
            action: TwoStepAction::Recolor,
        }],

        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],

        AppIntent::PanStarted { pointer_px } => vec![AppCommand::BeginPan {
            pointer: screen(pointer_px),
        }],
        AppIntent::PanMoved { pointer_px } => vec![AppCommand::UpdatePan {
            pointer: screen(pointer_px),
        }],
        AppIntent::PanEnded => vec![AppCommand::EndPan],

        AppIntent::ViewportResized { size } => vec![AppCommand::SetCanvasSize { size }],

        AppIntent::SaveAsRequested => vec![AppCommand::SaveFileAs],
        AppIntent::OpenFileRequested => vec![AppCommand::OpenFile],
        AppIntent::ExportImageRequested => vec![AppCommand::ExportImage],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
