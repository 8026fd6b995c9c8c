//! KMetroMaker Engine Library.
//! Core-Funktionalität als Library exportiert für Frontends, Tests und Automatisierung.

pub mod app;
pub mod core;
pub mod kmm;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, PendingSelection, Prompter, ScriptedPrompter,
    TwoStepAction,
};
pub use core::{
    Color, Connection, Coordinate, MetroMap, River, Station, TextDirection, ViewTransform,
};
pub use kmm::{parse_kmm, write_kmm};
pub use shared::{EditorOptions, RenderScene};
