//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod color_input;
pub mod connections;
pub mod export;
pub mod file_io;
pub mod rivers;
pub mod stations;
