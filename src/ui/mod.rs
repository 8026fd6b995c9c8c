//! UI-Layer: Eingabe-Mapping ohne Toolkit-Abhängigkeit.
//!
//! Ein Frontend füttert rohe Events und gehaltene Tasten in
//! `keyboard::map_input` und reicht die entstehenden Intents an den
//! Controller weiter.

pub mod keyboard;

pub use keyboard::{map_input, HeldKeys, InputEvent};
