//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by area (`ui`, `playground`, `exercises`, `tutorial`,
//! `progress`) so each tab depends on one small model. Models are plain
//! structs with no Leptos types; `App` wraps them in `RwSignal` contexts.

pub mod exercises;
pub mod playground;
pub mod progress;
pub mod tutorial;
pub mod ui;
