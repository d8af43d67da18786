//! Reusable UI components composed by the landing page.
//!
//! DESIGN
//! ======
//! Each tab body is one component (`CodeEditor`, `ExerciseBrowser`,
//! `TutorialSection`, `ProgressTracker`) reading its own state context.
//! Small shared pieces (`ProgressBar`, `HighlightedCode`) take plain props.

pub mod code_editor;
pub mod exercise_browser;
pub mod exercise_card;
pub mod header;
pub mod highlighted_code;
pub mod progress_bar;
pub mod progress_tracker;
pub mod tutorial_section;
