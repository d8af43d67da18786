//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (theme, draft
//! storage) and pure text transforms (highlighting, markdown) from page and
//! component logic so they can be tested without a DOM.

pub mod draft;
pub mod highlight;
pub mod markdown;
pub mod percent;
pub mod storage;
pub mod theme;
