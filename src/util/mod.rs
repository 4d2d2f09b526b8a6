//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, class markers, markup
//! scanning) from component logic to keep them reusable and testable.

pub mod dark_mode;
pub mod fragment;
pub mod storage;
