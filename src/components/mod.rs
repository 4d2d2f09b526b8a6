//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome, gallery and dialogs while reading and
//! writing shared state from Leptos context providers.

pub mod gallery;
pub mod modal_shell;
pub mod nav_menu;
pub mod profile_modal;
pub mod project_modal;
pub mod theme_toggle;
