//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split per page region (`nav`, `gallery`, `modal`, ...) as plain
//! structs. Components receive them as `RwSignal` contexts, which keeps the
//! rules testable without a browser.

pub mod gallery;
pub mod modal;
pub mod nav;
pub mod profiles;
pub mod project;
pub mod theme;
