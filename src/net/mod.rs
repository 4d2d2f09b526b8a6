//! Networking for external page fragments.
//!
//! SYSTEM CONTEXT
//! ==============
//! `project` fetches the project bank document and hands the extracted
//! detail fragment to the project modal.

pub mod project;
