//! Modal shell state shared by the project and profile dialogs.
//!
//! DESIGN
//! ======
//! The close control is part of the shell's markup, not of its content, so
//! replacing content can never drop it. `set_content` is the only way to
//! change what a modal displays.
//!
//! Asynchronous loads are tagged with a `RequestToken`. Closing a modal or
//! starting a newer request advances the modal's generation, and a response
//! carrying a stale token is dropped instead of re-opening the dialog.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::state::profiles::{MemberId, ProfileDirectory};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalId {
    Project,
    Profile,
}

impl ModalId {
    pub const ALL: [Self; 2] = [Self::Project, Self::Profile];

    /// Element id of the backdrop container.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Project => "projectModal",
            Self::Profile => "profileModal",
        }
    }
}

/// What a modal's content slot holds besides its close control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalContent {
    #[default]
    Empty,
    /// Pre-sanitized markup extracted from an external document.
    Fragment(String),
    Profile(MemberId),
}

/// Identifies one in-flight load against one modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken {
    pub modal: ModalId,
    generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    content: ModalContent,
    generation: u64,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn content(&self) -> &ModalContent {
        &self.content
    }

    pub fn show(&mut self) {
        self.open = true;
    }

    /// Replace the content slot. The close control is untouched.
    pub fn set_content(&mut self, content: ModalContent) {
        self.content = content;
    }

    /// Hide the modal, discard its content, and abandon pending loads.
    pub fn clear_and_close(&mut self) {
        self.open = false;
        self.content = ModalContent::Empty;
        self.generation += 1;
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalsState {
    pub project: ModalState,
    pub profile: ModalState,
}

impl ModalsState {
    pub fn get(&self, id: ModalId) -> &ModalState {
        match id {
            ModalId::Project => &self.project,
            ModalId::Profile => &self.profile,
        }
    }

    pub fn get_mut(&mut self, id: ModalId) -> &mut ModalState {
        match id {
            ModalId::Project => &mut self.project,
            ModalId::Profile => &mut self.profile,
        }
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.get(id).is_open()
    }

    pub fn show(&mut self, id: ModalId) {
        self.get_mut(id).show();
    }

    pub fn set_content(&mut self, id: ModalId, content: ModalContent) {
        self.get_mut(id).set_content(content);
    }

    pub fn clear_and_close(&mut self, id: ModalId) {
        self.get_mut(id).clear_and_close();
    }

    /// Start a load for `id`, superseding any load already in flight.
    pub fn begin_request(&mut self, id: ModalId) -> RequestToken {
        let generation = self.get_mut(id).next_generation();
        RequestToken { modal: id, generation }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.get(token.modal).is_current(token.generation)
    }

    /// Install `content` and show the modal if `token` is still current.
    /// Returns `false` when the response was superseded.
    pub fn complete_request(&mut self, token: RequestToken, content: ModalContent) -> bool {
        if !self.is_current(token) {
            return false;
        }
        let modal = self.get_mut(token.modal);
        modal.set_content(content);
        modal.show();
        true
    }

    /// Reset the profile slot, render `slug`'s record if it exists, then show.
    ///
    /// Unknown slugs still show the (empty) dialog when `show_unknown` is set;
    /// otherwise the dialog is left closed.
    pub fn open_profile(&mut self, directory: &ProfileDirectory, slug: &str, show_unknown: bool) -> Option<MemberId> {
        let found = directory.lookup(slug).map(|(id, _)| id);
        let modal = &mut self.profile;
        modal.set_content(ModalContent::Empty);
        match found {
            Some(id) => {
                modal.set_content(ModalContent::Profile(id));
                modal.show();
            }
            None if show_unknown => modal.show(),
            None => {}
        }
        found
    }

    /// Close every open modal whose backdrop was the exact click target.
    /// Returns the modals that were closed.
    pub fn dismiss_backdrop_hits<F>(&mut self, is_backdrop_hit: F) -> Vec<ModalId>
    where
        F: Fn(ModalId) -> bool,
    {
        let hits: Vec<ModalId> = ModalId::ALL
            .into_iter()
            .filter(|id| self.is_open(*id) && is_backdrop_hit(*id))
            .collect();
        for id in &hits {
            self.clear_and_close(*id);
        }
        hits
    }
}
