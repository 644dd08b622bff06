//! Local view state: the post list, compose fields and edit mode.
//!
//! # Design
//! `Session` owns everything the view displays. Mutating methods come in
//! two flavors: `confirm_*` methods apply the effect of a server-confirmed
//! operation, and the edit-mode methods (`start_edit`, `cancel_edit`) are
//! purely local. Callers must only invoke `confirm_*` after a successful
//! parse — a failed round-trip therefore leaves the session exactly as it
//! was, and no rollback path exists.
//!
//! At most one edit is active at a time. `EditMode` is a sum type, so the
//! invariant holds structurally; starting an edit while another is active
//! silently replaces it (last start wins), matching how the view behaves.

use crate::types::{Post, PostId};

/// An edit-in-progress copy of a post's fields, decoupled from the
/// committed entity until saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

/// Whether a post is currently being edited, and which.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing { id: PostId, draft: Draft },
}

/// The view's state: ordered posts, new-post compose fields, edit mode.
#[derive(Debug, Default)]
pub struct Session {
    posts: Vec<Post>,
    compose: Draft,
    edit: EditMode,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts in the order the backend returned them.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn compose(&self) -> &Draft {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut Draft {
        &mut self.compose
    }

    pub fn edit(&self) -> &EditMode {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<PostId> {
        match self.edit {
            EditMode::Viewing => None,
            EditMode::Editing { id, .. } => Some(id),
        }
    }

    /// Draft of the active edit, if any.
    pub fn editing_draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.edit {
            EditMode::Viewing => None,
            EditMode::Editing { draft, .. } => Some(draft),
        }
    }

    /// Replace the whole list with a fresh server response.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Clear the compose fields after a confirmed create. The caller
    /// refetches the list so the server-assigned id is authoritative.
    pub fn confirm_create(&mut self) {
        self.compose = Draft::default();
    }

    /// Seed an edit from the current state of the post with `id`.
    ///
    /// Returns false (and changes nothing) when the id is not in the
    /// list. Any previously active edit is abandoned without warning.
    pub fn start_edit(&mut self, id: PostId) -> bool {
        let Some(post) = self.posts.iter().find(|p| p.id == id) else {
            return false;
        };
        self.edit = EditMode::Editing {
            id,
            draft: Draft {
                title: post.title.clone(),
                content: post.content.clone(),
            },
        };
        true
    }

    /// Discard the active edit, if any. Never prompts.
    pub fn cancel_edit(&mut self) {
        self.edit = EditMode::Viewing;
    }

    /// Patch the matching post with the submitted draft and leave edit
    /// mode. Only called after the server confirmed the update.
    pub fn confirm_update(&mut self, id: PostId, draft: &Draft) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == id) {
            post.title = draft.title.clone();
            post.content = draft.content.clone();
        }
        self.edit = EditMode::Viewing;
    }

    /// Remove the matching post. Only called after the server confirmed
    /// the delete.
    pub fn confirm_delete(&mut self, id: PostId) {
        self.posts.retain(|p| p.id != id);
    }
}
