//! One review pass over a folder: the image list, the cursor and the
//! decisions taken so far.

use crate::ImageStore;
use crate::navigation::{Navigator, Step};
use crate::review::{Decision, ReviewState};
use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Operator command, independent of how it was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionAction {
    Keep,
    Delete,
    Previous,
    Next,
    Quit,
}

impl SessionAction {
    pub const ALL: [SessionAction; 5] = [
        SessionAction::Keep,
        SessionAction::Delete,
        SessionAction::Previous,
        SessionAction::Next,
        SessionAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SessionAction::Keep => "Keep",
            SessionAction::Delete => "Delete",
            SessionAction::Previous => "Previous",
            SessionAction::Next => "Next",
            SessionAction::Quit => "Quit",
        }
    }
}

/// Informational, non-fatal conditions surfaced to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyFolder,
    EndOfImages,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EmptyFolder => f.write_str("No valid images in this folder"),
            Notice::EndOfImages => f.write_str("End of images"),
        }
    }
}

/// What the shell has to do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redisplay,
    Notice(Notice),
    Unchanged,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("{0} is not part of this session")]
    UnknownImage(String),
}

#[derive(Debug, Clone)]
pub struct Session {
    store: ImageStore,
    nav: Navigator,
    review: ReviewState,
}

impl Session {
    pub fn new(store: ImageStore) -> Self {
        let nav = Navigator::new(store.len());
        Self {
            store,
            nav,
            review: ReviewState::new(),
        }
    }

    /// Scan `folder` and start a session over it.
    pub fn open(folder: impl AsRef<Path>) -> Result<Self> {
        let store = ImageStore::scan(folder)?;
        tracing::info!(
            "session opened on {} with {} images",
            store.folder().display(),
            store.len()
        );
        Ok(Self::new(store))
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    pub fn review(&self) -> &ReviewState {
        &self.review
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Zero-based index of the current image.
    pub fn index(&self) -> Option<usize> {
        self.nav.index()
    }

    pub fn current(&self) -> Option<&str> {
        self.nav.index().and_then(|i| self.store.get(i))
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.current().map(|name| self.store.path_of(name))
    }

    pub fn current_decision(&self) -> Decision {
        self.current()
            .map(|name| self.review.decision_of(name))
            .unwrap_or_default()
    }

    /// Record `decision` for a file of this session.
    pub fn mark(&mut self, filename: &str, decision: Decision) -> Result<(), SessionError> {
        if !self.store.contains(filename) {
            return Err(SessionError::UnknownImage(filename.to_string()));
        }
        self.review.mark(filename, decision);
        Ok(())
    }

    /// Mark the current image, then move on to the next one.
    pub fn decide_and_advance(&mut self, decision: Decision) -> Outcome {
        let Some(name) = self.current().map(str::to_string) else {
            return Outcome::Notice(Notice::EmptyFolder);
        };
        self.review.mark(&name, decision);
        tracing::debug!("marked {name} as {decision:?}");
        self.advance()
    }

    pub fn advance(&mut self) -> Outcome {
        if self.is_empty() {
            return Outcome::Notice(Notice::EmptyFolder);
        }
        match self.nav.advance() {
            Step::Moved => Outcome::Redisplay,
            _ => Outcome::Notice(Notice::EndOfImages),
        }
    }

    pub fn retreat(&mut self) -> Outcome {
        match self.nav.retreat() {
            Step::Moved => Outcome::Redisplay,
            _ => Outcome::Unchanged,
        }
    }

    pub fn apply(&mut self, action: SessionAction) -> Outcome {
        match action {
            SessionAction::Keep => self.decide_and_advance(Decision::Keep),
            SessionAction::Delete => self.decide_and_advance(Decision::Delete),
            SessionAction::Previous => self.retreat(),
            SessionAction::Next => self.advance(),
            SessionAction::Quit => Outcome::Quit,
        }
    }

    /// Window title: position and the decision of the current image.
    pub fn title(&self) -> String {
        match self.nav.index() {
            Some(i) => format!(
                "Image Triage - {}/{} {}",
                i + 1,
                self.store.len(),
                self.current_decision()
            )
            .trim_end()
            .to_string(),
            None => "Image Triage".to_string(),
        }
    }
}
