//! The composer's state machine.
//!
//! Every transition borrows the current [`Workspace`] and returns a new one,
//! so a failed transition leaves the caller's state exactly as it was.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::{EventDescription, GeneratedTexts, Post, PostId};
use crate::error::ValidationError;
use crate::generator;

/// Which screen the organizer is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Form and preview.
    #[default]
    Creating,
    /// Post history.
    Browsing,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            View::Creating => View::Browsing,
            View::Browsing => View::Creating,
        }
    }

    /// Navigation tab label.
    pub fn label(self) -> &'static str {
        match self {
            View::Creating => "新規作成",
            View::Browsing => "投稿履歴",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Creating => "creating",
            View::Browsing => "browsing",
        }
    }
}

impl FromStr for View {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creating" => Ok(View::Creating),
            "browsing" => Ok(View::Browsing),
            other => Err(ValidationError::UnknownOption {
                field: "view",
                value: other.to_string(),
            }),
        }
    }
}

/// Live controller state: current view, the draft bound to the form and the
/// last generated preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    view: View,
    draft: EventDescription,
    preview: Option<GeneratedTexts>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn draft(&self) -> &EventDescription {
        &self.draft
    }

    pub fn preview(&self) -> Option<&GeneratedTexts> {
        self.preview.as_ref()
    }

    /// Replace the draft. An existing preview is kept.
    pub fn with_draft(&self, draft: EventDescription) -> Self {
        Self {
            draft,
            ..self.clone()
        }
    }

    /// Generate texts for the current draft, replacing any earlier preview.
    pub fn generate(&self) -> Result<Self, ValidationError> {
        self.draft.validate()?;

        Ok(Self {
            preview: Some(generator::generate(&self.draft)),
            ..self.clone()
        })
    }

    /// Turn the draft and its preview into a post.
    ///
    /// On success the returned workspace has a default draft, no preview and
    /// shows the history.
    pub fn save(&self, id: PostId, now: DateTime<Utc>) -> Result<(Self, Post), ValidationError> {
        let texts = self
            .preview
            .clone()
            .ok_or(ValidationError::NothingGenerated)?;

        let post = Post::new(id, self.draft.clone(), texts, now);
        let next = Self {
            view: View::Browsing,
            draft: EventDescription::default(),
            preview: None,
        };

        Ok((next, post))
    }

    pub fn show(&self, view: View) -> Self {
        Self {
            view,
            ..self.clone()
        }
    }

    pub fn toggle_view(&self) -> Self {
        self.show(self.view.toggled())
    }
}
