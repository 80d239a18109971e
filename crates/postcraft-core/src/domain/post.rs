use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::EventDescription;
use crate::error::ValidationError;

/// Time-derived post identifier: decimal milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which of the two generated texts an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Instagram caption.
    Long,
    /// X (Twitter) post.
    Short,
}

impl TextKind {
    pub const ALL: [TextKind; 2] = [TextKind::Long, TextKind::Short];

    pub fn label(self) -> &'static str {
        match self {
            TextKind::Long => "Instagram用文章",
            TextKind::Short => "X (Twitter)用文章",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextKind::Long => "long",
            TextKind::Short => "short",
        }
    }
}

impl FromStr for TextKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(TextKind::Long),
            "short" => Ok(TextKind::Short),
            other => Err(ValidationError::UnknownOption {
                field: "kind",
                value: other.to_string(),
            }),
        }
    }
}

/// The pair of texts produced from one event description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTexts {
    pub long_form: String,
    pub short_form: String,
}

impl GeneratedTexts {
    pub fn text(&self, kind: TextKind) -> &str {
        match kind {
            TextKind::Long => &self.long_form,
            TextKind::Short => &self.short_form,
        }
    }
}

/// Post entity - a saved pair of texts with the event details they came from.
///
/// Posts are never modified after creation, so `updated_at` always equals
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub event: EventDescription,
    pub long_form_text: String,
    pub short_form_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a post from an event description and the texts generated for it.
    pub fn new(
        id: PostId,
        event: EventDescription,
        texts: GeneratedTexts,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: event.title(),
            event,
            long_form_text: texts.long_form,
            short_form_text: texts.short_form,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn text(&self, kind: TextKind) -> &str {
        match kind {
            TextKind::Long => &self.long_form_text,
            TextKind::Short => &self.short_form_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventType;

    #[test]
    fn test_new_post_copies_description() {
        let event = EventDescription {
            event_name: "夏祭り".to_string(),
            event_date: "8月1日".to_string(),
            event_location: "公園".to_string(),
            event_type: EventType::Thanks,
            organizer_message: "ありがとう".to_string(),
        };
        let texts = GeneratedTexts {
            long_form: "long".to_string(),
            short_form: "short".to_string(),
        };
        let now = Utc::now();

        let post = Post::new(PostId::from_millis(1_700_000_000_000), event.clone(), texts, now);

        assert_eq!(post.id.as_str(), "1700000000000");
        assert_eq!(post.title, "夏祭り - お礼");
        assert_eq!(post.event, event);
        assert_eq!(post.text(TextKind::Long), "long");
        assert_eq!(post.text(TextKind::Short), "short");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_text_kind_parse() {
        assert_eq!("short".parse::<TextKind>(), Ok(TextKind::Short));
        assert!("medium".parse::<TextKind>().is_err());
    }
}
