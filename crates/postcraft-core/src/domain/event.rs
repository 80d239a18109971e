use std::str::FromStr;


use crate::error::ValidationError;

/// Kind of post being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventType {
    /// Pre-event post inviting attendance.
    #[default]
    Announcement,
    /// Post-event post thanking attendees.
    Thanks,
}

impl EventType {
    pub const ALL: [EventType; 2] = [EventType::Announcement, EventType::Thanks];

    /// Short label used in post titles and history badges.
    pub fn label(self) -> &'static str {
        match self {
            EventType::Announcement => "告知",
            EventType::Thanks => "お礼",
        }
    }

    /// Label shown in the type selector.
    pub fn option_label(self) -> &'static str {
        match self {
            EventType::Announcement => "イベント告知",
            EventType::Thanks => "お礼・報告",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Announcement => "announcement",
            EventType::Thanks => "thanks",
        }
    }
}

impl FromStr for EventType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "announcement" => Ok(EventType::Announcement),
            "thanks" => Ok(EventType::Thanks),
            other => Err(ValidationError::UnknownOption {
                field: "eventType",
                value: other.to_string(),
            }),
        }
    }
}

/// Event details as entered in the form.
///
/// Only `event_name`, `event_date` and `event_location` are required, and only
/// before generation. The date is free text and never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDescription {
    pub event_name: String,
    pub event_date: String,
    pub event_location: String,
    pub event_type: EventType,
    /// Empty when the organizer left no message.
    pub organizer_message: String,
}

impl EventDescription {
    /// Check the fields required before texts can be generated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = [&self.event_name, &self.event_date, &self.event_location]
            .iter()
            .any(|field| field.trim().is_empty());

        if missing {
            return Err(ValidationError::MissingEventFields);
        }
        Ok(())
    }

    /// Post title, e.g. `刈谷市民文化祭 - 告知`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.event_name, self.event_type.label())
    }

    pub fn has_message(&self) -> bool {
        !self.organizer_message.trim().is_empty()
    }
}
