//! Conversions between wire DTOs and domain types.

use postcraft_core::ValidationError;
use postcraft_core::domain::{EventDescription, GeneratedTexts, Post, Workspace};
use postcraft_shared::dto::{EventForm, GeneratedTextsResponse, PostResponse, WorkspaceResponse};

pub fn description(form: EventForm) -> Result<EventDescription, ValidationError> {
    Ok(EventDescription {
        event_type: form.event_type.parse()?,
        event_name: form.event_name,
        event_date: form.event_date,
        event_location: form.event_location,
        organizer_message: form.organizer_message,
    })
}

pub fn event_form(description: &EventDescription) -> EventForm {
    EventForm {
        event_name: description.event_name.clone(),
        event_date: description.event_date.clone(),
        event_location: description.event_location.clone(),
        event_type: description.event_type.as_str().to_string(),
        organizer_message: description.organizer_message.clone(),
    }
}

pub fn texts_response(texts: &GeneratedTexts) -> GeneratedTextsResponse {
    GeneratedTextsResponse {
        instagram_text: texts.long_form.clone(),
        twitter_text: texts.short_form.clone(),
    }
}

pub fn workspace_response(workspace: &Workspace) -> WorkspaceResponse {
    WorkspaceResponse {
        view: workspace.view().as_str().to_string(),
        draft: event_form(workspace.draft()),
        preview: workspace.preview().map(texts_response),
    }
}

pub fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        event_name: post.event.event_name.clone(),
        event_date: post.event.event_date.clone(),
        event_location: post.event.event_location.clone(),
        event_type: post.event.event_type.as_str().to_string(),
        organizer_message: post.event.organizer_message.clone(),
        instagram_text: post.long_form_text.clone(),
        twitter_text: post.short_form_text.clone(),
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}
