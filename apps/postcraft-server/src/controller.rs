//! Form/list controller - applies workspace transitions and talks to the ports.

use std::sync::Arc;

use tokio::sync::Mutex;

use postcraft_core::DomainError;
use postcraft_core::domain::{EventDescription, Post, PostId, TextKind, View, Workspace};
use postcraft_core::ports::{ClipboardWriter, Clock, IdGenerator, PostStore};

use crate::middleware::error::AppResult;

/// Owns the single live [`Workspace`] of the session.
///
/// Each operation takes the workspace lock for its whole duration, so a save
/// (store append plus state swap) is never observed half-done.
pub struct Controller {
    workspace: Mutex<Workspace>,
    posts: Arc<dyn PostStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl Controller {
    pub fn new(
        posts: Arc<dyn PostStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        clipboard: Arc<dyn ClipboardWriter>,
    ) -> Self {
        Self {
            workspace: Mutex::new(Workspace::new()),
            posts,
            clock,
            ids,
            clipboard,
        }
    }

    /// Copy of the current workspace.
    pub async fn snapshot(&self) -> Workspace {
        self.workspace.lock().await.clone()
    }

    /// Replace the draft with what the form submitted.
    pub async fn edit(&self, draft: EventDescription) -> Workspace {
        let mut workspace = self.workspace.lock().await;
        *workspace = workspace.with_draft(draft);
        workspace.clone()
    }

    pub async fn generate(&self) -> AppResult<Workspace> {
        let mut workspace = self.workspace.lock().await;
        *workspace = workspace.generate()?;

        tracing::debug!(
            event_name = %workspace.draft().event_name,
            event_type = workspace.draft().event_type.as_str(),
            "Texts generated"
        );
        Ok(workspace.clone())
    }

    /// Store the previewed post, reset the form and switch to the history.
    pub async fn save(&self) -> AppResult<Post> {
        let mut workspace = self.workspace.lock().await;
        let (next, post) = workspace.save(self.ids.next_id(), self.clock.now())?;

        self.posts.append(post.clone()).await?;
        *workspace = next;

        tracing::info!(post_id = %post.id, title = %post.title, "Post saved");
        Ok(post)
    }

    pub async fn show(&self, view: View) -> Workspace {
        let mut workspace = self.workspace.lock().await;
        *workspace = workspace.show(view);
        workspace.clone()
    }

    pub async fn toggle_view(&self) -> Workspace {
        let mut workspace = self.workspace.lock().await;
        *workspace = workspace.toggle_view();
        workspace.clone()
    }

    /// Saved posts, newest first.
    pub async fn posts(&self) -> AppResult<Vec<Post>> {
        Ok(self.posts.list().await?)
    }

    /// Write one of a post's texts to the clipboard. Never touches the store
    /// or the workspace.
    pub async fn copy(&self, id: &PostId, kind: TextKind) -> AppResult<()> {
        let posts = self.posts.list().await?;
        let post = posts
            .iter()
            .find(|post| &post.id == id)
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Post",
                id: id.to_string(),
            })?;

        if let Err(e) = self.clipboard.write_text(post.text(kind)).await {
            tracing::warn!(post_id = %id, kind = kind.as_str(), error = %e, "Clipboard copy failed");
            return Err(e.into());
        }

        tracing::debug!(post_id = %id, kind = kind.as_str(), "Copied post text");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use postcraft_core::domain::EventType;
    use postcraft_infra::{FixedClock, InMemoryClipboard, InMemoryPostStore, MonotonicIdGenerator};

    use crate::middleware::error::AppError;

    struct Harness {
        controller: Controller,
        clipboard: Arc<InMemoryClipboard>,
    }

    fn harness_with(clipboard: InMemoryClipboard) -> Harness {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 12, 1, 3, 0, 0).unwrap(),
        ));
        let clipboard = Arc::new(clipboard);
        let controller = Controller::new(
            Arc::new(InMemoryPostStore::new()),
            clock.clone(),
            Arc::new(MonotonicIdGenerator::new(clock)),
            clipboard.clone(),
        );
        Harness {
            controller,
            clipboard,
        }
    }

    fn harness() -> Harness {
        harness_with(InMemoryClipboard::new())
    }

    fn festival() -> EventDescription {
        EventDescription {
            event_name: "刈谷市民文化祭".to_string(),
            event_date: "2024年12月25日（水）14:00〜".to_string(),
            event_location: "刈谷市総合文化センター".to_string(),
            event_type: EventType::Announcement,
            organizer_message: "よろしくお願いします".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_then_save_appends_one_post() {
        let h = harness();
        h.controller.edit(festival()).await;
        let generated = h.controller.generate().await.unwrap();

        let long_form = &generated.preview().unwrap().long_form;
        assert!(long_form.contains("【刈谷市民文化祭】"));
        assert!(long_form.lines().last().unwrap().contains("#刈谷市民文化祭"));

        let post = h.controller.save().await.unwrap();
        let posts = h.controller.posts().await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0], post);
        assert_eq!(post.title, "刈谷市民文化祭 - 告知");
        assert_eq!(post.event, festival());
    }

    #[tokio::test]
    async fn test_save_resets_workspace_and_shows_history() {
        let h = harness();
        h.controller.edit(festival()).await;
        h.controller.generate().await.unwrap();
        h.controller.save().await.unwrap();

        let ws = h.controller.snapshot().await;
        assert_eq!(ws.view(), View::Browsing);
        assert_eq!(ws.draft(), &EventDescription::default());
        assert!(ws.preview().is_none());
    }

    #[tokio::test]
    async fn test_invalid_generate_keeps_state() {
        let h = harness();
        h.controller
            .edit(EventDescription {
                event_name: String::new(),
                event_date: "2024年1月1日".to_string(),
                event_location: "会場".to_string(),
                ..Default::default()
            })
            .await;

        let err = h.controller.generate().await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(h.controller.snapshot().await.preview().is_none());
    }

    #[tokio::test]
    async fn test_save_without_generate_leaves_store_unchanged() {
        let h = harness();
        h.controller.edit(festival()).await;

        let err = h.controller.save().await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "文章を生成してください"));
        assert!(h.controller.posts().await.unwrap().is_empty());
        assert_eq!(h.controller.snapshot().await.view(), View::Creating);
    }

    #[tokio::test]
    async fn test_posts_listed_in_reverse_save_order() {
        let h = harness();
        for name in ["一", "二", "三"] {
            let mut event = festival();
            event.event_name = name.to_string();
            h.controller.edit(event).await;
            h.controller.generate().await.unwrap();
            h.controller.save().await.unwrap();
        }

        let posts = h.controller.posts().await.unwrap();
        let names: Vec<&str> = posts.iter().map(|p| p.event.event_name.as_str()).collect();
        assert_eq!(names, vec!["三", "二", "一"]);

        let ids: Vec<u64> = posts.iter().map(|p| p.id.as_str().parse().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[tokio::test]
    async fn test_copy_writes_selected_text() {
        let h = harness();
        h.controller.edit(festival()).await;
        h.controller.generate().await.unwrap();
        let post = h.controller.save().await.unwrap();

        h.controller.copy(&post.id, TextKind::Short).await.unwrap();
        assert_eq!(
            h.clipboard.contents().await.as_deref(),
            Some(post.short_form_text.as_str())
        );
    }

    #[tokio::test]
    async fn test_copy_failure_leaves_store_unchanged() {
        let h = harness_with(InMemoryClipboard::failing());
        h.controller.edit(festival()).await;
        h.controller.generate().await.unwrap();
        let post = h.controller.save().await.unwrap();

        let err = h.controller.copy(&post.id, TextKind::Long).await.unwrap_err();
        assert!(matches!(err, AppError::Clipboard(_)));
        assert_eq!(h.controller.posts().await.unwrap(), vec![post]);
    }

    #[tokio::test]
    async fn test_copy_unknown_post() {
        let h = harness();
        let err = h
            .controller
            .copy(&PostId::from_millis(7), TextKind::Long)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_view_switch_has_no_side_effects() {
        let h = harness();
        h.controller.edit(festival()).await;
        h.controller.generate().await.unwrap();

        let ws = h.controller.toggle_view().await;
        assert_eq!(ws.view(), View::Browsing);
        assert!(ws.preview().is_some());

        let ws = h.controller.show(View::Creating).await;
        assert_eq!(ws.draft(), &festival());
        assert!(h.controller.posts().await.unwrap().is_empty());
    }
}
