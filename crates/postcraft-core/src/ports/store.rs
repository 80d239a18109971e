use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Session-lifetime post history.
///
/// Append-only: posts are never updated or removed once stored.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Store a post in front of all earlier ones.
    async fn append(&self, post: Post) -> Result<(), StoreError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;
}
