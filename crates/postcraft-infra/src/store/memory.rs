//! In-memory post store. History lives as long as the process.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postcraft_core::domain::Post;
use postcraft_core::error::StoreError;
use postcraft_core::ports::PostStore;

/// Post history kept newest-first in a deque with async RwLock.
pub struct InMemoryPostStore {
    posts: RwLock<VecDeque<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(VecDeque::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn append(&self, post: Post) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        tracing::debug!(post_id = %post.id, total = posts.len() + 1, "Post stored");
        posts.push_front(post);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().cloned().collect())
    }
}
