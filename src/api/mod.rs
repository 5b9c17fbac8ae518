mod menus;
mod microblog;
mod photoblog;

pub use menus::MenusClient;
pub use microblog::MicroblogClient;
pub use photoblog::PhotoblogClient;

use async_trait::async_trait;

use crate::error::MenubotError;
use crate::model::Post;

/// Unified trait for the posting platforms.
///
/// Targets are tried sequentially, best-effort: a failure on one is logged
/// by the caller and does not stop the others.
#[async_trait]
pub trait PostTarget: Send + Sync {
    /// Short name for logging (e.g. "microblog", "photoblog")
    fn target_name(&self) -> &str;

    /// Publish the post, optionally with the page image, returning the
    /// public URL of the created post.
    async fn publish(&self, post: &Post, image: Option<&[u8]>) -> Result<String, MenubotError>;
}
