use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::api::PostTarget;
use crate::credentials::Credentials;
use crate::error::MenubotError;
use crate::model::Post;

/// Client for the photoblog platform: a photo post with the full caption,
/// tag list, and a source link back to the menu's homepage.
pub struct PhotoblogClient {
    client: Client,
    base_url: String,
    blog_name: String,
    oauth_token: String,
}

impl PhotoblogClient {
    pub fn new(
        credentials: &Credentials,
        blog_name: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MenubotError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(PhotoblogClient {
            client,
            base_url: base_url.into(),
            blog_name: blog_name.into(),
            oauth_token: credentials.tumblr_oauth_token.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(
        oauth_token: impl Into<String>,
        blog_name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        PhotoblogClient {
            client: Client::new(),
            base_url: base_url.into(),
            blog_name: blog_name.into(),
            oauth_token: oauth_token.into(),
        }
    }
}

#[async_trait]
impl PostTarget for PhotoblogClient {
    fn target_name(&self) -> &str {
        "photoblog"
    }

    async fn publish(&self, post: &Post, image: Option<&[u8]>) -> Result<String, MenubotError> {
        let image = image.ok_or_else(|| {
            MenubotError::PostError("photoblog posts require the page image".to_string())
        })?;

        debug!("creating photo post with {} tags", post.tags.len());

        let response = self
            .client
            .post(format!("{}/v2/blog/{}/post", self.base_url, self.blog_name))
            .bearer_auth(&self.oauth_token)
            .json(&json!({
                "type": "photo",
                "state": "published",
                "caption": post.caption,
                "link": post.homepage,
                "tags": post.tags.join(","),
                "data64": STANDARD.encode(image),
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(MenubotError::PostError(format!(
                "photo post error ({}): {}",
                status, error_text
            )));
        }

        let body: Value = response.json().await?;
        debug!("photo post response: {:?}", body);

        let id = body["response"]["id"]
            .as_u64()
            .map(|id| id.to_string())
            .or_else(|| body["response"]["id"].as_str().map(str::to_string))
            .ok_or_else(|| MenubotError::PostError("no id in photo post response".to_string()))?;

        Ok(format!("http://{}.tumblr.com/post/{}", self.blog_name, id))
    }
}
