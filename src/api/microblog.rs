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

/// Client for the microblog platform: short status text plus an uploaded
/// image. The caption already carries the homepage link, so only the
/// caption and media go over the wire.
pub struct MicroblogClient {
    client: Client,
    base_url: String,
    public_url: String,
    access_token: String,
}

impl MicroblogClient {
    pub fn new(
        credentials: &Credentials,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MenubotError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(MicroblogClient {
            client,
            base_url: base_url.into(),
            public_url: "https://twitter.com".to_string(),
            access_token: credentials.access_token.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        MicroblogClient {
            client: Client::new(),
            public_url: base_url.clone(),
            base_url,
            access_token: access_token.into(),
        }
    }

    /// Upload image bytes, returning the platform's media id.
    async fn upload_media(&self, image: &[u8]) -> Result<String, MenubotError> {
        debug!("uploading {} image bytes", image.len());

        let response = self
            .client
            .post(format!("{}/media/upload.json", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&json!({ "media_data": STANDARD.encode(image) }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(MenubotError::PostError(format!(
                "media upload error ({}): {}",
                status, error_text
            )));
        }

        let body: Value = response.json().await?;
        let media_id = body["media_id_string"]
            .as_str()
            .ok_or_else(|| MenubotError::PostError("no media id in upload response".to_string()))?
            .to_string();

        Ok(media_id)
    }
}

#[async_trait]
impl PostTarget for MicroblogClient {
    fn target_name(&self) -> &str {
        "microblog"
    }

    async fn publish(&self, post: &Post, image: Option<&[u8]>) -> Result<String, MenubotError> {
        let media_id = match image {
            Some(data) => Some(self.upload_media(data).await?),
            None => None,
        };

        let mut body = json!({ "status": post.caption });
        if let Some(id) = &media_id {
            body["media_ids"] = json!([id]);
        }

        let response = self
            .client
            .post(format!("{}/statuses/update.json", self.base_url))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(MenubotError::PostError(format!(
                "status update error ({}): {}",
                status, error_text
            )));
        }

        let body: Value = response.json().await?;
        debug!("status response: {:?}", body);

        let id = body["id_str"]
            .as_str()
            .ok_or_else(|| MenubotError::PostError("no id in status response".to_string()))?;
        let screen_name = body["user"]["screen_name"].as_str().unwrap_or("menubot");

        Ok(format!("{}/{}/status/{}", self.public_url, screen_name, id))
    }
}
