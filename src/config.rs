use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::caption::CaptionPolicy;

/// Bot configuration: length policy, endpoints, and HTTP behavior.
///
/// Every field has a default, so the bot runs with no config file at all.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Maximum post length in characters
    #[serde(default = "default_max_post_length")]
    pub max_post_length: usize,
    /// Characters the platform reserves for a media attachment
    #[serde(default = "default_attachment_reserve")]
    pub attachment_reserve: usize,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Archive API base URL
    #[serde(default = "default_menus_base_url")]
    pub menus_base_url: String,
    /// Base URL for a menu's public homepage (menu id is appended)
    #[serde(default = "default_homepage_base_url")]
    pub homepage_base_url: String,
    /// Microblog API base URL
    #[serde(default = "default_microblog_base_url")]
    pub microblog_base_url: String,
    /// Photoblog API base URL
    #[serde(default = "default_photoblog_base_url")]
    pub photoblog_base_url: String,
    /// Photoblog blog name to post under
    #[serde(default = "default_blog_name")]
    pub blog_name: String,
}

// Default value functions
fn default_max_post_length() -> usize {
    280
}

fn default_attachment_reserve() -> usize {
    24
}

fn default_timeout() -> u64 {
    30
}

fn default_menus_base_url() -> String {
    "http://api.menus.nypl.org".to_string()
}

fn default_homepage_base_url() -> String {
    "http://menus.nypl.org/menus".to_string()
}

fn default_microblog_base_url() -> String {
    "https://api.twitter.com/1.1".to_string()
}

fn default_photoblog_base_url() -> String {
    "https://api.tumblr.com".to_string()
}

fn default_blog_name() -> String {
    "menubot".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            max_post_length: default_max_post_length(),
            attachment_reserve: default_attachment_reserve(),
            timeout: default_timeout(),
            menus_base_url: default_menus_base_url(),
            homepage_base_url: default_homepage_base_url(),
            microblog_base_url: default_microblog_base_url(),
            photoblog_base_url: default_photoblog_base_url(),
            blog_name: default_blog_name(),
        }
    }
}

impl BotConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MENUBOT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MENUBOT__MAX_POST_LENGTH
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("MENUBOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// The length policy handed to the caption generator.
    pub fn caption_policy(&self) -> CaptionPolicy {
        CaptionPolicy {
            max_length: self.max_post_length,
            attachment_reserve: self.attachment_reserve,
        }
    }
}
