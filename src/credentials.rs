use std::path::Path;

use serde::Deserialize;

use crate::error::MenubotError;

/// API credentials, loaded from a YAML file.
///
/// The file holds the microblog consumer/access key pairs, the photoblog
/// consumer/oauth key pairs, and the archive token. All nine keys are
/// required to match the established file format, but only `access_token`,
/// `tumblr_oauth_token`, and `nypl_menus_token` go over the wire: the
/// clients authenticate with bearer tokens, and full signing flows are out
/// of scope.
///
/// ```yaml
/// consumer_key: ...
/// consumer_secret: ...
/// access_token: ...
/// access_token_secret: ...
/// tumblr_consumer_key: ...
/// tumblr_consumer_secret: ...
/// tumblr_oauth_token: ...
/// tumblr_oauth_secret: ...
/// nypl_menus_token: ...
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
    pub tumblr_consumer_key: String,
    pub tumblr_consumer_secret: String,
    pub tumblr_oauth_token: String,
    pub tumblr_oauth_secret: String,
    pub nypl_menus_token: String,
}

/// Load credentials from a YAML file. A missing key surfaces as a serde
/// error naming the field.
pub fn load(path: &Path) -> Result<Credentials, MenubotError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}
