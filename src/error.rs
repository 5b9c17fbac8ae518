use thiserror::Error;

/// Errors that can occur while fetching, composing, or posting a menu
#[derive(Error, Debug)]
pub enum MenubotError {
    /// Failed to fetch a URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Archive API returned an unusable response
    #[error("Archive API error: {0}")]
    ApiError(String),

    /// A posting target rejected the post
    #[error("Posting failed: {0}")]
    PostError(String),

    /// Credentials file could not be parsed
    #[error("Credentials error: {0}")]
    CredentialsError(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Filesystem error while handling the page image
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
