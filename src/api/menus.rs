use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::caption::rng::Roller;
use crate::error::MenubotError;
use crate::model::{MenuRecord, Page};

// The archive's digitization range.
const MIN_ARCHIVE_YEAR: u32 = 1851;
const MAX_ARCHIVE_YEAR: u32 = 2007;

const SORT_KEYS: [&str; 3] = ["date", "name", "dish_count"];

/// Client for the What's On The Menu archive API.
pub struct MenusClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct MenusResponse {
    menus: Vec<MenuRecord>,
}

#[derive(Deserialize)]
struct PagesResponse {
    pages: Vec<Page>,
}

impl MenusClient {
    /// Create a client against the configured archive API base URL.
    pub fn new(
        token: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MenubotError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(MenusClient {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        MenusClient {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// List menus within a year window, sorted by the given key.
    pub async fn menus(
        &self,
        min_year: u32,
        max_year: u32,
        sort_by: &str,
    ) -> Result<Vec<MenuRecord>, MenubotError> {
        let url = format!("{}/menus", self.base_url);
        debug!("listing menus {}-{} sorted by {}", min_year, max_year, sort_by);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("token", self.token.as_str()),
                ("min_year", &min_year.to_string()),
                ("max_year", &max_year.to_string()),
                ("sort_by", sort_by),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: MenusResponse = response.json().await?;
        Ok(body.menus)
    }

    /// Fetch the photographed pages of a menu.
    pub async fn menu_pages(&self, menu_id: u64) -> Result<Vec<Page>, MenubotError> {
        let url = format!("{}/menus/{}/pages", self.base_url, menu_id);
        debug!("fetching pages for menu {}", menu_id);

        let response = self
            .client
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: PagesResponse = response.json().await?;
        Ok(body.pages)
    }

    /// Pick a random menu: random year window, random sort key, first hit.
    pub async fn random_menu(&self, roller: &mut dyn Roller) -> Result<MenuRecord, MenubotError> {
        let min_year = MIN_ARCHIVE_YEAR + roller.roll(MAX_ARCHIVE_YEAR - MIN_ARCHIVE_YEAR + 1);
        let max_year = min_year + 1 + roller.roll(11);
        let sort_by = SORT_KEYS[roller.roll(SORT_KEYS.len() as u32) as usize];

        let menus = self.menus(min_year, max_year, sort_by).await?;
        menus.into_iter().next().ok_or_else(|| {
            MenubotError::ApiError(format!(
                "archive returned no menus for {}-{}",
                min_year, max_year
            ))
        })
    }
}
