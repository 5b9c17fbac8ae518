use std::path::PathBuf;

use log::debug;
use reqwest::Client;
use tokio::fs;

use crate::error::MenubotError;

/// Download a page scan into the bot's temp directory, returning the path.
/// The caller removes the file once posting is done.
pub async fn download_page_image(
    client: &Client,
    url: &str,
    menu_id: u64,
    page_no: usize,
) -> Result<PathBuf, MenubotError> {
    let dir = std::env::temp_dir().join("menubot");
    fs::create_dir_all(&dir).await?;

    let path = dir.join(image_filename(menu_id, page_no, "jp2"));
    debug!("saving {} to {}", url, path.display());

    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    fs::write(&path, &bytes).await?;

    Ok(path)
}

fn image_filename(menu_id: u64, page_no: usize, ext: &str) -> String {
    format!("{}-{}.{}", menu_id, page_no, ext)
}
