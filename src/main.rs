use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{error, info};
use rand::Rng;

use menubot::api::{MenusClient, MicroblogClient, PhotoblogClient, PostTarget};
use menubot::caption::rng::{Roller, ThreadRoller};
use menubot::{compose_post, config::BotConfig, credentials, download, selection, MenubotError};

/// Post a random historical menu from NYPL's What's On The Menu archive
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file containing archive and posting credentials
    #[arg(short = 'y', long, default_value = "menubot.yaml")]
    credentials: PathBuf,

    /// Percent chance of posting on this run
    #[arg(short, long, default_value_t = 12.5)]
    chance: f64,

    /// Test mode: go through the motions but don't download or post anything
    #[arg(short = 'x', long)]
    test: bool,
}

fn percent_chance(percent: f64) -> bool {
    rand::thread_rng().gen::<f64>() < percent / 100.0
}

#[tokio::main]
async fn main() -> Result<(), MenubotError> {
    env_logger::init();
    let args = Args::parse();

    if !percent_chance(args.chance) {
        info!("no post this time");
        return Ok(());
    }

    let config = BotConfig::load()?;
    let creds = credentials::load(&args.credentials)?;
    let mut roller = ThreadRoller;

    let timeout = Duration::from_secs(config.timeout);
    let menus = MenusClient::new(
        creds.nypl_menus_token.as_str(),
        config.menus_base_url.as_str(),
        timeout,
    )?;
    let menu = menus.random_menu(&mut roller).await?;
    info!("picked menu {}", menu.id);

    let pages = menus.menu_pages(menu.id).await?;
    if pages.is_empty() {
        return Err(MenubotError::ApiError(format!(
            "menu {} has no pages",
            menu.id
        )));
    }

    let page_index = roller.roll(pages.len() as u32) as usize;
    let page = &pages[page_index];
    let image_url = page.image_url.as_deref().ok_or_else(|| {
        MenubotError::ApiError(format!(
            "page {} of menu {} has no image",
            page_index, menu.id
        ))
    })?;
    info!("picked page {} of {}", page_index, pages.len());

    let (dish, price) = selection::pick_dish(&page.dishes, config.max_post_length, &mut roller);
    let homepage = format!("{}/{}", config.homepage_base_url, menu.id);

    let post = compose_post(
        &menu,
        dish.as_deref(),
        price.as_deref(),
        &homepage,
        &config.caption_policy(),
        &mut roller,
    );
    info!("caption: {}", post.caption);

    if args.test {
        info!("(test mode, not downloading or posting)");
        return Ok(());
    }

    let http = reqwest::Client::builder().timeout(timeout).build()?;
    let image_path = download::download_page_image(&http, image_url, menu.id, page_index).await?;
    let image = tokio::fs::read(&image_path).await?;

    let targets: Vec<Box<dyn PostTarget>> = vec![
        Box::new(PhotoblogClient::new(
            &creds,
            config.blog_name.as_str(),
            config.photoblog_base_url.as_str(),
            timeout,
        )?),
        Box::new(MicroblogClient::new(
            &creds,
            config.microblog_base_url.as_str(),
            timeout,
        )?),
    ];

    for target in &targets {
        match target.publish(&post, Some(&image)).await {
            Ok(url) => info!("posted to {}: {}", target.target_name(), url),
            Err(e) => error!("posting to {} failed: {}", target.target_name(), e),
        }
    }

    tokio::fs::remove_file(&image_path).await?;
    Ok(())
}
