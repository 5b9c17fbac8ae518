pub mod api;
pub mod caption;
pub mod config;
pub mod credentials;
pub mod download;
pub mod error;
pub mod model;
pub mod selection;
pub mod text;

pub use caption::rng::{Roller, ScriptedRoller, ThreadRoller};
pub use caption::{CaptionContext, CaptionPolicy};
pub use config::BotConfig;
pub use error::MenubotError;
pub use model::{Dish, MenuRecord, Page, Post};

/// Compose a finished post from a menu and a selected dish.
///
/// This is the pure core of the bot: no I/O, no ambient randomness. The
/// caption always fits `policy.max_length - policy.attachment_reserve`.
pub fn compose_post(
    menu: &MenuRecord,
    dish: Option<&str>,
    price: Option<&str>,
    homepage: &str,
    policy: &CaptionPolicy,
    roller: &mut dyn Roller,
) -> Post {
    let ctx = CaptionContext {
        location: menu.location.as_deref(),
        year: menu.year.as_deref(),
        currency_symbol: menu.currency_symbol.as_deref(),
        dish,
        price,
        homepage,
    };

    Post {
        caption: caption::generate(&ctx, policy, roller),
        tags: caption::tags(&ctx),
        homepage: homepage.to_string(),
    }
}
