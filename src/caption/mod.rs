//! Caption generation: a bounded retry loop over randomized phrasing tiers.
//!
//! Each attempt draws a tier (weighted by a chance counter), then a template
//! within the tier, renders it, appends the homepage link, and checks the
//! length budget. The chance counter starts at a random point in [0, 100)
//! and climbs by one per failed attempt, so repeated overflows drift the
//! selection toward the shorter Tier C phrasings before the failsafes kick
//! in.

mod templates;

pub mod rng;

use log::debug;

use crate::text::{append_link, fits_budget};
use rng::Roller;

use templates::{Template, TIER_A, TIER_B, TIER_C};

/// Tag applied to every post.
pub const BOT_TAG: &str = "menubot";
/// The archive's name, tagged on every post.
pub const ARCHIVE_TAG: &str = "What's On The Menu?";
/// The archive's institution, tagged on every post.
pub const ARCHIVE_SHORT_TAG: &str = "NYPL";

const CHANCE_SPAN: u32 = 100;
const TIER_A_CEILING: u32 = 60;
const TIER_B_CEILING: u32 = 80;

/// Length policy for a posting platform.
///
/// Both numbers are configuration, not constants: the platform limit has
/// changed under this bot before (140 to 280), and the attachment reserve
/// is platform policy too.
#[derive(Debug, Clone, Copy)]
pub struct CaptionPolicy {
    /// Maximum post length in characters
    pub max_length: usize,
    /// Characters the platform holds back for a media attachment
    pub attachment_reserve: usize,
}

impl Default for CaptionPolicy {
    fn default() -> Self {
        CaptionPolicy {
            max_length: 280,
            attachment_reserve: 24,
        }
    }
}

/// Everything a template may embed. All fields except the homepage link are
/// optional; templates refuse to render when a field they need is absent.
#[derive(Debug)]
pub struct CaptionContext<'a> {
    pub location: Option<&'a str>,
    pub year: Option<&'a str>,
    pub currency_symbol: Option<&'a str>,
    pub dish: Option<&'a str>,
    pub price: Option<&'a str>,
    pub homepage: &'a str,
}

/// Generate a caption that fits the policy budget.
///
/// Runs the escalating-chance loop, then the failsafes: location plus link
/// if that fits, else the bare homepage link. Never fails; missing fields
/// only narrow which templates can render.
pub fn generate(ctx: &CaptionContext, policy: &CaptionPolicy, roller: &mut dyn Roller) -> String {
    let mut chance = roller.roll(CHANCE_SPAN);

    while chance < CHANCE_SPAN {
        let tier = pick_tier(ctx, chance);
        let index = roller.roll(tier.len() as u32) as usize;

        if let Some(body) = tier[index](ctx) {
            let candidate = append_link(&body, ctx.homepage);
            if fits_budget(&candidate, policy.max_length, policy.attachment_reserve) {
                return candidate;
            }
            debug!(
                "candidate over budget at {} chars, chance {}",
                candidate.chars().count(),
                chance
            );
        }

        chance += 1;
    }

    if let Some(location) = ctx.location {
        let fallback = append_link(location, ctx.homepage);
        if fits_budget(&fallback, policy.max_length, policy.attachment_reserve) {
            debug!("falling back to location-only caption");
            return fallback;
        }
    }

    debug!("falling back to bare homepage link");
    ctx.homepage.to_string()
}

/// Tags for the post: the fixed bot and archive tags, then whatever of
/// year/location/dish is known.
pub fn tags(ctx: &CaptionContext) -> Vec<String> {
    let mut tags = vec![
        BOT_TAG.to_string(),
        ARCHIVE_TAG.to_string(),
        ARCHIVE_SHORT_TAG.to_string(),
    ];
    tags.extend(
        [ctx.year, ctx.location, ctx.dish]
            .into_iter()
            .flatten()
            .map(str::to_string),
    );
    tags
}

fn pick_tier(ctx: &CaptionContext, chance: u32) -> &'static [Template] {
    if chance < TIER_A_CEILING && ctx.currency_symbol.is_some() && ctx.price.is_some() {
        TIER_A
    } else if chance < TIER_B_CEILING && ctx.dish.is_some() {
        TIER_B
    } else {
        TIER_C
    }
}
