//! Phrasing templates, grouped by tier.
//!
//! A template returns `None` when a field it embeds is missing; the
//! generator treats that as a failed attempt and keeps drawing. Tiers run
//! from most data-hungry (A: dish and price) to least (C: location only).

use super::CaptionContext;

pub(crate) type Template = fn(&CaptionContext) -> Option<String>;

pub(crate) const TIER_A: &[Template] = &[bargain, in_year_only, dish_price_line];

pub(crate) const TIER_B: &[Template] = &[
    welcome_to_year,
    why_not_enjoy,
    may_i_recommend,
    dish_location_year,
    dish_location,
];

pub(crate) const TIER_C: &[Template] = &[care_for_the_menu, year_menu_for, location_year];

fn bargain(ctx: &CaptionContext) -> Option<String> {
    Some(format!(
        "Only {}{} for {} at {}? Bargain!",
        ctx.currency_symbol?,
        ctx.price?,
        ctx.dish?,
        ctx.location?
    ))
}

fn in_year_only(ctx: &CaptionContext) -> Option<String> {
    Some(format!(
        "In {}, {} for only {}{} at {}",
        ctx.year?,
        ctx.dish?,
        ctx.currency_symbol?,
        ctx.price?,
        ctx.location?
    ))
}

fn dish_price_line(ctx: &CaptionContext) -> Option<String> {
    Some(format!(
        "{}, {}{}, {} ({})",
        ctx.dish?,
        ctx.currency_symbol?,
        ctx.price?,
        ctx.location?,
        ctx.year?
    ))
}

fn welcome_to_year(ctx: &CaptionContext) -> Option<String> {
    Some(format!(
        "Welcome to {}! Why not enjoy some {} at {}?",
        ctx.year?,
        ctx.dish?,
        ctx.location?
    ))
}

fn why_not_enjoy(ctx: &CaptionContext) -> Option<String> {
    Some(format!(
        "Why not enjoy some {} at {}?",
        ctx.dish?,
        ctx.location?
    ))
}

fn may_i_recommend(ctx: &CaptionContext) -> Option<String> {
    Some(format!(
        "Welcome to {}, may I recommend the {}?",
        ctx.location?,
        ctx.dish?
    ))
}

fn dish_location_year(ctx: &CaptionContext) -> Option<String> {
    Some(format!("{}, {} ({})", ctx.dish?, ctx.location?, ctx.year?))
}

fn dish_location(ctx: &CaptionContext) -> Option<String> {
    Some(format!("{}, {}", ctx.dish?, ctx.location?))
}

fn care_for_the_menu(ctx: &CaptionContext) -> Option<String> {
    Some(format!(
        "Welcome to {}, would you care for the menu?",
        ctx.location?
    ))
}

fn year_menu_for(ctx: &CaptionContext) -> Option<String> {
    Some(format!("{} menu for {}", ctx.year?, ctx.location?))
}

fn location_year(ctx: &CaptionContext) -> Option<String> {
    Some(format!("{} ({})", ctx.location?, ctx.year?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_context() -> CaptionContext<'static> {
        CaptionContext {
            location: Some("Delmonico's"),
            year: Some("1899"),
            currency_symbol: Some("$"),
            dish: Some("Oysters"),
            price: Some("0.50"),
            homepage: "http://menus.nypl.org/menus/42",
        }
    }

    #[test]
    fn test_tier_a_renders_with_full_context() {
        let ctx = full_context();
        assert_eq!(
            TIER_A[0](&ctx).unwrap(),
            "Only $0.50 for Oysters at Delmonico's? Bargain!"
        );
        assert_eq!(
            TIER_A[1](&ctx).unwrap(),
            "In 1899, Oysters for only $0.50 at Delmonico's"
        );
        assert_eq!(
            TIER_A[2](&ctx).unwrap(),
            "Oysters, $0.50, Delmonico's (1899)"
        );
    }

    #[test]
    fn test_tier_a_refuses_without_price() {
        let ctx = CaptionContext {
            price: None,
            ..full_context()
        };
        for template in TIER_A {
            assert!(template(&ctx).is_none());
        }
    }

    #[test]
    fn test_tier_b_renders_with_full_context() {
        let ctx = full_context();
        assert_eq!(
            TIER_B[0](&ctx).unwrap(),
            "Welcome to 1899! Why not enjoy some Oysters at Delmonico's?"
        );
        assert_eq!(
            TIER_B[1](&ctx).unwrap(),
            "Why not enjoy some Oysters at Delmonico's?"
        );
        assert_eq!(
            TIER_B[2](&ctx).unwrap(),
            "Welcome to Delmonico's, may I recommend the Oysters?"
        );
        assert_eq!(TIER_B[3](&ctx).unwrap(), "Oysters, Delmonico's (1899)");
        assert_eq!(TIER_B[4](&ctx).unwrap(), "Oysters, Delmonico's");
    }

    #[test]
    fn test_tier_b_yearless_templates_survive_missing_year() {
        let ctx = CaptionContext {
            year: None,
            ..full_context()
        };
        assert!(TIER_B[0](&ctx).is_none());
        assert!(TIER_B[1](&ctx).is_some());
        assert!(TIER_B[2](&ctx).is_some());
        assert!(TIER_B[3](&ctx).is_none());
        assert!(TIER_B[4](&ctx).is_some());
    }

    #[test]
    fn test_tier_c_renders_with_full_context() {
        let ctx = full_context();
        assert_eq!(
            TIER_C[0](&ctx).unwrap(),
            "Welcome to Delmonico's, would you care for the menu?"
        );
        assert_eq!(TIER_C[1](&ctx).unwrap(), "1899 menu for Delmonico's");
        assert_eq!(TIER_C[2](&ctx).unwrap(), "Delmonico's (1899)");
    }

    #[test]
    fn test_tier_c_refuses_without_location() {
        let ctx = CaptionContext {
            location: None,
            ..full_context()
        };
        for template in TIER_C {
            assert!(template(&ctx).is_none());
        }
    }
}
