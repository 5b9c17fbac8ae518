//! Dish selection: shuffle a page's dish list and take the first usable one.

use crate::caption::rng::Roller;
use crate::model::Dish;

/// Pick a dish (and its price, if transcribed) from a page.
///
/// Shuffles uniformly, then scans: empty names and names longer than the
/// platform's maximum message length are skipped outright; the budget check
/// against link and attachment reserve happens later in the caption loop.
/// No dish surviving is a valid `(None, None)` outcome.
pub fn pick_dish(
    dishes: &[Dish],
    max_length: usize,
    roller: &mut dyn Roller,
) -> (Option<String>, Option<String>) {
    let mut order: Vec<&Dish> = dishes.iter().collect();
    shuffle(&mut order, roller);

    for dish in order {
        let name = dish.name.trim();
        if name.is_empty() || name.chars().count() > max_length {
            continue;
        }
        return (Some(name.to_string()), dish.price.clone());
    }

    (None, None)
}

// Fisher-Yates over the Roller seam, so tests can script the permutation
// with the same source the caption loop uses.
fn shuffle<T>(items: &mut [T], roller: &mut dyn Roller) {
    for i in (1..items.len()).rev() {
        let j = roller.roll((i + 1) as u32) as usize;
        items.swap(i, j);
    }
}
