//! Motivational tip strings surfaced by the streak bonus

use rand::Rng;

/// Shown while no tip is active
pub const DEFAULT_TIP: &str = "Collect healthy items, avoid junk food, and build habits!";

/// Rotating tips, one chosen uniformly each time a streak bonus fires
pub const TIPS: [&str; 5] = [
    "Drink water regularly — aim for 8 cups.",
    "Take short walks every hour.",
    "Choose whole fruits over juice.",
    "Sleep 7–9 hours for better focus.",
    "Swap a sugary snack for nuts.",
];

/// Pick a tip at random
pub fn pick_tip<R: Rng>(rng: &mut R) -> &'static str {
    TIPS[rng.random_range(0..TIPS.len())]
}
