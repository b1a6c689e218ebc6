//! Respawn placement
//!
//! Rejection sampling over the field until a spot is clear of the star and of
//! the other ship. Sampling is bounded; if the budget runs out a fixed set of
//! corner and edge candidates is scored instead.

use glam::Vec2;
use rand::Rng;

use super::physics::{Field, Positioned, distance};
use crate::consts::{MAX_SPAWN_ATTEMPTS, RESPAWN_MIN_OTHER_DISTANCE, RESPAWN_MIN_STAR_DISTANCE};

/// True if `pos` honours both exclusion zones
pub fn is_clear(pos: Vec2, star: &impl Positioned, other: &impl Positioned) -> bool {
    distance(&pos, star) >= RESPAWN_MIN_STAR_DISTANCE
        && distance(&pos, other) >= RESPAWN_MIN_OTHER_DISTANCE
}

/// Pick a position at least `RESPAWN_MIN_STAR_DISTANCE` from `star` and
/// `RESPAWN_MIN_OTHER_DISTANCE` from `other`.
///
/// Draws up to `MAX_SPAWN_ATTEMPTS` uniform samples, then falls back to
/// [`fallback_position`]. On fields too small for the zones the fallback is
/// best effort.
pub fn respawn_position(
    rng: &mut impl Rng,
    field: &Field,
    star: &impl Positioned,
    other: &impl Positioned,
) -> Vec2 {
    if field.width > 0.0 && field.height > 0.0 {
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let pos = Vec2::new(
                rng.random_range(0.0..field.width),
                rng.random_range(0.0..field.height),
            );
            if is_clear(pos, star, other) {
                return pos;
            }
        }
    }

    let pos = fallback_position(field, star, other);
    log::warn!(
        "No clear spawn point after {} samples on {}x{} field, using {:?}",
        MAX_SPAWN_ATTEMPTS,
        field.width,
        field.height,
        pos
    );
    pos
}

/// Deterministic placement: the corner or edge midpoint with the most slack
/// against both exclusion zones (measured as a fraction of each zone).
pub fn fallback_position(field: &Field, star: &impl Positioned, other: &impl Positioned) -> Vec2 {
    let (w, h) = (field.width.max(0.0), field.height.max(0.0));
    let candidates = [
        Vec2::new(0.0, 0.0),
        Vec2::new(w, 0.0),
        Vec2::new(0.0, h),
        Vec2::new(w, h),
        Vec2::new(w / 2.0, 0.0),
        Vec2::new(w / 2.0, h),
        Vec2::new(0.0, h / 2.0),
        Vec2::new(w, h / 2.0),
    ];

    let slack = |p: &Vec2| {
        let s = distance(p, star) / RESPAWN_MIN_STAR_DISTANCE;
        let o = distance(p, other) / RESPAWN_MIN_OTHER_DISTANCE;
        s.min(o)
    };

    let mut best = candidates[0];
    let mut best_slack = slack(&best);
    for candidate in &candidates[1..] {
        let s = slack(candidate);
        if s > best_slack {
            best = *candidate;
            best_slack = s;
        }
    }
    best
}
