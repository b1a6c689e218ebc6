//! Collision detection
//!
//! Every test is a plain radius-sum distance check. Ships are treated as
//! circles of `SHIP_HIT_RADIUS`.

use super::physics::{Positioned, distance};
use super::state::{Projectile, Star};
use crate::consts::{SHIP_CONTACT_DISTANCE, SHIP_HIT_RADIUS};

/// The mutually exclusive ship/star outcomes, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Player flew into the star
    ShipStar,
    /// Enemy flew into the star
    EnemyStar,
    /// Player and enemy rammed each other
    ShipEnemy,
}

/// A ship-sized body touching the star
pub fn star_collision(obj: &impl Positioned, star: &Star) -> bool {
    distance(obj, star) < star.radius + SHIP_HIT_RADIUS
}

/// Two ship-sized bodies touching
pub fn ship_collision(a: &impl Positioned, b: &impl Positioned) -> bool {
    distance(a, b) < SHIP_CONTACT_DISTANCE
}

/// A projectile touching a ship-sized body
pub fn projectile_collision(projectile: &Projectile, target: &impl Positioned) -> bool {
    distance(projectile, target) < projectile.radius + SHIP_HIT_RADIUS
}

/// First ship/star collision that applies this tick, if any.
///
/// Only one of these is ever reported even when several overlap: ship-star
/// wins over enemy-star, which wins over ship-enemy.
pub fn detect(ship: &impl Positioned, enemy: &impl Positioned, star: &Star) -> Option<Collision> {
    if star_collision(ship, star) {
        Some(Collision::ShipStar)
    } else if star_collision(enemy, star) {
        Some(Collision::EnemyStar)
    } else if ship_collision(ship, enemy) {
        Some(Collision::ShipEnemy)
    } else {
        None
    }
}

/// Index of the first projectile (in firing order) touching `target`
pub fn first_projectile_hit(projectiles: &[Projectile], target: &impl Positioned) -> Option<usize> {
    projectiles
        .iter()
        .position(|p| projectile_collision(p, target))
}
