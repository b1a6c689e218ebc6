//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, driven from outside
//! - Seeded RNG only
//! - Stable iteration order (projectiles in firing order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Collision, detect, first_projectile_hit};
pub use physics::{Field, GravitySource, MassBearing, Positioned, angle_to, distance, gravitational_force};
pub use spawn::respawn_position;
pub use state::{
    BodyView, Enemy, EnemyKill, GameEvent, GamePhase, GameState, Projectile, Ship, Snapshot, Star,
};
pub use tick::{Command, TickInput, tick};
