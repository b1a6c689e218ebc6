//! Orbit Duel - A gravity-well arcade duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, respawns, game state)
//! - `platform`: Keyboard/gamepad adapters that turn device input into commands
//! - `settings`: Field size, seed and driver configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Default field dimensions (matches an 800x600 canvas)
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

    /// Session
    pub const STARTING_LIVES: u8 = 3;

    /// Player ship
    pub const SHIP_MASS: f32 = 1.0;
    pub const SHIP_FRICTION: f32 = 0.99;
    pub const SHIP_THRUST_POWER: f32 = 0.1;
    pub const SHIP_ROTATION_SPEED: f32 = 1.0;

    /// Keyboard: one key press rotates 15 degrees and thrusts five-fold
    pub const KEYBOARD_ROTATE_STEP: f32 = 15.0 * PI / 180.0;
    pub const KEYBOARD_THRUST_MULTIPLIER: f32 = 5.0;

    /// Gamepad: axis value is scaled by this, ignored inside the dead zone
    pub const GAMEPAD_ROTATE_SPEED: f32 = 0.05;
    pub const GAMEPAD_DEADZONE: f32 = 0.1;

    /// Upper bound for a single thrust command multiplier
    pub const MAX_THRUST_MULTIPLIER: f32 = KEYBOARD_THRUST_MULTIPLIER;

    /// Enemy ship
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_MASS: f32 = 1.0;
    /// Seek mode toggles every 20 seconds at 60 fps
    pub const ENEMY_SEEK_TOGGLE_TICKS: u32 = 20 * 60;

    /// Star (gravity well)
    pub const STAR_RADIUS: f32 = 20.0;
    pub const STAR_GRAVITY: f32 = 0.005;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const MAX_PROJECTILES: usize = 64;

    /// Approximate hull radius of either ship for collision tests
    pub const SHIP_HIT_RADIUS: f32 = 20.0;
    /// Ship-vs-ship contact distance (sum of both hull radii)
    pub const SHIP_CONTACT_DISTANCE: f32 = 40.0;

    /// Explosion marker radius (render hint)
    pub const EXPLOSION_RADIUS: f32 = 30.0;

    /// Respawn exclusion zones
    pub const RESPAWN_MIN_STAR_DISTANCE: f32 = 100.0;
    pub const RESPAWN_MIN_OTHER_DISTANCE: f32 = 150.0;
    /// Rejection sampling budget before falling back to fixed candidates
    pub const MAX_SPAWN_ATTEMPTS: u32 = 1000;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) - (-0.5 * PI)).abs() < 1e-5);
        assert_eq!(normalize_angle(0.25), 0.25);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let v = polar_to_cartesian(5.0, PI / 2.0);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 5.0).abs() < 1e-5);
    }
}
