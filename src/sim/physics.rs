//! Vector and gravity helpers
//!
//! Pure functions over the capability traits below. Nothing here owns state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// Anything with a position in the field
pub trait Positioned {
    fn pos(&self) -> Vec2;
}

/// Anything the star can pull on
pub trait MassBearing: Positioned {
    fn mass(&self) -> f32;

    /// Add a velocity delta (gravity, thrust)
    fn accelerate(&mut self, dv: Vec2);
}

/// A fixed attractor
pub trait GravitySource: Positioned {
    /// Per-tick pull on a unit mass
    fn gravity(&self) -> f32;
}

impl Positioned for Vec2 {
    fn pos(&self) -> Vec2 {
        *self
    }
}

/// Euclidean distance between two positioned entities
#[inline]
pub fn distance(a: &impl Positioned, b: &impl Positioned) -> f32 {
    a.pos().distance(b.pos())
}

/// Heading (radians) from `from` towards `to`
#[inline]
pub fn angle_to(from: &impl Positioned, to: &impl Positioned) -> f32 {
    let d = to.pos() - from.pos();
    d.y.atan2(d.x)
}

/// Velocity delta a gravity source imparts on `obj` for one tick.
///
/// Magnitude is `gravity * mass`, independent of distance. Direction points
/// from the object to the source.
pub fn gravitational_force(source: &impl GravitySource, obj: &impl MassBearing) -> Vec2 {
    let force = source.gravity() * obj.mass();
    polar_to_cartesian(force, angle_to(obj, source))
}

/// The rectangular play field. Coordinates wrap at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a position that left the field back onto the opposite edge.
    ///
    /// Leaving past an edge snaps to exactly 0 or to the far edge rather than
    /// carrying the overshoot, so results always lie in `[0, width] x [0, height]`.
    pub fn wrap(&self, mut pos: Vec2) -> Vec2 {
        if pos.x > self.width {
            pos.x = 0.0;
        }
        if pos.x < 0.0 {
            pos.x = self.width;
        }
        if pos.y > self.height {
            pos.y = 0.0;
        }
        if pos.y < 0.0 {
            pos.y = self.height;
        }
        pos
    }

    /// True if `pos` is inside the field grown by `margin` on every side
    pub fn contains(&self, pos: Vec2, margin: f32) -> bool {
        pos.x >= -margin
            && pos.y >= -margin
            && pos.x <= self.width + margin
            && pos.y <= self.height + margin
    }
}

impl Default for Field {
    fn default() -> Self {
        use crate::consts::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}
