//! Platform abstraction layer
//!
//! Turns device input into simulation commands:
//! - Keyboard presses (discrete)
//! - Gamepad polling (continuous, hot-pluggable)

pub mod input;

pub use input::{ConnectionEvent, Controls, Gamepad, GamepadFrame, Key};
