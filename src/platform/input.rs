//! Keyboard and gamepad adapters
//!
//! Devices push [`Command`]s into [`Controls`]; the frame driver drains them
//! into a [`TickInput`] once per tick. A missing gamepad simply produces
//! nothing.

use crate::consts::KEYBOARD_THRUST_MULTIPLIER;
use crate::sim::{Command, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
}

impl Key {
    /// Map a DOM-style key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " | "Space" => Some(Key::Space),
            _ => None,
        }
    }

    /// Command for a key press. Any listened key restarts a finished game.
    pub fn command(self, game_over: bool) -> Option<Command> {
        if game_over {
            return Some(Command::ResetIfGameOver);
        }
        match self {
            Key::Up => Some(Command::Thrust(KEYBOARD_THRUST_MULTIPLIER)),
            Key::Left => Some(Command::RotateLeft),
            Key::Right => Some(Command::RotateRight),
            Key::Space => Some(Command::Fire),
            Key::Down => None,
        }
    }
}

/// One polled frame of gamepad state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GamepadFrame {
    /// Rotation axis, nominally in [-1, 1]
    pub rotate_axis: f32,
    /// Thrust button held
    pub thrust: bool,
    /// Fire button held
    pub fire: bool,
    /// Any other button held
    pub other: bool,
}

impl GamepadFrame {
    pub fn any_pressed(&self) -> bool {
        self.thrust || self.fire || self.other
    }
}

/// Gamepad hot-plug notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEvent {
    Connected,
    Disconnected,
}

/// Tracks connection and the fire button's previous state
#[derive(Debug, Clone, Default)]
pub struct Gamepad {
    connected: bool,
    fire_was_pressed: bool,
}

impl Gamepad {
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Returns the event only when the state actually changed
    pub fn connect(&mut self) -> Option<ConnectionEvent> {
        if self.connected {
            return None;
        }
        self.connected = true;
        self.fire_was_pressed = false;
        log::info!("Gamepad connected");
        Some(ConnectionEvent::Connected)
    }

    pub fn disconnect(&mut self) -> Option<ConnectionEvent> {
        if !self.connected {
            return None;
        }
        self.connected = false;
        self.fire_was_pressed = false;
        log::info!("Gamepad disconnected");
        Some(ConnectionEvent::Disconnected)
    }

    /// Commands for this frame. `None` (device vanished) or a disconnected
    /// pad yields nothing.
    pub fn poll(&mut self, frame: Option<GamepadFrame>, game_over: bool) -> Vec<Command> {
        let Some(frame) = frame.filter(|_| self.connected) else {
            return Vec::new();
        };

        let fire_edge = frame.fire && !self.fire_was_pressed;
        self.fire_was_pressed = frame.fire;

        if game_over {
            return if frame.any_pressed() {
                vec![Command::ResetIfGameOver]
            } else {
                Vec::new()
            };
        }

        let mut commands = Vec::new();
        if frame.thrust {
            commands.push(Command::Thrust(1.0));
        }
        if frame.rotate_axis != 0.0 {
            commands.push(Command::RotateAxis(frame.rotate_axis));
        }
        if fire_edge {
            commands.push(Command::Fire);
        }
        commands
    }
}

/// Pending commands from every device, drained once per tick
#[derive(Debug, Clone, Default)]
pub struct Controls {
    pending: Vec<Command>,
    gamepad: Gamepad,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key, game_over: bool) {
        if let Some(command) = key.command(game_over) {
            self.pending.push(command);
        }
    }

    pub fn on_gamepad_connected(&mut self) -> Option<ConnectionEvent> {
        self.gamepad.connect()
    }

    pub fn on_gamepad_disconnected(&mut self) -> Option<ConnectionEvent> {
        self.gamepad.disconnect()
    }

    /// For the "gamepad connected" HUD indicator
    pub fn gamepad_connected(&self) -> bool {
        self.gamepad.is_connected()
    }

    pub fn poll_gamepad(&mut self, frame: Option<GamepadFrame>, game_over: bool) {
        let commands = self.gamepad.poll(frame, game_over);
        self.pending.extend(commands);
    }

    /// Queue a command directly (scripted drivers, tests)
    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Everything queued since the last call
    pub fn take_input(&mut self) -> TickInput {
        TickInput::new(std::mem::take(&mut self.pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_keyboard_commands() {
        assert_eq!(Key::Up.command(false), Some(Command::Thrust(5.0)));
        assert_eq!(Key::Space.command(false), Some(Command::Fire));
        assert_eq!(Key::Down.command(false), None);
        // While game over every listened key resets, even Down
        assert_eq!(Key::Down.command(true), Some(Command::ResetIfGameOver));
        assert_eq!(Key::Space.command(true), Some(Command::ResetIfGameOver));
    }

    #[test]
    fn test_fire_triggers_on_rising_edge_only() {
        let mut pad = Gamepad::default();
        pad.connect();
        let held = GamepadFrame {
            fire: true,
            ..Default::default()
        };

        assert_eq!(pad.poll(Some(held), false), vec![Command::Fire]);
        assert!(pad.poll(Some(held), false).is_empty());
        assert!(pad.poll(Some(GamepadFrame::default()), false).is_empty());
        assert_eq!(pad.poll(Some(held), false), vec![Command::Fire]);
    }

    #[test]
    fn test_thrust_and_axis() {
        let mut pad = Gamepad::default();
        pad.connect();
        let frame = GamepadFrame {
            rotate_axis: -0.5,
            thrust: true,
            ..Default::default()
        };
        assert_eq!(
            pad.poll(Some(frame), false),
            vec![Command::Thrust(1.0), Command::RotateAxis(-0.5)]
        );
    }

    #[test]
    fn test_disconnected_pad_is_silent() {
        let mut pad = Gamepad::default();
        let frame = GamepadFrame {
            thrust: true,
            fire: true,
            ..Default::default()
        };
        assert!(pad.poll(Some(frame), false).is_empty());

        assert_eq!(pad.connect(), Some(ConnectionEvent::Connected));
        assert_eq!(pad.connect(), None);
        assert!(pad.poll(None, false).is_empty());

        assert_eq!(pad.disconnect(), Some(ConnectionEvent::Disconnected));
        assert!(pad.poll(Some(frame), false).is_empty());
    }

    #[test]
    fn test_any_button_resets_when_game_over() {
        let mut pad = Gamepad::default();
        pad.connect();
        let frame = GamepadFrame {
            other: true,
            ..Default::default()
        };
        assert_eq!(
            pad.poll(Some(frame), true),
            vec![Command::ResetIfGameOver]
        );
        assert!(pad.poll(Some(GamepadFrame::default()), true).is_empty());
    }

    #[test]
    fn test_controls_merge_devices() {
        let mut controls = Controls::new();
        assert!(!controls.gamepad_connected());
        assert_eq!(
            controls.on_gamepad_connected(),
            Some(ConnectionEvent::Connected)
        );
        assert!(controls.gamepad_connected());

        controls.key_down(Key::Left, false);
        controls.poll_gamepad(
            Some(GamepadFrame {
                thrust: true,
                ..Default::default()
            }),
            false,
        );

        let input = controls.take_input();
        assert_eq!(
            input.commands,
            vec![Command::RotateLeft, Command::Thrust(1.0)]
        );
        assert!(controls.take_input().commands.is_empty());

        assert_eq!(
            controls.on_gamepad_disconnected(),
            Some(ConnectionEvent::Disconnected)
        );
        assert!(!controls.gamepad_connected());
    }
}
