//! Frame-driven simulation tick
//!
//! One call to [`tick`] per display refresh. The caller owns pacing; nothing
//! here sleeps or reschedules itself.

use super::collision::{self, Collision};
use super::physics::{MassBearing, gravitational_force};
use super::state::{EnemyKill, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// A player intent, from either input device
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// One keyboard step counter-clockwise
    RotateLeft,
    /// One keyboard step clockwise
    RotateRight,
    /// Analog rotation in [-1, 1]; ignored inside the dead zone
    RotateAxis(f32),
    /// Thrust with the given multiplier
    Thrust(f32),
    Fire,
    /// Restart the session; ignored unless the game is over
    ResetIfGameOver,
}

/// Commands collected since the previous tick, applied in order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

/// Advance the game by one frame.
///
/// Order within a tick: pending commands, gravity, movement, collisions.
/// While the game is over only `ResetIfGameOver` has any effect.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    for &command in &input.commands {
        apply_command(state, command);
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // Gravity
    let pull = gravitational_force(&state.star, &state.ship);
    state.ship.accelerate(pull);
    let pull = gravitational_force(&state.star, &state.enemy);
    state.enemy.accelerate(pull);

    // Movement
    state.ship.update(&state.field);
    let target = state.ship.pos;
    state.enemy.update(target, &state.field);
    for projectile in &mut state.projectiles {
        projectile.update();
    }
    let field = state.field;
    state
        .projectiles
        .retain(|p| field.contains(p.pos, p.radius));

    resolve_collisions(state);
}

fn apply_command(state: &mut GameState, command: Command) {
    if state.phase == GamePhase::GameOver {
        if command == Command::ResetIfGameOver {
            state.reset();
        }
        return;
    }

    match command {
        Command::RotateLeft => state.ship.rotate(-KEYBOARD_ROTATE_STEP),
        Command::RotateRight => state.ship.rotate(KEYBOARD_ROTATE_STEP),
        Command::RotateAxis(value) => {
            if !value.is_finite() {
                log::warn!("Dropping non-finite rotation axis value");
                return;
            }
            let value = value.clamp(-1.0, 1.0);
            if value.abs() > GAMEPAD_DEADZONE {
                state.ship.rotate(value * GAMEPAD_ROTATE_SPEED);
            }
        }
        Command::Thrust(multiplier) => {
            if !multiplier.is_finite() {
                log::warn!("Dropping non-finite thrust multiplier");
                return;
            }
            state
                .ship
                .thrust(multiplier.clamp(0.0, MAX_THRUST_MULTIPLIER));
        }
        Command::Fire => {
            state.fire();
        }
        Command::ResetIfGameOver => {}
    }
}

/// Ship/star/enemy chain first (at most one outcome), then projectiles.
fn resolve_collisions(state: &mut GameState) {
    match collision::detect(&state.ship, &state.enemy, &state.star) {
        Some(Collision::ShipStar) | Some(Collision::ShipEnemy) => ship_destroyed(state),
        Some(Collision::EnemyStar) => enemy_destroyed(state, EnemyKill::Star),
        None => {}
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    // One hit per tick: the enemy moves away as soon as it is struck
    if let Some(idx) = collision::first_projectile_hit(&state.projectiles, &state.enemy) {
        state.projectiles.remove(idx);
        enemy_destroyed(state, EnemyKill::Projectile);
    }
}

fn ship_destroyed(state: &mut GameState) {
    state.events.push(GameEvent::Explosion {
        pos: state.ship.pos,
    });
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        remaining: state.lives,
    });

    if state.lives > 0 {
        state.respawn_ship();
    } else {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("Game over with score {}", state.score);
    }
}

fn enemy_destroyed(state: &mut GameState, by: EnemyKill) {
    state.events.push(GameEvent::Explosion {
        pos: state.enemy.pos,
    });
    state.score += 1;
    state.events.push(GameEvent::EnemyDestroyed { by });
    state.respawn_enemy();
}
