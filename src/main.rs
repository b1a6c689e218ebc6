//! Orbit Duel headless driver
//!
//! Plays as the frame scheduler: one tick per loop iteration, with an
//! autopilot standing in for the keyboard. Prints the final snapshot as JSON.
//!
//! Usage: `orbit-duel [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use orbit_duel::Settings;
    use orbit_duel::platform::{Controls, Key};
    use orbit_duel::sim::{GameEvent, GameState, tick};

    env_logger::init();
    log::info!("Orbit Duel (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::error!("{e}; falling back to default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(time_seed);
    let mut state = GameState::new(seed, settings.field());
    state.max_projectiles = settings.max_projectiles;
    let mut controls = Controls::new();
    let mut games_played = 1u32;

    for _ in 0..settings.demo_frames {
        // No gamepad on the headless driver; polling still runs every frame
        controls.poll_gamepad(None, state.is_game_over());

        if state.is_game_over() {
            controls.key_down(Key::Space, true);
            games_played += 1;
        } else if settings.autopilot {
            for command in autopilot::commands(&state) {
                controls.push(command);
            }
        }

        tick(&mut state, &controls.take_input());

        for event in &state.events {
            match event {
                GameEvent::LifeLost { remaining } => {
                    log::info!("Ship destroyed, {} lives left", remaining)
                }
                GameEvent::EnemyDestroyed { by } => {
                    log::info!("Enemy destroyed by {:?}, score {}", by, state.score)
                }
                _ => {}
            }
        }
    }

    log::info!(
        "Finished after {} ticks over {} game(s)",
        state.time_ticks,
        games_played
    );
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the deliverable on wasm
}

#[cfg(not(target_arch = "wasm32"))]
fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Demo AI: keep clear of the star, turn to face the enemy, shoot when lined up
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use orbit_duel::consts::KEYBOARD_ROTATE_STEP;
    use orbit_duel::normalize_angle;
    use orbit_duel::sim::{Command, GameState, angle_to, distance};

    const DANGER_DISTANCE: f32 = 120.0;
    const CRUISE_SPEED: f32 = 1.0;
    const FIRE_INTERVAL: u64 = 15;
    const AIM_TOLERANCE: f32 = 0.2;

    pub fn commands(state: &GameState) -> Vec<Command> {
        let ship = &state.ship;
        let mut commands = Vec::new();

        let escaping = distance(ship, &state.star) < DANGER_DISTANCE;
        let desired = if escaping {
            angle_to(&state.star, ship)
        } else {
            angle_to(ship, &state.enemy)
        };

        let diff = normalize_angle(desired - ship.angle);
        if diff > KEYBOARD_ROTATE_STEP / 2.0 {
            commands.push(Command::RotateRight);
        } else if diff < -KEYBOARD_ROTATE_STEP / 2.0 {
            commands.push(Command::RotateLeft);
        }

        if escaping && diff.abs() < AIM_TOLERANCE {
            commands.push(Command::Thrust(1.0));
        } else if !escaping && ship.vel.length() < CRUISE_SPEED && diff.abs() > AIM_TOLERANCE {
            // Keep some orbital speed so gravity does not reel us in
            commands.push(Command::Thrust(0.5));
        }

        if !escaping && diff.abs() < AIM_TOLERANCE && state.time_ticks % FIRE_INTERVAL == 0 {
            commands.push(Command::Fire);
        }
        commands
    }
}
