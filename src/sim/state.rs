//! Game state and core simulation types
//!
//! Entities, session bookkeeping and the read-only snapshot handed to renderers.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::physics::{Field, GravitySource, MassBearing, Positioned, angle_to};
use super::spawn;
use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Out of lives; frozen until a reset command
    GameOver,
}

/// How the enemy was taken out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKill {
    /// Flew into the star
    Star,
    /// Shot down by a projectile
    Projectile,
}

/// Things that happened during a tick, for renderers and audio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Draw an explosion marker here
    Explosion { pos: Vec2 },
    /// Player ship was destroyed
    LifeLost { remaining: u8 },
    /// Enemy was destroyed and a point scored
    EnemyDestroyed { by: EnemyKill },
    /// Last life lost
    GameOver { score: u64 },
    /// Session restarted from game over
    Reset,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing (radians)
    pub angle: f32,
    pub rotation_speed: f32,
    pub thrust_power: f32,
    pub friction: f32,
    pub mass: f32,
}

impl Ship {
    /// Fresh ship in the upper-left of the field, facing +x, at rest
    pub fn new(field: &Field) -> Self {
        Self {
            pos: Vec2::new(field.width / 8.0, field.height / 8.0),
            vel: Vec2::ZERO,
            angle: 0.0,
            rotation_speed: SHIP_ROTATION_SPEED,
            thrust_power: SHIP_THRUST_POWER,
            friction: SHIP_FRICTION,
            mass: SHIP_MASS,
        }
    }

    /// Turn by `direction` (signed) scaled by the ship's rotation speed
    pub fn rotate(&mut self, direction: f32) {
        self.angle = normalize_angle(self.angle + self.rotation_speed * direction);
    }

    /// Accelerate along the current facing. Calls within a tick accumulate.
    pub fn thrust(&mut self, multiplier: f32) {
        self.vel += polar_to_cartesian(self.thrust_power * multiplier, self.angle);
    }

    /// Apply friction, integrate position, wrap at the field edges
    pub fn update(&mut self, field: &Field) {
        self.vel *= self.friction;
        self.pos = field.wrap(self.pos + self.vel);
    }
}

impl Positioned for Ship {
    fn pos(&self) -> Vec2 {
        self.pos
    }
}

impl MassBearing for Ship {
    fn mass(&self) -> f32 {
        self.mass
    }

    fn accelerate(&mut self, dv: Vec2) {
        self.vel += dv;
    }
}

/// The roaming hunter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Heading (radians)
    pub angle: f32,
    pub speed: f32,
    pub mass: f32,
    /// Heading snaps towards the player every tick while set
    pub seeks_player: bool,
    /// Ticks since `seeks_player` last toggled
    pub seek_timer: u32,
}

impl Enemy {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            angle,
            speed: ENEMY_SPEED,
            mass: ENEMY_MASS,
            seeks_player: false,
            seek_timer: 0,
        }
    }

    /// Advance the enemy AI one tick. `target` is the player ship's position.
    pub fn update(&mut self, target: Vec2, field: &Field) {
        self.seek_timer += 1;
        if self.seek_timer >= ENEMY_SEEK_TOGGLE_TICKS {
            self.seeks_player = !self.seeks_player;
            self.seek_timer = 0;
        }

        if self.seeks_player {
            self.angle = angle_to(&*self, &target);
        }

        let step = polar_to_cartesian(self.speed, self.angle);
        self.pos = field.wrap(self.pos + step);
    }
}

impl Positioned for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }
}

impl MassBearing for Enemy {
    fn mass(&self) -> f32 {
        self.mass
    }

    /// The enemy flies at a fixed speed along its heading; the pull is discarded
    fn accelerate(&mut self, _dv: Vec2) {}
}

/// The gravity well at the center of the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub gravity: f32,
}

impl Star {
    pub fn new(field: &Field) -> Self {
        Self {
            pos: field.center(),
            radius: STAR_RADIUS,
            gravity: STAR_GRAVITY,
        }
    }
}

impl Positioned for Star {
    fn pos(&self) -> Vec2 {
        self.pos
    }
}

impl GravitySource for Star {
    fn gravity(&self) -> f32 {
        self.gravity
    }
}

/// A shot fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub radius: f32,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, angle: f32) -> Self {
        Self {
            id,
            pos,
            angle,
            speed: PROJECTILE_SPEED,
            radius: PROJECTILE_RADIUS,
        }
    }

    /// Straight-line motion, no wrap, no friction
    pub fn update(&mut self) {
        self.pos += polar_to_cartesian(self.speed, self.angle);
    }
}

impl Positioned for Projectile {
    fn pos(&self) -> Vec2 {
        self.pos
    }
}

fn unseeded_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state (deterministic for a given seed and command stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG, advanced by every respawn and reset
    #[serde(skip, default = "unseeded_rng")]
    rng: Pcg32,
    pub field: Field,
    pub phase: GamePhase,
    /// Player lives
    pub lives: u8,
    /// Score
    pub score: u64,
    /// Simulation tick counter (frozen during game over)
    pub time_ticks: u64,
    pub ship: Ship,
    pub enemy: Enemy,
    pub star: Star,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
    /// Live projectile cap; fire commands beyond it are ignored
    pub max_projectiles: usize,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next projectile ID
    next_id: u32,
}

impl GameState {
    /// Create a new game on `field` with the given seed
    pub fn new(seed: u64, field: Field) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ship = Ship::new(&field);
        let star = Star::new(&field);
        let enemy = Self::spawn_enemy(&mut rng, &field, &star, &ship);

        log::info!(
            "New game: seed {} field {}x{}",
            seed,
            field.width,
            field.height
        );

        Self {
            seed,
            rng,
            field,
            phase: GamePhase::Playing,
            lives: STARTING_LIVES,
            score: 0,
            time_ticks: 0,
            ship,
            enemy,
            star,
            projectiles: Vec::new(),
            max_projectiles: MAX_PROJECTILES,
            events: Vec::new(),
            next_id: 1,
        }
    }

    fn spawn_enemy(rng: &mut Pcg32, field: &Field, star: &Star, ship: &Ship) -> Enemy {
        let pos = spawn::respawn_position(rng, field, star, ship);
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        Enemy::new(pos, angle)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start a fresh session on the same field. The RNG keeps running, so
    /// the new enemy does not repeat the previous session's opening.
    pub fn reset(&mut self) {
        self.ship = Ship::new(&self.field);
        self.star = Star::new(&self.field);
        self.enemy = Self::spawn_enemy(&mut self.rng, &self.field, &self.star, &self.ship);
        self.projectiles.clear();
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Reset);
        log::info!("Game reset");
    }

    /// Allocate a new projectile ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Fire from the ship's nose along its facing. Returns false at the cap.
    pub fn fire(&mut self) -> bool {
        if self.projectiles.len() >= self.max_projectiles {
            log::debug!("Fire ignored: {} projectiles live", self.projectiles.len());
            return false;
        }
        let id = self.next_entity_id();
        self.projectiles
            .push(Projectile::new(id, self.ship.pos, self.ship.angle));
        true
    }

    /// Move the player somewhere safe from the star and the enemy
    pub fn respawn_ship(&mut self) {
        self.ship.pos = spawn::respawn_position(&mut self.rng, &self.field, &self.star, &self.enemy);
        log::debug!("Ship respawned at {:?}", self.ship.pos);
    }

    /// Move the enemy somewhere safe from the star and the player
    pub fn respawn_enemy(&mut self) {
        self.enemy.pos = spawn::respawn_position(&mut self.rng, &self.field, &self.star, &self.ship);
        log::debug!("Enemy respawned at {:?}", self.enemy.pos);
    }

    /// Explosion markers recorded this tick
    pub fn explosions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Explosion { pos } => Some(*pos),
            _ => None,
        })
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field: self.field,
            ship: BodyView {
                pos: self.ship.pos,
                angle: self.ship.angle,
            },
            enemy: BodyView {
                pos: self.enemy.pos,
                angle: self.enemy.angle,
            },
            star_pos: self.star.pos,
            star_radius: self.star.radius,
            projectiles: self
                .projectiles
                .iter()
                .map(|p| BodyView {
                    pos: p.pos,
                    angle: p.angle,
                })
                .collect(),
            score: self.score,
            lives: self.lives,
            game_over: self.is_game_over(),
            explosions: self.explosions().collect(),
        }
    }
}

/// Position and facing of something to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyView {
    pub pos: Vec2,
    pub angle: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub field: Field,
    pub ship: BodyView,
    pub enemy: BodyView,
    pub star_pos: Vec2,
    pub star_radius: f32,
    pub projectiles: Vec<BodyView>,
    pub score: u64,
    pub lives: u8,
    pub game_over: bool,
    pub explosions: Vec<Vec2>,
}
