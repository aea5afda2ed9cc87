//! The Ghost Racer: the single player-controlled vehicle
//!
//! The racer never moves vertically. It sets the scroll speed for everything
//! else and only slides sideways along its heading.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, HitPoints};
use super::overlap::Bounds;
use super::random::RandomSource;
use super::shell::{Key, Shell};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::heading_vector;

pub const RACER_HP: i32 = 100;
pub const RACER_START_SPRAYS: u32 = 10;
pub const RACER_START: Vec2 = Vec2::new(128.0, 32.0);
pub const RACER_SIZE: f32 = 4.0;

/// Damage for scraping a road edge
pub const BORDER_DAMAGE: i32 = 10;
/// Heading after bouncing off the left edge
pub const REBOUND_FROM_LEFT: f32 = 82.0;
/// Heading after bouncing off the right edge
pub const REBOUND_FROM_RIGHT: f32 = 98.0;

pub const TURN_STEP: f32 = 8.0;
pub const LEFT_HEADING_LIMIT: f32 = 114.0;
pub const RIGHT_HEADING_LIMIT: f32 = 66.0;

pub const MAX_SPEED: f32 = 5.0;
/// Negative: the racer can drift backward
pub const MIN_SPEED: f32 = -1.0;
pub const SPEED_STEP: f32 = 1.0;

/// Sideways travel per tick at full deflection
pub const FORWARD_STEP: f32 = 4.0;

/// Oil slick deflection band (degrees, sign drawn separately)
pub const SPIN_MIN: i32 = 5;
pub const SPIN_MAX: i32 = 20;
/// Headings the racer can be spun into
pub const SPIN_HEADING_MIN: f32 = 60.0;
pub const SPIN_HEADING_MAX: f32 = 120.0;

/// What happened to the racer on its most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RacerState {
    /// Normal control
    Driving,
    /// Bounced off a road edge; input ignored this tick
    Recoiling,
    /// Knocked sideways by an oil slick this tick
    Spinning,
    /// Terminal
    Dead,
}

/// The player's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhostRacer {
    pub pos: Vec2,
    /// Degrees, 90 = up the road
    pub heading: f32,
    pub size: f32,
    /// Forward speed; the world scrolls by this much per tick
    pub vert_speed: f32,
    pub hp: HitPoints,
    /// Holy water charges
    pub sprays: u32,
    pub alive: bool,
    pub state: RacerState,
}

impl Default for GhostRacer {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostRacer {
    pub fn new() -> Self {
        Self {
            pos: RACER_START,
            heading: HEADING_UP,
            size: RACER_SIZE,
            vert_speed: 0.0,
            hp: HitPoints::new(RACER_HP),
            sprays: RACER_START_SPRAYS,
            alive: true,
            state: RacerState::Driving,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size)
    }

    pub fn hit_points(&self) -> i32 {
        self.hp.current
    }

    pub fn take_damage(&mut self, amount: i32) {
        if self.hp.take_damage(amount) {
            self.alive = false;
            self.state = RacerState::Dead;
        }
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp.heal(amount);
    }

    pub fn add_sprays(&mut self, amount: u32) {
        self.sprays = self.sprays.saturating_add(amount);
    }

    /// Clear last tick's transient state
    pub fn begin_tick(&mut self) {
        if self.alive {
            self.state = RacerState::Driving;
        }
    }

    /// Oil slick reaction: random kick, clamped so the racer never faces
    /// backward
    pub fn spin_out(&mut self, rng: &mut dyn RandomSource) {
        let magnitude = rng.uniform_int(SPIN_MIN, SPIN_MAX) as f32;
        let delta = if rng.uniform_int(0, 1) == 0 {
            -magnitude
        } else {
            magnitude
        };
        self.heading = (self.heading + delta).clamp(SPIN_HEADING_MIN, SPIN_HEADING_MAX);
        if self.alive {
            self.state = RacerState::Spinning;
        }
    }

    /// Run one tick. Returns a freshly fired projectile for the world to
    /// adopt, if any.
    pub fn act(&mut self, shell: &mut dyn Shell) -> Option<Actor> {
        if !self.alive {
            self.state = RacerState::Dead;
            return None;
        }

        let mut fired = None;
        if self.pos.x <= ROAD_LEFT_EDGE && self.heading > HEADING_UP {
            self.recoil(REBOUND_FROM_LEFT, shell);
        } else if self.pos.x >= ROAD_RIGHT_EDGE && self.heading < HEADING_UP {
            self.recoil(REBOUND_FROM_RIGHT, shell);
        } else if let Some(key) = shell.poll_key() {
            fired = self.apply_key(key, shell);
        }

        self.drive();
        fired
    }

    fn recoil(&mut self, rebound: f32, shell: &mut dyn Shell) {
        self.take_damage(BORDER_DAMAGE);
        self.heading = rebound;
        shell.play_sound(SoundEffect::VehicleCrash);
        if self.alive {
            self.state = RacerState::Recoiling;
        }
    }

    fn apply_key(&mut self, key: Key, shell: &mut dyn Shell) -> Option<Actor> {
        match key {
            Key::Left => self.heading = (self.heading + TURN_STEP).min(LEFT_HEADING_LIMIT),
            Key::Right => self.heading = (self.heading - TURN_STEP).max(RIGHT_HEADING_LIMIT),
            Key::Up => self.vert_speed = (self.vert_speed + SPEED_STEP).min(MAX_SPEED),
            Key::Down => self.vert_speed = (self.vert_speed - SPEED_STEP).max(MIN_SPEED),
            Key::Fire => return self.fire(shell),
        }
        None
    }

    fn fire(&mut self, shell: &mut dyn Shell) -> Option<Actor> {
        if self.sprays == 0 {
            return None;
        }
        self.sprays -= 1;
        shell.play_sound(SoundEffect::PlayerSpray);
        let muzzle = self.pos + heading_vector(self.heading) * SPRITE_HEIGHT;
        Some(Actor::holy_water(muzzle, self.heading))
    }

    fn drive(&mut self) {
        self.pos.x += self.heading.to_radians().cos() * FORWARD_STEP;
    }
}
