//! Ghost Racer - A top-down scrolling road arcade game
//!
//! Core modules:
//! - `sim`: Turn-based simulation (actors, overlap, AI, spawning, world tick)
//! - `audio`: Sound cues the simulation asks the shell to play
//! - `settings`: Data-driven run configuration

pub mod audio;
pub mod settings;
pub mod sim;

pub use audio::SoundEffect;
pub use settings::{Difficulty, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions (y grows upward, origin bottom-left)
    pub const VIEW_WIDTH: f32 = 256.0;
    pub const VIEW_HEIGHT: f32 = 256.0;

    /// Sprite cell dimensions
    pub const SPRITE_WIDTH: f32 = VIEW_WIDTH / 16.0;
    pub const SPRITE_HEIGHT: f32 = VIEW_HEIGHT / 16.0;

    /// Road geometry
    pub const ROAD_CENTER: f32 = VIEW_WIDTH / 2.0;
    pub const ROAD_WIDTH: f32 = VIEW_WIDTH / 2.0;
    pub const ROAD_LEFT_EDGE: f32 = ROAD_CENTER - ROAD_WIDTH / 2.0;
    pub const ROAD_RIGHT_EDGE: f32 = ROAD_CENTER + ROAD_WIDTH / 2.0;
    pub const LEFT_DIVIDER_X: f32 = ROAD_LEFT_EDGE + ROAD_WIDTH / 3.0;
    pub const RIGHT_DIVIDER_X: f32 = ROAD_RIGHT_EDGE - ROAD_WIDTH / 3.0;
    pub const NUM_LANES: usize = 3;

    /// Collision radius per unit of actor size
    pub const RADIUS_PER_SIZE: f32 = 8.0;

    /// Heading that points straight up the road (degrees)
    pub const HEADING_UP: f32 = 90.0;

    /// Scenery, pickups and hazards all drift at this own vertical speed
    pub const SCENERY_VERT_SPEED: f32 = -4.0;
}

/// Normalize a heading to [0, 360) degrees
#[inline]
pub fn normalize_degrees(mut heading: f32) -> f32 {
    while heading >= 360.0 {
        heading -= 360.0;
    }
    while heading < 0.0 {
        heading += 360.0;
    }
    heading
}

/// Unit vector for a heading in degrees (0 = right, 90 = up)
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    let theta = heading.to_radians();
    Vec2::new(theta.cos(), theta.sin())
}
