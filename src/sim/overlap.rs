//! Overlap detection between actors
//!
//! Sprites are drawn taller than their silhouette, so the test scales the
//! summed radii differently per axis. Both axes must pass independently,
//! which makes this an axis-scaled box test rather than a circle test.

use glam::Vec2;
use crate::consts::RADIUS_PER_SIZE;

/// Horizontal share of the summed radii that counts as touching
pub const X_SCALE: f32 = 0.25;
/// Vertical share of the summed radii that counts as touching
pub const Y_SCALE: f32 = 0.6;

/// Collision footprint of anything on the road
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub pos: Vec2,
    pub radius: f32,
}

impl Bounds {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            radius: size * RADIUS_PER_SIZE,
        }
    }
}

/// True when two footprints touch
#[inline]
pub fn overlaps(a: Bounds, b: Bounds) -> bool {
    let delta = (a.pos - b.pos).abs();
    let r = a.radius + b.radius;
    delta.x < r * X_SCALE && delta.y < r * Y_SCALE
}
