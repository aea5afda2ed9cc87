//! Procedural spawning
//!
//! Runs once per tick after the reap. Every actor kind gets an independent
//! "1 in N" roll where N shrinks with the level down to a floor. Zombie cabs
//! additionally need a lane with room at the top or bottom of the screen.

use super::actor::Actor;
use super::world::World;
use crate::consts::*;

/// A vertical strip of the road
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lane {
    pub index: usize,
    /// Inclusive
    pub x_min: f32,
    /// Exclusive
    pub x_max: f32,
}

impl Lane {
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.x_min && x < self.x_max
    }

    #[inline]
    pub fn center(&self) -> f32 {
        (self.x_min + self.x_max) / 2.0
    }
}

pub const LANES: [Lane; NUM_LANES] = [
    Lane {
        index: 0,
        x_min: ROAD_LEFT_EDGE,
        x_max: LEFT_DIVIDER_X,
    },
    Lane {
        index: 1,
        x_min: LEFT_DIVIDER_X,
        x_max: RIGHT_DIVIDER_X,
    },
    Lane {
        index: 2,
        x_min: RIGHT_DIVIDER_X,
        x_max: ROAD_RIGHT_EDGE,
    },
];

/// Lane containing `x`, if it is on the road
pub fn lane_of(x: f32) -> Option<Lane> {
    LANES.iter().copied().find(|lane| lane.contains(x))
}

/// Screen edge a cab can enter from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneEdge {
    /// y = 0; the cab enters faster than the racer and overtakes
    Bottom,
    /// y = VIEW_HEIGHT; the cab enters slower and the racer catches up
    Top,
}

impl LaneEdge {
    /// Y the clearance is measured from
    pub fn edge_y(&self) -> f32 {
        match self {
            LaneEdge::Bottom => 0.0,
            LaneEdge::Top => VIEW_HEIGHT,
        }
    }

    /// Y the cab appears at
    pub fn spawn_y(&self) -> f32 {
        match self {
            LaneEdge::Bottom => SPRITE_HEIGHT / 2.0,
            LaneEdge::Top => VIEW_HEIGHT - SPRITE_HEIGHT / 2.0,
        }
    }
}

/// Where a new cab goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CabSlot {
    pub lane: Lane,
    pub edge: LaneEdge,
}

/// Required gap between a new cab and existing traffic
pub const CAB_CLEARANCE: f32 = VIEW_HEIGHT / 3.0;
/// Cab speed offset from the racer's speed
pub const CAB_SPEED_MOD_MIN: i32 = 2;
pub const CAB_SPEED_MOD_MAX: i32 = 4;

/// Oil slick size band
pub const OIL_SIZE_MIN: i32 = 2;
pub const OIL_SIZE_MAX: i32 = 5;

/// "1 in N" odds per kind for a level
pub fn zombie_cab_odds(level: u32) -> i32 {
    (100 - 10 * level as i32).max(20)
}

pub fn oil_slick_odds(level: u32) -> i32 {
    (150 - 10 * level as i32).max(40)
}

pub fn lost_soul_odds(_level: u32) -> i32 {
    100
}

pub fn holy_water_goodie_odds(level: u32) -> i32 {
    100 + 10 * level as i32
}

pub fn human_odds(level: u32) -> i32 {
    (200 - 10 * level as i32).max(30)
}

pub fn zombie_pedestrian_odds(level: u32) -> i32 {
    (100 - 10 * level as i32).max(20)
}

impl World {
    /// Run every spawn roll for this tick
    pub(crate) fn spawn_actors(&mut self) {
        self.spawn_markers();

        let level = self.level;
        if self.rng().one_in(oil_slick_odds(level)) {
            let x = self.random_road_x();
            let size = self.rng().uniform_int(OIL_SIZE_MIN, OIL_SIZE_MAX) as f32;
            self.spawn(Actor::oil_slick(x, VIEW_HEIGHT, size));
        }
        if self.rng().one_in(lost_soul_odds(level)) {
            let x = self.random_road_x();
            self.spawn(Actor::lost_soul(x, VIEW_HEIGHT));
        }
        if self.rng().one_in(holy_water_goodie_odds(level)) {
            let x = self.random_road_x();
            self.spawn(Actor::holy_water_goodie(x, VIEW_HEIGHT));
        }
        if self.rng().one_in(human_odds(level)) {
            let x = self.random_screen_x();
            self.spawn(Actor::human(x, VIEW_HEIGHT));
        }
        if self.rng().one_in(zombie_pedestrian_odds(level)) {
            let x = self.random_screen_x();
            self.spawn(Actor::zombie_pedestrian(x, VIEW_HEIGHT));
        }
        if self.rng().one_in(zombie_cab_odds(level)) {
            self.spawn_zombie_cab();
        }
    }

    /// New edge and divider pairs once the previous ones have scrolled far
    /// enough down
    fn spawn_markers(&mut self) {
        let top = VIEW_HEIGHT - SPRITE_HEIGHT;
        if top - self.last_edge_y >= SPRITE_HEIGHT {
            self.add_edge_markers(top);
        }
        if top - self.last_divider_y >= 4.0 * SPRITE_HEIGHT {
            self.add_divider_markers(top);
        }
    }

    /// Move the tracked marker rows along with the scenery
    pub(crate) fn scroll_markers(&mut self) {
        let dy = SCENERY_VERT_SPEED - self.racer.vert_speed;
        self.last_edge_y += dy;
        self.last_divider_y += dy;
    }

    fn spawn(&mut self, actor: Actor) {
        log::debug!("spawn {} at ({:.0}, {:.0})", actor.kind.name(), actor.pos.x, actor.pos.y);
        self.add_actor(actor);
    }

    fn random_road_x(&mut self) -> f32 {
        self.rng()
            .uniform_int(ROAD_LEFT_EDGE as i32, ROAD_RIGHT_EDGE as i32) as f32
    }

    fn random_screen_x(&mut self) -> f32 {
        self.rng().uniform_int(0, VIEW_WIDTH as i32) as f32
    }

    /// Search the lanes for room, starting at a random lane and wrapping.
    /// Each lane checks its bottom edge, then its top edge, before moving on.
    pub fn find_cab_slot(&mut self) -> Option<CabSlot> {
        let start = self.rng().uniform_int(0, NUM_LANES as i32 - 1) as usize;
        (0..NUM_LANES)
            .map(|step| LANES[(start + step) % NUM_LANES])
            .flat_map(|lane| [LaneEdge::Bottom, LaneEdge::Top].map(|edge| CabSlot { lane, edge }))
            .find(|slot| self.closest_traffic_distance(slot.lane, slot.edge.edge_y()) > CAB_CLEARANCE)
    }

    fn spawn_zombie_cab(&mut self) {
        let Some(slot) = self.find_cab_slot() else {
            log::debug!("no lane has room for a zombie cab");
            return;
        };
        let modifier = self.rng().uniform_int(CAB_SPEED_MOD_MIN, CAB_SPEED_MOD_MAX) as f32;
        let vert_speed = match slot.edge {
            LaneEdge::Bottom => self.racer.vert_speed + modifier,
            LaneEdge::Top => self.racer.vert_speed - modifier,
        };
        self.spawn(Actor::zombie_cab(
            slot.lane.center(),
            slot.edge.spawn_y(),
            vert_speed,
        ));
    }
}
