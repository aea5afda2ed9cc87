//! Actor data model
//!
//! Every entity on the road except the racer is an `Actor`. Shared state
//! (hit points, movement plan) lives in optional fields instead of a class
//! hierarchy; per-kind state lives in the `ActorKind` variant.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::overlap::Bounds;
use super::random::RandomSource;
use crate::consts::*;

/// Hit point pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
}

impl HitPoints {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount` (ignored unless positive). Returns true when depleted.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if amount > 0 {
            self.current -= amount;
        }
        self.is_depleted()
    }

    /// Add `amount` (ignored unless positive), capped at `max`
    pub fn heal(&mut self, amount: i32) {
        if amount > 0 {
            self.current = self.current.saturating_add(amount).min(self.max);
        }
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

/// Ticks left before a roaming actor re-rolls its speed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementPlan {
    pub remaining: i32,
}

/// Plan duration band (ticks)
pub const PLAN_MIN_TICKS: i32 = 4;
pub const PLAN_MAX_TICKS: i32 = 32;
/// Pedestrian horizontal speed magnitude band
pub const WANDER_MIN_SPEED: i32 = 1;
pub const WANDER_MAX_SPEED: i32 = 3;

impl MovementPlan {
    /// Count down one tick. Returns true when the plan has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining -= 1;
        self.remaining <= 0
    }

    /// Draw a fresh duration
    pub fn reroll(&mut self, rng: &mut dyn RandomSource) {
        self.remaining = rng.uniform_int(PLAN_MIN_TICKS, PLAN_MAX_TICKS);
    }
}

/// Road marker colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderColor {
    /// Road edge
    Yellow,
    /// Lane divider
    White,
}

/// Actor kinds, with per-kind state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    BorderLine { color: BorderColor },
    OilSlick,
    HealingGoodie,
    HolyWaterGoodie,
    LostSoul,
    /// Projectile fired by the racer
    HolyWater { traveled: f32 },
    HumanPedestrian,
    ZombiePedestrian { grunt_cooldown: i32 },
    ZombieCab { has_hit_racer: bool },
}

impl ActorKind {
    /// Reacts when the racer touches it
    pub fn collides_with_racer(&self) -> bool {
        !matches!(self, ActorKind::BorderLine { .. } | ActorKind::HolyWater { .. })
    }

    /// Can be struck by holy water
    pub fn takes_projectile(&self) -> bool {
        matches!(
            self,
            ActorKind::HealingGoodie
                | ActorKind::HolyWaterGoodie
                | ActorKind::HumanPedestrian
                | ActorKind::ZombiePedestrian { .. }
                | ActorKind::ZombieCab { .. }
        )
    }

    /// Counted by lane spacing checks
    pub fn traffic_aware(&self) -> bool {
        matches!(
            self,
            ActorKind::HumanPedestrian
                | ActorKind::ZombiePedestrian { .. }
                | ActorKind::ZombieCab { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActorKind::BorderLine { color: BorderColor::Yellow } => "yellow border",
            ActorKind::BorderLine { color: BorderColor::White } => "white border",
            ActorKind::OilSlick => "oil slick",
            ActorKind::HealingGoodie => "healing goodie",
            ActorKind::HolyWaterGoodie => "holy water goodie",
            ActorKind::LostSoul => "lost soul",
            ActorKind::HolyWater { .. } => "holy water",
            ActorKind::HumanPedestrian => "human",
            ActorKind::ZombiePedestrian { .. } => "zombie pedestrian",
            ActorKind::ZombieCab { .. } => "zombie cab",
        }
    }
}

/// An entity on the road
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Assigned when the world takes ownership
    pub id: u32,
    pub kind: ActorKind,
    pub pos: Vec2,
    /// Degrees, 90 = up the road
    pub heading: f32,
    pub size: f32,
    /// Draw priority (lower on top)
    pub depth: u8,
    /// Own per-tick horizontal delta
    pub horiz_speed: f32,
    /// Own per-tick vertical delta, before scroll compensation
    pub vert_speed: f32,
    pub alive: bool,
    pub hp: Option<HitPoints>,
    pub plan: Option<MovementPlan>,
}

/// Hit points per kind
pub const HUMAN_HP: i32 = 2;
pub const ZOMBIE_PED_HP: i32 = 2;
pub const ZOMBIE_CAB_HP: i32 = 3;

/// Pedestrians walk down the screen at this own speed
pub const PEDESTRIAN_VERT_SPEED: f32 = -4.0;

impl Actor {
    fn new(kind: ActorKind, pos: Vec2, heading: f32, size: f32, depth: u8) -> Self {
        Self {
            id: 0,
            kind,
            pos,
            heading,
            size,
            depth,
            horiz_speed: 0.0,
            vert_speed: SCENERY_VERT_SPEED,
            alive: true,
            hp: None,
            plan: None,
        }
    }

    pub fn border_line(color: BorderColor, x: f32, y: f32) -> Self {
        Self::new(ActorKind::BorderLine { color }, Vec2::new(x, y), 0.0, 2.0, 2)
    }

    pub fn oil_slick(x: f32, y: f32, size: f32) -> Self {
        Self::new(ActorKind::OilSlick, Vec2::new(x, y), 0.0, size, 2)
    }

    pub fn healing_goodie(x: f32, y: f32) -> Self {
        Self::new(ActorKind::HealingGoodie, Vec2::new(x, y), 0.0, 1.0, 2)
    }

    pub fn holy_water_goodie(x: f32, y: f32) -> Self {
        Self::new(ActorKind::HolyWaterGoodie, Vec2::new(x, y), HEADING_UP, 2.0, 2)
    }

    pub fn lost_soul(x: f32, y: f32) -> Self {
        Self::new(ActorKind::LostSoul, Vec2::new(x, y), 0.0, 4.0, 2)
    }

    /// Projectile launched from `pos` along `heading`
    pub fn holy_water(pos: Vec2, heading: f32) -> Self {
        let mut actor = Self::new(ActorKind::HolyWater { traveled: 0.0 }, pos, heading, 1.0, 1);
        actor.vert_speed = 0.0;
        actor
    }

    pub fn human(x: f32, y: f32) -> Self {
        let mut actor = Self::new(ActorKind::HumanPedestrian, Vec2::new(x, y), 0.0, 2.0, 0);
        actor.vert_speed = PEDESTRIAN_VERT_SPEED;
        actor.hp = Some(HitPoints::new(HUMAN_HP));
        actor.plan = Some(MovementPlan::default());
        actor
    }

    pub fn zombie_pedestrian(x: f32, y: f32) -> Self {
        let kind = ActorKind::ZombiePedestrian { grunt_cooldown: 0 };
        let mut actor = Self::new(kind, Vec2::new(x, y), 0.0, 3.0, 0);
        actor.vert_speed = PEDESTRIAN_VERT_SPEED;
        actor.hp = Some(HitPoints::new(ZOMBIE_PED_HP));
        actor.plan = Some(MovementPlan::default());
        actor
    }

    pub fn zombie_cab(x: f32, y: f32, vert_speed: f32) -> Self {
        let kind = ActorKind::ZombieCab {
            has_hit_racer: false,
        };
        let mut actor = Self::new(kind, Vec2::new(x, y), HEADING_UP, 4.0, 0);
        actor.vert_speed = vert_speed;
        actor.hp = Some(HitPoints::new(ZOMBIE_CAB_HP));
        actor.plan = Some(MovementPlan::default());
        actor
    }

    /// Dead stand-in occupying a slot while its owner is acting
    pub(crate) fn vacant() -> Self {
        let mut actor = Self::border_line(BorderColor::Yellow, -1.0, -1.0);
        actor.alive = false;
        actor
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size)
    }

    pub fn collides_with_racer(&self) -> bool {
        self.kind.collides_with_racer()
    }

    pub fn takes_projectile(&self) -> bool {
        self.kind.takes_projectile()
    }

    pub fn traffic_aware(&self) -> bool {
        self.kind.traffic_aware()
    }

    pub fn hit_points(&self) -> Option<i32> {
        self.hp.map(|hp| hp.current)
    }

    /// Apply damage. Actors with a pool die the moment it runs dry;
    /// actors without one ignore damage.
    pub fn take_damage(&mut self, amount: i32) {
        if let Some(hp) = self.hp.as_mut() {
            if hp.take_damage(amount) {
                self.alive = false;
            }
        }
    }

    pub fn heal(&mut self, amount: i32) {
        if let Some(hp) = self.hp.as_mut() {
            hp.heal(amount);
        }
    }

    pub fn is_off_screen(&self) -> bool {
        is_off_screen(self.pos)
    }

    /// Scroll-compensated move. Returns false if the actor left the screen
    /// (and is now dead).
    pub fn advance(&mut self, racer_vert_speed: f32) -> bool {
        let dy = self.vert_speed - racer_vert_speed;
        self.pos += Vec2::new(self.horiz_speed, dy);
        if self.is_off_screen() {
            self.alive = false;
        }
        self.alive
    }

    /// New random horizontal wander for pedestrians
    pub fn reroll_wander(&mut self, rng: &mut dyn RandomSource) {
        let magnitude = rng.uniform_int(WANDER_MIN_SPEED, WANDER_MAX_SPEED) as f32;
        let leftward = rng.uniform_int(0, 1) == 0;
        self.horiz_speed = if leftward { -magnitude } else { magnitude };
        self.heading = if leftward { 180.0 } else { 0.0 };
        if let Some(plan) = self.plan.as_mut() {
            plan.reroll(rng);
        }
    }
}

/// Outside the viewport (edges themselves count as on-screen)
#[inline]
pub fn is_off_screen(pos: Vec2) -> bool {
    pos.x < 0.0 || pos.x > VIEW_WIDTH || pos.y < 0.0 || pos.y > VIEW_HEIGHT
}
