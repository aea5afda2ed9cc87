//! World state
//!
//! Owns every actor, the racer, the random source and the per-level counters.
//! Actors never hold a reference back to the world; behaviors receive it as
//! an argument for the duration of their turn.

use super::actor::{Actor, BorderColor};
use super::behavior;
use super::overlap::{Bounds, overlaps};
use super::racer::GhostRacer;
use super::random::{RandomSource, SeededRandom};
use super::shell::Shell;
use super::spawn::Lane;
use crate::consts::*;
use crate::settings::Settings;

/// Bonus awarded for finishing a level, decays one point per tick
pub const START_BONUS: i64 = 5000;
/// Edge marker pairs laid out at level start
pub const EDGE_MARKER_ROWS: u32 = (VIEW_HEIGHT / SPRITE_HEIGHT) as u32;
/// Divider marker pairs laid out at level start
pub const DIVIDER_MARKER_ROWS: u32 = (VIEW_HEIGHT / (4.0 * SPRITE_HEIGHT)) as u32;

/// Result of a single tick, consumed by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    LevelComplete,
    PlayerDied,
}

/// The simulation
pub struct World {
    pub(crate) level: u32,
    pub(crate) lives: u32,
    pub(crate) score: i64,
    pub(crate) souls_saved: u32,
    pub(crate) bonus: i64,
    /// Y of the most recent edge marker pair
    pub(crate) last_edge_y: f32,
    /// Y of the most recent divider marker pair
    pub(crate) last_divider_y: f32,
    /// Raised when the racer runs over a human this tick
    pub(crate) human_hit: bool,
    pub(crate) racer: GhostRacer,
    /// Live actors, in insertion order
    pub(crate) actors: Vec<Actor>,
    /// Actors created mid-tick, spliced in at the start of the next tick
    pub(crate) pending: Vec<Actor>,
    /// True while actors are taking their turns
    pub(crate) acting: bool,
    pub(crate) ticks: u64,
    next_id: u32,
    rng: Box<dyn RandomSource>,
}

impl World {
    /// Create a world with no actors. Call `initialize_level` before ticking.
    pub fn new(level: u32, lives: u32, rng: Box<dyn RandomSource>) -> Self {
        Self {
            level: level.max(1),
            lives,
            score: 0,
            souls_saved: 0,
            bonus: START_BONUS,
            last_edge_y: 0.0,
            last_divider_y: 0.0,
            human_hit: false,
            racer: GhostRacer::new(),
            actors: Vec::new(),
            pending: Vec::new(),
            acting: false,
            ticks: 0,
            next_id: 1,
            rng,
        }
    }

    pub fn with_seed(level: u32, lives: u32, seed: u64) -> Self {
        Self::new(level, lives, Box::new(SeededRandom::new(seed)))
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        Self::with_seed(settings.starting_level(), settings.starting_lives(), seed)
    }

    /// Swap the random source (tests replay scripted draws)
    pub fn set_random(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    /// Reset per-level state and lay out the road markers
    pub fn initialize_level(&mut self) {
        self.clear_actors();
        self.racer = GhostRacer::new();
        self.bonus = START_BONUS;
        self.souls_saved = 0;
        self.human_hit = false;

        for row in 0..EDGE_MARKER_ROWS {
            self.add_edge_markers(row as f32 * SPRITE_HEIGHT);
        }
        for row in 0..DIVIDER_MARKER_ROWS {
            self.add_divider_markers(row as f32 * 4.0 * SPRITE_HEIGHT);
        }

        log::info!(
            "Level {} start: {} souls to save, {} lives",
            self.level,
            self.souls_required(),
            self.lives
        );
    }

    /// Tear down every owned actor
    pub fn shutdown(&mut self) {
        self.clear_actors();
        self.racer = GhostRacer::new();
        self.bonus = START_BONUS;
        self.souls_saved = 0;
        self.human_hit = false;
        self.last_edge_y = 0.0;
        self.last_divider_y = 0.0;
    }

    /// Move on to the next level. The shell calls `initialize_level` after.
    pub fn advance_level(&mut self) {
        self.level += 1;
    }

    fn clear_actors(&mut self) {
        self.actors.clear();
        self.pending.clear();
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn bonus(&self) -> i64 {
        self.bonus
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn souls_saved(&self) -> u32 {
        self.souls_saved
    }

    pub fn souls_required(&self) -> u32 {
        2 * self.level + 5
    }

    pub fn souls_remaining(&self) -> u32 {
        self.souls_required().saturating_sub(self.souls_saved)
    }

    pub fn racer(&self) -> &GhostRacer {
        &self.racer
    }

    pub fn racer_mut(&mut self) -> &mut GhostRacer {
        &mut self.racer
    }

    /// Live collection in insertion order
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Actors created this tick, not yet acting
    pub fn pending(&self) -> &[Actor] {
        &self.pending
    }

    pub fn actor(&self, id: u32) -> Option<&Actor> {
        self.actors
            .iter()
            .chain(self.pending.iter())
            .find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: u32) -> Option<&mut Actor> {
        self.actors
            .iter_mut()
            .chain(self.pending.iter_mut())
            .find(|a| a.id == id)
    }

    /// Human-readable status line
    pub fn status_line(&self) -> String {
        format!(
            "Score: {}  Lvl: {}  Souls2Save: {}  Lives: {}  Health: {}  Sprays: {}  Bonus: {}",
            self.score,
            self.level,
            self.souls_remaining(),
            self.lives,
            self.racer.hit_points(),
            self.racer.sprays,
            self.bonus
        )
    }

    /// Take ownership of an actor and return its id. While actors are
    /// taking their turns the newcomer waits until the next tick.
    pub fn add_actor(&mut self, mut actor: Actor) -> u32 {
        actor.id = self.next_id;
        self.next_id += 1;
        let id = actor.id;
        if self.acting {
            self.pending.push(actor);
        } else {
            self.actors.push(actor);
        }
        id
    }

    pub(crate) fn add_edge_markers(&mut self, y: f32) {
        self.add_actor(Actor::border_line(BorderColor::Yellow, ROAD_LEFT_EDGE, y));
        self.add_actor(Actor::border_line(BorderColor::Yellow, ROAD_RIGHT_EDGE, y));
        self.last_edge_y = y;
    }

    pub(crate) fn add_divider_markers(&mut self, y: f32) {
        self.add_actor(Actor::border_line(BorderColor::White, LEFT_DIVIDER_X, y));
        self.add_actor(Actor::border_line(BorderColor::White, RIGHT_DIVIDER_X, y));
        self.last_divider_y = y;
    }

    pub(crate) fn rng(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }

    /// Add to the score and tell the shell
    pub(crate) fn award(&mut self, points: i64, shell: &mut dyn Shell) {
        self.score += points;
        shell.record_score_delta(points);
    }

    pub(crate) fn save_soul(&mut self) {
        self.souls_saved += 1;
    }

    pub(crate) fn flag_human_hit(&mut self) {
        self.human_hit = true;
    }

    pub(crate) fn spin_racer(&mut self) {
        self.racer.spin_out(self.rng.as_mut());
    }

    /// True when `actor` reacts to the racer and overlaps it
    pub(crate) fn touches_racer(&self, actor: &Actor) -> bool {
        actor.collides_with_racer() && overlaps(actor.bounds(), self.racer.bounds())
    }

    /// Traffic-aware occupants of a lane (the racer included), as Y values
    fn lane_traffic(&self, lane: Lane) -> impl Iterator<Item = f32> + '_ {
        let racer_y = lane.contains(self.racer.pos.x).then_some(self.racer.pos.y);
        self.actors
            .iter()
            .filter(move |a| a.alive && a.traffic_aware() && lane.contains(a.pos.x))
            .map(|a| a.pos.y)
            .chain(racer_y)
    }

    /// Smallest vertical distance from `y` to traffic in `lane`, or the
    /// viewport height if the lane is empty
    pub fn closest_traffic_distance(&self, lane: Lane, y: f32) -> f32 {
        self.lane_traffic(lane)
            .map(|ty| (ty - y).abs())
            .fold(VIEW_HEIGHT, f32::min)
    }

    /// Like `closest_traffic_distance`, but only counting traffic ahead of
    /// (above) or behind (below) `y`
    pub fn closest_traffic_in_direction(&self, lane: Lane, y: f32, ahead: bool) -> f32 {
        self.lane_traffic(lane)
            .map(|ty| ty - y)
            .filter(|dy| if ahead { *dy >= 0.0 } else { *dy <= 0.0 })
            .map(f32::abs)
            .fold(VIEW_HEIGHT, f32::min)
    }

    /// Resolve a projectile at `bounds` against the first vulnerable actor
    /// in collection order. Returns true if something was struck.
    pub(crate) fn strike_first_target(&mut self, bounds: Bounds, shell: &mut dyn Shell) -> bool {
        let Some(idx) = self
            .actors
            .iter()
            .position(|a| a.alive && a.takes_projectile() && overlaps(a.bounds(), bounds))
        else {
            return false;
        };
        let mut target = std::mem::replace(&mut self.actors[idx], Actor::vacant());
        behavior::on_projectile_hit(&mut target, self, shell);
        self.actors[idx] = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::ScriptedRandom;
    use crate::sim::spawn::LANES;

    fn world() -> World {
        World::new(1, 3, Box::new(ScriptedRandom::default()))
    }

    #[test]
    fn test_initialize_level_lays_out_markers() {
        let mut w = world();
        w.initialize_level();
        let expected = 2 * (EDGE_MARKER_ROWS + DIVIDER_MARKER_ROWS) as usize;
        assert_eq!(w.actors().len(), expected);
        assert_eq!(w.last_divider_y, 3.0 * 4.0 * SPRITE_HEIGHT);
        assert_eq!(w.last_edge_y, 15.0 * SPRITE_HEIGHT);
        assert_eq!(w.souls_required(), 7);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut w = world();
        let a = w.add_actor(Actor::lost_soul(100.0, 100.0));
        let b = w.add_actor(Actor::lost_soul(100.0, 120.0));
        assert!(b > a);
        assert_eq!(w.actor(b).map(|x| x.pos.y), Some(120.0));
    }

    #[test]
    fn test_adds_while_acting_are_deferred() {
        let mut w = world();
        w.acting = true;
        w.add_actor(Actor::lost_soul(100.0, 100.0));
        assert!(w.actors().is_empty());
        assert_eq!(w.pending().len(), 1);
    }

    #[test]
    fn test_shutdown_drops_everything() {
        let mut w = world();
        w.initialize_level();
        w.acting = true;
        w.add_actor(Actor::lost_soul(100.0, 100.0));
        w.acting = false;
        w.shutdown();
        assert!(w.actors().is_empty());
        assert!(w.pending().is_empty());
    }

    #[test]
    fn test_closest_traffic_ignores_scenery_and_other_lanes() {
        let mut w = world();
        let lane = LANES[0];
        // Racer sits in the middle lane
        w.add_actor(Actor::oil_slick(lane.center(), 10.0, 3.0));
        w.add_actor(Actor::human(LANES[2].center(), 10.0));
        assert_eq!(w.closest_traffic_distance(lane, 0.0), VIEW_HEIGHT);

        w.add_actor(Actor::zombie_cab(lane.center(), 50.0, 0.0));
        assert_eq!(w.closest_traffic_distance(lane, 0.0), 50.0);
        assert_eq!(w.closest_traffic_distance(lane, VIEW_HEIGHT), VIEW_HEIGHT - 50.0);
    }

    #[test]
    fn test_closest_traffic_counts_racer() {
        let w = world();
        let lane = LANES[1];
        assert_eq!(w.closest_traffic_distance(lane, 0.0), w.racer().pos.y);
    }

    #[test]
    fn test_directional_traffic() {
        let mut w = world();
        let lane = LANES[0];
        w.add_actor(Actor::human(lane.center(), 150.0));
        w.add_actor(Actor::human(lane.center(), 60.0));
        assert_eq!(w.closest_traffic_in_direction(lane, 100.0, true), 50.0);
        assert_eq!(w.closest_traffic_in_direction(lane, 100.0, false), 40.0);
        assert_eq!(w.closest_traffic_in_direction(lane, 200.0, true), VIEW_HEIGHT);
    }

    #[test]
    fn test_only_racer_colliders_touch_racer() {
        let w = world();
        let pos = w.racer().pos;
        assert!(w.touches_racer(&Actor::lost_soul(pos.x, pos.y)));
        assert!(w.touches_racer(&Actor::zombie_cab(pos.x, pos.y, 0.0)));
        assert!(!w.touches_racer(&Actor::border_line(BorderColor::White, pos.x, pos.y)));
        assert!(!w.touches_racer(&Actor::holy_water(pos, 90.0)));
        assert!(!w.touches_racer(&Actor::lost_soul(pos.x, pos.y + 100.0)));
    }

    #[test]
    fn test_status_line_format() {
        let w = world();
        assert_eq!(
            w.status_line(),
            "Score: 0  Lvl: 1  Souls2Save: 7  Lives: 3  Health: 100  Sprays: 10  Bonus: 5000"
        );
    }
}
