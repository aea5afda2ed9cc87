//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Randomness only through the world's `RandomSource`
//! - Stable iteration order (insertion order, ids increase)
//! - No rendering or platform dependencies; the `Shell` trait is the only
//!   way out

pub mod actor;
mod behavior;
pub mod overlap;
pub mod racer;
pub mod random;
pub mod shell;
pub mod spawn;
mod tick;
pub mod world;

pub use actor::{Actor, ActorKind, BorderColor, HitPoints, MovementPlan};
pub use overlap::{Bounds, overlaps};
pub use racer::{GhostRacer, RacerState};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use shell::{HeadlessShell, Key, Shell};
pub use spawn::{CabSlot, LANES, Lane, LaneEdge, lane_of};
pub use world::{TickOutcome, World};
