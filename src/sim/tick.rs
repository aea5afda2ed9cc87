//! Fixed-step simulation tick
//!
//! Advances the world by one step in a strict order: actor turns (with
//! early exits), the racer's turn, reap, marker bookkeeping, spawning,
//! bonus decay and the status line.

use super::actor::Actor;
use super::behavior;
use super::shell::Shell;
use super::world::{TickOutcome, World};
use crate::audio::SoundEffect;

impl World {
    /// Advance the simulation by one tick.
    ///
    /// Returns `PlayerDied` whenever the racer ends its own turn dead (a
    /// fatal border recoil included), not only when an actor's turn kills it.
    pub fn tick(&mut self, shell: &mut dyn Shell) -> TickOutcome {
        self.ticks += 1;
        let arrivals = std::mem::take(&mut self.pending);
        self.actors.extend(arrivals);
        self.racer.begin_tick();

        self.acting = true;
        let early_exit = self.run_actors(shell);
        if early_exit.is_none() {
            if let Some(shot) = self.racer.act(shell) {
                self.add_actor(shot);
            }
        }
        self.acting = false;

        if let Some(outcome) = early_exit {
            return outcome;
        }
        // Border recoil can finish the racer off on its own turn
        if !self.racer.alive {
            return self.player_died(shell);
        }

        self.reap();
        self.scroll_markers();
        self.spawn_actors();
        if self.bonus > 0 {
            self.bonus -= 1;
        }

        let status = self.status_line();
        log::trace!("tick {}: {}", self.ticks, status);
        shell.set_status_line(&status);
        TickOutcome::Continue
    }

    /// Give every live actor its turn in insertion order, stopping at the
    /// first exit condition
    fn run_actors(&mut self, shell: &mut dyn Shell) -> Option<TickOutcome> {
        // Arrivals go to `pending`, so the length is fixed for this pass
        for idx in 0..self.actors.len() {
            if !self.actors[idx].alive {
                continue;
            }
            let mut actor = std::mem::replace(&mut self.actors[idx], Actor::vacant());
            behavior::act(&mut actor, self, shell);
            self.actors[idx] = actor;

            if let Some(outcome) = self.check_exit(shell) {
                return Some(outcome);
            }
        }
        None
    }

    fn check_exit(&mut self, shell: &mut dyn Shell) -> Option<TickOutcome> {
        if self.human_hit {
            self.human_hit = false;
            log::info!("Ran over a human on level {}", self.level);
            self.lose_life(shell);
            return Some(TickOutcome::PlayerDied);
        }
        if !self.racer.alive {
            return Some(self.player_died(shell));
        }
        if self.souls_remaining() == 0 {
            let bonus = self.bonus;
            self.award(bonus, shell);
            shell.play_sound(SoundEffect::FinishedLevel);
            log::info!(
                "Level {} complete, bonus {} (score {})",
                self.level,
                bonus,
                self.score
            );
            return Some(TickOutcome::LevelComplete);
        }
        None
    }

    fn player_died(&mut self, shell: &mut dyn Shell) -> TickOutcome {
        log::info!("Racer destroyed on level {}", self.level);
        self.lose_life(shell);
        shell.play_sound(SoundEffect::PlayerDie);
        TickOutcome::PlayerDied
    }

    fn lose_life(&mut self, shell: &mut dyn Shell) {
        self.lives = self.lives.saturating_sub(1);
        shell.record_life_lost();
        log::info!("{} lives left", self.lives);
    }

    /// Drop every dead actor. Returns how many were removed.
    pub(crate) fn reap(&mut self) -> usize {
        let before = self.actors.len();
        self.actors.retain(|a| {
            debug_assert!(
                a.hp.is_none_or(|hp| hp.current > 0 || !a.alive),
                "{} {} alive with depleted hit points",
                a.kind.name(),
                a.id
            );
            a.alive
        });
        before - self.actors.len()
    }
}
