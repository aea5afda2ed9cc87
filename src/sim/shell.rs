//! Interface to the game shell
//!
//! The shell owns the window, input polling, audio and the status bar. The
//! simulation only pulls one key per tick and pushes fire-and-forget
//! notifications back.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::audio::SoundEffect;

/// Keys the racer responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

/// Capabilities the simulation consumes from its environment
pub trait Shell {
    /// Non-blocking: the key pressed since the last poll, if any
    fn poll_key(&mut self) -> Option<Key>;

    fn play_sound(&mut self, sound: SoundEffect);

    fn record_score_delta(&mut self, _amount: i64) {}

    fn record_life_lost(&mut self) {}

    fn set_status_line(&mut self, _text: &str) {}
}

/// Shell with no window: keys come from a queue, everything else is recorded
#[derive(Debug, Clone, Default)]
pub struct HeadlessShell {
    keys: VecDeque<Key>,
    pub sounds: Vec<SoundEffect>,
    pub score_deltas: Vec<i64>,
    pub lives_lost: u32,
    pub status: String,
}

impl HeadlessShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue a key for a later poll
    pub fn press(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    pub fn played(&self, sound: SoundEffect) -> bool {
        self.sounds.contains(&sound)
    }

    pub fn total_score(&self) -> i64 {
        self.score_deltas.iter().sum()
    }

    /// Forget recorded output (queued keys stay)
    pub fn clear(&mut self) {
        self.sounds.clear();
        self.score_deltas.clear();
        self.lives_lost = 0;
        self.status.clear();
    }
}

impl Shell for HeadlessShell {
    fn poll_key(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }

    fn play_sound(&mut self, sound: SoundEffect) {
        log::trace!("sound: {}", sound);
        self.sounds.push(sound);
    }

    fn record_score_delta(&mut self, amount: i64) {
        self.score_deltas.push(amount);
    }

    fn record_life_lost(&mut self) {
        self.lives_lost += 1;
    }

    fn set_status_line(&mut self, text: &str) {
        self.status.clear();
        self.status.push_str(text);
    }
}
