//! Ghost Racer headless runner
//!
//! Drives the simulation the way a game shell would: restarts the level
//! after a death while lives remain, moves on after a completed level, and
//! presses random keys in place of a player.
//!
//! Usage: `ghost-racer [settings.json]`

mod headless {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use ghost_racer::Settings;
    use ghost_racer::SoundEffect;
    use ghost_racer::sim::{Key, Shell, TickOutcome, World};

    const KEYS: [Key; 5] = [Key::Left, Key::Right, Key::Up, Key::Down, Key::Fire];

    /// Shell that mashes keys and logs what it is asked to do
    struct DemoShell {
        rng: Pcg32,
        /// Chance per tick of pressing anything, out of 100
        press_percent: u32,
        status: String,
    }

    impl DemoShell {
        fn new(seed: u64) -> Self {
            Self {
                rng: Pcg32::seed_from_u64(seed ^ 0x5eed),
                press_percent: 30,
                status: String::new(),
            }
        }
    }

    impl Shell for DemoShell {
        fn poll_key(&mut self) -> Option<Key> {
            if self.rng.random_range(0..100) >= self.press_percent {
                return None;
            }
            Some(KEYS[self.rng.random_range(0..KEYS.len())])
        }

        fn play_sound(&mut self, sound: SoundEffect) {
            log::debug!("sound: {}", sound);
        }

        fn record_life_lost(&mut self) {
            log::warn!("Life lost");
        }

        fn set_status_line(&mut self, text: &str) {
            self.status.clear();
            self.status.push_str(text);
        }
    }

    fn clock_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    pub fn run() {
        let settings = match std::env::args().nth(1) {
            Some(path) => Settings::load(path),
            None => Settings::default(),
        };
        let seed = settings.seed.unwrap_or_else(clock_seed);
        log::info!(
            "Ghost Racer starting: difficulty {}, seed {}",
            settings.difficulty.as_str(),
            seed
        );

        let mut world = World::from_settings(&settings, seed);
        let mut shell = DemoShell::new(seed);
        world.initialize_level();

        let status_every = u64::from(settings.status_every);
        for tick in 1..=settings.max_ticks {
            match world.tick(&mut shell) {
                TickOutcome::Continue => {}
                TickOutcome::LevelComplete => {
                    world.advance_level();
                    world.initialize_level();
                }
                TickOutcome::PlayerDied => {
                    if world.lives() == 0 {
                        log::info!("Game over after {} ticks", tick);
                        break;
                    }
                    world.initialize_level();
                }
            }
            if status_every > 0 && tick % status_every == 0 {
                println!("{}", shell.status);
            }
        }

        world.shutdown();
        println!(
            "Final score {} on level {} ({} lives left)",
            world.score(),
            world.level(),
            world.lives()
        );
    }
}

fn main() {
    env_logger::init();
    headless::run();
}
