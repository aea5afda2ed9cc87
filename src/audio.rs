//! Sound cues
//!
//! The simulation never plays audio itself. It hands these cues to the shell,
//! which is free to play them in any order (fire-and-forget).

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Racer scraped a road edge, or a cab rammed the racer
    VehicleCrash,
    /// Racer destroyed
    PlayerDie,
    /// Racer fired holy water
    PlayerSpray,
    /// Pedestrian hit but still standing
    PedHurt,
    /// Pedestrian destroyed
    PedDie,
    /// Zombie pedestrian taunting the racer
    ZombieAttack,
    /// Cab hit but still running
    VehicleHurt,
    /// Cab destroyed
    VehicleDie,
    /// Racer drove over an oil slick
    OilSlick,
    /// Healing or holy water pickup collected
    GotGoodie,
    /// Lost soul collected
    GotSoul,
    /// Enough souls saved to finish the level
    FinishedLevel,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::VehicleCrash => "vehicle_crash",
            SoundEffect::PlayerDie => "player_die",
            SoundEffect::PlayerSpray => "player_spray",
            SoundEffect::PedHurt => "ped_hurt",
            SoundEffect::PedDie => "ped_die",
            SoundEffect::ZombieAttack => "zombie_attack",
            SoundEffect::VehicleHurt => "vehicle_hurt",
            SoundEffect::VehicleDie => "vehicle_die",
            SoundEffect::OilSlick => "oil_slick",
            SoundEffect::GotGoodie => "got_goodie",
            SoundEffect::GotSoul => "got_soul",
            SoundEffect::FinishedLevel => "finished_level",
        }
    }
}

impl std::fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
