//! Per-kind actor behavior
//!
//! `act` is an actor's turn; `on_projectile_hit` is its reaction to holy
//! water. Both receive the world explicitly. The acting actor is lifted out
//! of the collection for its turn, so world queries never see it.

use super::actor::{Actor, ActorKind};
use super::shell::Shell;
use super::spawn::{OIL_SIZE_MAX, OIL_SIZE_MIN, lane_of};
use super::world::World;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::{heading_vector, normalize_degrees};

/// Pickup rewards
pub const HEAL_AMOUNT: i32 = 10;
pub const SPRAYS_PER_GOODIE: u32 = 10;
pub const HEALING_GOODIE_SCORE: i64 = 250;
pub const HOLY_WATER_GOODIE_SCORE: i64 = 50;
pub const LOST_SOUL_SCORE: i64 = 100;
/// Lost souls spin clockwise this many degrees per tick
pub const SOUL_SPIN: f32 = 10.0;

/// Holy water travel budget
pub const HOLY_WATER_RANGE: f32 = 160.0;
pub const HOLY_WATER_DAMAGE: i32 = 1;

/// Zombie pedestrian tuning
pub const ZOMBIE_PED_RACER_DAMAGE: i32 = 5;
pub const ZOMBIE_PED_SELF_DAMAGE: i32 = 2;
pub const ZOMBIE_PED_SCORE: i64 = 150;
pub const ZOMBIE_AGGRO_RANGE: f32 = 30.0;
pub const ZOMBIE_ATTACK_HEADING: f32 = 270.0;
pub const ZOMBIE_GRUNT_INTERVAL: i32 = 20;

/// Zombie cab tuning
pub const CAB_RACER_DAMAGE: i32 = 20;
pub const CAB_SCORE: i64 = 200;
pub const CAB_VEER_SPEED: f32 = 5.0;
pub const CAB_VEER_JITTER: i32 = 19;
pub const CAB_SAFE_DISTANCE: f32 = 96.0;
pub const CAB_SPEED_ADJUST: f32 = 0.5;
pub const CAB_SPEED_JITTER: i32 = 2;

/// Loot drops are 1 in this many
pub const DROP_ODDS: i32 = 5;

/// Take one turn
pub(crate) fn act(actor: &mut Actor, world: &mut World, shell: &mut dyn Shell) {
    if !actor.alive {
        return;
    }
    match actor.kind {
        ActorKind::BorderLine { .. } => {
            actor.advance(world.racer.vert_speed);
        }
        ActorKind::OilSlick
        | ActorKind::HealingGoodie
        | ActorKind::HolyWaterGoodie
        | ActorKind::LostSoul => act_pickup(actor, world, shell),
        ActorKind::HolyWater { .. } => act_holy_water(actor, world, shell),
        ActorKind::HumanPedestrian => act_human(actor, world),
        ActorKind::ZombiePedestrian { .. } => act_zombie_pedestrian(actor, world, shell),
        ActorKind::ZombieCab { .. } => act_zombie_cab(actor, world, shell),
    }
}

/// React to being struck by holy water
pub(crate) fn on_projectile_hit(actor: &mut Actor, world: &mut World, shell: &mut dyn Shell) {
    match actor.kind {
        ActorKind::HealingGoodie | ActorKind::HolyWaterGoodie => actor.alive = false,
        ActorKind::HumanPedestrian => {
            // Knocked back, never hurt
            actor.horiz_speed = -actor.horiz_speed;
            actor.heading = normalize_degrees(actor.heading + 180.0);
            shell.play_sound(SoundEffect::PedHurt);
        }
        ActorKind::ZombiePedestrian { .. } => {
            actor.take_damage(HOLY_WATER_DAMAGE);
            if actor.alive {
                shell.play_sound(SoundEffect::PedHurt);
                return;
            }
            shell.play_sound(SoundEffect::PedDie);
            if world.rng().one_in(DROP_ODDS) {
                world.add_actor(Actor::healing_goodie(actor.pos.x, actor.pos.y));
            }
            world.award(ZOMBIE_PED_SCORE, shell);
        }
        ActorKind::ZombieCab { .. } => {
            actor.take_damage(HOLY_WATER_DAMAGE);
            if actor.alive {
                shell.play_sound(SoundEffect::VehicleHurt);
                return;
            }
            shell.play_sound(SoundEffect::VehicleDie);
            if world.rng().one_in(DROP_ODDS) {
                let size = world.rng().uniform_int(OIL_SIZE_MIN, OIL_SIZE_MAX);
                world.add_actor(Actor::oil_slick(actor.pos.x, actor.pos.y, size as f32));
            }
            world.award(CAB_SCORE, shell);
        }
        ActorKind::BorderLine { .. }
        | ActorKind::OilSlick
        | ActorKind::LostSoul
        | ActorKind::HolyWater { .. } => {}
    }
}

/// Scenery that does something when the racer drives over it
fn act_pickup(actor: &mut Actor, world: &mut World, shell: &mut dyn Shell) {
    if !actor.advance(world.racer.vert_speed) {
        return;
    }

    if world.touches_racer(actor) {
        match actor.kind {
            ActorKind::OilSlick => {
                shell.play_sound(SoundEffect::OilSlick);
                world.spin_racer();
            }
            ActorKind::HealingGoodie => {
                world.racer.heal(HEAL_AMOUNT);
                collect(actor, world, shell, SoundEffect::GotGoodie, HEALING_GOODIE_SCORE);
            }
            ActorKind::HolyWaterGoodie => {
                world.racer.add_sprays(SPRAYS_PER_GOODIE);
                collect(actor, world, shell, SoundEffect::GotGoodie, HOLY_WATER_GOODIE_SCORE);
            }
            ActorKind::LostSoul => {
                world.save_soul();
                collect(actor, world, shell, SoundEffect::GotSoul, LOST_SOUL_SCORE);
            }
            _ => {}
        }
    }

    if actor.alive && actor.kind == ActorKind::LostSoul {
        actor.heading = normalize_degrees(actor.heading - SOUL_SPIN);
    }
}

fn collect(
    actor: &mut Actor,
    world: &mut World,
    shell: &mut dyn Shell,
    sound: SoundEffect,
    points: i64,
) {
    actor.alive = false;
    shell.play_sound(sound);
    world.award(points, shell);
}

fn act_holy_water(actor: &mut Actor, world: &mut World, shell: &mut dyn Shell) {
    if world.strike_first_target(actor.bounds(), shell) {
        actor.alive = false;
        return;
    }

    actor.pos += heading_vector(actor.heading) * SPRITE_HEIGHT;
    if actor.is_off_screen() {
        actor.alive = false;
    }
    if let ActorKind::HolyWater { traveled } = &mut actor.kind {
        *traveled += SPRITE_HEIGHT;
        if *traveled >= HOLY_WATER_RANGE {
            actor.alive = false;
        }
    }
}

fn act_human(actor: &mut Actor, world: &mut World) {
    if world.touches_racer(actor) {
        world.flag_human_hit();
        return;
    }
    if !actor.advance(world.racer.vert_speed) {
        return;
    }
    wander(actor, world);
}

fn act_zombie_pedestrian(actor: &mut Actor, world: &mut World, shell: &mut dyn Shell) {
    if world.touches_racer(actor) {
        world.racer.take_damage(ZOMBIE_PED_RACER_DAMAGE);
        actor.take_damage(ZOMBIE_PED_SELF_DAMAGE);
        if !actor.alive {
            shell.play_sound(SoundEffect::PedDie);
            world.award(ZOMBIE_PED_SCORE, shell);
        }
        return;
    }

    stalk_racer(actor, world, shell);
    if !actor.advance(world.racer.vert_speed) {
        return;
    }
    wander(actor, world);
}

/// Zombie aggro: close in on the racer sideways while ahead of it
fn stalk_racer(actor: &mut Actor, world: &World, shell: &mut dyn Shell) {
    let racer = &world.racer;
    let dx = racer.pos.x - actor.pos.x;
    if dx.abs() > ZOMBIE_AGGRO_RANGE || actor.pos.y <= racer.pos.y {
        return;
    }

    actor.heading = ZOMBIE_ATTACK_HEADING;
    actor.horiz_speed = if dx > 0.0 {
        1.0
    } else if dx < 0.0 {
        -1.0
    } else {
        0.0
    };

    if let ActorKind::ZombiePedestrian { grunt_cooldown } = &mut actor.kind {
        *grunt_cooldown -= 1;
        if *grunt_cooldown <= 0 {
            shell.play_sound(SoundEffect::ZombieAttack);
            *grunt_cooldown = ZOMBIE_GRUNT_INTERVAL;
        }
    }
}

/// Pedestrians pick a new sideways stroll when their plan runs out
fn wander(actor: &mut Actor, world: &mut World) {
    let expired = actor.plan.as_mut().is_some_and(|plan| plan.tick());
    if expired {
        actor.reroll_wander(world.rng());
    }
}

fn act_zombie_cab(actor: &mut Actor, world: &mut World, shell: &mut dyn Shell) {
    let already_hit = matches!(actor.kind, ActorKind::ZombieCab { has_hit_racer: true });
    if !already_hit && world.touches_racer(actor) {
        ram_racer(actor, world, shell);
    }

    if !actor.advance(world.racer.vert_speed) {
        return;
    }

    if adjust_for_traffic(actor, world) {
        return;
    }

    let expired = actor.plan.as_mut().is_some_and(|plan| plan.tick());
    if expired {
        if let Some(plan) = actor.plan.as_mut() {
            plan.reroll(world.rng());
        }
        let jitter = world.rng().uniform_int(-CAB_SPEED_JITTER, CAB_SPEED_JITTER);
        actor.vert_speed += jitter as f32;
    }
}

/// First contact only: damage the racer and swerve away from it
fn ram_racer(actor: &mut Actor, world: &mut World, shell: &mut dyn Shell) {
    shell.play_sound(SoundEffect::VehicleCrash);
    world.racer.take_damage(CAB_RACER_DAMAGE);

    let jitter = world.rng().uniform_int(0, CAB_VEER_JITTER) as f32;
    if actor.pos.x <= world.racer.pos.x {
        actor.horiz_speed = -CAB_VEER_SPEED;
        actor.heading = 120.0 + jitter;
    } else {
        actor.horiz_speed = CAB_VEER_SPEED;
        actor.heading = 60.0 - jitter;
    }

    if let ActorKind::ZombieCab { has_hit_racer } = &mut actor.kind {
        *has_hit_racer = true;
    }
}

/// Keep a safe gap in the lane. Returns true if the speed was adjusted.
fn adjust_for_traffic(actor: &mut Actor, world: &World) -> bool {
    let Some(lane) = lane_of(actor.pos.x) else {
        return false;
    };
    let racer_speed = world.racer.vert_speed;

    if actor.vert_speed > racer_speed
        && world.closest_traffic_in_direction(lane, actor.pos.y, true) < CAB_SAFE_DISTANCE
    {
        actor.vert_speed -= CAB_SPEED_ADJUST;
        return true;
    }
    if actor.vert_speed <= racer_speed
        && world.closest_traffic_in_direction(lane, actor.pos.y, false) < CAB_SAFE_DISTANCE
    {
        actor.vert_speed += CAB_SPEED_ADJUST;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::ScriptedRandom;
    use crate::sim::shell::HeadlessShell;
    use glam::Vec2;

    fn world(script: impl IntoIterator<Item = i32>) -> World {
        World::new(1, 3, Box::new(ScriptedRandom::new(script)))
    }

    /// Place an actor so that after one scroll step it sits on the racer
    fn on_racer(mut actor: Actor, world: &World) -> Actor {
        let racer = world.racer();
        actor.pos = Vec2::new(racer.pos.x, racer.pos.y - (actor.vert_speed - racer.vert_speed));
        actor
    }

    #[test]
    fn test_border_line_just_scrolls() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut line = Actor::border_line(crate::sim::actor::BorderColor::Yellow, 64.0, 100.0);
        w.racer_mut().vert_speed = 2.0;
        act(&mut line, &mut w, &mut shell);
        assert_eq!(line.pos.y, 94.0);
    }

    #[test]
    fn test_lost_soul_collected() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut soul = on_racer(Actor::lost_soul(0.0, 0.0), &w);
        act(&mut soul, &mut w, &mut shell);
        assert!(!soul.alive);
        assert_eq!(w.souls_saved(), 1);
        assert_eq!(w.score(), LOST_SOUL_SCORE);
        assert!(shell.played(SoundEffect::GotSoul));
        assert_eq!(shell.total_score(), LOST_SOUL_SCORE);
    }

    #[test]
    fn test_lost_soul_spins_when_missed() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut soul = Actor::lost_soul(200.0, 200.0);
        act(&mut soul, &mut w, &mut shell);
        assert!(soul.alive);
        assert_eq!(soul.heading, 350.0);
    }

    #[test]
    fn test_healing_goodie_heals_capped() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        w.racer_mut().take_damage(5);
        let mut goodie = on_racer(Actor::healing_goodie(0.0, 0.0), &w);
        act(&mut goodie, &mut w, &mut shell);
        assert_eq!(w.racer().hit_points(), 100);
        assert_eq!(w.score(), HEALING_GOODIE_SCORE);
        assert!(!goodie.alive);
    }

    #[test]
    fn test_holy_water_goodie_adds_sprays() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut goodie = on_racer(Actor::holy_water_goodie(0.0, 0.0), &w);
        act(&mut goodie, &mut w, &mut shell);
        assert_eq!(w.racer().sprays, 20);
        assert!(shell.played(SoundEffect::GotGoodie));
    }

    #[test]
    fn test_oil_slick_spins_racer_and_survives() {
        let mut w = world([15, 1]);
        let mut shell = HeadlessShell::new();
        let mut oil = on_racer(Actor::oil_slick(0.0, 0.0, 3.0), &w);
        act(&mut oil, &mut w, &mut shell);
        assert!(oil.alive);
        assert_eq!(w.racer().heading, 105.0);
        assert!(shell.played(SoundEffect::OilSlick));
    }

    #[test]
    fn test_goodies_vanish_silently_when_sprayed() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut goodie = Actor::healing_goodie(100.0, 100.0);
        on_projectile_hit(&mut goodie, &mut w, &mut shell);
        assert!(!goodie.alive);
        assert!(shell.sounds.is_empty());
        assert_eq!(w.score(), 0);
    }

    #[test]
    fn test_human_hit_by_racer_raises_signal() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut human = Actor::human(w.racer().pos.x, w.racer().pos.y);
        act(&mut human, &mut w, &mut shell);
        assert!(w.human_hit);
        // No movement on the tick it was hit
        assert_eq!(human.pos, w.racer().pos);
    }

    #[test]
    fn test_human_sprayed_turns_around() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut human = Actor::human(100.0, 200.0);
        human.horiz_speed = 2.0;
        human.heading = 0.0;
        on_projectile_hit(&mut human, &mut w, &mut shell);
        assert!(human.alive);
        assert_eq!(human.horiz_speed, -2.0);
        assert_eq!(human.heading, 180.0);
        assert!(shell.played(SoundEffect::PedHurt));
    }

    #[test]
    fn test_human_wanders_when_plan_expires() {
        // magnitude 3, rightward, duration 12
        let mut w = world([3, 1, 12]);
        let mut shell = HeadlessShell::new();
        let mut human = Actor::human(200.0, 200.0);
        act(&mut human, &mut w, &mut shell);
        assert_eq!(human.pos, Vec2::new(200.0, 196.0));
        assert_eq!(human.horiz_speed, 3.0);
        assert_eq!(human.plan.map(|p| p.remaining), Some(12));
    }

    #[test]
    fn test_zombie_ped_rams_racer() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut zombie = Actor::zombie_pedestrian(w.racer().pos.x, w.racer().pos.y);
        act(&mut zombie, &mut w, &mut shell);
        assert!(!zombie.alive);
        assert_eq!(w.racer().hit_points(), 100 - ZOMBIE_PED_RACER_DAMAGE);
        assert_eq!(w.score(), ZOMBIE_PED_SCORE);
        assert!(shell.played(SoundEffect::PedDie));
        // No loot when the racer runs it down
        assert!(w.pending().is_empty() && w.actors().is_empty());
    }

    #[test]
    fn test_zombie_ped_stalks_racer_ahead() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut zombie = Actor::zombie_pedestrian(110.0, 200.0);
        zombie.plan = Some(crate::sim::actor::MovementPlan { remaining: 10 });
        act(&mut zombie, &mut w, &mut shell);
        assert_eq!(zombie.heading, ZOMBIE_ATTACK_HEADING);
        assert_eq!(zombie.horiz_speed, 1.0);
        assert_eq!(zombie.pos, Vec2::new(111.0, 196.0));
        // Cooldown started at zero, so it taunts immediately
        assert!(shell.played(SoundEffect::ZombieAttack));
        assert_eq!(
            zombie.kind,
            ActorKind::ZombiePedestrian {
                grunt_cooldown: ZOMBIE_GRUNT_INTERVAL
            }
        );

        shell.clear();
        act(&mut zombie, &mut w, &mut shell);
        assert!(!shell.played(SoundEffect::ZombieAttack));
    }

    #[test]
    fn test_zombie_ped_ignores_racer_behind_it() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        // Close enough sideways to aggro, but below the racer
        let mut zombie = Actor::zombie_pedestrian(148.0, 10.0);
        zombie.plan = Some(crate::sim::actor::MovementPlan { remaining: 10 });
        act(&mut zombie, &mut w, &mut shell);
        assert_eq!(zombie.heading, 0.0);
        assert!(shell.sounds.is_empty());
    }

    #[test]
    fn test_zombie_ped_sprayed_to_death_may_drop_healing() {
        // drop roll hits
        let mut w = world([0]);
        let mut shell = HeadlessShell::new();
        let mut zombie = Actor::zombie_pedestrian(100.0, 150.0);
        on_projectile_hit(&mut zombie, &mut w, &mut shell);
        assert!(zombie.alive);
        assert!(shell.played(SoundEffect::PedHurt));

        on_projectile_hit(&mut zombie, &mut w, &mut shell);
        assert!(!zombie.alive);
        assert!(shell.played(SoundEffect::PedDie));
        assert_eq!(w.score(), ZOMBIE_PED_SCORE);
        let drop = w.actors().last().expect("healing drop");
        assert_eq!(drop.kind, ActorKind::HealingGoodie);
        assert_eq!(drop.pos, Vec2::new(100.0, 150.0));
    }

    #[test]
    fn test_cab_rams_once() {
        // veer jitter 5
        let mut w = world([5]);
        let mut shell = HeadlessShell::new();
        let mut cab = Actor::zombie_cab(w.racer().pos.x - 2.0, w.racer().pos.y, 0.0);
        cab.plan = Some(crate::sim::actor::MovementPlan { remaining: 10 });

        act(&mut cab, &mut w, &mut shell);
        assert_eq!(w.racer().hit_points(), 100 - CAB_RACER_DAMAGE);
        assert_eq!(cab.horiz_speed, -CAB_VEER_SPEED);
        assert_eq!(cab.heading, 125.0);
        assert!(shell.played(SoundEffect::VehicleCrash));

        // Still overlapping next tick: nothing happens
        cab.pos = Vec2::new(w.racer().pos.x + 2.0, w.racer().pos.y);
        shell.clear();
        act(&mut cab, &mut w, &mut shell);
        assert_eq!(w.racer().hit_points(), 100 - CAB_RACER_DAMAGE);
        assert_eq!(cab.horiz_speed, -CAB_VEER_SPEED);
        assert_eq!(cab.heading, 125.0);
        assert!(shell.sounds.is_empty());
    }

    #[test]
    fn test_cab_veers_right_when_right_of_racer() {
        let mut w = world([19]);
        let mut shell = HeadlessShell::new();
        let mut cab = Actor::zombie_cab(w.racer().pos.x + 2.0, w.racer().pos.y, 0.0);
        act(&mut cab, &mut w, &mut shell);
        assert_eq!(cab.horiz_speed, CAB_VEER_SPEED);
        assert_eq!(cab.heading, 41.0);
    }

    #[test]
    fn test_cab_brakes_for_traffic_ahead() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        w.racer_mut().pos.x = 10.0;
        let lane = crate::sim::spawn::LANES[0];
        w.add_actor(Actor::human(lane.center(), 150.0));
        let mut cab = Actor::zombie_cab(lane.center(), 100.0, 3.0);
        act(&mut cab, &mut w, &mut shell);
        assert_eq!(cab.vert_speed, 2.5);
    }

    #[test]
    fn test_cab_speeds_up_for_traffic_behind() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        w.racer_mut().pos.x = 10.0;
        w.racer_mut().vert_speed = 2.0;
        let lane = crate::sim::spawn::LANES[2];
        w.add_actor(Actor::zombie_cab(lane.center(), 60.0, 0.0));
        let mut cab = Actor::zombie_cab(lane.center(), 100.0, 1.0);
        act(&mut cab, &mut w, &mut shell);
        assert_eq!(cab.vert_speed, 1.5);
    }

    #[test]
    fn test_cab_rerolls_speed_when_clear() {
        // plan duration 8, speed jitter -2
        let mut w = world([8, -2]);
        let mut shell = HeadlessShell::new();
        w.racer_mut().pos.x = 10.0;
        let mut cab = Actor::zombie_cab(crate::sim::spawn::LANES[1].center(), 100.0, 3.0);
        act(&mut cab, &mut w, &mut shell);
        assert_eq!(cab.vert_speed, 1.0);
        assert_eq!(cab.plan.map(|p| p.remaining), Some(8));
    }

    #[test]
    fn test_cab_destroyed_by_spray_may_drop_oil() {
        // drop roll hits, oil size 4
        let mut w = world([0, 4]);
        let mut shell = HeadlessShell::new();
        let mut cab = Actor::zombie_cab(100.0, 150.0, 0.0);
        for _ in 0..2 {
            on_projectile_hit(&mut cab, &mut w, &mut shell);
        }
        assert!(cab.alive);
        assert!(shell.played(SoundEffect::VehicleHurt));
        on_projectile_hit(&mut cab, &mut w, &mut shell);
        assert!(!cab.alive);
        assert!(shell.played(SoundEffect::VehicleDie));
        assert_eq!(w.score(), CAB_SCORE);
        let drop = w.actors().last().expect("oil drop");
        assert_eq!(drop.kind, ActorKind::OilSlick);
        assert_eq!(drop.size, 4.0);
    }

    #[test]
    fn test_holy_water_strikes_first_in_collection_order() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let first = w.add_actor(Actor::zombie_cab(100.0, 150.0, 0.0));
        let second = w.add_actor(Actor::zombie_cab(100.0, 152.0, 0.0));
        let mut shot = Actor::holy_water(Vec2::new(100.0, 151.0), 90.0);
        act(&mut shot, &mut w, &mut shell);
        assert!(!shot.alive);
        assert_eq!(w.actor(first).and_then(|a| a.hit_points()), Some(2));
        assert_eq!(w.actor(second).and_then(|a| a.hit_points()), Some(3));
    }

    #[test]
    fn test_holy_water_passes_through_immune_actors() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        w.add_actor(Actor::lost_soul(100.0, 150.0));
        let mut shot = Actor::holy_water(Vec2::new(100.0, 150.0), 90.0);
        act(&mut shot, &mut w, &mut shell);
        assert!(shot.alive);
        assert_eq!(shot.pos.y, 150.0 + SPRITE_HEIGHT);
    }

    #[test]
    fn test_holy_water_range_runs_out() {
        let mut w = world([0; 0]);
        let mut shell = HeadlessShell::new();
        let mut shot = Actor::holy_water(Vec2::new(10.0, 10.0), 45.0);
        let mut steps = 0;
        while shot.alive {
            act(&mut shot, &mut w, &mut shell);
            steps += 1;
        }
        assert_eq!(steps, (HOLY_WATER_RANGE / SPRITE_HEIGHT) as i32);
    }
}
