//! Per-kind `update`, `hit` and `touch` behaviour.
//!
//! The frame loop only calls these for objects whose capability flag is set.
//! Dispatching to a kind without the matching behaviour is a programming error
//! and panics.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use super::game_state::GameState;
use super::objects::{ObjectId, ObjectKind};
use super::player::sweep_blocked;
use crate::host::Sound;

/// Longest distance a projectile travels between hit tests
const PROJECTILE_SUBSTEP: f32 = 0.05;

impl GameState {
    pub(crate) fn update_object(&mut self, id: ObjectId, elapsed: f32) {
        match self.objects.get(id).kind {
            ObjectKind::Fly { .. } => self.update_fly(id, elapsed),
            ObjectKind::Projectile => self.update_projectile(elapsed),
            ObjectKind::Door(_) => self.update_door(id, elapsed),
            other => panic!("{other:?} has no update behaviour"),
        }
    }

    /// Random walk: keep heading until the turn timer runs out or the next
    /// position is blocked, then pick a fresh random heading
    fn update_fly(&mut self, id: ObjectId, elapsed: f32) {
        let speed = self.config.fly_speed;
        let (position, direction, timer) = {
            let fly = self.objects.get(id);
            let ObjectKind::Fly { turn_timer } = fly.kind else {
                unreachable!("update_fly on {:?}", fly.kind);
            };
            (fly.position, fly.direction, turn_timer - elapsed)
        };

        let next = position + direction * speed * elapsed;
        let blocked = sweep_blocked(position, next, |point| self.is_blocked(point));
        let (direction, timer) = if blocked || timer <= 0.0 || direction == Vec2::ZERO {
            let angle = self.rng.gen_range(0.0..TAU);
            (Vec2::from_angle(angle), self.config.fly_turn_interval)
        } else {
            (direction, timer)
        };

        let fly = self.objects.get_mut(id);
        if !blocked {
            fly.position = next;
        }
        fly.direction = direction;
        fly.kind = ObjectKind::Fly { turn_timer: timer };
    }

    /// Fly straight, in short sub-steps so fast shots cannot tunnel. The
    /// first hittable object found ends the flight, then any wall or door.
    fn update_projectile(&mut self, elapsed: f32) {
        let mut remaining = self.config.projectile_speed * elapsed;

        while remaining > 0.0 {
            let step = remaining.min(PROJECTILE_SUBSTEP);
            remaining -= step;

            let projectile = self.objects.get_mut(ObjectId::PROJECTILE);
            projectile.position += projectile.direction * step;
            let position = projectile.position;

            if let Some(target) = self.objects.first_hittable_at(position) {
                self.hit(target);
                self.deactivate_projectile();
                return;
            }
            if self.is_blocked(position) {
                debug!(x = position.x, y = position.y, "projectile hit a wall");
                self.deactivate_projectile();
                return;
            }
        }
    }

    fn deactivate_projectile(&mut self) {
        let flags = &mut self.objects.get_mut(ObjectId::PROJECTILE).flags;
        flags.updateable = false;
        flags.visible = false;
    }

    /// Slide the door open; once fully open it never closes again
    fn update_door(&mut self, id: ObjectId, elapsed: f32) {
        let speed = self.config.door_speed;
        let object = self.objects.get_mut(id);
        let Some(door) = object.door_state_mut() else {
            unreachable!("update_door on a non-door");
        };

        door.width = (door.width - speed * elapsed).max(0.0);
        if door.width <= 0.0 {
            door.opening = false;
            object.flags.updateable = false;
            object.flags.hittable = false;
            debug!(door = id.index(), "door open");
        }
    }

    /// A projectile reached this object
    pub fn hit(&mut self, id: ObjectId) {
        let object = self.objects.get_mut(id);
        match object.kind {
            ObjectKind::Poo | ObjectKind::Fly { .. } => {
                object.kill();
                self.stats.score += 1;
                self.sounds.push(Sound::Splat);
                debug!(enemy = id.index(), score = self.stats.score, "enemy shot");
            }
            ObjectKind::Door(ref mut door) => {
                if door.width > 0.0 && !door.opening {
                    door.opening = true;
                    object.flags.updateable = true;
                    self.sounds.push(Sound::Door);
                    debug!(door = id.index(), "door opening");
                }
            }
            other => panic!("{other:?} has no hit behaviour"),
        }
    }

    /// The player walked into this object
    pub fn touch(&mut self, id: ObjectId) {
        let object = self.objects.get_mut(id);
        match object.kind {
            ObjectKind::Coin => {
                object.flags.visible = false;
                object.flags.touchable = false;
                self.stats.score += 1;
                self.sounds.push(Sound::Coin);
                debug!(coin = id.index(), score = self.stats.score, "coin collected");
            }
            ObjectKind::Poo | ObjectKind::Fly { .. } => {
                object.kill();
                self.stats.score -= 1;
                self.stats.lives = self.stats.lives.saturating_sub(1);
                self.sounds.push(Sound::Ouch);
                debug!(enemy = id.index(), lives = self.stats.lives, "player touched an enemy");
            }
            other => panic!("{other:?} has no touch behaviour"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::game::Object;
    use crate::host::TextureId;
    use crate::map::Level;

    fn game(source: &str) -> GameState {
        let level: Level = source.parse().unwrap();
        GameState::new(level, EngineConfig::default())
    }

    fn door_id(state: &GameState) -> ObjectId {
        state
            .objects
            .iter()
            .find(|(_, object)| object.door_state().is_some())
            .map(|(id, _)| id)
            .unwrap()
    }

    #[test]
    fn test_door_lifecycle() {
        let mut state = game("5 3\n11111\n1@|21\n11111\n");
        let door = door_id(&state);
        assert_eq!(state.objects.door_width(door), 1.0);

        state.hit(door);
        let object = state.objects.get(door);
        assert!(object.door_state().unwrap().opening);
        assert!(object.flags.updateable);

        let mut last = 1.0;
        for _ in 0..200 {
            if !state.objects.get(door).flags.updateable {
                break;
            }
            state.update_object(door, 0.05);
            let width = state.objects.door_width(door);
            assert!(width < last, "width went from {last} to {width}");
            last = width;
        }

        let object = state.objects.get(door);
        assert_eq!(state.objects.door_width(door), 0.0);
        assert!(!object.flags.updateable);
        assert!(!object.flags.hittable);
        assert!(!object.door_state().unwrap().opening);

        // terminal: hitting again changes nothing
        state.hit(door);
        assert!(!state.objects.get(door).flags.updateable);
        assert_eq!(state.objects.door_width(door), 0.0);
    }

    #[test]
    fn test_repeated_hit_while_opening() {
        let mut state = game("5 3\n11111\n1@-21\n11111\n");
        let door = door_id(&state);
        state.hit(door);
        state.update_object(door, 0.25);
        state.hit(door);
        assert!((state.objects.door_width(door) - 0.75).abs() < 1e-6);
        assert_eq!(state.sounds, vec![Sound::Door]);
    }

    #[test]
    fn test_projectile_opens_door() {
        let mut state = game("6 3\n111111\n1@ |21\n111111\n");
        let door = door_id(&state);
        state.fire();
        for _ in 0..60 {
            state.run_updates(1.0 / 60.0);
        }
        assert!(!state.projectile_in_flight());
        assert!(state.objects.door_width(door) < 1.0);
    }

    #[test]
    fn test_projectile_kills_first_match() {
        let mut state = game("7 3\n1111111\n1@    1\n1111111\n");
        let first = state.objects.try_push(Object::poo(Vec2::new(2.85, 1.5))).unwrap();
        let second = state.objects.try_push(Object::poo(Vec2::new(2.6, 1.5))).unwrap();
        state.player.position = Vec2::new(2.45, 1.5);

        state.fire();
        state.run_updates(PROJECTILE_SUBSTEP / state.config.projectile_speed);

        // the second poo is nearer, yet collection order decides
        assert!(state.objects.get(first).flags.harmless);
        assert_eq!(state.objects.get(first).texture, TextureId::PooDead);
        assert!(!state.objects.get(second).flags.harmless);
        assert!(!state.projectile_in_flight());
        assert!(!state.objects.projectile().flags.visible);
        assert_eq!(state.stats.score, 1);
    }

    #[test]
    fn test_shooting_a_hazard_scores() {
        let mut state = game("5 3\n11111\n1@ f1\n11111\n");
        let (fly, _) = state
            .objects
            .iter()
            .find(|(_, object)| matches!(object.kind, ObjectKind::Fly { .. }))
            .unwrap();
        state.hit(fly);

        let object = state.objects.get(fly);
        assert_eq!(state.stats.score, 1);
        assert_eq!(state.stats.lives, EngineConfig::default().starting_lives);
        assert_eq!(object.texture, TextureId::FlyDead);
        assert!(object.flags.harmless);
        assert!(!object.flags.hittable && !object.flags.touchable && !object.flags.updateable);
        assert_eq!(state.sounds, vec![Sound::Splat]);
    }

    #[test]
    fn test_projectile_stops_at_wall() {
        let mut state = game("4 3\n1111\n1@ 1\n1111\n");
        state.fire();
        for _ in 0..30 {
            state.run_updates(1.0 / 60.0);
        }
        assert!(!state.projectile_in_flight());
        assert!(state.objects.projectile().position.x < 3.1);
        assert_eq!(state.sounds, vec![Sound::Fire]);
    }

    #[test]
    fn test_coin_touch() {
        let mut state = game("4 3\n1111\n1@c1\n1111\n");
        let (coin, _) = state
            .objects
            .iter()
            .find(|(_, object)| object.kind == ObjectKind::Coin)
            .unwrap();
        state.touch(coin);
        assert_eq!(state.stats.score, 1);
        assert!(!state.objects.get(coin).flags.visible);
        assert!(!state.objects.get(coin).flags.touchable);
        assert_eq!(state.sounds, vec![Sound::Coin]);
    }

    #[test]
    fn test_enemy_touch_costs_life() {
        let mut state = game("4 3\n1111\n1@p1\n1111\n");
        let (poo, _) = state
            .objects
            .iter()
            .find(|(_, object)| object.kind == ObjectKind::Poo)
            .unwrap();
        state.touch(poo);
        assert_eq!(state.stats.score, -1);
        assert_eq!(state.stats.lives, EngineConfig::default().starting_lives - 1);
        assert!(state.objects.get(poo).flags.harmless);
        assert_eq!(state.sounds, vec![Sound::Ouch]);
    }

    #[test]
    #[should_panic(expected = "no touch behaviour")]
    fn test_touching_a_flower_panics() {
        let mut state = game("4 3\n1111\n1@*1\n1111\n");
        let (flower, _) = state
            .objects
            .iter()
            .find(|(_, object)| object.kind == ObjectKind::Flower)
            .unwrap();
        state.touch(flower);
    }

    #[test]
    fn test_fly_wanders_inside_room() {
        let mut state = game("7 7\n1111111\n1@    1\n1     1\n1  f  1\n1     1\n1     1\n1111111\n");
        let (fly, _) = state
            .objects
            .iter()
            .find(|(_, object)| matches!(object.kind, ObjectKind::Fly { .. }))
            .unwrap();
        let start = state.objects.get(fly).position;

        for _ in 0..600 {
            state.update_object(fly, 1.0 / 30.0);
            let position = state.objects.get(fly).position;
            assert!(!state.is_blocked(position), "fly entered a wall at {position}");
        }
        assert_ne!(state.objects.get(fly).position, start);
        assert!((state.objects.get(fly).direction.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_fly_cannot_cross_closed_door() {
        let mut state = game("7 3\n1111111\n1@ |f 1\n1111111\n");
        let (fly, _) = state
            .objects
            .iter()
            .find(|(_, object)| matches!(object.kind, ObjectKind::Fly { .. }))
            .unwrap();
        {
            let object = state.objects.get_mut(fly);
            object.position = Vec2::new(3.57, 1.5);
            object.direction = Vec2::NEG_X;
            object.kind = ObjectKind::Fly { turn_timer: 10.0 };
        }

        // one step of 0.1 would land on the far side of the door band
        state.update_object(fly, 0.1);
        assert_eq!(state.objects.get(fly).position, Vec2::new(3.57, 1.5));
    }

    #[test]
    fn test_fly_walk_is_seeded() {
        let source = "7 7\n1111111\n1@    1\n1     1\n1  f  1\n1     1\n1     1\n1111111\n";
        let run = || {
            let mut state = game(source);
            for _ in 0..120 {
                state.run_updates(1.0 / 30.0);
            }
            state.objects.iter().map(|(_, o)| o.position).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
