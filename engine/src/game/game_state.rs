use std::path::Path;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::objects::{Capabilities, Object, ObjectId, ObjectSet};
use super::player::Player;
use crate::config::EngineConfig;
use crate::error::LevelError;
use crate::host::{Audio, Canvas, Command, Outcome, Sound};
use crate::map::Level;
use crate::raycaster::{is_collision, DepthBuffer, GridMap, Raycaster};

/// Score and remaining lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Coins add to it, touching hazards takes from it
    pub score: i32,
    pub lives: u32,
}

/// Everything that changes while a level is played.
///
/// Owns the map, the object arena, the player and the depth buffer; the host
/// feeds it commands and calls [`GameState::frame`] once per frame.
pub struct GameState {
    pub(crate) config: EngineConfig,
    pub(crate) map: GridMap,
    pub(crate) objects: ObjectSet,
    pub(crate) player: Player,
    pub(crate) stats: Stats,
    /// Sound cues raised since the last flush
    pub(crate) sounds: Vec<Sound>,
    pub(crate) rng: StdRng,
    raycaster: Raycaster,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Create a game state from a parsed level
    pub fn new(level: Level, config: EngineConfig) -> Self {
        let Level {
            map,
            objects,
            player_start,
        } = level;

        Self {
            raycaster: Raycaster::new(&config),
            rng: StdRng::seed_from_u64(config.seed),
            stats: Stats {
                score: 0,
                lives: config.starting_lives,
            },
            player: Player::new(player_start, 0.0),
            sounds: Vec::new(),
            outcome: None,
            map,
            objects,
            config,
        }
    }

    /// Load a level file and start playing it
    pub fn load(path: impl AsRef<Path>, config: EngineConfig) -> Result<Self, LevelError> {
        Ok(Self::new(Level::load(path)?, config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn objects(&self) -> &ObjectSet {
        &self.objects
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn depth_buffer(&self) -> &DepthBuffer {
        self.raycaster.depth_buffer()
    }

    /// True once every harmful object has been dealt with
    pub fn has_no_things_to_do(&self) -> bool {
        self.objects.remaining_hazards() == 0
    }

    /// Apply one input command. Commands after the game ended are ignored.
    pub fn handle_command(&mut self, command: Command) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        match command {
            Command::MoveForward => self.walk(self.config.move_speed),
            Command::MoveBackward => self.walk(-self.config.move_speed),
            Command::TurnLeft => self.player.turn(-self.config.turn_speed),
            Command::TurnRight => self.player.turn(self.config.turn_speed),
            Command::Fire => self.fire(),
            Command::Quit => self.finish(Outcome::Abort),
        }

        self.outcome
    }

    fn walk(&mut self, distance: f32) {
        let map = &self.map;
        let objects = &self.objects;
        self.player
            .step(distance, |to| is_collision(map, objects, to.x, to.y).is_some());
    }

    /// Launch the projectile from the player, unless one is already in flight
    pub fn fire(&mut self) {
        let position = self.player.position;
        let direction = self.player.direction();
        if self.projectile_in_flight() {
            return;
        }

        *self.objects.get_mut(ObjectId::PROJECTILE) = Object {
            position,
            direction,
            flags: Capabilities {
                updateable: true,
                visible: true,
                harmless: true,
                ..Default::default()
            },
            ..Object::projectile()
        };
        self.sounds.push(Sound::Fire);
        debug!(x = position.x, y = position.y, "projectile fired");
    }

    /// Run `update` on every updateable object, in collection order
    pub fn run_updates(&mut self, elapsed: f32) {
        for id in self.objects.ids().collect::<Vec<_>>() {
            if self.objects.get(id).flags.updateable {
                self.update_object(id, elapsed);
            }
        }
    }

    /// Touch every touchable object within reach of the player
    pub fn run_touches(&mut self) {
        for id in self.objects.touchable_at(self.player.position) {
            self.touch(id);
        }
    }

    /// Advance the simulation by `elapsed` seconds without drawing anything
    pub fn update(&mut self, elapsed: f32) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        self.run_updates(elapsed);
        self.run_touches();

        if self.stats.lives == 0 {
            self.finish(Outcome::Die);
        } else if self.has_no_things_to_do() {
            self.finish(Outcome::Win);
        }
        self.outcome
    }

    /// Run one frame: update, flush sounds and, while the game is still on,
    /// draw background, walls, sprites and HUD.
    pub fn frame(
        &mut self,
        elapsed: f32,
        canvas: &mut dyn Canvas,
        audio: &mut dyn Audio,
    ) -> Option<Outcome> {
        let outcome = self.update(elapsed);
        for sound in self.sounds.drain(..) {
            audio.play_sound(sound);
        }
        if outcome.is_some() {
            return outcome;
        }

        self.raycaster.render_background(canvas);
        self.raycaster
            .render_walls(canvas, &self.map, &self.objects, &self.player);
        let sprites = self.raycaster.project_sprites(&self.objects, &self.player);
        self.raycaster.render_sprites(canvas, &sprites);
        self.render_hud(canvas);

        None
    }

    fn render_hud(&self, canvas: &mut dyn Canvas) {
        let message = format!(
            "Score: {}   Lives: {}   Left: {}",
            self.stats.score,
            self.stats.lives,
            self.objects.remaining_hazards()
        );
        canvas.draw_text(
            &message,
            (16, 16),
            self.config.hud_color,
            self.config.hud_outline_color,
        );
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(?outcome, score = self.stats.score, lives = self.stats.lives, "game over");
        self.outcome = Some(outcome);
    }

    pub(crate) fn is_blocked(&self, point: Vec2) -> bool {
        is_collision(&self.map, &self.objects, point.x, point.y).is_some()
    }

    pub(crate) fn projectile_in_flight(&self) -> bool {
        self.objects.projectile().flags.updateable
    }
}
