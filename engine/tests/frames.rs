//! Whole-frame behaviour driven through the public API with a recording host.

use vlk3d_engine::game::Object;
use vlk3d_engine::{
    Audio, Canvas, Command, EngineConfig, GameState, Level, Outcome, Rect, Rgba, Sound, TextureId,
};

#[derive(Debug, Clone, PartialEq)]
enum Draw {
    Column(TextureId),
    Fill(Rect),
    Text(String),
}

#[derive(Default)]
struct Recorder {
    draws: Vec<Draw>,
    sounds: Vec<Sound>,
}

impl Recorder {
    fn columns_of(&self, texture: TextureId) -> Vec<usize> {
        self.draws
            .iter()
            .enumerate()
            .filter(|(_, draw)| **draw == Draw::Column(texture))
            .map(|(index, _)| index)
            .collect()
    }
}

impl Canvas for Recorder {
    fn draw_textured_column(&mut self, texture: TextureId, _source_u: f32, _column: i32, _top: i32, _height: i32) {
        self.draws.push(Draw::Column(texture));
    }

    fn fill_rect(&mut self, _color: Rgba, rect: Rect) {
        self.draws.push(Draw::Fill(rect));
    }

    fn draw_text(&mut self, message: &str, _position: (i32, i32), _color: Rgba, _outline: Rgba) {
        self.draws.push(Draw::Text(message.to_string()));
    }
}

#[derive(Default)]
struct Speaker(Vec<Sound>);

impl Audio for Speaker {
    fn play_sound(&mut self, sound: Sound) {
        self.0.push(sound);
    }
}

const FRAME: f32 = 1.0 / 60.0;

fn config() -> EngineConfig {
    EngineConfig {
        screen_width: 128,
        screen_height: 96,
        ..EngineConfig::default()
    }
}

fn frame(game: &mut GameState) -> (Option<Outcome>, Recorder) {
    let mut canvas = Recorder::default();
    let mut speaker = Speaker::default();
    let outcome = game.frame(FRAME, &mut canvas, &mut speaker);
    canvas.sounds = speaker.0;
    (outcome, canvas)
}

#[test]
fn test_level_without_hazards_wins_immediately() {
    let mut game = GameState::new("3 3\n111\n1@1\n111\n".parse().unwrap(), config());
    let (outcome, recorded) = frame(&mut game);
    assert_eq!(outcome, Some(Outcome::Win));
    assert!(recorded.draws.is_empty());
    assert_eq!(game.outcome(), Some(Outcome::Win));
}

#[test]
fn test_last_life_lost_on_last_hazard_is_a_death() {
    let mut level: Level = "4 3\n1111\n1@ 1\n1111\n".parse().unwrap();
    level.objects.try_push(Object::poo(level.player_start)).unwrap();
    let mut game = GameState::new(
        level,
        EngineConfig {
            starting_lives: 1,
            ..config()
        },
    );

    let (outcome, recorded) = frame(&mut game);

    // no hazards remain either, but dying takes precedence
    assert_eq!(outcome, Some(Outcome::Die));
    assert!(recorded.draws.is_empty());
    assert_eq!(recorded.sounds, vec![Sound::Ouch]);
    assert_eq!(game.stats().lives, 0);
}

#[test]
fn test_touching_a_hazard_costs_a_life_and_play_continues() {
    let mut level: Level = "8 3\n11111111\n1@    p1\n11111111\n".parse().unwrap();
    level.objects.try_push(Object::poo(level.player_start)).unwrap();
    let mut game = GameState::new(level, config());

    let (outcome, recorded) = frame(&mut game);

    assert_eq!(outcome, None);
    assert_eq!(game.stats().lives, 2);
    assert_eq!(game.stats().score, -1);
    assert_eq!(recorded.sounds, vec![Sound::Ouch]);
    assert_eq!(recorded.draws[0], Draw::Fill(Rect::new(0, 0, 128, 48)));
    assert_eq!(recorded.draws[1], Draw::Fill(Rect::new(0, 48, 128, 48)));
    assert_eq!(
        recorded.draws.last(),
        Some(&Draw::Text("Score: -1   Lives: 2   Left: 1".to_string()))
    );
}

#[test]
fn test_sprites_painted_far_to_near_over_walls() {
    let mut game = GameState::new("10 3\n1111111111\n1@  *  p 1\n1111111111\n".parse().unwrap(), config());

    let (outcome, recorded) = frame(&mut game);
    assert_eq!(outcome, None);

    let walls = recorded.columns_of(TextureId::Wall1);
    let poo = recorded.columns_of(TextureId::Poo);
    let flower = recorded.columns_of(TextureId::Flower);
    assert_eq!(walls.len(), 128);
    assert!(!poo.is_empty());
    assert!(!flower.is_empty());
    assert!(walls.last() < poo.first());
    assert!(poo.last() < flower.first());
}

#[test]
fn test_sprite_behind_wall_is_hidden() {
    let mut game = GameState::new("8 3\n11111111\n1@ 1 p 1\n11111111\n".parse().unwrap(), config());

    let (outcome, recorded) = frame(&mut game);

    assert_eq!(outcome, None);
    assert!(recorded.columns_of(TextureId::Poo).is_empty());
    assert!(!recorded.columns_of(TextureId::Wall1).is_empty());
}

#[test]
fn test_shooting_a_door_opens_the_way() {
    let mut game = GameState::new("8 3\n11111111\n1@ |  p1\n11111111\n".parse().unwrap(), config());
    let door = game
        .objects()
        .iter()
        .find(|(_, object)| object.door_state().is_some())
        .map(|(id, _)| id)
        .unwrap();

    // the closed door stops the player
    for _ in 0..30 {
        game.handle_command(Command::MoveForward);
    }
    assert!(game.player().position.x < 3.5);

    assert_eq!(game.handle_command(Command::Fire), None);
    let mut sounds = Vec::new();
    for _ in 0..180 {
        let (outcome, recorded) = frame(&mut game);
        assert_eq!(outcome, None);
        sounds.extend(recorded.sounds);
    }
    assert_eq!(sounds, vec![Sound::Fire, Sound::Door]);
    assert_eq!(game.objects().door_width(door), 0.0);

    for _ in 0..10 {
        game.handle_command(Command::MoveForward);
    }
    assert!(game.player().position.x > 3.9, "stuck at {}", game.player().position);
}

#[test]
fn test_quit_ends_the_game() {
    let mut game = GameState::new("8 3\n11111111\n1@    p1\n11111111\n".parse().unwrap(), config());
    assert_eq!(game.handle_command(Command::Quit), Some(Outcome::Abort));

    let (outcome, recorded) = frame(&mut game);
    assert_eq!(outcome, Some(Outcome::Abort));
    assert!(recorded.draws.is_empty());
}

#[test]
fn test_bundled_level_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../levels/level1.txt");
    let mut game = GameState::new(Level::load(path).unwrap(), config());
    assert!(game.objects().remaining_hazards() > 0);

    let (outcome, recorded) = frame(&mut game);
    assert_eq!(outcome, None);
    assert!(!recorded.draws.is_empty());
}
