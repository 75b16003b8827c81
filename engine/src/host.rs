//! Contracts between the engine and the platform layer hosting it.
//!
//! The engine never touches a window, a sound device or a keyboard. Each frame
//! it hands vertical strips, rectangles and text to a [`Canvas`], sound cues to
//! an [`Audio`] sink, and it receives discrete [`Command`]s from the host.

use serde::{Deserialize, Serialize};

/// RGBA colour understood by the draw collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Screen-space rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Every texture the engine may ask the host to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Wall1,
    Wall2,
    Wall3,
    Door,
    Poo,
    PooDead,
    Fly,
    FlyDead,
    Coin,
    Flower,
    Projectile,
}

impl TextureId {
    pub const ALL: [TextureId; 11] = [
        TextureId::Wall1,
        TextureId::Wall2,
        TextureId::Wall3,
        TextureId::Door,
        TextureId::Poo,
        TextureId::PooDead,
        TextureId::Fly,
        TextureId::FlyDead,
        TextureId::Coin,
        TextureId::Flower,
        TextureId::Projectile,
    ];

    /// File name the host is expected to load this texture from.
    pub fn file_name(self) -> &'static str {
        match self {
            TextureId::Wall1 => "wall1.png",
            TextureId::Wall2 => "wall2.png",
            TextureId::Wall3 => "wall3.png",
            TextureId::Door => "door.png",
            TextureId::Poo => "poo.png",
            TextureId::PooDead => "poo_dead.png",
            TextureId::Fly => "fly.png",
            TextureId::FlyDead => "fly_dead.png",
            TextureId::Coin => "coin.png",
            TextureId::Flower => "flower.png",
            TextureId::Projectile => "projectile.png",
        }
    }
}

/// Named sound cues emitted by gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Fire,
    Splat,
    Coin,
    Ouch,
    Door,
}

impl Sound {
    pub const ALL: [Sound; 5] = [Sound::Fire, Sound::Splat, Sound::Coin, Sound::Ouch, Sound::Door];

    pub fn file_name(self) -> &'static str {
        match self {
            Sound::Fire => "fire.wav",
            Sound::Splat => "splat.wav",
            Sound::Coin => "coin.wav",
            Sound::Ouch => "ouch.wav",
            Sound::Door => "door.wav",
        }
    }
}

/// Discrete input commands, delivered once per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Fire,
    Quit,
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No harmful objects remain.
    Win,
    /// The player ran out of lives.
    Die,
    /// The player quit.
    Abort,
}

/// Draw collaborator.
pub trait Canvas {
    /// Draw one screen column of `texture`, sampling the texture column at
    /// `source_u` (in `[0, 1)`) and stretching it over `height` pixels from
    /// `top`.
    fn draw_textured_column(
        &mut self,
        texture: TextureId,
        source_u: f32,
        column: i32,
        top: i32,
        height: i32,
    );

    fn fill_rect(&mut self, color: Rgba, rect: Rect);

    fn draw_text(&mut self, message: &str, position: (i32, i32), color: Rgba, outline: Rgba);
}

/// Audio collaborator. Fire-and-forget.
pub trait Audio {
    fn play_sound(&mut self, sound: Sound);
}
