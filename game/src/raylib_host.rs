//! raylib implementations of the engine's drawing and audio collaborators.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use raylib::core::audio::{RaylibAudio, Sound as Clip};
use raylib::prelude::{
    Color, RaylibDraw, RaylibDrawHandle, RaylibHandle, RaylibThread, Rectangle, Texture2D, Vector2,
};
use tracing::{debug, info, warn};
use vlk3d_engine::{Audio, Canvas, Rect, Rgba, Sound, TextureId};

const FONT_SIZE: i32 = 20;

fn to_color(color: Rgba) -> Color {
    Color::new(color.r, color.g, color.b, color.a)
}

/// Every texture the engine can ask for, loaded up front
pub struct TextureBank {
    textures: HashMap<TextureId, Texture2D>,
}

impl TextureBank {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Result<Self> {
        let mut textures = HashMap::new();
        for id in TextureId::ALL {
            let path = dir.join(id.file_name());
            let texture = rl
                .load_texture(thread, &path.to_string_lossy())
                .map_err(|err| anyhow!("failed to load texture {}: {err}", path.display()))?;
            textures.insert(id, texture);
        }
        info!(dir = %dir.display(), count = textures.len(), "textures loaded");
        Ok(Self { textures })
    }
}

/// A frame being drawn. Drawing ends when this is dropped.
pub struct RaylibCanvas<'a> {
    draw: RaylibDrawHandle<'a>,
    textures: &'a TextureBank,
}

impl<'a> RaylibCanvas<'a> {
    pub fn new(mut draw: RaylibDrawHandle<'a>, textures: &'a TextureBank) -> Self {
        draw.clear_background(Color::BLACK);
        Self { draw, textures }
    }
}

impl Canvas for RaylibCanvas<'_> {
    fn draw_textured_column(&mut self, texture: TextureId, source_u: f32, column: i32, top: i32, height: i32) {
        let Some(texture) = self.textures.textures.get(&texture) else {
            return;
        };
        let source_x = (source_u * texture.width as f32).floor();
        let source = Rectangle::new(source_x, 0.0, 1.0, texture.height as f32);
        let dest = Rectangle::new(column as f32, top as f32, 1.0, height as f32);
        self.draw
            .draw_texture_pro(texture, source, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    fn fill_rect(&mut self, color: Rgba, rect: Rect) {
        self.draw
            .draw_rectangle(rect.x, rect.y, rect.width, rect.height, to_color(color));
    }

    fn draw_text(&mut self, message: &str, position: (i32, i32), color: Rgba, outline: Rgba) {
        let (x, y) = position;
        let outline = to_color(outline);
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            self.draw.draw_text(message, x + dx, y + dy, FONT_SIZE, outline);
        }
        self.draw.draw_text(message, x, y, FONT_SIZE, to_color(color));
    }
}

/// Plays sound cues. Cues whose file could not be loaded stay silent.
pub struct Speaker<'a> {
    clips: HashMap<Sound, Clip<'a>>,
}

impl<'a> Speaker<'a> {
    pub fn load(audio: Option<&'a RaylibAudio>, dir: &Path) -> Self {
        let mut clips = HashMap::new();
        if let Some(audio) = audio {
            for sound in Sound::ALL {
                let path = dir.join(sound.file_name());
                match audio.new_sound(&path.to_string_lossy()) {
                    Ok(clip) => {
                        clips.insert(sound, clip);
                    }
                    Err(err) => warn!(path = %path.display(), "failed to load sound: {err}"),
                }
            }
        }
        Self { clips }
    }
}

impl Audio for Speaker<'_> {
    fn play_sound(&mut self, sound: Sound) {
        match self.clips.get(&sound) {
            Some(clip) => clip.play(),
            None => debug!(?sound, "no clip loaded"),
        }
    }
}
