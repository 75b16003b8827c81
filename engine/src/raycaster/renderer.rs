use super::caster::{cast_ray, fisheye_corrected, projected_height};
use super::map2d::GridMap;
use crate::config::EngineConfig;
use crate::game::{signed_angle, ObjectId, ObjectSet, Player};
use crate::host::{Canvas, Rect, Rgba, TextureId};

/// Sprites closer than this are skipped to avoid unbounded projections
const MIN_SPRITE_DISTANCE: f32 = 0.1;

/// Projected wall height per screen column.
/// Rebuilt by the wall pass, read by the sprite pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    heights: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(columns: usize) -> Self {
        Self {
            heights: vec![0.0; columns],
        }
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn clear(&mut self) {
        self.heights.fill(0.0);
    }

    pub fn record(&mut self, column: usize, height: f32) {
        if let Some(slot) = self.heights.get_mut(column) {
            *slot = height;
        }
    }

    /// 0.0 when the column's ray hit nothing
    pub fn wall_height(&self, column: usize) -> f32 {
        self.heights.get(column).copied().unwrap_or(0.0)
    }

    /// A sprite is hidden in a column whose wall projects taller than it
    pub fn occludes(&self, column: usize, sprite_height: f32) -> bool {
        sprite_height < self.wall_height(column)
    }
}

/// A visible object placed on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteProjection {
    pub id: ObjectId,
    pub texture: TextureId,
    /// Fisheye-corrected distance from the player
    pub distance: f32,
    /// Screen x of the sprite centre
    pub screen_x: f32,
    /// Height a wall would project at this distance, used for occlusion
    pub depth_height: f32,
    /// Drawn width and height in pixels
    pub size: f32,
}

/// Column renderer shared by the wall and sprite passes
pub struct Raycaster {
    /// Screen width
    width: i32,
    /// Screen height
    height: i32,
    fov: f32,
    max_distance: f32,
    ray_step: f32,
    ceiling: Rgba,
    floor: Rgba,
    depth: DepthBuffer,
}

impl Raycaster {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            width: config.screen_width,
            height: config.screen_height,
            fov: config.fov,
            max_distance: config.max_distance,
            ray_step: config.ray_step,
            ceiling: config.ceiling_color,
            floor: config.floor_color,
            depth: DepthBuffer::new(config.screen_width.max(0) as usize),
        }
    }

    pub fn depth_buffer(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Ray angle for a screen column, interpolated across `facing ± fov/2`
    pub fn column_angle(&self, facing: f32, column: i32) -> f32 {
        facing - self.fov / 2.0 + self.fov * column as f32 / self.width as f32
    }

    /// Flat ceiling and floor, split at the horizon
    pub fn render_background(&self, canvas: &mut dyn Canvas) {
        let horizon = self.height / 2;
        canvas.fill_rect(self.ceiling, Rect::new(0, 0, self.width, horizon));
        canvas.fill_rect(self.floor, Rect::new(0, horizon, self.width, self.height - horizon));
    }

    /// Cast one ray per column, draw the textured wall strip and record its
    /// height in the depth buffer
    pub fn render_walls(
        &mut self,
        canvas: &mut dyn Canvas,
        map: &GridMap,
        objects: &ObjectSet,
        player: &Player,
    ) {
        self.depth.clear();
        let facing = player.facing();

        for column in 0..self.width {
            let angle = self.column_angle(facing, column);
            let Some(hit) = cast_ray(
                map,
                objects,
                player.position,
                angle,
                self.max_distance,
                self.ray_step,
            ) else {
                continue;
            };

            let corrected = fisheye_corrected(hit.distance, facing, angle);
            let line_height = projected_height(self.height, corrected);
            self.depth.record(column as usize, line_height);

            let top = (self.height as f32 - line_height) / 2.0;
            canvas.draw_textured_column(
                hit.surface.texture(),
                hit.tex_offset,
                column,
                top.round() as i32,
                line_height.round() as i32,
            );
        }
    }

    /// Visible objects inside the field of view, sorted far-to-near so that
    /// nearer sprites paint over farther ones
    pub fn project_sprites(&self, objects: &ObjectSet, player: &Player) -> Vec<SpriteProjection> {
        let mut sprites: Vec<SpriteProjection> = objects
            .iter()
            .filter(|(_, object)| object.flags.visible)
            .filter_map(|(id, object)| {
                let offset = object.position - player.position;
                let distance = offset.length();
                if distance < MIN_SPRITE_DISTANCE {
                    return None;
                }

                let relative = signed_angle(offset.y.atan2(offset.x) - player.facing());
                if relative.abs() >= self.fov / 2.0 {
                    return None;
                }

                let corrected = distance * relative.cos();
                let depth_height = projected_height(self.height, corrected);
                Some(SpriteProjection {
                    id,
                    texture: object.texture,
                    distance: corrected,
                    screen_x: (relative / self.fov + 0.5) * self.width as f32,
                    depth_height,
                    size: depth_height * object.scale,
                })
            })
            .collect();

        sprites.sort_by(|a, b| b.distance.total_cmp(&a.distance));
        sprites
    }

    /// Draw sprites in the given order, column by column, skipping columns
    /// where the wall is nearer than the sprite or that fall off screen
    pub fn render_sprites(&self, canvas: &mut dyn Canvas, sprites: &[SpriteProjection]) {
        for sprite in sprites {
            if sprite.size < 1.0 {
                continue;
            }
            let left_edge = sprite.screen_x - sprite.size / 2.0;
            let first = left_edge.floor().max(0.0) as i32;
            let last = ((sprite.screen_x + sprite.size / 2.0).ceil() as i32).min(self.width);
            let top = ((self.height as f32 - sprite.size) / 2.0).round() as i32;
            let height = sprite.size.round() as i32;

            for column in first..last {
                if self.depth.occludes(column as usize, sprite.depth_height) {
                    continue;
                }
                let source_u = ((column as f32 + 0.5 - left_edge) / sprite.size).clamp(0.0, 0.999);
                canvas.draw_textured_column(sprite.texture, source_u, column, top, height);
            }
        }
    }
}
