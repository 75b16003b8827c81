use glam::Vec2;

use crate::host::TextureId;
use crate::raycaster::DoorOrientation;

/// Stable index into an [`ObjectSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    /// Slot reserved for the player's projectile
    pub const PROJECTILE: ObjectId = ObjectId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Sliding door payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorState {
    pub orientation: DoorOrientation,
    pub opening: bool,
    /// 1.0 fully closed, 0.0 fully open
    pub width: f32,
}

/// Object variant with its kind-specific payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    /// Stationary hazard
    Poo,
    /// Roaming hazard
    Fly { turn_timer: f32 },
    Projectile,
    Door(DoorState),
    Coin,
    /// Decorative harmless prop
    Flower,
}

/// Which behaviours the frame loop runs for an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub updateable: bool,
    pub hittable: bool,
    pub touchable: bool,
    pub visible: bool,
    pub harmless: bool,
}

/// Anything in the level that is not a plain wall
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub kind: ObjectKind,
    pub texture: TextureId,
    pub position: Vec2,
    /// Unit heading for moving objects, zero otherwise
    pub direction: Vec2,
    pub hit_radius: f32,
    pub touch_radius: f32,
    /// Sprite size relative to a wall seen at the same distance
    pub scale: f32,
    pub flags: Capabilities,
}

impl Object {
    pub fn poo(position: Vec2) -> Self {
        Self {
            kind: ObjectKind::Poo,
            texture: TextureId::Poo,
            position,
            direction: Vec2::ZERO,
            hit_radius: 0.4,
            touch_radius: 0.5,
            scale: 0.6,
            flags: Capabilities {
                hittable: true,
                touchable: true,
                visible: true,
                ..Capabilities::default()
            },
        }
    }

    /// Starts without a heading; the first update picks one
    pub fn fly(position: Vec2) -> Self {
        Self {
            kind: ObjectKind::Fly { turn_timer: 0.0 },
            texture: TextureId::Fly,
            position,
            direction: Vec2::ZERO,
            hit_radius: 0.4,
            touch_radius: 0.5,
            scale: 0.5,
            flags: Capabilities {
                updateable: true,
                hittable: true,
                touchable: true,
                visible: true,
                harmless: false,
            },
        }
    }

    /// Doors are drawn by the ray caster, never as sprites
    pub fn door(position: Vec2, orientation: DoorOrientation) -> Self {
        Self {
            kind: ObjectKind::Door(DoorState {
                orientation,
                opening: false,
                width: 1.0,
            }),
            texture: TextureId::Door,
            position,
            direction: Vec2::ZERO,
            hit_radius: 0.5,
            touch_radius: 0.0,
            scale: 1.0,
            flags: Capabilities {
                hittable: true,
                harmless: true,
                ..Capabilities::default()
            },
        }
    }

    pub fn coin(position: Vec2) -> Self {
        Self {
            kind: ObjectKind::Coin,
            texture: TextureId::Coin,
            position,
            direction: Vec2::ZERO,
            hit_radius: 0.0,
            touch_radius: 0.5,
            scale: 0.3,
            flags: Capabilities {
                touchable: true,
                visible: true,
                harmless: true,
                ..Capabilities::default()
            },
        }
    }

    pub fn flower(position: Vec2) -> Self {
        Self {
            kind: ObjectKind::Flower,
            texture: TextureId::Flower,
            position,
            direction: Vec2::ZERO,
            hit_radius: 0.0,
            touch_radius: 0.0,
            scale: 0.7,
            flags: Capabilities {
                visible: true,
                harmless: true,
                ..Capabilities::default()
            },
        }
    }

    /// Inactive projectile, respawned by each shot
    pub fn projectile() -> Self {
        Self {
            kind: ObjectKind::Projectile,
            texture: TextureId::Projectile,
            position: Vec2::ZERO,
            direction: Vec2::ZERO,
            hit_radius: 0.0,
            touch_radius: 0.0,
            scale: 0.15,
            flags: Capabilities {
                harmless: true,
                ..Capabilities::default()
            },
        }
    }

    pub fn is_hazard(&self) -> bool {
        matches!(self.kind, ObjectKind::Poo | ObjectKind::Fly { .. })
    }

    pub fn door_state(&self) -> Option<&DoorState> {
        match &self.kind {
            ObjectKind::Door(state) => Some(state),
            _ => None,
        }
    }

    pub fn door_state_mut(&mut self) -> Option<&mut DoorState> {
        match &mut self.kind {
            ObjectKind::Door(state) => Some(state),
            _ => None,
        }
    }

    /// Dead enemies stay in the level as harmless, inert sprites
    pub fn kill(&mut self) {
        self.flags.harmless = true;
        self.flags.hittable = false;
        self.flags.touchable = false;
        self.flags.updateable = false;
        self.texture = match self.texture {
            TextureId::Poo => TextureId::PooDead,
            TextureId::Fly => TextureId::FlyDead,
            other => other,
        };
    }
}

/// Arena of every object in a level.
///
/// Objects are never removed, so an `ObjectId` stays valid for the lifetime of
/// the level. Slot 0 always holds the projectile.
#[derive(Debug, Clone)]
pub struct ObjectSet {
    objects: Vec<Object>,
}

impl ObjectSet {
    /// Maximum number of objects, projectile included
    pub const CAPACITY: usize = 256;

    pub fn new() -> Self {
        let mut objects = Vec::with_capacity(Self::CAPACITY);
        objects.push(Object::projectile());
        Self { objects }
    }

    /// Append an object, or `None` once the table is full
    pub fn try_push(&mut self, object: Object) -> Option<ObjectId> {
        if self.objects.len() >= Self::CAPACITY {
            return None;
        }
        self.objects.push(object);
        Some(ObjectId(self.objects.len() - 1))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    pub fn get_mut(&mut self, id: ObjectId) -> &mut Object {
        &mut self.objects[id.0]
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> {
        (0..self.objects.len()).map(ObjectId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    pub fn projectile(&self) -> &Object {
        self.get(ObjectId::PROJECTILE)
    }

    /// Remaining closed fraction of a door; non-doors count as open
    pub fn door_width(&self, id: ObjectId) -> f32 {
        self.objects
            .get(id.0)
            .and_then(Object::door_state)
            .map_or(0.0, |door| door.width)
    }

    /// Objects still able to hurt the player
    pub fn remaining_hazards(&self) -> usize {
        self.objects.iter().filter(|object| !object.flags.harmless).count()
    }

    /// First hittable object, in collection order, whose hit radius contains
    /// `point`. Nearer objects later in the collection do not take precedence.
    pub fn first_hittable_at(&self, point: Vec2) -> Option<ObjectId> {
        self.iter()
            .find(|(_, object)| {
                object.flags.hittable && object.position.distance(point) < object.hit_radius
            })
            .map(|(id, _)| id)
    }

    /// Touchable objects whose touch radius contains `point`
    pub fn touchable_at(&self, point: Vec2) -> Vec<ObjectId> {
        self.iter()
            .filter(|(_, object)| {
                object.flags.touchable && object.position.distance(point) < object.touch_radius
            })
            .map(|(id, _)| id)
            .collect()
    }
}

impl Default for ObjectSet {
    fn default() -> Self {
        Self::new()
    }
}
