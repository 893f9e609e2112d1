//! Section groups, placeholder rooms, floating sprites and the star field.
//!
//! Everything here is positioned in a section's local frame and moved into
//! world space by that section's group transform: a vertical offset of
//! `-SECTION_GAP * i` plus a slow idle sway around Y.

use crate::constants::{
    star_span_y, GROUP_SWAY_AMPLITUDE, GROUP_SWAY_PHASE_STEP, GROUP_SWAY_SPEED, SECTION_COUNT,
    SECTION_GAP, SPRITE_BOB_AMPLITUDE, SPRITE_BOB_SPEED, SPRITE_SPIN_AMPLITUDE, SPRITE_SPIN_SPEED,
    STAR_COUNT, STAR_OPACITY, STAR_SIZE, STAR_SPAN_X, STAR_SPAN_Z,
};
use crate::gpu::{BillboardInstance, Shape};
use glam::{Quat, Vec3};
use rand::prelude::*;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::TAU;

/// World-space origin of a section group.
#[inline]
pub fn group_origin(section: usize) -> Vec3 {
    Vec3::new(0.0, -SECTION_GAP * section as f32, 0.0)
}

/// Idle sway angle (radians about Y) of a section group.
#[inline]
pub fn group_sway(elapsed_sec: f32, section: usize) -> f32 {
    (elapsed_sec * GROUP_SWAY_SPEED + section as f32 * GROUP_SWAY_PHASE_STEP).sin()
        * GROUP_SWAY_AMPLITUDE
}

/// Vertical bob added to a sprite's base height.
#[inline]
pub fn sprite_bob(elapsed_sec: f32, phase: f32) -> f32 {
    (elapsed_sec * SPRITE_BOB_SPEED + phase).sin() * SPRITE_BOB_AMPLITUDE
}

/// Sprite roll around the view axis.
#[inline]
pub fn sprite_spin(elapsed_sec: f32, phase: f32) -> f32 {
    (elapsed_sec * SPRITE_SPIN_SPEED + phase).sin() * SPRITE_SPIN_AMPLITUDE
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Bubble,
    Heart,
    Tone0,
    Tone1,
    Tone2,
    NewMessage,
    BubblePop,
}

impl SpriteKind {
    /// Flat tint standing in for the sprite texture.
    pub fn tint(self) -> [f32; 4] {
        match self {
            SpriteKind::Bubble => [0.75, 0.9, 1.0, 0.85],
            SpriteKind::Heart => [1.0, 0.35, 0.45, 0.95],
            SpriteKind::Tone0 => [0.55, 0.85, 0.6, 0.9],
            SpriteKind::Tone1 => [0.95, 0.8, 0.4, 0.9],
            SpriteKind::Tone2 => [0.6, 0.6, 1.0, 0.9],
            SpriteKind::NewMessage => [1.0, 0.65, 0.3, 0.95],
            SpriteKind::BubblePop => [0.85, 0.95, 1.0, 0.7],
        }
    }
}

/// Static sprite placement in a section's local frame.
#[derive(Clone, Copy, Debug)]
pub struct SpriteSpec {
    pub section: usize,
    pub kind: SpriteKind,
    pub base: Vec3,
    pub size: f32,
}

const fn sprite(
    section: usize,
    kind: SpriteKind,
    x: f32,
    y: f32,
    z: f32,
    size: f32,
) -> SpriteSpec {
    SpriteSpec {
        section,
        kind,
        base: Vec3::new(x, y, z),
        size,
    }
}

// About section floats around the character, contact section around the desk.
pub const PORTFOLIO_SPRITES: [SpriteSpec; 8] = [
    sprite(1, SpriteKind::Bubble, 1.6, 0.5, 1.2, 0.38),
    sprite(1, SpriteKind::Heart, -1.6, 0.9, 0.8, 0.32),
    sprite(1, SpriteKind::Tone0, 1.3, -0.1, 1.0, 0.28),
    sprite(1, SpriteKind::Tone1, -1.2, 0.3, 1.1, 0.28),
    sprite(1, SpriteKind::Tone2, 0.4, 1.1, 0.9, 0.24),
    sprite(3, SpriteKind::NewMessage, 1.5, 0.7, 1.2, 0.42),
    sprite(3, SpriteKind::BubblePop, -1.4, 0.4, 0.9, 0.36),
    sprite(3, SpriteKind::Bubble, 0.6, 1.0, 0.8, 0.30),
];

#[derive(Clone, Copy, Debug)]
pub struct FloatingSprite {
    pub spec: SpriteSpec,
    pub phase: f32,
}

impl FloatingSprite {
    /// Local-frame position at `elapsed_sec`.
    pub fn local_position(&self, elapsed_sec: f32) -> Vec3 {
        let mut p = self.spec.base;
        p.y += sprite_bob(elapsed_sec, self.phase);
        p
    }
}

/// One tinted panel of a placeholder room, relative to the room origin.
#[derive(Clone, Copy, Debug)]
pub struct RoomPanel {
    pub offset: Vec3,
    pub size: f32,
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomKind {
    Room,
    Character,
    Lab,
    Contact,
}

/// Placeholder for a section's baked model.
#[derive(Clone, Debug)]
pub struct Room {
    pub section: usize,
    pub kind: RoomKind,
    pub origin: Vec3,
    pub scale: f32,
    pub panels: SmallVec<[RoomPanel; 4]>,
}

fn panel(x: f32, y: f32, z: f32, size: f32, color: [f32; 4]) -> RoomPanel {
    RoomPanel {
        offset: Vec3::new(x, y, z),
        size,
        color,
    }
}

impl Room {
    pub fn new(section: usize, kind: RoomKind, origin: Vec3, scale: f32) -> Self {
        let panels: SmallVec<[RoomPanel; 4]> = match kind {
            RoomKind::Room => smallvec![
                panel(0.0, 0.45, -0.4, 1.2, [0.16, 0.18, 0.3, 1.0]),
                panel(-0.2, 0.3, 0.1, 0.5, [0.85, 0.55, 0.3, 1.0]),
                panel(0.35, 0.55, 0.2, 0.3, [0.4, 0.8, 1.0, 1.0]),
            ],
            RoomKind::Character => smallvec![
                panel(0.0, 1.05, 0.0, 0.35, [0.95, 0.78, 0.65, 1.0]),
                panel(0.0, 0.65, 0.0, 0.5, [0.3, 0.45, 0.85, 1.0]),
                panel(0.0, 0.25, 0.0, 0.4, [0.2, 0.2, 0.28, 1.0]),
            ],
            RoomKind::Lab => smallvec![
                panel(0.0, 0.45, -0.4, 1.2, [0.12, 0.2, 0.22, 1.0]),
                panel(-0.3, 0.35, 0.1, 0.4, [0.3, 0.95, 0.7, 1.0]),
                panel(0.3, 0.3, 0.15, 0.35, [0.9, 0.4, 0.8, 1.0]),
                panel(0.0, 0.7, 0.0, 0.2, [1.0, 1.0, 0.7, 1.0]),
            ],
            RoomKind::Contact => smallvec![
                panel(0.0, 0.45, -0.4, 1.1, [0.22, 0.14, 0.24, 1.0]),
                panel(0.0, 0.3, 0.15, 0.45, [0.95, 0.6, 0.35, 1.0]),
            ],
        };
        Self {
            section,
            kind,
            origin,
            scale,
            panels,
        }
    }
}

/// Room placeholders at the offsets and scales of the room models.
pub fn portfolio_rooms() -> Vec<Room> {
    vec![
        Room::new(0, RoomKind::Room, Vec3::new(0.8, -1.2, 0.0), 1.5),
        Room::new(1, RoomKind::Character, Vec3::new(-1.0, -1.6, 0.0), 1.8),
        Room::new(2, RoomKind::Lab, Vec3::new(0.8, -1.2, 0.0), 1.4),
        Room::new(3, RoomKind::Contact, Vec3::new(0.0, -1.0, 0.0), 1.6),
    ]
}

/// Uniformly scattered background stars, reproducible for a given seed.
pub fn star_field(count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let span_y = star_span_y();
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * STAR_SPAN_X,
                (rng.gen::<f32>() - 0.5) * span_y,
                (rng.gen::<f32>() - 0.5) * STAR_SPAN_Z,
            )
        })
        .collect()
}

/// Everything the renderer draws besides the clear colour.
#[derive(Clone, Debug)]
pub struct Scene {
    pub rooms: Vec<Room>,
    pub sprites: Vec<FloatingSprite>,
    pub stars: Vec<Vec3>,
    pub section_count: usize,
}

impl Scene {
    /// The four-section scroll page.
    pub fn portfolio(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
        let sprites = PORTFOLIO_SPRITES
            .iter()
            .map(|spec| FloatingSprite {
                spec: *spec,
                phase: rng.gen::<f32>() * TAU,
            })
            .collect();
        let scene = Self {
            rooms: portfolio_rooms(),
            sprites,
            stars: star_field(STAR_COUNT, seed),
            section_count: SECTION_COUNT,
        };
        log::debug!(
            "[scene] {} rooms, {} sprites, {} stars",
            scene.rooms.len(),
            scene.sprites.len(),
            scene.stars.len()
        );
        scene
    }

    /// Single lab placeholder at the origin for the model viewer page.
    pub fn viewer() -> Self {
        Self {
            rooms: vec![Room::new(0, RoomKind::Lab, Vec3::ZERO, 1.0)],
            sprites: Vec::new(),
            stars: Vec::new(),
            section_count: 1,
        }
    }

    /// Transform of section `section`'s group at `elapsed_sec`. The viewer
    /// scene has a single static group.
    fn group_transform(&self, section: usize, elapsed_sec: f32) -> (Vec3, Quat) {
        if self.section_count <= 1 {
            return (Vec3::ZERO, Quat::IDENTITY);
        }
        (
            group_origin(section),
            Quat::from_rotation_y(group_sway(elapsed_sec, section)),
        )
    }

    /// Fill `out` with this frame's instances, sorted far to near from `eye`.
    pub fn build_instances(&self, elapsed_sec: f32, eye: Vec3, out: &mut Vec<BillboardInstance>) {
        out.clear();
        out.reserve(self.stars.len() + self.sprites.len() + self.rooms.len() * 4);

        for star in &self.stars {
            out.push(BillboardInstance {
                pos: star.to_array(),
                scale: STAR_SIZE,
                color: [1.0, 1.0, 1.0, STAR_OPACITY],
                spin: 0.0,
                shape: Shape::Disc.as_f32(),
                _pad: [0.0; 2],
            });
        }

        for room in &self.rooms {
            let (origin, rot) = self.group_transform(room.section, elapsed_sec);
            for p in &room.panels {
                let local = room.origin + p.offset * room.scale;
                out.push(BillboardInstance {
                    pos: (origin + rot * local).to_array(),
                    scale: p.size * room.scale,
                    color: p.color,
                    spin: 0.0,
                    shape: Shape::Panel.as_f32(),
                    _pad: [0.0; 2],
                });
            }
        }

        for s in &self.sprites {
            let (origin, rot) = self.group_transform(s.spec.section, elapsed_sec);
            out.push(BillboardInstance {
                pos: (origin + rot * s.local_position(elapsed_sec)).to_array(),
                scale: s.spec.size,
                color: s.spec.kind.tint(),
                spin: sprite_spin(elapsed_sec, s.phase),
                shape: Shape::Disc.as_f32(),
                _pad: [0.0; 2],
            });
        }

        sort_back_to_front(out, eye);
    }
}

/// Order instances by decreasing distance to `eye` for alpha blending
/// without a depth buffer.
pub fn sort_back_to_front(instances: &mut [BillboardInstance], eye: Vec3) {
    instances.sort_by(|a, b| {
        let da = Vec3::from(a.pos).distance_squared(eye);
        let db = Vec3::from(b.pos).distance_squared(eye);
        db.total_cmp(&da)
    });
}
