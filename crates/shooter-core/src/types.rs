//! Fundamental geometric and simulation types.
//!
//! Screen coordinates throughout: origin at the top-left corner of the
//! window, +x right, +y down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }

    /// Monotonic timestamp in whole milliseconds, used for cooldown bookkeeping.
    pub fn now_ms(&self) -> u64 {
        (self.elapsed_secs * 1000.0).round() as u64
    }
}

/// The visible window rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Aabb {
        Aabb {
            min: Vec2::ZERO,
            max: Vec2::new(self.width, self.height),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Push a box of `size` centered at `center` back inside the playfield.
    ///
    /// Any edge past a boundary is set exactly onto that boundary; there is
    /// no bounce.
    pub fn clamp_center(&self, center: Vec2, size: Vec2) -> Vec2 {
        let mut bbox = Aabb::from_center(center, size);
        if bbox.min.x < 0.0 {
            bbox = bbox.translated(Vec2::new(-bbox.min.x, 0.0));
        }
        if bbox.max.x > self.width {
            bbox = bbox.translated(Vec2::new(self.width - bbox.max.x, 0.0));
        }
        if bbox.min.y < 0.0 {
            bbox = bbox.translated(Vec2::new(0.0, -bbox.min.y));
        }
        if bbox.max.y > self.height {
            bbox = bbox.translated(Vec2::new(0.0, self.height - bbox.max.y));
        }
        bbox.center()
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Grow the box by `margin` on all four sides.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// True when the two boxes share no area at all. Touching edges count
    /// as overlapping.
    pub fn is_disjoint(&self, other: &Aabb) -> bool {
        self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
    }
}
