//! Geometry primitives and the analog clock face engine
//!
//! Everything here is pure: no window, no font, no clock. Pixel coordinates
//! are `f32` with the origin at the top-left and y growing downwards.

pub mod clock_face;

pub use clock_face::{
    ClockFaceGeometry, DigitPlacement, HandKind, HandSegment, RadialGradient, Tick, TimeOfDay,
    MIN_FACE_SIZE,
};

/// A point in window coordinates (physical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at `length` pixels from `self` along a clock angle.
    ///
    /// 0° points up (12 o'clock) and angles grow clockwise.
    pub fn along_clock_angle(&self, degrees: f64, length: f32) -> Point {
        let radians = degrees.to_radians();
        Point {
            x: self.x + length * radians.sin() as f32,
            y: self.y - length * radians.cos() as f32,
        }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment test, used for hit-testing
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Closed containment test (edges included)
    pub fn contains_inclusive(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by `amount` on every side, never going below zero size
    pub fn inset(&self, amount: f32) -> Rect {
        Rect {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - 2.0 * amount).max(0.0),
            height: (self.height - 2.0 * amount).max(0.0),
        }
    }

    /// Split off the top `height` pixels, returning `(top, rest)`
    pub fn split_top(&self, height: f32) -> (Rect, Rect) {
        let height = height.min(self.height).max(0.0);
        (
            Rect::new(self.x, self.y, self.width, height),
            Rect::new(self.x, self.y + height, self.width, self.height - height),
        )
    }
}

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1)
    ///
    /// Channels are truncated like integer pixel math, `t` is clamped.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Pack as 0xAARRGGBB with full opacity
    pub const fn to_argb(self) -> u32 {
        0xFF000000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}
