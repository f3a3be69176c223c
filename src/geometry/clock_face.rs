//! Analog clock face geometry
//!
//! `ClockFaceGeometry::compute` derives everything that depends only on the
//! panel size (rim, ticks, digits, gradient, hand widths). Hand endpoints are
//! derived from that plus a `TimeOfDay` via `ClockFaceGeometry::hands`.
//! Both are pure, so a resize simply throws the old geometry away.

use chrono::{NaiveTime, Timelike};

use super::{Point, Rect, Rgb};

/// Faces smaller than this (in pixels) are not rendered at all
pub const MIN_FACE_SIZE: f32 = 50.0;
/// Gap between the bounding square and the rim
pub const FACE_MARGIN: f32 = 10.0;

pub const TICK_COUNT: usize = 60;
pub const MAJOR_TICK_INNER: f32 = 0.88;
pub const MINOR_TICK_INNER: f32 = 0.93;
pub const MAJOR_TICK_WIDTH: f32 = 4.0;
pub const MINOR_TICK_WIDTH: f32 = 1.0;
pub const DIGIT_RADIUS: f32 = 0.75;
pub const RIM_WIDTH: f32 = 4.0;

pub const HOUR_HAND_LENGTH: f32 = 0.5;
pub const MINUTE_HAND_LENGTH: f32 = 0.75;
pub const SECOND_HAND_LENGTH: f32 = 0.85;

/// Face size at which hand widths are drawn at their nominal value
const HAND_WIDTH_REFERENCE: f32 = 500.0;

pub const FACE_CENTER_COLOR: Rgb = Rgb::new(255, 255, 255);
pub const FACE_EDGE_COLOR: Rgb = Rgb::new(220, 220, 220);

/// Time of day as fractional components.
///
/// `second` may carry a sub-second fraction, which is what makes the hands
/// sweep instead of tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeOfDay {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl TimeOfDay {
    pub fn new(hour: f64, minute: f64, second: f64) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Build from seconds since midnight, wrapping at 24h
    pub fn from_seconds_since_midnight(seconds: f64) -> Self {
        let seconds = seconds.rem_euclid(86_400.0);
        let hour = (seconds / 3600.0).floor();
        let minute = ((seconds - hour * 3600.0) / 60.0).floor();
        let second = seconds - hour * 3600.0 - minute * 60.0;
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Second hand angle in degrees, 0 = 12 o'clock
    pub fn second_angle(&self) -> f64 {
        self.second * 6.0
    }

    /// Minute hand angle in degrees, including the seconds fraction
    pub fn minute_angle(&self) -> f64 {
        self.fractional_minute() * 6.0
    }

    /// Hour hand angle in degrees, including the minutes fraction
    pub fn hour_angle(&self) -> f64 {
        (self.hour.rem_euclid(12.0) + self.fractional_minute() / 60.0) * 30.0
    }

    fn fractional_minute(&self) -> f64 {
        self.minute + self.second / 60.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // Leap seconds report nanosecond >= 1e9; pin them to the end of the second.
        let nanos = time.nanosecond().min(999_999_999) as f64;
        Self {
            hour: time.hour() as f64,
            minute: time.minute() as f64,
            second: time.second() as f64 + nanos / 1e9,
        }
    }
}

/// One of the 60 rim ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: usize,
    /// Every fifth tick (the hour positions)
    pub major: bool,
    pub inner: Point,
    pub outer: Point,
    pub width: f32,
}

/// Position of an hour numeral
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitPlacement {
    pub label: u8,
    pub position: Point,
    pub font_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

/// A hand drawn from the pivot to its tip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSegment {
    pub kind: HandKind,
    pub pivot: Point,
    pub tip: Point,
    pub width: f32,
    pub angle: f64,
}

/// Radial background fill of the face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f32,
    pub center_color: Rgb,
    pub edge_color: Rgb,
}

impl RadialGradient {
    /// Color at `distance` pixels from the center (`t = distance / radius`)
    pub fn color_at(&self, distance: f32) -> Rgb {
        if self.radius <= 0.0 {
            return self.edge_color;
        }
        self.center_color.lerp(self.edge_color, distance / self.radius)
    }
}

/// Size-dependent geometry of the analog face
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFaceGeometry {
    /// Side of the bounding square (`min(width, height)`)
    pub size: f32,
    pub center: Point,
    pub radius: f32,
    pub rim_width: f32,
    pub dot_radius: f32,
    pub ticks: Vec<Tick>,
    pub digits: Vec<DigitPlacement>,
    pub gradient: RadialGradient,
    pub hour_hand_width: f32,
    pub minute_hand_width: f32,
    pub second_hand_width: f32,
}

impl ClockFaceGeometry {
    /// Compute the face for a bounding box.
    ///
    /// Returns `None` when the box is smaller than `MIN_FACE_SIZE`.
    pub fn compute(bounds: Rect) -> Option<Self> {
        if !(bounds.width >= MIN_FACE_SIZE && bounds.height >= MIN_FACE_SIZE) {
            return None;
        }
        let size = bounds.width.min(bounds.height);

        let center = bounds.center();
        let radius = size / 2.0 - FACE_MARGIN;

        let ticks = (0..TICK_COUNT)
            .map(|index| {
                let angle = index as f64 * 6.0;
                let major = index % 5 == 0;
                let (inner_factor, width) = if major {
                    (MAJOR_TICK_INNER, MAJOR_TICK_WIDTH)
                } else {
                    (MINOR_TICK_INNER, MINOR_TICK_WIDTH)
                };
                Tick {
                    index,
                    major,
                    inner: center.along_clock_angle(angle, radius * inner_factor),
                    outer: center.along_clock_angle(angle, radius),
                    width,
                }
            })
            .collect();

        let font_size = (size / 18.0).floor().max(8.0);
        let digits = (1..=12u8)
            .map(|label| DigitPlacement {
                label,
                position: center.along_clock_angle(label as f64 * 30.0, radius * DIGIT_RADIUS),
                font_size,
            })
            .collect();

        let scale = size / HAND_WIDTH_REFERENCE;

        Some(Self {
            size,
            center,
            radius,
            rim_width: RIM_WIDTH,
            dot_radius: (size / 80.0).floor().max(4.0),
            ticks,
            digits,
            gradient: RadialGradient {
                center,
                radius,
                center_color: FACE_CENTER_COLOR,
                edge_color: FACE_EDGE_COLOR,
            },
            hour_hand_width: (8.0 * scale).floor().max(3.0),
            minute_hand_width: (4.0 * scale).floor().max(2.0),
            second_hand_width: (2.0 * scale).floor().max(1.0),
        })
    }

    /// Endpoint of a single hand at the given time
    pub fn hand(&self, kind: HandKind, time: TimeOfDay) -> HandSegment {
        let (angle, length, width) = match kind {
            HandKind::Hour => (time.hour_angle(), HOUR_HAND_LENGTH, self.hour_hand_width),
            HandKind::Minute => (
                time.minute_angle(),
                MINUTE_HAND_LENGTH,
                self.minute_hand_width,
            ),
            HandKind::Second => (
                time.second_angle(),
                SECOND_HAND_LENGTH,
                self.second_hand_width,
            ),
        };
        HandSegment {
            kind,
            pivot: self.center,
            tip: self.center.along_clock_angle(angle, self.radius * length),
            width,
            angle,
        }
    }

    /// Hour, minute and second hands, in drawing order
    pub fn hands(&self, time: TimeOfDay) -> [HandSegment; 3] {
        [
            self.hand(HandKind::Hour, time),
            self.hand(HandKind::Minute, time),
            self.hand(HandKind::Second, time),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_uses_smaller_side() {
        let face = ClockFaceGeometry::compute(Rect::new(0.0, 0.0, 300.0, 200.0)).unwrap();
        assert_eq!(face.size, 200.0);
        assert_eq!(face.radius, 90.0);
        assert_eq!(face.center, Point::new(150.0, 100.0));
    }

    #[test]
    fn test_nan_bounds_are_rejected() {
        assert!(ClockFaceGeometry::compute(Rect::new(0.0, 0.0, f32::NAN, 300.0)).is_none());
        assert!(ClockFaceGeometry::compute(Rect::new(0.0, 0.0, 300.0, f32::NAN)).is_none());
    }

    #[test]
    fn test_twelve_is_straight_up() {
        let face = ClockFaceGeometry::compute(Rect::new(0.0, 0.0, 200.0, 200.0)).unwrap();
        let twelve = face.digits.iter().find(|d| d.label == 12).unwrap();
        assert!((twelve.position.x - 100.0).abs() < 1e-3);
        assert!((twelve.position.y - (100.0 - 90.0 * 0.75)).abs() < 1e-3);
    }

    #[test]
    fn test_from_naive_time_keeps_subseconds() {
        let t = NaiveTime::from_hms_milli_opt(13, 5, 7, 500).unwrap();
        let tod = TimeOfDay::from(t);
        assert_eq!(tod.hour, 13.0);
        assert_eq!(tod.minute, 5.0);
        assert!((tod.second - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_gradient_ends() {
        let face = ClockFaceGeometry::compute(Rect::new(0.0, 0.0, 220.0, 220.0)).unwrap();
        assert_eq!(face.gradient.color_at(0.0), FACE_CENTER_COLOR);
        assert_eq!(face.gradient.color_at(face.radius), FACE_EDGE_COLOR);
    }
}
