//! Analog clock panel

use crate::draw::{palette, DrawCmd, TextAnchor};
use crate::geometry::{ClockFaceGeometry, HandKind, Rect, TimeOfDay};
use crate::tick::TickSample;

use super::chrome::{body_rect, card_commands};
use super::{Panel, PanelKind};

const CENTER_DOT_OUTLINE: f32 = 2.0;

#[derive(Debug, Clone, Default)]
pub struct AnalogPanel {
    bounds: Rect,
    /// `None` until resized, or while the body is too small to draw
    face: Option<ClockFaceGeometry>,
    time: TimeOfDay,
}

impl AnalogPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face(&self) -> Option<&ClockFaceGeometry> {
        self.face.as_ref()
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }
}

impl Panel for AnalogPanel {
    fn kind(&self) -> PanelKind {
        PanelKind::AnalogClock
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn resize(&mut self, bounds: Rect) {
        if bounds == self.bounds && self.face.is_some() {
            return;
        }
        self.bounds = bounds;
        self.face = ClockFaceGeometry::compute(body_rect(bounds));
        if self.face.is_none() {
            tracing::trace!(?bounds, "Analog face too small to render");
        }
    }

    fn tick(&mut self, sample: &TickSample) {
        self.time = sample.time_of_day();
    }

    fn render_commands(&self) -> Vec<DrawCmd> {
        let mut cmds = card_commands(self.kind(), self.bounds);
        let Some(face) = &self.face else {
            return cmds;
        };

        cmds.push(DrawCmd::Gradient(face.gradient));
        cmds.push(DrawCmd::StrokeCircle {
            center: face.center,
            radius: face.radius,
            width: face.rim_width,
            color: palette::FACE_INK,
        });

        cmds.extend(face.ticks.iter().map(|tick| DrawCmd::Line {
            from: tick.inner,
            to: tick.outer,
            width: tick.width,
            color: palette::FACE_INK,
        }));

        cmds.extend(face.digits.iter().map(|digit| {
            DrawCmd::text(
                digit.position,
                TextAnchor::Center,
                digit.label.to_string(),
                digit.font_size,
                palette::FACE_INK,
            )
        }));

        for hand in face.hands(self.time) {
            let color = match hand.kind {
                HandKind::Second => palette::SECOND_HAND,
                HandKind::Hour | HandKind::Minute => palette::FACE_INK,
            };
            cmds.push(DrawCmd::Line {
                from: hand.pivot,
                to: hand.tip,
                width: hand.width,
                color,
            });
        }

        cmds.push(DrawCmd::FillCircle {
            center: face.center,
            radius: face.dot_radius,
            color: palette::SECOND_HAND,
        });
        cmds.push(DrawCmd::StrokeCircle {
            center: face.center,
            radius: face.dot_radius,
            width: CENTER_DOT_OUTLINE,
            color: palette::FACE_INK,
        });

        cmds
    }
}
