use crate::model::pos::Pos;

use super::{Canvas, Colour, Font, Rect, Stroke};

/// A single [`Canvas`] call.
///
/// `Vec<DrawCall>` implements [`Canvas`] by recording every call, e.g. for
/// tests or to replay a frame later.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    BeginPath,
    MoveTo(Pos),
    LineTo(Pos),
    QuadraticCurveTo {
        ctrl: Pos,
        end: Pos,
    },
    BezierCurveTo {
        ctrl1: Pos,
        ctrl2: Pos,
        end: Pos,
    },
    Arc {
        center: Pos,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    },
    Stroke(Stroke),
    Fill(Colour),
    FillRect(Rect, Colour),
    FillText {
        text: String,
        pos: Pos,
        font: Font,
        colour: Colour,
    },
}

impl DrawCall {
    /// Replay the call onto another canvas.
    pub fn replay(&self, canvas: &mut impl Canvas) {
        match self {
            Self::BeginPath => canvas.begin_path(),
            Self::MoveTo(pos) => canvas.move_to(*pos),
            Self::LineTo(pos) => canvas.line_to(*pos),
            Self::QuadraticCurveTo { ctrl, end } => canvas.quadratic_curve_to(*ctrl, *end),
            Self::BezierCurveTo { ctrl1, ctrl2, end } => {
                canvas.bezier_curve_to(*ctrl1, *ctrl2, *end);
            }
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                anticlockwise,
            } => canvas.arc(*center, *radius, *start_angle, *end_angle, *anticlockwise),
            Self::Stroke(stroke) => canvas.stroke(stroke),
            Self::Fill(colour) => canvas.fill(*colour),
            Self::FillRect(rect, colour) => canvas.fill_rect(*rect, *colour),
            Self::FillText {
                text,
                pos,
                font,
                colour,
            } => canvas.fill_text(text, *pos, font, *colour),
        }
    }
}

impl Canvas for Vec<DrawCall> {
    fn begin_path(&mut self) {
        self.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, pos: Pos) {
        self.push(DrawCall::MoveTo(pos));
    }

    fn line_to(&mut self, pos: Pos) {
        self.push(DrawCall::LineTo(pos));
    }

    fn quadratic_curve_to(&mut self, ctrl: Pos, end: Pos) {
        self.push(DrawCall::QuadraticCurveTo { ctrl, end });
    }

    fn bezier_curve_to(&mut self, ctrl1: Pos, ctrl2: Pos, end: Pos) {
        self.push(DrawCall::BezierCurveTo { ctrl1, ctrl2, end });
    }

    fn arc(
        &mut self,
        center: Pos,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        self.push(DrawCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn stroke(&mut self, stroke: &Stroke) {
        self.push(DrawCall::Stroke(*stroke));
    }

    fn fill(&mut self, colour: Colour) {
        self.push(DrawCall::Fill(colour));
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.push(DrawCall::FillRect(rect, colour));
    }

    fn fill_text(&mut self, text: &str, pos: Pos, font: &Font, colour: Colour) {
        self.push(DrawCall::FillText {
            text: text.to_owned(),
            pos,
            font: font.clone(),
            colour,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_reproduces_calls() {
        let mut calls: Vec<DrawCall> = Vec::new();
        calls.begin_path();
        calls.arc(Pos::new(1.0, 2.0), 3.0, 0.0, 1.0, true);
        calls.stroke(&Stroke::new(Colour::WHITE, 2.0).round());
        calls.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Colour::hex(0xd5bc00));

        let mut replayed: Vec<DrawCall> = Vec::new();

        for call in calls.iter() {
            call.replay(&mut replayed);
        }

        assert_eq!(calls, replayed);
    }
}
