//! Draw commands and a canvas that records them.
//!
//! All painting reduces to [`DrawCommand`]s. [`RecordingCanvas`] keeps them
//! in order, which is what tests assert against and what a backend would
//! replay.

use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for lines and outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Dash pattern (empty = solid)
    pub dash: Vec<f32>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            dash: Vec::new(),
        }
    }
}

/// Fill and/or stroke for closed shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Fill only.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Stroke only.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// A single rendering primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Rectangle, optionally rounded
    Rect {
        /// Bounds
        bounds: Rect,
        /// Corner radius
        radius: f32,
        /// Fill/stroke
        style: BoxStyle,
    },
    /// Circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill/stroke
        style: BoxStyle,
    },
    /// Open polyline
    Path {
        /// Vertices
        points: Vec<Point>,
        /// Stroke
        style: StrokeStyle,
    },
    /// Text run
    Text {
        /// Content
        content: String,
        /// Baseline-left position
        position: Point,
        /// Style
        style: TextStyle,
    },
    /// Start clipping to a rectangle
    PushClip(Rect),
    /// End the most recent clip
    PopClip,
}

impl DrawCommand {
    /// Filled circle shorthand.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Text content, if this is a text command.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// A Canvas that records draw operations as [`DrawCommand`]s.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.clip_depth = 0;
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current clip nesting depth.
    #[must_use]
    pub const fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// All recorded text runs, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }

    /// All recorded circles as `(center, radius, fill)`.
    #[must_use]
    pub fn circles(&self) -> Vec<(Point, f32, Option<Color>)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle {
                    center,
                    radius,
                    style,
                } => Some((*center, *radius, style.fill)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: 0.0,
            style: BoxStyle::fill(color),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: 0.0,
            style: BoxStyle::stroke(StrokeStyle {
                color,
                width,
                ..Default::default()
            }),
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius,
            style: BoxStyle::fill(color),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Path {
            points: vec![from, to],
            style: StrokeStyle {
                color,
                width,
                ..Default::default()
            },
        });
    }

    fn draw_dashed_line(&mut self, from: Point, to: Point, color: Color, dash: &[f32]) {
        self.commands.push(DrawCommand::Path {
            points: vec![from, to],
            style: StrokeStyle {
                color,
                width: 1.0,
                dash: dash.to_vec(),
            },
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle::stroke(StrokeStyle {
                color,
                width,
                ..Default::default()
            }),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopClip);
    }
}
