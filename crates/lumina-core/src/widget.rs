//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: compute intrinsic size given constraints
//! 2. **Layout**: position self (and derived geometry) within allocated bounds
//! 3. **Paint**: emit draw operations onto a [`Canvas`]; widgets that gate
//!    on [`Brick::can_render`] paint nothing while an assertion fails
//!
//! Input arrives through [`Widget::event`], which may return a message for
//! the owner. State changes happen there and nowhere else, so a paint pass
//! never observes a half-applied update.
//!
//! # Examples
//!
//! ```
//! use lumina_core::{TypeId, TextStyle, FontWeight};
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//!
//! let label = TextStyle {
//!     size: 12.0,
//!     weight: FontWeight::Medium,
//!     ..TextStyle::default()
//! };
//! assert_eq!(label.size, 12.0);
//! ```

use crate::brick::Brick;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Brick + Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw operations.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, optionally returning a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Whether the widget reacts to input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Test ID for queries.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds of the root container after layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Fill a rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw text with its baseline-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw a solid line.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw a dashed line with the given on/off pattern.
    fn draw_dashed_line(&mut self, from: Point, to: Point, color: Color, dash: &[f32]);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);

    /// Restrict subsequent drawing to `rect`.
    fn push_clip(&mut self, rect: Rect);

    /// Remove the most recent clip.
    fn pop_clip(&mut self);
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Font style
    pub style: FontStyle,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Light (300)
    Light,
    /// Normal (400)
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Semibold (600)
    Semibold,
    /// Bold (700)
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    #[must_use]
    pub const fn css_value(self) -> u16 {
        match self {
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    /// Upright
    #[default]
    Normal,
    /// Italic
    Italic,
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Heading
    Heading,
    /// Static text
    Text,
    /// Image (charts are announced as images)
    Image,
    /// Status message
    Status,
}

/// Approximate rendered width of `text` (0.6 em per character).
#[must_use]
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.6
}
