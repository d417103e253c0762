//! Core types and traits for the Lumina chart components.
//!
//! This crate provides foundational types used throughout Lumina:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`] and the named [`BaseColor`] palette
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`]
//! - Chart data: [`Row`] and [`FieldValue`]
//! - The [`Widget`], [`Canvas`] and [`Brick`] traits

pub mod brick;
pub mod canvas;
mod color;
mod constraints;
mod data;
mod event;
mod format;
mod geometry;
mod palette;
pub mod widget;

pub use brick::{escape_html, Brick, BrickAssertion, BrickBudget, BrickVerification};
pub use canvas::{BoxStyle, DrawCommand, RecordingCanvas, StrokeStyle};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use data::{numeric_extent, FieldValue, Row};
pub use event::{Event, MouseButton};
pub use format::{default_value_formatter, AxisFormatters, ValueFormatter};
pub use geometry::{Insets, Point, Rect, Size};
pub use palette::{theme_colors, BaseColor, UnknownBaseColor, THEME_COLOR_RANGE};
pub use widget::{
    estimate_text_width, AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle,
    TypeId, Widget,
};
