//! Text elements: body text and titles.

use lumina_core::{
    escape_html, estimate_text_width, AccessibleRole, Brick, BrickAssertion, BrickBudget,
    BrickVerification, Canvas, Color, Constraints, Event, FontStyle, FontWeight, LayoutResult,
    Point, Rect, Size, TextStyle, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Default body text color (gray-500).
pub const TEXT_COLOR: Color = Color {
    r: 107.0 / 255.0,
    g: 114.0 / 255.0,
    b: 128.0 / 255.0,
    a: 1.0,
};

/// Default title color (gray-700).
pub const TITLE_COLOR: Color = Color {
    r: 55.0 / 255.0,
    g: 65.0 / 255.0,
    b: 81.0 / 255.0,
    a: 1.0,
};

const LINE_HEIGHT: f32 = 1.25;

/// A single run of styled text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    content: String,
    color: Color,
    font_size: f32,
    font_weight: FontWeight,
    font_style: FontStyle,
    heading: bool,
    test_id_value: Option<String>,
    #[serde(skip)]
    bounds: Rect,
}

impl Text {
    /// Body text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: TEXT_COLOR,
            font_size: 14.0,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            heading: false,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Title text: larger, medium weight, announced as a heading.
    #[must_use]
    pub fn title(content: impl Into<String>) -> Self {
        Self {
            color: TITLE_COLOR,
            font_size: 18.0,
            font_weight: FontWeight::Medium,
            heading: true,
            ..Self::new(content)
        }
    }

    /// Bold weight.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.font_weight = FontWeight::Bold;
        self
    }

    /// Italic style.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.font_style = FontStyle::Italic;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Style used when painting.
    #[must_use]
    pub const fn style(&self) -> TextStyle {
        TextStyle {
            size: self.font_size,
            color: self.color,
            weight: self.font_weight,
            style: self.font_style,
        }
    }
}

impl Widget for Text {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = estimate_text_width(&self.content, self.font_size);
        constraints.constrain(Size::new(width, self.font_size * LINE_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let baseline = Point::new(self.bounds.x, self.bounds.y + self.font_size);
        canvas.draw_text(&self.content, baseline, &self.style());
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.content)
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.heading {
            AccessibleRole::Heading
        } else {
            AccessibleRole::Text
        }
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for Text {
    fn brick_name(&self) -> &'static str {
        "Text"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[
            BrickAssertion::TextVisible,
            BrickAssertion::MaxLatencyMs(16),
        ]
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(16)
    }

    fn verify(&self) -> BrickVerification {
        BrickVerification::check_all(self.assertions(), |assertion| match assertion {
            BrickAssertion::TextVisible if self.content.is_empty() => {
                Err("Text content is empty".to_string())
            }
            BrickAssertion::TextVisible if self.color.a <= 0.0 => {
                Err("Text color is transparent".to_string())
            }
            _ => Ok(()),
        })
    }

    fn to_html(&self) -> String {
        let tag = if self.heading { "h3" } else { "p" };
        let test_id = self.test_id_value.as_deref().unwrap_or("text");
        format!(
            r#"<{tag} class="lumina-text" data-testid="{}">{}</{tag}>"#,
            escape_html(test_id),
            escape_html(&self.content)
        )
    }

    fn to_css(&self) -> String {
        let font_style = match self.font_style {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        };
        format!(
            r".lumina-text {{
    color: {};
    font-size: {}px;
    font-weight: {};
    font-style: {font_style};
}}",
            self.color.to_hex(),
            self.font_size,
            self.font_weight.css_value(),
        )
    }
}
