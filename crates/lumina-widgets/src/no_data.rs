//! Placeholder shown by charts that have nothing to plot.

use crate::text::Text;
use lumina_core::{
    escape_html, AccessibleRole, Brick, BrickAssertion, BrickVerification, Canvas, Color,
    Constraints, Event, LayoutResult, Point, Rect, Size, TypeId, Widget,
};
use std::any::Any;

/// Dashed-border box with a centered message.
#[derive(Debug, Clone)]
pub struct NoData {
    message: Text,
    border_color: Color,
    bounds: Rect,
}

/// Border color (gray-200).
const BORDER_COLOR: Color = Color {
    r: 229.0 / 255.0,
    g: 231.0 / 255.0,
    b: 235.0 / 255.0,
    a: 1.0,
};

const BORDER_DASH: [f32; 2] = [4.0, 4.0];

impl NoData {
    /// Placeholder showing `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Text::new(message),
            border_color: BORDER_COLOR,
            bounds: Rect::default(),
        }
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.content()
    }
}

impl Widget for NoData {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let text = self.message.measure(Constraints::unbounded());
        constraints.constrain(text)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let text = self.message.measure(Constraints::loose(bounds.size()));
        let origin = Point::new(
            bounds.x + (bounds.width - text.width) / 2.0,
            bounds.y + (bounds.height - text.height) / 2.0,
        );
        self.message
            .layout(Rect::new(origin.x, origin.y, text.width, text.height));
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let b = self.bounds;
        let corners = [
            Point::new(b.x, b.y),
            Point::new(b.right(), b.y),
            Point::new(b.right(), b.bottom()),
            Point::new(b.x, b.bottom()),
        ];
        for (from, to) in corners.iter().zip(corners.iter().cycle().skip(1)) {
            canvas.draw_dashed_line(*from, *to, self.border_color, &BORDER_DASH);
        }
        self.message.paint(canvas);
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(self.message.content())
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Status
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for NoData {
    fn brick_name(&self) -> &'static str {
        "NoData"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::TextVisible]
    }

    fn verify(&self) -> BrickVerification {
        self.message.verify()
    }

    fn to_html(&self) -> String {
        format!(
            r#"<div class="lumina-no-data" role="status"><p class="lumina-text">{}</p></div>"#,
            escape_html(self.message.content())
        )
    }

    fn to_css(&self) -> String {
        format!(
            r".lumina-no-data {{
    display: flex;
    align-items: center;
    justify-content: center;
    width: 100%;
    height: 100%;
    border: 1px dashed {};
    border-radius: 0.5rem;
}}",
            self.border_color.to_hex()
        )
    }
}
