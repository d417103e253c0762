//! Tooltip content for a hovered point, and its box.

use super::category::{implicit_category, CategoryColors};
use super::chart_spec::TooltipSpec;
use lumina_core::{
    estimate_text_width, Canvas, Color, FieldValue, FontWeight, Point, Rect, Row, Size, TextStyle,
    ValueFormatter,
};

const FONT_SIZE: f32 = 14.0;
const LINE_HEIGHT: f32 = 20.0;
const PADDING: f32 = 8.0;
const SWATCH_RADIUS: f32 = 4.0;
const OFFSET: f32 = 10.0;

const BORDER_COLOR: Color = Color {
    r: 229.0 / 255.0,
    g: 231.0 / 255.0,
    b: 235.0 / 255.0,
    a: 1.0,
};

/// One `field: value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLine {
    /// Field name
    pub name: String,
    /// Formatted value
    pub value: String,
}

/// What the tooltip shows for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    /// Category label
    pub header: String,
    /// Category color
    pub color: Color,
    /// Lines for x, y and size, in that order, skipping absent fields
    pub lines: Vec<TooltipLine>,
}

impl TooltipContent {
    /// Build the tooltip for `row`.
    #[must_use]
    pub fn for_row(row: &Row, spec: &TooltipSpec, colors: &CategoryColors) -> Self {
        let category = if spec.category_field.is_empty() {
            implicit_category(&spec.y)
        } else {
            row.value_or_null(&spec.category_field)
        };
        let channels = [
            (Some(spec.x.as_str()), &spec.formatters.x),
            (Some(spec.y.as_str()), &spec.formatters.y),
            (spec.size.as_deref(), &spec.formatters.size),
        ];
        let lines = channels
            .into_iter()
            .filter_map(|(field, formatter)| {
                let field = field.filter(|f| !f.is_empty())?;
                let value = row.get(field)?;
                Some(TooltipLine {
                    name: field.to_string(),
                    value: format_value(value, formatter),
                })
            })
            .collect();
        Self {
            color: colors.color_for(&category),
            header: category.label(),
            lines,
        }
    }

    /// Box size needed to show this content.
    #[must_use]
    pub fn size(&self) -> Size {
        let header_width = SWATCH_RADIUS.mul_add(2.0, 6.0) + estimate_text_width(&self.header, FONT_SIZE);
        let widest = self
            .lines
            .iter()
            .map(|line| estimate_text_width(&line_text(line), FONT_SIZE))
            .fold(header_width, f32::max);
        Size::new(
            PADDING.mul_add(2.0, widest),
            PADDING.mul_add(2.0, LINE_HEIGHT * (self.lines.len() + 1) as f32),
        )
    }
}

fn format_value(value: &FieldValue, formatter: &ValueFormatter) -> String {
    value
        .as_f64()
        .map_or_else(|| value.label(), |n| formatter.format(n))
}

fn line_text(line: &TooltipLine) -> String {
    format!("{}: {}", line.name, line.value)
}

/// Place the tooltip box next to `anchor`, flipping sides to stay in `bounds`.
#[must_use]
pub fn tooltip_rect(size: Size, anchor: Point, bounds: Rect) -> Rect {
    let mut x = anchor.x + OFFSET;
    if x + size.width > bounds.right() {
        x = anchor.x - OFFSET - size.width;
    }
    let mut y = anchor.y - OFFSET - size.height;
    if y < bounds.y {
        y = anchor.y + OFFSET;
    }
    Rect::new(x.max(bounds.x), y.max(bounds.y), size.width, size.height)
}

/// Paint the tooltip box anchored at a hovered point.
pub fn paint_tooltip(canvas: &mut dyn Canvas, content: &TooltipContent, anchor: Point, bounds: Rect) {
    let rect = tooltip_rect(content.size(), anchor, bounds);
    canvas.fill_rounded_rect(rect, 6.0, Color::WHITE);
    canvas.stroke_rect(rect, BORDER_COLOR, 1.0);

    let header_y = rect.y + PADDING + LINE_HEIGHT / 2.0;
    canvas.fill_circle(
        Point::new(rect.x + PADDING + SWATCH_RADIUS, header_y),
        SWATCH_RADIUS,
        content.color,
    );
    let header_style = TextStyle {
        size: FONT_SIZE,
        weight: FontWeight::Medium,
        ..TextStyle::default()
    };
    canvas.draw_text(
        &content.header,
        Point::new(
            rect.x + PADDING + SWATCH_RADIUS.mul_add(2.0, 6.0),
            header_y + FONT_SIZE / 2.0 - 2.0,
        ),
        &header_style,
    );

    let line_style = TextStyle {
        size: FONT_SIZE,
        ..TextStyle::default()
    };
    for (i, line) in content.lines.iter().enumerate() {
        let baseline = (i + 1) as f32 * LINE_HEIGHT + header_y + FONT_SIZE / 2.0 - 2.0;
        canvas.draw_text(
            &line_text(line),
            Point::new(rect.x + PADDING, baseline),
            &line_style,
        );
    }
}
