//! Legend layout, hit-testing and painting.
//!
//! Items flow right-aligned along the top of the chart and wrap onto new
//! rows when they run out of width. The measured height is fed back to the
//! chart so the plot can make room for it.

use super::chart_spec::LegendSpec;
use lumina_core::{estimate_text_width, Canvas, Color, Point, Rect, TextStyle};

/// Height of one legend row.
pub const LEGEND_ROW_HEIGHT: f32 = 24.0;
/// Space added below the legend rows.
pub const LEGEND_PADDING: f32 = 20.0;
/// Legend text size.
pub const LEGEND_FONT_SIZE: f32 = 14.0;
/// Opacity of items that are not the active category.
pub const LEGEND_DIMMED_OPACITY: f32 = 0.4;

const SWATCH_RADIUS: f32 = 4.0;
const SWATCH_GAP: f32 = 6.0;
const ITEM_GAP: f32 = 12.0;

/// Legend label color (gray-500).
const LABEL_COLOR: Color = Color {
    r: 107.0 / 255.0,
    g: 114.0 / 255.0,
    b: 128.0 / 255.0,
    a: 1.0,
};

/// Placement of one legend item.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItemLayout {
    /// Category label
    pub label: String,
    /// Clickable area
    pub rect: Rect,
}

impl LegendItemLayout {
    fn swatch_center(&self) -> Point {
        Point::new(
            self.rect.x + SWATCH_RADIUS,
            self.rect.y + self.rect.height / 2.0,
        )
    }

    fn text_origin(&self) -> Point {
        Point::new(
            self.rect.x + SWATCH_RADIUS * 2.0 + SWATCH_GAP,
            self.rect.y + (self.rect.height + LEGEND_FONT_SIZE) / 2.0 - 2.0,
        )
    }
}

/// Placement of all legend items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendLayout {
    /// Items in legend order
    pub items: Vec<LegendItemLayout>,
    /// Height taken by the item rows
    pub content_height: f32,
}

impl LegendLayout {
    /// Height the legend asks the chart to reserve.
    #[must_use]
    pub fn measured_height(&self) -> f32 {
        self.content_height + LEGEND_PADDING
    }

    /// Index of the item under `point`, in legend order.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.rect.contains_point(&point))
    }
}

fn item_width(label: &str) -> f32 {
    SWATCH_RADIUS * 2.0 + SWATCH_GAP + estimate_text_width(label, LEGEND_FONT_SIZE)
}

/// Lay out `labels` inside `area`, right-aligned, wrapping as needed.
#[must_use]
pub fn layout_legend<S: AsRef<str>>(labels: &[S], area: Rect) -> LegendLayout {
    let mut rows: Vec<Vec<(&str, f32)>> = Vec::new();
    let mut row_width = 0.0;
    for label in labels {
        let label = label.as_ref();
        let width = item_width(label);
        let needed = if row_width > 0.0 {
            row_width + ITEM_GAP + width
        } else {
            width
        };
        match rows.last_mut() {
            Some(row) if needed <= area.width || row.is_empty() => {
                row.push((label, width));
                row_width = needed;
            }
            _ => {
                rows.push(vec![(label, width)]);
                row_width = width;
            }
        }
    }

    let mut items = Vec::with_capacity(labels.len());
    for (row_index, row) in rows.iter().enumerate() {
        let total: f32 =
            row.iter().map(|(_, w)| w).sum::<f32>() + ITEM_GAP * (row.len() - 1) as f32;
        let mut x = (area.right() - total).max(area.x);
        let y = (row_index as f32).mul_add(LEGEND_ROW_HEIGHT, area.y);
        for (label, width) in row {
            items.push(LegendItemLayout {
                label: (*label).to_string(),
                rect: Rect::new(x, y, *width, LEGEND_ROW_HEIGHT),
            });
            x += width + ITEM_GAP;
        }
    }

    LegendLayout {
        items,
        content_height: rows.len() as f32 * LEGEND_ROW_HEIGHT,
    }
}

/// Paint swatches and labels; items that are not highlighted are faded.
pub fn paint_legend(canvas: &mut dyn Canvas, spec: &LegendSpec, layout: &LegendLayout) {
    for (item, placed) in spec.items.iter().zip(&layout.items) {
        let alpha = if item.highlighted {
            1.0
        } else {
            LEGEND_DIMMED_OPACITY
        };
        canvas.fill_circle(
            placed.swatch_center(),
            SWATCH_RADIUS,
            item.color.with_alpha(alpha),
        );
        let style = TextStyle {
            size: LEGEND_FONT_SIZE,
            color: LABEL_COLOR.with_alpha(alpha),
            ..TextStyle::default()
        };
        canvas.draw_text(&item.label, placed.text_origin(), &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scatter_chart::chart_spec::LegendItem;
    use lumina_core::RecordingCanvas;

    #[test]
    fn test_single_row_right_aligned() {
        let area = Rect::new(0.0, 0.0, 400.0, 60.0);
        let layout = layout_legend(&["A", "B"], area);
        assert_eq!(layout.items.len(), 2);
        assert_eq!(layout.content_height, LEGEND_ROW_HEIGHT);
        let last = &layout.items[1];
        assert!((last.rect.right() - 400.0).abs() < 1e-3);
        assert!(layout.items[0].rect.right() < last.rect.x);
    }

    #[test]
    fn test_wraps_when_narrow() {
        let area = Rect::new(0.0, 0.0, 60.0, 60.0);
        let layout = layout_legend(&["Alpha", "Beta", "Gamma"], area);
        assert_eq!(layout.content_height, 3.0 * LEGEND_ROW_HEIGHT);
        assert_eq!(layout.measured_height(), 3.0 * LEGEND_ROW_HEIGHT + LEGEND_PADDING);
        // an item wider than the area is pinned to the left edge
        assert!(layout.items.iter().all(|i| i.rect.x >= 0.0));
    }

    #[test]
    fn test_empty_legend() {
        let labels: [&str; 0] = [];
        let layout = layout_legend(&labels, Rect::new(0.0, 0.0, 100.0, 60.0));
        assert!(layout.items.is_empty());
        assert_eq!(layout.measured_height(), LEGEND_PADDING);
    }

    #[test]
    fn test_hit_test() {
        let layout = layout_legend(&["A", "B"], Rect::new(0.0, 0.0, 400.0, 60.0));
        let b = layout.items[1].rect.center();
        assert_eq!(layout.hit_test(b), Some(1));
        assert_eq!(layout.hit_test(Point::new(1.0, 50.0)), None);
    }

    #[test]
    fn test_hit_test_duplicate_labels() {
        // two categories may print the same; the index tells them apart
        let layout = layout_legend(&["1", "1"], Rect::new(0.0, 0.0, 400.0, 60.0));
        let first = layout.items[0].rect.center();
        let second = layout.items[1].rect.center();
        assert_eq!(layout.hit_test(first), Some(0));
        assert_eq!(layout.hit_test(second), Some(1));
    }

    #[test]
    fn test_paint_dims_unhighlighted() {
        let spec = LegendSpec {
            items: vec![
                LegendItem {
                    category: "A".into(),
                    label: "A".to_string(),
                    color: Color::BLACK,
                    highlighted: true,
                },
                LegendItem {
                    category: "B".into(),
                    label: "B".to_string(),
                    color: Color::BLACK,
                    highlighted: false,
                },
            ],
            height: 60.0,
            clickable: true,
        };
        let layout = layout_legend(&["A", "B"], Rect::new(0.0, 0.0, 400.0, 60.0));
        let mut canvas = RecordingCanvas::new();
        paint_legend(&mut canvas, &spec, &layout);
        assert_eq!(canvas.texts(), vec!["A", "B"]);
        let circles = canvas.circles();
        assert_eq!(circles[0].2.map(|c| c.a), Some(1.0));
        assert_eq!(circles[1].2.map(|c| c.a), Some(LEGEND_DIMMED_OPACITY));
    }
}
