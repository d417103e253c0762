//! Render configuration assembled from chart props and derived state.
//!
//! [`ChartSpec`] is what a scatter chart would hand to a rendering engine:
//! which guides to draw, how each axis is bounded and formatted, and one
//! [`SeriesSpec`] per category. The widget's own paint pass consumes it too.

use super::domain::AxisDomain;
use super::category::same_category;
use lumina_core::{AxisFormatters, Color, FieldValue, Row, ValueFormatter};

/// Placeholder text when the dataset is empty.
pub const DEFAULT_NO_DATA_TEXT: &str = "No data";

/// Dash pattern of grid lines.
pub const GRID_DASH: [f32; 2] = [3.0, 3.0];

/// Marker area in px² when no size field is configured.
pub const FIXED_MARKER_AREA: f64 = 64.0;

/// Top-level render configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// Empty dataset: only a placeholder is shown
    NoData {
        /// Placeholder text
        message: String,
    },
    /// Full plot
    Plot(PlotSpec),
}

impl ChartSpec {
    /// The plot configuration, if there is data.
    #[must_use]
    pub const fn plot(&self) -> Option<&PlotSpec> {
        match self {
            Self::Plot(plot) => Some(plot),
            Self::NoData { .. } => None,
        }
    }

    /// Whether only the placeholder is rendered.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}

/// Configuration of a chart with data.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    /// Grid lines
    pub grid: Option<GridSpec>,
    /// Horizontal axis (absent when no x field is set)
    pub x_axis: Option<AxisSpec>,
    /// Vertical axis (absent when no y field is set)
    pub y_axis: Option<AxisSpec>,
    /// Hover tooltip
    pub tooltip: Option<TooltipSpec>,
    /// Marker size channel
    pub size: Option<SizeSpec>,
    /// One series per category, in category order
    pub series: Vec<SeriesSpec>,
    /// Legend
    pub legend: Option<LegendSpec>,
}

impl PlotSpec {
    /// Series for `category`.
    #[must_use]
    pub fn series_for(&self, category: &FieldValue) -> Option<&SeriesSpec> {
        self.series
            .iter()
            .find(|s| same_category(&s.category, category))
    }

    /// Category labels in series order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    /// Marker area of `row`, in px².
    #[must_use]
    pub fn marker_area(&self, row: &Row, size_extent: Option<(f64, f64)>) -> f64 {
        self.size
            .as_ref()
            .map_or(FIXED_MARKER_AREA, |size| size.area(row, size_extent))
    }
}

/// Dashed background grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    /// Dash on/off lengths
    pub dash: [f32; 2],
    /// Lines at y ticks
    pub horizontal: bool,
    /// Lines at x ticks
    pub vertical: bool,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            dash: GRID_DASH,
            horizontal: true,
            vertical: true,
        }
    }
}

/// One numeric axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    /// Data field plotted on this axis
    pub field: String,
    /// Whether tick labels are drawn
    pub visible: bool,
    /// Declared bounds
    pub domain: AxisDomain,
    /// Fixed tick values (None = computed)
    pub ticks: Option<Vec<f64>>,
    /// Tick label formatter
    pub formatter: ValueFormatter,
    /// Whether fractional ticks are allowed
    pub allow_decimals: bool,
    /// Points outside the domain are clipped instead of stretching it
    pub allow_data_overflow: bool,
    /// Reserved width (vertical axis only)
    pub width: Option<f32>,
}

/// Hover tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipSpec {
    /// Field whose value labels the tooltip (empty = implicit label)
    pub category_field: String,
    /// X field
    pub x: String,
    /// Y field
    pub y: String,
    /// Size field
    pub size: Option<String>,
    /// Formatters for the three channels
    pub formatters: AxisFormatters,
}

/// Marker size channel.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeSpec {
    /// Data field driving marker size
    pub field: String,
    /// Marker area range in px²
    pub range: (f64, f64),
}

impl SizeSpec {
    /// Area for `row`: the field value mapped linearly from `[0, extent max]`
    /// onto the area range. Non-numeric values get the smallest area.
    #[must_use]
    pub fn area(&self, row: &Row, extent: Option<(f64, f64)>) -> f64 {
        let (lo, hi) = self.range;
        let Some(value) = row.number(&self.field) else {
            return lo;
        };
        let domain_max = extent.map_or(0.0, |(_, max)| max);
        if domain_max <= 0.0 {
            return hi;
        }
        let t = (value / domain_max).clamp(0.0, 1.0);
        (hi - lo).mul_add(t, lo)
    }
}

/// Radius of a circular marker with the given area.
#[must_use]
pub fn marker_radius(area: f64) -> f32 {
    (area.max(0.0) / std::f64::consts::PI).sqrt() as f32
}

/// Points of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    /// Category value
    pub category: FieldValue,
    /// Category label
    pub label: String,
    /// Fill color
    pub color: Color,
    /// Rows in this category
    pub rows: Vec<Row>,
    /// Base fill opacity
    pub fill_opacity: f32,
    /// Marker outline color
    pub stroke: Option<Color>,
    /// Points react to clicks
    pub clickable: bool,
    /// Animate on first render
    pub animate: bool,
    /// Animation duration in milliseconds
    pub animation_duration_ms: u32,
}

/// Legend above the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSpec {
    /// One item per category
    pub items: Vec<LegendItem>,
    /// Reserved height
    pub height: f32,
    /// Items react to clicks
    pub clickable: bool,
}

/// A legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    /// Category value reported when the item is clicked
    pub category: FieldValue,
    /// Category label
    pub label: String,
    /// Swatch color
    pub color: Color,
    /// Drawn at full strength
    pub highlighted: bool,
}
