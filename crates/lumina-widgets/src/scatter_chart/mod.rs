//! Scatter chart widget.
//!
//! Rows are split into one series per category value, colored from a
//! palette, and plotted against numeric x and y fields. An optional size
//! field scales marker area. Clicking a point or a legend item highlights
//! it and reports a [`ValueChange`] to the registered listener.
//!
//! # Examples
//!
//! ```
//! use lumina_core::{Constraints, Rect, Row, Size, Widget};
//! use lumina_widgets::ScatterChart;
//!
//! let mut chart = ScatterChart::new()
//!     .data(vec![
//!         Row::new().with("x", 1.0).with("y", 2.0).with("cat", "A"),
//!         Row::new().with("x", 3.0).with("y", 4.0).with("cat", "B"),
//!     ])
//!     .x("x")
//!     .y("y")
//!     .category("cat");
//!
//! assert_eq!(chart.categories(), vec!["A", "B"]);
//!
//! let size = chart.measure(Constraints::loose(Size::new(600.0, 400.0)));
//! chart.layout(Rect::from_size(size));
//! ```

pub mod category;
pub mod chart_spec;
pub mod domain;
pub mod interaction;
pub mod legend;
pub mod tooltip;

pub use category::{
    construct_categories, construct_category_colors, implicit_category, implicit_category_label,
    CategoryColors,
};
pub use chart_spec::{
    AxisSpec, ChartSpec, GridSpec, LegendItem, LegendSpec, PlotSpec, SeriesSpec, SizeSpec,
    TooltipSpec, DEFAULT_NO_DATA_TEXT,
};
pub use domain::{compute_domain, AxisBound, AxisDomain, ResolvedDomain};
pub use interaction::{InteractionPhase, InteractionState, ValueChange, DIMMED_OPACITY};
pub use tooltip::TooltipContent;

use crate::no_data::NoData;
use chart_spec::marker_radius;
use legend::{layout_legend, paint_legend, LegendLayout};
use lumina_core::{
    escape_html, numeric_extent, AccessibleRole, AxisFormatters, Brick, BrickAssertion,
    BrickVerification, Canvas, Color, Constraints, Event, FieldValue, Insets, LayoutResult, Point,
    Rect, Row, Size, TextStyle, TypeId, Widget,
};
use lumina_yaml::{ConfigError, ScatterChartConfig};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Listener invoked with every highlight change.
pub type ValueChangeCallback = Arc<dyn Fn(&ValueChange) + Send + Sync>;

/// Default chart height.
pub const DEFAULT_HEIGHT: f32 = 320.0;
/// Width used when the parent does not bound it.
pub const DEFAULT_WIDTH: f32 = 600.0;
/// Initial legend height, before it has been measured.
pub const DEFAULT_LEGEND_HEIGHT: f32 = 60.0;
/// Default width reserved for the y axis.
pub const DEFAULT_Y_AXIS_WIDTH: f32 = 56.0;
/// Default marker area range in px².
pub const DEFAULT_SIZE_RANGE: (f64, f64) = (1.0, 1000.0);
/// Default animation duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION: u32 = 900;
/// Fill opacity with `show_opacity` on.
pub const TRANSLUCENT_FILL_OPACITY: f32 = 0.7;

const PLOT_MARGIN: f32 = 5.0;
const X_AXIS_HEIGHT: f32 = 30.0;
const TICK_FONT_SIZE: f32 = 12.0;
const MIN_HIT_RADIUS: f32 = 4.0;

/// Grid line color (gray-200).
const GRID_COLOR: Color = Color {
    r: 229.0 / 255.0,
    g: 231.0 / 255.0,
    b: 235.0 / 255.0,
    a: 1.0,
};

/// Tick label color (gray-500).
const TICK_COLOR: Color = Color {
    r: 107.0 / 255.0,
    g: 114.0 / 255.0,
    b: 128.0 / 255.0,
    a: 1.0,
};

/// Hover cursor color (gray-300).
const CURSOR_COLOR: Color = Color {
    r: 209.0 / 255.0,
    g: 213.0 / 255.0,
    b: 219.0 / 255.0,
    a: 1.0,
};

/// A plotted point and where it landed.
#[derive(Debug, Clone)]
struct PointTarget {
    series: usize,
    row: Row,
    center: Point,
    radius: f32,
}

impl PointTarget {
    fn hit(&self, position: Point) -> bool {
        self.center.distance(&position) <= self.radius.max(MIN_HIT_RADIUS)
    }
}

/// Geometry computed by the last layout pass.
#[derive(Debug, Clone)]
struct PlotLayout {
    plot: Rect,
    legend: Option<LegendLayout>,
    x_domain: Option<ResolvedDomain>,
    y_domain: Option<ResolvedDomain>,
    x_ticks: Vec<f64>,
    points: Vec<PointTarget>,
}

/// Categorised scatter plot with click highlighting.
#[derive(Clone)]
pub struct ScatterChart {
    data: Vec<Row>,
    x: String,
    y: String,
    size: Option<String>,
    category: String,
    value_formatter: AxisFormatters,
    colors: Vec<Color>,
    size_range: (f64, f64),
    show_opacity: bool,
    start_end_only: bool,
    show_x_axis: bool,
    show_y_axis: bool,
    y_axis_width: f32,
    show_tooltip: bool,
    show_legend: bool,
    show_grid_lines: bool,
    auto_min_x_value: bool,
    min_x_value: Option<f64>,
    max_x_value: Option<f64>,
    auto_min_y_value: bool,
    min_y_value: Option<f64>,
    max_y_value: Option<f64>,
    allow_decimals: bool,
    show_animation: bool,
    animation_duration: u32,
    no_data_text: Option<String>,
    on_value_change: Option<ValueChangeCallback>,
    height: f32,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
    interaction: InteractionState,
    legend_height: f32,
    hovered: Option<usize>,
    bounds: Rect,
    plot_layout: Option<PlotLayout>,
}

impl Default for ScatterChart {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            x: String::new(),
            y: String::new(),
            size: None,
            category: String::new(),
            value_formatter: AxisFormatters::default(),
            colors: Vec::new(),
            size_range: DEFAULT_SIZE_RANGE,
            show_opacity: false,
            start_end_only: false,
            show_x_axis: true,
            show_y_axis: true,
            y_axis_width: DEFAULT_Y_AXIS_WIDTH,
            show_tooltip: true,
            show_legend: true,
            show_grid_lines: true,
            auto_min_x_value: false,
            min_x_value: None,
            max_x_value: None,
            auto_min_y_value: false,
            min_y_value: None,
            max_y_value: None,
            allow_decimals: true,
            show_animation: true,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            no_data_text: None,
            on_value_change: None,
            height: DEFAULT_HEIGHT,
            accessible_name_value: None,
            test_id_value: None,
            interaction: InteractionState::new(),
            legend_height: DEFAULT_LEGEND_HEIGHT,
            hovered: None,
            bounds: Rect::default(),
            plot_layout: None,
        }
    }
}

impl fmt::Debug for ScatterChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterChart")
            .field("rows", &self.data.len())
            .field("x", &self.x)
            .field("y", &self.y)
            .field("size", &self.size)
            .field("category", &self.category)
            .field("interaction", &self.interaction)
            .field("legend_height", &self.legend_height)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl ScatterChart {
    /// Create an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chart from a declarative configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &ScatterChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let [size_min, size_max] = config.size_range;
        let mut chart = Self::new()
            .data(config.data.clone())
            .x(config.x.clone())
            .y(config.y.clone())
            .category(config.category.clone())
            .colors(config.resolved_colors()?)
            .value_formatter(config.formatters())
            .size_range(size_min, size_max)
            .show_opacity(config.show_opacity)
            .start_end_only(config.start_end_only)
            .show_x_axis(config.show_x_axis)
            .show_y_axis(config.show_y_axis)
            .y_axis_width(config.y_axis_width)
            .show_tooltip(config.show_tooltip)
            .show_legend(config.show_legend)
            .show_grid_lines(config.show_grid_lines)
            .auto_min_x_value(config.auto_min_x_value)
            .auto_min_y_value(config.auto_min_y_value)
            .allow_decimals(config.allow_decimals)
            .show_animation(config.show_animation)
            .animation_duration(config.animation_duration)
            .height(config.height);
        chart.size = config.size.clone().filter(|s| !s.is_empty());
        chart.min_x_value = config.min_x_value;
        chart.max_x_value = config.max_x_value;
        chart.min_y_value = config.min_y_value;
        chart.max_y_value = config.max_y_value;
        chart.no_data_text.clone_from(&config.no_data_text);
        chart.accessible_name_value.clone_from(&config.accessible_name);
        chart.test_id_value.clone_from(&config.test_id);
        Ok(chart)
    }

    // ===== Builder =====

    /// Set the data rows.
    #[must_use]
    pub fn data(mut self, rows: Vec<Row>) -> Self {
        self.data = rows;
        self
    }

    /// Field plotted on the x axis.
    #[must_use]
    pub fn x(mut self, field: impl Into<String>) -> Self {
        self.x = field.into();
        self
    }

    /// Field plotted on the y axis.
    #[must_use]
    pub fn y(mut self, field: impl Into<String>) -> Self {
        self.y = field.into();
        self
    }

    /// Field that scales marker area.
    #[must_use]
    pub fn size(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.size = (!field.is_empty()).then_some(field);
        self
    }

    /// Field that splits rows into series.
    #[must_use]
    pub fn category(mut self, field: impl Into<String>) -> Self {
        self.category = field.into();
        self
    }

    /// Formatters for x, y and size values.
    #[must_use]
    pub fn value_formatter(mut self, formatters: AxisFormatters) -> Self {
        self.value_formatter = formatters;
        self
    }

    /// Category color sequence (empty = theme colors).
    #[must_use]
    pub fn colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Marker area range in px².
    #[must_use]
    pub fn size_range(mut self, min: f64, max: f64) -> Self {
        if min > max {
            warn!(min, max, "size range is inverted, swapping bounds");
            self.size_range = (max, min);
        } else {
            self.size_range = (min, max);
        }
        self
    }

    /// Translucent fill with a colored outline.
    #[must_use]
    pub const fn show_opacity(mut self, show: bool) -> Self {
        self.show_opacity = show;
        self
    }

    /// Only label the first and last x values.
    #[must_use]
    pub const fn start_end_only(mut self, enabled: bool) -> Self {
        self.start_end_only = enabled;
        self
    }

    /// Show x tick labels.
    #[must_use]
    pub const fn show_x_axis(mut self, show: bool) -> Self {
        self.show_x_axis = show;
        self
    }

    /// Show y tick labels.
    #[must_use]
    pub const fn show_y_axis(mut self, show: bool) -> Self {
        self.show_y_axis = show;
        self
    }

    /// Width reserved for the y axis.
    #[must_use]
    pub const fn y_axis_width(mut self, width: f32) -> Self {
        self.y_axis_width = width;
        self
    }

    /// Show a tooltip for the hovered point.
    #[must_use]
    pub const fn show_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    /// Show the legend.
    #[must_use]
    pub const fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Show dashed grid lines.
    #[must_use]
    pub const fn show_grid_lines(mut self, show: bool) -> Self {
        self.show_grid_lines = show;
        self
    }

    /// Start the x axis at the data minimum instead of zero.
    #[must_use]
    pub const fn auto_min_x_value(mut self, auto: bool) -> Self {
        self.auto_min_x_value = auto;
        self
    }

    /// Fixed x minimum.
    #[must_use]
    pub const fn min_x_value(mut self, value: f64) -> Self {
        self.min_x_value = Some(value);
        self
    }

    /// Fixed x maximum.
    #[must_use]
    pub const fn max_x_value(mut self, value: f64) -> Self {
        self.max_x_value = Some(value);
        self
    }

    /// Start the y axis at the data minimum instead of zero.
    #[must_use]
    pub const fn auto_min_y_value(mut self, auto: bool) -> Self {
        self.auto_min_y_value = auto;
        self
    }

    /// Fixed y minimum.
    #[must_use]
    pub const fn min_y_value(mut self, value: f64) -> Self {
        self.min_y_value = Some(value);
        self
    }

    /// Fixed y maximum.
    #[must_use]
    pub const fn max_y_value(mut self, value: f64) -> Self {
        self.max_y_value = Some(value);
        self
    }

    /// Allow fractional y ticks.
    #[must_use]
    pub const fn allow_decimals(mut self, allow: bool) -> Self {
        self.allow_decimals = allow;
        self
    }

    /// Animate series.
    #[must_use]
    pub const fn show_animation(mut self, show: bool) -> Self {
        self.show_animation = show;
        self
    }

    /// Animation duration in milliseconds.
    #[must_use]
    pub const fn animation_duration(mut self, ms: u32) -> Self {
        self.animation_duration = ms;
        self
    }

    /// Placeholder text for an empty dataset.
    #[must_use]
    pub fn no_data_text(mut self, text: impl Into<String>) -> Self {
        self.no_data_text = Some(text.into());
        self
    }

    /// Listener for highlight changes. Without one, clicks are ignored.
    #[must_use]
    pub fn on_value_change(mut self, callback: impl Fn(&ValueChange) + Send + Sync + 'static) -> Self {
        self.on_value_change = Some(Arc::new(callback));
        self
    }

    /// Chart height.
    #[must_use]
    pub const fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // ===== Derived data =====

    /// Data rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.data
    }

    /// Series categories, in first-seen order.
    ///
    /// Without a category field there is a single implicit category.
    #[must_use]
    pub fn category_values(&self) -> Vec<FieldValue> {
        if self.category.is_empty() {
            vec![implicit_category(&self.y)]
        } else {
            construct_categories(&self.data, &self.category)
        }
    }

    /// Series labels, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.category_values().iter().map(FieldValue::label).collect()
    }

    /// Category → color map for the current data.
    #[must_use]
    pub fn category_colors(&self) -> CategoryColors {
        construct_category_colors(&self.category_values(), &self.colors)
    }

    /// Declared x domain.
    #[must_use]
    pub fn x_domain(&self) -> AxisDomain {
        compute_domain(self.auto_min_x_value, self.min_x_value, self.max_x_value)
    }

    /// Declared y domain.
    #[must_use]
    pub fn y_domain(&self) -> AxisDomain {
        compute_domain(self.auto_min_y_value, self.min_y_value, self.max_y_value)
    }

    fn start_end_ticks(&self) -> Option<Vec<f64>> {
        if !self.start_end_only {
            return None;
        }
        let first = self.data.first()?.number(&self.x)?;
        let last = self.data.last()?.number(&self.x)?;
        Some(vec![first, last])
    }

    fn has_listener(&self) -> bool {
        self.on_value_change.is_some()
    }

    fn no_data_message(&self) -> String {
        self.no_data_text
            .clone()
            .unwrap_or_else(|| DEFAULT_NO_DATA_TEXT.to_string())
    }

    /// Assemble the render configuration from props and current state.
    #[must_use]
    pub fn chart_spec(&self) -> ChartSpec {
        if self.data.is_empty() {
            return ChartSpec::NoData {
                message: self.no_data_message(),
            };
        }

        let categories = self.category_values();
        let colors = construct_category_colors(&categories, &self.colors);
        let clickable = self.has_listener();

        let x_axis = (!self.x.is_empty()).then(|| AxisSpec {
            field: self.x.clone(),
            visible: self.show_x_axis,
            domain: self.x_domain(),
            ticks: self.start_end_ticks(),
            formatter: self.value_formatter.x.clone(),
            allow_decimals: true,
            allow_data_overflow: true,
            width: None,
        });
        let y_axis = (!self.y.is_empty()).then(|| AxisSpec {
            field: self.y.clone(),
            visible: self.show_y_axis,
            domain: self.y_domain(),
            ticks: None,
            formatter: self.value_formatter.y.clone(),
            allow_decimals: self.allow_decimals,
            allow_data_overflow: true,
            width: Some(self.y_axis_width),
        });
        let tooltip = self.show_tooltip.then(|| TooltipSpec {
            category_field: self.category.clone(),
            x: self.x.clone(),
            y: self.y.clone(),
            size: self.size.clone(),
            formatters: self.value_formatter.clone(),
        });
        let size = self.size.as_ref().map(|field| SizeSpec {
            field: field.clone(),
            range: self.size_range,
        });

        let fill_opacity = if self.show_opacity {
            TRANSLUCENT_FILL_OPACITY
        } else {
            1.0
        };
        let series = categories
            .iter()
            .map(|category| {
                let color = colors.color_for(category);
                let rows = if self.category.is_empty() {
                    self.data.clone()
                } else {
                    category::rows_in_category(&self.data, &self.category, category)
                };
                SeriesSpec {
                    category: category.clone(),
                    label: category.label(),
                    color,
                    rows,
                    fill_opacity,
                    stroke: self.show_opacity.then_some(color),
                    clickable,
                    animate: self.show_animation,
                    animation_duration_ms: self.animation_duration,
                }
            })
            .collect();

        let legend = self.show_legend.then(|| LegendSpec {
            items: categories
                .iter()
                .map(|category| LegendItem {
                    category: category.clone(),
                    label: category.label(),
                    color: colors.color_for(category),
                    highlighted: self.interaction.is_legend_highlighted(category),
                })
                .collect(),
            height: self.legend_height,
            clickable,
        });

        ChartSpec::Plot(PlotSpec {
            grid: self.show_grid_lines.then(GridSpec::default),
            x_axis,
            y_axis,
            tooltip,
            size,
            series,
            legend,
        })
    }

    // ===== Interaction =====

    /// Highlight state.
    #[must_use]
    pub const fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Highlighted row.
    #[must_use]
    pub const fn active_node(&self) -> Option<&Row> {
        self.interaction.active_node()
    }

    /// Highlighted category.
    #[must_use]
    pub const fn active_legend(&self) -> Option<&FieldValue> {
        self.interaction.active_legend()
    }

    fn notify(&self, change: Option<ValueChange>) -> Option<ValueChange> {
        if let (Some(callback), Some(change)) = (&self.on_value_change, &change) {
            callback(change);
        }
        change
    }

    /// Toggle the highlight of `row` and notify the listener.
    pub fn click_node(&mut self, row: &Row) -> Option<ValueChange> {
        let change = self.interaction.click_node(row, self.has_listener());
        self.notify(change)
    }

    /// Toggle the highlight of `category` and notify the listener.
    pub fn click_legend_item(&mut self, category: impl Into<FieldValue>) -> Option<ValueChange> {
        let category = category.into();
        let change = self
            .interaction
            .click_legend_item(&category, self.has_listener());
        self.notify(change)
    }

    /// Clear all highlights without notifying.
    pub fn click_background(&mut self) {
        self.interaction.click_background();
    }

    /// Row under the pointer, if any.
    #[must_use]
    pub fn hovered_row(&self) -> Option<&Row> {
        let index = self.hovered?;
        self.plot_layout
            .as_ref()
            .and_then(|layout| layout.points.get(index))
            .map(|target| &target.row)
    }

    /// Height currently reserved for the legend.
    #[must_use]
    pub const fn legend_height(&self) -> f32 {
        self.legend_height
    }

    /// Record a measured legend height. Returns `true` only if it changed.
    pub fn set_legend_height(&mut self, height: f32) -> bool {
        if (self.legend_height - height).abs() < f32::EPSILON {
            return false;
        }
        trace!(from = self.legend_height, to = height, "legend height changed");
        self.legend_height = height;
        true
    }

    /// Centers of the plotted points after layout, in series order.
    #[must_use]
    pub fn point_positions(&self) -> Vec<(Point, &Row)> {
        self.plot_layout
            .as_ref()
            .map(|layout| layout.points.iter().map(|t| (t.center, &t.row)).collect())
            .unwrap_or_default()
    }

    /// Plot rectangle after layout.
    #[must_use]
    pub fn plot_rect(&self) -> Option<Rect> {
        self.plot_layout.as_ref().map(|layout| layout.plot)
    }

    /// Resolved x tick values after layout.
    #[must_use]
    pub fn x_ticks(&self) -> &[f64] {
        self.plot_layout
            .as_ref()
            .map(|layout| layout.x_ticks.as_slice())
            .unwrap_or_default()
    }

    // ===== Verification =====

    fn check_series_visible(&self) -> Result<(), String> {
        if self.data.is_empty() {
            return Ok(());
        }
        match self
            .category_colors()
            .iter()
            .find(|(_, color)| color.a.is_nan() || color.a <= 0.0)
        {
            Some((category, _)) => Err(format!("series {category} has a transparent color")),
            None => Ok(()),
        }
    }

    fn check_geometry(&self) -> Result<(), String> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(format!("height {} is not a positive number", self.height));
        }
        if !(self.y_axis_width.is_finite() && self.y_axis_width >= 0.0) {
            return Err(format!("y axis width {} is invalid", self.y_axis_width));
        }
        let b = self.bounds;
        let finite = [b.x, b.y, b.width, b.height].iter().all(|v| v.is_finite());
        if !finite || b.width < 0.0 || b.height < 0.0 {
            return Err(format!("bounds {b:?} are not a valid rectangle"));
        }
        Ok(())
    }

    // ===== Layout helpers =====

    fn layout_plot(&mut self, spec: &PlotSpec) -> PlotLayout {
        let legend = spec.legend.as_ref().map(|legend_spec| {
            let labels: Vec<&str> = legend_spec.items.iter().map(|i| i.label.as_str()).collect();
            let area = Rect::new(
                self.bounds.x,
                self.bounds.y,
                self.bounds.width,
                self.legend_height,
            );
            let layout = layout_legend(&labels, area);
            self.set_legend_height(layout.measured_height());
            layout
        });

        let y_axis_width = spec
            .y_axis
            .as_ref()
            .filter(|axis| axis.visible)
            .and_then(|axis| axis.width)
            .unwrap_or(0.0);
        let x_axis_height = if spec.x_axis.as_ref().is_some_and(|axis| axis.visible) {
            X_AXIS_HEIGHT
        } else {
            PLOT_MARGIN
        };
        let top = if legend.is_some() {
            self.legend_height
        } else {
            PLOT_MARGIN
        };
        let plot = self.bounds.deflate(Insets::new(
            y_axis_width.max(PLOT_MARGIN),
            top,
            PLOT_MARGIN,
            x_axis_height,
        ));

        let x_domain = spec.x_axis.as_ref().map(|axis| {
            axis.domain
                .resolve(numeric_extent(&self.data, &axis.field), axis.allow_decimals)
        });
        let y_domain = spec.y_axis.as_ref().map(|axis| {
            axis.domain
                .resolve(numeric_extent(&self.data, &axis.field), axis.allow_decimals)
        });
        let x_ticks = match (&spec.x_axis, &x_domain) {
            (Some(axis), Some(domain)) => axis.ticks.clone().unwrap_or_else(|| domain.ticks.clone()),
            _ => Vec::new(),
        };

        let size_extent = spec
            .size
            .as_ref()
            .and_then(|size| numeric_extent(&self.data, &size.field));
        let mut points = Vec::new();
        if let (Some(x_axis), Some(y_axis), Some(xd), Some(yd)) =
            (&spec.x_axis, &spec.y_axis, &x_domain, &y_domain)
        {
            for (series_index, series) in spec.series.iter().enumerate() {
                for row in &series.rows {
                    let (Some(xv), Some(yv)) = (row.number(&x_axis.field), row.number(&y_axis.field))
                    else {
                        continue;
                    };
                    let center = Point::new(
                        xd.scale(xv, plot.x, plot.right()),
                        yd.scale(yv, plot.bottom(), plot.y),
                    );
                    // overflowing points are clipped and cannot be hit
                    if !plot.contains_point(&center) {
                        continue;
                    }
                    points.push(PointTarget {
                        series: series_index,
                        row: row.clone(),
                        center,
                        radius: marker_radius(spec.marker_area(row, size_extent)),
                    });
                }
            }
        }

        PlotLayout {
            plot,
            legend,
            x_domain,
            y_domain,
            x_ticks,
            points,
        }
    }

    fn hit_point(&self, position: Point) -> Option<usize> {
        let layout = self.plot_layout.as_ref()?;
        // last painted is on top
        layout.points.iter().rposition(|target| target.hit(position))
    }

    // ===== Paint helpers =====

    fn paint_points(&self, canvas: &mut dyn Canvas, layout: &PlotLayout, spec: &PlotSpec) {
        canvas.push_clip(layout.plot);
        for target in &layout.points {
            let Some(series) = spec.series.get(target.series) else {
                continue;
            };
            let opacity = self
                .interaction
                .point_opacity(&target.row, series.fill_opacity);
            canvas.fill_circle(target.center, target.radius, series.color.with_alpha(opacity));
            if let Some(stroke) = series.stroke {
                canvas.stroke_circle(target.center, target.radius, stroke, 1.0);
            }
        }
        canvas.pop_clip();
    }

    fn paint_hover(&self, canvas: &mut dyn Canvas, layout: &PlotLayout, spec: &PlotSpec) {
        let (Some(tooltip_spec), Some(target)) = (
            &spec.tooltip,
            self.hovered.and_then(|i| layout.points.get(i)),
        ) else {
            return;
        };
        let plot = layout.plot;
        canvas.draw_line(
            Point::new(target.center.x, plot.y),
            Point::new(target.center.x, plot.bottom()),
            CURSOR_COLOR,
            1.0,
        );
        canvas.draw_line(
            Point::new(plot.x, target.center.y),
            Point::new(plot.right(), target.center.y),
            CURSOR_COLOR,
            1.0,
        );
        let content = TooltipContent::for_row(&target.row, tooltip_spec, &self.category_colors());
        tooltip::paint_tooltip(canvas, &content, target.center, self.bounds);
    }
}

fn paint_grid(canvas: &mut dyn Canvas, layout: &PlotLayout, grid: &GridSpec) {
    let plot = layout.plot;
    if grid.vertical {
        if let Some(xd) = &layout.x_domain {
            for &tick in &layout.x_ticks {
                let x = xd.scale(tick, plot.x, plot.right());
                if x < plot.x || x > plot.right() {
                    continue;
                }
                canvas.draw_dashed_line(
                    Point::new(x, plot.y),
                    Point::new(x, plot.bottom()),
                    GRID_COLOR,
                    &grid.dash,
                );
            }
        }
    }
    if grid.horizontal {
        if let Some(yd) = &layout.y_domain {
            for &tick in &yd.ticks {
                let y = yd.scale(tick, plot.bottom(), plot.y);
                canvas.draw_dashed_line(
                    Point::new(plot.x, y),
                    Point::new(plot.right(), y),
                    GRID_COLOR,
                    &grid.dash,
                );
            }
        }
    }
}

fn paint_axes(canvas: &mut dyn Canvas, layout: &PlotLayout, spec: &PlotSpec) {
    let plot = layout.plot;
    let style = TextStyle {
        size: TICK_FONT_SIZE,
        color: TICK_COLOR,
        ..TextStyle::default()
    };
    if let (Some(axis), Some(xd)) = (&spec.x_axis, &layout.x_domain) {
        if axis.visible {
            for &tick in &layout.x_ticks {
                let label = axis.formatter.format(tick);
                let x = xd.scale(tick, plot.x, plot.right());
                let width = lumina_core::estimate_text_width(&label, TICK_FONT_SIZE);
                canvas.draw_text(
                    &label,
                    Point::new(x - width / 2.0, plot.bottom() + 6.0 + TICK_FONT_SIZE),
                    &style,
                );
            }
        }
    }
    if let (Some(axis), Some(yd)) = (&spec.y_axis, &layout.y_domain) {
        if axis.visible {
            for &tick in &yd.ticks {
                let label = axis.formatter.format(tick);
                let y = yd.scale(tick, plot.bottom(), plot.y);
                let width = lumina_core::estimate_text_width(&label, TICK_FONT_SIZE);
                canvas.draw_text(
                    &label,
                    Point::new(plot.x - 3.0 - width, y + TICK_FONT_SIZE / 3.0),
                    &style,
                );
            }
        }
    }
}

impl Widget for ScatterChart {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            DEFAULT_WIDTH
        };
        constraints.constrain(Size::new(width, self.height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        match self.chart_spec() {
            ChartSpec::NoData { message } => {
                debug!(%message, "no data, showing placeholder");
                self.plot_layout = None;
                self.hovered = None;
            }
            ChartSpec::Plot(spec) => {
                let layout = self.layout_plot(&spec);
                if self.hovered.is_some_and(|i| i >= layout.points.len()) {
                    self.hovered = None;
                }
                self.plot_layout = Some(layout);
            }
        }
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let verification = self.verify();
        if !verification.is_valid() {
            warn!(failed = ?verification.failed, "scatter chart failed verification, not painting");
            return;
        }
        let spec = match self.chart_spec() {
            ChartSpec::NoData { message } => {
                let mut placeholder = NoData::new(message);
                placeholder.layout(self.bounds);
                placeholder.paint(canvas);
                return;
            }
            ChartSpec::Plot(spec) => spec,
        };
        let Some(layout) = &self.plot_layout else {
            warn!("scatter chart painted before layout");
            return;
        };

        if let Some(grid) = &spec.grid {
            paint_grid(canvas, layout, grid);
        }
        paint_axes(canvas, layout, &spec);
        self.paint_points(canvas, layout, &spec);
        if let (Some(legend_spec), Some(legend_layout)) = (&spec.legend, &layout.legend) {
            paint_legend(canvas, legend_spec, legend_layout);
        }
        self.paint_hover(canvas, layout, &spec);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown { position, .. } => {
                if !self.bounds.contains_point(position) {
                    return None;
                }
                let layout = self.plot_layout.as_ref()?;
                let legend_hit = layout
                    .legend
                    .as_ref()
                    .and_then(|legend| legend.hit_test(*position))
                    .and_then(|index| self.category_values().into_iter().nth(index));
                let change = if let Some(category) = legend_hit {
                    self.click_legend_item(category)
                } else if let Some(index) = self.hit_point(*position) {
                    let row = layout.points[index].row.clone();
                    self.click_node(&row)
                } else {
                    self.click_background();
                    None
                };
                change.map(|c| Box::new(c) as Box<dyn Any + Send>)
            }
            Event::MouseMove { position } => {
                self.hovered = if self.bounds.contains_point(position) {
                    self.hit_point(*position)
                } else {
                    None
                };
                None
            }
            Event::MouseLeave => {
                self.hovered = None;
                None
            }
            Event::Resize { width, height } => {
                let bounds = Rect::new(self.bounds.x, self.bounds.y, *width, *height);
                self.layout(bounds);
                None
            }
            Event::MouseUp { .. } | Event::MouseEnter => None,
        }
    }

    fn is_interactive(&self) -> bool {
        self.has_listener() || self.show_tooltip
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref().or(Some("Scatter chart"))
    }

    fn accessible_role(&self) -> AccessibleRole {
        if self.data.is_empty() {
            AccessibleRole::Status
        } else {
            AccessibleRole::Image
        }
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Brick for ScatterChart {
    fn brick_name(&self) -> &'static str {
        "ScatterChart"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        &[BrickAssertion::SeriesVisible, BrickAssertion::FiniteGeometry]
    }

    fn verify(&self) -> BrickVerification {
        BrickVerification::check_all(self.assertions(), |assertion| match assertion {
            BrickAssertion::SeriesVisible => self.check_series_visible(),
            BrickAssertion::FiniteGeometry => self.check_geometry(),
            _ => Ok(()),
        })
    }

    fn to_html(&self) -> String {
        let test_id = escape_html(self.test_id_value.as_deref().unwrap_or("scatter-chart"));
        if self.data.is_empty() {
            let placeholder = NoData::new(self.no_data_message());
            return format!(
                r#"<div class="lumina-scatter-chart" data-testid="{test_id}">{}</div>"#,
                placeholder.to_html()
            );
        }
        let name = escape_html(self.accessible_name().unwrap_or_default());
        format!(
            r#"<div class="lumina-scatter-chart" role="img" aria-label="{name}" data-testid="{test_id}" data-series="{}" data-points="{}"></div>"#,
            self.categories().len(),
            self.data.len()
        )
    }

    fn to_css(&self) -> String {
        format!(
            r".lumina-scatter-chart {{
    width: 100%;
    height: {}px;
}}",
            self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::chart_spec::GRID_DASH;
    use super::*;
    use lumina_core::{BaseColor, DrawCommand, RecordingCanvas};
    use std::sync::Mutex;

    fn two_categories() -> Vec<Row> {
        vec![
            Row::new().with("x", 1.0).with("y", 2.0).with("cat", "A"),
            Row::new().with("x", 3.0).with("y", 4.0).with("cat", "B"),
        ]
    }

    fn chart() -> ScatterChart {
        ScatterChart::new()
            .data(two_categories())
            .x("x")
            .y("y")
            .category("cat")
    }

    fn recorded() -> (ScatterChart, Arc<Mutex<Vec<ValueChange>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let chart = chart().on_value_change(move |change| sink.lock().unwrap().push(change.clone()));
        (chart, seen)
    }

    fn laid_out(mut chart: ScatterChart) -> ScatterChart {
        chart.layout(Rect::new(0.0, 0.0, 600.0, 320.0));
        chart
    }

    // ===== Builder Tests =====

    #[test]
    fn test_defaults() {
        let c = ScatterChart::new();
        assert_eq!(c.size_range, (1.0, 1000.0));
        assert_eq!(c.y_axis_width, 56.0);
        assert_eq!(c.animation_duration, 900);
        assert_eq!(c.legend_height(), 60.0);
        assert!(c.show_animation);
        assert!(c.show_legend && c.show_tooltip && c.show_grid_lines);
        assert!(c.allow_decimals);
    }

    #[test]
    fn test_inverted_size_range_is_swapped() {
        let c = ScatterChart::new().size_range(100.0, 10.0);
        assert_eq!(c.size_range, (10.0, 100.0));
    }

    #[test]
    fn test_empty_size_field_is_none() {
        assert_eq!(ScatterChart::new().size("").size, None);
        assert_eq!(ScatterChart::new().size("pop").size.as_deref(), Some("pop"));
    }

    // ===== Chart Spec Tests =====

    #[test]
    fn test_two_categories_two_series() {
        let spec = chart().chart_spec();
        let plot = spec.plot().unwrap();
        assert_eq!(plot.categories(), vec!["A", "B"]);
        assert_eq!(plot.series[0].rows, vec![two_categories()[0].clone()]);
        assert_eq!(plot.series[1].rows, vec![two_categories()[1].clone()]);
        assert_eq!(plot.series[0].color, BaseColor::Blue.to_color());
        assert_eq!(plot.series[1].color, BaseColor::Cyan.to_color());
    }

    #[test]
    fn test_categories_distinguish_number_from_text() {
        let rows = vec![
            Row::new().with("x", 1.0).with("y", 2.0).with("cat", 1.0),
            Row::new().with("x", 3.0).with("y", 4.0).with("cat", "1"),
        ];
        let c = chart().data(rows.clone());
        assert_eq!(
            c.category_values(),
            vec![FieldValue::Number(1.0), FieldValue::from("1")]
        );
        assert_eq!(c.categories(), vec!["1", "1"]);

        let spec = c.chart_spec();
        let plot = spec.plot().unwrap();
        assert_eq!(plot.series.len(), 2);
        assert_eq!(plot.series[0].rows, vec![rows[0].clone()]);
        assert_eq!(plot.series[1].rows, vec![rows[1].clone()]);
        assert_ne!(plot.series[0].color, plot.series[1].color);
        assert_eq!(
            plot.series_for(&FieldValue::from("1")).map(|s| s.rows.len()),
            Some(1)
        );
    }

    #[test]
    fn test_empty_data_is_placeholder_only() {
        let spec = ScatterChart::new().x("x").y("y").chart_spec();
        assert_eq!(
            spec,
            ChartSpec::NoData {
                message: "No data".to_string()
            }
        );
        let custom = ScatterChart::new().no_data_text("Nothing yet").chart_spec();
        assert_eq!(
            custom,
            ChartSpec::NoData {
                message: "Nothing yet".to_string()
            }
        );
    }

    #[test]
    fn test_implicit_category_holds_all_rows() {
        let spec = ScatterChart::new()
            .data(two_categories())
            .x("x")
            .y("y")
            .chart_spec();
        let plot = spec.plot().unwrap();
        assert_eq!(plot.categories(), vec!["y"]);
        assert_eq!(plot.series[0].rows.len(), 2);
    }

    #[test]
    fn test_axes_absent_without_fields() {
        let spec = ScatterChart::new().data(two_categories()).chart_spec();
        let plot = spec.plot().unwrap();
        assert!(plot.x_axis.is_none());
        assert!(plot.y_axis.is_none());
        assert_eq!(plot.categories(), vec!["value"]);
    }

    #[test]
    fn test_axis_specs() {
        let spec = chart().allow_decimals(false).y_axis_width(80.0).chart_spec();
        let plot = spec.plot().unwrap();
        let x = plot.x_axis.as_ref().unwrap();
        let y = plot.y_axis.as_ref().unwrap();
        assert!(x.allow_decimals);
        assert!(!y.allow_decimals);
        assert!(x.allow_data_overflow && y.allow_data_overflow);
        assert_eq!(y.width, Some(80.0));
        assert_eq!(x.width, None);
        assert_eq!(x.ticks, None);
        assert_eq!(x.domain.min, AxisBound::Value(0.0));
    }

    #[test]
    fn test_start_end_ticks() {
        let rows: Vec<Row> = [1.0, 2.0, 4.0, 8.0, 16.0]
            .iter()
            .map(|&x| Row::new().with("x", x).with("y", 1.0))
            .collect();
        let spec = ScatterChart::new()
            .data(rows)
            .x("x")
            .y("y")
            .start_end_only(true)
            .chart_spec();
        let x = spec.plot().unwrap().x_axis.clone().unwrap();
        assert_eq!(x.ticks, Some(vec![1.0, 16.0]));
        assert_eq!(spec.plot().unwrap().y_axis.as_ref().unwrap().ticks, None);
    }

    #[test]
    fn test_opacity_mode() {
        let spec = chart().show_opacity(true).chart_spec();
        let series = &spec.plot().unwrap().series[0];
        assert_eq!(series.fill_opacity, 0.7);
        assert_eq!(series.stroke, Some(series.color));

        let spec = chart().chart_spec();
        let series = &spec.plot().unwrap().series[0];
        assert_eq!(series.fill_opacity, 1.0);
        assert_eq!(series.stroke, None);
    }

    #[test]
    fn test_optional_guides() {
        let spec = chart()
            .show_grid_lines(false)
            .show_tooltip(false)
            .show_legend(false)
            .chart_spec();
        let plot = spec.plot().unwrap();
        assert!(plot.grid.is_none());
        assert!(plot.tooltip.is_none());
        assert!(plot.legend.is_none());
        assert!(plot.size.is_none());
    }

    #[test]
    fn test_size_spec() {
        let spec = chart().size("x").size_range(4.0, 400.0).chart_spec();
        let size = spec.plot().unwrap().size.clone().unwrap();
        assert_eq!(size.field, "x");
        assert_eq!(size.range, (4.0, 400.0));
    }

    #[test]
    fn test_clickable_follows_listener() {
        let spec = chart().chart_spec();
        assert!(!spec.plot().unwrap().series[0].clickable);
        let (c, _) = recorded();
        let spec = c.chart_spec();
        assert!(spec.plot().unwrap().series[0].clickable);
        assert!(spec.plot().unwrap().legend.as_ref().unwrap().clickable);
    }

    #[test]
    fn test_animation_passthrough() {
        let spec = chart().show_animation(false).animation_duration(250).chart_spec();
        let series = &spec.plot().unwrap().series[0];
        assert!(!series.animate);
        assert_eq!(series.animation_duration_ms, 250);
    }

    // ===== Interaction Tests =====

    #[test]
    fn test_click_node_notifies_listener() {
        let (mut c, seen) = recorded();
        let row = two_categories()[0].clone();
        assert_eq!(c.click_node(&row), Some(ValueChange::Node(row.clone())));
        assert_eq!(c.click_node(&row), Some(ValueChange::Cleared));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![ValueChange::Node(row), ValueChange::Cleared]
        );
    }

    #[test]
    fn test_click_without_listener_is_ignored() {
        let mut c = chart();
        assert_eq!(c.click_node(&two_categories()[0]), None);
        assert_eq!(c.click_legend_item("A"), None);
        assert_eq!(c.interaction().phase(), InteractionPhase::Idle);
    }

    #[test]
    fn test_legend_highlight_in_spec() {
        let (mut c, _) = recorded();
        c.click_legend_item("B");
        let spec = c.chart_spec();
        let items = &spec.plot().unwrap().legend.as_ref().unwrap().items;
        assert!(!items[0].highlighted);
        assert!(items[1].highlighted);
    }

    #[test]
    fn test_background_click_never_notifies() {
        let (mut c, seen) = recorded();
        c.click_node(&two_categories()[0]);
        c.click_legend_item("A");
        c.click_background();
        assert_eq!(c.active_node(), None);
        assert_eq!(c.active_legend(), None);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    // ===== Legend Height Tests =====

    #[test]
    fn test_set_legend_height_only_on_change() {
        let mut c = ScatterChart::new();
        assert!(!c.set_legend_height(60.0));
        assert!(c.set_legend_height(44.0));
        assert!(!c.set_legend_height(44.0));
        assert_eq!(c.legend_height(), 44.0);
    }

    #[test]
    fn test_layout_measures_legend() {
        let c = laid_out(chart());
        assert_eq!(c.legend_height(), 44.0);
        // stable across relayout
        let mut again = c.clone();
        again.layout(Rect::new(0.0, 0.0, 600.0, 320.0));
        assert_eq!(again.legend_height(), 44.0);
    }

    // ===== Layout Tests =====

    #[test]
    fn test_measure() {
        let c = chart();
        let size = c.measure(Constraints::loose(Size::new(800.0, 1000.0)));
        assert_eq!(size, Size::new(800.0, 320.0));
        let size = c.measure(Constraints::unbounded());
        assert_eq!(size, Size::new(DEFAULT_WIDTH, 320.0));
    }

    #[test]
    fn test_layout_places_points_in_plot() {
        let c = laid_out(chart());
        let plot = c.plot_rect().unwrap();
        assert_eq!(plot.x, 56.0);
        assert_eq!(plot.y, 44.0);
        let points = c.point_positions();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|(p, _)| plot.contains_point(p)));
        // larger y is higher up
        assert!(points[1].0.y < points[0].0.y);
    }

    #[test]
    fn test_points_outside_explicit_domain_are_clipped() {
        let c = laid_out(chart().max_x_value(2.0));
        let points = c.point_positions();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].1, &two_categories()[0]);
    }

    #[test]
    fn test_x_ticks_start_end_only() {
        let c = laid_out(chart().start_end_only(true));
        assert_eq!(c.x_ticks(), &[1.0, 3.0]);
    }

    #[test]
    fn test_layout_with_unbounded_y_domain() {
        let mut c = laid_out(chart().max_y_value(f64::INFINITY));
        assert_eq!(c.point_positions().len(), 2);

        c = laid_out(chart().min_y_value(-1e308).max_y_value(1e308));
        let y = c.plot_layout.as_ref().unwrap().y_domain.clone().unwrap();
        assert_eq!(y.ticks, vec![-1e308, 1e308]);
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);
        assert!(!canvas.circles().is_empty());
    }

    #[test]
    fn test_bounds_after_layout() {
        let c = laid_out(chart());
        assert_eq!(Widget::bounds(&c), Rect::new(0.0, 0.0, 600.0, 320.0));
    }

    // ===== Event Tests =====

    #[test]
    fn test_mouse_down_on_point() {
        let (c, seen) = recorded();
        let mut c = laid_out(c);
        let (center, row) = c.point_positions()[0];
        let row = row.clone();
        let message = c.event(&Event::click(center)).unwrap();
        let change = message.downcast::<ValueChange>().unwrap();
        assert_eq!(*change, ValueChange::Node(row.clone()));
        assert_eq!(c.active_node(), Some(&row));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_mouse_down_on_legend() {
        let (c, _) = recorded();
        let mut c = laid_out(c);
        let legend = c.plot_layout.as_ref().unwrap().legend.clone().unwrap();
        let b = legend.items[1].rect.center();
        let message = c.event(&Event::click(b)).unwrap();
        assert_eq!(
            *message.downcast::<ValueChange>().unwrap(),
            ValueChange::Category {
                category_clicked: FieldValue::from("B")
            }
        );
    }

    #[test]
    fn test_mouse_down_on_legend_reports_category_value() {
        let rows = vec![
            Row::new().with("x", 1.0).with("y", 2.0).with("cat", 1.0),
            Row::new().with("x", 3.0).with("y", 4.0).with("cat", "1"),
        ];
        let (c, _) = recorded();
        let mut c = laid_out(c.data(rows));
        let legend = c.plot_layout.as_ref().unwrap().legend.clone().unwrap();
        let first = c.event(&Event::click(legend.items[0].rect.center())).unwrap();
        assert_eq!(
            *first.downcast::<ValueChange>().unwrap(),
            ValueChange::Category {
                category_clicked: FieldValue::Number(1.0)
            }
        );
        let second = c.event(&Event::click(legend.items[1].rect.center())).unwrap();
        assert_eq!(
            *second.downcast::<ValueChange>().unwrap(),
            ValueChange::Category {
                category_clicked: FieldValue::from("1")
            }
        );
        assert_eq!(c.active_legend(), Some(&FieldValue::from("1")));
    }

    #[test]
    fn test_mouse_down_on_background() {
        let (c, seen) = recorded();
        let mut c = laid_out(c);
        let (center, _) = c.point_positions()[0];
        c.event(&Event::click(center));
        let plot = c.plot_rect().unwrap();
        let empty = Point::new(plot.right() - 1.0, plot.bottom() - 1.0);
        assert!(c.event(&Event::click(empty)).is_none());
        assert_eq!(c.interaction().phase(), InteractionPhase::Idle);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_mouse_down_outside_bounds() {
        let (c, _) = recorded();
        let mut c = laid_out(c);
        assert!(c.event(&Event::click(Point::new(-10.0, -10.0))).is_none());
    }

    #[test]
    fn test_hover_and_leave() {
        let mut c = laid_out(chart());
        let (center, row) = c.point_positions()[1];
        let row = row.clone();
        c.event(&Event::MouseMove { position: center });
        assert_eq!(c.hovered_row(), Some(&row));
        c.event(&Event::MouseLeave);
        assert_eq!(c.hovered_row(), None);
    }

    #[test]
    fn test_resize_relayouts() {
        let mut c = laid_out(chart());
        c.event(&Event::Resize {
            width: 300.0,
            height: 200.0,
        });
        assert_eq!(Widget::bounds(&c).width, 300.0);
        assert!(c.plot_rect().unwrap().right() <= 300.0);
    }

    // ===== Paint Tests =====

    #[test]
    fn test_paint_empty_records_placeholder_text_only() {
        let mut c = ScatterChart::new().x("x").y("y");
        c.layout(Rect::new(0.0, 0.0, 400.0, 320.0));
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["No data"]);
        assert!(canvas.circles().is_empty());
    }

    #[test]
    fn test_paint_points_clipped_to_plot() {
        let c = laid_out(chart());
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);
        let commands = canvas.commands();
        let push = commands
            .iter()
            .position(|cmd| matches!(cmd, DrawCommand::PushClip(_)))
            .unwrap();
        let pop = commands
            .iter()
            .position(|cmd| matches!(cmd, DrawCommand::PopClip))
            .unwrap();
        let inside = commands[push..pop]
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(inside, 2);
        assert_eq!(canvas.clip_depth(), 0);
    }

    #[test]
    fn test_paint_dims_inactive_points() {
        let (c, _) = recorded();
        let mut c = laid_out(c);
        let row = two_categories()[0].clone();
        c.click_node(&row);
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);
        let alphas: Vec<f32> = canvas
            .commands()
            .iter()
            .skip_while(|cmd| !matches!(cmd, DrawCommand::PushClip(_)))
            .filter_map(|cmd| match cmd {
                DrawCommand::Circle { style, .. } => style.fill.map(|f| f.a),
                _ => None,
            })
            .take(2)
            .collect();
        assert_eq!(alphas, vec![1.0, DIMMED_OPACITY]);
    }

    #[test]
    fn test_paint_grid_is_dashed() {
        let c = laid_out(chart());
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);
        let dashed = canvas.commands().iter().any(|cmd| {
            matches!(cmd, DrawCommand::Path { style, .. } if style.dash == GRID_DASH.to_vec())
        });
        assert!(dashed);
    }

    #[test]
    fn test_paint_tick_labels_use_formatter() {
        let formatters = AxisFormatters {
            y: lumina_core::ValueFormatter::new(|v| format!("{v}%")),
            ..AxisFormatters::default()
        };
        let c = laid_out(chart().value_formatter(formatters));
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);
        assert!(canvas.texts().contains(&"4%"));
    }

    #[test]
    fn test_paint_tooltip_on_hover() {
        let mut c = laid_out(chart());
        let (center, _) = c.point_positions()[0];
        c.event(&Event::MouseMove { position: center });
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);
        let texts = canvas.texts();
        assert!(texts.contains(&"x: 1"));
        assert!(texts.contains(&"y: 2"));
    }

    // ===== Brick Tests =====

    #[test]
    fn test_verify_passes_for_default_chart() {
        let c = laid_out(chart());
        let verification = c.verify();
        assert!(verification.is_valid());
        assert_eq!(
            verification.passed,
            vec![BrickAssertion::SeriesVisible, BrickAssertion::FiniteGeometry]
        );
    }

    #[test]
    fn test_transparent_series_fails_and_skips_paint() {
        let c = laid_out(chart().colors(vec![BaseColor::Blue.to_color(), Color::TRANSPARENT]));
        let verification = c.verify();
        assert!(!c.can_render());
        assert_eq!(verification.failed.len(), 1);
        assert_eq!(verification.failed[0].0, BrickAssertion::SeriesVisible);
        assert!(verification.failed[0].1.contains('B'));

        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_transparent_colors_allowed_without_data() {
        let c = ScatterChart::new().colors(vec![Color::TRANSPARENT]);
        assert!(c.verify().is_valid());
    }

    #[test]
    fn test_invalid_geometry_fails_verify() {
        let c = chart().height(f32::NAN);
        assert!(!c.can_render());
        let c = chart().y_axis_width(f32::INFINITY);
        assert_eq!(c.verify().failed[0].0, BrickAssertion::FiniteGeometry);

        let mut c = chart();
        c.layout(Rect::new(0.0, 0.0, f32::INFINITY, 320.0));
        let mut canvas = RecordingCanvas::new();
        c.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_to_html() {
        let html = chart().with_test_id("sc").to_html();
        assert!(html.starts_with(r#"<div class="lumina-scatter-chart" role="img""#));
        assert!(html.contains(r#"data-testid="sc""#));
        assert!(html.contains(r#"data-series="2""#));

        let empty = ScatterChart::new().to_html();
        assert!(empty.contains("lumina-no-data"));
        assert!(!empty.contains("role=\"img\""));
    }

    #[test]
    fn test_accessibility() {
        assert_eq!(chart().accessible_role(), AccessibleRole::Image);
        assert_eq!(ScatterChart::new().accessible_role(), AccessibleRole::Status);
        assert_eq!(
            chart().with_accessible_name("Life expectancy").accessible_name(),
            Some("Life expectancy")
        );
    }

    // ===== Config Tests =====

    #[test]
    fn test_from_config_matches_builder() {
        let yaml = r"
x: x
y: y
category: cat
show_opacity: true
data:
  - { x: 1, y: 2, cat: A }
  - { x: 3, y: 4, cat: B }
";
        let config = ScatterChartConfig::from_yaml(yaml).unwrap();
        let from_config = ScatterChart::from_config(&config).unwrap();
        let built = chart().show_opacity(true);
        assert_eq!(from_config.chart_spec(), built.chart_spec());
    }

    #[test]
    fn test_from_config_colors() {
        let config = ScatterChartConfig::from_yaml("colors: [rose, '#000000']").unwrap();
        let c = ScatterChart::from_config(&config).unwrap();
        assert_eq!(c.colors, vec![BaseColor::Rose.to_color(), Color::BLACK]);
    }
}
