//! Declarative scatter chart configuration.
//!
//! A manifest names the plotted fields, the visual options and (inline) the
//! data rows. Every option defaults to the same value the widget builder
//! uses, so an empty manifest and `ScatterChart::new()` describe the same
//! chart.

use crate::error::ConfigError;
use lumina_core::{AxisFormatters, BaseColor, Color, Row, ValueFormatter};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scatter chart configuration loaded from YAML or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterChartConfig {
    /// Inline data rows
    pub data: Vec<Row>,
    /// Field plotted on the x axis
    pub x: String,
    /// Field plotted on the y axis
    pub y: String,
    /// Field controlling marker size
    pub size: Option<String>,
    /// Field splitting rows into series
    pub category: String,
    /// Color sequence: base color names or hex strings
    pub colors: Vec<String>,
    /// Marker area range `[min, max]` in px²
    pub size_range: [f64; 2],
    /// Translucent markers with a colored stroke
    pub show_opacity: bool,
    /// Only label the first and last x values
    pub start_end_only: bool,
    /// Show the x axis
    pub show_x_axis: bool,
    /// Show the y axis
    pub show_y_axis: bool,
    /// Width reserved for the y axis
    pub y_axis_width: f32,
    /// Show a tooltip for the hovered point
    pub show_tooltip: bool,
    /// Show the legend
    pub show_legend: bool,
    /// Show dashed grid lines
    pub show_grid_lines: bool,
    /// Let the x axis start from the data instead of zero
    pub auto_min_x_value: bool,
    /// Explicit x minimum
    pub min_x_value: Option<f64>,
    /// Explicit x maximum
    pub max_x_value: Option<f64>,
    /// Let the y axis start from the data instead of zero
    pub auto_min_y_value: bool,
    /// Explicit y minimum
    pub min_y_value: Option<f64>,
    /// Explicit y maximum
    pub max_y_value: Option<f64>,
    /// Allow fractional y ticks
    pub allow_decimals: bool,
    /// Animate series
    pub show_animation: bool,
    /// Animation duration in milliseconds
    pub animation_duration: u32,
    /// Placeholder text when there is no data
    pub no_data_text: Option<String>,
    /// Chart height in pixels
    pub height: f32,
    /// Accessible name
    pub accessible_name: Option<String>,
    /// Test ID
    pub test_id: Option<String>,
    /// Number formatting per channel
    pub value_format: ValueFormatConfig,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            x: String::new(),
            y: String::new(),
            size: None,
            category: String::new(),
            colors: Vec::new(),
            size_range: [1.0, 1000.0],
            show_opacity: false,
            start_end_only: false,
            show_x_axis: true,
            show_y_axis: true,
            y_axis_width: 56.0,
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
            animation_duration: 900,
            no_data_text: None,
            height: 320.0,
            accessible_name: None,
            test_id: None,
            value_format: ValueFormatConfig::default(),
        }
    }
}

impl ScatterChartConfig {
    /// Parse and validate a YAML manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the configuration is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        debug!(rows = config.data.len(), x = %config.x, y = %config.y, "parsed YAML chart config");
        Ok(config)
    }

    /// Parse and validate a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the configuration is invalid.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(rows = config.data.len(), x = %config.x, y = %config.y, "parsed JSON chart config");
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check value ranges and colors.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [size_min, size_max] = self.size_range;
        if !size_min.is_finite() || !size_max.is_finite() || size_min < 0.0 {
            return Err(ConfigError::invalid(
                "size_range",
                "bounds must be finite and non-negative",
            ));
        }
        if size_min > size_max {
            return Err(ConfigError::invalid(
                "size_range",
                format!("min {size_min} exceeds max {size_max}"),
            ));
        }
        check_bounds("x", self.min_x_value, self.max_x_value)?;
        check_bounds("y", self.min_y_value, self.max_y_value)?;
        if !self.y_axis_width.is_finite() || self.y_axis_width < 0.0 {
            return Err(ConfigError::invalid("y_axis_width", "must be finite and non-negative"));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ConfigError::invalid("height", "must be finite and positive"));
        }
        self.resolved_colors().map(|_| ())
    }

    /// Parse the configured color sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownColor`] for the first unparseable entry.
    pub fn resolved_colors(&self) -> Result<Vec<Color>, ConfigError> {
        self.colors.iter().map(|c| parse_color(c)).collect()
    }

    /// Build value formatters for the x, y and size channels.
    #[must_use]
    pub fn formatters(&self) -> AxisFormatters {
        AxisFormatters {
            x: self.value_format.x.to_formatter(),
            y: self.value_format.y.to_formatter(),
            size: self.value_format.size.to_formatter(),
        }
    }
}

fn check_bounds(axis: &str, min: Option<f64>, max: Option<f64>) -> Result<(), ConfigError> {
    for (end, value) in [("min", min), ("max", max)] {
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            return Err(ConfigError::invalid(
                &format!("{end}_{axis}_value"),
                format!("{v} is not a finite number"),
            ));
        }
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(ConfigError::invalid(
                &format!("min_{axis}_value"),
                format!("{lo} exceeds max_{axis}_value {hi}"),
            ));
        }
    }
    Ok(())
}

/// Parse a base color name (`blue`, `Rose`) or a hex string (`#3b82f6`).
///
/// # Errors
///
/// Returns [`ConfigError::UnknownColor`] when neither form matches.
pub fn parse_color(value: &str) -> Result<Color, ConfigError> {
    let trimmed = value.trim();
    if trimmed.starts_with('#') {
        return Color::from_hex(trimmed).map_err(|_| ConfigError::UnknownColor(value.to_string()));
    }
    trimmed
        .parse::<BaseColor>()
        .map(Color::from)
        .map_err(|_| ConfigError::UnknownColor(value.to_string()))
}

/// Number formatting for each chart channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueFormatConfig {
    /// X values
    pub x: NumberFormat,
    /// Y values
    pub y: NumberFormat,
    /// Size values
    pub size: NumberFormat,
}

/// How to print a number: fixed decimals plus optional affixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Fixed number of decimals (None = shortest display)
    pub decimals: Option<usize>,
    /// Text before the number
    pub prefix: String,
    /// Text after the number
    pub suffix: String,
}

impl NumberFormat {
    /// Whether this format prints numbers unchanged.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.decimals.is_none() && self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Build a formatter.
    #[must_use]
    pub fn to_formatter(&self) -> ValueFormatter {
        if self.is_plain() {
            return ValueFormatter::default();
        }
        let format = self.clone();
        ValueFormatter::new(move |value| {
            let body = match format.decimals {
                Some(decimals) => format!("{value:.decimals$}"),
                None => lumina_core::default_value_formatter(value),
            };
            format!("{}{body}{}", format.prefix, format.suffix)
        })
    }
}
