//! Value formatters for axis ticks and tooltips.

use std::fmt;
use std::sync::{Arc, OnceLock};

/// Formats a raw numeric value for display.
///
/// Cheap to clone; two formatters are equal when they share the same closure.
#[derive(Clone)]
pub struct ValueFormatter(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl ValueFormatter {
    /// Wrap a formatting closure.
    pub fn new(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Format a value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl Default for ValueFormatter {
    /// All default formatters share one closure, so they compare equal.
    fn default() -> Self {
        static DEFAULT: OnceLock<ValueFormatter> = OnceLock::new();
        DEFAULT
            .get_or_init(|| Self::new(default_value_formatter))
            .clone()
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

impl PartialEq for ValueFormatter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Shortest display of a number: `1` for `1.0`, `0.25` for `0.25`.
#[must_use]
pub fn default_value_formatter(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    value.to_string()
}

/// Separate formatters for the x, y and size channels of a scatter chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisFormatters {
    /// X values
    pub x: ValueFormatter,
    /// Y values
    pub y: ValueFormatter,
    /// Size values
    pub size: ValueFormatter,
}

impl AxisFormatters {
    /// Use one formatter for every channel.
    #[must_use]
    pub fn uniform(formatter: &ValueFormatter) -> Self {
        Self {
            x: formatter.clone(),
            y: formatter.clone(),
            size: formatter.clone(),
        }
    }
}
