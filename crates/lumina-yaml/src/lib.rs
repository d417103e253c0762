//! Declarative chart configuration for Lumina.
//!
//! Charts can be described in YAML or JSON and validated before a widget is
//! built from them.

mod config;
mod error;

pub use config::{parse_color, NumberFormat, ScatterChartConfig, ValueFormatConfig};
pub use error::ConfigError;
