//! Lumina: data visualization components.
//!
//! Scatter charts with categorised, highlightable points, plus the text and
//! placeholder widgets they are built from. Charts can be assembled with the
//! builder API or loaded from a YAML/JSON manifest.
//!
//! ```
//! use lumina::prelude::*;
//!
//! let chart = ScatterChart::new()
//!     .data(vec![
//!         Row::new().with("gdp", 1200.0).with("life", 61.0).with("region", "Asia"),
//!         Row::new().with("gdp", 4100.0).with("life", 78.0).with("region", "Europe"),
//!     ])
//!     .x("gdp")
//!     .y("life")
//!     .category("region");
//!
//! assert_eq!(chart.categories(), vec!["Asia", "Europe"]);
//! ```

pub use lumina_core::*;
pub use lumina_widgets as widgets;
pub use lumina_yaml as yaml;

pub mod logging;

pub use lumina_widgets::{NoData, ScatterChart, Text, ValueChange};
pub use lumina_yaml::{ConfigError, ScatterChartConfig};

/// Commonly used types.
pub mod prelude {
    pub use lumina_core::{
        AxisFormatters, BaseColor, Brick, Canvas, Color, Constraints, Event, FieldValue, Point,
        Rect, RecordingCanvas, Row, Size, ValueFormatter, Widget,
    };
    pub use lumina_widgets::{ChartSpec, NoData, ScatterChart, Text, ValueChange};
    pub use lumina_yaml::{ConfigError, ScatterChartConfig};
}
