//! Widgets for the Lumina chart component library.

pub mod no_data;
pub mod scatter_chart;
pub mod text;

pub use no_data::NoData;
pub use scatter_chart::{
    AxisBound, AxisDomain, CategoryColors, ChartSpec, InteractionPhase, InteractionState,
    PlotSpec, ResolvedDomain, ScatterChart, SeriesSpec, TooltipContent, ValueChange,
    ValueChangeCallback,
};
pub use text::Text;
