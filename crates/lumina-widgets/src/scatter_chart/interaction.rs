//! Click-driven highlight state of a scatter chart.
//!
//! The chart remembers at most one active node (a data row) and at most one
//! active legend item (a category value). Clicking a node always drops the
//! legend highlight; clicking a legend item leaves the node highlight alone.

use super::category::same_category;
use lumina_core::{FieldValue, Row};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

/// Opacity of points that are not the active node while one is set.
pub const DIMMED_OPACITY: f32 = 0.3;

/// Coarse view of the highlight state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    /// Nothing highlighted
    Idle,
    /// A node is highlighted (a legend item may be too)
    NodeActive,
    /// Only a legend item is highlighted
    LegendActive,
}

/// Value reported to the change callback.
///
/// Serializes to `null`, the clicked row, or `{"categoryClicked": value}`
/// with the category value as it appears in the data.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueChange {
    /// Highlight removed
    Cleared,
    /// A data point was selected
    Node(Row),
    /// A legend item was selected
    Category {
        /// Value of the clicked category
        category_clicked: FieldValue,
    },
}

impl Serialize for ValueChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Cleared => serializer.serialize_none(),
            Self::Node(row) => row.serialize(serializer),
            Self::Category { category_clicked } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("categoryClicked", category_clicked)?;
                map.end()
            }
        }
    }
}

/// Highlight state owned by one chart instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    active_node: Option<Row>,
    active_legend: Option<FieldValue>,
}

impl InteractionState {
    /// Nothing highlighted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted row.
    #[must_use]
    pub const fn active_node(&self) -> Option<&Row> {
        self.active_node.as_ref()
    }

    /// Highlighted category.
    #[must_use]
    pub const fn active_legend(&self) -> Option<&FieldValue> {
        self.active_legend.as_ref()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> InteractionPhase {
        match (&self.active_node, &self.active_legend) {
            (Some(_), _) => InteractionPhase::NodeActive,
            (None, Some(_)) => InteractionPhase::LegendActive,
            (None, None) => InteractionPhase::Idle,
        }
    }

    /// Handle a click on a data point.
    ///
    /// Does nothing without a change listener. Clicking the active row again
    /// clears it; any other row becomes active. The legend highlight is
    /// cleared in both cases. Row comparison is structural.
    pub fn click_node(&mut self, row: &Row, has_listener: bool) -> Option<ValueChange> {
        if !has_listener {
            return None;
        }
        let change = if self.active_node.as_ref() == Some(row) {
            self.active_node = None;
            ValueChange::Cleared
        } else {
            self.active_node = Some(row.clone());
            ValueChange::Node(row.clone())
        };
        self.active_legend = None;
        debug!(phase = ?self.phase(), "node clicked");
        Some(change)
    }

    /// Handle a click on a legend item.
    ///
    /// Does nothing without a change listener. Clicking the active category
    /// again clears it; any other category becomes active. The node
    /// highlight is left as is.
    pub fn click_legend_item(
        &mut self,
        category: &FieldValue,
        has_listener: bool,
    ) -> Option<ValueChange> {
        if !has_listener {
            return None;
        }
        let change = if self.is_active_legend(category) {
            self.active_legend = None;
            ValueChange::Cleared
        } else {
            self.active_legend = Some(category.clone());
            ValueChange::Category {
                category_clicked: category.clone(),
            }
        };
        debug!(phase = ?self.phase(), %category, "legend item clicked");
        Some(change)
    }

    /// Handle a click on empty chart area: clear everything, report nothing.
    pub fn click_background(&mut self) {
        if self.active_node.is_some() || self.active_legend.is_some() {
            debug!("highlight cleared by background click");
        }
        self.active_node = None;
        self.active_legend = None;
    }

    /// Opacity for `row`: dimmed while another row is active.
    #[must_use]
    pub fn point_opacity(&self, row: &Row, fill_opacity: f32) -> f32 {
        match &self.active_node {
            Some(active) if active != row => DIMMED_OPACITY,
            _ => fill_opacity,
        }
    }

    /// Whether `category` is drawn at full strength in the legend.
    #[must_use]
    pub fn is_legend_highlighted(&self, category: &FieldValue) -> bool {
        self.active_legend
            .as_ref()
            .map_or(true, |active| same_category(active, category))
    }

    fn is_active_legend(&self, category: &FieldValue) -> bool {
        self.active_legend
            .as_ref()
            .is_some_and(|active| same_category(active, category))
    }
}
