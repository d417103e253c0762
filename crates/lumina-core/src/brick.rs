//! Brick contract: verifiable assertions, a render budget and HTML output.
//!
//! Every widget is also a brick. A widget that gates on [`Brick::can_render`]
//! draws nothing while any of its assertions fails; the same widget can be
//! rendered to a DOM target through [`Brick::to_html`] and [`Brick::to_css`].

use std::time::Duration;

/// A falsifiable claim about a widget's rendered state.
#[derive(Debug, Clone, PartialEq)]
pub enum BrickAssertion {
    /// Text content must be visible (non-empty, non-transparent)
    TextVisible,
    /// Maximum render latency in milliseconds
    MaxLatencyMs(u32),
    /// Element with this selector must be present in the emitted HTML
    ElementPresent(String),
    /// Every data series must be drawn in a visible (non-transparent) color
    SeriesVisible,
    /// Size and layout geometry must be finite and non-negative
    FiniteGeometry,
}

/// Per-phase render budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickBudget {
    /// Maximum time for measure phase
    pub measure_ms: u32,
    /// Maximum time for layout phase
    pub layout_ms: u32,
    /// Maximum time for paint phase
    pub paint_ms: u32,
    /// Total budget
    pub total_ms: u32,
}

impl BrickBudget {
    /// Split a total budget evenly across phases.
    #[must_use]
    pub const fn uniform(total_ms: u32) -> Self {
        let phase_ms = total_ms / 3;
        Self {
            measure_ms: phase_ms,
            layout_ms: phase_ms,
            paint_ms: phase_ms,
            total_ms,
        }
    }

    /// Total budget as a duration.
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        Duration::from_millis(self.total_ms as u64)
    }
}

impl Default for BrickBudget {
    fn default() -> Self {
        // one frame at 60fps
        Self::uniform(16)
    }
}

/// Outcome of checking a brick's assertions.
#[derive(Debug, Clone, Default)]
pub struct BrickVerification {
    /// Assertions that held
    pub passed: Vec<BrickAssertion>,
    /// Assertions that failed, with reasons
    pub failed: Vec<(BrickAssertion, String)>,
    /// Time spent verifying
    pub verification_time: Duration,
}

impl BrickVerification {
    /// Check every assertion with `check`, which returns `Err(reason)` on failure.
    pub fn check_all(
        assertions: &[BrickAssertion],
        mut check: impl FnMut(&BrickAssertion) -> Result<(), String>,
    ) -> Self {
        let start = std::time::Instant::now();
        let mut result = Self::default();
        for assertion in assertions {
            match check(assertion) {
                Ok(()) => result.passed.push(assertion.clone()),
                Err(reason) => result.failed.push((assertion.clone(), reason)),
            }
        }
        result.verification_time = start.elapsed();
        result
    }

    /// True when no assertion failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The brick side of every widget.
pub trait Brick: Send + Sync {
    /// Stable type name used in reports and CSS classes.
    fn brick_name(&self) -> &'static str;

    /// Assertions that define this brick's contract.
    fn assertions(&self) -> &[BrickAssertion];

    /// Render budget.
    fn budget(&self) -> BrickBudget {
        BrickBudget::default()
    }

    /// Check all assertions against current state.
    fn verify(&self) -> BrickVerification;

    /// Deterministic HTML for DOM targets.
    fn to_html(&self) -> String;

    /// Scoped CSS for DOM targets.
    fn to_css(&self) -> String;

    /// Whether painting is allowed.
    fn can_render(&self) -> bool {
        self.verify().is_valid()
    }
}

/// Escape text for inclusion in HTML content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
