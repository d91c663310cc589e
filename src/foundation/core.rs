use crate::foundation::error::{BobbinError, BobbinResult};

pub use kurbo::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> BobbinResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(BobbinError::validation("Viewport width must be > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(BobbinError::validation("Viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// Read-only snapshot of the host page, taken once per event or tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageMetrics {
    pub viewport: Viewport,
    pub scroll_y: f64,
    /// Total scrollable height of the document, viewport included.
    pub document_height: f64,
}

impl StageMetrics {
    /// Scroll progress through the page.
    ///
    /// The denominator is floored at 1 so a document shorter than the
    /// viewport yields a finite fraction instead of dividing by zero. The
    /// result is deliberately not clamped to [0,1]: elastic overscroll may
    /// push it past either end, and samplers clamp at their own boundaries.
    pub fn scroll_fraction(self) -> f64 {
        self.scroll_y / (self.document_height - self.viewport.height).max(1.0)
    }
}

/// Per-tick visual output applied to the ornament and its shadow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IconVisuals {
    pub translate: Vec2,
    pub rotation_deg: f64,
    pub shadow_scale: f64,
    pub shadow_opacity: f64,
}
