use crate::foundation::core::{IconVisuals, StageMetrics, Viewport};

/// Read-only queries against the host page.
pub trait Stage {
    fn metrics(&self) -> StageMetrics;
}

/// Fire-and-forget sink for the ornament's rendered state.
///
/// The engine never reads anything back; the host applies the values to its
/// icon element (and shadow sub-element) however it renders.
pub trait Surface {
    fn apply(&mut self, visuals: &IconVisuals);
    fn set_visible(&mut self, visible: bool);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn apply(&mut self, visuals: &IconVisuals) {
        (**self).apply(visuals);
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }
}

/// In-memory stage for tests and the trace runner.
#[derive(Clone, Copy, Debug)]
pub struct MemoryStage {
    viewport: Viewport,
    scroll_y: f64,
    document_height: f64,
}

impl MemoryStage {
    pub fn new(viewport: Viewport, document_height: f64) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            document_height,
        }
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl Stage for MemoryStage {
    fn metrics(&self) -> StageMetrics {
        StageMetrics {
            viewport: self.viewport,
            scroll_y: self.scroll_y,
            document_height: self.document_height,
        }
    }
}

/// One frame as applied to a [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AppliedFrame {
    /// Visibility state at the moment the frame was applied.
    pub visible: bool,
    pub visuals: IconVisuals,
}

/// Surface that records applied frames and visibility transitions.
///
/// `set_visible` is idempotent the way a class toggle on an element is:
/// repeated calls with the same value record nothing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    visible: bool,
    pub frames: Vec<AppliedFrame>,
    pub transitions: Vec<bool>,
}

impl RecordingSurface {
    pub fn visible(&self) -> bool {
        self.visible
    }
}

impl Surface for RecordingSurface {
    fn apply(&mut self, visuals: &IconVisuals) {
        self.frames.push(AppliedFrame {
            visible: self.visible,
            visuals: *visuals,
        });
    }

    fn set_visible(&mut self, visible: bool) {
        if visible != self.visible {
            self.visible = visible;
            self.transitions.push(visible);
        }
    }
}
