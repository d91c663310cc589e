//! Bobbin is a scroll-indexed ornament animation engine.
//!
//! As a page scrolls, a decorative ornament follows a piecewise waypoint
//! path across the viewport, bobs vertically on a scroll-indexed sine wave,
//! rotates with its horizontal chase gap, and casts a reactive shadow, while
//! a two-flag lifecycle decides when it is visible and when the frame loop
//! runs at all.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `Viewport + DeviceProfile -> WaypointPath` (rebuilt wholesale on resize)
//! 2. **Sample**: `WaypointPath + scroll fraction -> target x` (eased piecewise interpolation)
//! 3. **Integrate**: `MotionState + targets -> MotionState' + IconVisuals` (pure, one call per tick)
//! 4. **Drive**: [`Driver`] routes host events, applies visuals to a [`Surface`],
//!    and yields an explicit [`TickOutcome`] instead of scheduling frames itself
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: everything is indexed by scroll position, never by
//!   wall-clock time; replaying a scroll trace reproduces every frame.
//! - **No scheduling inside the engine**: the host owns the frame loop and
//!   only ever gets a reschedule/stop signal back.
#![forbid(unsafe_code)]

mod animation;
mod engine;
mod foundation;
mod page;
mod path;
mod tuning;

pub use animation::counter::CountUp;
pub use animation::ease::Ease;
pub use animation::motion::{MotionState, MotionStep, integrate};
pub use engine::driver::Driver;
pub use engine::lifecycle::{LoopCommand, LoopState, TickOutcome};
pub use engine::stage::{AppliedFrame, MemoryStage, RecordingSurface, Stage, Surface};
pub use engine::trace::{FrameRecord, TraceEvent, TraceReport, TraceScript, run_trace};
pub use foundation::core::{IconVisuals, StageMetrics, Vec2, Viewport};
pub use foundation::error::{BobbinError, BobbinResult};
pub use page::sections::{
    NAV_CONDENSE_THRESHOLD, SECTION_PROBE_OFFSET, SectionExtent, active_section, nav_condensed,
};
pub use path::waypoints::{Waypoint, WaypointPath};
pub use tuning::{Band, DeviceProfile, Tuning};
