use crate::animation::motion::{self, MotionState};
use crate::engine::lifecycle::{LoopCommand, LoopState, TickOutcome};
use crate::engine::stage::Surface;
use crate::foundation::core::StageMetrics;
use crate::foundation::error::BobbinResult;
use crate::path::waypoints::WaypointPath;
use crate::tuning::{DeviceProfile, Tuning};

/// Owns the ornament's state and routes host events through the pure parts.
///
/// The host delivers scroll/resize events and, while the last command or
/// outcome asked for it, calls [`Driver::tick`] once per display frame. All
/// state lives here; the sampler and integrator stay pure.
pub struct Driver<S: Surface> {
    tuning: Tuning,
    profile: DeviceProfile,
    path: WaypointPath,
    motion: MotionState,
    loop_state: LoopState,
    surface: S,
}

impl<S: Surface> Driver<S> {
    /// Installs the ornament and runs the initial scroll evaluation, so a
    /// page opened mid-scroll starts its loop without waiting for an event.
    pub fn new(metrics: StageMetrics, tuning: Tuning, surface: S) -> BobbinResult<Self> {
        tuning.validate()?;
        let profile = DeviceProfile::for_width(metrics.viewport.width, &tuning);
        let path = WaypointPath::build(metrics.viewport, &profile);
        let mut driver = Self {
            tuning,
            profile,
            path,
            motion: MotionState::default(),
            loop_state: LoopState::default(),
            surface,
        };
        driver.on_scroll(metrics);
        Ok(driver)
    }

    pub fn running(&self) -> bool {
        self.loop_state.running
    }

    pub fn active(&self) -> bool {
        self.loop_state.active
    }

    pub fn path(&self) -> &WaypointPath {
        &self.path
    }

    pub fn motion(&self) -> MotionState {
        self.motion
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Passive scroll listener: decides against the wide band whether the
    /// frame loop should run. A force-stop also hides the ornament, without
    /// waiting for the next tick.
    #[tracing::instrument(level = "debug", skip(self, metrics))]
    pub fn on_scroll(&mut self, metrics: StageMetrics) -> LoopCommand {
        let fraction = metrics.scroll_fraction();
        let command = self.loop_state.on_scroll(fraction, self.tuning.scroll_band);
        match command {
            LoopCommand::Start => tracing::debug!(fraction, "frame loop started"),
            LoopCommand::Stop => {
                tracing::debug!(fraction, "frame loop force-stopped");
                self.surface.set_visible(false);
            }
            LoopCommand::NoChange => {}
        }
        command
    }

    /// Replaces the waypoint path and device profile wholesale. Nothing is
    /// carried over from the old path; motion state is untouched.
    pub fn on_resize(&mut self, metrics: StageMetrics) {
        self.profile = DeviceProfile::for_width(metrics.viewport.width, &self.tuning);
        self.path = WaypointPath::build(metrics.viewport, &self.profile);
    }

    /// One frame while the loop runs: toggle visibility against the tight
    /// band, sample the path, advance the motion state, apply the visuals,
    /// and report whether the host should schedule another frame.
    #[tracing::instrument(level = "trace", skip(self, metrics))]
    pub fn tick(&mut self, metrics: StageMetrics) -> TickOutcome {
        let fraction = metrics.scroll_fraction();

        if let Some(visible) = self
            .loop_state
            .tick_visibility(fraction, self.tuning.active_band)
        {
            tracing::debug!(fraction, visible, "ornament visibility toggled");
            self.surface.set_visible(visible);
        }

        let target_x = self.path.x_for_fraction(fraction);
        let step = motion::integrate(
            self.motion,
            fraction,
            target_x,
            metrics.viewport,
            &self.profile,
            &self.tuning,
        );
        self.motion = step.state;
        self.surface.apply(&step.visuals);

        self.loop_state.finish_tick()
    }
}
