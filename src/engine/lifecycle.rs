use crate::tuning::Band;

/// Two-flag frame-loop state machine.
///
/// `running` gates whether the host schedules frames; `active` gates whether
/// the ornament is rendered visible. The scroll handler tests the wide band,
/// each tick tests the tight band; the gap between the two is hysteresis
/// that keeps the boundary from flickering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoopState {
    pub running: bool,
    pub active: bool,
}

/// What a scroll event asks of the host's frame scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopCommand {
    /// Begin calling `tick` once per frame until it yields `Stop`.
    Start,
    /// Cease scheduling immediately; the ornament was force-hidden.
    Stop,
    NoChange,
}

/// Whether the driver wants another frame after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Reschedule,
    Stop,
}

impl LoopState {
    /// Scroll-handler decision against the wide band: inside, make sure the
    /// loop runs; outside, force-stop and deactivate in one step.
    pub fn on_scroll(&mut self, fraction: f64, scroll_band: Band) -> LoopCommand {
        if scroll_band.contains(fraction) {
            if self.running {
                LoopCommand::NoChange
            } else {
                self.running = true;
                LoopCommand::Start
            }
        } else {
            self.running = false;
            self.active = false;
            LoopCommand::Stop
        }
    }

    /// Tick-level visibility toggle against the tight band. Returns the new
    /// visibility on a transition, `None` while it holds steady.
    pub fn tick_visibility(&mut self, fraction: f64, active_band: Band) -> Option<bool> {
        if active_band.contains(fraction) {
            if !self.active {
                self.active = true;
                return Some(true);
            }
        } else if self.active {
            self.active = false;
            return Some(false);
        }
        None
    }

    /// Terminal decision at the end of a tick: the loop keeps itself alive
    /// only while the ornament is active.
    pub fn finish_tick(&mut self) -> TickOutcome {
        if self.active {
            TickOutcome::Reschedule
        } else {
            self.running = false;
            TickOutcome::Stop
        }
    }
}
