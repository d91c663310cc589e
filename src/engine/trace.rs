use crate::engine::driver::Driver;
use crate::engine::lifecycle::TickOutcome;
use crate::engine::stage::{MemoryStage, RecordingSurface, Stage};
use crate::foundation::core::{IconVisuals, Viewport};
use crate::foundation::error::{BobbinError, BobbinResult};
use crate::tuning::Tuning;

/// A scripted scroll session: deterministic input for the CLI and tests.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TraceScript {
    pub viewport: Viewport,
    pub document_height: f64,
    #[serde(default)]
    pub tuning: Tuning,
    pub events: Vec<TraceEvent>,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEvent {
    /// Scroll to `y`, then let the loop settle for at most `frames` ticks.
    Scroll { y: f64, frames: u32 },
    /// Resize the viewport mid-session.
    Resize { width: f64, height: f64 },
}

impl TraceScript {
    pub fn validate(&self) -> BobbinResult<()> {
        self.tuning.validate()?;
        Viewport::new(self.viewport.width, self.viewport.height)?;
        if !(self.document_height.is_finite() && self.document_height > 0.0) {
            return Err(BobbinError::validation("document_height must be > 0"));
        }
        if self.events.is_empty() {
            return Err(BobbinError::trace("trace script has no events"));
        }
        for event in &self.events {
            if let TraceEvent::Resize { width, height } = *event {
                Viewport::new(width, height)?;
            }
        }
        Ok(())
    }
}

/// One applied frame, annotated with the event that produced it.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct FrameRecord {
    /// Index into the script's event list.
    pub event: usize,
    pub scroll_y: f64,
    pub fraction: f64,
    pub visible: bool,
    pub visuals: IconVisuals,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct TraceReport {
    pub frames: Vec<FrameRecord>,
    /// Visibility transitions in order, `true` = became visible.
    pub visibility_transitions: Vec<bool>,
}

/// Replays a script through a [`Driver`] on an in-memory stage.
///
/// Each scroll event delivers the handler once, then ticks until the loop
/// declines to reschedule or the event's frame budget runs out, the same
/// cooperative shape a display-refresh host would produce.
#[tracing::instrument(level = "debug", skip(script))]
pub fn run_trace(script: &TraceScript) -> BobbinResult<TraceReport> {
    script.validate()?;

    let mut stage = MemoryStage::new(script.viewport, script.document_height);
    let mut surface = RecordingSurface::default();
    let mut driver = Driver::new(stage.metrics(), script.tuning, &mut surface)?;

    let mut frames = Vec::new();
    for (event_index, event) in script.events.iter().enumerate() {
        match *event {
            TraceEvent::Resize { width, height } => {
                stage.resize(Viewport::new(width, height)?);
                driver.on_resize(stage.metrics());
            }
            TraceEvent::Scroll { y, frames: budget } => {
                stage.scroll_to(y);
                driver.on_scroll(stage.metrics());

                for _ in 0..budget {
                    if !driver.running() {
                        break;
                    }
                    let metrics = stage.metrics();
                    let outcome = driver.tick(metrics);
                    if let Some(applied) = driver.surface().frames.last() {
                        frames.push(FrameRecord {
                            event: event_index,
                            scroll_y: y,
                            fraction: metrics.scroll_fraction(),
                            visible: applied.visible,
                            visuals: applied.visuals,
                        });
                    }
                    if outcome == TickOutcome::Stop {
                        break;
                    }
                }
            }
        }
    }

    drop(driver);
    Ok(TraceReport {
        frames,
        visibility_transitions: surface.transitions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(events: Vec<TraceEvent>) -> TraceScript {
        TraceScript {
            viewport: Viewport::new(1024.0, 800.0).unwrap(),
            document_height: 2000.0,
            tuning: Tuning::default(),
            events,
        }
    }

    #[test]
    fn validate_rejects_empty_scripts() {
        assert!(script(vec![]).validate().is_err());
    }

    #[test]
    fn out_of_band_scroll_produces_no_frames() {
        let report = run_trace(&script(vec![TraceEvent::Scroll { y: 0.0, frames: 10 }])).unwrap();
        assert!(report.frames.is_empty());
        assert!(report.visibility_transitions.is_empty());
    }

    #[test]
    fn in_band_scroll_settles_within_budget() {
        let report =
            run_trace(&script(vec![TraceEvent::Scroll { y: 100.0, frames: 5 }])).unwrap();
        assert_eq!(report.frames.len(), 5);
        assert!(report.frames.iter().all(|f| f.visible));
        assert_eq!(report.visibility_transitions, vec![true]);
    }

    #[test]
    fn frames_chase_the_sampled_target() {
        let report =
            run_trace(&script(vec![TraceEvent::Scroll { y: 100.0, frames: 40 }])).unwrap();
        // Successive frames move right toward the target, never past it.
        let xs: Vec<f64> = report.frames.iter().map(|f| f.visuals.translate.x).collect();
        assert!(xs.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn resize_mid_trace_redirects_the_chase() {
        let report = run_trace(&script(vec![
            TraceEvent::Scroll { y: 100.0, frames: 3 },
            TraceEvent::Resize {
                width: 400.0,
                height: 700.0,
            },
            TraceEvent::Scroll { y: 100.0, frames: 3 },
        ]))
        .unwrap();
        assert_eq!(report.frames.len(), 6);
        // After the resize the viewport is 400x700 against the same document,
        // so the fraction shifts with the new scrollable height.
        assert!(report.frames[5].fraction != report.frames[0].fraction);
    }

    #[test]
    fn report_serializes() {
        let report =
            run_trace(&script(vec![TraceEvent::Scroll { y: 100.0, frames: 2 }])).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("visibility_transitions"));
    }
}
