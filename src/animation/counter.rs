use crate::animation::ease::Ease;
use crate::foundation::error::{BobbinError, BobbinResult};

/// Frame-indexed count-up toward a display target.
///
/// Rises with an ease-out-quart curve so the last digits settle slowly,
/// then holds the exact target once the duration has elapsed. The host maps
/// wall-clock time to frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountUp {
    target: f64,
    duration_frames: u32,
}

impl CountUp {
    pub fn new(target: f64, duration_frames: u32) -> BobbinResult<Self> {
        if !target.is_finite() {
            return Err(BobbinError::validation("CountUp target must be finite"));
        }
        if duration_frames == 0 {
            return Err(BobbinError::validation("CountUp duration must be > 0"));
        }
        Ok(Self {
            target,
            duration_frames,
        })
    }

    pub fn value_at(&self, frame: u32) -> f64 {
        let t = f64::from(frame.min(self.duration_frames)) / f64::from(self.duration_frames);
        self.target * Ease::OutQuart.apply(t)
    }

    /// Rounded value for display; lands exactly on the target at completion.
    pub fn display_at(&self, frame: u32) -> i64 {
        if self.is_done(frame) {
            self.target.round() as i64
        } else {
            self.value_at(frame).round() as i64
        }
    }

    pub fn is_done(&self, frame: u32) -> bool {
        frame >= self.duration_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_ends_exact() {
        let c = CountUp::new(250.0, 75).unwrap();
        assert_eq!(c.value_at(0), 0.0);
        assert_eq!(c.display_at(75), 250);
        assert_eq!(c.display_at(200), 250);
        assert!(c.is_done(75));
        assert!(!c.is_done(74));
    }

    #[test]
    fn value_is_monotone_nondecreasing() {
        let c = CountUp::new(1000.0, 60).unwrap();
        let mut prev = -1.0;
        for frame in 0..=60 {
            let v = c.value_at(frame);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn ease_out_front_loads_the_rise() {
        // Half the duration covers well past half the target.
        let c = CountUp::new(100.0, 100).unwrap();
        assert!(c.value_at(50) > 75.0);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(CountUp::new(f64::NAN, 10).is_err());
        assert!(CountUp::new(10.0, 0).is_err());
    }
}
