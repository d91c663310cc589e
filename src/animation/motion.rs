use crate::foundation::core::{IconVisuals, Vec2, Viewport};
use crate::tuning::{DeviceProfile, Tuning};

const SHADOW_MIN_SCALE: f64 = 0.6;
const SHADOW_SCALE_SPAN: f64 = 0.4;
const SHADOW_BASE_OPACITY: f64 = 0.3;
const SHADOW_OPACITY_GAIN: f64 = 0.3;

/// Smoothed position and accumulated rotation, threaded through every tick.
///
/// Deliberately not reset when the ornament deactivates: a resumed episode
/// keeps smoothing from the last values. Rotation grows without bound and is
/// only meaningful modulo 360 visually.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionState {
    pub position: Vec2,
    pub rotation_deg: f64,
}

/// Result of one integrator tick: the advanced state and the visuals to
/// apply for this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionStep {
    pub state: MotionState,
    pub visuals: IconVisuals,
}

/// Advances the motion state one frame toward the sampled targets.
///
/// The vertical bob is a sine of scroll progress, not wall-clock time, so
/// motion is deterministic under scroll and pauses when scrolling pauses.
/// The rotation increment reads the horizontal gap remaining AFTER the
/// positional step; the ordering is part of the observable behavior.
pub fn integrate(
    state: MotionState,
    fraction: f64,
    target_x: f64,
    viewport: Viewport,
    profile: &DeviceProfile,
    tuning: &Tuning,
) -> MotionStep {
    let bob = (fraction * std::f64::consts::PI * tuning.bob_half_waves).sin();
    let target_y = viewport.height * tuning.vertical_anchor + bob * profile.bob_amplitude;

    let mut position = state.position;
    position.x += (target_x - position.x) * profile.lerp_factor;
    position.y += (target_y - position.y) * profile.lerp_factor;

    let rotation_deg = state.rotation_deg + (target_x - position.x) * tuning.rotation_gain;

    let shadow_scale = SHADOW_MIN_SCALE + bob.abs() * SHADOW_SCALE_SPAN;
    let shadow_opacity = SHADOW_BASE_OPACITY + shadow_scale * SHADOW_OPACITY_GAIN;

    MotionStep {
        state: MotionState {
            position,
            rotation_deg,
        },
        visuals: IconVisuals {
            translate: position,
            rotation_deg,
            shadow_scale,
            shadow_opacity,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> (Viewport, DeviceProfile, Tuning) {
        let tuning = Tuning::default();
        let viewport = Viewport::new(1024.0, 800.0).unwrap();
        let profile = DeviceProfile::for_width(1024.0, &tuning);
        (viewport, profile, tuning)
    }

    #[test]
    fn smoothing_converges_without_overshoot() {
        let (viewport, profile, tuning) = desktop();
        let mut state = MotionState::default();
        let target_x = 500.0;

        let mut prev_gap = (target_x - state.position.x).abs();
        for _ in 0..400 {
            // Fraction 0 pins target_y, isolating the exponential decay.
            let step = integrate(state, 0.0, target_x, viewport, &profile, &tuning);
            state = step.state;
            let gap = (target_x - state.position.x).abs();
            assert!(gap <= prev_gap, "gap must shrink monotonically");
            assert!(state.position.x <= target_x, "no overshoot past the target");
            prev_gap = gap;
        }
        assert!(prev_gap < 1e-10);
    }

    #[test]
    fn bob_is_a_pure_function_of_fraction() {
        let (viewport, profile, tuning) = desktop();
        let state = MotionState::default();
        let a = integrate(state, 0.25, 100.0, viewport, &profile, &tuning);
        let b = integrate(state, 0.25, 100.0, viewport, &profile, &tuning);
        assert_eq!(a.visuals, b.visuals);
    }

    #[test]
    fn vertical_target_is_anchored_and_bounded_by_amplitude() {
        let (viewport, profile, tuning) = desktop();
        let anchor = viewport.height * 0.4;
        // One full-lerp step lands exactly on the target; use lerp 1.0.
        let tuning_snap = Tuning {
            lerp_desktop: 1.0,
            ..tuning
        };
        let profile_snap = DeviceProfile {
            lerp_factor: 1.0,
            ..profile
        };
        for step_i in 0..=100 {
            let f = f64::from(step_i) / 100.0;
            let step = integrate(
                MotionState::default(),
                f,
                0.0,
                viewport,
                &profile_snap,
                &tuning_snap,
            );
            let y = step.state.position.y;
            assert!((y - anchor).abs() <= profile.bob_amplitude + 1e-9);
        }
    }

    #[test]
    fn rotation_accumulates_the_post_step_gap() {
        let (viewport, profile, tuning) = desktop();
        let state = MotionState::default();
        let step = integrate(state, 0.0, 100.0, viewport, &profile, &tuning);

        let expected_x = 100.0 * profile.lerp_factor;
        assert!((step.state.position.x - expected_x).abs() < 1e-12);
        let expected_rot = (100.0 - expected_x) * tuning.rotation_gain;
        assert!((step.state.rotation_deg - expected_rot).abs() < 1e-12);
    }

    #[test]
    fn rotation_is_not_normalized() {
        let (viewport, profile, tuning) = desktop();
        let mut state = MotionState::default();
        for _ in 0..200 {
            state = integrate(state, 0.0, 10_000.0, viewport, &profile, &tuning).state;
        }
        assert!(state.rotation_deg > 360.0);
    }

    #[test]
    fn shadow_derives_from_fraction_alone() {
        let (viewport, profile, tuning) = desktop();

        // Peak of the first half-wave: |sin| = 1.
        let f_peak = 1.0 / 24.0;
        let far = integrate(
            MotionState::default(),
            f_peak,
            900.0,
            viewport,
            &profile,
            &tuning,
        );
        let near = integrate(
            MotionState {
                position: Vec2::new(890.0, 300.0),
                rotation_deg: 0.0,
            },
            f_peak,
            900.0,
            viewport,
            &profile,
            &tuning,
        );
        assert!((far.visuals.shadow_scale - near.visuals.shadow_scale).abs() < 1e-12);
        assert!((far.visuals.shadow_scale - 1.0).abs() < 1e-9);
        assert!((far.visuals.shadow_opacity - 0.6).abs() < 1e-9);

        // Zero crossing: |sin| = 0.
        let at_node = integrate(
            MotionState::default(),
            0.0,
            0.0,
            viewport,
            &profile,
            &tuning,
        );
        assert!((at_node.visuals.shadow_scale - 0.6).abs() < 1e-12);
        assert!((at_node.visuals.shadow_opacity - 0.48).abs() < 1e-12);
    }
}
