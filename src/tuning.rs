use crate::foundation::error::{BobbinError, BobbinResult};

/// Open interval on the scroll-fraction axis, exclusive at both ends.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    pub fn new(lower: f64, upper: f64) -> BobbinResult<Self> {
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(BobbinError::validation("Band lower must be < upper"));
        }
        Ok(Self { lower, upper })
    }

    pub fn contains(self, fraction: f64) -> bool {
        self.lower < fraction && fraction < self.upper
    }
}

/// Every behavioral constant of the engine in one place.
///
/// `Default` reproduces the stock ornament. Trace scripts may embed an
/// alternative tuning; `validate` is called wherever one enters the engine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Viewport widths strictly below this are treated as mobile.
    pub mobile_breakpoint: f64,
    pub icon_size_mobile: f64,
    pub icon_size_desktop: f64,
    /// Horizontal inset from the viewport edges at path turnarounds.
    pub margin_mobile: f64,
    pub margin_desktop: f64,
    /// Per-tick exponential smoothing factor. Mobile reacts faster.
    pub lerp_mobile: f64,
    pub lerp_desktop: f64,
    pub bob_amplitude_mobile: f64,
    pub bob_amplitude_desktop: f64,
    /// Half-waves of vertical bob across the full scroll range.
    pub bob_half_waves: f64,
    /// Vertical center of the bob as a fraction of viewport height.
    pub vertical_anchor: f64,
    /// Degrees of rotation accumulated per pixel of remaining chase gap.
    pub rotation_gain: f64,
    /// How far past the viewport edges the path starts and ends.
    pub edge_overshoot: f64,
    /// Wide band: a scroll event inside it (re)starts the frame loop.
    pub scroll_band: Band,
    /// Tight band: each tick toggles visibility against it.
    pub active_band: Band,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 769.0,
            icon_size_mobile: 34.0,
            icon_size_desktop: 48.0,
            margin_mobile: 10.0,
            margin_desktop: 60.0,
            lerp_mobile: 0.1,
            lerp_desktop: 0.08,
            bob_amplitude_mobile: 50.0,
            bob_amplitude_desktop: 80.0,
            bob_half_waves: 12.0,
            vertical_anchor: 0.4,
            rotation_gain: 0.8,
            edge_overshoot: 20.0,
            scroll_band: Band {
                lower: 0.02,
                upper: 0.96,
            },
            active_band: Band {
                lower: 0.03,
                upper: 0.95,
            },
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> BobbinResult<()> {
        if !(self.mobile_breakpoint.is_finite() && self.mobile_breakpoint > 0.0) {
            return Err(BobbinError::validation("mobile_breakpoint must be > 0"));
        }
        for (name, v) in [
            ("icon_size_mobile", self.icon_size_mobile),
            ("icon_size_desktop", self.icon_size_desktop),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(BobbinError::validation(format!("{name} must be > 0")));
            }
        }
        for (name, v) in [
            ("lerp_mobile", self.lerp_mobile),
            ("lerp_desktop", self.lerp_desktop),
        ] {
            if !(v.is_finite() && v > 0.0 && v <= 1.0) {
                return Err(BobbinError::validation(format!(
                    "{name} must be in (0, 1]"
                )));
            }
        }
        Band::new(self.scroll_band.lower, self.scroll_band.upper)?;
        Band::new(self.active_band.lower, self.active_band.upper)?;
        Ok(())
    }
}

/// Device-dependent constants, resolved once per resize and passed wherever
/// they are needed instead of re-querying the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProfile {
    pub mobile: bool,
    pub icon_size: f64,
    pub margin: f64,
    pub lerp_factor: f64,
    pub bob_amplitude: f64,
    pub edge_overshoot: f64,
}

impl DeviceProfile {
    pub fn for_width(width: f64, tuning: &Tuning) -> Self {
        let mobile = width < tuning.mobile_breakpoint;
        if mobile {
            Self {
                mobile,
                icon_size: tuning.icon_size_mobile,
                margin: tuning.margin_mobile,
                lerp_factor: tuning.lerp_mobile,
                bob_amplitude: tuning.bob_amplitude_mobile,
                edge_overshoot: tuning.edge_overshoot,
            }
        } else {
            Self {
                mobile,
                icon_size: tuning.icon_size_desktop,
                margin: tuning.margin_desktop,
                lerp_factor: tuning.lerp_desktop,
                bob_amplitude: tuning.bob_amplitude_desktop,
                edge_overshoot: tuning.edge_overshoot,
            }
        }
    }
}
