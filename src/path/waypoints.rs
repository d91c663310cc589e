use crate::foundation::core::Viewport;
use crate::foundation::error::{BobbinError, BobbinResult};
use crate::tuning::DeviceProfile;

/// Scroll fractions of the interior turnaround points. Even indices sit at
/// the left edge, odd at the right.
const TRAVERSAL_FRACTIONS: [f64; 10] = [0.04, 0.12, 0.22, 0.32, 0.42, 0.52, 0.62, 0.72, 0.82, 0.92];

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Waypoint {
    /// Scroll progress at which the ornament is centered on `x`.
    pub fraction: f64,
    pub x: f64,
}

/// Ordered horizontal control points for one viewport size.
///
/// Invariants: at least two points, strictly increasing fractions, first at
/// 0, last at 1. A resize replaces the whole path; nothing is updated in
/// place.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WaypointPath {
    pub(crate) points: Vec<Waypoint>,
}

impl WaypointPath {
    pub fn new(points: Vec<Waypoint>) -> BobbinResult<Self> {
        if points.len() < 2 {
            return Err(BobbinError::validation(
                "WaypointPath needs at least two points",
            ));
        }
        if points[0].fraction != 0.0 {
            return Err(BobbinError::validation(
                "WaypointPath must start at fraction 0",
            ));
        }
        if points[points.len() - 1].fraction != 1.0 {
            return Err(BobbinError::validation(
                "WaypointPath must end at fraction 1",
            ));
        }
        if !points.windows(2).all(|w| w[0].fraction < w[1].fraction) {
            return Err(BobbinError::validation(
                "WaypointPath fractions must be strictly increasing",
            ));
        }
        Ok(Self { points })
    }

    /// The fixed traversal path: off-screen start just left of the viewport,
    /// alternating left/right turnarounds inset by the profile margin (and
    /// icon size on the right, so the visual bounds stay inside it), then an
    /// off-screen end just right of the viewport.
    pub fn build(viewport: Viewport, profile: &DeviceProfile) -> Self {
        let left = profile.margin;
        let right = viewport.width - profile.icon_size - profile.margin;

        let mut points = Vec::with_capacity(TRAVERSAL_FRACTIONS.len() + 2);
        points.push(Waypoint {
            fraction: 0.0,
            x: -profile.icon_size - profile.edge_overshoot,
        });
        for (i, &fraction) in TRAVERSAL_FRACTIONS.iter().enumerate() {
            points.push(Waypoint {
                fraction,
                x: if i % 2 == 0 { left } else { right },
            });
        }
        points.push(Waypoint {
            fraction: 1.0,
            x: viewport.width + profile.edge_overshoot,
        });

        Self { points }
    }

    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }
}
