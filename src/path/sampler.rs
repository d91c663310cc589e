use crate::animation::ease::Ease;
use crate::path::waypoints::WaypointPath;

impl WaypointPath {
    /// Horizontal target for a scroll fraction.
    ///
    /// Finds the bounding pair (inclusive at both ends, so querying exactly
    /// at a waypoint from either adjacent segment yields the same value),
    /// eases the local parameter with [`Ease::InOutCubic`], and lerps the
    /// pair's x values. A fraction outside every pair clamps to the final
    /// waypoint's x rather than failing.
    pub fn x_for_fraction(&self, fraction: f64) -> f64 {
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if fraction >= a.fraction && fraction <= b.fraction {
                let t = (fraction - a.fraction) / (b.fraction - a.fraction);
                let eased = Ease::InOutCubic.apply(t);
                return a.x + (b.x - a.x) * eased;
            }
        }
        match self.points.last() {
            Some(end) => end.x,
            None => 0.0,
        }
    }
}
