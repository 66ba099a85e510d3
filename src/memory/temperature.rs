//! Geometric cooling schedule for simulated annealing.

/// Temperature state under geometric decay `T_{k+1} = alpha * T_k`.
///
/// Monotonically non-increasing; the owning strategy reports the search as
/// finished once the temperature drops below the floor.
#[derive(Debug, Clone)]
pub struct Temperature {
    current: f64,
    floor: f64,
    alpha: f64,
}

impl Temperature {
    /// Creates a schedule starting at `initial` with the given floor and
    /// cooling factor.
    pub fn new(initial: f64, floor: f64, alpha: f64) -> Self {
        Self {
            current: initial,
            floor,
            alpha,
        }
    }

    /// Current temperature.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Applies one cooling step.
    pub fn cool(&mut self) {
        self.current *= self.alpha;
    }

    /// Whether the temperature has dropped below the floor.
    pub fn frozen(&self) -> bool {
        self.current < self.floor
    }
}
