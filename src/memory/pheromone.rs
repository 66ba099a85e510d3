//! Pheromone reinforcement weights for ant colony optimization.

/// Dense symmetric matrix of non-negative edge weights.
///
/// All entries start at 1.0. Evaporation multiplies every entry by
/// `1 - rate`; deposits add symmetrically along a tour's edges, including the
/// closing edge back to the start. Entries are never normalized directly —
/// the transition rule's probability computation normalizes implicitly — and
/// they stay non-negative for any evaporation rate in [0, 1).
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    n: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n x n` matrix with all entries at 1.0.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            values: vec![1.0; n * n],
        }
    }

    /// Number of elements the matrix covers.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Weight of the edge between elements `a` and `b`.
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.values[a * self.n + b]
    }

    /// Applies multiplicative decay `p *= 1 - rate` to every entry.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for value in &mut self.values {
            *value *= keep;
        }
    }

    /// Adds `amount` to both directions of every edge in the closed tour.
    ///
    /// Tours with fewer than two elements deposit nothing.
    pub fn deposit_tour(&mut self, tour: &[usize], amount: f64) {
        if tour.len() < 2 {
            return;
        }
        for window in tour.windows(2) {
            self.add(window[0], window[1], amount);
        }
        // Closing edge back to the start.
        self.add(tour[tour.len() - 1], tour[0], amount);
    }

    fn add(&mut self, a: usize, b: usize, amount: f64) {
        self.values[a * self.n + b] += amount;
        self.values[b * self.n + a] += amount;
    }
}
