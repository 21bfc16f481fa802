//! Break-count scoring, built once per walker invocation. The table maps a
//! literal's break count to a selection weight decreasing geometrically
//! with base `1/cb`, where the noise constant `cb` comes from a
//! piecewise-linear fit over the average clause size, alternated against a
//! fixed 2.0 on every other invocation to diversify repeated walks.
use log::debug;

const CB_POINTS: [(f64, f64); 6] = [
    (0.0, 2.00),
    (3.0, 2.50),
    (4.0, 2.85),
    (5.0, 3.70),
    (6.0, 5.10),
    (7.0, 7.40),
];

/// evaluate the piecewise-linear fit at `size`, extrapolating the outer
/// segments beyond the breakpoint range.
pub(super) fn fit_cb(size: f64) -> f64 {
    let mut i = 0;
    while i + 2 < CB_POINTS.len() && (CB_POINTS[i].0 > size || CB_POINTS[i + 1].0 < size) {
        i += 1;
    }
    let (x1, y1) = CB_POINTS[i];
    let (x2, y2) = CB_POINTS[i + 1];
    debug_assert!(x1 < x2);
    let cb = y1 + (y2 - y1) * (size - x1) / (x2 - x1);
    debug_assert!(0.0 < cb);
    cb
}

#[derive(Debug)]
pub(super) struct ScoreTable {
    /// successive powers of `1/cb`, down to the smallest positive f64
    table: Vec<f64>,
    /// weight of any break count beyond the table
    epsilon: f64,
}

impl ScoreTable {
    /// `num_walk` selects the fit branch on odd invocation counts.
    pub fn build(num_walk: usize, average_size: f64) -> ScoreTable {
        let cb = if num_walk & 1 == 1 { fit_cb(average_size) } else { 2.0 };
        let base = 1.0 / cb;
        let mut table = Vec::new();
        let mut next = 1.0_f64;
        while next != 0.0 {
            table.push(next);
            next *= base;
        }
        let epsilon = table[table.len() - 1];
        debug!(
            "walk: CB {cb:.2} with inverse {base:.2} as base, table size {} and epsilon {epsilon:e}",
            table.len(),
        );
        ScoreTable { table, epsilon }
    }
    pub fn score(&self, breaks: usize) -> f64 {
        if breaks < self.table.len() {
            self.table[breaks]
        } else {
            self.epsilon
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_breakpoints() {
        for (x, y) in CB_POINTS {
            assert!((fit_cb(x) - y).abs() < 1e-12);
        }
        // average clause size 3.0 must yield 2.50 on the fit branch
        assert!((fit_cb(3.0) - 2.50).abs() < 1e-12);
        // halfway between (4, 2.85) and (5, 3.70)
        assert!((fit_cb(4.5) - 3.275).abs() < 1e-12);
    }

    #[test]
    fn test_alternated_branches() {
        let fitted = ScoreTable::build(1, 3.0);
        assert!((fitted.score(1) - 1.0 / 2.5).abs() < 1e-12);
        let constant = ScoreTable::build(2, 3.0);
        assert!((constant.score(1) - 0.5).abs() < 1e-12);
        assert!((constant.score(0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_positivity_and_monotonicity() {
        let t = ScoreTable::build(1, 4.2);
        let mut prev = f64::INFINITY;
        for b in 0..3000 {
            let s = t.score(b);
            assert!(0.0 < s, "score({b}) must stay positive");
            assert!(s <= prev, "score must not increase with break count");
            prev = s;
        }
        // far beyond the table the epsilon weight applies
        assert_eq!(t.score(100_000), t.score(99_999));
    }
}
