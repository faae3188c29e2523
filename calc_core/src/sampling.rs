//! # Curve Sampling
//!
//! Uniform sampling of a closed interval, used to turn the closed-form
//! formulas into the `(x, y)` point lists the charts draw.

/// Number of points in every sampled curve unless configured otherwise
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// `n` evenly spaced values over `[start, end]`, endpoints included.
///
/// The last value is exactly `end` (not `start + (n-1)·step`), so curves
/// always finish on the domain boundary. `n == 1` yields just `start` and
/// `n == 0` yields nothing.
///
/// ```rust
/// use calc_core::sampling::linspace;
///
/// let xs: Vec<f64> = linspace(0.0, 1.0, 5).collect();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };

    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            start + i as f64 * step
        }
    })
}

/// Evaluate `f` at `n` evenly spaced points over `[start, end]`.
pub fn sample<F>(start: f64, end: f64, n: usize, f: F) -> Vec<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    linspace(start, end, n).map(|x| (x, f(x))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs: Vec<f64> = linspace(0.0, 2.0, DEFAULT_SAMPLE_COUNT).collect();
        assert_eq!(xs.len(), 500);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[499], 2.0);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert_eq!(linspace(0.0, 1.0, 0).count(), 0);
        assert_eq!(linspace(3.0, 7.0, 1).collect::<Vec<_>>(), vec![3.0]);
    }

    #[test]
    fn test_linspace_monotone() {
        let xs: Vec<f64> = linspace(0.0, 5.0, 37).collect();
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_sample() {
        let pts = sample(0.0, 1.0, 3, |x| 2.0 * x);
        assert_eq!(pts, vec![(0.0, 0.0), (0.5, 1.0), (1.0, 2.0)]);
    }
}
