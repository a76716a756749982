//! Bracket-and-bisect root finding for smooth scalar functions of time.

// ---------------------------------------------------------------------------
// Generic bisection solver
// ---------------------------------------------------------------------------

/// Bisect to find the zero crossing of `f` between `t_a` and `t_b`.
///
/// `f_a` is `f(t_a)`; the caller guarantees a sign change on the bracket.
pub fn bisect_zero<F>(
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    max_iter: u32,
    convergence_days: f64,
    f: &F,
) -> f64
where
    F: Fn(f64) -> f64,
{
    for _ in 0..max_iter {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f(t_mid);

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < convergence_days {
            break;
        }
    }

    0.5 * (t_a + t_b)
}

// ---------------------------------------------------------------------------
// Coarse scan + refinement
// ---------------------------------------------------------------------------

/// Scan from `t_start` in steps of `step` for a rising sign change of `f`
/// (negative to non-negative), then bisect.
///
/// Only rising crossings count: `f` is an angle difference wrapped to
/// [-180, 180), so the +180 → -180 wrap on the far side of the circle is a
/// falling jump and is skipped. Returns `None` if no crossing is found
/// within `max_steps` steps.
pub fn find_zero_crossing<F>(
    f: &F,
    t_start: f64,
    step: f64,
    max_steps: usize,
    max_iter: u32,
    convergence_days: f64,
) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    let mut t_prev = t_start;
    let mut f_prev = f(t_prev);
    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = f(t_curr);

        if f_prev < 0.0 && f_curr >= 0.0 {
            return Some(bisect_zero(
                t_prev,
                f_prev,
                t_curr,
                max_iter,
                convergence_days,
                f,
            ));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_root() {
        let f = |t: f64| t - 3.25;
        let root = find_zero_crossing(&f, 0.0, 1.0, 10, 60, 1e-10).unwrap();
        assert!((root - 3.25).abs() < 1e-9);
    }

    #[test]
    fn falling_crossing_is_ignored() {
        let f = |t: f64| 5.0 - t;
        assert!(find_zero_crossing(&f, 0.0, 1.0, 10, 60, 1e-10).is_none());
    }

    #[test]
    fn no_crossing_in_range() {
        let f = |t: f64| t - 100.0;
        assert!(find_zero_crossing(&f, 0.0, 1.0, 10, 60, 1e-10).is_none());
    }

    #[test]
    fn bisect_converges() {
        let f = |t: f64| t * t - 2.0;
        let root = bisect_zero(1.0, f(1.0), 2.0, 100, 1e-12, &f);
        assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
    }
}
