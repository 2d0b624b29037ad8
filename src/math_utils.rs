// src/math_utils.rs
use crate::error::{SdeError, SdeResult};

const ROOT_MAX_ITERATIONS: usize = 200;
const ROOT_TOLERANCE: f64 = 1e-12;

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Root of an increasing function on a bracket, with default tolerances.
pub fn solve_increasing<F, G>(f: F, df: G, lo: f64, hi: f64) -> SdeResult<f64>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    solve_increasing_with(f, df, lo, hi, ROOT_TOLERANCE, ROOT_MAX_ITERATIONS)
}

/// Safeguarded Newton iteration for `f(t) = 0` with `f` increasing on `[lo, hi]`.
///
/// # Algorithm
///
/// 1. Require `f(lo) ≤ 0 ≤ f(hi)`
/// 2. Take a Newton step `t - f(t)/f'(t)` from the current iterate
/// 3. If the step leaves the bracket (or `f'` vanishes), bisect instead
/// 4. Shrink the bracket around the sign change and repeat
///
/// Converges when `|f(t)|` or the bracket width drops below `tol`.
pub fn solve_increasing_with<F, G>(
    f: F,
    df: G,
    lo: f64,
    hi: f64,
    tol: f64,
    max_iter: usize,
) -> SdeResult<f64>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    if !(lo <= hi) || !lo.is_finite() || !hi.is_finite() {
        return Err(SdeError::InvalidConfiguration {
            field: "bracket".to_string(),
            reason: format!("[{}, {}] is not a finite interval", lo, hi),
        });
    }

    let (mut a, mut b) = (lo, hi);
    let (fa, fb) = (f(a), f(b));
    if fb < 0.0 && fb.abs() < tol {
        return Ok(b);
    }
    if fa > 0.0 || fb < 0.0 {
        return Err(SdeError::InvalidConfiguration {
            field: "bracket".to_string(),
            reason: format!("no sign change: f({}) = {}, f({}) = {}", lo, fa, hi, fb),
        });
    }
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let mut t = 0.5 * (a + b);
    for _ in 0..max_iter {
        let ft = f(t);
        if !ft.is_finite() {
            return Err(SdeError::NumericalInstability {
                method: "safeguarded Newton".to_string(),
                reason: format!("non-finite residual at t = {}", t),
            });
        }
        if ft.abs() < tol || (b - a) < tol {
            return Ok(t);
        }
        if ft < 0.0 {
            a = t;
        } else {
            b = t;
        }

        let slope = df(t);
        let newton = t - ft / slope;
        t = if slope > 0.0 && newton > a && newton < b {
            newton
        } else {
            0.5 * (a + b)
        };
    }

    Err(SdeError::NumericalInstability {
        method: "safeguarded Newton".to_string(),
        reason: format!(
            "no convergence after {} iterations, bracket [{}, {}]",
            max_iter, a, b
        ),
    })
}
