// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Least-Squares Fit
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Straight-line least squares and log-log slope estimation.

use ndarray::ArrayView1;

/// Ordinary least-squares line `y = slope * x + intercept`.
///
/// Returns `None` for fewer than 2 points, mismatched lengths, or zero
/// variance in `x`.
pub fn linear_fit(x: ArrayView1<f64>, y: ArrayView1<f64>) -> Option<(f64, f64)> {
    let n = x.len();
    if n < 2 || y.len() != n {
        return None;
    }
    let nf = n as f64;
    let mean_x = x.sum() / nf;
    let mean_y = y.sum() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        sxx += dx * dx;
        sxy += dx * (yi - mean_y);
    }
    if sxx <= 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

/// Log-log slope d ln(y) / d ln(x) over `0 < x <= x_max` where `y > 0`.
///
/// NaN when fewer than 3 points qualify.
pub fn log_log_slope(x: ArrayView1<f64>, y: ArrayView1<f64>, x_max: f64) -> f64 {
    let (lx, ly): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|&(&xi, &yi)| xi > 0.0 && xi <= x_max && yi > 0.0)
        .map(|(&xi, &yi)| (xi.ln(), yi.ln()))
        .unzip();
    if lx.len() < 3 {
        return f64::NAN;
    }
    linear_fit(ArrayView1::from(&lx), ArrayView1::from(&ly))
        .map(|(slope, _)| slope)
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, Array1};

    #[test]
    fn test_linear_fit_exact_line() {
        let x = arr1(&[0.0, 1.0, 2.0, 3.0]);
        let y = x.mapv(|v| 2.5 * v - 1.0);
        let (m, b) = linear_fit(x.view(), y.view()).unwrap();
        assert!((m - 2.5).abs() < 1e-12);
        assert!((b + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_fit_degenerate() {
        let x = arr1(&[1.0, 1.0, 1.0]);
        let y = arr1(&[0.0, 1.0, 2.0]);
        assert!(linear_fit(x.view(), y.view()).is_none());
        assert!(linear_fit(arr1(&[1.0]).view(), arr1(&[1.0]).view()).is_none());
    }

    #[test]
    fn test_power_law_slope() {
        let x = Array1::logspace(10.0, -2.0, 1.0, 50);
        let y = x.mapv(|r: f64| 3.0 * r.powf(-1.5));
        let s = log_log_slope(x.view(), y.view(), 1.0);
        assert!((s + 1.5).abs() < 1e-10, "slope = {s}");
    }

    #[test]
    fn test_slope_mask_excludes_outer_points() {
        // power law -1 inside x <= 1, flat outside
        let x = arr1(&[0.1, 0.2, 0.5, 1.0, 2.0, 5.0]);
        let y = x.mapv(|r: f64| if r <= 1.0 { 1.0 / r } else { 1.0 });
        let s = log_log_slope(x.view(), y.view(), 1.0);
        assert!((s + 1.0).abs() < 1e-12, "slope = {s}");
    }

    #[test]
    fn test_slope_too_few_points() {
        let x = arr1(&[0.5, 1.0, 2.0]);
        let y = arr1(&[1.0, 1.0, 1.0]);
        assert!(log_log_slope(x.view(), y.view(), 1.0).is_nan());
        let y = arr1(&[0.0, -1.0, 1.0]);
        assert!(log_log_slope(arr1(&[0.1, 0.2, 0.3]).view(), y.view(), 1.0).is_nan());
    }
}
