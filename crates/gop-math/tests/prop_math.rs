// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Property-Based Tests (proptest) for gop-math
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for gop-math using proptest.
//!
//! Covers: broadcast shape rules, log grid bounds, power-law slope recovery.

use gop_math::broadcast::{broadcast_map2, broadcast_shape};
use gop_math::fit::log_log_slope;
use gop_math::grid::LogGrid;
use ndarray::{Array1, ArrayD, IxDyn};
use proptest::prelude::*;

// ── Broadcasting ─────────────────────────────────────────────────────

proptest! {
    /// Broadcast shape is symmetric in its arguments.
    #[test]
    fn broadcast_shape_commutes(
        lhs in prop::collection::vec(1usize..5, 0..4),
        rhs in prop::collection::vec(1usize..5, 0..4),
    ) {
        let ab = broadcast_shape(&lhs, &rhs);
        let ba = broadcast_shape(&rhs, &lhs);
        prop_assert_eq!(ab.is_ok(), ba.is_ok());
        if let (Ok(ab), Ok(ba)) = (ab, ba) {
            prop_assert_eq!(ab, ba);
        }
    }

    /// A shape always broadcasts with itself and with an all-ones shape.
    #[test]
    fn broadcast_identity(shape in prop::collection::vec(1usize..6, 0..4)) {
        prop_assert_eq!(broadcast_shape(&shape, &shape).unwrap(), shape.clone());
        let ones = vec![1; shape.len()];
        prop_assert_eq!(broadcast_shape(&shape, &ones).unwrap(), shape.clone());
        prop_assert_eq!(broadcast_shape(&shape, &[]).unwrap(), shape);
    }

    /// Distinct non-unit trailing lengths never broadcast.
    #[test]
    fn broadcast_mismatch_detected(a in 2usize..10, b in 2usize..10) {
        prop_assume!(a != b);
        prop_assert!(broadcast_shape(&[a], &[b]).is_err());
        let x = ArrayD::<f64>::zeros(IxDyn(&[a]));
        let y = ArrayD::<f64>::zeros(IxDyn(&[b]));
        prop_assert!(broadcast_map2(&x, &y, |p, q| p + q).is_err());
    }

    /// Elementwise product with a scalar array preserves shape and values.
    #[test]
    fn broadcast_scalar_scale(values in prop::collection::vec(-1e3f64..1e3, 1..32), s in -10.0f64..10.0) {
        let a = Array1::from_vec(values.clone());
        let scalar = ndarray::arr0(s);
        let out = broadcast_map2(&a, &scalar, |x, y| x * y).unwrap();
        prop_assert_eq!(out.shape(), &[values.len()]);
        for (o, v) in out.iter().zip(values.iter()) {
            prop_assert_eq!(*o, v * s);
        }
    }
}

// ── Grid and Fit ─────────────────────────────────────────────────────

proptest! {
    /// Log grid endpoints and monotonicity.
    #[test]
    fn log_grid_monotone(lo in -3.0f64..0.0, span in 0.5f64..4.0, n in 2usize..200) {
        let grid = LogGrid::new(lo, lo + span, n).unwrap();
        prop_assert_eq!(grid.len(), n);
        prop_assert!((grid.points[0].log10() - lo).abs() < 1e-9);
        for i in 1..n {
            prop_assert!(grid.points[i] > grid.points[i - 1]);
        }
    }

    /// The slope of an exact power law is recovered.
    #[test]
    fn power_law_slope_recovered(alpha in -3.0f64..3.0, norm in 0.1f64..10.0) {
        let r = Array1::logspace(10.0, -2.0, 0.0, 40);
        let rho = r.mapv(|x: f64| norm * x.powf(alpha));
        let slope = log_log_slope(r.view(), rho.view(), 1.0);
        prop_assert!((slope - alpha).abs() < 1e-8, "slope {} vs alpha {}", slope, alpha);
    }
}
