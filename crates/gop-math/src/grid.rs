// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Radial Grid
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Log-spaced radial grid.

use gop_types::error::{GopError, GopResult};
use ndarray::Array1;

/// Radii `10^log10_min ..= 10^log10_max`, evenly spaced in log10.
#[derive(Debug, Clone)]
pub struct LogGrid {
    pub log10_min: f64,
    pub log10_max: f64,
    pub points: Array1<f64>,
}

impl LogGrid {
    pub fn new(log10_min: f64, log10_max: f64, n: usize) -> GopResult<Self> {
        if n < 2 {
            return Err(GopError::Config(format!(
                "log grid requires at least 2 points, got {n}"
            )));
        }
        if !log10_min.is_finite() || !log10_max.is_finite() || log10_min >= log10_max {
            return Err(GopError::Config(format!(
                "log grid bounds must be finite with min < max, got [{log10_min}, {log10_max}]"
            )));
        }
        Ok(Self {
            log10_min,
            log10_max,
            points: Array1::logspace(10.0, log10_min, log10_max, n),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
