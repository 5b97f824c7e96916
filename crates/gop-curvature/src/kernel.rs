// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Decoherence Kernel
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bell-curve decoherence kernel Γ(E).
//!
//! Γ measures how strongly amplitudes at energy E decohere. It is
//! non-negative, unimodal with its maximum at the kernel center, and
//! vanishes far from the center.

use gop_types::config::{KernelForm, KernelParams};
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Evaluate Γ(E) for a single energy.
///
/// NaN propagates; ±∞ maps to 0.
pub fn gamma(e: f64, kernel: &KernelParams) -> f64 {
    match kernel.form() {
        KernelForm::Gaussian => {
            let u = (e - kernel.center()) / kernel.width();
            kernel.amplitude() * (-0.5 * u * u).exp()
        }
        KernelForm::Wien => {
            if e.is_nan() {
                f64::NAN
            } else if e <= 0.0 || e.is_infinite() {
                0.0
            } else {
                let x = e / kernel.center();
                // e / center can overflow for small centers; x e^{-x} -> 0 there
                if x.is_finite() {
                    kernel.amplitude() * x * (-x).exp()
                } else {
                    0.0
                }
            }
        }
    }
}

/// Evaluate Γ(E) elementwise; the output has the shape of `e`.
pub fn gamma_array<S, D>(e: &ArrayBase<S, D>, kernel: &KernelParams) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    e.mapv(|v| gamma(v, kernel))
}
