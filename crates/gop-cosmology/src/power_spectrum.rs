// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Power-Spectrum Modifier
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Multiplicative GoP bump on the matter power spectrum:
//! `P_GoP(k) = f(k) · P_ΛCDM(k)` with `f(k) = 1 + A exp(-½((k - k0)/σ_k)²)`.

use gop_types::error::{GopError, GopResult};
use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

/// Gaussian bump parameters. Wavenumbers in h/Mpc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PkBump {
    pub k0: f64,
    pub sigma_k: f64,
    pub amplitude: f64,
}

impl Default for PkBump {
    fn default() -> Self {
        Self {
            k0: 0.1,
            sigma_k: 0.03,
            amplitude: 0.03,
        }
    }
}

impl PkBump {
    pub fn validate(&self) -> GopResult<()> {
        if !self.k0.is_finite() || !self.sigma_k.is_finite() || !self.amplitude.is_finite() {
            return Err(GopError::Config(
                "P(k) bump parameters must be finite".to_string(),
            ));
        }
        if self.sigma_k <= 0.0 {
            return Err(GopError::Config(format!(
                "P(k) bump width sigma_k must be > 0, got {}",
                self.sigma_k
            )));
        }
        Ok(())
    }

    /// f(k) at a single wavenumber.
    pub fn factor(&self, k: f64) -> f64 {
        let u = (k - self.k0) / self.sigma_k;
        1.0 + self.amplitude * (-0.5 * u * u).exp()
    }

    /// f(k) elementwise.
    pub fn factor_array<S, D>(&self, k: &ArrayBase<S, D>) -> GopResult<Array<f64, D>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        self.validate()?;
        Ok(k.mapv(|v| self.factor(v)))
    }

    /// Apply the bump to a ΛCDM spectrum sampled at `k`.
    pub fn apply<Sk, Sp, D>(
        &self,
        k: &ArrayBase<Sk, D>,
        pk_lcdm: &ArrayBase<Sp, D>,
    ) -> GopResult<Array<f64, D>>
    where
        Sk: Data<Elem = f64>,
        Sp: Data<Elem = f64>,
        D: Dimension,
    {
        if k.shape() != pk_lcdm.shape() {
            return Err(GopError::ShapeMismatch {
                lhs: k.shape().to_vec(),
                rhs: pk_lcdm.shape().to_vec(),
            });
        }
        let mut out = self.factor_array(k)?;
        out.zip_mut_with(pk_lcdm, |f, &p| *f *= p);
        Ok(out)
    }
}

/// f(k) with explicit parameters.
pub fn pk_modifier(k: f64, k0: f64, sigma_k: f64, amplitude: f64) -> f64 {
    PkBump {
        k0,
        sigma_k,
        amplitude,
    }
    .factor(k)
}
