// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Probabilistic Stress-Energy
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Probabilistic stress-energy contribution T_prob(E, ρ_b, z).
//!
//! `T_prob = κA · Γ(E) · f_ent · ρ_b`. The redshift `z` is part of the
//! signature but does not enter the current formula.

use gop_math::broadcast::broadcast_map2;
use gop_types::config::GopParams;
use gop_types::error::GopResult;
use ndarray::{Array2, ArrayBase, ArrayD, Data, Dimension};
use tracing::trace;

use crate::kernel::gamma;

/// Scalar T_prob.
pub fn t_prob(e: f64, rho_b: f64, _z: f64, params: &GopParams) -> f64 {
    params.coupling() * gamma(e, params.kernel()) * rho_b
}

/// Elementwise T_prob over NumPy-style broadcast of `e` and `rho_b`.
///
/// Incompatible `e`/`rho_b` shapes fail with `GopError::ShapeMismatch`;
/// nothing is truncated or padded. `z` does not enter the result, so its
/// shape is not checked.
pub fn t_prob_array<Se, Sr, Sz, De, Dr, Dz>(
    e: &ArrayBase<Se, De>,
    rho_b: &ArrayBase<Sr, Dr>,
    _z: &ArrayBase<Sz, Dz>,
    params: &GopParams,
) -> GopResult<ArrayD<f64>>
where
    Se: Data<Elem = f64>,
    Sr: Data<Elem = f64>,
    Sz: Data<Elem = f64>,
    De: Dimension,
    Dr: Dimension,
    Dz: Dimension,
{
    let coupling = params.coupling();
    let kernel = params.kernel();
    let out = broadcast_map2(e, rho_b, |ev, rv| coupling * gamma(ev, kernel) * rv)?;
    trace!(shape = ?out.shape(), "evaluated T_prob");
    Ok(out)
}

/// 4x4 stress-energy tensor of the probabilistic term.
///
/// Treated as a pressureless fluid at rest: only `T^00 = T_prob` is
/// non-zero.
pub fn tmunu_prob(e: f64, rho_b: f64, z: f64, params: &GopParams) -> Array2<f64> {
    let mut t = Array2::zeros((4, 4));
    t[[0, 0]] = t_prob(e, rho_b, z, params);
    t
}

/// T_prob evaluator bound to one frozen parameter set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StressEnergyEvaluator {
    params: GopParams,
}

impl StressEnergyEvaluator {
    pub fn new(params: GopParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GopParams {
        &self.params
    }

    pub fn gamma(&self, e: f64) -> f64 {
        gamma(e, self.params.kernel())
    }

    pub fn t_prob(&self, e: f64, rho_b: f64, z: f64) -> f64 {
        t_prob(e, rho_b, z, &self.params)
    }

    pub fn t_prob_array<Se, Sr, Sz, De, Dr, Dz>(
        &self,
        e: &ArrayBase<Se, De>,
        rho_b: &ArrayBase<Sr, Dr>,
        z: &ArrayBase<Sz, Dz>,
    ) -> GopResult<ArrayD<f64>>
    where
        Se: Data<Elem = f64>,
        Sr: Data<Elem = f64>,
        Sz: Data<Elem = f64>,
        De: Dimension,
        Dr: Dimension,
        Dz: Dimension,
    {
        t_prob_array(e, rho_b, z, &self.params)
    }

    pub fn tmunu(&self, e: f64, rho_b: f64, z: f64) -> Array2<f64> {
        tmunu_prob(e, rho_b, z, &self.params)
    }
}
