// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Warm-Core Prediction
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Warm-core density prediction for cored baryonic profiles.
//!
//! Each radius is assigned a kernel energy `E_local` from the baryonic
//! density, the kernel turns it into a probabilistic density floor
//! `ρ_prob = κA · Γ(E_local) · f_ent · (1 + a_cp)`, and the inner log-slope
//! of `ρ_eff = ρ_b + ρ_prob` is compared to that of the baryons alone.

use std::fmt;
use std::str::FromStr;

use gop_curvature::kernel::gamma_array;
use gop_math::fit::log_log_slope;
use gop_math::grid::LogGrid;
use gop_types::config::{GopParams, KernelForm, KernelParams};
use gop_types::constants::{C_LIGHT_CGS, L_COH_CM};
use gop_types::error::{GopError, GopResult};
use ndarray::{Array1, ArrayView1, Zip};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Floor on ρ_b when forming ρ_prob / ρ_b ratios.
const MIN_RHO_RATIO_DENOM: f64 = 1e-300;

/// How a baryonic density is mapped onto the kernel energy argument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum EnergyMapping {
    /// `E_local = E0 · ρ_b / ρ_ref`, with E0 the kernel center.
    /// `ρ_ref` defaults to the innermost density.
    Normalized {
        #[serde(default)]
        rho_ref: Option<f64>,
    },
    /// `E_local = ρ_b · c² · L_coh³` (CGS).
    Physical {
        #[serde(default = "default_l_coh_cm")]
        l_coh_cm: f64,
    },
}

fn default_l_coh_cm() -> f64 {
    L_COH_CM
}

impl Default for EnergyMapping {
    fn default() -> Self {
        EnergyMapping::Normalized { rho_ref: None }
    }
}

impl FromStr for EnergyMapping {
    type Err = GopError;

    fn from_str(s: &str) -> GopResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normalized" => Ok(EnergyMapping::Normalized { rho_ref: None }),
            "physical" => Ok(EnergyMapping::Physical { l_coh_cm: L_COH_CM }),
            other => Err(GopError::Config(format!(
                "mode must be one of: 'normalized', 'physical' (got '{other}')"
            ))),
        }
    }
}

impl fmt::Display for EnergyMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyMapping::Normalized { .. } => write!(f, "normalized"),
            EnergyMapping::Physical { .. } => write!(f, "physical"),
        }
    }
}

impl EnergyMapping {
    pub fn validate(&self) -> GopResult<()> {
        match *self {
            EnergyMapping::Normalized { rho_ref: Some(r) } if !r.is_finite() => Err(
                GopError::Config(format!("rho_ref must be finite, got {r}")),
            ),
            EnergyMapping::Physical { l_coh_cm } if !(l_coh_cm.is_finite() && l_coh_cm > 0.0) => {
                Err(GopError::Config(format!(
                    "coherence length must be finite and > 0, got {l_coh_cm}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Reference density actually used by the normalized mapping.
    /// Zero references fall back to 1.
    pub fn reference_density(&self, rho_b: ArrayView1<f64>) -> Option<f64> {
        match *self {
            EnergyMapping::Normalized { rho_ref } => {
                let r = rho_ref.unwrap_or_else(|| rho_b.get(0).copied().unwrap_or(1.0));
                Some(if r == 0.0 { 1.0 } else { r })
            }
            EnergyMapping::Physical { .. } => None,
        }
    }
}

/// Cored isothermal baryonic profile `ρ0 / (1 + (r / r_core)²)`.
pub fn rho_baryon(r_kpc: ArrayView1<f64>, rho0: f64, r_core_kpc: f64) -> Array1<f64> {
    r_kpc.mapv(|r| {
        let x = r / r_core_kpc;
        rho0 / (1.0 + x * x)
    })
}

/// Map ρ_b onto the kernel energy argument E_local.
pub fn compute_e_local(
    rho_b: ArrayView1<f64>,
    mapping: &EnergyMapping,
    params: &GopParams,
) -> GopResult<Array1<f64>> {
    mapping.validate()?;
    match *mapping {
        EnergyMapping::Normalized { .. } => {
            let rho_ref = mapping.reference_density(rho_b).unwrap_or(1.0);
            let e0 = params.kernel().center();
            Ok(rho_b.mapv(|r| e0 * (r / rho_ref)))
        }
        EnergyMapping::Physical { l_coh_cm } => {
            let v_coh = l_coh_cm.powi(3);
            Ok(rho_b.mapv(|r| r * C_LIGHT_CGS * C_LIGHT_CGS * v_coh))
        }
    }
}

/// Probabilistic density floor ρ_prob for each radius.
pub fn rho_prob(
    rho_b: ArrayView1<f64>,
    mapping: &EnergyMapping,
    params: &GopParams,
) -> GopResult<Array1<f64>> {
    let e_local = compute_e_local(rho_b, mapping, params)?;
    Ok(prob_from_gamma(&gamma_array(&e_local, params.kernel()), params))
}

fn prob_from_gamma(gamma: &Array1<f64>, params: &GopParams) -> Array1<f64> {
    let scale = params.coupling() * (1.0 + params.a_cp());
    gamma.mapv(|g| scale * g)
}

/// Effective density ρ_eff = ρ_b + ρ_prob.
pub fn rho_effective(
    rho_b: ArrayView1<f64>,
    mapping: &EnergyMapping,
    params: &GopParams,
) -> GopResult<Array1<f64>> {
    let prob = rho_prob(rho_b, mapping, params)?;
    Ok(&rho_b + &prob)
}

/// Inner log-slope d ln ρ / d ln r over `(0, r_max]`.
///
/// NaN when fewer than 3 radii qualify.
pub fn inner_slope(r_kpc: ArrayView1<f64>, rho: ArrayView1<f64>, r_max: f64) -> f64 {
    log_log_slope(r_kpc, rho, r_max)
}

/// Pipeline inputs. Radii in kpc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarmCoreConfig {
    pub mapping: EnergyMapping,
    /// Kernel form used for Γ(E_local). Center, width and amplitude still
    /// come from the parameter set.
    pub kernel: KernelForm,
    pub rho0: f64,
    pub r_core_kpc: f64,
    pub log10_r_min: f64,
    pub log10_r_max: f64,
    pub n_radii: usize,
    pub slope_r_max_kpc: f64,
}

impl Default for WarmCoreConfig {
    fn default() -> Self {
        Self {
            mapping: EnergyMapping::default(),
            kernel: KernelForm::Wien,
            rho0: 1.0,
            r_core_kpc: 0.5,
            log10_r_min: -2.0,
            log10_r_max: 1.8,
            n_radii: 400,
            slope_r_max_kpc: 1.0,
        }
    }
}

impl WarmCoreConfig {
    pub fn validate(&self) -> GopResult<()> {
        self.mapping.validate()?;
        if !(self.rho0.is_finite() && self.rho0 > 0.0) {
            return Err(GopError::Config(format!(
                "rho0 must be finite and > 0, got {}",
                self.rho0
            )));
        }
        if !(self.r_core_kpc.is_finite() && self.r_core_kpc > 0.0) {
            return Err(GopError::Config(format!(
                "r_core_kpc must be finite and > 0, got {}",
                self.r_core_kpc
            )));
        }
        if self.slope_r_max_kpc.is_nan() || self.slope_r_max_kpc <= 0.0 {
            return Err(GopError::Config(format!(
                "slope_r_max_kpc must be > 0, got {}",
                self.slope_r_max_kpc
            )));
        }
        Ok(())
    }
}

/// Sanity numbers confirming the kernel is actually active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Reference density used by the normalized mapping.
    pub rho_ref: Option<f64>,
    pub max_e_ratio: f64,
    pub min_e_ratio: f64,
    pub max_gamma: f64,
    pub max_prob_ratio: f64,
}

impl Diagnostics {
    fn compute(
        rho_b: ArrayView1<f64>,
        e_local: &Array1<f64>,
        gamma: &Array1<f64>,
        prob: &Array1<f64>,
        mapping: &EnergyMapping,
        params: &GopParams,
    ) -> Self {
        let e0 = params.kernel().center();
        let max_of = |a: &Array1<f64>| a.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_of = |a: &Array1<f64>| a.iter().copied().fold(f64::INFINITY, f64::min);
        let e_ratio = e_local.mapv(|e| e / e0);
        let prob_ratio = Zip::from(prob)
            .and(&rho_b)
            .map_collect(|&p, &r| p / r.max(MIN_RHO_RATIO_DENOM));
        Self {
            rho_ref: mapping.reference_density(rho_b),
            max_e_ratio: max_of(&e_ratio),
            min_e_ratio: min_of(&e_ratio),
            max_gamma: max_of(gamma),
            max_prob_ratio: max_of(&prob_ratio),
        }
    }
}

/// Radial profiles produced by the pipeline.
#[derive(Debug, Clone)]
pub struct WarmCoreProfile {
    pub r_kpc: Array1<f64>,
    pub rho_b: Array1<f64>,
    pub e_local: Array1<f64>,
    pub gamma: Array1<f64>,
    pub rho_prob: Array1<f64>,
    pub rho_eff: Array1<f64>,
}

/// Warm-core prediction summary.
#[derive(Debug, Clone)]
pub struct WarmCoreReport {
    pub profile: WarmCoreProfile,
    pub slope_baryon: f64,
    pub slope_effective: f64,
    /// ρ_eff / ρ_b at the innermost radius.
    pub warm_core_factor: f64,
    pub diagnostics: Diagnostics,
    /// Parameters after applying the configured kernel form.
    pub params: GopParams,
}

/// Run the full warm-core prediction on a log-spaced radial grid.
pub fn run_warm_core(config: &WarmCoreConfig, params: &GopParams) -> GopResult<WarmCoreReport> {
    config.validate()?;
    let base = params.kernel();
    let kernel = KernelParams::new(config.kernel, base.center(), base.width(), base.amplitude())?;
    let params = &params.with_kernel(kernel)?;
    let grid = LogGrid::new(config.log10_r_min, config.log10_r_max, config.n_radii)?;
    let r_kpc = grid.points;

    let rho_b = rho_baryon(r_kpc.view(), config.rho0, config.r_core_kpc);
    let e_local = compute_e_local(rho_b.view(), &config.mapping, params)?;
    let gamma = gamma_array(&e_local, params.kernel());
    let prob = prob_from_gamma(&gamma, params);
    let rho_eff = &rho_b + &prob;

    let diagnostics = Diagnostics::compute(
        rho_b.view(),
        &e_local,
        &gamma,
        &prob,
        &config.mapping,
        params,
    );
    debug!(
        mode = %config.mapping,
        kernel = ?config.kernel,
        rho_ref = ?diagnostics.rho_ref,
        max_e_ratio = diagnostics.max_e_ratio,
        min_e_ratio = diagnostics.min_e_ratio,
        max_gamma = diagnostics.max_gamma,
        max_prob_ratio = diagnostics.max_prob_ratio,
        "warm-core diagnostics"
    );

    let slope_baryon = inner_slope(r_kpc.view(), rho_b.view(), config.slope_r_max_kpc);
    let slope_effective = inner_slope(r_kpc.view(), rho_eff.view(), config.slope_r_max_kpc);
    let warm_core_factor = rho_eff[0] / rho_b[0];
    info!(
        slope_baryon,
        slope_effective, warm_core_factor, "warm-core prediction complete"
    );

    Ok(WarmCoreReport {
        profile: WarmCoreProfile {
            r_kpc,
            rho_b,
            e_local,
            gamma,
            rho_prob: prob,
            rho_eff,
        },
        slope_baryon,
        slope_effective,
        warm_core_factor,
        diagnostics,
        params: *params,
    })
}
