// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Constants
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Canonical GoP constants. `GopParams::default()` is built from these.

/// Global amplitude κA of the probabilistic curvature term.
pub const KAPPA_A: f64 = 1.0e-3;

/// Entanglement fraction f_ent, in [0, 1].
pub const F_ENT: f64 = 0.1;

/// CP asymmetry a_cp used by the warm-core density proxy.
pub const A_CP: f64 = 0.0;

/// Kernel center energy (E0). Caller units; erg in the cosmology pipeline.
pub const KERNEL_CENTER: f64 = 1.0;

/// Kernel width (Gaussian σ), same units as the center.
pub const KERNEL_WIDTH: f64 = 1.0;

/// Kernel amplitude A. Γ peaks at A (Gaussian) or A/e (Wien).
pub const KERNEL_AMPLITUDE: f64 = 1.0;

/// Speed of light (cm/s)
pub const C_LIGHT_CGS: f64 = 2.997_924_58e10;

/// Default coherence length for the physical energy mapping (cm).
pub const L_COH_CM: f64 = 1.0e18;
