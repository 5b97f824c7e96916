// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — GoP Cosmology
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cosmological applications of the probabilistic curvature term.
//!
//! Warm-core density prediction for cored dwarf profiles, the P(k)
//! modifier, and `.npz` export of computed profiles.

pub mod output;
pub mod power_spectrum;
pub mod warm_core;
