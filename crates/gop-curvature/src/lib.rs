// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — GoP Curvature
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Decoherence kernel Γ(E) and the probabilistic stress-energy term
//! T_prob = κA · Γ(E) · f_ent · ρ_b.

pub mod kernel;
pub mod stress_energy;
