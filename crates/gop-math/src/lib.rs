// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — GoP Math
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mathematical primitives for GoP curvature.

pub mod broadcast;
pub mod fit;
pub mod grid;
