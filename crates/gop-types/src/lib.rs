// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — GoP Types
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared constants, frozen parameters and error types.

pub mod config;
pub mod constants;
pub mod error;
