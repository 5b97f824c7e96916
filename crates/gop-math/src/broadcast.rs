// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Broadcasting
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! NumPy-style broadcasting for n-dimensional arrays.
//!
//! ndarray's arithmetic operators co-broadcast but panic on mismatch; the
//! helpers here report `GopError::ShapeMismatch` instead.

use gop_types::error::{GopError, GopResult};
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, Dimension, IxDyn, Zip};

/// Broadcast shape of two array shapes, aligned from the trailing axis.
///
/// Each axis pair must be equal or contain a 1. Missing leading axes count as 1.
pub fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> GopResult<Vec<usize>> {
    let ndim = lhs.len().max(rhs.len());
    let mut out = vec![0; ndim];
    for i in 0..ndim {
        let l = if i < lhs.len() { lhs[lhs.len() - 1 - i] } else { 1 };
        let r = if i < rhs.len() { rhs[rhs.len() - 1 - i] } else { 1 };
        out[ndim - 1 - i] = if l == r || r == 1 {
            l
        } else if l == 1 {
            r
        } else {
            return Err(GopError::ShapeMismatch {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
            });
        };
    }
    Ok(out)
}

/// Read-only view of `array` broadcast to `shape`.
pub fn broadcast_to<'a, A, S, D>(
    array: &'a ArrayBase<S, D>,
    shape: &[usize],
) -> GopResult<ArrayViewD<'a, A>>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    array
        .broadcast(IxDyn(shape))
        .ok_or_else(|| GopError::ShapeMismatch {
            lhs: array.shape().to_vec(),
            rhs: shape.to_vec(),
        })
}

/// Apply `f` elementwise over the broadcast of `a` and `b`.
pub fn broadcast_map2<Sa, Sb, Da, Db, F>(
    a: &ArrayBase<Sa, Da>,
    b: &ArrayBase<Sb, Db>,
    mut f: F,
) -> GopResult<ArrayD<f64>>
where
    Sa: Data<Elem = f64>,
    Sb: Data<Elem = f64>,
    Da: Dimension,
    Db: Dimension,
    F: FnMut(f64, f64) -> f64,
{
    let shape = broadcast_shape(a.shape(), b.shape())?;
    let av = broadcast_to(a, &shape)?;
    let bv = broadcast_to(b, &shape)?;
    Ok(Zip::from(&av).and(&bv).map_collect(|&x, &y| f(x, y)))
}
