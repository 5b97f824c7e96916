// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Profile Export
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! NumPy `.npz` export of warm-core profiles.

use std::fs::File;
use std::path::Path;

use gop_types::error::{GopError, GopResult};
use ndarray::Array1;
use ndarray_npy::{NpzReader, NpzWriter};

use crate::warm_core::WarmCoreProfile;

const PROFILE_KEYS: [&str; 6] = ["r_kpc", "rho_b", "e_local", "gamma", "rho_prob", "rho_eff"];

/// Write every profile array into an uncompressed `.npz` archive.
pub fn write_profile_npz(path: impl AsRef<Path>, profile: &WarmCoreProfile) -> GopResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut npz = NpzWriter::new(file);
    let arrays = [
        &profile.r_kpc,
        &profile.rho_b,
        &profile.e_local,
        &profile.gamma,
        &profile.rho_prob,
        &profile.rho_eff,
    ];
    for (key, array) in PROFILE_KEYS.iter().zip(arrays) {
        npz.add_array(*key, array).map_err(|e| {
            GopError::Npy(format!("Failed to write {key} to '{}': {e}", path.display()))
        })?;
    }
    npz.finish()
        .map_err(|e| GopError::Npy(format!("Failed to finish '{}': {e}", path.display())))?;
    Ok(())
}

/// Load a profile written by [`write_profile_npz`].
pub fn read_profile_npz(path: impl AsRef<Path>) -> GopResult<WarmCoreProfile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut npz = NpzReader::new(file).map_err(|e| {
        GopError::Npy(format!("Failed to open npz '{}': {e}", path.display()))
    })?;

    let profile = WarmCoreProfile {
        r_kpc: read_array1(&mut npz, "r_kpc")?,
        rho_b: read_array1(&mut npz, "rho_b")?,
        e_local: read_array1(&mut npz, "e_local")?,
        gamma: read_array1(&mut npz, "gamma")?,
        rho_prob: read_array1(&mut npz, "rho_prob")?,
        rho_eff: read_array1(&mut npz, "rho_eff")?,
    };

    let n = profile.r_kpc.len();
    let lengths = [
        profile.rho_b.len(),
        profile.e_local.len(),
        profile.gamma.len(),
        profile.rho_prob.len(),
        profile.rho_eff.len(),
    ];
    if let Some(&len) = lengths.iter().find(|&&len| len != n) {
        return Err(GopError::ShapeMismatch {
            lhs: vec![n],
            rhs: vec![len],
        });
    }
    Ok(profile)
}

fn read_array1(npz: &mut NpzReader<File>, key: &str) -> GopResult<Array1<f64>> {
    npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>(&format!("{key}.npy"))
        .or_else(|_| npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>(key))
        .map_err(|e| GopError::Npy(format!("Failed to read {key} from npz: {e}")))
}
