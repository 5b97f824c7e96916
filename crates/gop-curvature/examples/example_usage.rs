//! Minimal usage of the probabilistic curvature term at the kernel center.

use gop_curvature::kernel::gamma;
use gop_curvature::stress_energy::{t_prob, tmunu_prob};
use gop_types::config::GopParams;

fn main() {
    let params = GopParams::default();
    let e = params.kernel().center();
    let rho_b = 1.0e-27;
    let z = 0.5;

    println!("Using KAPPA_A = {:e}", params.kappa_a());
    println!("E = {e}, rho_b = {rho_b:e}, z = {z}");
    println!();
    println!("Gamma(E) = {}", gamma(e, params.kernel()));
    println!("T_prob   = {:e}", t_prob(e, rho_b, z, &params));
    println!();
    let t = tmunu_prob(e, rho_b, z, &params);
    println!("T_prob (4x4) =\n{t:e}");
    println!("Energy density contribution T00 = {:e}", t[[0, 0]]);
}
