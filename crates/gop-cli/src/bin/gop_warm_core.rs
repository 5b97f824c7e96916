// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Warm-Core CLI
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `gop-warm-core`: warm-core prediction for a cored baryonic profile.
//!
//! Prints the core parameters, the energy-mapping configuration and the
//! inner-slope comparison. `--output` writes the radial profiles to `.npz`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gop_cosmology::output::write_profile_npz;
use gop_cosmology::warm_core::{run_warm_core, EnergyMapping, WarmCoreConfig};
use gop_types::config::{GopParams, KernelForm};
use gop_types::constants::L_COH_CM;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Normalized,
    Physical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kernel {
    Gaussian,
    Wien,
}

impl From<Kernel> for KernelForm {
    fn from(k: Kernel) -> Self {
        match k {
            Kernel::Gaussian => KernelForm::Gaussian,
            Kernel::Wien => KernelForm::Wien,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "gop-warm-core",
    version,
    about = "GoP warm-core prediction pipeline (DESI-ready template)"
)]
struct Args {
    /// Energy mapping used to define E_local for Γ(E).
    #[arg(long, value_enum, default_value_t = Mode::Normalized)]
    mode: Mode,

    /// Kernel form for Γ(E_local); center and width come from the parameters.
    #[arg(long, value_enum, default_value_t = Kernel::Wien)]
    kernel: Kernel,

    /// Central baryonic density normalization.
    #[arg(long, default_value_t = 1.0)]
    rho0: f64,

    /// Core radius of the baryonic profile (kpc).
    #[arg(long = "rcore-kpc", default_value_t = 0.5)]
    rcore_kpc: f64,

    /// Reference density for normalized mode. Defaults to ρ_b at the smallest radius.
    #[arg(long = "rho-ref")]
    rho_ref: Option<f64>,

    /// Coherence length (cm) for physical mode: E_local = ρ_b c² L³.
    #[arg(long = "lcoh-cm", alias = "Lcoh-cm", default_value_t = L_COH_CM)]
    lcoh_cm: f64,

    /// JSON file overriding the canonical GoP parameters.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Write r, ρ_b, E_local, Γ, ρ_prob and ρ_eff to this `.npz` file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log kernel diagnostics (same as RUST_LOG=debug).
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn mapping(&self) -> EnergyMapping {
        match self.mode {
            Mode::Normalized => EnergyMapping::Normalized {
                rho_ref: self.rho_ref,
            },
            Mode::Physical => EnergyMapping::Physical {
                l_coh_cm: self.lcoh_cm,
            },
        }
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let params = match &args.params {
        Some(path) => GopParams::from_file(path)
            .with_context(|| format!("loading GoP parameters from {}", path.display()))?,
        None => GopParams::default(),
    };
    let config = WarmCoreConfig {
        mapping: args.mapping(),
        kernel: args.kernel.into(),
        rho0: args.rho0,
        r_core_kpc: args.rcore_kpc,
        ..WarmCoreConfig::default()
    };

    println!("Core parameters:");
    println!("  KAPPA_A = {:.3e}", params.kappa_a());
    println!(
        "  E0      = {:.3e} ({:?} kernel, width {:.3e})",
        params.kernel().center(),
        config.kernel,
        params.kernel().width()
    );
    println!("  F_ENT   = {:.3}", params.f_ent());
    println!("  A_CP    = {:.4}", params.a_cp());
    println!();

    println!("Energy mapping configuration:");
    println!("  mode    = {}", config.mapping);
    match config.mapping {
        EnergyMapping::Normalized { rho_ref: Some(r) } => println!("  rho_ref = {r}"),
        EnergyMapping::Normalized { rho_ref: None } => println!("  rho_ref = rho_b[r_min]"),
        EnergyMapping::Physical { l_coh_cm } => println!("  Lcoh_cm = {l_coh_cm:.3e} cm"),
    }
    println!();

    let report = run_warm_core(&config, &params).context("running warm-core pipeline")?;
    let r0 = report.profile.r_kpc[0];

    println!("=== GoP Warm-Core Prediction ===");
    println!("Inner slope (baryons only):  {:.3}  → cusp", report.slope_baryon);
    println!(
        "Inner slope (GoP effective): {:.3}  → warm core",
        report.slope_effective
    );
    println!(
        "Warm-core factor:            {:.4}x baryonic density at r={r0:.3} kpc",
        report.warm_core_factor
    );

    if let Some(path) = &args.output {
        write_profile_npz(path, &report.profile)
            .with_context(|| format!("writing profiles to {}", path.display()))?;
        info!(path = %path.display(), "profiles written");
        println!();
        println!("Profiles written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_pipeline() {
        let args = Args::parse_from(["gop-warm-core"]);
        assert_eq!(args.mode, Mode::Normalized);
        assert_eq!(args.rho0, 1.0);
        assert_eq!(args.rcore_kpc, 0.5);
        assert_eq!(args.mapping(), EnergyMapping::Normalized { rho_ref: None });
        assert_eq!(KernelForm::from(args.kernel), WarmCoreConfig::default().kernel);
    }

    #[test]
    fn test_kernel_flag() {
        let args = Args::parse_from(["gop-warm-core", "--kernel", "gaussian"]);
        assert_eq!(KernelForm::from(args.kernel), KernelForm::Gaussian);
        assert!(Args::try_parse_from(["gop-warm-core", "--kernel", "lorentz"]).is_err());
    }

    #[test]
    fn test_script_spelling_of_coherence_length() {
        let args = Args::parse_from(["gop-warm-core", "--mode", "physical", "--Lcoh-cm", "1e20"]);
        assert_eq!(args.mapping(), EnergyMapping::Physical { l_coh_cm: 1e20 });
    }

    #[test]
    fn test_physical_flags() {
        let args = Args::parse_from([
            "gop-warm-core",
            "--mode",
            "physical",
            "--lcoh-cm",
            "1e20",
            "--debug",
        ]);
        assert!(args.debug);
        assert_eq!(args.mapping(), EnergyMapping::Physical { l_coh_cm: 1e20 });
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Args::try_parse_from(["gop-warm-core", "--mode", "relativistic"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
