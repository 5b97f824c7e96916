// ─────────────────────────────────────────────────────────────────────
// GoP Curvature — Config
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Frozen GoP parameter set.
//!
//! Parameters are validated once at construction and never mutated. JSON
//! loading goes through the same validation, so an invalid file fails at
//! load time instead of producing nonsensical output later.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{A_CP, F_ENT, KAPPA_A, KERNEL_AMPLITUDE, KERNEL_CENTER, KERNEL_WIDTH};
use crate::error::{GopError, GopResult};

/// Functional form of the decoherence kernel Γ(E).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelForm {
    /// `A * exp(-(E - center)^2 / (2 width^2))`, peak `A` at `center`.
    #[default]
    Gaussian,
    /// `A * x * exp(-x)` with `x = E / center`, zero for `E <= 0`.
    /// Peak `A / e` at `center`; `width` is ignored.
    Wien,
}

/// Shape parameters of Γ(E).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawKernelParams")]
pub struct KernelParams {
    form: KernelForm,
    center: f64,
    width: f64,
    amplitude: f64,
}

#[derive(Deserialize)]
struct RawKernelParams {
    #[serde(default)]
    form: KernelForm,
    #[serde(default = "default_center")]
    center: f64,
    #[serde(default = "default_width")]
    width: f64,
    #[serde(default = "default_amplitude")]
    amplitude: f64,
}

fn default_center() -> f64 {
    KERNEL_CENTER
}
fn default_width() -> f64 {
    KERNEL_WIDTH
}
fn default_amplitude() -> f64 {
    KERNEL_AMPLITUDE
}

impl TryFrom<RawKernelParams> for KernelParams {
    type Error = GopError;

    fn try_from(raw: RawKernelParams) -> GopResult<Self> {
        KernelParams::new(raw.form, raw.center, raw.width, raw.amplitude)
    }
}

impl KernelParams {
    pub fn new(form: KernelForm, center: f64, width: f64, amplitude: f64) -> GopResult<Self> {
        let kernel = Self {
            form,
            center,
            width,
            amplitude,
        };
        kernel.validate()?;
        Ok(kernel)
    }

    /// Gaussian kernel with unit amplitude.
    pub fn gaussian(center: f64, width: f64) -> GopResult<Self> {
        Self::new(KernelForm::Gaussian, center, width, KERNEL_AMPLITUDE)
    }

    /// Wien-shaped kernel `x e^{-x}` with unit amplitude.
    pub fn wien(center: f64) -> GopResult<Self> {
        Self::new(KernelForm::Wien, center, KERNEL_WIDTH, KERNEL_AMPLITUDE)
    }

    pub fn validate(&self) -> GopResult<()> {
        if !self.center.is_finite() || !self.width.is_finite() || !self.amplitude.is_finite() {
            return Err(GopError::Config(
                "kernel parameters must be finite".to_string(),
            ));
        }
        if self.width <= 0.0 {
            return Err(GopError::Config(format!(
                "kernel width must be > 0, got {}",
                self.width
            )));
        }
        if self.amplitude < 0.0 {
            return Err(GopError::Config(format!(
                "kernel amplitude must be >= 0, got {}",
                self.amplitude
            )));
        }
        if self.form == KernelForm::Wien && self.center <= 0.0 {
            return Err(GopError::Config(format!(
                "Wien kernel center must be > 0, got {}",
                self.center
            )));
        }
        Ok(())
    }

    pub fn form(&self) -> KernelForm {
        self.form
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Energy at which Γ attains its maximum.
    pub fn peak_energy(&self) -> f64 {
        self.center
    }

    /// Maximum value of Γ.
    pub fn peak(&self) -> f64 {
        match self.form {
            KernelForm::Gaussian => self.amplitude,
            KernelForm::Wien => self.amplitude * (-1.0f64).exp(),
        }
    }
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            form: KernelForm::Gaussian,
            center: KERNEL_CENTER,
            width: KERNEL_WIDTH,
            amplitude: KERNEL_AMPLITUDE,
        }
    }
}

/// Complete GoP parameter set: κA, f_ent, a_cp and the kernel shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGopParams")]
pub struct GopParams {
    kappa_a: f64,
    f_ent: f64,
    a_cp: f64,
    kernel: KernelParams,
}

#[derive(Deserialize)]
struct RawGopParams {
    #[serde(default = "default_kappa_a")]
    kappa_a: f64,
    #[serde(default = "default_f_ent")]
    f_ent: f64,
    #[serde(default = "default_a_cp")]
    a_cp: f64,
    #[serde(default)]
    kernel: KernelParams,
}

fn default_kappa_a() -> f64 {
    KAPPA_A
}
fn default_f_ent() -> f64 {
    F_ENT
}
fn default_a_cp() -> f64 {
    A_CP
}

impl TryFrom<RawGopParams> for GopParams {
    type Error = GopError;

    fn try_from(raw: RawGopParams) -> GopResult<Self> {
        GopParams::new(raw.kappa_a, raw.f_ent, raw.kernel)?.with_a_cp(raw.a_cp)
    }
}

impl GopParams {
    pub fn new(kappa_a: f64, f_ent: f64, kernel: KernelParams) -> GopResult<Self> {
        let params = Self {
            kappa_a,
            f_ent,
            a_cp: A_CP,
            kernel,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> GopResult<()> {
        if !self.kappa_a.is_finite() || self.kappa_a < 0.0 {
            return Err(GopError::Config(format!(
                "kappa_a must be finite and >= 0, got {}",
                self.kappa_a
            )));
        }
        if !(0.0..=1.0).contains(&self.f_ent) {
            return Err(GopError::Config(format!(
                "f_ent must lie in [0, 1], got {}",
                self.f_ent
            )));
        }
        if !self.a_cp.is_finite() || self.a_cp <= -1.0 {
            return Err(GopError::Config(format!(
                "a_cp must be finite and > -1, got {}",
                self.a_cp
            )));
        }
        self.kernel.validate()
    }

    /// Copy with a different CP asymmetry.
    pub fn with_a_cp(self, a_cp: f64) -> GopResult<Self> {
        let params = Self { a_cp, ..self };
        params.validate()?;
        Ok(params)
    }

    /// Copy with a different kernel shape.
    pub fn with_kernel(self, kernel: KernelParams) -> GopResult<Self> {
        let params = Self { kernel, ..self };
        params.validate()?;
        Ok(params)
    }

    pub fn kappa_a(&self) -> f64 {
        self.kappa_a
    }

    pub fn f_ent(&self) -> f64 {
        self.f_ent
    }

    pub fn a_cp(&self) -> f64 {
        self.a_cp
    }

    pub fn kernel(&self) -> &KernelParams {
        &self.kernel
    }

    /// Combined prefactor κA · f_ent applied to Γ(E) · ρ_b.
    pub fn coupling(&self) -> f64 {
        self.kappa_a * self.f_ent
    }

    /// Load from a JSON file. Missing fields fall back to the canonical constants.
    pub fn from_file(path: impl AsRef<Path>) -> GopResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        Ok(params)
    }
}

impl Default for GopParams {
    fn default() -> Self {
        Self {
            kappa_a: KAPPA_A,
            f_ent: F_ENT,
            a_cp: A_CP,
            kernel: KernelParams::default(),
        }
    }
}
