//! Hydrogen-like wavefunctions for the 1s and 2p orbitals.
//!
//! The field is the product of a radial part R_nl(r) and a real spherical
//! harmonic. Lengths are given in Angstrom and converted to reduced units
//! with [`BOHR_RADIUS`] before evaluating the radial part.

use crate::error::OrbitalError;
use crate::helper::to_spherical;
use nalgebra::Vector3;
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, SQRT_2};
use std::fmt;
use std::str::FromStr;

/// Bohr radius in Angstrom.
pub const BOHR_RADIUS: f64 = 0.529;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitalType {
    S,
    Px,
    Py,
    Pz,
}

/// Principal, azimuthal and magnetic quantum numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumNumbers {
    pub n: u32,
    pub l: u32,
    pub m: i32,
}

impl OrbitalType {
    pub const ALL: [OrbitalType; 4] = [
        OrbitalType::S,
        OrbitalType::Px,
        OrbitalType::Py,
        OrbitalType::Pz,
    ];

    pub fn quantum_numbers(&self) -> QuantumNumbers {
        let (n, l, m) = match self {
            OrbitalType::S => (1, 0, 0),
            OrbitalType::Pz => (2, 1, 0),
            OrbitalType::Px => (2, 1, 1),
            OrbitalType::Py => (2, 1, -1),
        };
        QuantumNumbers { n, l, m }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrbitalType::S => "s",
            OrbitalType::Px => "px",
            OrbitalType::Py => "py",
            OrbitalType::Pz => "pz",
        }
    }

    pub fn is_p(&self) -> bool {
        !matches!(self, OrbitalType::S)
    }
}

impl fmt::Display for OrbitalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrbitalType {
    type Err = OrbitalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" => Ok(OrbitalType::S),
            "px" => Ok(OrbitalType::Px),
            "py" => Ok(OrbitalType::Py),
            "pz" => Ok(OrbitalType::Pz),
            _ => Err(OrbitalError::UnknownOrbital(s.to_string())),
        }
    }
}

/// Radial part R_nl(r) for r in Angstrom.
///
/// Only 1s, 2s and 2p are defined; every other (n, l) is zero everywhere.
pub fn radial(n: u32, l: u32, r: f64) -> f64 {
    let rho = r / BOHR_RADIUS;
    match (n, l) {
        (1, 0) => 2.0 * (-rho).exp(),
        (2, 0) => (1.0 - rho / 2.0) * (-rho / 2.0).exp() / (2.0 * SQRT_2),
        (2, 1) => rho * (-rho / 2.0).exp() / (2.0 * 6.0_f64.sqrt()),
        _ => 0.0,
    }
}

/// Complex spherical harmonic Y_l^m(theta, phi) including the Condon-Shortley
/// phase. Defined for l <= 1.
pub fn spherical_harmonic(l: u32, m: i32, theta: f64, phi: f64) -> Complex<f64> {
    match (l, m) {
        (0, 0) => Complex::new(0.5 * (1.0 / PI).sqrt(), 0.0),
        (1, 0) => Complex::new(0.5 * (3.0 / PI).sqrt() * theta.cos(), 0.0),
        (1, 1) => Complex::from_polar(-0.5 * (3.0 / (2.0 * PI)).sqrt() * theta.sin(), phi),
        (1, -1) => Complex::from_polar(0.5 * (3.0 / (2.0 * PI)).sqrt() * theta.sin(), -phi),
        _ => Complex::new(0.0, 0.0),
    }
}

/// Real angular part used for the cartesian p orbitals.
///
/// px and py are the real and imaginary parts of Y_1^1 scaled by sqrt(2).
pub fn real_harmonic(l: u32, m: i32, theta: f64, phi: f64) -> f64 {
    match (l, m) {
        (0, 0) | (1, 0) => spherical_harmonic(l, m, theta, phi).re,
        (1, 1) => SQRT_2 * spherical_harmonic(1, 1, theta, phi).re,
        (1, -1) => SQRT_2 * spherical_harmonic(1, 1, theta, phi).im,
        _ => 0.0,
    }
}

/// A single hydrogen-like orbital, evaluated pointwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrogenOrbital {
    pub orbital: OrbitalType,
    pub quantum: QuantumNumbers,
}

impl HydrogenOrbital {
    pub fn new(orbital: OrbitalType) -> Self {
        Self {
            orbital,
            quantum: orbital.quantum_numbers(),
        }
    }

    pub fn radial(&self, r: f64) -> f64 {
        radial(self.quantum.n, self.quantum.l, r)
    }

    pub fn angular(&self, theta: f64, phi: f64) -> f64 {
        real_harmonic(self.quantum.l, self.quantum.m, theta, phi)
    }

    /// psi(x, y, z) = R(r) * Y(theta, phi)
    pub fn evaluate(&self, point: &Vector3<f64>) -> f64 {
        let (r, theta, phi) = to_spherical(point);
        self.radial(r) * self.angular(theta, phi)
    }
}
