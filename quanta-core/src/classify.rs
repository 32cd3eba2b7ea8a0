//! Spin classification and particle statistics.

use serde::Serialize;
use std::fmt;

/// Tolerance used when deciding whether a spin is (half-)integer.
pub const SPIN_TOLERANCE: f64 = 1e-9;

/// Check whether `x` lies within [`SPIN_TOLERANCE`] of the nearest integer
pub fn is_nearly_integer(x: f64) -> bool {
    (x - x.round()).abs() < SPIN_TOLERANCE
}

/// Integer spin: 0, 1, 2, ...
pub fn is_integer_spin(spin: f64) -> bool {
    is_nearly_integer(spin)
}

/// Half-integer spin: 1/2, 3/2, ...
///
/// `2 * spin` must be nearly integral and that integer must be odd.
pub fn is_half_integer_spin(spin: f64) -> bool {
    let twice = 2.0 * spin;
    if !is_nearly_integer(twice) {
        return false;
    }
    // Parity in f64: an integer cast saturates for huge spins.
    twice.round().rem_euclid(2.0) == 1.0
}

/// Quantum statistics obeyed by a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Statistics {
    #[serde(rename = "Bose-Einstein")]
    BoseEinstein,
    #[serde(rename = "Fermi-Dirac")]
    FermiDirac,
}

impl Statistics {
    /// Bose-Einstein for integer spin, Fermi-Dirac otherwise.
    pub fn for_spin(spin: f64) -> Self {
        if is_integer_spin(spin) {
            Statistics::BoseEinstein
        } else {
            Statistics::FermiDirac
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Statistics::BoseEinstein => "Bose-Einstein",
            Statistics::FermiDirac => "Fermi-Dirac",
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
