//! Typed, self-validating quantum numbers
//!
//! Each concrete kind carries a fixed name and a value from its own domain.
//! Values are checked exactly once, when the number is built, and never
//! change afterwards.

use crate::error::PhysicsError;
use serde::Serialize;
use std::fmt;

/// Dynamic view of a quantum number's value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuantumValue {
    Integer(i64),
    Token(String),
}

impl fmt::Display for QuantumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantumValue::Integer(v) => write!(f, "{}", v),
            QuantumValue::Token(t) => write!(f, "'{}'", t),
        }
    }
}

/// Contract shared by every quantum number kind.
pub trait QuantumNumber: fmt::Debug + Send + Sync {
    /// Fixed name of the kind, used as the key on a particle.
    fn name(&self) -> &'static str;

    fn value(&self) -> QuantumValue;

    /// Whether the value lies in the kind's domain.
    fn is_valid(&self) -> bool;

    /// Declared capability: only color charges answer `Some`.
    fn as_color_charge(&self) -> Option<&ColorCharge> {
        None
    }
}

/// Run `is_valid` once and hand back the number, or the failure naming it.
fn validated<Q: QuantumNumber>(qn: Q) -> Result<Q, PhysicsError> {
    if qn.is_valid() {
        Ok(qn)
    } else {
        Err(PhysicsError::InvalidQuantumNumber {
            name: qn.name().to_string(),
            value: qn.value().to_string(),
        })
    }
}

/// Check a real-valued input for integrality before it becomes an additive number.
fn integral(name: &str, value: f64) -> Result<i64, PhysicsError> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(PhysicsError::InvalidQuantumNumber {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// Baryon number B (baryons +1, antibaryons -1, mesons 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaryonNumber {
    value: i64,
}

impl BaryonNumber {
    pub const NAME: &'static str = "baryon";

    pub fn new(value: i64) -> Result<Self, PhysicsError> {
        validated(Self { value })
    }

    /// Build from a real value; fails unless it is a finite integer.
    pub fn from_real(value: f64) -> Result<Self, PhysicsError> {
        Self::new(integral(Self::NAME, value)?)
    }

    pub fn get(&self) -> i64 {
        self.value
    }
}

impl QuantumNumber for BaryonNumber {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value(&self) -> QuantumValue {
        QuantumValue::Integer(self.value)
    }

    fn is_valid(&self) -> bool {
        // i64 already guarantees integrality
        true
    }
}

/// Lepton number L (leptons +1, antileptons -1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeptonNumber {
    value: i64,
}

impl LeptonNumber {
    pub const NAME: &'static str = "lepton";

    pub fn new(value: i64) -> Result<Self, PhysicsError> {
        validated(Self { value })
    }

    pub fn from_real(value: f64) -> Result<Self, PhysicsError> {
        Self::new(integral(Self::NAME, value)?)
    }

    pub fn get(&self) -> i64 {
        self.value
    }
}

impl QuantumNumber for LeptonNumber {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value(&self) -> QuantumValue {
        QuantumValue::Integer(self.value)
    }

    fn is_valid(&self) -> bool {
        true
    }
}

/// Tokens accepted by [`ColorCharge`].
pub const COLOR_TOKENS: [&str; 7] = [
    "red",
    "green",
    "blue",
    "anti-red",
    "anti-green",
    "anti-blue",
    "colorless",
];

/// Token marking the absence of net strong coupling.
pub const COLORLESS: &str = "colorless";

/// Strong-force color label for quarks and gluons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCharge {
    value: String,
}

impl ColorCharge {
    pub const NAME: &'static str = "color";

    pub fn new(value: impl Into<String>) -> Result<Self, PhysicsError> {
        validated(Self {
            value: value.into(),
        })
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn is_colorless(&self) -> bool {
        self.value == COLORLESS
    }
}

impl QuantumNumber for ColorCharge {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn value(&self) -> QuantumValue {
        QuantumValue::Token(self.value.clone())
    }

    fn is_valid(&self) -> bool {
        COLOR_TOKENS.contains(&self.value.as_str())
    }

    fn as_color_charge(&self) -> Option<&ColorCharge> {
        Some(self)
    }
}
