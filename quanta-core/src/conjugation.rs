//! Particle/antiparticle relationship
//!
//! Three states: a distinct antiparticle exists, the particle is its own
//! antiparticle, or the relation is experimentally undetermined. The only
//! allowed transition is out of `Unknown`, once.

use crate::error::PhysicsError;
use serde::Serialize;
use std::fmt;

/// Prefix carried by the name of a derived antiparticle.
pub const ANTI_PREFIX: &str = "Anti-";

/// U+0305 COMBINING OVERLINE, the "bar" on antiparticle symbols.
pub const COMBINING_OVERLINE: char = '\u{0305}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ConjugationType {
    /// Particle and antiparticle differ (electron/positron).
    #[default]
    Distinct,
    /// Particle is its own antiparticle (photon, Z, Higgs).
    SelfConjugate,
    /// Undetermined (neutrino before a Dirac/Majorana choice).
    Unknown,
}

impl ConjugationType {
    /// `Some(true)` for distinct, `Some(false)` for self-conjugate,
    /// `None` while undetermined.
    pub fn has_antiparticle(&self) -> Option<bool> {
        match self {
            ConjugationType::Distinct => Some(true),
            ConjugationType::SelfConjugate => Some(false),
            ConjugationType::Unknown => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        *self != ConjugationType::Unknown
    }

    /// Compute the state after resolving to `target`.
    ///
    /// `particle` only feeds the error messages.
    pub fn resolve(&self, target: ConjugationType, particle: &str) -> Result<Self, PhysicsError> {
        if self.is_resolved() {
            return Err(PhysicsError::ConjugationAlreadyResolved {
                name: particle.to_string(),
                current: self.to_string(),
            });
        }
        if !target.is_resolved() {
            return Err(PhysicsError::Argument(format!(
                "conjugation of {} can only be resolved to DISTINCT or SELF",
                particle
            )));
        }
        Ok(target)
    }
}

impl fmt::Display for ConjugationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConjugationType::Distinct => "DISTINCT",
            ConjugationType::SelfConjugate => "SELF",
            ConjugationType::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Name of the conjugate, given whether the derived entity is the antiparticle.
pub fn conjugate_name(name: &str, derived_is_anti: bool) -> String {
    if derived_is_anti {
        format!("{}{}", ANTI_PREFIX, name)
    } else {
        name.strip_prefix(ANTI_PREFIX).unwrap_or(name).to_string()
    }
}

/// Append the combining overline, or remove it when it is the last char.
pub fn toggle_bar(symbol: &str) -> String {
    match symbol.strip_suffix(COMBINING_OVERLINE) {
        Some(stripped) => stripped.to_string(),
        None => {
            let mut barred = String::with_capacity(symbol.len() + COMBINING_OVERLINE.len_utf8());
            barred.push_str(symbol);
            barred.push(COMBINING_OVERLINE);
            barred
        }
    }
}
