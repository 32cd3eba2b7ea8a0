//! Force coupling strategies
//!
//! A force answers a single question: does this particle couple to me? The
//! four concrete forces hold no state, so each exists once as a `static` and
//! particles keep `&'static` references to it.

use crate::particle::{Family, Particle};
use std::fmt;

/// Shared handle to a force strategy.
pub type ForceRef = &'static dyn Force;

/// A fundamental interaction
pub trait Force: fmt::Debug + Send + Sync {
    /// Lowercase identifier, e.g. `"electromagnetic"`.
    fn name(&self) -> &'static str;

    /// Whether `particle` couples to this force. Must be pure.
    fn interacts_with(&self, particle: &Particle) -> bool;

    fn description(&self) -> &'static str;
}

/// Symbols of the weak gauge bosons, both typographic and ASCII forms.
pub const WEAK_BOSON_SYMBOLS: [&str; 6] = ["W⁺", "W⁻", "Z⁰", "W+", "W-", "Z"];

/// Couples to electric charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Electromagnetic;

/// Couples universally to mass/energy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gravity;

/// Couples to color charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strong;

/// Couples to fermions and to the weak gauge bosons themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Weak;

pub static ELECTROMAGNETIC: Electromagnetic = Electromagnetic;
pub static GRAVITY: Gravity = Gravity;
pub static STRONG: Strong = Strong;
pub static WEAK: Weak = Weak;

impl Force for Electromagnetic {
    fn name(&self) -> &'static str {
        "electromagnetic"
    }

    fn interacts_with(&self, particle: &Particle) -> bool {
        particle.charge().abs() > 0.0
    }

    fn description(&self) -> &'static str {
        "Electromagnetic interaction: couples to electric charge."
    }
}

impl Force for Gravity {
    fn name(&self) -> &'static str {
        "gravity"
    }

    fn interacts_with(&self, _particle: &Particle) -> bool {
        true
    }

    fn description(&self) -> &'static str {
        "Gravitation: universal interaction coupling to mass/energy."
    }
}

impl Force for Strong {
    fn name(&self) -> &'static str {
        "strong"
    }

    fn interacts_with(&self, particle: &Particle) -> bool {
        // No color charge at all means no strong coupling (leptons).
        particle
            .color_charge()
            .map(|color| !color.is_colorless())
            .unwrap_or(false)
    }

    fn description(&self) -> &'static str {
        "Strong interaction: couples to color charge (quarks and gluons)."
    }
}

impl Force for Weak {
    fn name(&self) -> &'static str {
        "weak"
    }

    fn interacts_with(&self, particle: &Particle) -> bool {
        particle.family() == Family::Fermion || WEAK_BOSON_SYMBOLS.contains(&particle.symbol())
    }

    fn description(&self) -> &'static str {
        "Weak interaction: drives beta decay and flavor change."
    }
}

/// Every built-in force, in a fixed order.
pub fn all() -> [ForceRef; 4] {
    [&ELECTROMAGNETIC, &WEAK, &STRONG, &GRAVITY]
}

/// Look up a built-in force by its name.
pub fn by_name(name: &str) -> Option<ForceRef> {
    all().into_iter().find(|force| force.name() == name)
}
