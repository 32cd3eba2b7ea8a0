//! Read-only projection of a particle for display
//!
//! A [`ParticleReport`] captures everything the console layer shows about a
//! particle, including the outcome of deriving its antiparticle. Building
//! one never mutates the particle.

use crate::classify::Statistics;
use crate::conjugation::ConjugationType;
use crate::decay::DecayChannel;
use crate::particle::{Family, Particle};
use crate::quantum::QuantumValue;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleReport {
    pub name: String,
    pub symbol: String,
    pub family: Family,
    pub spin: f64,
    pub mass_mev: f64,
    pub charge: f64,
    pub conjugation: ConjugationType,
    pub is_antiparticle: bool,
    pub statistics: Statistics,
    pub stable: bool,
    pub has_antiparticle: Option<bool>,
    pub antiparticle: AntiparticleOutcome,
    pub forces: Vec<ForceReport>,
    pub quantum_numbers: Vec<QuantumNumberReport>,
    pub decay_channels: Vec<DecayChannel>,
}

/// Result of asking a particle for its antiparticle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AntiparticleOutcome {
    /// Distinct antiparticle.
    Derived {
        name: String,
        symbol: String,
        charge: f64,
    },
    /// Self-conjugate: the derived copy carries the particle's own
    /// name, symbol and charge.
    SelfConjugate {
        name: String,
        symbol: String,
        charge: f64,
    },
    /// Derivation failed; the error's message.
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceReport {
    pub name: String,
    pub description: String,
    pub interacts: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantumNumberReport {
    pub name: String,
    pub value: QuantumValue,
}

impl ParticleReport {
    pub fn from_particle(particle: &Particle) -> Self {
        let antiparticle = match particle.antiparticle() {
            Ok(anti) if particle.conjugation() == ConjugationType::SelfConjugate => {
                AntiparticleOutcome::SelfConjugate {
                    name: anti.name().to_string(),
                    symbol: anti.symbol().to_string(),
                    charge: anti.charge(),
                }
            }
            Ok(anti) => AntiparticleOutcome::Derived {
                name: anti.name().to_string(),
                symbol: anti.symbol().to_string(),
                charge: anti.charge(),
            },
            Err(e) => AntiparticleOutcome::Error {
                message: e.to_string(),
            },
        };

        let forces = particle
            .forces()
            .iter()
            .map(|force| ForceReport {
                name: force.name().to_string(),
                description: force.description().to_string(),
                interacts: force.interacts_with(particle),
            })
            .collect();

        let quantum_numbers = particle
            .quantum_numbers()
            .map(|qn| QuantumNumberReport {
                name: qn.name().to_string(),
                value: qn.value(),
            })
            .collect();

        Self {
            name: particle.name().to_string(),
            symbol: particle.symbol().to_string(),
            family: particle.family(),
            spin: particle.spin(),
            mass_mev: particle.mass_mev(),
            charge: particle.charge(),
            conjugation: particle.conjugation(),
            is_antiparticle: particle.is_antiparticle(),
            statistics: particle.statistics(),
            stable: particle.is_stable(),
            has_antiparticle: particle.has_antiparticle(),
            antiparticle,
            forces,
            quantum_numbers,
            decay_channels: particle.decay_channels().to_vec(),
        }
    }

    /// Plain-text rendering, one fact per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParticleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ({}) ===", self.name, self.symbol)?;
        writeln!(
            f,
            "Family: {} | Spin: {} | Charge: {} | Mass (MeV): {}",
            self.family, self.spin, self.charge, self.mass_mev
        )?;
        writeln!(
            f,
            "Statistics: {} | Stable: {}",
            self.statistics,
            if self.stable { "yes" } else { "no" }
        )?;
        let has = match self.has_antiparticle {
            Some(true) => "true",
            Some(false) => "false",
            None => "indeterminate",
        };
        writeln!(f, "has_antiparticle: {}", has)?;

        match &self.antiparticle {
            AntiparticleOutcome::Derived {
                name,
                symbol,
                charge,
            }
            | AntiparticleOutcome::SelfConjugate {
                name,
                symbol,
                charge,
            } => writeln!(f, "Antiparticle: {} ({}), charge={}", name, symbol, charge)?,
            AntiparticleOutcome::Error { message } => {
                writeln!(f, "Antiparticle: error -> {}", message)?
            }
        }

        writeln!(f, "Interactions:")?;
        for force in &self.forces {
            writeln!(
                f,
                " - {} (interacts? {})",
                force.name,
                if force.interacts { "yes" } else { "no" }
            )?;
        }

        writeln!(f, "Quantum numbers:")?;
        for qn in &self.quantum_numbers {
            writeln!(f, " - {} = {}", qn.name, qn.value)?;
        }

        if !self.decay_channels.is_empty() {
            writeln!(f, "Decay channels:")?;
            for channel in &self.decay_channels {
                writeln!(f, " -> {}", channel)?;
            }
        }

        Ok(())
    }
}
