//! The particle entity
//!
//! A [`Particle`] is built atomically from a [`ParticleDecl`]: every scalar is
//! checked and the spin must match the declared family, or nothing is
//! returned. Quantum numbers and forces are attached afterwards; antiparticles
//! are derived as new values and never touch their source.

use crate::classify::{is_half_integer_spin, is_integer_spin, Statistics};
use crate::conjugation::{conjugate_name, toggle_bar, ConjugationType};
use crate::decay::DecayChannel;
use crate::error::PhysicsError;
use crate::force::ForceRef;
use crate::quantum::{ColorCharge, QuantumNumber};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Coarse classification by spin statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Fermion,
    Boson,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Fermion => f.write_str("fermion"),
            Family::Boson => f.write_str("boson"),
        }
    }
}

/// Construction inputs for a particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleDecl {
    pub name: String,
    pub symbol: String,
    pub family: Family,
    pub spin: f64,       // units of ħ
    pub mass_mev: f64,   // rest mass, MeV/c²
    pub charge: f64,     // units of e
    pub conjugation: ConjugationType,
}

impl ParticleDecl {
    /// Declaration with the default (distinct) conjugation.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        family: Family,
        spin: f64,
        mass_mev: f64,
        charge: f64,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            family,
            spin,
            mass_mev,
            charge,
            conjugation: ConjugationType::default(),
        }
    }

    pub fn conjugation(mut self, conjugation: ConjugationType) -> Self {
        self.conjugation = conjugation;
        self
    }
}

/// A subatomic particle
#[derive(Debug, Clone)]
pub struct Particle {
    name: String,
    symbol: String,
    family: Family,
    spin: f64,
    mass_mev: f64,
    charge: f64,
    quantum_numbers: BTreeMap<&'static str, Arc<dyn QuantumNumber>>,
    forces: Vec<ForceRef>,
    decay_channels: Vec<DecayChannel>,
    conjugation: ConjugationType,
    is_antiparticle: bool,
}

impl Particle {
    /// Validate `decl` and build the particle.
    ///
    /// Checks run in order: name, symbol, spin, mass, charge, then the
    /// family/spin parity rule.
    pub fn new(decl: ParticleDecl) -> Result<Self, PhysicsError> {
        let ParticleDecl {
            name,
            symbol,
            family,
            spin,
            mass_mev,
            charge,
            conjugation,
        } = decl;

        if name.is_empty() {
            return Err(PhysicsError::Argument("name must not be empty".to_string()));
        }
        if symbol.is_empty() {
            return Err(PhysicsError::Argument("symbol must not be empty".to_string()));
        }
        if !spin.is_finite() || spin < 0.0 {
            return Err(PhysicsError::InvalidSpin(format!(
                "spin must be finite and >= 0 (got {:?})",
                spin
            )));
        }
        if !mass_mev.is_finite() || mass_mev < 0.0 {
            return Err(PhysicsError::Argument(format!(
                "mass must be finite and >= 0 (got {:?})",
                mass_mev
            )));
        }
        if !charge.is_finite() {
            return Err(PhysicsError::InvalidCharge(format!(
                "charge must be finite (got {:?})",
                charge
            )));
        }
        validate_family(family, spin)?;

        tracing::debug!(
            %name,
            %symbol,
            %family,
            spin,
            mass_mev,
            charge,
            %conjugation,
            "built particle"
        );

        Ok(Self {
            name,
            symbol,
            family,
            spin,
            mass_mev,
            charge,
            quantum_numbers: BTreeMap::new(),
            forces: Vec::new(),
            decay_channels: Vec::new(),
            conjugation,
            is_antiparticle: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    pub fn mass_mev(&self) -> f64 {
        self.mass_mev
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn conjugation(&self) -> ConjugationType {
        self.conjugation
    }

    /// True only on values produced by [`Particle::antiparticle`].
    pub fn is_antiparticle(&self) -> bool {
        self.is_antiparticle
    }

    // ------------------------------------------------------------------
    // Quantum numbers
    // ------------------------------------------------------------------

    /// Insert or overwrite by the number's name.
    pub fn add_quantum_number<Q: QuantumNumber + 'static>(&mut self, qn: Q) {
        self.insert_quantum_number(Arc::new(qn));
    }

    /// Like [`Particle::add_quantum_number`] for an already shared number.
    pub fn insert_quantum_number(&mut self, qn: Arc<dyn QuantumNumber>) {
        self.quantum_numbers.insert(qn.name(), qn);
    }

    pub fn quantum_number(&self, name: &str) -> Option<&Arc<dyn QuantumNumber>> {
        self.quantum_numbers.get(name)
    }

    /// All quantum numbers, ordered by name.
    pub fn quantum_numbers(&self) -> impl Iterator<Item = &Arc<dyn QuantumNumber>> {
        self.quantum_numbers.values()
    }

    /// The attached color charge, if any.
    pub fn color_charge(&self) -> Option<&ColorCharge> {
        self.quantum_numbers
            .values()
            .find_map(|qn| qn.as_color_charge())
    }

    // ------------------------------------------------------------------
    // Forces
    // ------------------------------------------------------------------

    /// Append `force` unless one with the same name is already attached.
    pub fn add_force(&mut self, force: ForceRef) {
        if self.has_force(force.name()) {
            tracing::trace!(particle = %self.name, force = force.name(), "force already attached");
            return;
        }
        self.forces.push(force);
    }

    pub fn has_force(&self, force_name: &str) -> bool {
        self.forces.iter().any(|f| f.name() == force_name)
    }

    /// Attached forces in insertion order.
    pub fn forces(&self) -> &[ForceRef] {
        &self.forces
    }

    /// Delegate to the attached force named `force_name`.
    ///
    /// A force that was never attached answers `false`, exactly like an
    /// attached force that does not couple.
    pub fn interacts_with(&self, force_name: &str) -> bool {
        self.forces
            .iter()
            .find(|f| f.name() == force_name)
            .map(|f| f.interacts_with(self))
            .unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------

    pub fn is_boson(&self) -> bool {
        is_integer_spin(self.spin)
    }

    pub fn is_fermion(&self) -> bool {
        is_half_integer_spin(self.spin)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::for_spin(self.spin)
    }

    // ------------------------------------------------------------------
    // Decays
    // ------------------------------------------------------------------

    pub fn add_decay_channel(&mut self, channel: DecayChannel) {
        self.decay_channels.push(channel);
    }

    pub fn decay_channels(&self) -> &[DecayChannel] {
        &self.decay_channels
    }

    pub fn is_stable(&self) -> bool {
        self.decay_channels.is_empty()
    }

    // ------------------------------------------------------------------
    // Conjugation
    // ------------------------------------------------------------------

    pub fn has_antiparticle(&self) -> Option<bool> {
        self.conjugation.has_antiparticle()
    }

    /// Resolve an undetermined conjugation. Allowed once, only from `Unknown`.
    pub fn resolve_conjugation(&mut self, target: ConjugationType) -> Result<(), PhysicsError> {
        let resolved = self.conjugation.resolve(target, &self.name)?;
        tracing::debug!(particle = %self.name, conjugation = %resolved, "resolved conjugation");
        self.conjugation = resolved;
        Ok(())
    }

    /// Dirac hypothesis: particle and antiparticle differ.
    pub fn set_as_dirac(&mut self) -> Result<&mut Self, PhysicsError> {
        self.resolve_conjugation(ConjugationType::Distinct)?;
        Ok(self)
    }

    /// Majorana hypothesis: the particle is its own antiparticle.
    pub fn set_as_majorana(&mut self) -> Result<&mut Self, PhysicsError> {
        self.resolve_conjugation(ConjugationType::SelfConjugate)?;
        Ok(self)
    }

    /// Derive the antiparticle as a new value.
    ///
    /// The copy shares quantum numbers with `self` and flips the
    /// antiparticle flag. For a distinct conjugation the charge is negated,
    /// the name gains or loses the `Anti-` prefix and the symbol toggles its
    /// bar. A self-conjugate particle yields an otherwise identical copy.
    pub fn antiparticle(&self) -> Result<Particle, PhysicsError> {
        if self.conjugation == ConjugationType::Unknown {
            return Err(PhysicsError::AntiparticleIndeterminate {
                name: self.name.clone(),
            });
        }

        let mut anti = self.clone();
        anti.is_antiparticle = !self.is_antiparticle;

        if self.conjugation == ConjugationType::Distinct {
            anti.charge = -self.charge;
            anti.name = conjugate_name(&self.name, anti.is_antiparticle);
            anti.symbol = toggle_bar(&self.symbol);
        }

        tracing::debug!(particle = %self.name, antiparticle = %anti.name, "derived antiparticle");
        Ok(anti)
    }
}

/// Fermions need half-integer spin, bosons integer spin.
fn validate_family(family: Family, spin: f64) -> Result<(), PhysicsError> {
    match family {
        Family::Fermion if !is_half_integer_spin(spin) => Err(PhysicsError::InvalidSpin(format!(
            "a fermion must have half-integer spin (got {})",
            spin
        ))),
        Family::Boson if !is_integer_spin(spin) => Err(PhysicsError::InvalidSpin(format!(
            "a boson must have integer spin (got {})",
            spin
        ))),
        _ => Ok(()),
    }
}
