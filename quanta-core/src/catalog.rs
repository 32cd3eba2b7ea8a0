//! Preset particles
//!
//! Plain configuration data built from the core primitives. Values are
//! illustrative, not a reference for precision physics.

use crate::conjugation::ConjugationType;
use crate::decay::DecayChannel;
use crate::error::PhysicsError;
use crate::force::{ELECTROMAGNETIC, GRAVITY, WEAK};
use crate::particle::{Family, Particle, ParticleDecl};
use crate::quantum::LeptonNumber;
use crate::registry::ParticleRegistry;

pub const ELECTRON: &str = "electron";
pub const PHOTON: &str = "photon";
pub const Z_BOSON: &str = "Z";
pub const W_PLUS: &str = "W+";
pub const HIGGS: &str = "higgs";
pub const ELECTRON_NEUTRINO: &str = "nu_e";

/// Register every preset under its catalog id.
pub fn register_presets(registry: &mut ParticleRegistry) {
    registry.register(ELECTRON, electron);
    registry.register(PHOTON, photon);
    registry.register(Z_BOSON, z_boson);
    registry.register(W_PLUS, w_plus);
    registry.register(HIGGS, higgs);
    registry.register(ELECTRON_NEUTRINO, electron_neutrino);
}

pub fn electron() -> Result<Particle, PhysicsError> {
    let mut p = Particle::new(ParticleDecl::new(
        "Electron",
        "e⁻",
        Family::Fermion,
        0.5,
        0.51099895,
        -1.0,
    ))?;
    p.add_quantum_number(LeptonNumber::new(1)?);
    p.add_force(&ELECTROMAGNETIC);
    p.add_force(&WEAK);
    p.add_force(&GRAVITY);
    Ok(p)
}

pub fn photon() -> Result<Particle, PhysicsError> {
    let mut p = Particle::new(
        ParticleDecl::new("Photon", "γ", Family::Boson, 1.0, 0.0, 0.0)
            .conjugation(ConjugationType::SelfConjugate),
    )?;
    // Listed for display; a neutral photon does not couple to it.
    p.add_force(&ELECTROMAGNETIC);
    p.add_force(&GRAVITY);
    Ok(p)
}

pub fn z_boson() -> Result<Particle, PhysicsError> {
    let mut p = Particle::new(
        ParticleDecl::new("Boson Z", "Z⁰", Family::Boson, 1.0, 91187.6, 0.0)
            .conjugation(ConjugationType::SelfConjugate),
    )?;
    p.add_force(&WEAK);
    p.add_force(&GRAVITY);
    Ok(p)
}

pub fn w_plus() -> Result<Particle, PhysicsError> {
    let mut p = Particle::new(ParticleDecl::new(
        "Boson W⁺",
        "W⁺",
        Family::Boson,
        1.0,
        80379.0,
        1.0,
    ))?;
    p.add_force(&WEAK);
    p.add_force(&GRAVITY);
    p.add_force(&ELECTROMAGNETIC);
    Ok(p)
}

pub fn higgs() -> Result<Particle, PhysicsError> {
    let mut p = Particle::new(
        ParticleDecl::new("Higgs", "H⁰", Family::Boson, 0.0, 125090.0, 0.0)
            .conjugation(ConjugationType::SelfConjugate),
    )?;
    p.add_force(&WEAK);
    p.add_force(&ELECTROMAGNETIC);
    p.add_force(&GRAVITY);

    p.add_decay_channel(DecayChannel::new(["b", "b̄"], Some(0.58)));
    p.add_decay_channel(DecayChannel::new(["W+", "W-"], Some(0.21)));
    p.add_decay_channel(DecayChannel::new(["Z", "Z"], Some(0.026)));
    p.add_decay_channel(DecayChannel::new(["γ", "γ"], Some(0.002)));
    Ok(p)
}

/// Electron neutrino, with Dirac/Majorana nature left undetermined.
pub fn electron_neutrino() -> Result<Particle, PhysicsError> {
    let mut p = Particle::new(
        ParticleDecl::new("Neutrino", "νₑ", Family::Fermion, 0.5, 0.01, 0.0)
            .conjugation(ConjugationType::Unknown),
    )?;
    p.add_quantum_number(LeptonNumber::new(1)?);
    p.add_force(&WEAK);
    p.add_force(&GRAVITY);
    Ok(p)
}
