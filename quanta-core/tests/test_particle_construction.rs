//! Construction-time validation of particles

use quanta_core::{ConjugationType, Family, Particle, ParticleDecl, PhysicsError};

fn decl(family: Family, spin: f64) -> ParticleDecl {
    ParticleDecl::new("Test", "t", family, spin, 1.0, 0.0)
}

#[test]
fn test_empty_name_rejected() {
    let mut d = decl(Family::Fermion, 0.5);
    d.name = String::new();
    assert!(matches!(Particle::new(d), Err(PhysicsError::Argument(_))));
}

#[test]
fn test_empty_symbol_rejected() {
    let mut d = decl(Family::Fermion, 0.5);
    d.symbol = String::new();
    assert!(matches!(Particle::new(d), Err(PhysicsError::Argument(_))));
}

#[test]
fn test_negative_or_non_finite_spin_rejected() {
    for spin in [-0.5, f64::NAN, f64::INFINITY] {
        let result = Particle::new(decl(Family::Fermion, spin));
        assert!(
            matches!(result, Err(PhysicsError::InvalidSpin(_))),
            "spin {} should be rejected",
            spin
        );
    }
}

#[test]
fn test_invalid_mass_rejected() {
    for mass in [-1.0, f64::NAN, f64::NEG_INFINITY] {
        let mut d = decl(Family::Boson, 1.0);
        d.mass_mev = mass;
        assert!(matches!(Particle::new(d), Err(PhysicsError::Argument(_))));
    }
}

#[test]
fn test_non_finite_charge_rejected() {
    let mut d = decl(Family::Boson, 1.0);
    d.charge = f64::NAN;
    assert!(matches!(Particle::new(d), Err(PhysicsError::InvalidCharge(_))));
}

#[test]
fn test_fermion_with_integer_spin_rejected() {
    let result = Particle::new(decl(Family::Fermion, 1.0));
    assert!(matches!(result, Err(PhysicsError::InvalidSpin(_))));
}

#[test]
fn test_fermion_with_huge_integer_spin_rejected() {
    for spin in [1e19, 1e300] {
        let result = Particle::new(decl(Family::Fermion, spin));
        assert!(
            matches!(result, Err(PhysicsError::InvalidSpin(_))),
            "fermion with spin {} should be rejected",
            spin
        );
        assert!(Particle::new(decl(Family::Boson, spin)).is_ok());
    }
}

#[test]
fn test_boson_with_half_integer_spin_rejected() {
    let result = Particle::new(decl(Family::Boson, 0.5));
    assert!(matches!(result, Err(PhysicsError::InvalidSpin(_))));
}

#[test]
fn test_validation_order_name_before_spin() {
    // Both name and spin are wrong; the name check comes first.
    let mut d = decl(Family::Fermion, -1.0);
    d.name = String::new();
    assert!(matches!(Particle::new(d), Err(PhysicsError::Argument(_))));
}

#[test]
fn test_valid_construction_defaults() {
    let p = Particle::new(decl(Family::Fermion, 1.5)).unwrap();
    assert_eq!(p.name(), "Test");
    assert_eq!(p.symbol(), "t");
    assert_eq!(p.family(), Family::Fermion);
    assert_eq!(p.spin(), 1.5);
    assert_eq!(p.conjugation(), ConjugationType::Distinct);
    assert!(!p.is_antiparticle());
    assert!(p.forces().is_empty());
    assert_eq!(p.quantum_numbers().count(), 0);
    assert!(p.is_stable());
}

#[test]
fn test_spin_within_tolerance_accepted() {
    assert!(Particle::new(decl(Family::Boson, 1.0 + 1e-12)).is_ok());
    assert!(Particle::new(decl(Family::Fermion, 0.5 - 1e-12)).is_ok());
}

#[test]
fn test_conjugation_resolution_once() {
    let mut p = Particle::new(decl(Family::Fermion, 0.5).conjugation(ConjugationType::Unknown))
        .unwrap();
    p.set_as_majorana().unwrap();
    assert_eq!(p.conjugation(), ConjugationType::SelfConjugate);
    assert!(matches!(
        p.set_as_dirac(),
        Err(PhysicsError::ConjugationAlreadyResolved { .. })
    ));
    assert_eq!(p.conjugation(), ConjugationType::SelfConjugate);
}

#[test]
fn test_resolved_particle_cannot_transition() {
    let mut p = Particle::new(decl(Family::Boson, 1.0)).unwrap();
    assert!(p.resolve_conjugation(ConjugationType::SelfConjugate).is_err());
    assert_eq!(p.conjugation(), ConjugationType::Distinct);
}
