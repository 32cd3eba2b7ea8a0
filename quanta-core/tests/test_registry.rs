//! Particle registry

use quanta_core::{
    catalog, Family, Particle, ParticleDecl, ParticleRegistry, PhysicsError, RegistryError,
};

#[test]
fn test_unknown_identifier() {
    let registry = ParticleRegistry::new();
    assert!(registry.is_empty());
    match registry.create("tachyon") {
        Err(RegistryError::UnknownIdentifier(id)) => assert_eq!(id, "tachyon"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_register_and_create() {
    let mut registry = ParticleRegistry::new();
    registry.register("muon", || {
        Particle::new(ParticleDecl::new("Muon", "μ⁻", Family::Fermion, 0.5, 105.66, -1.0))
    });
    assert!(registry.contains("muon"));
    let muon = registry.create("muon").unwrap();
    assert_eq!(muon.name(), "Muon");
}

#[test]
fn test_each_create_builds_a_fresh_particle() {
    let registry = ParticleRegistry::with_presets();
    let mut first = registry.create(catalog::ELECTRON_NEUTRINO).unwrap();
    first.set_as_dirac().unwrap();
    let second = registry.create(catalog::ELECTRON_NEUTRINO).unwrap();
    assert_eq!(second.has_antiparticle(), None);
}

#[test]
fn test_reregister_replaces_in_place() {
    let mut registry = ParticleRegistry::new();
    registry.register("a", catalog::photon);
    registry.register("b", catalog::electron);
    registry.register("a", catalog::z_boson);
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(registry.create("a").unwrap().symbol(), "Z⁰");
}

#[test]
fn test_failing_builder_is_reported() {
    let mut registry = ParticleRegistry::new();
    registry.register("broken", || {
        Particle::new(ParticleDecl::new("Broken", "x", Family::Boson, 0.5, 1.0, 0.0))
    });
    match registry.create("broken") {
        Err(RegistryError::Build { id, source }) => {
            assert_eq!(id, "broken");
            assert!(matches!(source, PhysicsError::InvalidSpin(_)));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_presets_registration_order() {
    let registry = ParticleRegistry::with_presets();
    let ids: Vec<_> = registry.ids().collect();
    assert_eq!(ids, vec!["electron", "photon", "Z", "W+", "higgs", "nu_e"]);
    for id in ids {
        assert!(registry.create(id).is_ok(), "preset {} failed", id);
    }
}
