//! Typed quantum numbers

use quanta_core::quantum::COLOR_TOKENS;
use quanta_core::tests::test_helpers::bare_particle;
use quanta_core::{
    BaryonNumber, ColorCharge, Family, LeptonNumber, PhysicsError, QuantumNumber, QuantumValue,
};

#[test]
fn test_color_charge_rejects_unknown_token() {
    let err = ColorCharge::new("purple").unwrap_err();
    match err {
        PhysicsError::InvalidQuantumNumber { name, value } => {
            assert_eq!(name, "color");
            assert!(value.contains("purple"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_color_charge_accepts_all_tokens() {
    for token in COLOR_TOKENS {
        let color = ColorCharge::new(token).unwrap();
        assert_eq!(color.get(), token);
    }
    let red = ColorCharge::new("red").unwrap();
    assert_eq!(red.value(), QuantumValue::Token("red".to_string()));
    assert_eq!(red.name(), "color");
    assert!(red.as_color_charge().is_some());
}

#[test]
fn test_integer_numbers() {
    let b = BaryonNumber::new(-1).unwrap();
    assert_eq!(b.name(), "baryon");
    assert_eq!(b.value(), QuantumValue::Integer(-1));
    assert!(b.as_color_charge().is_none());

    let l = LeptonNumber::new(1).unwrap();
    assert_eq!(l.name(), "lepton");
    assert_eq!(l.get(), 1);
}

#[test]
fn test_integer_numbers_from_real() {
    assert_eq!(BaryonNumber::from_real(1.0).unwrap().get(), 1);
    assert!(matches!(
        BaryonNumber::from_real(1.5),
        Err(PhysicsError::InvalidQuantumNumber { .. })
    ));
    assert!(LeptonNumber::from_real(f64::NAN).is_err());
}

#[test]
fn test_add_quantum_number_last_write_wins() {
    let mut p = bare_particle("l", Family::Fermion, 0.5, -1.0);
    p.add_quantum_number(LeptonNumber::new(0).unwrap());
    p.add_quantum_number(LeptonNumber::new(1).unwrap());
    assert_eq!(p.quantum_numbers().count(), 1);
    let lepton = p.quantum_number("lepton").unwrap();
    assert_eq!(lepton.value(), QuantumValue::Integer(1));
    assert!(p.quantum_number("baryon").is_none());
}

#[test]
fn test_color_charge_capability() {
    let mut quark = bare_particle("q", Family::Fermion, 0.5, 2.0 / 3.0);
    assert!(quark.color_charge().is_none());
    quark.add_quantum_number(BaryonNumber::new(0).unwrap());
    quark.add_quantum_number(ColorCharge::new("blue").unwrap());
    assert_eq!(quark.color_charge().unwrap().get(), "blue");
}
