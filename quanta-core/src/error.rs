//! Error types for particle construction, quantum numbers and the registry.

use thiserror::Error;

/// Errors raised by the particle domain model.
///
/// Every construction-time check fails fast with one of these variants; no
/// partially built value is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Empty name/symbol, invalid mass, or an otherwise malformed argument.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Non-finite or negative spin, or a family/spin parity mismatch.
    #[error("invalid spin: {0}")]
    InvalidSpin(String),

    #[error("invalid charge: {0}")]
    InvalidCharge(String),

    /// A quantum number whose value lies outside its kind's domain.
    #[error("invalid quantum number {name} ({value})")]
    InvalidQuantumNumber { name: String, value: String },

    /// Antiparticle requested while the conjugation is still undetermined.
    #[error("antiparticle of {name} is indeterminate")]
    AntiparticleIndeterminate { name: String },

    /// A conjugation transition attempted on an already resolved particle.
    #[error("conjugation of {name} is already resolved as {current}")]
    ConjugationAlreadyResolved { name: String, current: String },
}

/// Errors raised by [`crate::registry::ParticleRegistry`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("unknown particle identifier '{0}'")]
    UnknownIdentifier(String),

    /// The builder registered under `id` failed its own validation.
    #[error("failed to build particle '{id}': {source}")]
    Build {
        id: String,
        #[source]
        source: PhysicsError,
    },
}
