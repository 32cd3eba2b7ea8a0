pub mod catalog;
pub mod classify;
pub mod conjugation;
pub mod decay;
pub mod error;
pub mod force;
pub mod particle;
pub mod quantum;
pub mod registry;
pub mod report;

pub use classify::Statistics;
pub use conjugation::ConjugationType;
pub use decay::DecayChannel;
pub use error::{PhysicsError, RegistryError};
pub use force::{Force, ForceRef};
pub use particle::{Family, Particle, ParticleDecl};
pub use quantum::{BaryonNumber, ColorCharge, LeptonNumber, QuantumNumber, QuantumValue};
pub use registry::ParticleRegistry;
pub use report::{AntiparticleOutcome, ParticleReport};
