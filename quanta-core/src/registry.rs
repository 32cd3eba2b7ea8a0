//! Name-keyed particle factory
//!
//! The registry is an ordinary value: build one, register builders on it and
//! pass it by reference to whoever needs to create particles.

use crate::catalog;
use crate::error::{PhysicsError, RegistryError};
use crate::particle::Particle;
use std::fmt;

/// Zero-argument particle builder.
pub type Builder = Box<dyn Fn() -> Result<Particle, PhysicsError> + Send + Sync>;

#[derive(Default)]
pub struct ParticleRegistry {
    // Registration order is kept for listing.
    entries: Vec<(String, Builder)>,
}

impl ParticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every preset of the catalog.
    pub fn with_presets() -> Self {
        let mut registry = Self::new();
        catalog::register_presets(&mut registry);
        registry
    }

    /// Store `builder` under `id`. Re-registering an id replaces its builder
    /// in place.
    pub fn register<F>(&mut self, id: impl Into<String>, builder: F)
    where
        F: Fn() -> Result<Particle, PhysicsError> + Send + Sync + 'static,
    {
        let id = id.into();
        tracing::debug!(%id, "registering particle builder");
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = Box::new(builder),
            None => self.entries.push((id, Box::new(builder))),
        }
    }

    /// Invoke the builder stored under `id`.
    pub fn create(&self, id: &str) -> Result<Particle, RegistryError> {
        let (_, builder) = self
            .entries
            .iter()
            .find(|(existing, _)| existing == id)
            .ok_or_else(|| RegistryError::UnknownIdentifier(id.to_string()))?;
        tracing::debug!(%id, "creating particle");
        builder().map_err(|source| RegistryError::Build {
            id: id.to_string(),
            source,
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == id)
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ParticleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParticleRegistry")
            .field("ids", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}
