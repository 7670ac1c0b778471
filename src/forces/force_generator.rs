use crate::bodies::Rigidbody2D;
use crate::core::{BodyHandle, BodyStorage};
use crate::error::PhysicsError;
use crate::Result;
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};

/// Something that contributes a force to a body every fixed step
pub trait ForceGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Returns the type name of the force generator
    fn generator_type(&self) -> &'static str;

    /// Adds this generator's contribution to `body`'s force accumulator
    fn update_force(&self, body: &mut Rigidbody2D, dt: f32);

    /// Returns a dynamic reference to any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Returns a dynamic mutable reference to any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A unique identifier for a force generator owned by a [`ForceRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneratorHandle(pub(crate) u32);

/// Owns force generators and records which bodies each one acts on
///
/// A body maps to a set of generators, so registering the same pair twice has
/// no further effect. Iteration order is by body handle, then generator handle.
#[derive(Debug, Default)]
pub struct ForceRegistry {
    generators: BTreeMap<GeneratorHandle, Box<dyn ForceGenerator>>,
    registrations: BTreeMap<BodyHandle, BTreeSet<GeneratorHandle>>,
    next_id: u32,
}

impl ForceRegistry {
    /// Creates a new empty force registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a generator and returns its handle
    pub fn add_generator(&mut self, generator: Box<dyn ForceGenerator>) -> GeneratorHandle {
        let handle = GeneratorHandle(self.next_id);
        self.next_id += 1;
        log::debug!("registered {} force generator as {:?}", generator.generator_type(), handle);
        self.generators.insert(handle, generator);
        handle
    }

    /// Removes a generator along with every pairing that uses it
    pub fn remove_generator(&mut self, handle: GeneratorHandle) -> Option<Box<dyn ForceGenerator>> {
        let generator = self.generators.remove(&handle)?;
        self.registrations.retain(|_, set| {
            set.remove(&handle);
            !set.is_empty()
        });
        Some(generator)
    }

    /// Returns a generator by handle
    pub fn get_generator(&self, handle: GeneratorHandle) -> Option<&dyn ForceGenerator> {
        self.generators.get(&handle).map(|g| g.as_ref())
    }

    /// Returns a mutable generator by handle
    pub fn get_generator_mut(&mut self, handle: GeneratorHandle) -> Option<&mut dyn ForceGenerator> {
        self.generators.get_mut(&handle).map(|g| g.as_mut())
    }

    /// Pairs `body` with `generator`
    ///
    /// Returns `Ok(false)` if the pair was already registered.
    pub fn add(&mut self, body: BodyHandle, generator: GeneratorHandle) -> Result<bool> {
        if !self.generators.contains_key(&generator) {
            return Err(PhysicsError::ResourceNotFound(format!(
                "Force generator with handle {:?} not found",
                generator
            )));
        }
        Ok(self.registrations.entry(body).or_default().insert(generator))
    }

    /// Unpairs `body` and `generator`, returning whether the pair existed
    pub fn remove(&mut self, body: BodyHandle, generator: GeneratorHandle) -> bool {
        let Some(set) = self.registrations.get_mut(&body) else {
            return false;
        };
        let removed = set.remove(&generator);
        if set.is_empty() {
            self.registrations.remove(&body);
        }
        removed
    }

    /// Drops every pairing that involves `body`
    pub fn remove_body(&mut self, body: BodyHandle) {
        self.registrations.remove(&body);
    }

    /// Returns whether `body` is paired with `generator`
    pub fn contains(&self, body: BodyHandle, generator: GeneratorHandle) -> bool {
        self.registrations
            .get(&body)
            .is_some_and(|set| set.contains(&generator))
    }

    /// Returns the number of (body, generator) pairings
    pub fn len(&self) -> usize {
        self.registrations.values().map(BTreeSet::len).sum()
    }

    /// Returns whether there are no pairings
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Drops every pairing; the generators stay registered
    pub fn clear(&mut self) {
        log::debug!("clearing {} force registrations", self.len());
        self.registrations.clear();
    }

    /// Lets every generator add its force to each body it is paired with
    ///
    /// Forces accumulate; clearing is left to integration. Pairings whose body
    /// is no longer in `bodies` are skipped.
    pub fn update_forces(&self, bodies: &mut BodyStorage<Rigidbody2D>, dt: f32) {
        for (&body_handle, generator_handles) in &self.registrations {
            let Ok(body) = bodies.get_body_mut(body_handle) else {
                log::trace!("skipping forces for missing body {:?}", body_handle);
                continue;
            };

            for handle in generator_handles {
                if let Some(generator) = self.generators.get(handle) {
                    generator.update_force(body, dt);
                }
            }
        }
    }

    /// Clears the force accumulator of every registered body
    pub fn zero_forces(&self, bodies: &mut BodyStorage<Rigidbody2D>) {
        for &body_handle in self.registrations.keys() {
            if let Ok(body) = bodies.get_body_mut(body_handle) {
                body.clear_accumulators();
            }
        }
    }
}
