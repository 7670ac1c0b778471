use crate::bodies::Rigidbody2D;
use crate::core::{BodyHandle, BodyStorage, SimulationConfig, Storage};
use crate::forces::{ForceGenerator, ForceRegistry, GeneratorHandle, Gravity2D};
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

/// Owns the bodies and force registry and advances them in fixed steps
///
/// Every body added through [`add_rigidbody`](Self::add_rigidbody) is paired with
/// one shared gravity generator.
#[derive(Debug)]
pub struct PhysicsSystem2D {
    /// All rigid bodies in the system
    bodies: BodyStorage<Rigidbody2D>,

    /// Generators and their body pairings
    force_registry: ForceRegistry,

    /// The gravity generator shared by every body
    gravity: GeneratorHandle,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Frame time not yet consumed by `advance`
    accumulator: f32,

    /// The total elapsed simulation time
    time: f32,
}

impl PhysicsSystem2D {
    /// Creates a system with the given fixed step and gravity
    pub fn new(fixed_time_step: f32, gravity: Vector2) -> Result<Self> {
        Self::with_config(SimulationConfig {
            fixed_time_step,
            gravity,
            ..SimulationConfig::default()
        })
    }

    /// Creates a system from a full configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut force_registry = ForceRegistry::new();
        let gravity = force_registry.add_generator(Box::new(Gravity2D::new(config.gravity)));

        Ok(Self {
            bodies: BodyStorage::new(),
            force_registry,
            gravity,
            config,
            accumulator: 0.0,
            time: 0.0,
        })
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the fixed step duration
    pub fn get_fixed_time_step(&self) -> f32 {
        self.config.fixed_time_step
    }

    /// Returns the total simulated time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Gets the current gravity
    pub fn get_gravity(&self) -> Vector2 {
        self.config.gravity
    }

    /// Changes the gravity applied to every body
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.config.gravity = gravity;
        if let Some(generator) = self
            .force_registry
            .get_generator_mut(self.gravity)
            .and_then(|g| g.as_any_mut().downcast_mut::<Gravity2D>())
        {
            generator.set_gravity(gravity);
        }
    }

    /// Adds a body, pairs it with the shared gravity generator and returns its handle
    pub fn add_rigidbody(&mut self, body: Rigidbody2D) -> BodyHandle {
        let handle = self.bodies.add(body);
        let registered = self.force_registry.add(handle, self.gravity);
        debug_assert!(registered.is_ok(), "shared gravity generator is missing");
        log::debug!("added rigidbody {:?} ({} bodies)", handle, self.bodies.len());
        handle
    }

    /// Removes a body and all of its force pairings
    pub fn remove_rigidbody(&mut self, handle: BodyHandle) -> Result<Rigidbody2D> {
        let body = self.bodies.remove(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })?;
        self.force_registry.remove_body(handle);
        log::debug!("removed rigidbody {:?}", handle);
        Ok(body)
    }

    /// Gets a reference to a rigid body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Rigidbody2D> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a rigid body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Rigidbody2D> {
        self.bodies.get_body_mut(handle)
    }

    /// Returns the body storage
    pub fn bodies(&self) -> &BodyStorage<Rigidbody2D> {
        &self.bodies
    }

    /// Returns the number of bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Takes ownership of an extra force generator
    pub fn add_force_generator(&mut self, generator: Box<dyn ForceGenerator>) -> GeneratorHandle {
        self.force_registry.add_generator(generator)
    }

    /// Pairs a body with a generator previously added to this system
    pub fn register(&mut self, body: BodyHandle, generator: GeneratorHandle) -> Result<bool> {
        self.bodies.get_body(body)?;
        self.force_registry.add(body, generator)
    }

    /// Unpairs a body and a generator
    pub fn unregister(&mut self, body: BodyHandle, generator: GeneratorHandle) -> bool {
        self.force_registry.remove(body, generator)
    }

    /// Returns the force registry
    pub fn get_force_registry(&self) -> &ForceRegistry {
        &self.force_registry
    }

    /// Runs one fixed step for the frame, whatever the frame's duration
    ///
    /// This is the per-frame entry point; use [`advance`](Self::advance) to
    /// track real elapsed time instead.
    pub fn update(&mut self, _dt: f32) {
        self.fixed_update();
    }

    /// Consumes `frame_time` in fixed steps and returns how many ran
    ///
    /// Leftover time smaller than a step carries over to the next call. When more
    /// than `max_substeps` steps are due, the excess time is dropped.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        let step = self.config.fixed_time_step;
        self.accumulator += frame_time.max(0.0);

        let mut steps = 0;
        while self.accumulator >= step && steps < self.config.max_substeps {
            self.fixed_update();
            self.accumulator -= step;
            steps += 1;
        }

        if self.accumulator >= step {
            log::warn!(
                "physics fell behind: dropping {:.4}s after {} sub-steps",
                self.accumulator,
                steps
            );
            self.accumulator = 0.0;
        }

        steps
    }

    /// Applies all registered forces, then integrates every body over one fixed step
    pub fn fixed_update(&mut self) {
        let dt = self.config.fixed_time_step;
        log::trace!("fixed step of {}s over {} bodies", dt, self.bodies.len());

        self.force_registry.update_forces(&mut self.bodies, dt);

        for (_, body) in self.bodies.iter_mut() {
            body.physics_update(dt);
        }

        self.time += dt;
    }

    /// Removes every body and pairing; extra generators stay registered
    pub fn clear(&mut self) {
        log::debug!("clearing physics system with {} bodies", self.bodies.len());
        self.force_registry.clear();
        self.bodies.clear();
        self.accumulator = 0.0;
    }
}
