//! Core state types for the sandbox.
//!
//! Defines the 2D body/system structs:
//! - `Body` carries the physical state of one circle, plus the `moving` and
//!   `held` flags that decide how the integrator treats it
//! - `System` holds the list of bodies (kept sorted for the broadphase) and
//!   the current simulation time `t`

use nalgebra::Vector2;
use thiserror::Error;

use crate::simulation::broadphase;
use crate::simulation::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// Rejected body construction. Bad geometry is refused at the boundary so it
/// can never enter the simulation state.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(f64),
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub x_prev: NVec2, // position before the most recent completed drift
    pub v: NVec2, // velocity
    pub m: f64, // mass, derived from the moving flag at construction
    pub radius: f64, // radius
    moving: bool, // advanced by the integrator; immutable after construction
    held: bool, // manipulated by the pointer; skipped by the integrator
}

impl Body {
    /// Construct a body at rest. Mass comes from `params`: `moving_mass` for
    /// dynamic bodies, `static_mass` for immovable ones. Non-positive or
    /// non-finite radius/mass is rejected.
    pub fn new(x: NVec2, radius: f64, moving: bool, params: &Parameters) -> Result<Self, BodyError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BodyError::InvalidRadius(radius));
        }

        let m = if moving {
            params.moving_mass
        } else {
            params.static_mass
        };
        if !(m.is_finite() && m > 0.0) {
            return Err(BodyError::InvalidMass(m));
        }

        Ok(Self {
            x,
            x_prev: x,
            v: NVec2::zeros(),
            m,
            radius,
            moving,
            held: false,
        })
    }

    pub fn moving(&self) -> bool {
        self.moving
    }

    pub fn held(&self) -> bool {
        self.held
    }

    /// Radius of the bounding circle used by the broadphase: twice the
    /// visual radius, a conservative margin refined later by narrowphase.
    pub fn bounding_radius(&self) -> f64 {
        2.0 * self.radius
    }

    /// X of the bottom-left corner of the bounding circle's box, the
    /// broadphase sort key.
    pub fn left_edge(&self) -> f64 {
        self.x.x - self.bounding_radius()
    }

    /// Surface separation from `other`: center distance minus both radii.
    /// Negative when the circles interpenetrate.
    pub fn distance_from(&self, other: &Body) -> f64 {
        (self.x - other.x).norm() - self.radius - other.radius
    }

    /// Pointer hit test: is `point` inside this body's circle?
    pub fn contains(&self, point: NVec2) -> bool {
        (self.x - point).norm() <= self.radius
    }

    // Hold transitions go through `System::set_held`/`release`; the one-time
    // velocity reset lives here.
    pub(crate) fn mark_held(&mut self) {
        if !self.held {
            self.v = NVec2::zeros();
            self.held = true;
        }
    }

    pub(crate) fn clear_held(&mut self) {
        self.held = false;
    }
}

/// The frame-owned body collection. All mutation happens synchronously
/// within one driver tick: integration first, then the broadphase sweep.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, sorted by left edge
    pub t: f64, // time
}

impl System {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
        }
    }

    /// Validate and construct a body, inserting it at its sorted position so
    /// the broadphase order survives creation. Returns the body's index.
    pub fn create_body(
        &mut self,
        x: NVec2,
        radius: f64,
        moving: bool,
        params: &Parameters,
    ) -> Result<usize, BodyError> {
        let body = Body::new(x, radius, moving, params)?;
        Ok(broadphase::insert_sorted(&mut self.bodies, body))
    }

    /// Erase one body from the sorted collection.
    pub fn remove_body(&mut self, index: usize) -> Option<Body> {
        if index < self.bodies.len() {
            Some(self.bodies.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Mark the body at `index` as held by the pointer. On the transition its
    /// velocity is zeroed; while held it is skipped by the integrator but
    /// still pulls on every other body. Returns false for a stale index.
    pub fn set_held(&mut self, index: usize) -> bool {
        match self.bodies.get_mut(index) {
            Some(body) => {
                body.mark_held();
                true
            }
            None => false,
        }
    }

    /// Clear the held marker on every body (the driver holds at most one,
    /// clearing all avoids identity bookkeeping).
    pub fn release(&mut self) {
        for body in &mut self.bodies {
            body.clear_held();
        }
    }

    pub fn held_body(&self) -> Option<usize> {
        self.bodies.iter().position(Body::held)
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
