//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (integration scheme)
//! - [`ParametersConfig`] – physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"    # or "euler"
//!
//! parameters:
//!   g: 6.674e-11            # gravitational constant
//!   moving_mass: 1.0e10     # mass given to moving bodies
//!   static_mass: 1.0e11     # mass given to immovable bodies
//!
//! bodies:
//!   - x: [ 400.0, 300.0 ]
//!     radius: 30.0
//!     moving: false
//!   - x: [ 400.0, 100.0 ]
//!     radius: 8.0
//!     moving: true
//!     v: [ 40.0, 0.0 ]
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation; omitted parameters fall back to the crate defaults.

use serde::Deserialize;

/// Which integration scheme advances the system each frame
/// `integrator: "euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Symplectic Euler. First order, velocity updated before position within the same step
    Euler,

    #[serde(rename = "verlet")] // Velocity Verlet. Second order: half-kick, drift, half-kick with updated positions
    Verlet,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system state
}

/// Physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: Option<f64>,           // gravitational constant
    pub moving_mass: Option<f64>, // mass given to moving bodies
    pub static_mass: Option<f64>, // mass given to immovable bodies
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2],        // initial center position
    pub radius: f64,        // body radius; the broadphase margin doubles it
    pub moving: bool,       // advanced by the integrator or immovable
    pub v: Option<[f64; 2]>, // initial velocity, at rest when omitted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (integrator)
    pub parameters: ParametersConfig, // physical parameters
    pub bodies: Vec<BodyConfig>, // bodies that define the initial state of the system
}
