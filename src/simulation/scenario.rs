//! Build fully-initialized sandbox scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, in broadphase order)
//! - active force set (`AccelSet`)

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyError, NVec2, System};

/// A fully-initialized runtime scenario, consumed by the frame driver.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Map a [`ScenarioConfig`] onto the runtime structs. Every body goes
    /// through the validated construction path, so a config with degenerate
    /// geometry is rejected here instead of entering the simulation.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, BodyError> {
        // Parameters (runtime) from ParametersConfig, defaults where omitted
        let defaults = Parameters::default();
        let parameters = Parameters {
            g: cfg.parameters.g.unwrap_or(defaults.g),
            moving_mass: cfg.parameters.moving_mass.unwrap_or(defaults.moving_mass),
            static_mass: cfg.parameters.static_mass.unwrap_or(defaults.static_mass),
        };

        // Bodies: validated construction, inserted in broadphase order
        let mut system = System::new();
        for bc in &cfg.bodies {
            let index =
                system.create_body(NVec2::new(bc.x[0], bc.x[1]), bc.radius, bc.moving, &parameters)?;
            if let Some(v) = bc.v {
                system.bodies[index].v = NVec2::new(v[0], v[1]);
            }
        }

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            integrator: cfg.engine.integrator,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}
