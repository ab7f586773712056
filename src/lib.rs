pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyError, NVec2, System};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, MOVING_BODY_MASS, STATIC_BODY_MASS};
pub use simulation::forces::{gravitational_force, AccelSet, Acceleration, NewtonianGravity, Sample};
pub use simulation::integrator::{advance, euler_integrator, verlet_integrator};
pub use simulation::broadphase::{self, CandidatePair};
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_broadphase, bench_integrators};
