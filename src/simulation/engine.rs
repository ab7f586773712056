//! High-level runtime engine settings
//!
//! Selects the integration scheme used when advancing a `Scenario`

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or verlet
}
