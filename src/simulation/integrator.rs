//! Fixed-step time integrators for the sandbox
//!
//! Provides symplectic Euler and velocity Verlet steps, both driven by
//! `AccelSet` and a driver-supplied frame time `dt`
//!
//! Both schemes apply the velocity update to every body that is not held,
//! immovable bodies included; the position update (drift) only applies to
//! moving, non-held bodies. An immovable body therefore carries a formal
//! internal velocity that never reaches its position, and a held body is
//! untouched entirely while still pulling on every other body.

use crate::configuration::config::IntegratorConfig;
use crate::simulation::forces::{AccelSet, Sample};
use crate::simulation::states::{NVec2, System};

/// Advance the system by one step using symplectic Euler.
///
/// Velocity is updated before position, from forces evaluated at the
/// pre-update positions; the drift then uses the already-updated velocity.
/// Kick-then-drift, exactly this order.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // a_n from x_n, accumulated privately before any state is written
    let mut a = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys, Sample::Current, &mut a);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a.iter()) {
        if b.held() {
            continue;
        }
        b.v += dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1, moving bodies only
    for b in sys.bodies.iter_mut() {
        if !b.moving() || b.held() {
            continue;
        }
        b.x_prev = b.x;
        b.x += dt * b.v;
    }

    sys.t += dt;
}

/// Advance the system by one step using velocity Verlet.
///
/// Two force evaluations per step. The first half-kick samples every
/// partner's previous position, so the whole phase-A buffer is filled
/// before any body drifts; the second half-kick runs only after every
/// drift has completed and samples the updated positions.
pub fn verlet_integrator(sys: &mut System, forces: &AccelSet, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let half_dt = 0.5 * dt;

    // Phase A: a_n from the partners' previous positions
    let mut a_old = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys, Sample::Previous, &mut a_old);

    // Half-kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        if b.held() {
            continue;
        }
        b.v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2, moving bodies only
    for b in sys.bodies.iter_mut() {
        if !b.moving() || b.held() {
            continue;
        }
        b.x_prev = b.x;
        b.x += dt * b.v;
    }

    sys.t += dt;

    // Phase B: a_n+1 from the updated positions x_n+1. Every drift has
    // completed before this evaluation starts.
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys, Sample::Current, &mut a_new);

    // Final half-kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        if b.held() {
            continue;
        }
        b.v += half_dt * *a;
    }
}

/// Run one integration pass with the selected scheme.
pub fn advance(sys: &mut System, forces: &AccelSet, scheme: &IntegratorConfig, dt: f64) {
    log::trace!("advance: {:?}, dt = {dt}, {} bodies", scheme, sys.bodies.len());

    match scheme {
        IntegratorConfig::Euler => euler_integrator(sys, forces, dt),
        IntegratorConfig::Verlet => verlet_integrator(sys, forces, dt),
    }
}
