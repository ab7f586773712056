use std::time::Instant;

use crate::simulation::broadphase::{self, CandidatePair};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{euler_integrator, verlet_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a deterministic scattered system of size `n`
fn make_system(n: usize) -> System {
    let params = Parameters::default();
    let mut sys = System::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0);
        let radius = 1.0 + (i_f * 0.07).sin().abs() * 4.0;

        sys.create_body(x, radius, i % 4 != 0, &params)
            .expect("benchmark body construction");
    }

    sys
}

/// Brute-force all-pairs candidate generation, the baseline the sweep is
/// measured against
fn brute_force_pairs(bodies: &[Body]) -> Vec<CandidatePair> {
    let mut pairs = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if broadphase::bounding_overlap(&bodies[i], &bodies[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

pub fn bench_broadphase() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    println!("broadphase: sort-and-sweep vs brute force");
    for n in ns {
        let sys = make_system(n);

        let mut sorted = sys.bodies.clone();
        broadphase::sort_bodies(&mut sorted);

        // Warm up
        let _ = broadphase::sweep(&sorted);
        let _ = brute_force_pairs(&sorted);

        // Time the sweep (sort included, as a frame would pay it)
        let t0 = Instant::now();
        let mut bodies = sys.bodies.clone();
        let swept = broadphase::find_candidate_pairs(&mut bodies);
        let dt_sweep = t0.elapsed().as_secs_f64();

        // Time brute force
        let t1 = Instant::now();
        let brute = brute_force_pairs(&sorted);
        let dt_brute = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, sweep = {dt_sweep:8.6} s ({} pairs), brute = {dt_brute:8.6} s ({} pairs)",
            swept.len(),
            brute.len()
        );
    }
}

pub fn bench_integrators() {
    // Test different N values
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 3; // integrator steps per scheme
    let dt = 1.0 / 60.0;

    println!("integrators: euler vs verlet, {steps} steps each");
    for n in ns {
        let sys_template = make_system(n);
        let forces = AccelSet::new().with(NewtonianGravity {
            g: Parameters::default().g,
        });

        // Symplectic Euler
        let mut sys_euler = sys_template.clone();

        // Warm-up
        euler_integrator(&mut sys_euler, &forces, dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys_euler, &forces, dt);
        }
        let euler_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Velocity Verlet (two force evaluations per step)
        let mut sys_verlet = sys_template.clone();

        // Warm-up
        verlet_integrator(&mut sys_verlet, &forces, dt);

        let t1 = Instant::now();
        for _ in 0..steps {
            verlet_integrator(&mut sys_verlet, &forces, dt);
        }
        let verlet_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, euler step = {euler_per_step:8.6} s, verlet step = {verlet_per_step:8.6} s"
        );
    }
}
