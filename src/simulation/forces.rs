//! Force / acceleration contributors for the sandbox
//!
//! Defines the pairwise gravitational force, the 2D acceleration trait, and
//! the `AccelSet` container that sums contributions per body

use crate::simulation::states::{Body, NVec2, System};

/// Which position of the interacting partner a force evaluation samples.
/// `Previous` is used by the first Verlet half-kick, which must see every
/// partner's position as of the start of the previous step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Current,
    Previous,
}

/// Gravitational force on `source` due to `other`.
///
/// Direction is the unit vector from `source.x` toward the sampled position
/// of `other`; magnitude is `g * m_source * m_other / d^2`. A pair with zero
/// sampled separation has no defined direction and contributes nothing.
pub fn gravitational_force(source: &Body, other: &Body, sample: Sample, g: f64) -> NVec2 {
    let target = match sample {
        Sample::Current => other.x,
        Sample::Previous => other.x_prev,
    };

    // r points from source toward the sampled partner position
    let r = target - source.x;
    let d2 = r.norm_squared();
    if d2 == 0.0 {
        log::trace!("degenerate pair at {:?}, dropping contribution", source.x);
        return NVec2::zeros();
    }

    let d = d2.sqrt();
    let unit = r / d;

    g * source.m * other.m / d2 * unit
}

/// Collection of 2D acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`, sampling partner
    /// positions per `sample`.
    /// - `out[i]` will be set to the sum of contributions from all terms
    ///
    /// Every body gets an entry, held and static ones included; the
    /// integrator decides which bodies the buffer is applied to.
    pub fn accumulate_accels(&self, sys: &System, sample: Sample, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, sample, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for 2D acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, sample: Sample, out: &mut [NVec2]);
}

/// 2D Newtonian point gravity.
///
/// Each body sums the pull of every other body. The sum is asymmetric by
/// construction: a body sampling its partners' previous positions does not
/// see the same separations its partners see, so no pairwise action/reaction
/// shortcut applies.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, sample: Sample, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 {
            return;
        }

        for (i, bi) in sys.bodies.iter().enumerate() {
            let mut accel = NVec2::zeros();

            for (j, bj) in sys.bodies.iter().enumerate() {
                if j == i {
                    continue;
                }
                // a_i += F(i, j) / m_i
                accel += gravitational_force(bi, bj, sample, self.g) / bi.m;
            }

            out[i] += accel;
        }
    }
}
