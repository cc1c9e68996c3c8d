//! Soft distance joints between body parts.

use crate::float::Float;
use crate::part::Part;
use crate::particle::Particle;

/// Number of joints in the skeleton, active or not.
pub const JOINT_COUNT: usize = 9;

/// A soft distance constraint between two parts.
///
/// Inactive joints stay in the skeleton's fixed joint table and are skipped
/// by the solver; the only joint ever deactivated is head-torso.
#[derive(Clone, Debug, PartialEq)]
pub struct Joint<F: Float> {
    pub a: Part,
    pub b: Part,
    pub rest_length: F,
    /// Fraction of the length error removed per pass, in (0, 1].
    pub stiffness: F,
    pub active: bool,
}

impl<F: Float> Joint<F> {
    pub fn new(a: Part, b: Part, rest_length: F, stiffness: F) -> Self {
        Joint { a, b, rest_length, stiffness, active: true }
    }

    /// Joint whose rest length is the current distance between its parts.
    pub fn from_particles(a: Part, b: Part, particles: &[Particle<F>], stiffness: F) -> Self {
        let rest_length = particles[a.index()].pos.distance(particles[b.index()].pos);
        Joint::new(a, b, rest_length, stiffness)
    }

    pub fn connects(&self, part: Part) -> bool {
        self.a == part || self.b == part
    }

    /// Current distance between the two parts.
    pub fn length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a.index()].pos.distance(particles[self.b.index()].pos)
    }

    /// Absolute deviation from the rest length.
    pub fn error(&self, particles: &[Particle<F>]) -> F {
        (self.length(particles) - self.rest_length).abs()
    }

    /// One relaxation pass: both ends move the same amount toward the rest
    /// length. Coincident parts have no direction and are left alone.
    pub fn relax(&self, particles: &mut [Particle<F>]) {
        if !self.active {
            return;
        }
        let ia = self.a.index();
        let ib = self.b.index();

        let delta = particles[ib].pos - particles[ia].pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return;
        }

        let factor = (self.rest_length - dist) / dist * self.stiffness * F::half();
        let correction = delta.scale(factor);
        particles[ia].pos -= correction;
        particles[ib].pos += correction;
    }
}
