//! Rectangular body segments with explicit velocity and spin.

use crate::float::Float;
use crate::vec::Vec2;

/// One rigid rectangular segment of the ragdoll.
///
/// `pos` is the rectangle's center. Width, height and mass are fixed for
/// the particle's lifetime; everything else changes every tick.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub angle: F,
    pub angular_vel: F,
    pub width: F,
    pub height: F,
    pub mass: F,
    pub inv_mass: F,
}

impl<F: Float> Particle<F> {
    /// Create a resting particle. Mass must be strictly positive.
    pub fn new(pos: Vec2<F>, width: F, height: F, mass: F) -> Self {
        let inv_mass = if mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
        Particle {
            pos,
            vel: Vec2::zero(),
            angle: F::zero(),
            angular_vel: F::zero(),
            width,
            height,
            mass,
            inv_mass,
        }
    }

    /// Set the starting velocity and spin.
    pub fn with_motion(mut self, vel: Vec2<F>, angular_vel: F) -> Self {
        self.vel = vel;
        self.angular_vel = angular_vel;
        self
    }

    pub fn half_width(&self) -> F { self.width * F::half() }

    pub fn half_height(&self) -> F { self.height * F::half() }

    /// Bottom edge in screen space (y grows downward).
    pub fn bottom(&self) -> F { self.pos.y + self.half_height() }

    pub fn left(&self) -> F { self.pos.x - self.half_width() }

    pub fn right(&self) -> F { self.pos.x + self.half_width() }

    /// Add `force / mass` to the velocity.
    pub fn apply_impulse(&mut self, force: Vec2<F>) {
        self.vel += force.scale(self.inv_mass);
    }

    /// Constant acceleration, independent of mass.
    pub fn accelerate(&mut self, accel: Vec2<F>) {
        self.vel += accel;
    }

    pub fn damp(&mut self, linear: F, angular: F) {
        self.vel = self.vel.scale(linear);
        self.angular_vel = self.angular_vel * angular;
    }

    /// Semi-implicit Euler: velocities are already updated for this tick.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
        self.angle = self.angle + self.angular_vel;
    }

    /// True if both velocity components are under `threshold`.
    pub fn is_resting(&self, threshold: F) -> bool {
        self.vel.x.abs() < threshold && self.vel.y.abs() < threshold
    }

    pub fn kinetic_energy(&self) -> F {
        F::half() * self.mass * self.vel.length_sq()
    }
}
