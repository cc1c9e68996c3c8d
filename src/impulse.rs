//! The one-shot crash impulse and head detachment.

use crate::error::RagdollError;
use crate::float::Float;
use crate::part::Part;
use crate::skeleton::{symmetric, uniform, Ragdoll, HEAD_JOINT};
use crate::vec::Vec2;

impl<F: Float> Ragdoll<F> {
    /// Blow the skeleton apart with `force`.
    ///
    /// Every part gets `force * jitter / mass` added to its velocity, with
    /// `jitter` drawn per part from the configured range, plus a random spin.
    /// Then, with the configured probability, the head tears loose and gets an
    /// extra kick on top of its share of the base impulse.
    ///
    /// Returns whether the head detached. Must be called once, before the
    /// first [`Ragdoll::step`]; later calls are rejected and change nothing.
    pub fn apply_impulse(&mut self, force: Vec2<F>) -> Result<bool, RagdollError> {
        if self.impulse_applied {
            tracing::warn!("ragdoll impulse applied twice; ignoring");
            return Err(RagdollError::ImpulseAlreadyApplied);
        }
        if !force.is_finite() {
            return Err(RagdollError::InvalidImpulse);
        }
        self.impulse_applied = true;
        self.settled = false;

        let (jitter_lo, jitter_hi) = self.config.impulse_jitter;
        for p in self.particles.iter_mut() {
            let jitter = uniform(&mut self.rng, jitter_lo, jitter_hi);
            p.apply_impulse(force.scale(jitter));
            p.angular_vel = p.angular_vel + symmetric(&mut self.rng, self.config.impulse_spin);
        }

        let roll: F = uniform(&mut self.rng, F::zero(), F::one());
        if roll < self.config.head.detach_probability {
            self.detach_head();
        }
        Ok(self.head_detached)
    }

    fn detach_head(&mut self) {
        self.joints[HEAD_JOINT].active = false;
        self.head_detached = true;

        let head_cfg = &self.config.head;
        let kick = Vec2::new(
            symmetric(&mut self.rng, head_cfg.kick_x),
            -uniform(&mut self.rng, head_cfg.kick_y.0, head_cfg.kick_y.1),
        );

        let torso = self.particles[Part::Torso.index()].pos;
        let head = &mut self.particles[Part::Head.index()];
        let mut away = (head.pos - torso).normalize();
        if away == Vec2::zero() {
            away = Vec2::new(F::zero(), -F::one());
        }

        head.vel += kick + away.scale(head_cfg.separation);
        tracing::debug!(
            vx = head.vel.x.to_f64(),
            vy = head.vel.y.to_f64(),
            "ragdoll head detached"
        );
    }
}
