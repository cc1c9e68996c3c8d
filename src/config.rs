//! Tuning constants for the ragdoll simulation.

use crate::error::RagdollError;
use crate::float::Float;

/// Coefficients used by the detached head in place of the body's.
///
/// The head keeps more energy than the limbs so it bounces, rolls and
/// tumbles for longer once it has broken free.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadConfig<F: Float> {
    /// Chance that the impulse tears the head off. Default: 0.7.
    pub detach_probability: F,
    /// Linear damping per tick. Default: 0.99.
    pub friction: F,
    /// Angular damping per tick. Default: 0.985.
    pub angular_friction: F,
    /// Ground restitution. Default: 0.45.
    pub bounce: F,
    /// Horizontal damping on ground contact. Default: 0.92.
    pub ground_friction: F,
    /// Spin damping on ground contact. Default: 0.9.
    pub ground_spin_friction: F,
    /// Vertical speed under which a ground bounce is killed. Default: 1.5.
    pub sleep_speed: F,
    /// Share of horizontal speed turned into spin while grounded. Default: 0.02.
    pub roll_factor: F,
    /// Max random spin added on wall contact. Default: 0.3.
    pub wall_spin: F,
    /// Max horizontal detach kick, either direction. Default: 4.0.
    pub kick_x: F,
    /// Upward detach kick range. Default: 2.0..4.0.
    pub kick_y: (F, F),
    /// Push along the torso-to-head direction on detach. Default: 2.5.
    pub separation: F,
}

impl<F: Float> HeadConfig<F> {
    pub fn new() -> Self {
        HeadConfig {
            detach_probability: F::from_f32(0.7),
            friction: F::from_f32(0.99),
            angular_friction: F::from_f32(0.985),
            bounce: F::from_f32(0.45),
            ground_friction: F::from_f32(0.92),
            ground_spin_friction: F::from_f32(0.9),
            sleep_speed: F::from_f32(1.5),
            roll_factor: F::from_f32(0.02),
            wall_spin: F::from_f32(0.3),
            kick_x: F::from_f32(4.0),
            kick_y: (F::from_f32(2.0), F::from_f32(4.0)),
            separation: F::from_f32(2.5),
        }
    }

    /// Set the detach probability.
    pub fn with_detach_probability(mut self, probability: F) -> Self {
        self.detach_probability = probability;
        self
    }

    /// Set the ground restitution.
    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    /// Set the linear and angular damping factors.
    pub fn with_friction(mut self, friction: F, angular_friction: F) -> Self {
        self.friction = friction;
        self.angular_friction = angular_friction;
        self
    }

    /// Set the separation impulse magnitude.
    pub fn with_separation(mut self, separation: F) -> Self {
        self.separation = separation;
        self
    }

    fn validate(&self) -> Result<(), RagdollError> {
        if !self.detach_probability.is_unit() {
            return Err(RagdollError::InvalidProbability);
        }
        let unit = [
            ("head.friction", self.friction),
            ("head.angular_friction", self.angular_friction),
            ("head.bounce", self.bounce),
            ("head.ground_friction", self.ground_friction),
            ("head.ground_spin_friction", self.ground_spin_friction),
        ];
        check_unit(&unit)?;
        let finite = [
            ("head.sleep_speed", self.sleep_speed),
            ("head.roll_factor", self.roll_factor),
            ("head.wall_spin", self.wall_spin),
            ("head.kick_x", self.kick_x),
            ("head.kick_y", self.kick_y.0),
            ("head.kick_y", self.kick_y.1),
            ("head.separation", self.separation),
        ];
        check_finite(&finite)
    }
}

impl<F: Float> Default for HeadConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a ragdoll simulation.
///
/// All speeds are in pixels per tick, accelerations in pixels per tick squared.
///
/// # Builder Pattern
/// ```
/// use ragdoll::config::RagdollConfig;
///
/// let config: RagdollConfig<f32> = RagdollConfig::new()
///     .with_gravity(0.5)
///     .with_friction(0.97)
///     .with_bounce(0.25)
///     .with_iterations(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RagdollConfig<F: Float> {
    /// Downward acceleration added each tick. Default: 0.4.
    pub gravity: F,
    /// Linear damping per tick, 1.0 = none. Default: 0.98.
    pub friction: F,
    /// Angular damping per tick. Default: 0.96.
    pub angular_friction: F,
    /// Ground restitution. Default: 0.3.
    pub bounce: F,
    /// Horizontal damping on ground contact. Default: 0.8.
    pub ground_friction: F,
    /// Spin damping on ground contact. Default: 0.7.
    pub ground_spin_friction: F,
    /// Vertical speed under which a ground bounce is killed. Default: 1.0.
    pub sleep_speed: F,
    /// Wall restitution. Default: 0.5.
    pub wall_bounce: F,
    /// Constraint relaxation passes per tick. Default: 3.
    pub iterations: usize,
    /// Per-axis speed under which a part counts as at rest. Default: 0.5.
    pub settle_speed: F,
    /// How far above the ground a part's bottom edge may be and still count
    /// as resting on it. Default: 1.0.
    pub contact_slop: F,
    /// Max initial speed per axis at construction. Default: 1.0.
    pub spawn_speed: F,
    /// Max initial spin at construction. Default: 0.1.
    pub spawn_spin: F,
    /// Per-part impulse scale range. Default: 0.5..1.0.
    pub impulse_jitter: (F, F),
    /// Max random spin added by the impulse. Default: 0.3.
    pub impulse_spin: F,
    /// Detached-head overrides.
    pub head: HeadConfig<F>,
}

impl<F: Float> RagdollConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        RagdollConfig {
            gravity: F::from_f32(0.4),
            friction: F::from_f32(0.98),
            angular_friction: F::from_f32(0.96),
            bounce: F::from_f32(0.3),
            ground_friction: F::from_f32(0.8),
            ground_spin_friction: F::from_f32(0.7),
            sleep_speed: F::one(),
            wall_bounce: F::half(),
            iterations: 3,
            settle_speed: F::half(),
            contact_slop: F::one(),
            spawn_speed: F::one(),
            spawn_spin: F::from_f32(0.1),
            impulse_jitter: (F::half(), F::one()),
            impulse_spin: F::from_f32(0.3),
            head: HeadConfig::new(),
        }
    }

    /// Set the gravity acceleration.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the linear damping factor for attached parts.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the ground restitution for attached parts.
    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the settle threshold.
    pub fn with_settle_speed(mut self, settle_speed: F) -> Self {
        self.settle_speed = settle_speed;
        self
    }

    /// Set the ground contact tolerance used by the settle check.
    pub fn with_contact_slop(mut self, contact_slop: F) -> Self {
        self.contact_slop = contact_slop;
        self
    }

    /// Set the impulse jitter range.
    pub fn with_impulse_jitter(mut self, min: F, max: F) -> Self {
        self.impulse_jitter = (min, max);
        self
    }

    /// Set the spawn velocity and spin bounds.
    pub fn with_spawn_motion(mut self, speed: F, spin: F) -> Self {
        self.spawn_speed = speed;
        self.spawn_spin = spin;
        self
    }

    /// Set the head detach probability.
    pub fn with_detach_probability(mut self, probability: F) -> Self {
        self.head.detach_probability = probability;
        self
    }

    /// Replace the detached-head overrides.
    pub fn with_head(mut self, head: HeadConfig<F>) -> Self {
        self.head = head;
        self
    }

    /// Check that every coefficient is usable.
    pub fn validate(&self) -> Result<(), RagdollError> {
        if self.iterations == 0 {
            return Err(RagdollError::InvalidIterations);
        }
        let (lo, hi) = self.impulse_jitter;
        if !(lo.is_finite() && hi.is_finite() && lo > F::zero() && lo <= hi) {
            return Err(RagdollError::InvalidJitter);
        }
        let unit = [
            ("friction", self.friction),
            ("angular_friction", self.angular_friction),
            ("bounce", self.bounce),
            ("ground_friction", self.ground_friction),
            ("ground_spin_friction", self.ground_spin_friction),
            ("wall_bounce", self.wall_bounce),
        ];
        check_unit(&unit)?;
        let finite = [
            ("gravity", self.gravity),
            ("sleep_speed", self.sleep_speed),
            ("settle_speed", self.settle_speed),
            ("contact_slop", self.contact_slop),
            ("spawn_speed", self.spawn_speed),
            ("spawn_spin", self.spawn_spin),
            ("impulse_spin", self.impulse_spin),
        ];
        check_finite(&finite)?;
        if self.contact_slop < F::zero() {
            return Err(RagdollError::InvalidCoefficient { name: "contact_slop" });
        }
        self.head.validate()
    }
}

impl<F: Float> Default for RagdollConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_unit<F: Float>(values: &[(&'static str, F)]) -> Result<(), RagdollError> {
    match values.iter().find(|(_, v)| !v.is_unit()) {
        Some(&(name, _)) => Err(RagdollError::InvalidCoefficient { name }),
        None => Ok(()),
    }
}

fn check_finite<F: Float>(values: &[(&'static str, F)]) -> Result<(), RagdollError> {
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some(&(name, _)) => Err(RagdollError::InvalidCoefficient { name }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RagdollConfig::<f32>::default().validate(), Ok(()));
        assert_eq!(RagdollConfig::<f64>::default().validate(), Ok(()));
    }

    #[test]
    fn head_keeps_more_energy_than_limbs() {
        let c = RagdollConfig::<f32>::new();
        assert!(c.head.friction > c.friction);
        assert!(c.head.angular_friction > c.angular_friction);
        assert!(c.head.bounce > c.bounce);
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = RagdollConfig::<f32>::new().with_iterations(0);
        assert_eq!(c.validate(), Err(RagdollError::InvalidIterations));
    }

    #[test]
    fn rejects_bouncy_ground() {
        let c = RagdollConfig::<f32>::new().with_bounce(1.5);
        assert_eq!(c.validate(), Err(RagdollError::InvalidCoefficient { name: "bounce" }));
    }

    #[test]
    fn rejects_bad_probability() {
        let c = RagdollConfig::<f32>::new().with_detach_probability(-0.1);
        assert_eq!(c.validate(), Err(RagdollError::InvalidProbability));
    }

    #[test]
    fn rejects_inverted_jitter() {
        let c = RagdollConfig::<f32>::new().with_impulse_jitter(1.0, 0.5);
        assert_eq!(c.validate(), Err(RagdollError::InvalidJitter));
        let c = RagdollConfig::<f32>::new().with_impulse_jitter(0.0, 0.5);
        assert_eq!(c.validate(), Err(RagdollError::InvalidJitter));
    }

    #[test]
    fn rejects_negative_contact_slop() {
        let c = RagdollConfig::<f32>::new().with_contact_slop(-1.0);
        assert_eq!(c.validate(), Err(RagdollError::InvalidCoefficient { name: "contact_slop" }));
    }

    #[test]
    fn rejects_nan_gravity() {
        let c = RagdollConfig::<f32>::new().with_gravity(f32::NAN);
        assert_eq!(c.validate(), Err(RagdollError::InvalidCoefficient { name: "gravity" }));
    }
}
