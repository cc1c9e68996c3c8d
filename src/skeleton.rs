//! Skeleton construction: topology table, anchoring and spawn motion.

use crate::config::RagdollConfig;
use crate::error::RagdollError;
use crate::float::Float;
use crate::joint::{Joint, JOINT_COUNT};
use crate::part::{Part, PART_COUNT};
use crate::particle::Particle;
use crate::vec::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Width of the box the reference skeleton is laid out in.
pub const REFERENCE_WIDTH: f32 = 40.0;
/// Height of the box the reference skeleton is laid out in.
pub const REFERENCE_HEIGHT: f32 = 60.0;

/// Slot of the head-torso joint in the joint table.
pub(crate) const HEAD_JOINT: usize = 0;

struct PartSpec {
    /// Center offset from the anchor's top-center, reference pixels.
    offset: (f32, f32),
    size: (f32, f32),
    mass: f32,
}

// Indexed by `Part`. Torso heaviest, forearms and shins lightest.
const PART_TABLE: [PartSpec; PART_COUNT] = [
    PartSpec { offset: (0.0, 7.0), size: (12.0, 12.0), mass: 1.0 },
    PartSpec { offset: (0.0, 23.0), size: (14.0, 20.0), mass: 3.0 },
    PartSpec { offset: (-10.0, 20.0), size: (5.0, 12.0), mass: 0.8 },
    PartSpec { offset: (10.0, 20.0), size: (5.0, 12.0), mass: 0.8 },
    PartSpec { offset: (-10.0, 31.0), size: (4.0, 10.0), mass: 0.5 },
    PartSpec { offset: (10.0, 31.0), size: (4.0, 10.0), mass: 0.5 },
    PartSpec { offset: (-4.0, 39.0), size: (6.0, 12.0), mass: 1.2 },
    PartSpec { offset: (4.0, 39.0), size: (6.0, 12.0), mass: 1.2 },
    PartSpec { offset: (-4.0, 52.0), size: (5.0, 12.0), mass: 0.5 },
    PartSpec { offset: (4.0, 52.0), size: (5.0, 12.0), mass: 0.5 },
];

// Core joints are stiffer than the extremities so limbs flop.
const JOINT_TABLE: [(Part, Part, f32); JOINT_COUNT] = [
    (Part::Head, Part::Torso, 0.9),
    (Part::Torso, Part::LeftUpperArm, 0.8),
    (Part::Torso, Part::RightUpperArm, 0.8),
    (Part::LeftUpperArm, Part::LeftForearm, 0.6),
    (Part::RightUpperArm, Part::RightForearm, 0.6),
    (Part::Torso, Part::LeftThigh, 0.8),
    (Part::Torso, Part::RightThigh, 0.8),
    (Part::LeftThigh, Part::LeftShin, 0.6),
    (Part::RightThigh, Part::RightShin, 0.6),
];

/// Bounding box of the entity the ragdoll replaces (top-left corner + size).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor<F: Float> {
    pub x: F,
    pub y: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> Anchor<F> {
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Anchor { x, y, width, height }
    }

    /// Uniform scale that fits the reference skeleton inside this box.
    pub fn scale(&self) -> F {
        let sx = self.width / F::from_f32(REFERENCE_WIDTH);
        let sy = self.height / F::from_f32(REFERENCE_HEIGHT);
        sx.min(sy)
    }

    fn validate(&self) -> Result<(), RagdollError> {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width <= F::zero() || self.height <= F::zero() {
            return Err(RagdollError::InvalidAnchor);
        }
        Ok(())
    }
}

/// The static world around the ragdoll: a flat floor and two side walls at
/// `0` and `width`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stage<F: Float> {
    pub ground_y: F,
    pub width: F,
}

impl<F: Float> Stage<F> {
    pub fn new(ground_y: F, width: F) -> Self {
        Stage { ground_y, width }
    }

    fn validate(&self) -> Result<(), RagdollError> {
        if !self.ground_y.is_finite() || !self.width.is_finite() || self.width <= F::zero() {
            return Err(RagdollError::InvalidStage);
        }
        Ok(())
    }
}

/// Snapshot of one part for drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PartPose<F: Float> {
    pub part: Part,
    pub pos: Vec2<F>,
    pub angle: F,
    pub width: F,
    pub height: F,
}

/// A ten-part ragdoll skeleton.
///
/// Build it once, apply one impulse, then call [`Ragdoll::step`] every frame
/// until [`Ragdoll::is_settled`] or the caller's own timer says stop.
///
/// ```
/// use ragdoll::{Anchor, NoOpStepObserver, Ragdoll, RagdollConfig, Stage, Vec2};
///
/// let mut doll: Ragdoll = Ragdoll::new(
///     Anchor::new(100.0, 100.0, 40.0, 60.0),
///     Stage::new(400.0, 800.0),
///     RagdollConfig::new(),
///     7,
/// ).unwrap();
/// doll.apply_impulse(Vec2::new(-4.0, -10.0)).unwrap();
/// for _ in 0..600 {
///     doll.step(&mut NoOpStepObserver);
/// }
/// assert!(doll.is_settled());
/// ```
#[derive(Clone, Debug)]
pub struct Ragdoll<F: Float = f32> {
    pub(crate) particles: [Particle<F>; PART_COUNT],
    pub(crate) joints: [Joint<F>; JOINT_COUNT],
    pub(crate) stage: Stage<F>,
    pub(crate) config: RagdollConfig<F>,
    pub(crate) scale: F,
    pub(crate) head_detached: bool,
    pub(crate) impulse_applied: bool,
    pub(crate) settled: bool,
    pub(crate) rng: SmallRng,
}

impl<F: Float> Ragdoll<F> {
    /// Build a ragdoll whose randomness is seeded from `seed`.
    pub fn new(
        anchor: Anchor<F>,
        stage: Stage<F>,
        config: RagdollConfig<F>,
        seed: u64,
    ) -> Result<Self, RagdollError> {
        Self::from_rng(anchor, stage, config, SmallRng::seed_from_u64(seed))
    }

    /// Build a ragdoll that draws all of its randomness from `rng`.
    pub fn from_rng(
        anchor: Anchor<F>,
        stage: Stage<F>,
        config: RagdollConfig<F>,
        mut rng: SmallRng,
    ) -> Result<Self, RagdollError> {
        anchor.validate()?;
        stage.validate()?;
        config.validate()?;

        let scale = anchor.scale();
        let origin = Vec2::new(anchor.x + anchor.width * F::half(), anchor.y);

        let particles: [Particle<F>; PART_COUNT] = core::array::from_fn(|i| {
            let row = &PART_TABLE[i];
            let offset = Vec2::new(F::from_f32(row.offset.0), F::from_f32(row.offset.1));
            let vel = Vec2::new(
                symmetric(&mut rng, config.spawn_speed),
                symmetric(&mut rng, config.spawn_speed),
            );
            let spin = symmetric(&mut rng, config.spawn_spin);
            Particle::new(
                origin + offset.scale(scale),
                F::from_f32(row.size.0) * scale,
                F::from_f32(row.size.1) * scale,
                F::from_f32(row.mass),
            )
            .with_motion(vel, spin)
        });

        let joints: [Joint<F>; JOINT_COUNT] = core::array::from_fn(|i| {
            let (a, b, stiffness) = JOINT_TABLE[i];
            Joint::from_particles(a, b, &particles, F::from_f32(stiffness))
        });

        tracing::debug!(scale = scale.to_f64(), "ragdoll built");

        Ok(Ragdoll {
            particles,
            joints,
            stage,
            config,
            scale,
            head_detached: false,
            impulse_applied: false,
            settled: false,
            rng,
        })
    }

    pub fn particle(&self, part: Part) -> &Particle<F> {
        &self.particles[part.index()]
    }

    /// Mutable access to one part, for tests and debug tooling. The solver
    /// assumes it owns every part between steps.
    #[doc(hidden)]
    pub fn particle_mut(&mut self, part: Part) -> &mut Particle<F> {
        &mut self.particles[part.index()]
    }

    pub fn particles(&self) -> &[Particle<F>; PART_COUNT] {
        &self.particles
    }

    /// Joints that still constrain the skeleton.
    pub fn joints(&self) -> impl Iterator<Item = &Joint<F>> + '_ {
        self.joints.iter().filter(|j| j.active)
    }

    /// The joint between `a` and `b`, if it exists and is still active.
    pub fn joint_between(&self, a: Part, b: Part) -> Option<&Joint<F>> {
        self.joints().find(|j| (j.a == a && j.b == b) || (j.a == b && j.b == a))
    }

    pub fn head_detached(&self) -> bool {
        self.head_detached
    }

    pub fn impulse_applied(&self) -> bool {
        self.impulse_applied
    }

    pub fn stage(&self) -> &Stage<F> {
        &self.stage
    }

    pub fn config(&self) -> &RagdollConfig<F> {
        &self.config
    }

    /// Scale applied to the reference skeleton at construction.
    pub fn scale(&self) -> F {
        self.scale
    }

    pub fn pose(&self, part: Part) -> PartPose<F> {
        let p = self.particle(part);
        PartPose { part, pos: p.pos, angle: p.angle, width: p.width, height: p.height }
    }

    /// Poses of every part in draw order.
    pub fn poses(&self) -> [PartPose<F>; PART_COUNT] {
        Part::ALL.map(|part| self.pose(part))
    }

    /// Total translational kinetic energy, `sum(m * |v|^2 / 2)`.
    pub fn kinetic_energy(&self) -> F {
        self.particles
            .iter()
            .fold(F::zero(), |acc, p| acc + p.kinetic_energy())
    }
}

/// Uniform sample in `[lo, hi)`; returns `lo` when the range is empty.
pub(crate) fn uniform<F: Float>(rng: &mut SmallRng, lo: F, hi: F) -> F {
    let t: f32 = rng.gen();
    lo + (hi - lo) * F::from_f32(t)
}

/// Uniform sample in `[-max, max)`.
pub(crate) fn symmetric<F: Float>(rng: &mut SmallRng, max: F) -> F {
    uniform(rng, -max, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(anchor: Anchor<f32>) -> Ragdoll<f32> {
        Ragdoll::new(anchor, Stage::new(400.0, 800.0), RagdollConfig::new(), 1).unwrap()
    }

    #[test]
    fn scale_uses_tighter_axis() {
        assert_eq!(Anchor::new(0.0f32, 0.0, 80.0, 60.0).scale(), 1.0);
        assert_eq!(Anchor::new(0.0f32, 0.0, 80.0, 180.0).scale(), 2.0);
    }

    #[test]
    fn reference_layout_fits_anchor() {
        let doll = build(Anchor::new(100.0, 100.0, 40.0, 60.0));
        for p in doll.particles() {
            assert!(p.left() >= 100.0 && p.right() <= 140.0);
            assert!(p.pos.y - p.half_height() >= 100.0 && p.bottom() <= 160.0);
        }
    }

    #[test]
    fn rest_lengths_follow_scale() {
        let small = build(Anchor::new(0.0, 0.0, 40.0, 60.0));
        let big = build(Anchor::new(0.0, 0.0, 80.0, 120.0));
        for (a, b) in small.joints.iter().zip(big.joints.iter()) {
            assert!((b.rest_length - 2.0 * a.rest_length).abs() < 1e-4);
        }
    }

    #[test]
    fn head_joint_slot() {
        let doll = build(Anchor::new(0.0, 0.0, 40.0, 60.0));
        let j = &doll.joints[HEAD_JOINT];
        assert_eq!((j.a, j.b), (Part::Head, Part::Torso));
    }

    #[test]
    fn uniform_respects_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v: f32 = uniform(&mut rng, 0.5, 1.0);
            assert!((0.5..=1.0).contains(&v));
        }
        assert_eq!(uniform(&mut rng, 2.0f32, 2.0), 2.0);
    }
}
