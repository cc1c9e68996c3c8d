//! Per-tick integration, collision response and joint relaxation.

use crate::float::Float;
use crate::observer::StepObserver;
use crate::part::Part;
use crate::skeleton::{symmetric, Ragdoll};
use crate::vec::Vec2;

/// Damping and contact coefficients for one part this tick.
#[derive(Copy, Clone)]
struct Response<F: Float> {
    friction: F,
    angular_friction: F,
    bounce: F,
    ground_friction: F,
    ground_spin_friction: F,
    sleep_speed: F,
}

/// Allowed center range for a part of half-width `half` between the walls.
fn wall_limits<F: Float>(width: F, half: F) -> (F, F) {
    let lo = half;
    let hi = width - half;
    if hi < lo {
        let mid = width * F::half();
        (mid, mid)
    } else {
        (lo, hi)
    }
}

impl<F: Float> Ragdoll<F> {
    /// Advance the simulation by one tick.
    ///
    /// Every part is accelerated by gravity, damped, moved and pushed back out
    /// of the ground and walls; then the active joints get
    /// `config.iterations` relaxation passes. A final positional clamp keeps
    /// relaxation from leaving anything below the floor or past a wall.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        let gravity = Vec2::new(F::zero(), self.config.gravity);
        for part in Part::ALL {
            let r = self.response(part);
            let p = &mut self.particles[part.index()];
            p.accelerate(gravity);
            p.damp(r.friction, r.angular_friction);
            p.integrate();
        }
        observer.on_integrate();

        for part in Part::ALL {
            self.collide_ground(part, observer);
            self.collide_walls(part, observer);
        }

        for pass in 0..self.config.iterations {
            for joint in self.joints.iter() {
                joint.relax(&mut self.particles);
            }
            observer.on_relaxation_pass(pass);
        }

        self.project_into_stage();

        if !self.settled && self.at_rest() {
            self.settled = true;
            tracing::trace!(energy = self.kinetic_energy().to_f64(), "ragdoll settled");
        }
        observer.on_step_complete();
    }

    /// True once a step has ended with every part slower than
    /// `config.settle_speed` on both axes and lying on the ground.
    ///
    /// Latches: after the first such step it stays true until another
    /// impulse is applied. Spin is ignored.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Every part slow and within `contact_slop` of the ground line.
    fn at_rest(&self) -> bool {
        let threshold = self.config.settle_speed;
        let floor = self.stage.ground_y - self.config.contact_slop;
        self.particles
            .iter()
            .all(|p| p.is_resting(threshold) && p.bottom() >= floor)
    }

    fn is_loose_head(&self, part: Part) -> bool {
        part == Part::Head && self.head_detached
    }

    fn response(&self, part: Part) -> Response<F> {
        let c = &self.config;
        if self.is_loose_head(part) {
            Response {
                friction: c.head.friction,
                angular_friction: c.head.angular_friction,
                bounce: c.head.bounce,
                ground_friction: c.head.ground_friction,
                ground_spin_friction: c.head.ground_spin_friction,
                sleep_speed: c.head.sleep_speed,
            }
        } else {
            Response {
                friction: c.friction,
                angular_friction: c.angular_friction,
                bounce: c.bounce,
                ground_friction: c.ground_friction,
                ground_spin_friction: c.ground_spin_friction,
                sleep_speed: c.sleep_speed,
            }
        }
    }

    fn collide_ground<O: StepObserver>(&mut self, part: Part, observer: &mut O) {
        let r = self.response(part);
        let rolls = self.is_loose_head(part);
        let ground = self.stage.ground_y;
        let p = &mut self.particles[part.index()];
        if p.bottom() <= ground {
            return;
        }

        p.pos.y = ground - p.half_height();
        p.vel.y = -p.vel.y.abs() * r.bounce;
        p.vel.x = p.vel.x * r.ground_friction;
        p.angular_vel = p.angular_vel * r.ground_spin_friction;
        if p.vel.y.abs() < r.sleep_speed {
            p.vel.y = F::zero();
            // cheap rolling: a grounded head turns instead of sliding flat
            if rolls {
                p.angular_vel = p.angular_vel + p.vel.x * self.config.head.roll_factor;
            }
        }
        observer.on_ground_contact(part);
    }

    fn collide_walls<O: StepObserver>(&mut self, part: Part, observer: &mut O) {
        let spins = self.is_loose_head(part);
        let bounce = self.config.wall_bounce;
        let p = &mut self.particles[part.index()];
        let (lo, hi) = wall_limits(self.stage.width, p.half_width());

        if p.pos.x < lo {
            p.pos.x = lo;
            p.vel.x = p.vel.x.abs() * bounce;
        } else if p.pos.x > hi {
            p.pos.x = hi;
            p.vel.x = -p.vel.x.abs() * bounce;
        } else {
            return;
        }

        if spins {
            p.angular_vel = p.angular_vel + symmetric(&mut self.rng, self.config.head.wall_spin);
        }
        observer.on_wall_contact(part);
    }

    fn project_into_stage(&mut self) {
        let ground = self.stage.ground_y;
        let width = self.stage.width;
        for p in self.particles.iter_mut() {
            let max_y = ground - p.half_height();
            if p.pos.y > max_y {
                p.pos.y = max_y;
            }
            let (lo, hi) = wall_limits(width, p.half_width());
            p.pos.x = p.pos.x.clamp(lo, hi);
        }
    }
}
