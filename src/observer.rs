//! Step observer trait for monitoring the ragdoll step pipeline.

use crate::part::Part;

/// Trait for observing ragdoll simulation steps.
///
/// Implement this trait to watch the solver (e.g., for debugging overlays,
/// sound cues on impact, or profiling). All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called after every part has been accelerated, damped and moved.
    fn on_integrate(&mut self) {}

    /// Called when a part is pushed back above the ground line.
    fn on_ground_contact(&mut self, _part: Part) {}

    /// Called when a part is pushed back inside the side walls.
    fn on_wall_contact(&mut self, _part: Part) {}

    /// Called after each constraint relaxation pass.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
