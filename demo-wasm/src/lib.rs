use ragdoll::{Anchor, NoOpStepObserver, Ragdoll, RagdollConfig, Stage, Vec2, PART_COUNT};
use wasm_bindgen::prelude::*;

/// Floats per part in [`RagdollDemo::poses`].
const POSE_STRIDE: usize = 5;

// ---- Crash Demo ----

#[wasm_bindgen]
pub struct RagdollDemo {
    doll: Ragdoll<f32>,
    ticks: u32,
}

#[wasm_bindgen]
impl RagdollDemo {
    /// Spawn a ragdoll over the runner's bounding box.
    #[wasm_bindgen(constructor)]
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        ground_y: f32,
        stage_width: f32,
        seed: u32,
    ) -> Result<RagdollDemo, JsError> {
        let doll = Ragdoll::new(
            Anchor::new(x, y, width, height),
            Stage::new(ground_y, stage_width),
            RagdollConfig::new(),
            u64::from(seed),
        )
        .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(RagdollDemo { doll, ticks: 0 })
    }

    /// Returns whether the head came off.
    pub fn apply_impulse(&mut self, fx: f32, fy: f32) -> Result<bool, JsError> {
        self.doll
            .apply_impulse(Vec2::new(fx, fy))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn update(&mut self) {
        self.doll.step(&mut NoOpStepObserver);
        self.ticks += 1;
    }

    pub fn is_settled(&self) -> bool {
        self.doll.is_settled()
    }

    pub fn head_detached(&self) -> bool {
        self.doll.head_detached()
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.doll.kinetic_energy()
    }

    /// Returns flat [x, y, angle, width, height] per part in draw order
    pub fn poses(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(PART_COUNT * POSE_STRIDE);
        for pose in self.doll.poses().iter() {
            out.push(pose.pos.x);
            out.push(pose.pos.y);
            out.push(pose.angle);
            out.push(pose.width);
            out.push(pose.height);
        }
        out
    }

    /// Part names in the same order as [`RagdollDemo::poses`].
    pub fn part_name(&self, index: usize) -> Option<String> {
        ragdoll::Part::ALL.get(index).map(|p| p.name().to_string())
    }

    pub fn part_count(&self) -> usize {
        PART_COUNT
    }
}
