//! Crash-sequence ragdoll physics for 2D games.
//!
//! `ragdoll` turns a character's bounding box into ten rectangular body
//! segments held together by soft distance joints, blows them apart with a
//! single impulse and simulates them frame by frame until they come to rest.
//!
//! # Features
//!
//! - **Fixed skeleton**: head, torso, upper arms, forearms, thighs, shins
//! - **Soft joints**: iterative position relaxation, floppier at the extremities
//! - **Detachable head**: optionally tears loose and bounces and rolls on its own
//! - **Floor and walls**: restitution, ground friction and bounce sleeping
//! - **Settling query**: tells the caller when the crash is over
//! - **Renderer adapter**: textures per part group with flat-color fallback
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

pub mod float;
pub mod vec;
pub mod part;
pub mod particle;
pub mod joint;
pub mod skeleton;
pub mod impulse;
pub mod solver;
pub mod render;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use part::{Part, PartGroup, PART_COUNT};
pub use particle::Particle;
pub use joint::{Joint, JOINT_COUNT};
pub use skeleton::{Anchor, PartPose, Ragdoll, Stage};
pub use render::{Canvas, Color, NoTexture, NoTextures, Palette, Renderer, Texture, TextureMap, TextureSource};
pub use config::{HeadConfig, RagdollConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::RagdollError;
