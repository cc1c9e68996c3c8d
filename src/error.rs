//! Error types for ragdoll construction and setup.

use core::fmt;

/// Errors that can occur while building or kicking off a ragdoll.
///
/// Stepping, settling and drawing never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RagdollError {
    /// Anchor box must be finite with positive width and height.
    InvalidAnchor,
    /// Ground line must be finite and stage width positive and finite.
    InvalidStage,
    /// Impulse components must be finite.
    InvalidImpulse,
    /// The impulse may only be applied once per ragdoll.
    ImpulseAlreadyApplied,
    /// A coefficient is non-finite, or a damping or restitution factor is outside [0, 1].
    InvalidCoefficient { name: &'static str },
    /// Detach probability must be in [0, 1].
    InvalidProbability,
    /// At least one relaxation pass is required.
    InvalidIterations,
    /// Impulse jitter range must satisfy 0 < min <= max.
    InvalidJitter,
    /// Texture key is not one of the known part groups.
    UnknownPart,
}

impl fmt::Display for RagdollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RagdollError::InvalidAnchor => {
                write!(f, "anchor box must be finite with positive width and height")
            }
            RagdollError::InvalidStage => {
                write!(f, "ground line must be finite and stage width positive")
            }
            RagdollError::InvalidImpulse => write!(f, "impulse must be finite"),
            RagdollError::ImpulseAlreadyApplied => write!(f, "impulse was already applied"),
            RagdollError::InvalidCoefficient { name } => {
                write!(f, "coefficient `{}` is out of range", name)
            }
            RagdollError::InvalidProbability => write!(f, "detach probability must be in [0, 1]"),
            RagdollError::InvalidIterations => write!(f, "at least one relaxation pass is required"),
            RagdollError::InvalidJitter => write!(f, "jitter range must satisfy 0 < min <= max"),
            RagdollError::UnknownPart => write!(f, "unknown part group name"),
        }
    }
}
