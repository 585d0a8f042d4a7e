//! Defines animations interpolating a numeric value toward a target over time.

mod animator;
mod easing;
mod request;
mod tween;

pub use animator::{AnimationHandle, AnimationStatus, Animator};
pub use easing::Easing;
pub use request::AnimationRequest;
pub use tween::{EasingFn, Tween};
