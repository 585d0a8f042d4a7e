use std::fmt::{Debug, Formatter};

use crate::animations::{Easing, Tween};
use crate::errors::Error;

pub(crate) type FrameCallback = Box<dyn FnMut(f64) + Send>;
pub(crate) type CompleteCallback = Box<dyn FnOnce() + Send>;

/// Represents a one-shot request to animate a value: a [`Tween`] plus the callbacks receiving the
/// animated values.
///
/// A request is created per trigger (a counter becoming visible, a result being displayed, etc.)
/// and consumed by [`Animator::run`](crate::animations::Animator::run): it cannot be replayed.
///
/// - `on_frame` receives the current value on each frame; the last value delivered is exactly
///   the target.
/// - `on_complete` is called once, after the last frame, unless the animation gets cancelled.
///
/// # Example
/// ```
/// use tally::animations::{AnimationRequest, Easing};
///
/// let request = AnimationRequest::new(0.0, 42.0, 1000)
///     .unwrap()
///     .set_easing(Easing::QuadOut)
///     .on_frame(|value| println!("current: {value}"))
///     .on_complete(|| println!("done"));
/// assert_eq!(request.value_at(1000), 42.0);
/// ```
pub struct AnimationRequest {
    pub(crate) tween: Tween,
    /// The time (in ms) to wait before the first frame.
    pub(crate) delay: u64,
    pub(crate) on_frame: FrameCallback,
    pub(crate) on_complete: CompleteCallback,
}

impl AnimationRequest {
    /// Creates a linear animation request with no-op callbacks.
    ///
    /// # Errors
    /// `InvalidArgument` if `duration` is 0ms.
    pub fn new(start: f64, target: f64, duration: u64) -> Result<Self, Error> {
        Ok(Self::from(Tween::new(start, target, duration)?))
    }

    /// Samples the value the animation delivers `elapsed` milliseconds after its start.
    pub fn value_at(&self, elapsed: u64) -> f64 {
        self.tween.value_at(elapsed)
    }

    /// Samples the (non-eased) progress `elapsed` milliseconds after its start.
    pub fn progress_at(&self, elapsed: u64) -> f32 {
        self.tween.progress_at(elapsed)
    }

    pub fn get_tween(&self) -> &Tween {
        &self.tween
    }
    pub fn get_delay(&self) -> u64 {
        self.delay
    }

    /// Delays the first frame by `delay` milliseconds.
    pub fn set_delay(mut self, delay: u64) -> Self {
        self.delay = delay;
        self
    }

    /// Uses one of the preset easing functions.
    pub fn set_easing(mut self, easing: Easing) -> Self {
        self.tween = self.tween.set_easing(easing);
        self
    }

    /// Uses a custom easing function (see [`Tween::set_easing_fn`]).
    pub fn set_easing_fn<F>(mut self, easing: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        self.tween = self.tween.set_easing_fn(easing);
        self
    }

    /// Registers the callback receiving each frame value.
    pub fn on_frame<F>(mut self, callback: F) -> Self
    where
        F: FnMut(f64) + Send + 'static,
    {
        self.on_frame = Box::new(callback);
        self
    }

    /// Registers the callback invoked once the target has been delivered.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Box::new(callback);
        self
    }
}

impl From<Tween> for AnimationRequest {
    fn from(tween: Tween) -> Self {
        Self {
            tween,
            delay: 0,
            on_frame: Box::new(|_| {}),
            on_complete: Box::new(|| {}),
        }
    }
}

impl Debug for AnimationRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationRequest")
            .field("tween", &self.tween)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}
