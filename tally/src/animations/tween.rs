use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use crate::animations::Easing;
use crate::errors::{Error, InvalidArgument};
use crate::utils::Scalable;

/// Shared easing function: any curve mapping a normalized progress to an eased progress.
pub type EasingFn = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

/// Represents the interpolation of a numeric value from `start` to `target` over `duration`
/// milliseconds, shaped by an easing function.
///
/// A `Tween` knows nothing about time passing: it only answers "what is the value after that
/// many milliseconds". The [`Animator`](crate::animations::Animator) feeds it with the clock.
///
/// # Example
/// ```
/// use tally::animations::{Easing, Tween};
///
/// let tween = Tween::new(0.0, 42.0, 1000).unwrap();
/// assert_eq!(tween.value_at(500), 21.0);
/// assert_eq!(tween.value_at(1000), 42.0);
///
/// let tween = tween.set_easing(Easing::QuadOut);
/// assert_eq!(tween.value_at(500), 31.5);
/// ```
#[derive(Clone)]
pub struct Tween {
    /// The value at progress 0.
    start: f64,
    /// The value at progress 1: always delivered as is.
    target: f64,
    /// The duration of the interpolation in milliseconds (always > 0).
    duration: u64,
    /// The easing preset, if the curve is a preset (used for display).
    preset: Option<Easing>,
    /// The easing curve.
    easing: EasingFn,
}

impl Tween {
    /// Creates a new linear `Tween`.
    ///
    /// # Errors
    /// `InvalidArgument` if `duration` is 0ms.
    pub fn new(start: f64, target: f64, duration: u64) -> Result<Self, Error> {
        if duration == 0 {
            return Err(InvalidArgument {
                info: String::from("duration must be greater than 0ms"),
            });
        }
        Ok(Self::from_parts(start, target, duration))
    }

    /// Inner constructor for already validated durations.
    pub(crate) fn from_parts(start: f64, target: f64, duration: u64) -> Self {
        debug_assert!(duration > 0);
        Self {
            start,
            target,
            duration,
            preset: Some(Easing::Linear),
            easing: Arc::new(|t: f32| t),
        }
    }

    /// Computes the progress (in `[0, 1]`) of the tween after `elapsed` milliseconds, before
    /// easing.
    pub fn progress_at(&self, elapsed: u64) -> f32 {
        let clamped = elapsed.min(self.duration) as f32;
        clamped.scale(0.0, self.duration as f32, 0.0, 1.0)
    }

    /// Computes the value of the tween after `elapsed` milliseconds.
    ///
    /// Once the duration is reached, the target is returned as is: no floating point residue.
    pub fn value_at(&self, elapsed: u64) -> f64 {
        if elapsed >= self.duration {
            return self.target;
        }
        let eased = (self.easing)(self.progress_at(elapsed)) as f64;
        eased.scale(0.0, 1.0, self.start, self.target)
    }

    /// Indicates whether the tween is done after `elapsed` milliseconds.
    pub fn is_done_at(&self, elapsed: u64) -> bool {
        elapsed >= self.duration
    }

    pub fn get_start(&self) -> f64 {
        self.start
    }
    pub fn get_target(&self) -> f64 {
        self.target
    }
    pub fn get_duration(&self) -> u64 {
        self.duration
    }
    /// Returns the easing preset, or `None` for a custom curve.
    pub fn get_easing(&self) -> Option<Easing> {
        self.preset
    }

    pub fn set_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }
    pub fn set_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    /// Sets the duration (in ms) of the tween.
    ///
    /// # Errors
    /// `InvalidArgument` if `duration` is 0ms.
    pub fn set_duration(mut self, duration: u64) -> Result<Self, Error> {
        if duration == 0 {
            return Err(InvalidArgument {
                info: String::from("duration must be greater than 0ms"),
            });
        }
        self.duration = duration;
        Ok(self)
    }

    /// Uses one of the preset easing functions.
    pub fn set_easing(mut self, easing: Easing) -> Self {
        self.preset = Some(easing);
        self.easing = Arc::new(move |t: f32| easing.call(t));
        self
    }

    /// Uses a custom easing function.
    ///
    /// The function is expected to map 0.0 to 0.0 and 1.0 to 1.0; it is not checked. Whatever it
    /// returns, the final value of the tween remains exactly the target.
    pub fn set_easing_fn<F>(mut self, easing: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        self.preset = None;
        self.easing = Arc::new(easing);
        self
    }
}

impl Debug for Tween {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("start", &self.start)
            .field("target", &self.target)
            .field("duration", &self.duration)
            .field("easing", &self.preset)
            .finish()
    }
}

impl Display for Tween {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tween [{} -> {} in {}ms, easing={}]",
            self.start,
            self.target,
            self.duration,
            match self.preset {
                Some(easing) => format!("{:?}", easing),
                None => String::from("Custom"),
            }
        )
    }
}
