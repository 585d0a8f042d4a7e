use std::fmt::{Display, Formatter};

use crate::animations::{AnimationHandle, AnimationRequest, Animator, Easing, Tween};
use crate::counters::NumberFormat;
use crate::errors::Error;

/// Represents a number counting up (or down) to a target value, rendered as text.
///
/// This is the typical "statistics" widget: when displayed, the number quickly rolls from zero
/// to its actual value. Each frame is formatted with the counter [`NumberFormat`] and handed to a
/// render callback; the last rendered text is always the formatted target.
///
/// Defaults: starts from 0, lasts 1500ms, `Easing::QuadOut`, no decimals.
///
/// # Example
/// ```
/// use tally::animations::Animator;
/// use tally::counters::{Counter, NumberFormat};
///
/// #[tally::runtime]
/// async fn main() {
///     let followers = Counter::new(1_234_567.0).set_format(NumberFormat::Grouped);
///     assert_eq!(followers.text_at(1500), "1,234,567");
///
///     followers
///         .play(&Animator::default(), |text| println!("{}", text))
///         .unwrap();
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Counter {
    tween: Tween,
    /// The time (in ms) to wait before the counter starts rolling.
    delay: u64,
    format: NumberFormat,
}

impl Counter {
    pub const DEFAULT_DURATION: u64 = 1500;

    /// Creates a counter rolling from 0 to `target`.
    pub fn new(target: f64) -> Self {
        Self {
            tween: Tween::from_parts(0.0, target, Self::DEFAULT_DURATION)
                .set_easing(Easing::QuadOut),
            delay: 0,
            format: NumberFormat::default(),
        }
    }

    /// Starts rolling the counter: `render` receives the text of each frame.
    ///
    /// # Errors
    /// `RuntimeError` when not running inside `#[tally::runtime]`.
    pub fn play<F>(&self, animator: &Animator, mut render: F) -> Result<AnimationHandle, Error>
    where
        F: FnMut(String) + Send + 'static,
    {
        let format = self.format;
        let request = AnimationRequest::from(self.tween.clone())
            .set_delay(self.delay)
            .on_frame(move |value| render(format.format(value)));
        animator.run(request)
    }

    /// Returns the text displayed `elapsed` milliseconds after the counter started rolling.
    pub fn text_at(&self, elapsed: u64) -> String {
        self.format.format(self.tween.value_at(elapsed))
    }

    pub fn get_tween(&self) -> &Tween {
        &self.tween
    }
    pub fn get_delay(&self) -> u64 {
        self.delay
    }
    pub fn get_format(&self) -> NumberFormat {
        self.format
    }

    pub fn set_start(mut self, start: f64) -> Self {
        self.tween = self.tween.set_start(start);
        self
    }

    /// Sets how long (in ms) the counter rolls.
    ///
    /// # Errors
    /// `InvalidArgument` if `duration` is 0ms.
    pub fn set_duration(mut self, duration: u64) -> Result<Self, Error> {
        self.tween = self.tween.set_duration(duration)?;
        Ok(self)
    }

    pub fn set_delay(mut self, delay: u64) -> Self {
        self.delay = delay;
        self
    }
    pub fn set_easing(mut self, easing: Easing) -> Self {
        self.tween = self.tween.set_easing(easing);
        self
    }
    pub fn set_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }
}

impl Display for Counter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Counter [{} -> {} in {}ms, delay={}ms, format={}]",
            self.format.format(self.tween.get_start()),
            self.format.format(self.tween.get_target()),
            self.tween.get_duration(),
            self.delay,
            self.format
        )
    }
}
