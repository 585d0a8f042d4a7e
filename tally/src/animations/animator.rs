use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace};
use parking_lot::{Mutex, RwLock};
use tokio::time::{Instant, MissedTickBehavior};

use crate::animations::request::{CompleteCallback, FrameCallback};
use crate::animations::{AnimationRequest, Tween};
use crate::errors::{Error, InvalidArgument};
use crate::utils::{task, TaskHandler};

/// Lists the states of a running animation.
///
/// An animation is created `Running`; both `Completed` and `Cancelled` are terminal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Frames are (or will be, after the delay) delivered.
    Running,
    /// The target was delivered and `on_complete` invoked.
    Completed,
    /// The animation was cancelled before completion: nothing more is delivered.
    Cancelled,
}

impl Display for AnimationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            AnimationStatus::Running => "running",
            AnimationStatus::Completed => "completed",
            AnimationStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", status)
    }
}

/// Plays [`AnimationRequest`]s: each one runs as its own task, ticking at the animator frame rate
/// until the target is reached.
///
/// Frames are scheduled on a tokio interval: a late frame is skipped rather than bursted, and
/// the value of each frame is computed from the real elapsed time, so a slow consumer only
/// lowers the frame rate, never the speed of the animation.
///
/// # Example
/// ```
/// use tally::animations::{AnimationRequest, Animator, Easing};
///
/// #[tally::runtime]
/// async fn main() {
///     let animator = Animator::default();
///
///     let request = AnimationRequest::new(0.0, 42.0, 200)
///         .unwrap()
///         .set_easing(Easing::QuadOut)
///         .on_frame(|value| println!("{:.0}", value))
///         .on_complete(|| println!("done"));
///
///     // The runtime waits for the animation to be done before exiting.
///     animator.run(request).unwrap();
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animator {
    /// The number of frames per second (default: 60, never 0).
    /// - Higher fps results in smoother animations.
    /// - Desired `fps` is not guaranteed to be reached (specially high fps values).
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_fps"))]
    fps: u8,
}

impl Default for Animator {
    fn default() -> Self {
        Self { fps: 60 }
    }
}

impl Animator {
    /// Starts playing the request and returns a handle to follow or cancel it.
    ///
    /// # Errors
    /// `RuntimeError` when not running inside `#[tally::runtime]`.
    pub fn run(&self, request: AnimationRequest) -> Result<AnimationHandle, Error> {
        let AnimationRequest {
            tween,
            delay,
            on_frame,
            on_complete,
        } = request;

        debug!("Animation starts: {} (delay={}ms)", tween, delay);

        let name = format!("Animation {}", tween);
        let shared = Arc::new(Shared::default());
        let mut playback = Playback {
            tween,
            on_frame,
            on_complete: Some(on_complete),
            shared: shared.clone(),
        };
        let period = self.get_period();

        let handler = task::run_named(name, async move {
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            let started = Instant::now();
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            // The first tick fires immediately: the first frame is the start value.
            loop {
                interval.tick().await;
                let elapsed = started.elapsed().as_millis() as u64;
                if !playback.step(elapsed) {
                    break;
                }
            }
        })?;

        *shared.handler.lock() = Some(handler);
        Ok(AnimationHandle { shared })
    }

    /// Returns the time between two frames.
    pub fn get_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    pub fn get_fps(&self) -> u8 {
        self.fps
    }

    /// Sets the frame rate.
    ///
    /// # Errors
    /// `InvalidArgument` if `fps` is 0.
    pub fn set_fps(mut self, fps: u8) -> Result<Self, Error> {
        if fps == 0 {
            return Err(InvalidArgument {
                info: String::from("fps must be greater than 0"),
            });
        }
        self.fps = fps;
        Ok(self)
    }
}

/// Rejects a deserialized frame rate of 0, as `set_fps` does.
#[cfg(feature = "serde")]
fn deserialize_fps<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let fps = <u8 as serde::Deserialize>::deserialize(deserializer)?;
    if fps == 0 {
        return Err(serde::de::Error::custom("fps must be greater than 0"));
    }
    Ok(fps)
}

/// State shared between a running animation and its handles.
///
/// No lock here is ever held while a user callback runs: callbacks may freely cancel their own
/// animation or any other one.
#[derive(Debug)]
struct Shared {
    status: RwLock<AnimationStatus>,
    handler: Mutex<Option<TaskHandler>>,
}

impl Default for Shared {
    fn default() -> Self {
        Self {
            status: RwLock::new(AnimationStatus::Running),
            handler: Mutex::new(None),
        }
    }
}

impl Shared {
    fn get_status(&self) -> AnimationStatus {
        *self.status.read()
    }

    /// Moves from `Running` to `status`: returns false if the animation was already done.
    fn finish(&self, status: AnimationStatus) -> bool {
        let mut current = self.status.write();
        match *current {
            AnimationStatus::Running => {
                *current = status;
                true
            }
            _ => false,
        }
    }
}

/// The task side of an animation: owns the tween and the callbacks.
struct Playback {
    tween: Tween,
    on_frame: FrameCallback,
    on_complete: Option<CompleteCallback>,
    shared: Arc<Shared>,
}

impl Playback {
    /// Delivers the frame for the given elapsed time; returns whether more frames are expected.
    ///
    /// The status is checked before the frame starts and again before completing: a cancel
    /// issued meanwhile (by `on_frame` itself or from elsewhere) wins over completion.
    fn step(&mut self, elapsed: u64) -> bool {
        if self.shared.get_status() != AnimationStatus::Running {
            return false;
        }

        let value = self.tween.value_at(elapsed);
        trace!("Animation frame at {}ms: {}", elapsed, value);
        (self.on_frame)(value);

        if !self.tween.is_done_at(elapsed) {
            return true;
        }

        if self.shared.finish(AnimationStatus::Completed) {
            debug!("Animation completed: {}", self.tween);
            if let Some(on_complete) = self.on_complete.take() {
                on_complete();
            }
        }
        false
    }
}

/// Handle on a running animation.
///
/// Handles are cheap to clone: all clones follow the same animation.
#[derive(Clone, Debug)]
pub struct AnimationHandle {
    shared: Arc<Shared>,
}

impl AnimationHandle {
    /// Cancels the animation.
    ///
    /// Once this returns, no new frame starts and `on_complete` will not be called. A frame
    /// already being delivered on another worker is not interrupted. Never blocks on the
    /// animation callbacks, so it can be called from any of them.
    ///
    /// Returns `true` if the animation was running, `false` if it was already completed or
    /// cancelled.
    pub fn cancel(&self) -> bool {
        let cancelled = self.shared.finish(AnimationStatus::Cancelled);
        if cancelled {
            if let Some(handler) = self.shared.handler.lock().take() {
                handler.abort();
            }
            debug!("Animation cancelled");
        }
        cancelled
    }

    /// Returns the current status of the animation.
    pub fn get_status(&self) -> AnimationStatus {
        self.shared.get_status()
    }

    /// Indicates if the animation is still delivering frames (or waiting for its delay).
    pub fn is_running(&self) -> bool {
        self.get_status() == AnimationStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use crate::animations::Easing;
    use crate::pause;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Frame(f64),
        Complete,
    }

    type Recorder = Arc<Mutex<Vec<Event>>>;

    fn recorded_request(request: AnimationRequest) -> (AnimationRequest, Recorder) {
        let events: Recorder = Arc::new(Mutex::new(vec![]));
        let frame_events = events.clone();
        let complete_events = events.clone();
        let request = request
            .on_frame(move |value| frame_events.lock().push(Event::Frame(value)))
            .on_complete(move || complete_events.lock().push(Event::Complete));
        (request, events)
    }

    fn frames(events: &[Event]) -> Vec<f64> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Frame(value) => Some(*value),
                Event::Complete => None,
            })
            .collect()
    }

    #[test]
    fn test_animator() {
        let animator = Animator::default();
        assert_eq!(animator.get_fps(), 60);
        assert_eq!(animator.get_period(), Duration::from_secs_f64(1.0 / 60.0));

        let animator = animator.set_fps(100).unwrap();
        assert_eq!(animator.get_fps(), 100);
        assert_eq!(animator.get_period(), Duration::from_millis(10));

        let error = animator.set_fps(0).unwrap_err();
        assert_eq!(error.to_string(), "Invalid argument: fps must be greater than 0.");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_animator_serde() {
        let animator: Animator = serde_json::from_str(r#"{"fps":30}"#).unwrap();
        assert_eq!(animator.get_fps(), 30);
        assert_eq!(
            serde_json::to_string(&Animator::default()).unwrap(),
            r#"{"fps":60}"#
        );

        let error = serde_json::from_str::<Animator>(r#"{"fps":0}"#).unwrap_err();
        assert!(error.to_string().contains("fps must be greater than 0"));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(AnimationStatus::Running.to_string(), "running");
        assert_eq!(AnimationStatus::Completed.to_string(), "completed");
        assert_eq!(AnimationStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_playback_step() {
        let (request, events) =
            recorded_request(AnimationRequest::new(0.0, 42.0, 1000).unwrap());
        let name = format!("Animation {}", request.tween);
        let shared = Arc::new(Shared::default());
        let mut playback = Playback {
            tween: request.tween,
            on_frame: request.on_frame,
            on_complete: Some(request.on_complete),
            shared: shared.clone(),
        };

        assert!(playback.step(0));
        assert!(playback.step(500));
        assert!(!playback.step(1000));
        assert_eq!(shared.get_status(), AnimationStatus::Completed);

        // Nothing is delivered once completed.
        assert!(!playback.step(1100));
        assert_eq!(
            *events.lock(),
            vec![
                Event::Frame(0.0),
                Event::Frame(21.0),
                Event::Frame(42.0),
                Event::Complete
            ]
        );
    }

    #[test]
    fn test_playback_step_after_cancel() {
        let (request, events) = recorded_request(AnimationRequest::new(0.0, 1.0, 100).unwrap());
        let name = format!("Animation {}", request.tween);
        let shared = Arc::new(Shared::default());
        let mut playback = Playback {
            tween: request.tween,
            on_frame: request.on_frame,
            on_complete: Some(request.on_complete),
            shared: shared.clone(),
        };
        let handle = AnimationHandle {
            shared: shared.clone(),
        };

        assert!(playback.step(10));
        assert!(handle.cancel());
        assert!(!handle.cancel(), "A cancelled animation cannot be cancelled twice");
        assert!(!playback.step(100));
        assert_eq!(frames(&events.lock()).len(), 1);
        assert!(!events.lock().contains(&Event::Complete));
        assert_eq!(handle.get_status(), AnimationStatus::Cancelled);
    }

    #[serial]
    #[tally_macros::test]
    async fn test_run_to_completion() {
        let (request, events) =
            recorded_request(AnimationRequest::new(0.0, 42.0, 200).unwrap());
        let handle = Animator::default().run(request).unwrap();
        assert!(handle.is_running());

        pause!(400);
        assert_eq!(handle.get_status(), AnimationStatus::Completed);
        assert!(!handle.cancel(), "Completed animation cannot be cancelled");

        let events = events.lock().clone();
        let values = frames(&events);
        assert!(values.len() > 2, "Several frames expected: {:?}", values);
        assert!(values[0] < 5.0, "First frame is close to the start value");
        assert_eq!(values.last(), Some(&42.0), "Last frame is exactly the target");
        assert!(
            values.windows(2).all(|pair| pair[0] <= pair[1]),
            "Linear frames never go backward: {:?}",
            values
        );

        // Complete is called once, right after the last frame.
        assert_eq!(
            events.iter().filter(|event| **event == Event::Complete).count(),
            1
        );
        assert_eq!(events.last(), Some(&Event::Complete));
    }

    #[serial]
    #[tally_macros::test]
    async fn test_run_exact_target_with_easing() {
        let (request, events) = recorded_request(
            AnimationRequest::new(0.1, 0.3, 100)
                .unwrap()
                .set_easing(Easing::ElasticOut),
        );
        Animator::default()
            .set_fps(100)
            .unwrap()
            .run(request)
            .unwrap();

        pause!(300);
        let values = frames(&events.lock());
        assert_eq!(values.last(), Some(&0.3));
    }

    #[serial]
    #[tally_macros::test]
    async fn test_run_cancel() {
        let (request, events) =
            recorded_request(AnimationRequest::new(0.0, 100.0, 500).unwrap());
        let handle = Animator::default().run(request).unwrap();

        pause!(100);
        assert!(handle.cancel());
        assert_eq!(handle.get_status(), AnimationStatus::Cancelled);
        // Lets a frame already in flight on another worker land.
        pause!(20);
        let delivered = events.lock().len();
        assert!(delivered > 0);

        pause!(600);
        let events = events.lock().clone();
        assert_eq!(events.len(), delivered, "No frame after cancel");
        assert!(!events.contains(&Event::Complete));
        assert!(!events.contains(&Event::Frame(100.0)));
    }

    #[serial]
    #[tally_macros::test]
    async fn test_run_cancel_from_callback() {
        let events: Recorder = Arc::new(Mutex::new(vec![]));
        let own_handle: Arc<Mutex<Option<AnimationHandle>>> = Arc::new(Mutex::new(None));

        let frame_events = events.clone();
        let complete_events = events.clone();
        let frame_handle = own_handle.clone();
        let request = AnimationRequest::new(0.0, 10.0, 300)
            .unwrap()
            .on_frame(move |value| {
                frame_events.lock().push(Event::Frame(value));
                if value >= 5.0 {
                    if let Some(handle) = frame_handle.lock().as_ref() {
                        handle.cancel();
                    }
                }
            })
            .on_complete(move || complete_events.lock().push(Event::Complete));

        let handle = Animator::default().run(request).unwrap();
        *own_handle.lock() = Some(handle.clone());

        pause!(500);
        assert_eq!(handle.get_status(), AnimationStatus::Cancelled);
        let events = events.lock().clone();
        assert!(!events.contains(&Event::Complete));
        let values = frames(&events);
        assert!(
            values.iter().filter(|value| **value >= 5.0).count() == 1,
            "Frames stop right after the cancelling one: {:?}",
            values
        );
    }

    #[serial]
    #[tally_macros::test]
    async fn test_run_cancel_each_other() {
        let first_slot: Arc<Mutex<Option<AnimationHandle>>> = Arc::new(Mutex::new(None));
        let second_slot: Arc<Mutex<Option<AnimationHandle>>> = Arc::new(Mutex::new(None));

        // Each animation, once past 5%, blocks its worker for a while then cancels the other.
        let cancel_other = |other: Arc<Mutex<Option<AnimationHandle>>>| {
            move |value: f64| {
                if value >= 5.0 {
                    std::thread::sleep(Duration::from_millis(50));
                    let handle = other.lock().clone();
                    if let Some(handle) = handle {
                        handle.cancel();
                    }
                }
            }
        };

        let animator = Animator::default();
        let first = animator
            .run(
                AnimationRequest::new(0.0, 100.0, 2000)
                    .unwrap()
                    .on_frame(cancel_other(second_slot.clone())),
            )
            .unwrap();
        let second = animator
            .run(
                AnimationRequest::new(0.0, 100.0, 2000)
                    .unwrap()
                    .on_frame(cancel_other(first_slot.clone())),
            )
            .unwrap();
        *first_slot.lock() = Some(first.clone());
        *second_slot.lock() = Some(second.clone());

        pause!(600);
        assert!(
            first.get_status() == AnimationStatus::Cancelled
                || second.get_status() == AnimationStatus::Cancelled,
            "At least one animation got cancelled by the other"
        );

        // Cancelling from outside still goes through: the runtime is not stuck.
        first.cancel();
        second.cancel();
        assert!(!first.is_running());
        assert!(!second.is_running());
    }

    #[serial]
    #[tally_macros::test]
    async fn test_run_delay() {
        let (request, events) =
            recorded_request(AnimationRequest::new(0.0, 1.0, 100).unwrap().set_delay(200));
        let handle = Animator::default().run(request).unwrap();

        pause!(100);
        assert!(handle.is_running());
        assert!(events.lock().is_empty(), "Nothing delivered during the delay");

        pause!(400);
        assert_eq!(handle.get_status(), AnimationStatus::Completed);
        assert_eq!(events.lock().last(), Some(&Event::Complete));
    }

    #[serial]
    #[tally_macros::test]
    async fn test_run_cancel_during_delay() {
        let (request, events) =
            recorded_request(AnimationRequest::new(0.0, 1.0, 100).unwrap().set_delay(200));
        let handle = Animator::default().run(request).unwrap();

        pause!(50);
        assert!(handle.cancel());
        pause!(400);
        assert!(events.lock().is_empty());
    }

    #[serial]
    #[tally_macros::test]
    async fn test_run_concurrent_animations() {
        let animator = Animator::default();
        let (first, first_events) =
            recorded_request(AnimationRequest::new(0.0, 10.0, 150).unwrap());
        let (second, second_events) =
            recorded_request(AnimationRequest::new(100.0, -100.0, 250).unwrap());

        let first = animator.run(first).unwrap();
        let second = animator.run(second).unwrap();

        pause!(500);
        assert_eq!(first.get_status(), AnimationStatus::Completed);
        assert_eq!(second.get_status(), AnimationStatus::Completed);
        assert_eq!(frames(&first_events.lock()).last(), Some(&10.0));
        assert_eq!(frames(&second_events.lock()).last(), Some(&-100.0));
    }
}
