#![doc(html_root_url = "https://docs.rs/tally/0.1.0")]

//! <h1 align="center">TALLY - Animated numeric counters</h1>
//! <div style="text-align:center;font-style:italic;">Tally rolls numbers toward their value, frame by frame - written in Rust.</div>
//! <br/>
//!
//! # Features
//!
//! **Tally** animates numeric values: given a start value, a target value, a duration and an
//! easing function, it produces the sequence of intermediate values over time, always ending
//! exactly on the target.
//!
//! - Describe the interpolation with a [`Tween`](animations::Tween) and sample it at any time
//! - Play [`AnimationRequest`](animations::AnimationRequest)s with an [`Animator`](animations::Animator):
//!   each one runs as its own task, ticking at the animator frame rate
//! - Follow or cancel running animations through their [`AnimationHandle`](animations::AnimationHandle)
//! - Shape the motion with any of the [`Easing`](animations::Easing) presets or with a custom curve
//! - Render "statistics" widgets with [`Counter`](counters::Counter)s and their [`NumberFormat`](counters::NumberFormat)
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! tally = "0.1.0"
//! ```
//!
//! The following code rolls a follower counter from 0 to 1,234,567 in 1.5s, printing each frame.
//! ```rust
//! use tally::animations::Animator;
//! use tally::counters::{Counter, NumberFormat};
//!
//! #[tally::runtime]
//! async fn main() {
//!     let animator = Animator::default();
//!
//!     Counter::new(1_234_567.0)
//!         .set_format(NumberFormat::Grouped)
//!         .play(&animator, |text| println!("{}", text))
//!         .unwrap();
//!
//!     // The runtime waits for the counter to be done before exiting.
//! }
//! ```
//!
//! # Feature flags
//!
//! - **serde** -- Enables serialize/deserialize capabilities for easings, formats and statuses.

#[cfg(test)]
extern crate self as tally;

pub mod animations;
pub mod counters;
pub mod errors;
pub mod utils;

pub use tally_macros::runtime;
