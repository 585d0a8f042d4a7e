//! Runtime plumbing shared by the animations: task spawning and helpers.

pub use log;
pub use tokio;

pub use crate::utils::scale::Scalable;
pub use crate::utils::task::TaskHandler;

mod scale;
pub mod task;
