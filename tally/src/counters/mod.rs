//! Defines counters: animated numbers rendered as text.

mod counter;
mod format;

pub use counter::Counter;
pub use format::NumberFormat;
