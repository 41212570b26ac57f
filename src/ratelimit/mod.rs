//! Sliding-window admission control logic and state management.

mod clock;
mod registry;
mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use registry::{LimitKey, LimiterRegistry};
pub use window::SlidingWindow;
