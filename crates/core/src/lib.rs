#![forbid(unsafe_code)]

pub mod countdown;
pub mod model;
pub mod time;

pub use countdown::{Countdown, CountdownTick, DEFAULT_SECONDS_PER_QUESTION, TimerTicket};
pub use time::Clock;
