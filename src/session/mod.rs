//! Session module for StudyFlow.
//!
//! This module contains the timer core:
//! - `machine`: Session state machine with cycle, streak and stats logic
//! - `clock`: Injected wall-clock abstraction for calendar-day streaks
//! - `ticker`: Single periodic tick source driving the machine

pub mod clock;
pub mod machine;
pub mod ticker;

pub use clock::{Clock, MockClock, SystemClock};
pub use machine::{next_streak, SessionEvent, SessionMachine};
pub use ticker::{Tick, TickSource, TICK_PERIOD};
