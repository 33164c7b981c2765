//! Platform abstraction layer
//!
//! Turns host frame timing into fixed simulation ticks.

pub mod time;

pub use time::FixedTimestep;
