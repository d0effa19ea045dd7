//! Concrete calendar implementations.

/// Japan (national holidays plus weekends).
pub mod japan;

pub use japan::JapanCalendar;
