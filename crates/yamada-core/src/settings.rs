//! Per-session settings.
//!
//! [`Session`] holds the **evaluation date**: the date treated as "today"
//! when answering questions such as "what is the next holiday?".  It is an
//! explicit value handed to whoever needs it, so two callers can hold
//! different "todays" at the same time (a test pinned to 2024-12-01 next to a
//! CLI run using the system clock).
//!
//! The date is stored as a day serial (days since 1970-01-01) so that this
//! crate stays independent of the date type in `yamada-time`.

/// Session context carrying the evaluation date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    evaluation_date: Option<i64>,
}

impl Session {
    /// A session that follows the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session pinned to the given evaluation-date serial.
    pub fn pinned(serial: i64) -> Self {
        Session {
            evaluation_date: Some(serial),
        }
    }

    /// Return the evaluation date serial, or `None` if the session follows
    /// the system clock.
    pub fn evaluation_date_serial(&self) -> Option<i64> {
        self.evaluation_date
    }

    /// Return the evaluation date serial, asking `today` for it when unset.
    pub fn evaluation_date_serial_or_else(&self, today: impl FnOnce() -> i64) -> i64 {
        self.evaluation_date.unwrap_or_else(today)
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&mut self, serial: i64) {
        self.evaluation_date = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&mut self) {
        self.evaluation_date = None;
    }
}
