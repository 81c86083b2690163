// ============================================================
// Layer 6 — System Clock
// ============================================================
// The wall clock, in the machine's local time zone. This is
// the only place real-world time enters the guide.

use chrono::{Local, NaiveDateTime};

use crate::domain::traits::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
