//! Page-load timing

use crate::logging::LogBus;
use instant::Instant;
use serde::{Deserialize, Serialize};

/// Navigation timing counters, in milliseconds on a shared clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTiming {
    pub navigation_start: u64,
    pub load_event_end: u64,
}

impl NavigationTiming {
    pub fn new(navigation_start: u64, load_event_end: u64) -> Self {
        Self {
            navigation_start,
            load_event_end,
        }
    }

    /// Milliseconds from navigation start to the end of the load event.
    /// Negative when the load event has not finished yet.
    pub fn page_load_ms(&self) -> i64 {
        self.load_event_end as i64 - self.navigation_start as i64
    }

    pub fn message(&self) -> String {
        format!("Page load time: {:.2}s", self.page_load_ms() as f64 / 1000.0)
    }
}

/// Records navigation start and produces [`NavigationTiming`] once the page
/// has loaded.
#[derive(Debug, Clone, Copy)]
pub struct PageLoadClock {
    started: Instant,
}

impl PageLoadClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn finish(&self) -> NavigationTiming {
        let elapsed = self.started.elapsed().as_millis();
        NavigationTiming::new(0, u64::try_from(elapsed).unwrap_or(u64::MAX))
    }
}

impl Default for PageLoadClock {
    fn default() -> Self {
        Self::start()
    }
}

/// Report the page load time. Pages without timing information log nothing.
pub fn on_load(timing: Option<&NavigationTiming>, bus: &LogBus) {
    if let Some(timing) = timing {
        bus.info(timing.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogRecord;

    #[test]
    fn test_message_has_two_decimals() {
        assert_eq!(
            NavigationTiming::new(1_000, 2_234).message(),
            "Page load time: 1.23s"
        );
        assert_eq!(NavigationTiming::new(0, 500).message(), "Page load time: 0.50s");
        assert_eq!(NavigationTiming::new(0, 12_000).message(), "Page load time: 12.00s");
    }

    #[test]
    fn test_on_load_logs_info() {
        let bus = LogBus::new();
        let rx = bus.subscribe();

        on_load(Some(&NavigationTiming::new(100, 1_600)), &bus);
        on_load(None, &bus);

        let records: Vec<LogRecord> = rx.try_iter().collect();
        assert_eq!(records, vec![LogRecord::info("Page load time: 1.50s")]);
    }

    #[test]
    fn test_clock_measures_forward() {
        let clock = PageLoadClock::start();
        let timing = clock.finish();
        assert_eq!(timing.navigation_start, 0);
        assert!(timing.page_load_ms() >= 0);
    }
}
