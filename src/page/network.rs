use crate::logging::{LogBus, LogRecord};
use serde::{Deserialize, Serialize};

/// Connection state as reported by online/offline events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkStatus {
    Online,
    Offline,
}

impl NetworkStatus {
    pub fn record(&self) -> LogRecord {
        match self {
            NetworkStatus::Online => LogRecord::success("Network connection restored"),
            NetworkStatus::Offline => LogRecord::error("Network connection lost"),
        }
    }
}

pub fn on_status_change(status: NetworkStatus, bus: &LogBus) {
    bus.emit(status.record());
}
