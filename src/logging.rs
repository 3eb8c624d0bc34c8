//! Log bus shared by every page behavior
//!
//! Behaviors report what they did as `{level, message}` records. Anyone can
//! subscribe, either with a channel receiver or a callback. Emitting never
//! blocks and never fails, whether there are zero subscribers or many.

use crate::core::constants::LOG_CHANNEL;
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

impl LogLevel {
    /// The matching `log` crate level; `Success` has no counterpart and maps to info
    pub fn as_log_level(&self) -> log::Level {
        match self {
            LogLevel::Info | LogLevel::Success => log::Level::Info,
            LogLevel::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// One record on the bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }
}

type Callback = Arc<dyn Fn(&LogRecord) + Send + Sync>;

enum Subscriber {
    Channel(Sender<LogRecord>),
    Callback(Callback),
}

/// Publish/subscribe channel for [`LogRecord`]s.
///
/// Clones share the same subscriber list, so the composition root can hand
/// a clone to every behavior it builds.
#[derive(Clone, Default)]
pub struct LogBus {
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl fmt::Debug for LogBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl LogBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe with an unbounded channel. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<LogRecord> {
        let (tx, rx) = unbounded();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(Subscriber::Channel(tx));
        }
        rx
    }

    /// Subscribe with a callback invoked synchronously on every emit
    pub fn subscribe_fn<F>(&self, callback: F)
    where
        F: Fn(&LogRecord) + Send + Sync + 'static,
    {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(Subscriber::Callback(Arc::new(callback)));
        }
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .ok()
            .map(|subscribers| subscribers.len())
            .unwrap_or(0)
    }

    /// Deliver a record to every subscriber in subscription order.
    pub fn emit(&self, record: LogRecord) {
        log::log!(target: LOG_CHANNEL, record.level.as_log_level(), "{}", record.message);

        // Callbacks run after the lock is released so they may emit themselves.
        let callbacks: Vec<Callback> = match self.subscribers.lock() {
            Ok(mut subscribers) => {
                subscribers.retain(|subscriber| match subscriber {
                    Subscriber::Channel(tx) => tx.send(record.clone()).is_ok(),
                    Subscriber::Callback(_) => true,
                });
                subscribers
                    .iter()
                    .filter_map(|subscriber| match subscriber {
                        Subscriber::Callback(callback) => Some(Arc::clone(callback)),
                        Subscriber::Channel(_) => None,
                    })
                    .collect()
            }
            Err(_) => return,
        };

        for callback in callbacks {
            callback(&record);
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(LogRecord::info(message));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.emit(LogRecord::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(LogRecord::error(message));
    }
}
