//! Simple buffered event logging.
//!
//! A [`BufferingLogger`] accumulates `(time, setup, event)` records and hands them to an
//! action in batches, either once its buffer fills up or when the logger is dropped. The
//! time is the elapsed duration since the logger was constructed, and the setup is a value
//! identifying whoever produced the events.

#![forbid(missing_docs)]

use std::cell::RefCell;
use std::time::{Duration, Instant};

/// The number of records buffered before a batch is pushed, unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Logging methods
pub trait Logger {
    /// The type of loggable record.
    type Record;
    /// Adds `record` to the log.
    fn log(&self, record: Self::Record);
}

/// A batch of records handed to the action of a [`BufferingLogger`].
pub enum LoggerBatch<'a, S, L> {
    /// Buffered records, in the order they were logged.
    Logs(&'a [(Duration, S, L)]),
    /// The logger is shutting down; no further batches follow.
    End,
}

enum BufferingLoggerInternal<S, L> {
    Active {
        setup: S,
        time: Instant,
        capacity: usize,
        buffer: RefCell<Vec<(Duration, S, L)>>,
        action: RefCell<Box<dyn FnMut(LoggerBatch<S, L>)>>,
    },
    Inactive,
}

/// A logger that stamps and buffers records before pushing them to an action.
pub struct BufferingLogger<S: Clone, L> {
    internal: BufferingLoggerInternal<S, L>,
}

impl<S: Clone, L> BufferingLogger<S, L> {
    /// Creates a logger with [`DEFAULT_CAPACITY`].
    pub fn new(setup: S, action: Box<dyn FnMut(LoggerBatch<S, L>)>) -> Self {
        Self::with_capacity(setup, DEFAULT_CAPACITY, action)
    }

    /// Creates a logger that pushes a batch whenever `capacity` records are buffered.
    ///
    /// A capacity of zero is treated as one, pushing every record as it arrives.
    pub fn with_capacity(setup: S, capacity: usize, action: Box<dyn FnMut(LoggerBatch<S, L>)>) -> Self {
        let capacity = capacity.max(1);
        BufferingLogger {
            internal: BufferingLoggerInternal::Active {
                setup,
                time: Instant::now(),
                capacity,
                buffer: RefCell::new(Vec::with_capacity(capacity)),
                action: RefCell::new(action),
            },
        }
    }

    /// Creates a logger that discards everything.
    pub fn new_inactive() -> Self {
        BufferingLogger {
            internal: BufferingLoggerInternal::Inactive,
        }
    }

    /// Returns `true` unless the logger discards its records.
    pub fn is_active(&self) -> bool {
        matches!(self.internal, BufferingLoggerInternal::Active { .. })
    }

    /// Stamps and buffers `event`, pushing a batch if the buffer reached capacity.
    pub fn log(&self, event: L) {
        if let BufferingLoggerInternal::Active { setup, time, capacity, buffer, action } = &self.internal {
            let mut buf = buffer.borrow_mut();
            buf.push((time.elapsed(), setup.clone(), event));
            if buf.len() >= *capacity {
                (*action.borrow_mut())(LoggerBatch::Logs(&buf));
                buf.clear();
            }
        }
    }

    /// Pushes any buffered records to the action.
    pub fn flush(&self) {
        if let BufferingLoggerInternal::Active { buffer, action, .. } = &self.internal {
            let mut buf = buffer.borrow_mut();
            if !buf.is_empty() {
                (*action.borrow_mut())(LoggerBatch::Logs(&buf));
                buf.clear();
            }
        }
    }
}

impl<S: Clone, L> Logger for BufferingLogger<S, L> {
    type Record = L;
    fn log(&self, record: L) {
        BufferingLogger::log(self, record)
    }
}

impl<S: Clone, L> Drop for BufferingLogger<S, L> {
    fn drop(&mut self) {
        self.flush();
        if let BufferingLoggerInternal::Active { action, .. } = &self.internal {
            (*action.borrow_mut())(LoggerBatch::End);
        }
    }
}
