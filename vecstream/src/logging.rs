//! Types and traits related to logging stream pipeline events.

use std::rc::Rc;

use vecstream_logging::BufferingLogger;

/// Logger for events of a stream pipeline.
pub type CollectionLogger = Rc<BufferingLogger<StreamSetup, CollectionEvent>>;

/// Identifies the pipeline that produced an event.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct StreamSetup {
    /// Caller-chosen pipeline identifier.
    pub pipeline: usize,
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
/// An operator that derived one stream from another.
pub struct OperatorEvent {
    /// The operator name, for example `"filter"`.
    pub name: &'static str,
    /// Number of elements in the input stream.
    pub input: usize,
    /// Number of elements in the produced stream.
    pub output: usize,
}

impl OperatorEvent {
    /// Creates a new operator event.
    pub fn new(name: &'static str, input: usize, output: usize) -> Self {
        OperatorEvent { name, input, output }
    }
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
/// An operation that read a stream down to a single value.
pub struct TerminalEvent {
    /// The operation name, for example `"reduce"`.
    pub name: &'static str,
    /// Number of elements in the input stream.
    pub input: usize,
}

/// Pipeline event types.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum CollectionEvent {
    /// An operator produced a stream.
    Operator(OperatorEvent),
    /// A terminal operation consumed a stream.
    Terminal(TerminalEvent),
}

impl From<OperatorEvent> for CollectionEvent {
    fn from(v: OperatorEvent) -> CollectionEvent { CollectionEvent::Operator(v) }
}

impl From<TerminalEvent> for CollectionEvent {
    fn from(v: TerminalEvent) -> CollectionEvent { CollectionEvent::Terminal(v) }
}
