use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding vertex failed: {kind}")]
pub struct AddVertexError<V> {
    pub attr: V,
    pub kind: AddVertexErrorKind,
}

impl<V> AddVertexError<V> {
    pub fn new(attr: V) -> Self {
        Self {
            attr,
            kind: AddVertexErrorKind::CapacityOverflow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddVertexErrorKind {
    CapacityOverflow,
}

impl fmt::Display for AddVertexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddVertexErrorKind::CapacityOverflow => "the graph has exhausted its capacity",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError {
    pub kind: AddEdgeErrorKind,
}

impl AddEdgeError {
    pub fn new(kind: AddEdgeErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

/// Error returned by algorithms that require their vertex arguments to be
/// present in the graph.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
#[error("invalid argument: {kind}")]
pub struct InvalidArgumentError {
    pub kind: InvalidArgumentKind,
}

impl InvalidArgumentError {
    pub fn new(kind: InvalidArgumentKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidArgumentKind {
    /// Start vertex was not given or is not in the graph.
    StartAbsent,
    /// End vertex was not given or is not in the graph.
    EndAbsent,
}

impl fmt::Display for InvalidArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            InvalidArgumentKind::StartAbsent => "start vertex does not exist",
            InvalidArgumentKind::EndAbsent => "end vertex does not exist",
        };
        f.write_str(reason)
    }
}
