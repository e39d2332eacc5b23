//! Domain entities: core data structures

use crate::exitcode::ExitStatus;

/// A subway route, e.g. `Red` / "Red Line".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Short case-sensitive identifier (`Green-B`)
    pub id: String,
    pub long_name: String,
}

/// A station along a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub name: String,
}

/// Result of a single query, before it becomes an exit status.
///
/// An empty result is a valid answer from the service (the filter matched
/// nothing) and is kept apart from a transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Items in the order the service returned them
    Success(Vec<T>),
    EmptySuccess,
    TransportFailure,
}

impl<T> Outcome<T> {
    /// Build an outcome from a decoded item list.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Outcome::EmptySuccess
        } else {
            Outcome::Success(items)
        }
    }

    /// Items, present only for `Success`.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Outcome::Success(items) => Some(items),
            Outcome::EmptySuccess | Outcome::TransportFailure => None,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Outcome::Success(_) => ExitStatus::Success,
            Outcome::EmptySuccess => ExitStatus::NoOutput,
            Outcome::TransportFailure => ExitStatus::NonSuccessResponse,
        }
    }
}
