//! The error type shared by every fallible operation in this crate.
//!
//! There are three kinds, matching the three recognised at the boundary:
//! an argument that is wrong on its face (`InvalidArgument`), a positional
//! query past the end of a collection (`OutOfRange`), and a lookup by id
//! or name that does not resolve to a live entity (`NotFound`). Invariant
//! breaches internal to the crate (a neighbourhood entry pointing at a dead
//! vertex, a decomposition with a cycle) are programmer errors and panic
//! instead of flowing through this type.

use crate::ids::{EdgeId, VertexId};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("index {index} is out of range for a collection of length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("{0}")]
    NotFound(String),
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange { index, len }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(message.into())
    }

    pub fn empty_hyperedge() -> Self {
        Error::invalid_argument("a hyperedge must have at least one element")
    }

    pub fn unknown_vertex(v: VertexId) -> Self {
        Error::not_found(format!("vertex {v:?} is not live in this graph"))
    }

    pub fn unknown_edge(e: EdgeId) -> Self {
        Error::not_found(format!("edge {e:?} is not live in this graph"))
    }

    pub fn unknown_label(name: impl Into<String>) -> Self {
        let name = name.into();
        Error::not_found(format!("label {name:?} was not found in the existing label snapshot"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_vertex_is_a_not_found_error() {
        assert_eq!(
            Error::unknown_vertex(VertexId::new(7)),
            Error::NotFound("vertex VertexId(7) is not live in this graph".to_owned())
        );
    }

    #[test]
    fn empty_hyperedge_is_an_invalid_argument_error() {
        assert!(matches!(Error::empty_hyperedge(), Error::InvalidArgument(_)));
    }
}
