// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crate error type.

use thiserror::Error;

/// Errors reported by graph construction and facet search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A construction argument referenced an impossible edge: a self-loop,
    /// or an endpoint outside the vertex range.
    #[error("edge ({u}, {v}) is not valid for a graph with {vertex_count} vertices")]
    InvalidInput {
        u: usize,
        v: usize,
        vertex_count: usize,
    },

    /// The embedding cannot be completed for this input. Terminal: the
    /// algorithm is deterministic, so retrying reproduces the failure.
    #[error("structural inconsistency: {detail}")]
    StructuralInconsistency { detail: String },
}

impl Error {
    pub(crate) fn structural(detail: impl Into<String>) -> Self {
        Error::StructuralInconsistency {
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
