// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Facial structure of combinatorial planar embeddings.
//!
//! Given a connected planar graph, the crate enumerates the catalog of its
//! structurally distinct simple cycles, seeds an embedding with the longest
//! one, and inserts the remaining edges as gamma chains, splitting one
//! facet per chain until every edge is embedded. The result is the list of
//! closed boundary walks of the embedding's faces, consistent with Euler's
//! formula `V - E + F = 2`.
//!
//! # Architecture
//!
//! Two components, leaves first:
//!
//! - [`graph`]: the graph model — vertex range, undirected edge list,
//!   symmetric adjacency, and an immutable cycle catalog computed eagerly
//!   at construction. Edge mutation does not refresh the catalog; rebuild
//!   the graph when an up-to-date catalog is needed.
//! - [`facet`]: the facet builder — consumes a built [`graph::Graph`] and
//!   returns the facet list of one embedding.
//!
//! The catalog search is exhaustive and exponential in the worst case, and
//! planarity is assumed rather than verified: inputs are small,
//! interactively entered graphs. Non-decomposable input is reported as
//! [`Error::StructuralInconsistency`].
//!
//! # Example
//!
//! ```
//! use planar_facets::facet;
//! use planar_facets::graph::Graph;
//!
//! let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)])?;
//! let facets = facet::facets(&graph)?;
//! assert_eq!(facets.len(), 2);
//! # Ok::<(), planar_facets::Error>(())
//! ```

pub mod console;
pub mod error;
pub mod facet;
pub mod graph;

pub use error::{Error, Result};
