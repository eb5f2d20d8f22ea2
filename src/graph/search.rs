// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive enumeration of structurally distinct simple cycles.
//!
//! From every start vertex a depth-first walk tries to return to its start.
//! The walk marks the vertices on its current path, blocks the edge it just
//! crossed so it cannot immediately retrace it, and leaves the start vertex
//! unmarked so the path may close back onto it. Every closure with at least
//! two intermediate vertices is a candidate cycle; candidates already in
//! the catalog as a rotation, in either traversal direction, are dropped.
//!
//! The search explores every simple path from every start vertex, so it is
//! exponential in the branching factor. Inputs are small, interactively
//! entered graphs.

use tracing::trace;

use super::cycle::contains_rotation;
use super::{Cycle, Edge};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Not on the current path; may be stepped onto.
    Fresh,
    /// On the current path.
    OnPath,
}

/// Walk state and accumulators for one catalog search.
pub(crate) struct CycleSearch<'a> {
    vertex_count: usize,
    edges: &'a [Edge],
    mark: Vec<Mark>,
    path: Vec<usize>,
    catalog: Vec<Cycle>,
}

impl<'a> CycleSearch<'a> {
    pub(crate) fn new(vertex_count: usize, edges: &'a [Edge]) -> Self {
        Self {
            vertex_count,
            edges,
            mark: vec![Mark::Fresh; vertex_count],
            path: Vec::new(),
            catalog: Vec::new(),
        }
    }

    /// Run the search from every start vertex and return the catalog.
    pub(crate) fn run(mut self) -> Vec<Cycle> {
        for start in 0..self.vertex_count {
            self.mark.fill(Mark::Fresh);
            self.path.clear();
            self.visit(start, start, None);
        }
        trace!(cycles = self.catalog.len(), "cycle search finished");
        self.catalog
    }

    /// One depth-first step at `u`, never re-crossing the edge `blocked`.
    ///
    /// Recursion depth is bounded by the vertex count: every call past the
    /// root marks a distinct vertex.
    fn visit(&mut self, u: usize, start: usize, blocked: Option<usize>) {
        if u != start {
            self.mark[u] = Mark::OnPath;
        } else if self.path.len() >= 3 {
            self.record();
            return;
        }
        for index in 0..self.edges.len() {
            if blocked == Some(index) {
                continue;
            }
            let Some(next) = self.edges[index].other(u) else {
                continue;
            };
            if self.mark[next] != Mark::Fresh {
                continue;
            }
            self.path.push(next);
            self.visit(next, start, Some(index));
            self.path.pop();
            self.mark[next] = Mark::Fresh;
        }
    }

    /// Canonicalize the closed path and catalog it unless a rotation of
    /// it, in either direction, is already present.
    fn record(&mut self) {
        // The path holds [w1, .., wk, start]; bring the start to the front.
        let mut vertices = Vec::with_capacity(self.path.len());
        vertices.push(self.path[self.path.len() - 1]);
        vertices.extend_from_slice(&self.path[..self.path.len() - 1]);
        let candidate = Cycle::new(&vertices);
        if contains_rotation(&self.catalog, &candidate) {
            return;
        }
        if contains_rotation(&self.catalog, &candidate.reversed()) {
            return;
        }
        trace!(cycle = %candidate, "cataloged");
        self.catalog.push(candidate);
    }
}
