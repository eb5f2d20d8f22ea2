// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Undirected simple graph with an eagerly computed cycle catalog.

use tracing::debug;

use crate::error::{Error, Result};

use super::search::CycleSearch;
use super::{Cycle, Edge};

/// An undirected simple graph over vertices `0..vertex_count`.
///
/// The adjacency structure is kept as the symmetric closure of the edge
/// list: whenever `v` adjoins `u`, `u` adjoins `v`.
///
/// The cycle catalog is computed once at construction and is immutable
/// thereafter. Edge mutation via [`add_edge`](Graph::add_edge) or
/// [`remove_edge`](Graph::remove_edge) does not refresh it; rebuild the
/// graph when an up-to-date catalog is needed.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
    catalog: Vec<Cycle>,
}

impl Graph {
    /// Build a graph from an edge list.
    ///
    /// Duplicate edges, in either orientation, are ignored. Fails with
    /// [`Error::InvalidInput`] on a self-loop or an endpoint outside
    /// `0..vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::bare(vertex_count);
        for &(u, v) in edges {
            graph.insert_edge(u, v)?;
        }
        graph.search_cycles();
        Ok(graph)
    }

    /// Build a graph from per-vertex neighbor lists.
    ///
    /// `adjacency[v]` lists the neighbors of `v`; each undirected edge may
    /// appear in one or both directions. The stored adjacency is rebuilt as
    /// the symmetric closure of the derived edge set, so a one-directional
    /// entry still produces a symmetric graph.
    pub fn from_adjacency(vertex_count: usize, adjacency: &[Vec<usize>]) -> Result<Self> {
        let mut graph = Self::bare(vertex_count);
        for (u, neighbors) in adjacency.iter().enumerate() {
            for &v in neighbors {
                graph.insert_edge(u, v)?;
            }
        }
        graph.search_cycles();
        Ok(graph)
    }

    fn bare(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
            catalog: Vec::new(),
        }
    }

    fn search_cycles(&mut self) {
        self.catalog = CycleSearch::new(self.vertex_count, &self.edges).run();
        debug!(
            vertices = self.vertex_count,
            edges = self.edges.len(),
            cycles = self.catalog.len(),
            "graph constructed"
        );
    }

    /// Number of vertices; vertices are numbered `0..vertex_count`.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of `vertex` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Check whether the edge is present, in either orientation.
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.edges.contains(&Edge::new(u, v))
    }

    /// The catalog of structurally distinct simple cycles, computed at
    /// construction. Not refreshed by edge mutation.
    pub fn cycles(&self) -> &[Cycle] {
        &self.catalog
    }

    /// Add an edge. Idempotent: a no-op if the edge already exists in
    /// either orientation. Does not recompute the cycle catalog.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.insert_edge(u, v)
    }

    /// Remove an edge, in either orientation. Idempotent: a no-op if the
    /// edge is absent. Does not recompute the cycle catalog.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        let target = Edge::new(u, v);
        let Some(position) = self.edges.iter().position(|edge| *edge == target) else {
            return;
        };
        let stored = self.edges.remove(position);
        if let Some(i) = self.adjacency[stored.u()]
            .iter()
            .position(|&n| n == stored.v())
        {
            self.adjacency[stored.u()].remove(i);
        }
        if let Some(i) = self.adjacency[stored.v()]
            .iter()
            .position(|&n| n == stored.u())
        {
            self.adjacency[stored.v()].remove(i);
        }
    }

    /// Grow the vertex range by `count`; the new vertices start isolated.
    pub fn add_vertices(&mut self, count: usize) {
        self.vertex_count += count;
        self.adjacency.resize(self.vertex_count, Vec::new());
    }

    fn insert_edge(&mut self, u: usize, v: usize) -> Result<()> {
        if u == v || u >= self.vertex_count || v >= self.vertex_count {
            return Err(Error::InvalidInput {
                u,
                v,
                vertex_count: self.vertex_count,
            });
        }
        let edge = Edge::new(u, v);
        if self.edges.contains(&edge) {
            return Ok(());
        }
        self.edges.push(edge);
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        Ok(())
    }
}
