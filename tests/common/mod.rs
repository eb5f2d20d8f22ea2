// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared fixtures and assertions for the scenario tests.

#![allow(dead_code)]

use std::collections::HashMap;

use planar_facets::facet::Facet;
use planar_facets::graph::{Cycle, Edge, Graph};

/// A 7-vertex graph with two Hamiltonian cycles; 11 edges, so a full
/// embedding has 6 faces.
pub fn seven_vertex_edges() -> Vec<(usize, usize)> {
    vec![
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 0),
        (0, 3),
        (2, 4),
        (5, 6),
        (4, 6),
        (1, 4),
    ]
}

/// A ten-vertex ring carrying a hanging triangle block on three extra
/// vertices; 13 vertices and 15 edges, so a full embedding has 4 faces.
pub fn ring_with_pendant_block_edges() -> Vec<(usize, usize)> {
    vec![
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 8),
        (8, 9),
        (9, 0),
        (0, 10),
        (10, 11),
        (10, 12),
        (5, 11),
        (11, 12),
    ]
}

/// Assert the facet list is a complete face set for the graph: the Euler
/// count holds, every walk step is a graph edge, and every graph edge
/// borders exactly two facets.
pub fn assert_face_structure(graph: &Graph, facets: &[Facet]) {
    let vertices = graph.vertex_count();
    let edges = graph.edges().len();
    assert_eq!(facets.len(), edges - vertices + 2, "facet count");

    let boundary: usize = facets.iter().map(Facet::len).sum();
    assert_eq!(boundary, 2 * edges, "total boundary length");

    let mut borders: HashMap<Edge, usize> = HashMap::new();
    for facet in facets {
        let walk = facet.vertices();
        for i in 0..walk.len() {
            let u = walk[i];
            let v = walk[(i + 1) % walk.len()];
            assert!(
                graph.contains_edge(u, v),
                "walk step {u}-{v} is not a graph edge"
            );
            *borders.entry(Edge::new(u, v)).or_insert(0) += 1;
        }
    }
    assert_eq!(borders.len(), edges, "every edge appears on a boundary");
    for (edge, count) in borders {
        assert_eq!(
            count,
            2,
            "edge {}-{} borders {count} facets",
            edge.u(),
            edge.v()
        );
    }
}

/// Assert the catalog holds a cycle equivalent to the given walk.
pub fn assert_catalog_has(catalog: &[Cycle], vertices: &[usize]) {
    let target = Cycle::new(vertices);
    assert!(
        catalog.iter().any(|cycle| cycle.is_equivalent(&target)),
        "no cataloged cycle is equivalent to {target}"
    );
}
