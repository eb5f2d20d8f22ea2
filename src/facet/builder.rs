// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Facet construction by iterative chain insertion.
//!
//! The longest cataloged cycle seeds the embedding with two facets, one
//! for each side of the walk. Every remaining edge then enters as part of
//! a gamma chain: the first facet whose boundary holds both chain
//! endpoints is split at those endpoints, the chain is spliced into both
//! halves, and the facet list grows by exactly one. When the pool is
//! empty the facet list satisfies `F = E - V + 2` and every edge borders
//! exactly two facets.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Cycle, Graph};

use super::chain::extract_chain;
use super::subgraph::EmbeddedSubgraph;
use super::Facet;

/// Compute the facets of a connected planar graph.
///
/// Fails with [`Error::StructuralInconsistency`] when the input has no
/// cycle to seed the embedding, is disconnected, or cannot be decomposed
/// by greedy chain insertion (non-planar input).
pub fn facets(graph: &Graph) -> Result<Vec<Facet>> {
    let seed = seed_cycle(graph)?;
    debug!(seed = %seed, "seed cycle selected");
    let seed_edges = seed.edges();

    let mut remaining: Vec<_> = graph
        .edges()
        .iter()
        .filter(|edge| !seed_edges.contains(edge))
        .copied()
        .collect();

    let mut facets = vec![
        Facet::new(seed.vertices().to_vec()),
        Facet::new(seed.vertices().to_vec()),
    ];
    let mut embedded = EmbeddedSubgraph::new(graph.vertex_count());
    for edge in &seed_edges {
        embedded.insert_edge(edge.u(), edge.v());
    }

    while !remaining.is_empty() {
        let chain = extract_chain(&embedded, &mut remaining)?;
        for pair in chain.windows(2) {
            embedded.insert_edge(pair[0], pair[1]);
        }
        split(&mut facets, &chain)?;
        debug_assert_eq!(
            facets.len(),
            embedded.edge_count() + 2 - embedded.vertex_count()
        );
    }
    Ok(facets)
}

/// The seed cycle: the longest cataloged cycle, taking the first of
/// maximal length in catalog order.
fn seed_cycle(graph: &Graph) -> Result<&Cycle> {
    graph
        .cycles()
        .iter()
        .find(|cycle| graph.cycles().iter().all(|other| cycle.len() >= other.len()))
        .ok_or_else(|| Error::structural("cycle catalog is empty; nothing to seed the embedding"))
}

/// Replace the first facet holding both chain endpoints with the two
/// facets obtained by splitting its walk at the endpoints and splicing
/// the chain in, once per direction.
fn split(facets: &mut Vec<Facet>, chain: &[usize]) -> Result<()> {
    let first = chain[0];
    let last = chain[chain.len() - 1];
    let mut found = None;
    for (position, facet) in facets.iter().enumerate() {
        if let (Some(i0), Some(i1)) = (facet.index_of(first), facet.index_of(last)) {
            found = Some((position, i0, i1));
            break;
        }
    }
    let Some((position, i0, i1)) = found else {
        return Err(Error::structural(format!(
            "no facet bounds both chain endpoints {first} and {last}"
        )));
    };
    let facet = facets.remove(position);

    // Forward arc from the chain head, closed by the reversed chain; the
    // head would appear at both ends, so the leading copy is dropped.
    let mut half_a = arc(&facet, i0, i1);
    half_a.extend(chain.iter().rev().copied());
    half_a.remove(0);

    let mut half_b = arc(&facet, i1, i0);
    half_b.extend(chain.iter().copied());
    half_b.remove(0);

    facets.push(Facet::new(half_a));
    facets.push(Facet::new(half_b));
    Ok(())
}

/// The walk from index `from` forward (cyclically) up to, excluding,
/// index `to`.
fn arc(facet: &Facet, from: usize, to: usize) -> Vec<usize> {
    let walk = facet.vertices();
    let mut out = Vec::new();
    let mut index = from;
    while index != to {
        out.push(walk[index]);
        index = (index + 1) % walk.len();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_bounds_two_faces() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let facets = facets(&graph).unwrap();
        assert_eq!(facets.len(), 2);
        for facet in &facets {
            let mut vertices = facet.vertices().to_vec();
            vertices.sort_unstable();
            assert_eq!(vertices, vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_seed_cycle_is_first_of_maximal_length() {
        let graph =
            Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 2)]).unwrap();
        let seed = seed_cycle(&graph).unwrap();
        assert_eq!(seed.len(), 4);
    }

    #[test]
    fn test_acyclic_graph_cannot_seed() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert!(matches!(
            facets(&graph),
            Err(Error::StructuralInconsistency { .. })
        ));
    }

    #[test]
    fn test_split_at_adjacent_endpoints() {
        let mut list = vec![Facet::new(vec![0, 1, 2, 3])];
        split(&mut list, &[0, 4, 1]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].vertices(), &[1, 4, 0]);
        assert_eq!(list[1].vertices(), &[2, 3, 0, 4, 1]);
    }

    #[test]
    fn test_split_without_a_shared_facet_fails() {
        let mut list = vec![Facet::new(vec![0, 1, 2]), Facet::new(vec![3, 4, 5])];
        let result = split(&mut list, &[0, 4]);
        assert!(matches!(result, Err(Error::StructuralInconsistency { .. })));
    }
}
