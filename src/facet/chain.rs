// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gamma-chain extraction from the pool of unembedded edges.
//!
//! A gamma chain is a path whose first and last vertices already belong to
//! the embedded subgraph and whose interior vertices, if any, do not.
//!
//! Candidate edges are scanned in pool order; the first edge whose first
//! endpoint is embedded starts a chain. If its second endpoint is embedded
//! too, the chain is that single chord. Otherwise a walk leaves the
//! embedded region over pool edges, taking the first pool edge that
//! extends it at every step and never backtracking, until it reaches an
//! embedded vertex again. A walk that dies off the embedded region
//! abandons its candidate untouched and the scan moves on. The pool
//! ordering is therefore part of the algorithm's observable behavior.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Edge;

use super::subgraph::EmbeddedSubgraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Not yet walked; may be stepped onto.
    Fresh,
    /// Consumed by the walk.
    Visited,
    /// The walk's starting vertex; embedded, but not a terminator.
    Origin,
}

/// Extract one gamma chain from `remaining`, removing the edges it
/// consumes in either orientation.
///
/// Fails with [`Error::StructuralInconsistency`] when no candidate chain
/// reaches back into the embedded subgraph while edges remain.
pub(crate) fn extract_chain(
    embedded: &EmbeddedSubgraph,
    remaining: &mut Vec<Edge>,
) -> Result<Vec<usize>> {
    let mut index = 0;
    while index < remaining.len() {
        let candidate = remaining[index];
        if !embedded.contains(candidate.u()) {
            index += 1;
            continue;
        }
        if embedded.contains(candidate.v()) {
            let chain = vec![candidate.u(), candidate.v()];
            remaining.remove(index);
            debug!(?chain, "extracted chord");
            return Ok(chain);
        }
        if let Some(chain) = walk(candidate.u(), embedded, remaining) {
            for pair in chain.windows(2) {
                let used = Edge::new(pair[0], pair[1]);
                if let Some(position) = remaining.iter().position(|edge| *edge == used) {
                    remaining.remove(position);
                }
            }
            debug!(?chain, "extracted chain");
            return Ok(chain);
        }
        index += 1;
    }
    Err(Error::structural(format!(
        "no chain reaches the embedded subgraph; {} edges remain",
        remaining.len()
    )))
}

/// First-match walk from `start` over the pool, ending on the first
/// embedded vertex reached. Returns `None` if the walk dies off the
/// embedded region; the pool is left untouched in that case.
fn walk(start: usize, embedded: &EmbeddedSubgraph, remaining: &[Edge]) -> Option<Vec<usize>> {
    let mut mark = vec![Mark::Fresh; embedded.capacity()];
    mark[start] = Mark::Origin;
    let mut chain = vec![start];
    let mut here = start;
    loop {
        if embedded.contains(here) && mark[here] != Mark::Origin {
            return Some(chain);
        }
        mark[here] = Mark::Visited;
        let step = remaining
            .iter()
            .find_map(|edge| edge.other(here).filter(|&next| mark[next] == Mark::Fresh));
        match step {
            Some(next) => {
                chain.push(next);
                here = next;
            }
            None => return None,
        }
    }
}
