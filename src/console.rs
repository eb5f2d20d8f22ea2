// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Console entry for the `facets` binary.
//!
//! A prompt-driven loop: choose an entry kind, type the graph in as either
//! per-vertex neighbor lists or an edge list, read the facet listing, and
//! go again until quitting. Unparsable numbers are re-asked; end of input
//! quits. Generic over reader and writer so the loop is testable against
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::facet;
use crate::graph::Graph;

/// Parse a `U,V` edge argument.
pub fn parse_edge(text: &str) -> Result<(usize, usize), String> {
    let Some((u, v)) = text.split_once(',') else {
        return Err(format!("expected `U,V`, got `{text}`"));
    };
    let u = u
        .trim()
        .parse()
        .map_err(|_| format!("bad vertex `{}`", u.trim()))?;
    let v = v
        .trim()
        .parse()
        .map_err(|_| format!("bad vertex `{}`", v.trim()))?;
    Ok((u, v))
}

/// The interactive console loop.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read graphs and print their facets until the operator quits.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(
                self.output,
                "enter a graph (0 = adjacency list, 1 = edge list, 2 = quit)"
            )?;
            let Some(kind) = self.read_usize("entry kind")? else {
                break;
            };
            let graph = match kind {
                0 => match self.read_adjacency()? {
                    Some((vertices, adjacency)) => Graph::from_adjacency(vertices, &adjacency),
                    None => break,
                },
                1 => match self.read_edges()? {
                    Some((vertices, edges)) => Graph::from_edges(vertices, &edges),
                    None => break,
                },
                _ => break,
            };
            match graph.and_then(|graph| facet::facets(&graph)) {
                Ok(facets) => {
                    for (index, facet) in facets.iter().enumerate() {
                        writeln!(self.output, "facet {index}: {facet}")?;
                    }
                }
                Err(error) => writeln!(self.output, "error: {error}")?,
            }
        }
        Ok(())
    }

    /// Read one number, re-prompting on unparsable input. `None` at end
    /// of input.
    fn read_usize(&mut self, name: &str) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "{name}: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "not a number: {}", line.trim())?,
            }
        }
    }

    fn read_edges(&mut self) -> io::Result<Option<(usize, Vec<(usize, usize)>)>> {
        let Some(vertices) = self.read_usize("vertices")? else {
            return Ok(None);
        };
        let Some(count) = self.read_usize("edges")? else {
            return Ok(None);
        };
        let mut edges = Vec::with_capacity(count);
        for index in 0..count {
            let Some(u) = self.read_usize(&format!("edge {index} first endpoint"))? else {
                return Ok(None);
            };
            let Some(v) = self.read_usize(&format!("edge {index} second endpoint"))? else {
                return Ok(None);
            };
            edges.push((u, v));
        }
        Ok(Some((vertices, edges)))
    }

    fn read_adjacency(&mut self) -> io::Result<Option<(usize, Vec<Vec<usize>>)>> {
        let Some(vertices) = self.read_usize("vertices")? else {
            return Ok(None);
        };
        let mut adjacency = Vec::with_capacity(vertices);
        for vertex in 0..vertices {
            let Some(count) = self.read_usize(&format!("neighbors of {vertex}"))? else {
                return Ok(None);
            };
            let mut neighbors = Vec::with_capacity(count);
            for index in 0..count {
                let Some(neighbor) = self.read_usize(&format!("neighbor {index} of {vertex}"))?
                else {
                    return Ok(None);
                };
                neighbors.push(neighbor);
            }
            adjacency.push(neighbors);
        }
        Ok(Some((vertices, adjacency)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut output = Vec::new();
        Console::new(Cursor::new(script), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_edge() {
        assert_eq!(parse_edge("3,7"), Ok((3, 7)));
        assert_eq!(parse_edge(" 0 , 12 "), Ok((0, 12)));
        assert!(parse_edge("3").is_err());
        assert!(parse_edge("a,2").is_err());
    }

    #[test]
    fn test_edge_list_entry_prints_facets() {
        let output = run_script("1\n3\n3\n0\n1\n1\n2\n2\n0\n2\n");
        assert!(output.contains("facet 0:"));
        assert!(output.contains("facet 1:"));
        assert!(!output.contains("facet 2:"));
    }

    #[test]
    fn test_adjacency_entry_prints_facets() {
        let output = run_script("0\n3\n1\n1\n1\n2\n1\n0\n2\n");
        assert!(output.contains("facet 0:"));
        assert!(output.contains("facet 1:"));
    }

    #[test]
    fn test_unparsable_input_is_re_asked() {
        let output = run_script("abc\n1\n3\n3\n0\n1\n1\n2\n2\n0\n2\n");
        assert!(output.contains("not a number: abc"));
        assert!(output.contains("facet 1:"));
    }

    #[test]
    fn test_bad_graph_reports_error_and_continues() {
        let output = run_script("1\n2\n1\n0\n5\n2\n");
        assert!(output.contains("error:"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let output = run_script("");
        assert!(output.contains("enter a graph"));
    }
}
