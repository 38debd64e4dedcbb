/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Reading graphs in edge-list format.
//!
//! The first line contains the number of vertices `N` and the number of
//! edges `M`. Vertices are named `"0"`, `"1"`, …, `"N-1"`. Each of the
//! following `M` lines contains three integers `A B D`: if `D` is 1 there is
//! an arc from `A` to `B`; if `D` is 2 there are arcs in both directions. Any
//! other direction is an error.
//!
//! Blank lines are skipped. If the input ends before `M` edges have been
//! read, the graph contains the edges read so far; lines after the `M`-th
//! edge are ignored. Repeated edges are merged.

use crate::graph::Graph;
use std::io::BufRead;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while reading a graph.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot read the graph")]
    Io(#[from] std::io::Error),
    #[error("Missing header with the number of vertices and edges")]
    MissingHeader,
    #[error("Line {line}: expected {expected} integers, found {found}")]
    WrongArity {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: cannot parse {token:?} as an integer")]
    ParseInt {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Line {line}: vertex {vertex} does not exist (the graph has {num_nodes} vertices)")]
    VertexOutOfRange {
        line: usize,
        vertex: i64,
        num_nodes: usize,
    },
    #[error("Line {line}: malformed direction {direction} (expected 1 or 2)")]
    MalformedDirection { line: usize, direction: i64 },
}

/// Parses the whitespace-separated integers of a line, checking that there
/// are exactly `expected` of them.
fn parse_tokens<T: FromStr<Err = ParseIntError>>(
    line: &str,
    line_number: usize,
    expected: usize,
) -> Result<Vec<T>, InputError> {
    let tokens = line
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| InputError::ParseInt {
                line: line_number,
                token: token.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<T>, _>>()?;

    if tokens.len() != expected {
        return Err(InputError::WrongArity {
            line: line_number,
            expected,
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

fn vertex(value: i64, line: usize, num_nodes: usize) -> Result<usize, InputError> {
    usize::try_from(value)
        .ok()
        .filter(|&node| node < num_nodes)
        .ok_or(InputError::VertexOutOfRange {
            line,
            vertex: value,
            num_nodes,
        })
}

/// Reads a graph in edge-list format.
///
/// No graph is returned if the input is malformed, so that no computation
/// can start on a partially read graph.
pub fn read_graph(reader: impl BufRead) -> Result<Graph, InputError> {
    // Line numbers start from one
    let mut lines = (1..).zip(reader.lines()).filter(|(_, line)| match line {
        Ok(line) => !line.trim().is_empty(),
        Err(_) => true,
    });

    let (header_number, header) = lines.next().ok_or(InputError::MissingHeader)?;
    let header = parse_tokens::<usize>(&header?, header_number, 2)?;
    let (num_nodes, num_edges) = (header[0], header[1]);

    let mut graph = Graph::with_nodes(num_nodes);

    for (line_number, line) in lines.take(num_edges) {
        let edge = parse_tokens::<i64>(&line?, line_number, 3)?;
        let a = vertex(edge[0], line_number, num_nodes)?;
        let b = vertex(edge[1], line_number, num_nodes)?;
        match edge[2] {
            1 => {
                graph.add_arc(a, b);
            }
            2 => {
                graph.add_arc(a, b);
                graph.add_arc(b, a);
            }
            direction => {
                return Err(InputError::MalformedDirection {
                    line: line_number,
                    direction,
                })
            }
        }
    }

    Ok(graph)
}

/// Reads a graph in edge-list format from a string.
pub fn parse_graph(input: &str) -> Result<Graph, InputError> {
    read_graph(input.as_bytes())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_directions() -> anyhow::Result<()> {
        let graph = parse_graph("3 2\n0 1 1\n1 2 2\n")?;
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_arcs(), 3);
        assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.successors(2).collect::<Vec<_>>(), vec![1]);
        Ok(())
    }

    #[test]
    fn test_short_input() -> anyhow::Result<()> {
        let graph = parse_graph("2 5\n\n0 1 1\n")?;
        assert_eq!(graph.num_arcs(), 1);
        Ok(())
    }

    #[test]
    fn test_lines_after_last_edge_are_ignored() -> anyhow::Result<()> {
        let graph = parse_graph("2 1\n0 1 1\n1 0 3\n")?;
        assert_eq!(graph.num_arcs(), 1);
        assert_eq!(graph.successors(1).count(), 0);
        Ok(())
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse_graph(""), Err(InputError::MissingHeader)));
        assert!(matches!(
            parse_graph("2 1\n0 1 3\n"),
            Err(InputError::MalformedDirection {
                line: 2,
                direction: 3
            })
        ));
        assert!(matches!(
            parse_graph("2 1\n0 2 1\n"),
            Err(InputError::VertexOutOfRange { vertex: 2, .. })
        ));
        assert!(matches!(
            parse_graph("2 1\n0 -1 1\n"),
            Err(InputError::VertexOutOfRange { vertex: -1, .. })
        ));
        assert!(matches!(
            parse_graph("2\n"),
            Err(InputError::WrongArity { line: 1, .. })
        ));
        assert!(matches!(
            parse_graph("2 1\n0 x 1\n"),
            Err(InputError::ParseInt { line: 2, .. })
        ));
    }
}
