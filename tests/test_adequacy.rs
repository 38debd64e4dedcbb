/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use scc_adequacy::prelude::*;
use scc_adequacy::threads;
use std::collections::BTreeSet;

/// Returns the verdicts of the two algorithms and of brute-force
/// reachability, checking that they agree.
fn adequate(graph: &Graph) -> bool {
    let kosaraju = sccs::kosaraju(graph, no_logging![]).is_adequate();
    let single_pass = sccs::single_pass(graph, no_logging![]).is_adequate();
    let brute = reachability::all_reachable(graph, &threads![2], no_logging![]);
    assert_eq!(kosaraju, single_pass);
    assert_eq!(kosaraju, brute);
    kosaraju
}

#[test]
fn test_cycle_is_adequate() -> Result<()> {
    let graph = parse_graph("3 3\n0 1 1\n1 2 1\n2 0 1\n")?;
    assert!(adequate(&graph));
    Ok(())
}

#[test]
fn test_two_way_streets() -> Result<()> {
    let graph = parse_graph("4 3\n0 1 2\n1 2 2\n2 3 2\n")?;
    assert!(adequate(&graph));

    let graph = parse_graph("4 3\n0 1 2\n1 2 2\n2 3 1\n")?;
    assert!(!adequate(&graph));
    Ok(())
}

#[test]
fn test_disconnected_is_inadequate() -> Result<()> {
    let graph = parse_graph("2 0\n")?;
    assert_eq!(graph.num_nodes(), 2);
    assert!(!adequate(&graph));
    Ok(())
}

#[test]
fn test_single_vertex_is_adequate() -> Result<()> {
    let graph = parse_graph("1 0\n")?;
    assert!(adequate(&graph));
    Ok(())
}

#[test]
fn test_empty_graph_is_inadequate() -> Result<()> {
    let graph = parse_graph("0 0\n")?;
    assert!(!adequate(&graph));
    Ok(())
}

#[test]
fn test_malformed_direction() {
    let result = parse_graph("3 2\n0 1 1\n1 2 3\n");
    assert!(matches!(
        result,
        Err(InputError::MalformedDirection {
            line: 3,
            direction: 3
        })
    ));
}

#[test]
fn test_duplicate_edges_are_merged() -> Result<()> {
    let graph = parse_graph("2 3\n0 1 1\n0 1 2\n1 0 1\n")?;
    assert_eq!(graph.num_arcs(), 2);
    assert!(adequate(&graph));
    Ok(())
}

#[test]
fn test_er_agreement() {
    for seed in 0..20 {
        let graph = Graph::erdos_renyi(12, 0.25, seed);
        adequate(&graph);
    }
}

#[test]
fn test_unreachable_pairs() {
    // 0 <-> 1 -> 2
    let graph = Graph::from_arcs([(0, 1), (1, 0), (1, 2)]);
    let pairs = reachability::unreachable_pairs(&graph, &threads![]);

    assert_eq!(pairs, vec![(2, BTreeSet::from([0, 1]))]);
    assert_eq!(reachability::unreachable(&graph, 2), BTreeSet::from([0, 1]));
    assert!(reachability::unreachable(&graph, 0).is_empty());
}
