/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Directed graphs with named vertices.
//!
//! A [`Graph`] maps vertex names to dense node indices, assigned in insertion
//! order, and keeps for each node the set of its successors. All algorithms of
//! this crate work on node indices; names are used only to build the graph and
//! to present results. Vertices are never removed, so an index, once
//! assigned, is valid for the whole life of the graph.

use indexmap::IndexSet;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A directed graph whose vertices are identified by name.
///
/// Successor sets do not contain duplicates, but self-loops are allowed.
/// Both vertices and successors are enumerated in insertion order, so all
/// visits on a graph are deterministic.
///
/// Two graphs are equal if they assign the same indices to the same names
/// and have the same successor sets.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: IndexSet<String>,
    successors: Vec<IndexSet<usize>>,
    num_arcs: usize,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Creates a graph with `num_nodes` vertices named `"0"`, `"1"`, … and
    /// no arcs.
    ///
    /// The vertex named `i.to_string()` has index `i`.
    pub fn with_nodes(num_nodes: usize) -> Graph {
        let mut graph = Graph::new();
        for node in 0..num_nodes {
            graph.add_vertex(&node.to_string());
        }
        graph
    }

    /// Creates a graph with numerically named vertices from a list of arcs.
    ///
    /// The number of vertices is one more than the largest endpoint, so
    /// nodes without arcs in between are created as isolated vertices.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Graph {
        let arcs = arcs.into_iter().collect::<Vec<_>>();
        let num_nodes = arcs
            .iter()
            .map(|&(u, v)| u.max(v) + 1)
            .max()
            .unwrap_or(0);
        let mut graph = Graph::with_nodes(num_nodes);
        for (u, v) in arcs {
            graph.add_arc(u, v);
        }
        graph
    }

    /// Creates a random Erdős–Rényi graph with numerically named vertices.
    ///
    /// Each of the `num_nodes * num_nodes` possible arcs, self-loops
    /// included, is present independently with probability `p`.
    ///
    /// # Panics
    ///
    /// If `p` is not in the interval [0..1].
    pub fn erdos_renyi(num_nodes: usize, p: f64, seed: u64) -> Graph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = Graph::with_nodes(num_nodes);
        for u in 0..num_nodes {
            for v in 0..num_nodes {
                if rng.random_bool(p) {
                    graph.add_arc(u, v);
                }
            }
        }
        graph
    }

    /// Returns the index of the vertex with the given name, creating the
    /// vertex if it does not exist.
    pub fn add_vertex(&mut self, name: &str) -> usize {
        if let Some(node) = self.names.get_index_of(name) {
            return node;
        }
        let (node, _) = self.names.insert_full(name.to_owned());
        self.successors.push(IndexSet::new());
        node
    }

    /// Adds an arc from the vertex named `from` to each vertex named in `to`,
    /// creating missing vertices first.
    ///
    /// Returns the index of `from`.
    pub fn add_edges<S: AsRef<str>>(
        &mut self,
        from: &str,
        to: impl IntoIterator<Item = S>,
    ) -> usize {
        let u = self.add_vertex(from);
        for name in to {
            let v = self.add_vertex(name.as_ref());
            self.add_arc(u, v);
        }
        u
    }

    /// Adds an arc between two existing nodes.
    ///
    /// Returns true if the arc was not already present.
    ///
    /// # Panics
    ///
    /// If either node is out of bounds.
    pub fn add_arc(&mut self, from: usize, to: usize) -> bool {
        assert!(
            to < self.num_nodes(),
            "Node {to} does not exist (the graph has {} nodes)",
            self.num_nodes()
        );
        let added = self.successors[from].insert(to);
        if added {
            self.num_arcs += 1;
        }
        added
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of arcs.
    #[inline(always)]
    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    /// Returns true if a vertex with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the index of the vertex with the given name, if any.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    /// Returns the name of a node.
    ///
    /// # Panics
    ///
    /// If `node` is out of bounds.
    #[inline(always)]
    pub fn name(&self, node: usize) -> &str {
        &self.names[node]
    }

    /// Returns the successors of a node, in insertion order.
    ///
    /// # Panics
    ///
    /// If `node` is out of bounds.
    #[inline(always)]
    pub fn successors(
        &self,
        node: usize,
    ) -> impl ExactSizeIterator<Item = usize> + Clone + '_ {
        self.successors[node].iter().copied()
    }

    /// Returns the number of successors of a node.
    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> usize {
        self.successors[node].len()
    }

    /// Returns a handle to the vertex with the given name, if any.
    pub fn vertex(&self, name: &str) -> Option<Vertex<'_>> {
        self.index_of(name).map(|node| Vertex { graph: self, node })
    }

    /// Returns a handle to the vertex with the given index.
    ///
    /// # Panics
    ///
    /// If `node` is out of bounds.
    pub fn vertex_at(&self, node: usize) -> Vertex<'_> {
        assert!(node < self.num_nodes(), "Node {node} does not exist");
        Vertex { graph: self, node }
    }

    /// Returns the vertices in insertion order.
    ///
    /// The iterator is lazy; call this method again to restart the
    /// enumeration.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Vertex<'_>> + Clone + '_ {
        (0..self.num_nodes()).map(move |node| Vertex { graph: self, node })
    }

    /// Returns the transpose of this graph.
    ///
    /// All vertices are added to the transpose before any arc, so the
    /// transpose contains isolated vertices too, and every vertex has the
    /// same index in both graphs.
    pub fn transpose(&self) -> Graph {
        let mut transpose = Graph::new();
        for name in &self.names {
            transpose.add_vertex(name);
        }
        for u in 0..self.num_nodes() {
            for v in self.successors(u) {
                transpose.add_arc(v, u);
            }
        }
        transpose
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        // IndexSet equality ignores order, but successors are indices into
        // names, so names must match position by position
        self.names.iter().eq(other.names.iter()) && self.successors == other.successors
    }
}

impl Eq for Graph {}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph({{")?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{name}")?;
        }
        write!(f, "}})")
    }
}

/// A vertex of a [`Graph`].
///
/// A vertex borrows the graph it belongs to, so it cannot outlive it and the
/// graph cannot be modified while a vertex exists. Vertices are compared and
/// hashed by name.
#[derive(Clone, Copy)]
pub struct Vertex<'a> {
    graph: &'a Graph,
    node: usize,
}

impl<'a> Vertex<'a> {
    /// Returns the name of this vertex.
    pub fn name(&self) -> &'a str {
        self.graph.name(self.node)
    }

    /// Returns the index of this vertex in its graph.
    pub fn index(&self) -> usize {
        self.node
    }

    /// Returns the graph this vertex belongs to.
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Returns the targets of the arcs leaving this vertex.
    pub fn successors(&self) -> impl ExactSizeIterator<Item = Vertex<'a>> + 'a {
        let graph = self.graph;
        graph
            .successors(self.node)
            .map(move |node| Vertex { graph, node })
    }
}

impl PartialEq for Vertex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Vertex<'_> {}

impl Hash for Vertex<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({})", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        assert_eq!(graph.add_vertex("a"), a);
        assert_ne!(a, b);
        assert_eq!(graph.num_nodes(), 2);
    }

    #[test]
    fn test_add_edges_creates_endpoints() {
        let mut graph = Graph::new();
        graph.add_edges("a", ["b", "c"]);
        graph.add_edges("c", ["a", "c", "a"]);

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_arcs(), 4);
        let c = graph.vertex("c").unwrap();
        let succ = c.successors().map(|v| v.name()).collect::<Vec<_>>();
        assert_eq!(succ, vec!["a", "c"]);
    }

    #[test]
    fn test_transpose_keeps_isolated_vertices() {
        let mut graph = Graph::new();
        graph.add_edges("a", ["b"]);
        graph.add_vertex("z");
        let transpose = graph.transpose();

        assert_eq!(transpose.num_nodes(), 3);
        assert_eq!(transpose.num_arcs(), 1);
        assert_eq!(transpose.index_of("z"), graph.index_of("z"));
        assert_eq!(transpose.successors(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(transpose.outdegree(0), 0);
    }

    #[test]
    fn test_vertices_restart() {
        let mut graph = Graph::new();
        graph.add_edges("b", ["a"]);
        let vertices = graph.vertices();
        let names = vertices.clone().map(|v| v.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(vertices.count(), 2);
        assert_eq!(graph.vertices().next().map(|v| v.index()), Some(0));
    }

    #[test]
    fn test_vertex_identity_is_the_name() {
        use std::collections::HashSet;

        let mut graph = Graph::new();
        graph.add_edges("a", ["b"]);
        let copy = graph.clone();
        let set = graph.vertices().collect::<HashSet<_>>();

        assert!(set.contains(&copy.vertex("a").unwrap()));
        assert!(std::ptr::eq(copy.vertex_at(1).graph(), &copy));
        assert_ne!(graph.vertex_at(0), graph.vertex_at(1));
        assert!(graph.contains("b"));
        assert!(!graph.contains("c"));
    }

    #[test]
    fn test_equality_depends_on_index_order() {
        let mut forward = Graph::new();
        forward.add_edges("a", ["b"]);
        let mut backward = Graph::new();
        backward.add_edges("b", ["a"]);
        assert_ne!(forward, backward);

        let mut same = Graph::new();
        same.add_vertex("a");
        same.add_edges("a", ["b"]);
        assert_eq!(forward, same);

        // Same names in a different order
        let mut reordered = Graph::new();
        reordered.add_vertex("b");
        reordered.add_edges("a", ["b"]);
        assert_ne!(forward, reordered);
    }

    #[test]
    fn test_erdos_renyi_is_seeded() {
        let graph = Graph::erdos_renyi(20, 0.2, 7);
        assert_eq!(graph, Graph::erdos_renyi(20, 0.2, 7));
        assert_ne!(graph, Graph::erdos_renyi(20, 0.2, 8));
        assert_eq!(Graph::erdos_renyi(20, 0.0, 7).num_arcs(), 0);
        assert_eq!(Graph::erdos_renyi(5, 1.0, 7).num_arcs(), 25);
    }

    #[test]
    fn test_display() {
        let mut graph = Graph::new();
        graph.add_edges("x", ["y"]);
        assert_eq!(graph.to_string(), "Graph({x,y})");
        assert_eq!(graph.vertex("y").unwrap().to_string(), "y");
        assert_eq!(format!("{:?}", graph.vertex_at(0)), "Vertex(x)");
    }
}
