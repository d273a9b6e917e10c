use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Diagnostic identity of a node, used for export labels only
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(u64);

impl NodeId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out monotonically increasing node ids, starting at 1
#[derive(Debug, Default)]
pub struct IdAllocator {
    issued: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> NodeId {
        self.issued += 1;
        NodeId(self.issued)
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// Position of a node in the graph arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Position of an edge in the graph's edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A dictionary word in the graph.
///
/// Equality and hashing use the word only; the id is a label.
#[derive(Debug, Clone)]
pub struct WordNode {
    id: NodeId,
    word: String,
    edges: Vec<EdgeIndex>,
}

impl WordNode {
    pub(crate) fn new(id: NodeId, word: String) -> Self {
        Self {
            id,
            word,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Incident edges, in the order they were discovered
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

impl PartialEq for WordNode {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordNode {}

impl Hash for WordNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

/// Undirected edge between two arena nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    node1: NodeIndex,
    node2: NodeIndex,
}

impl Edge {
    pub fn node1(&self) -> NodeIndex {
        self.node1
    }

    pub fn node2(&self) -> NodeIndex {
        self.node2
    }

    /// The endpoint across from `node`, or `None` if `node` is not an endpoint
    pub fn opposite(&self, node: NodeIndex) -> Option<NodeIndex> {
        if node == self.node1 {
            Some(self.node2)
        } else if node == self.node2 {
            Some(self.node1)
        } else {
            None
        }
    }

    pub fn connects(&self, a: NodeIndex, b: NodeIndex) -> bool {
        (self.node1 == a && self.node2 == b) || (self.node1 == b && self.node2 == a)
    }
}

/// Word graph produced by one [`GraphBuilder`](super::GraphBuilder) run.
///
/// Nodes live in an arena; edges refer to them by index, so there is
/// no ownership cycle between nodes and edges.
#[derive(Debug, Default)]
pub struct WordGraph {
    nodes: Vec<WordNode>,
    edges: Vec<Edge>,
    lookup: HashMap<String, NodeIndex>,
}

impl WordGraph {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            edges: Vec::new(),
            lookup: HashMap::with_capacity(capacity),
        }
    }

    /// Add a node, returning `None` if the word is already present
    pub(crate) fn push_node(&mut self, id: NodeId, word: String) -> Option<NodeIndex> {
        if self.lookup.contains_key(&word) {
            return None;
        }
        let ix = NodeIndex(self.nodes.len());
        self.lookup.insert(word.clone(), ix);
        self.nodes.push(WordNode::new(id, word));
        Some(ix)
    }

    /// Connect two distinct nodes and register the edge on both endpoints
    pub(crate) fn push_edge(&mut self, a: NodeIndex, b: NodeIndex) -> EdgeIndex {
        debug_assert_ne!(a, b, "self-loops are never created");
        let ix = EdgeIndex(self.edges.len());
        self.edges.push(Edge { node1: a, node2: b });
        self.nodes[a.0].edges.push(ix);
        self.nodes[b.0].edges.push(ix);
        ix
    }

    pub fn node(&self, ix: NodeIndex) -> &WordNode {
        &self.nodes[ix.0]
    }

    pub fn edge(&self, ix: EdgeIndex) -> &Edge {
        &self.edges[ix.0]
    }

    pub fn word(&self, ix: NodeIndex) -> &str {
        self.nodes[ix.0].word()
    }

    pub fn find(&self, word: &str) -> Option<NodeIndex> {
        self.lookup.get(word).copied()
    }

    pub fn nodes(&self) -> &[WordNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.nodes.len()).map(NodeIndex)
    }

    /// Neighbours of `ix` in edge discovery order
    pub fn neighbours(&self, ix: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes[ix.0]
            .edges
            .iter()
            .filter_map(move |e| self.edges[e.0].opposite(ix))
    }

    pub fn has_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.nodes[a.0]
            .edges
            .iter()
            .any(|e| self.edges[e.0].connects(a, b))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
