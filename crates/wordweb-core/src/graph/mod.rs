//! Word graph construction and traversal
//!
//! - `types`: arena-backed nodes and index-based edges
//! - `frontier`: FIFO queue with constant-time membership for BFS
//! - `rules`: transformation rules and the anagram index
//! - `builder`: turns a word list into a graph
//! - `algos`: connected components and diameter estimation

pub mod algos;
pub mod builder;
pub mod frontier;
pub mod rules;
pub mod types;

pub use algos::{
    component_sizes, connected_components, diameter_routes, Component, ComponentHistogram,
    Diameter, RouteSelection,
};
pub use builder::GraphBuilder;
pub use frontier::FrontierQueue;
pub use rules::{Alphabet, AnagramIndex, RuleSet};
pub use types::{Edge, EdgeIndex, IdAllocator, NodeId, NodeIndex, WordGraph, WordNode};
