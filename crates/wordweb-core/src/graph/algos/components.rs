use std::collections::{BTreeMap, HashSet, VecDeque};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::graph::types::{NodeIndex, WordGraph};
use crate::trace_time;

/// A maximal set of mutually reachable nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Node the expansion started from
    pub head: NodeIndex,
    /// Every node in the component, in discovery order (head first)
    pub members: Vec<NodeIndex>,
}

impl Component {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partition the graph into connected components.
///
/// Heads are taken in arena order among nodes not yet assigned; each head is
/// expanded breadth-first and every node reached is assigned to it.
pub fn connected_components(graph: &WordGraph) -> Vec<Component> {
    info!("calculating disjoint subgraphs");
    let start = Instant::now();

    let mut unassigned: HashSet<NodeIndex> = graph.node_indices().collect();
    let mut components = Vec::new();

    for head in graph.node_indices() {
        if !unassigned.remove(&head) {
            continue;
        }
        debug!(word = graph.word(head), "expanding");

        let mut members = vec![head];
        let mut queue = VecDeque::from([head]);
        while let Some(current) = queue.pop_front() {
            for neighbour in graph.neighbours(current) {
                if unassigned.remove(&neighbour) {
                    members.push(neighbour);
                    queue.push_back(neighbour);
                }
            }
        }
        components.push(Component { head, members });
    }

    trace_time!(start, "connected_components", components = components.len());
    components
}

/// Number of components of each size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentHistogram(BTreeMap<usize, usize>);

impl ComponentHistogram {
    pub fn from_components(components: &[Component]) -> Self {
        let mut counts = BTreeMap::new();
        for component in components {
            *counts.entry(component.len()).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// `(size, count)` pairs, ascending by size
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(size, count)| (*size, *count))
    }

    pub fn count_of(&self, size: usize) -> usize {
        self.0.get(&size).copied().unwrap_or(0)
    }

    /// Total number of components
    pub fn component_count(&self) -> usize {
        self.0.values().sum()
    }

    /// Total number of nodes across all components
    pub fn node_count(&self) -> usize {
        self.0.iter().map(|(size, count)| size * count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Shortcut for [`connected_components`] followed by [`ComponentHistogram::from_components`]
pub fn component_sizes(graph: &WordGraph) -> ComponentHistogram {
    ComponentHistogram::from_components(&connected_components(graph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::rules::RuleSet;
    use crate::graph::types::IdAllocator;

    fn graph_of(words: &[&str]) -> WordGraph {
        GraphBuilder::new(RuleSet::SUBSTITUTION_ONLY)
            .build(words.iter().copied(), &mut IdAllocator::new())
            .unwrap()
    }

    #[test]
    fn test_components_partition_nodes() {
        let graph = graph_of(&["cat", "bat", "bad", "dog", "dig", "owl"]);
        let components = connected_components(&graph);
        assert_eq!(components.len(), 3);

        let mut seen = HashSet::new();
        for component in &components {
            assert_eq!(component.members[0], component.head);
            for member in &component.members {
                assert!(seen.insert(*member), "node assigned twice");
            }
        }
        assert_eq!(seen.len(), graph.node_count());
    }

    #[test]
    fn test_histogram_counts() {
        let graph = graph_of(&["cat", "bat", "bad", "dog", "dig", "owl"]);
        let histogram = component_sizes(&graph);
        assert_eq!(
            histogram.iter().collect::<Vec<_>>(),
            vec![(1, 1), (2, 1), (3, 1)]
        );
        assert_eq!(histogram.component_count(), 3);
        assert_eq!(histogram.node_count(), 6);
    }

    #[test]
    fn test_isolated_words() {
        let graph = graph_of(&["abc", "xyz", "mno"]);
        let histogram = component_sizes(&graph);
        assert_eq!(histogram.count_of(1), 3);
        assert_eq!(histogram.component_count(), 3);
    }

    #[test]
    fn test_empty_graph() {
        let graph = graph_of(&[]);
        assert!(connected_components(&graph).is_empty());
        assert!(component_sizes(&graph).is_empty());
    }
}
