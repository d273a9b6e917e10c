//! Heuristic diameter estimation
//!
//! A breadth-first search is run from every node. The depth of the node
//! dequeued last is taken as that head's eccentricity, and the pair
//! (head, last dequeued) as its route. When several nodes share the final
//! depth only the last one dequeued is reported unless
//! [`RouteSelection::AllFarthest`] is requested.

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::graph::frontier::FrontierQueue;
use crate::graph::types::{NodeIndex, WordGraph};
use crate::trace_time;

/// Separator between the two endpoint words of a route
pub const ROUTE_SEPARATOR: &str = " - ";

/// Which farthest nodes of each search produce routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteSelection {
    /// Only the node dequeued last
    #[default]
    LastDequeued,
    /// Every node at the maximum depth
    AllFarthest,
}

/// Result of [`diameter_routes`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diameter {
    /// Largest eccentricity estimate over all heads
    pub depth: usize,
    /// Endpoint pairs achieving `depth`, sorted and unique
    pub routes: Vec<String>,
}

/// Route label for a pair of words, smaller word first
pub fn canonical_route(a: &str, b: &str) -> String {
    if a < b {
        format!("{a}{ROUTE_SEPARATOR}{b}")
    } else {
        format!("{b}{ROUTE_SEPARATOR}{a}")
    }
}

/// Outcome of one breadth-first search
#[derive(Debug)]
struct Sweep {
    depths: Vec<Option<usize>>,
    last_seen: NodeIndex,
}

impl Sweep {
    fn eccentricity(&self) -> usize {
        self.depths[self.last_seen.index()].unwrap_or(0)
    }

    /// Every node at the eccentricity depth
    fn farthest<'a>(&'a self, graph: &'a WordGraph) -> impl Iterator<Item = NodeIndex> + 'a {
        let depth = Some(self.eccentricity());
        graph
            .node_indices()
            .filter(move |ix| self.depths[ix.index()] == depth)
    }
}

fn sweep(graph: &WordGraph, head: NodeIndex) -> Result<Sweep> {
    let mut depths = vec![None; graph.node_count()];
    depths[head.index()] = Some(0);

    let mut done: HashSet<NodeIndex> = HashSet::new();
    let mut queue = FrontierQueue::from_items([head])?;
    let mut last_seen = head;

    while !queue.is_empty() {
        last_seen = queue.remove()?;
        done.insert(last_seen);

        let depth = depths[last_seen.index()].unwrap_or(0);
        for neighbour in graph.neighbours(last_seen) {
            if !done.contains(&neighbour) && !queue.contains(&neighbour) {
                queue.add(neighbour)?;
                depths[neighbour.index()] = Some(depth + 1);
            }
        }
    }

    Ok(Sweep { depths, last_seen })
}

/// Estimate the diameter and collect the routes achieving it.
///
/// Runs one search per node, so the cost is O(V·(V+E)).
pub fn diameter_routes(graph: &WordGraph, selection: RouteSelection) -> Result<Diameter> {
    info!("finding shortest paths");
    let start = Instant::now();

    let total = graph.node_count();
    let mut max_depth = 0;
    let mut routes: Vec<String> = Vec::new();

    for (count, head) in graph.node_indices().enumerate() {
        let head_word = graph.word(head);
        info!(
            "word {} of {}: {} ({:.2}%)",
            count + 1,
            total,
            head_word,
            100.0 * (count + 1) as f64 / total as f64
        );

        let sweep = sweep(graph, head)?;
        let depth = sweep.eccentricity();
        debug!(depth, word = graph.word(sweep.last_seen), "furthest word");

        if depth < max_depth {
            continue;
        }
        if depth > max_depth {
            routes.clear();
            max_depth = depth;
        }

        let ends: Vec<NodeIndex> = match selection {
            RouteSelection::LastDequeued => vec![sweep.last_seen],
            RouteSelection::AllFarthest => sweep.farthest(graph).collect(),
        };
        for end in ends {
            let route = canonical_route(head_word, graph.word(end));
            if !routes.contains(&route) {
                routes.push(route);
            }
        }
    }

    routes.sort();
    trace_time!(start, "diameter_routes", depth = max_depth);
    Ok(Diameter {
        depth: max_depth,
        routes,
    })
}
