use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::graph::rules::{Alphabet, AnagramIndex, CandidateGenerator, RuleSet};
use crate::graph::types::{IdAllocator, NodeIndex, WordGraph};
use crate::trace_time;


/// Turns a word list into a [`WordGraph`] under a [`RuleSet`].
///
/// Words are processed one at a time. A word leaves the pending pool just
/// before its candidates are matched, and only candidates still pending get
/// an edge, so every unordered pair is considered exactly once: whichever
/// word is processed first claims the edge.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    rules: RuleSet,
    alphabet: Alphabet,
}

impl GraphBuilder {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            alphabet: Alphabet::default(),
        }
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Build the graph. Repeated words collapse into the first occurrence.
    pub fn build<I, S>(&self, words: I, ids: &mut IdAllocator) -> Result<WordGraph>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.validate()?;
        let start = Instant::now();

        let words = words.into_iter();
        let mut graph = WordGraph::with_capacity(words.size_hint().0);
        for word in words {
            let word = word.into();
            if graph.find(&word).is_none() {
                graph.push_node(ids.allocate(), word);
            }
        }
        info!(nodes = graph.node_count(), rules = %self.rules, "building graph");

        let anagrams = self.rules.anagram.then(|| {
            info!("finding anagrams");
            AnagramIndex::build(graph.nodes().iter().map(|n| n.word()))
        });
        let generator = CandidateGenerator::new(self.rules, &self.alphabet, anagrams.as_ref());

        let mut pending: HashMap<String, NodeIndex> = graph
            .nodes()
            .iter()
            .map(|n| n.word().to_string())
            .zip(graph.node_indices())
            .collect();

        let order: Vec<NodeIndex> = graph.node_indices().collect();
        for current in order {
            let word = graph.word(current).to_string();
            pending.remove(&word);

            let matched: Vec<NodeIndex> = generator
                .candidates(&word)
                .iter()
                .filter_map(|candidate| pending.get(candidate).copied())
                .collect();

            for other in &matched {
                graph.push_edge(current, *other);
            }
            if !matched.is_empty() {
                debug!(word = %word, edges = matched.len(), "linked");
            }
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        trace_time!(start, "build_graph");
        Ok(graph)
    }
}
