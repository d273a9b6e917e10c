use std::io::{self, Write};

use tracing::info;

use crate::graph::WordGraph;

/// Escape a word for use inside a quoted dot label
pub fn escape_label(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out
}

/// Write the graph as an undirected dot graph.
///
/// Dot identifiers cannot be bare numbers, so node ids get an `n` prefix.
pub fn render_dot<W: Write>(graph: &WordGraph, out: &mut W) -> io::Result<()> {
    info!("printing dot");
    writeln!(out, "graph G {{")?;

    for node in graph.nodes() {
        writeln!(out, "\tn{} [label=\"{}\"];", node.id(), escape_label(node.word()))?;
    }

    for edge in graph.edges() {
        writeln!(
            out,
            "\tn{} -- n{};",
            graph.node(edge.node1()).id(),
            graph.node(edge.node2()).id()
        )?;
    }

    writeln!(out, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, IdAllocator, RuleSet};

    #[test]
    fn test_render_dot() {
        let graph = GraphBuilder::new(RuleSet::SUBSTITUTION_ONLY)
            .build(["cat", "bat", "owl"], &mut IdAllocator::new())
            .unwrap();
        let mut out = Vec::new();
        render_dot(&graph, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "graph G {\n\tn1 [label=\"cat\"];\n\tn2 [label=\"bat\"];\n\tn3 [label=\"owl\"];\n\tn1 -- n2;\n}\n"
        );
    }

    #[test]
    fn test_render_empty_graph() {
        let graph = GraphBuilder::new(RuleSet::SUBSTITUTION_ONLY)
            .build(Vec::<String>::new(), &mut IdAllocator::new())
            .unwrap();
        let mut out = Vec::new();
        render_dot(&graph, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "graph G {\n}\n");
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("o'clock"), "o'clock");
        assert_eq!(escape_label("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_label("a\\b"), "a\\\\b");
    }
}
