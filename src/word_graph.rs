use std::collections::HashMap;

/// Undirected multigraph over word tokens. Edges are stored as adjacency
/// lists in insertion order; adding the same pair twice records it twice.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    adjacency: HashMap<String, Vec<String>>,
}

impl WordGraph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Record an edge between `a` and `b`, in both directions.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .push(a.to_string());
    }

    /// Neighbors of `word` in insertion order, or `None` when no edge has
    /// ever touched it.
    pub fn neighbors_of(&self, word: &str) -> Option<&[String]> {
        self.adjacency.get(word).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let mut graph = WordGraph::new();
        graph.add_edge("sun", "moon");
        assert_eq!(graph.neighbors_of("sun").unwrap(), &["moon".to_string()]);
        assert_eq!(graph.neighbors_of("moon").unwrap(), &["sun".to_string()]);
    }

    #[test]
    fn duplicate_edges_are_preserved() {
        let mut graph = WordGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("a", "b");
        assert_eq!(
            graph.neighbors_of("a").unwrap(),
            &["b".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut graph = WordGraph::new();
        graph.add_edge("hub", "zeta");
        graph.add_edge("hub", "alpha");
        graph.add_edge("hub", "mid");
        assert_eq!(
            graph.neighbors_of("hub").unwrap(),
            &["zeta".to_string(), "alpha".to_string(), "mid".to_string()]
        );
    }

    #[test]
    fn unknown_word_has_no_connections() {
        let graph = WordGraph::new();
        assert_eq!(graph.neighbors_of("loner"), None);
    }

    #[test]
    fn self_edge_appears_twice() {
        let mut graph = WordGraph::new();
        graph.add_edge("echo", "echo");
        assert_eq!(
            graph.neighbors_of("echo").unwrap(),
            &["echo".to_string(), "echo".to_string()]
        );
    }
}
