use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use syntagma_protocol::DependencyTag;

use crate::ids::WordIndex;

/// Typed word-to-word dependency edges of one text.
///
/// Word positions are dense, so node lookup is a plain index into `nodes`
/// instead of a hash map. Edges run from the governing word to the dependent.
#[derive(Debug)]
pub struct DependencyGraph {
    graph: DiGraph<WordIndex, DependencyTag>,
    nodes: Vec<NodeIndex>,
}

impl DependencyGraph {
    pub(crate) fn new(word_count: usize) -> Self {
        let mut graph = DiGraph::new();
        let nodes = (0..word_count)
            .map(|position| graph.add_node(WordIndex::new(position)))
            .collect();
        Self { graph, nodes }
    }

    pub(crate) fn add_edge(&mut self, source: WordIndex, target: WordIndex, tag: DependencyTag) {
        self.graph
            .add_edge(self.nodes[source.index()], self.nodes[target.index()], tag);
    }

    /// Words from which a `tag` edge arrives at `word`, in position order.
    pub fn sources_of(&self, word: WordIndex, tag: DependencyTag) -> Vec<WordIndex> {
        self.related(word, tag, Direction::Incoming)
    }

    /// Words reached by a `tag` edge leaving `word`, in position order.
    pub fn targets_of(&self, word: WordIndex, tag: DependencyTag) -> Vec<WordIndex> {
        self.related(word, tag, Direction::Outgoing)
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn related(&self, word: WordIndex, tag: DependencyTag, direction: Direction) -> Vec<WordIndex> {
        let mut related: Vec<WordIndex> = self
            .graph
            .edges_directed(self.nodes[word.index()], direction)
            .filter(|edge| *edge.weight() == tag)
            .map(|edge| {
                let other = match direction {
                    Direction::Incoming => edge.source(),
                    Direction::Outgoing => edge.target(),
                };
                self.graph[other]
            })
            .collect();
        related.sort_unstable();
        related
    }
}
