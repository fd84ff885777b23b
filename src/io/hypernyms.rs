//! # Hypernyms
//!
//! Every non-blank line `child,parent1,parent2,...` adds the edges `child -> parent_i`.
//! A synset may appear in several records; repeated edges are only added once.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, warn};

use super::*;
use crate::{Node, NumNodes, ops::*};

/// A reader for hypernym records
#[derive(Debug, Clone)]
pub struct HypernymReader {
    /// Separates the synset ids of a record
    field_separator: char,
}

impl Default for HypernymReader {
    /// Default to the WordNet-Format `child,parent,...`
    fn default() -> Self {
        Self {
            field_separator: ',',
        }
    }
}

impl HypernymReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between the synset ids of a record
    pub fn field_separator(mut self, separator: char) -> HypernymReader {
        self.field_separator = separator;
        self
    }

    /// Reads the hypernym graph over `number_of_nodes` synsets from `reader`.
    ///
    /// The graph is not validated; see [`RootedDag`](crate::algo::RootedDag).
    ///
    /// # Errors
    /// [`Error::Parse`] for non-numeric ids or ids outside `0..number_of_nodes`;
    /// [`Error::Io`] if reading fails.
    ///
    /// # Examples
    /// ```
    /// use wordnet_sap::{prelude::*, io::HypernymReader};
    ///
    /// let graph: HypernymGraph = HypernymReader::new()
    ///     .try_read_graph("1,0\n2,0,1\n".as_bytes(), 3)
    ///     .unwrap();
    ///
    /// assert_eq!(graph.number_of_edges(), 3);
    /// assert!(graph.has_edge(2, 1));
    /// ```
    pub fn try_read_graph<G, R>(&self, reader: R, number_of_nodes: NumNodes) -> Result<G>
    where
        G: GraphEdgeEditing + GraphEdgeOrder,
        R: BufRead,
    {
        let mut graph = G::new(number_of_nodes);
        let mut repeated_edges = 0usize;

        for record in Records::new(reader) {
            let (line, record) = record?;
            let (child, parents) = self.parse_record(&record, line, number_of_nodes)?;

            for parent in parents {
                if graph.try_add_edge(child, parent) {
                    repeated_edges += 1;
                }
            }
        }

        if repeated_edges > 0 {
            warn!("Ignored {repeated_edges} repeated hypernym edges");
        }
        debug!(
            "Read hypernym graph with {} nodes and {} edges",
            number_of_nodes,
            graph.number_of_edges()
        );

        Ok(graph)
    }

    /// Reads the hypernym graph over `number_of_nodes` synsets from the file at `path`
    pub fn try_read_graph_file<G, P>(&self, path: P, number_of_nodes: NumNodes) -> Result<G>
    where
        G: GraphEdgeEditing + GraphEdgeOrder,
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?), number_of_nodes)
    }

    /// Parses a single record into the child and its parents
    fn parse_record(
        &self,
        record: &str,
        line: usize,
        number_of_nodes: NumNodes,
    ) -> Result<(Node, Vec<Node>)> {
        const INPUT: InputKind = InputKind::Hypernyms;

        let mut fields = record.split(self.field_separator);

        let child: Node = parse_next_value!(fields, INPUT, line, "synset id");
        raise_error_unless!(
            child < number_of_nodes,
            INPUT,
            line,
            format!("Synset id {child} out of range 0..{number_of_nodes}")
        );

        // tolerate trailing separators
        let mut fields = fields.filter(|field| !field.trim().is_empty()).peekable();
        let mut parents = Vec::new();
        while fields.peek().is_some() {
            let parent: Node = parse_next_value!(fields, INPUT, line, "hypernym id");
            raise_error_unless!(
                parent < number_of_nodes,
                INPUT,
                line,
                format!("Hypernym id {parent} out of range 0..{number_of_nodes}")
            );
            parents.push(parent);
        }

        Ok((child, parents))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{Edge, repr::*, testing::*};

    fn read(input: &str, n: NumNodes) -> Result<HypernymGraph> {
        HypernymReader::new().try_read_graph(input.as_bytes(), n)
    }

    #[test]
    fn small_hypernyms() {
        let graph = read(SMALL_HYPERNYMS, 6).unwrap();

        assert_eq!(graph.number_of_nodes(), 6);
        assert_eq!(
            graph.ordered_edges().collect_vec(),
            vec![Edge(1, 0), Edge(2, 0), Edge(3, 1), Edge(4, 3), Edge(5, 2)]
        );
    }

    #[test]
    fn several_parents_and_records() {
        let graph = read("3,1,2\n3,0\n1,0,\n2,0\n3,2\n", 4).unwrap();

        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(graph.as_neighbors_slice(3), &[1, 2, 0]);
        assert_eq!(graph.as_neighbors_slice(1), &[0]);
    }

    #[test]
    fn records_without_parents() {
        let graph = read("0\n1,0\n", 2).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.out_degree_of(0), 0);
    }

    #[test]
    fn malformed_records() {
        for (input, bad_line) in [
            ("1,0\n7,0\n", 2),  // child out of range
            ("1,9\n", 1),       // parent out of range
            ("1,zero\n", 1),    // non-numeric parent
            ("x,0\n", 1),       // non-numeric child
            ("\n\n1,-1\n", 3),  // negative parent
        ] {
            match read(input, 3) {
                Err(Error::Parse {
                    input: InputKind::Hypernyms,
                    line,
                    ..
                }) => assert_eq!(line, bad_line, "{input:?}"),
                other => panic!("{input:?} should fail, got {:?}", other.map(|g| g.number_of_edges())),
            }
        }
    }

    #[test]
    fn custom_separator() {
        let graph: HypernymGraph = HypernymReader::new()
            .field_separator(' ')
            .try_read_graph("1 0\n2 1 0\n".as_bytes(), 3)
            .unwrap();

        assert_eq!(graph.number_of_edges(), 3);
    }
}
