/*!
# WordNet

The query facade over a [`SynsetDictionary`] and its validated hypernym graph.

A [`WordNet`] is assembled by a [`WordNetBuilder`] from a synset source and a hypernym
source. Construction reads both sources, checks that the hypernym graph is a DAG with a
single root, and either returns a complete instance or an [`Error`]. Afterwards the
instance is immutable and all queries take `&self`.

```
use wordnet_sap::wordnet::WordNet;

let synsets = "0,entity,thing\n1,animal beast,a living being\n2,plant flora,a living organism\n3,cat,a feline\n";
let hypernyms = "1,0\n2,0\n3,1\n";

let wordnet = WordNet::from_text(synsets, hypernyms).unwrap();
assert_eq!(wordnet.distance("cat", "flora").unwrap(), Some(3));
assert_eq!(wordnet.sap("cat", "beast").unwrap().as_deref(), Some("animal beast"));
```
*/

use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    algo::*,
    dictionary::SynsetDictionary,
    error::{Error, Result},
    io::{HypernymReader, SynsetReader},
    prelude::*,
};

/// An input source of a [`WordNetBuilder`]; files are only opened in [`WordNetBuilder::build`]
enum Source<'a> {
    Reader(Box<dyn BufRead + 'a>),
    File(PathBuf),
}

/// Configures the inputs of a [`WordNet`] and builds it.
///
/// Both a synset and a hypernym source are required. Setting a source twice
/// replaces the earlier one.
///
/// # Examples
/// ```
/// use wordnet_sap::{io::SynsetReader, wordnet::WordNetBuilder};
///
/// let wordnet = WordNetBuilder::new()
///     .synset_reader(SynsetReader::new().field_separator(';'))
///     .synsets("0;root;gloss\n1;leaf;gloss\n".as_bytes())
///     .hypernyms("1,0\n".as_bytes())
///     .build()
///     .unwrap();
///
/// assert_eq!(wordnet.root(), 0);
/// ```
pub struct WordNetBuilder<'a> {
    synsets: Option<Source<'a>>,
    hypernyms: Option<Source<'a>>,
    synset_reader: SynsetReader,
    hypernym_reader: HypernymReader,
}

impl Default for WordNetBuilder<'_> {
    fn default() -> Self {
        Self {
            synsets: None,
            hypernyms: None,
            synset_reader: SynsetReader::default(),
            hypernym_reader: HypernymReader::default(),
        }
    }
}

impl<'a> WordNetBuilder<'a> {
    /// Creates a builder without sources and with default readers
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads synsets from `reader`
    pub fn synsets<R: BufRead + 'a>(mut self, reader: R) -> Self {
        self.synsets = Some(Source::Reader(Box::new(reader)));
        self
    }

    /// Reads hypernyms from `reader`
    pub fn hypernyms<R: BufRead + 'a>(mut self, reader: R) -> Self {
        self.hypernyms = Some(Source::Reader(Box::new(reader)));
        self
    }

    /// Reads synsets from the file at `path`
    pub fn synsets_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.synsets = Some(Source::File(path.as_ref().to_path_buf()));
        self
    }

    /// Reads hypernyms from the file at `path`
    pub fn hypernyms_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.hypernyms = Some(Source::File(path.as_ref().to_path_buf()));
        self
    }

    /// Replaces the reader used for the synset source
    pub fn synset_reader(mut self, reader: SynsetReader) -> Self {
        self.synset_reader = reader;
        self
    }

    /// Replaces the reader used for the hypernym source
    pub fn hypernym_reader(mut self, reader: HypernymReader) -> Self {
        self.hypernym_reader = reader;
        self
    }

    /// Reads both sources and validates the hypernym graph.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if a source is missing or contains no synsets
    /// - [`Error::Parse`] or [`Error::Io`] if a source cannot be read
    /// - [`Error::MultipleRoots`] or [`Error::Cycle`] if the hypernyms do not form a rooted DAG
    pub fn build(self) -> Result<WordNet> {
        let synsets = self
            .synsets
            .ok_or_else(|| Error::invalid_argument("no synsets source given"))?;
        let hypernyms = self
            .hypernyms
            .ok_or_else(|| Error::invalid_argument("no hypernyms source given"))?;

        let dictionary = match synsets {
            Source::Reader(reader) => self.synset_reader.try_read(reader)?,
            Source::File(path) => self.synset_reader.try_read_file(path)?,
        };
        if dictionary.is_empty() {
            return Err(Error::invalid_argument("synsets source contains no synsets"));
        }

        let n = dictionary.number_of_synsets();
        let graph: HypernymGraph = match hypernyms {
            Source::Reader(reader) => self.hypernym_reader.try_read_graph(reader, n)?,
            Source::File(path) => self.hypernym_reader.try_read_graph_file(path, n)?,
        };

        let root = graph.unique_root()?;
        info!(
            "WordNet with {} synsets, {} nouns and {} hypernym edges; root is synset {} ({:?})",
            n,
            dictionary.number_of_nouns(),
            graph.number_of_edges(),
            root,
            dictionary.synset_string(root).unwrap_or_default()
        );

        Ok(WordNet {
            dictionary,
            graph,
            root,
        })
    }
}

/// Nouns, their synsets and the rooted hypernym DAG over these synsets.
#[derive(Debug, Clone)]
pub struct WordNet {
    dictionary: SynsetDictionary,
    graph: HypernymGraph,
    root: Node,
}

impl WordNet {
    /// Builds a WordNet from in-memory synset and hypernym records.
    /// See [`WordNetBuilder::build`] for possible errors.
    pub fn from_text(synsets: &str, hypernyms: &str) -> Result<Self> {
        WordNetBuilder::new()
            .synsets(synsets.as_bytes())
            .hypernyms(hypernyms.as_bytes())
            .build()
    }

    /// Builds a WordNet from a synset and a hypernym file.
    /// See [`WordNetBuilder::build`] for possible errors.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(synsets: P, hypernyms: Q) -> Result<Self> {
        WordNetBuilder::new()
            .synsets_file(synsets)
            .hypernyms_file(hypernyms)
            .build()
    }

    /// Returns an iterator over all nouns in unspecified order
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.dictionary.nouns()
    }

    /// Returns *true* if `word` is a noun (case-sensitive)
    pub fn is_noun(&self, word: &str) -> bool {
        self.dictionary.is_noun(word)
    }

    /// Returns the length of a shortest ancestral path between any sense of `a` and any
    /// sense of `b`.
    ///
    /// # Errors
    /// [`Error::NotANoun`] if `a` or `b` is not a noun.
    pub fn distance(&self, a: &str, b: &str) -> Result<Option<Distance>> {
        Ok(self.ancestral_path(a, b)?.map(|path| path.length))
    }

    /// Returns the synset (its nouns separated by single spaces) that is the common
    /// ancestor of `a` and `b` on a shortest ancestral path.
    ///
    /// # Errors
    /// [`Error::NotANoun`] if `a` or `b` is not a noun.
    pub fn sap(&self, a: &str, b: &str) -> Result<Option<String>> {
        Ok(self
            .ancestral_path(a, b)?
            .and_then(|path| self.dictionary.synset_string(path.ancestor)))
    }

    /// Returns the common ancestor and length of a shortest ancestral path between the
    /// senses of `a` and `b`
    pub fn ancestral_path(&self, a: &str, b: &str) -> Result<Option<AncestralPath>> {
        let a = self.senses_of(a)?;
        let b = self.senses_of(b)?;

        self.graph
            .ancestral_paths()
            .least_common_ancestor(a.iter().copied(), b.iter().copied())
    }

    fn senses_of(&self, word: &str) -> Result<&[Node]> {
        self.dictionary
            .senses(word)
            .ok_or_else(|| Error::not_a_noun(word))
    }

    /// Returns the number of synsets
    pub fn number_of_synsets(&self) -> NumNodes {
        self.dictionary.number_of_synsets()
    }

    /// Returns the number of distinct nouns
    pub fn number_of_nouns(&self) -> usize {
        self.dictionary.number_of_nouns()
    }

    /// Returns the synset that is a (transitive) hypernym of all others
    pub fn root(&self) -> Node {
        self.root
    }

    /// Returns the nouns of synset `id`
    pub fn synset(&self, id: Node) -> Option<&[String]> {
        self.dictionary.synset(id)
    }

    /// Returns the ids of all synsets `word` is a noun of
    pub fn senses(&self, word: &str) -> Option<&[Node]> {
        self.dictionary.senses(word)
    }

    /// Returns the direct hypernyms of synset `id`
    pub fn hypernyms_of(&self, id: Node) -> Option<&[Node]> {
        self.graph
            .contains_node(id)
            .then(|| self.graph.as_neighbors_slice(id))
    }

    /// Returns the validated hypernym graph
    pub fn graph(&self) -> &HypernymGraph {
        &self.graph
    }

    /// Returns the synset dictionary
    pub fn dictionary(&self) -> &SynsetDictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{error::InputKind, testing::*};

    fn small() -> WordNet {
        WordNet::from_text(SMALL_SYNSETS, SMALL_HYPERNYMS).unwrap()
    }

    #[test]
    fn small_wordnet() {
        let wn = small();

        assert_eq!(wn.number_of_synsets(), 6);
        assert_eq!(wn.number_of_nouns(), 7);
        assert_eq!(wn.root(), 0);

        assert_eq!(wn.sap("E", "D").unwrap().as_deref(), Some("A"));
        assert_eq!(wn.distance("E", "D").unwrap(), Some(3));

        assert_eq!(wn.sap("F", "G").unwrap().as_deref(), Some("A"));
        assert_eq!(wn.distance("F", "G").unwrap(), Some(5));

        assert_eq!(wn.sap("F", "E").unwrap().as_deref(), Some("E"));
        assert_eq!(wn.distance("F", "E").unwrap(), Some(1));

        // both nouns name the same synset
        assert_eq!(wn.sap("B", "C").unwrap().as_deref(), Some("B C"));
        assert_eq!(wn.distance("B", "C").unwrap(), Some(0));
    }

    #[test]
    fn distance_is_symmetric_and_reflexive() {
        let wn = small();
        let nouns = wn.nouns().sorted().collect_vec();

        for &a in &nouns {
            assert_eq!(wn.distance(a, a).unwrap(), Some(0));
            for &b in &nouns {
                assert_eq!(wn.distance(a, b).unwrap(), wn.distance(b, a).unwrap());
                assert_eq!(wn.sap(a, b).unwrap(), wn.sap(b, a).unwrap());
            }
        }
    }

    #[test]
    fn nouns_are_case_sensitive() {
        let wn = small();

        assert_eq!(wn.nouns().sorted().collect_vec(), vec!["A", "B", "C", "D", "E", "F", "G"]);
        assert!(wn.is_noun("B"));
        assert!(!wn.is_noun("b"));
        assert!(!wn.is_noun(""));
        assert!(!wn.is_noun("B C"));
        assert!(!wn.is_noun("Z"));
    }

    #[test]
    fn queries_with_unknown_nouns() {
        let wn = small();

        assert!(matches!(wn.distance("Z", "A"), Err(Error::NotANoun(w)) if w == "Z"));
        assert!(matches!(wn.sap("A", "a"), Err(Error::NotANoun(w)) if w == "a"));
        assert!(matches!(wn.sap("", "A"), Err(Error::NotANoun(_))));
    }

    #[test]
    fn introspection() {
        let wn = small();

        assert_eq!(wn.synset(1).unwrap(), &["B", "C"]);
        assert_eq!(wn.synset(6), None);
        assert_eq!(wn.senses("E"), Some(&[3][..]));
        assert_eq!(wn.senses("Z"), None);
        assert_eq!(wn.hypernyms_of(4), Some(&[3][..]));
        assert_eq!(wn.hypernyms_of(0), Some(&[][..]));
        assert_eq!(wn.hypernyms_of(6), None);
        assert_eq!(wn.graph().number_of_nodes(), 6);
        assert_eq!(wn.graph().number_of_edges(), 5);
        assert_eq!(wn.dictionary().number_of_synsets(), 6);
        assert_eq!(wn.dictionary().number_of_nouns(), 7);

        let path = wn.ancestral_path("G", "B").unwrap().unwrap();
        assert_eq!(path.ancestor, 0);
        assert_eq!(path.length, 3);
    }

    #[test]
    fn several_senses() {
        // "bank" is a sense of both 2 and 3
        let synsets = "0,entity,x\n1,river,x\n2,bank shore,x\n3,bank depository,x\n4,money,x\n";
        let hypernyms = "1,0\n2,1\n3,4\n4,0\n";
        let wn = WordNet::from_text(synsets, hypernyms).unwrap();

        assert_eq!(wn.senses("bank"), Some(&[2, 3][..]));
        assert_eq!(wn.distance("bank", "river").unwrap(), Some(1));
        assert_eq!(wn.sap("bank", "river").unwrap().as_deref(), Some("river"));
        assert_eq!(wn.distance("bank", "money").unwrap(), Some(1));
        assert_eq!(wn.distance("shore", "money").unwrap(), Some(3));
    }

    #[test]
    fn construction_errors() {
        // 5 has no hypernym
        let result = WordNet::from_text(SMALL_SYNSETS, "1,0\n2,0\n3,1\n4,3\n");
        assert!(matches!(result, Err(Error::MultipleRoots(0, 5))), "{result:?}");

        let result = WordNet::from_text(SMALL_SYNSETS, &format!("{SMALL_HYPERNYMS}0,4\n"));
        assert!(matches!(result, Err(Error::Cycle { .. })), "{result:?}");

        let result = WordNet::from_text(SMALL_SYNSETS, "1,0\n2,6\n");
        assert!(
            matches!(
                result,
                Err(Error::Parse {
                    input: InputKind::Hypernyms,
                    line: 2,
                    ..
                })
            ),
            "{result:?}"
        );

        let result = WordNet::from_text("0,A,x\n1,B\n", "1,0\n");
        assert!(
            matches!(
                result,
                Err(Error::Parse {
                    input: InputKind::Synsets,
                    line: 2,
                    ..
                })
            ),
            "{result:?}"
        );

        let result = WordNet::from_text("\n\n", "");
        assert!(matches!(result, Err(Error::InvalidArgument(_))), "{result:?}");
    }

    #[test]
    fn missing_sources() {
        let result = WordNetBuilder::new().synsets(SMALL_SYNSETS.as_bytes()).build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let result = WordNetBuilder::new().hypernyms(SMALL_HYPERNYMS.as_bytes()).build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let result = WordNet::from_files("/nonexistent/synsets.txt", "/nonexistent/hypernyms.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn from_files() {
        let dir = std::env::temp_dir().join(format!("wordnet-sap-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let synsets = dir.join("synsets.txt");
        let hypernyms = dir.join("hypernyms.txt");
        std::fs::write(&synsets, SMALL_SYNSETS).unwrap();
        std::fs::write(&hypernyms, SMALL_HYPERNYMS).unwrap();

        let wn = WordNet::from_files(&synsets, &hypernyms).unwrap();
        assert_eq!(wn.distance("E", "D").unwrap(), Some(3));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn wordnet_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WordNet>();
    }

    #[test]
    fn random_wordnets_against_brute_force() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x5eed_0f_5a9);

        for _ in 0..20 {
            let n = rng.random_range(1..60);
            let (graph, root) = random_rooted_dag(&mut rng, n, 0.3, 3);

            // few distinct words, so most nouns have several senses
            let words = rng.random_range(1..=n.min(12));
            let synsets = (0..n)
                .map(|u| format!("{u},w{} s{u},gloss", u % words))
                .join("\n");
            let hypernyms = graph
                .vertices()
                .map(|u| std::iter::once(u).chain(graph.neighbors_of(u)).join(","))
                .join("\n");

            let wn = WordNet::from_text(&synsets, &hypernyms).unwrap();
            assert_eq!(wn.root(), root);

            for _ in 0..20 {
                let a = format!("w{}", rng.random_range(0..words));
                let b = format!("s{}", rng.random_range(0..n));

                let expected = naive_sap_length(&graph, wn.senses(&a).unwrap(), wn.senses(&b).unwrap());
                assert_eq!(wn.distance(&a, &b).unwrap(), expected);
                assert!(expected.is_some());
            }
        }
    }
}
