/*!
# Synset Dictionary

Maps synset ids to their nouns and nouns to the synsets they are a sense of.

Synset ids are dense and assigned in insertion order. A noun may belong to many
synsets (one per word sense); its senses are kept in ascending id order.
The dictionary is filled once by a [`SynsetReader`](crate::io::SynsetReader) and
only read afterwards.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::*;

/// Synset ids of a noun; most nouns have one or two senses
pub type Senses = SmallVec<[Node; 2]>;

/// Bidirectional mapping between synset ids and nouns
#[derive(Debug, Clone, Default)]
pub struct SynsetDictionary {
    synsets: Vec<Box<[String]>>,
    index: FxHashMap<String, Senses>,
}

impl SynsetDictionary {
    /// Creates an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a synset consisting of `nouns` and returns its id.
    pub(crate) fn push_synset(&mut self, nouns: Vec<String>) -> Node {
        let id = self.synsets.len() as Node;

        for noun in &nouns {
            let senses = self.index.entry(noun.clone()).or_default();
            // a noun listed twice within one synset is still one sense
            if senses.last() != Some(&id) {
                senses.push(id);
            }
        }

        self.synsets.push(nouns.into_boxed_slice());
        id
    }

    /// Returns the number of synsets
    pub fn number_of_synsets(&self) -> NumNodes {
        self.synsets.len() as NumNodes
    }

    /// Returns the number of distinct nouns
    pub fn number_of_nouns(&self) -> usize {
        self.index.len()
    }

    /// Returns *true* if no synset was added yet
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Returns an iterator over all distinct nouns in unspecified order
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(String::as_str)
    }

    /// Returns *true* if `word` is a noun of some synset (case-sensitive)
    pub fn is_noun(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Returns the ids of all synsets `word` belongs to in ascending order
    pub fn senses(&self, word: &str) -> Option<&[Node]> {
        self.index.get(word).map(|senses| senses.as_slice())
    }

    /// Returns the nouns of synset `id` in their original order
    pub fn synset(&self, id: Node) -> Option<&[String]> {
        self.synsets.get(id as usize).map(|nouns| &nouns[..])
    }

    /// Returns the nouns of synset `id` joined by single spaces
    pub fn synset_string(&self, id: Node) -> Option<String> {
        self.synset(id).map(|nouns| nouns.iter().join(" "))
    }
}
