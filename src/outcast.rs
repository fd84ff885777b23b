//! Outcast detection: given a list of nouns, find the one least related to the others.

use log::trace;

use crate::{
    Distance,
    error::{Error, Result},
    wordnet::WordNet,
};

/// Finds the noun with the largest summed distance to all other nouns of a list.
///
/// # Examples
/// ```
/// use wordnet_sap::{outcast::Outcast, wordnet::WordNet};
///
/// let synsets = "0,entity,x\n1,animal,x\n2,cat,x\n3,dog,x\n4,table,x\n";
/// let hypernyms = "1,0\n2,1\n3,1\n4,0\n";
/// let wordnet = WordNet::from_text(synsets, hypernyms).unwrap();
///
/// let outcast = Outcast::new(&wordnet);
/// assert_eq!(outcast.outcast(&["cat", "dog", "table"]).unwrap(), "table");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    /// Returns the noun of `nouns` whose summed distance to all nouns of the list is
    /// maximal. Ties go to the noun listed first.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `nouns` is empty, [`Error::NotANoun`] if an entry
    /// is not a noun, [`Error::NoCommonAncestor`] if two entries are not connected.
    pub fn outcast<'n, S: AsRef<str>>(&self, nouns: &'n [S]) -> Result<&'n str> {
        if nouns.is_empty() {
            return Err(Error::invalid_argument("outcast of an empty list of nouns"));
        }

        let mut best: Option<(u64, &'n str)> = None;
        for a in nouns {
            let a = a.as_ref();
            let mut total = 0u64;
            for b in nouns {
                total += self.distance(a, b.as_ref())? as u64;
            }
            trace!("Summed distance of {a:?}: {total}");

            if best.is_none_or(|(max, _)| total > max) {
                best = Some((total, a));
            }
        }

        // `nouns` is not empty
        best.map(|(_, noun)| noun)
            .ok_or_else(|| Error::invalid_argument("outcast of an empty list of nouns"))
    }

    fn distance(&self, a: &str, b: &str) -> Result<Distance> {
        // a validated WordNet connects every pair of synsets through its root
        self.wordnet
            .distance(a, b)?
            .ok_or_else(|| Error::no_common_ancestor(a, b))
    }
}

impl WordNet {
    /// Shorthand for [`Outcast::outcast`] on this WordNet
    pub fn outcast<'n, S: AsRef<str>>(&self, nouns: &'n [S]) -> Result<&'n str> {
        Outcast::new(self).outcast(nouns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn outcast_of_small_wordnet() {
        let wn = WordNet::from_text(SMALL_SYNSETS, SMALL_HYPERNYMS).unwrap();

        // E-F: 1, E-B: 1, F-B: 2, G to them: 4, 5, 3
        assert_eq!(wn.outcast(&["E", "F", "B", "G"]).unwrap(), "G");
        assert_eq!(wn.outcast(&["A"]).unwrap(), "A");
    }

    #[test]
    fn ties_go_to_first_noun() {
        let wn = WordNet::from_text(SMALL_SYNSETS, SMALL_HYPERNYMS).unwrap();

        // B and C are the same synset
        assert_eq!(wn.outcast(&["B", "C"]).unwrap(), "B");
        assert_eq!(wn.outcast(&["C", "B"]).unwrap(), "C");
        assert_eq!(wn.outcast(&["E", "D"]).unwrap(), "E");
    }

    #[test]
    fn owned_nouns() {
        let wn = WordNet::from_text(SMALL_SYNSETS, SMALL_HYPERNYMS).unwrap();
        let nouns = vec!["F".to_string(), "E".to_string(), "D".to_string()];

        // F: 1 + 4, E: 1 + 3, D: 4 + 3
        assert_eq!(wn.outcast(&nouns).unwrap(), "D");
    }

    #[test]
    fn invalid_input() {
        let wn = WordNet::from_text(SMALL_SYNSETS, SMALL_HYPERNYMS).unwrap();

        let empty: [&str; 0] = [];
        assert!(matches!(wn.outcast(&empty), Err(Error::InvalidArgument(_))));
        assert!(matches!(wn.outcast(&["E", "X"]), Err(Error::NotANoun(w)) if w == "X"));
    }

    #[test]
    fn distances_of_connected_nouns() {
        let wn = WordNet::from_text(SMALL_SYNSETS, SMALL_HYPERNYMS).unwrap();
        let outcast = Outcast::new(&wn);

        assert_eq!(outcast.distance("E", "G").unwrap(), 4);
        assert_eq!(outcast.distance("B", "C").unwrap(), 0);
        assert!(matches!(outcast.distance("E", "X"), Err(Error::NotANoun(_))));
        assert_eq!(outcast.distance("F", "G").unwrap(), 5);
    }
}
