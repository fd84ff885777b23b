//! # Synsets
//!
//! Every non-blank line `id,noun1 noun2 ...,gloss` defines one synset. Ids have to be
//! consecutive starting at `0`; the gloss is required but ignored.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use super::*;
use crate::{Node, dictionary::SynsetDictionary};

/// A reader for synset records
#[derive(Debug, Clone)]
pub struct SynsetReader {
    /// Separates id, nouns and gloss
    field_separator: char,
    /// Separates the nouns of a synset
    noun_separator: char,
}

impl Default for SynsetReader {
    /// Default to the WordNet-Format `id,nouns,gloss` with space-separated nouns
    fn default() -> Self {
        Self {
            field_separator: ',',
            noun_separator: ' ',
        }
    }
}

impl SynsetReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between id, nouns and gloss
    pub fn field_separator(mut self, separator: char) -> SynsetReader {
        self.field_separator = separator;
        self
    }

    /// Updates the separator between the nouns of a synset
    pub fn noun_separator(mut self, separator: char) -> SynsetReader {
        self.noun_separator = separator;
        self
    }

    /// Reads all synsets from `reader` into a new dictionary.
    ///
    /// # Errors
    /// [`Error::Parse`] for records with missing fields, no nouns, or ids that are not
    /// the index of the record; [`Error::Io`] if reading fails.
    ///
    /// # Examples
    /// ```
    /// use wordnet_sap::io::SynsetReader;
    ///
    /// let input = "0,entity,that which is perceived\n1,bank depository,a financial institution\n";
    /// let dict = SynsetReader::new().try_read(input.as_bytes()).unwrap();
    ///
    /// assert_eq!(dict.number_of_synsets(), 2);
    /// assert_eq!(dict.senses("depository"), Some(&[1][..]));
    /// ```
    pub fn try_read<R: BufRead>(&self, reader: R) -> Result<SynsetDictionary> {
        let mut dictionary = SynsetDictionary::new();

        for record in Records::new(reader) {
            let (line, record) = record?;
            let nouns = self.parse_record(&record, line, dictionary.number_of_synsets())?;
            dictionary.push_synset(nouns);
        }

        debug!(
            "Read {} synsets with {} distinct nouns",
            dictionary.number_of_synsets(),
            dictionary.number_of_nouns()
        );

        Ok(dictionary)
    }

    /// Reads all synsets from the file at `path`
    pub fn try_read_file<P: AsRef<Path>>(&self, path: P) -> Result<SynsetDictionary> {
        self.try_read(BufReader::new(File::open(path)?))
    }

    /// Parses a single record and returns its nouns
    fn parse_record(&self, record: &str, line: usize, expected_id: Node) -> Result<Vec<String>> {
        const INPUT: InputKind = InputKind::Synsets;

        // the gloss is free text and may contain the separator itself
        let mut fields = record.splitn(3, self.field_separator);

        let id: Node = parse_next_value!(fields, INPUT, line, "synset id");
        raise_error_unless!(
            id == expected_id,
            INPUT,
            line,
            format!("Expected synset id {expected_id} but found {id}")
        );

        let Some(nouns) = fields.next() else {
            return Err(Error::parse(INPUT, line, "Missing noun field"));
        };
        raise_error_unless!(fields.next().is_some(), INPUT, line, "Missing gloss field");

        let nouns: Vec<String> = nouns
            .split(self.noun_separator)
            .filter(|noun| !noun.is_empty())
            .map(String::from)
            .collect();
        raise_error_unless!(!nouns.is_empty(), INPUT, line, "Synset without nouns");

        Ok(nouns)
    }
}
