//! Error types for building and querying a [`WordNet`](crate::wordnet::WordNet).
//!
//! All failures are represented by the [`Error`] enum. Construction errors
//! ([`Error::Parse`], [`Error::MultipleRoots`], [`Error::Cycle`], ...) are fatal:
//! no partially built instance is ever handed out. Query errors
//! ([`Error::InvalidVertex`], [`Error::NotANoun`]) leave the instance untouched.

use std::{fmt, io};

use thiserror::Error;

use crate::{Node, NumNodes};

/// Identifies the text source a parse error was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// `id,nouns,gloss` records
    Synsets,
    /// `child,parent,...` records
    Hypernyms,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Synsets => write!(f, "synsets"),
            InputKind::Hypernyms => write!(f, "hypernyms"),
        }
    }
}

/// The error type of this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input is missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A record of one of the input sources is malformed; `line` is 1-based
    #[error("Parse error in {input} (line {line}): {reason}")]
    Parse {
        input: InputKind,
        line: usize,
        reason: String,
    },

    /// The hypernym graph has more than one node without hypernyms
    #[error("Hypernym graph has multiple roots (at least {0} and {1})")]
    MultipleRoots(Node, Node),

    /// The hypernym graph contains a directed cycle
    #[error("Hypernym graph contains a cycle ({unresolved} synsets could not be ordered)")]
    Cycle { unresolved: NumNodes },

    /// A vertex passed to a search is not a node of the graph
    #[error("Invalid vertex {vertex}: graph has {number_of_nodes} nodes")]
    InvalidVertex {
        vertex: Node,
        number_of_nodes: NumNodes,
    },

    /// A query was made with a word that is not indexed
    #[error("Not a WordNet noun: {0:?}")]
    NotANoun(String),

    /// Two nouns have no synset in common among their ancestors
    #[error("No common ancestor of {0:?} and {1:?}")]
    NoCommonAncestor(String, String),

    /// Reading an input source failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new [`Error::InvalidArgument`]
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Creates a new [`Error::Parse`]
    pub fn parse<S: Into<String>>(input: InputKind, line: usize, reason: S) -> Self {
        Error::Parse {
            input,
            line,
            reason: reason.into(),
        }
    }

    /// Creates a new [`Error::NoCommonAncestor`]
    pub fn no_common_ancestor<S: Into<String>, T: Into<String>>(a: S, b: T) -> Self {
        Error::NoCommonAncestor(a.into(), b.into())
    }

    /// Creates a new [`Error::NotANoun`]
    pub fn not_a_noun<S: Into<String>>(word: S) -> Self {
        Error::NotANoun(word.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::parse(InputKind::Hypernyms, 3, "id out of range").to_string(),
            "Parse error in hypernyms (line 3): id out of range"
        );
        assert_eq!(
            Error::MultipleRoots(2, 7).to_string(),
            "Hypernym graph has multiple roots (at least 2 and 7)"
        );
        assert_eq!(Error::not_a_noun("zebra").to_string(), "Not a WordNet noun: \"zebra\"");
        assert_eq!(
            Error::no_common_ancestor("cat", "rock").to_string(),
            "No common ancestor of \"cat\" and \"rock\""
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
