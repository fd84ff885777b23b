/*!
# IO

Readers for the two text sources a [`WordNet`](crate::wordnet::WordNet) is built from.

## Input Formats

- **Synsets**: one record `id,noun1 noun2 ...,gloss` per line, where `id` equals the
  0-based record index. The gloss is ignored and may contain further separators.
- **Hypernyms**: one record `child,parent1,parent2,...` per line. Every parent
  becomes an edge `child -> parent`. Synsets without a record have no hypernyms.

Blank lines are skipped in both formats. Separators are configurable via the
builder-style setters of [`SynsetReader`] and [`HypernymReader`].

All readers accept any [`BufRead`] and additionally provide a `*_file` shorthand.
Malformed input is reported as [`Error::Parse`](crate::error::Error::Parse) with the
1-based line number of the offending record.
*/

pub mod hypernyms;
pub mod synsets;

use std::io::{BufRead, Lines};

use crate::error::{Error, InputKind, Result};

pub use hypernyms::*;
pub use synsets::*;

/// Iterator over the non-blank lines of an input source together with their 1-based line numbers
pub(crate) struct Records<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Records<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line += 1;

            match line {
                Err(x) => return Some(Err(Error::from(x))),
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(Ok((self.line, line))),
            }
        }
    }
}

/// Shorthand for returning `Err(Error::Parse)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $input : expr, $line : expr, $info : expr) => {
        if !($cond) {
            return Err(Error::parse($input, $line, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $input : expr, $line : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(Error::parse(
                $input,
                $line,
                format!("Premature end of line when parsing {}.", $name),
            ));
        };

        match token.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(Error::parse(
                    $input,
                    $line,
                    format!("Invalid value {:?} found. Cannot parse {}.", token, $name),
                ));
            }
        }
    }};
}

use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_skip_blank_lines() {
        let input = "first\n\n   \nsecond\r\nthird";
        let records: Vec<_> = Records::new(input.as_bytes())
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(
            records,
            vec![
                (1, "first".to_string()),
                (4, "second".to_string()),
                (5, "third".to_string())
            ]
        );
    }

    #[test]
    fn records_of_empty_input() {
        assert_eq!(Records::new("".as_bytes()).count(), 0);
        assert_eq!(Records::new("\n\n".as_bytes()).count(), 0);
    }

    fn parse_pair(line: &str) -> Result<(u32, u32)> {
        let mut parts = line.split(',');
        let a: u32 = parse_next_value!(parts, InputKind::Hypernyms, 1, "first");
        let b: u32 = parse_next_value!(parts, InputKind::Hypernyms, 1, "second");
        raise_error_unless!(a < b, InputKind::Hypernyms, 1, "not increasing");
        Ok((a, b))
    }

    #[test]
    fn parse_macros() {
        assert_eq!(parse_pair("1, 2").unwrap(), (1, 2));
        assert!(matches!(parse_pair("1"), Err(Error::Parse { line: 1, .. })));
        assert!(matches!(parse_pair("x,2"), Err(Error::Parse { .. })));
        assert!(matches!(parse_pair("3,2"), Err(Error::Parse { .. })));
    }
}
