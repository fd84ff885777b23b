//! Command line queries against a WordNet given as a synset and a hypernym file.

use std::{io::Write, path::PathBuf, process};

use clap::{Parser, Subcommand};
use env_logger::Builder;
use itertools::Itertools;
use log::LevelFilter;

use wordnet_sap::{error::Result, wordnet::WordNet};

/// Shortest ancestral paths between WordNet nouns
#[derive(Parser, Debug, Clone)]
#[command(name = "wordnet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct WordNetArgs {
    /// Synset records `id,noun1 noun2 ...,gloss`
    pub synsets: PathBuf,

    /// Hypernym records `child,parent1,parent2,...`
    pub hypernyms: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl WordNetArgs {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Length of a shortest ancestral path between two nouns
    Distance { a: String, b: String },

    /// Synset of the common ancestor on a shortest ancestral path between two nouns
    Sap { a: String, b: String },

    /// The noun least related to all others
    Outcast {
        #[arg(required = true)]
        nouns: Vec<String>,
    },

    /// List all nouns in lexicographic order
    Nouns,
}

fn execute(args: WordNetArgs) -> Result<()> {
    let wordnet = WordNet::from_files(&args.synsets, &args.hypernyms)?;

    let mut out = std::io::stdout().lock();
    match args.command {
        Command::Distance { a, b } => match wordnet.distance(&a, &b)? {
            Some(length) => writeln!(out, "{length}")?,
            None => writeln!(out, "no common ancestor")?,
        },
        Command::Sap { a, b } => match wordnet.sap(&a, &b)? {
            Some(synset) => writeln!(out, "{synset}")?,
            None => writeln!(out, "no common ancestor")?,
        },
        Command::Outcast { nouns } => writeln!(out, "{}", wordnet.outcast(&nouns)?)?,
        Command::Nouns => {
            for noun in wordnet.nouns().sorted() {
                writeln!(out, "{noun}")?;
            }
        }
    }

    Ok(())
}

fn main() {
    let args = WordNetArgs::parse();

    Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
