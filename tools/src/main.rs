#![deny(unused_must_use)]

mod manifest;

use std::io;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::LevelFilter;

use wordlist_core::word::clean;
use wordlist_core::{segmentations, Score, Source, Vocabulary};

use crate::manifest::Manifest;

#[derive(Parser)]
#[command(name = "wordlist", about = "Build and query merged crossword word lists")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge the sources listed in a JSON manifest into one scored list
    Merge {
        /// Manifest describing the sources, in merge order
        manifest: PathBuf,
        /// Where to write the merged list
        out: PathBuf,
        /// Write bare words instead of word;score lines
        #[arg(long)]
        no_scores: bool,
        /// Drop words scoring below this when saving
        #[arg(long, default_value_t = 10)]
        min_score: Score,
    },
    /// Split entries into sequences of dictionary words
    Segment {
        /// Merged word list (word;score lines)
        list: PathBuf,
        /// Entries to split; read from stdin when none are given
        entries: Vec<String>,
        /// Ignore words scoring below this
        #[arg(long, default_value_t = 2)]
        min_score: Score,
        /// Allow low-scoring 1- and 2-letter words in splits
        #[arg(long)]
        allow_short: bool,
    },
}

fn main() -> anyhow::Result<()> {
    simple_logging::log_to_stderr(LevelFilter::Info);
    match Args::parse().command {
        Command::Merge {
            manifest,
            out,
            no_scores,
            min_score,
        } => {
            let base = manifest.parent().unwrap_or(Path::new(".")).to_owned();
            let vocab = Manifest::load(&manifest)?.build(&base)?;
            vocab.save(&out, !no_scores, min_score)?;
            log::info!("saved {:?}", out);
        }
        Command::Segment {
            list,
            entries,
            min_score,
            allow_short,
        } => {
            let mut vocab = Vocabulary::new();
            vocab.merge(Source::load(&list, &[])?);
            vocab.apply_floor(min_score);

            if entries.is_empty() {
                for line in io::stdin().lock().lines() {
                    segment_entry(&line?, &vocab, !allow_short);
                }
            } else {
                for entry in &entries {
                    segment_entry(entry, &vocab, !allow_short);
                }
            }
        }
    }
    Ok(())
}

/// Prints every split of one entry, one per line. The entry may be a raw
/// `word;score;...` line; everything from the first `;` on is dropped and
/// the rest is cleaned before splitting.
fn segment_entry(entry: &str, vocab: &Vocabulary, ignore_short: bool) {
    let entry = clean(entry.split(';').next().unwrap_or_default());
    for words in segmentations(&entry, vocab, ignore_short) {
        println!("{}", words.join(" "));
    }
}
