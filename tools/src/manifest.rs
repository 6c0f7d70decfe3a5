use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;

use wordlist_core::score::presets;
use wordlist_core::{load_bonuses, Rule, Score, Source, Vocabulary};

/// A build recipe for a merged vocabulary: an ordered list of sources
/// (order matters - the first source to define a word wins), a score floor
/// for the result, and an optional bonus list. Stored as JSON next to the
/// word lists; relative paths resolve against the manifest's directory.
///
/// ```json
/// {
///     "sources": [
///         {"path": "jkugelman-wordlist.txt"},
///         {"path": "XwiJeffChenList.txt", "preset": "xwi"},
///         {"path": "spreadthewordlist.txt", "preset": "stwl"},
///         {"path": "broda-scored.txt", "preset": "broda"},
///         {"path": "extra.txt", "rules": [{"min_score": 50}]}
///     ],
///     "min_score": 10,
///     "bonuses": "jkugelman-clues.txt"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub sources: Vec<SourceSpec>,
    #[serde(default)]
    pub min_score: Score,
    pub bonuses: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSpec {
    pub path: PathBuf,
    /// Named rule chain (`xwi`, `stwl`, `broda`). Explicit `rules` run
    /// after the preset when both are given.
    pub preset: Option<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl SourceSpec {
    pub fn rules(&self) -> anyhow::Result<Vec<Rule>> {
        let mut rules = match &self.preset {
            Some(name) => match presets::by_name(name) {
                Some(rules) => rules,
                None => bail!("{:?}: unknown preset {:?}", self.path, name),
            },
            None => Vec::new(),
        };
        rules.extend(self.rules.iter().cloned());
        Ok(rules)
    }
}

impl Manifest {
    pub fn load(path: &Path) -> anyhow::Result<Manifest> {
        let contents = read_path_to_string(path)?;
        let manifest: Manifest = serde_json::from_str(&contents)
            .with_context(|| format!("Cannot parse manifest {:?}", path))?;
        if manifest.sources.is_empty() {
            bail!("{:?}: manifest lists no sources", path);
        }
        Ok(manifest)
    }

    /// Builds the vocabulary the manifest describes, resolving relative
    /// paths against `base`.
    pub fn build(&self, base: &Path) -> anyhow::Result<Vocabulary> {
        let mut vocab = Vocabulary::new();
        for spec in &self.sources {
            let source = Source::load(base.join(&spec.path), &spec.rules()?)?;
            log::info!("{}: {} words", source.name(), source.len());
            vocab.merge(source);
        }
        vocab.apply_floor(self.min_score);
        if let Some(bonuses) = &self.bonuses {
            vocab.add_bonuses(&load_bonuses(base.join(bonuses))?);
        }
        log::info!("merged: {} words", vocab.len());
        Ok(vocab)
    }
}

pub fn read_path_to_string(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("Cannot read {:?}: {}", path, e)))
}
