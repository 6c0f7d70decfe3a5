use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::load::Source;
use crate::score::Score;

/// The merged word->score mapping used as the ground truth for "is this a
/// real word" queries. Built once from an ordered sequence of sources and
/// treated as read-only afterward.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Vocabulary {
    words: BTreeMap<String, Score>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Folds a source into the vocabulary. Across the merge sequence the
    /// first source to define a word wins; later sources never overwrite.
    /// (Within one file it is the last line that wins - see
    /// [`Source::parse`] - and that asymmetry is deliberate.)
    pub fn merge(&mut self, source: Source) {
        for (word, score) in source.into_words() {
            self.words.entry(word).or_insert(score);
        }
    }

    /// Drops every word scoring below `min_score`.
    pub fn apply_floor(&mut self, min_score: Score) {
        self.words.retain(|_, score| *score >= min_score);
    }

    /// Adds bonus points in place for words already in the vocabulary.
    /// Bonus words the vocabulary lacks are silently ignored, never added.
    pub fn add_bonuses(&mut self, bonuses: &BTreeMap<String, Score>) {
        for (word, bonus) in bonuses {
            if let Some(score) = self.words.get_mut(word) {
                *score = score.saturating_add(*bonus);
            }
        }
    }

    pub fn score(&self, word: &str) -> Option<Score> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates entries in lexicographic word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> {
        self.words.iter().map(|(word, score)| (word.as_str(), *score))
    }

    /// Words grouped by length, for the searches that want "every 7-letter
    /// word" rather than the whole mapping.
    pub fn grouped_by_len(&self) -> HashMap<usize, Vec<&str>> {
        self.words
            .keys()
            .map(|word| (word.len(), word.as_str()))
            .into_group_map()
    }

    /// Writes `word;score` lines (or bare `word` lines when `scores` is
    /// false), sorted by word, skipping words below `min_score`.
    pub fn write(&self, w: &mut impl Write, scores: bool, min_score: Score) -> io::Result<()> {
        for (word, score) in &self.words {
            if *score >= min_score {
                if scores {
                    writeln!(w, "{};{}", word, score)?;
                } else {
                    writeln!(w, "{}", word)?;
                }
            }
        }
        Ok(())
    }

    /// Saves the vocabulary to a text file at `path`.
    pub fn save(&self, path: impl AsRef<Path>, scores: bool, min_score: Score) -> io::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| io::Error::new(e.kind(), format!("Cannot write {:?}: {}", path, e)))?;
        let mut w = BufWriter::new(file);
        self.write(&mut w, scores, min_score)?;
        w.flush()
    }
}

impl<S: Into<String>> FromIterator<(S, Score)> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = (S, Score)>>(iter: T) -> Self {
        Vocabulary {
            words: iter
                .into_iter()
                .map(|(word, score)| (word.into(), score))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::parse_bonuses;

    fn source(name: &str, contents: &str) -> Source {
        Source::parse(contents, name, &[]).unwrap()
    }

    fn merged(sources: &[(&str, &str)]) -> Vocabulary {
        let mut vocab = Vocabulary::new();
        for (name, contents) in sources {
            vocab.merge(source(name, contents));
        }
        vocab
    }

    #[test]
    fn test_first_source_wins() {
        let a = ("a", "cat;10\nshared;30\n");
        let b = ("b", "dog;20\nshared;70\n");

        let ab = merged(&[a, b]);
        assert_eq!(ab.score("shared"), Some(30));
        let ba = merged(&[b, a]);
        assert_eq!(ba.score("shared"), Some(70));

        // Words in exactly one source keep that source's score either way.
        for vocab in [&ab, &ba] {
            assert_eq!(vocab.score("cat"), Some(10));
            assert_eq!(vocab.score("dog"), Some(20));
            assert_eq!(vocab.len(), 3);
        }
    }

    #[test]
    fn test_apply_floor() {
        let mut vocab = merged(&[("a", "low;9\nedge;10\nhigh;50\n")]);
        vocab.apply_floor(10);
        assert!(!vocab.contains("low"));
        assert_eq!(vocab.score("edge"), Some(10));
        assert_eq!(vocab.score("high"), Some(50));
    }

    #[test]
    fn test_bonus_additivity() {
        let mut vocab: Vocabulary = [("cat", 10)].into_iter().collect();
        let bonuses = parse_bonuses("**cat;clue\n*stranger;clue\n");
        vocab.add_bonuses(&bonuses);
        // Two stars -> bonus 3.
        assert_eq!(vocab.score("cat"), Some(13));
        // Bonus words absent from the vocabulary are not inserted.
        assert!(!vocab.contains("stranger"));
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_bonus_saturates_at_score_max() {
        let mut vocab: Vocabulary = [("cat", Score::MAX)].into_iter().collect();
        vocab.add_bonuses(&parse_bonuses("**cat;clue\n"));
        assert_eq!(vocab.score("cat"), Some(Score::MAX));
    }

    #[test]
    fn test_write_scored_and_unscored() {
        let vocab: Vocabulary = [("beta", 30), ("alpha", 50), ("gamma", 5)]
            .into_iter()
            .collect();

        let mut out = Vec::new();
        vocab.write(&mut out, true, 10).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "alpha;50\nbeta;30\n");

        let mut out = Vec::new();
        vocab.write(&mut out, false, 10).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "alpha\nbeta\n");
    }

    #[test]
    fn test_round_trip() {
        let vocab: Vocabulary = [("alpha", 50), ("beta", 30), ("gamma", 5)]
            .into_iter()
            .collect();
        let mut out = Vec::new();
        vocab.write(&mut out, true, 10).unwrap();

        // Reloading the scored output with no rules recovers the mapping,
        // minus the entries the save floor dropped.
        let mut reloaded = Vocabulary::new();
        reloaded.merge(Source::parse(&String::from_utf8(out).unwrap(), "saved", &[]).unwrap());
        let mut expected = vocab.clone();
        expected.apply_floor(10);
        assert_eq!(reloaded, expected);
    }

    #[test]
    fn test_grouped_by_len() {
        let vocab: Vocabulary = [("cat", 10), ("dog", 20), ("horse", 30)]
            .into_iter()
            .collect();
        let grouped = vocab.grouped_by_len();
        assert_eq!(grouped[&3], vec!["cat", "dog"]);
        assert_eq!(grouped[&5], vec!["horse"]);
        assert_eq!(grouped.get(&4), None);
    }

    #[test]
    fn test_iter_is_sorted() {
        let vocab: Vocabulary = [("dog", 20), ("cat", 10)].into_iter().collect();
        assert_eq!(
            vocab.iter().collect::<Vec<_>>(),
            vec![("cat", 10), ("dog", 20)]
        );
    }
}
