use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::io::ErrorKind;
use std::path::Path;

use crate::score::{normalize, RawScore, Rule, Score};
use crate::word::clean;

/// One parsed source list: the scored words a single file contributes to a
/// merged vocabulary, after cleaning and normalization.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Source {
    name: String,
    words: BTreeMap<String, Score>,
}

impl Source {
    /// Reads and parses a word list at `path`, applying the normalizer
    /// chain `rules` to every entry.
    pub fn load(path: impl AsRef<Path>, rules: &[Rule]) -> io::Result<Source> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("Cannot read {:?}: {}", path, e)))?;
        Self::parse(&contents, &path.to_string_lossy(), rules)
    }

    /// Parses a word list from memory. Each line is `word;score[;extra]`:
    /// the word is cleaned to lowercase `a-z`, the score is the integer
    /// between the first and second `;`, and trailing fields are ignored.
    ///
    /// Loading is all-or-nothing: a line with no `;` or a non-integer score
    /// fails the whole parse with an error naming `name` and the line.
    /// When the same cleaned word appears on several lines, the last
    /// accepted line wins; a line the rules reject never erases an earlier
    /// accepted one.
    pub fn parse(contents: &str, name: &str, rules: &[Rule]) -> io::Result<Source> {
        let mut words = BTreeMap::new();
        for (i, line) in contents.lines().enumerate() {
            let Some((raw_word, rest)) = line.split_once(';') else {
                return Err(bad_entry(name, i + 1, line));
            };
            let raw_score = rest.split(';').next().unwrap_or(rest);
            let score = raw_score
                .trim()
                .parse::<RawScore>()
                .map_err(|_| bad_entry(name, i + 1, line))?;

            let word = clean(raw_word);
            if word.is_empty() {
                continue;
            }
            if let Some(score) = normalize(rules, &word, score) {
                words.insert(word, score);
            }
        }
        Ok(Source {
            name: name.to_string(),
            words,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn score(&self, word: &str) -> Option<Score> {
        self.words.get(word).copied()
    }

    pub(crate) fn into_words(self) -> BTreeMap<String, Score> {
        self.words
    }
}

fn bad_entry(name: &str, line_number: usize, line: &str) -> io::Error {
    io::Error::new(
        ErrorKind::InvalidData,
        format!("{}:{}: bad entry: {:?}", name, line_number, line),
    )
}

/// Parses a bonus list: `word-with-leading-stars;…` per line, worth
/// 1 + star-count points. A word repeated with different star counts keeps
/// its highest bonus. There are no malformed lines in this format.
pub fn parse_bonuses(contents: &str) -> BTreeMap<String, Score> {
    let mut bonuses = BTreeMap::new();
    for line in contents.lines() {
        let starred = line.trim().split(';').next().unwrap_or_default();
        let word = starred.trim_start_matches('*');
        if word.is_empty() {
            continue;
        }
        let bonus = 1 + (starred.len() - word.len()) as Score;
        let entry = bonuses.entry(word.to_string()).or_insert(0);
        if bonus > *entry {
            *entry = bonus;
        }
    }
    bonuses
}

/// Reads and parses a bonus list at `path`.
pub fn load_bonuses(path: impl AsRef<Path>) -> io::Result<BTreeMap<String, Score>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("Cannot read {:?}: {}", path, e)))?;
    Ok(parse_bonuses(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::presets;

    #[test]
    fn test_parse() {
        let source = Source::parse("FOO;30\nBar's;50;extra;fields\nbaz;40\n", "test", &[]).unwrap();
        assert_eq!(source.name(), "test");
        assert_eq!(source.len(), 3);
        assert_eq!(source.score("foo"), Some(30));
        assert_eq!(source.score("bars"), Some(50));
        assert_eq!(source.score("baz"), Some(40));
        assert_eq!(source.score("missing"), None);
    }

    #[test]
    fn test_last_line_wins_within_file() {
        let source = Source::parse("cat;10\ndog;30\ncat;20\n", "test", &[]).unwrap();
        assert_eq!(source.score("cat"), Some(20));
        assert_eq!(source.score("dog"), Some(30));
    }

    #[test]
    fn test_rejected_line_keeps_earlier_entry() {
        let rules = [Rule::MaxScore(50)];
        let source = Source::parse("cat;10\ncat;99\n", "test", &rules).unwrap();
        assert_eq!(source.score("cat"), Some(10));
    }

    #[test]
    fn test_cleaning_merges_variants() {
        // Both lines clean to "mothersday"; the second wins.
        let source = Source::parse("Mother's Day;30\nMOTHERSDAY;40\n", "test", &[]).unwrap();
        assert_eq!(source.len(), 1);
        assert_eq!(source.score("mothersday"), Some(40));
    }

    #[test]
    fn test_word_cleaning_to_empty_is_skipped() {
        let source = Source::parse("123;40\nok;20\n", "test", &[]).unwrap();
        assert_eq!(source.len(), 1);
        assert_eq!(source.score("ok"), Some(20));
    }

    #[test]
    fn test_normalization_applies() {
        let source = Source::parse("great;85\nmeh;40\n", "test", &presets::stwl()).unwrap();
        assert_eq!(source.score("great"), Some(50));
        assert_eq!(source.score("meh"), None);
    }

    #[test]
    fn test_negative_raw_score_is_not_malformed() {
        // A catch-all band absorbs the negative value.
        let source = Source::parse("cat;-5\n", "test", &presets::xwi()).unwrap();
        assert_eq!(source.score("cat"), Some(20));
        // With no rules the word is silently dropped instead, keeping
        // vocabulary scores non-negative.
        let source = Source::parse("cat;-5\nok;20\n", "test", &[]).unwrap();
        assert_eq!(source.score("cat"), None);
        assert_eq!(source.score("ok"), Some(20));
    }

    #[test]
    fn test_missing_delimiter_is_fatal() {
        let err = Source::parse("fine;10\nbroken\n", "words.txt", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "words.txt:2: bad entry: \"broken\"");
    }

    #[test]
    fn test_bad_score_is_fatal() {
        let err = Source::parse("fine;10\ncat;high\n", "words.txt", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "words.txt:2: bad entry: \"cat;high\"");
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = Source::load("no/such/wordlist.txt", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("no/such/wordlist.txt"));
    }

    #[test]
    fn test_parse_bonuses() {
        let bonuses = parse_bonuses("cat;clue for cat\n**dog;clue\n*dog;other clue\n");
        assert_eq!(bonuses.get("cat"), Some(&1));
        // Duplicates keep the highest bonus.
        assert_eq!(bonuses.get("dog"), Some(&3));
        assert_eq!(bonuses.get("bird"), None);
    }
}
