use crate::score::Score;
use crate::vocab::Vocabulary;

/// Score a 1- or 2-letter word needs before the segmenter will use it.
/// Keeps "a"/"i" and genuine short words while screening out the two-letter
/// abbreviations (airport codes, state codes) that pollute source lists.
const SHORT_WORD_MIN_SCORE: Score = 50;

/// Enumerates every way to split `entry` into a left-to-right sequence of
/// vocabulary words whose concatenation is exactly `entry`. The enumeration
/// is lazy, exhaustive, duplicate-free, and deterministic: splits that take
/// a shorter first word come out first, so the whole-entry split (when
/// valid) comes out last.
///
/// With `ignore_short` set, 1- and 2-letter candidates scoring under 50 are
/// not treated as words. The rule is uniform: it applies to prefix
/// candidates, to the terminal suffix, and to the entry itself, so a
/// low-scoring 2-letter entry has no segmentations at all.
///
/// `entry` is expected to be in cleaned form already (lowercase ASCII
/// letters, no delimiters). An entry with no valid split, including the
/// empty entry, just yields nothing.
pub fn segmentations<'a>(
    entry: &'a str,
    vocab: &'a Vocabulary,
    ignore_short: bool,
) -> Segmentations<'a> {
    debug_assert!(entry.is_ascii());
    Segmentations {
        entry,
        vocab,
        ignore_short,
        splits: Vec::new(),
        next_end: 1,
        done: false,
    }
}

/// Lazy iterator over segmentations. A depth-first search over split
/// points with an explicit stack: `splits` holds the word-end offsets
/// chosen so far and `next_end` is the next candidate end for the word
/// starting at the last split.
#[derive(Clone, Debug)]
pub struct Segmentations<'a> {
    entry: &'a str,
    vocab: &'a Vocabulary,
    ignore_short: bool,
    splits: Vec<usize>,
    next_end: usize,
    done: bool,
}

impl<'a> Segmentations<'a> {
    fn is_word(&self, candidate: &str) -> bool {
        match self.vocab.score(candidate) {
            Some(score) => {
                !self.ignore_short || candidate.len() >= 3 || score >= SHORT_WORD_MIN_SCORE
            }
            None => false,
        }
    }

    fn current(&self) -> Vec<&'a str> {
        let entry = self.entry;
        let mut words = Vec::with_capacity(self.splits.len());
        let mut start = 0;
        for &end in &self.splits {
            words.push(&entry[start..end]);
            start = end;
        }
        words
    }

    /// Pops the most recent split and resumes the scan just past it.
    /// Returns false when the whole search space is exhausted.
    fn backtrack(&mut self) -> bool {
        match self.splits.pop() {
            Some(end) => {
                self.next_end = end + 1;
                true
            }
            None => {
                self.done = true;
                false
            }
        }
    }
}

impl<'a> Iterator for Segmentations<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Vec<&'a str>> {
        if self.done {
            return None;
        }
        let entry = self.entry;
        loop {
            let start = self.splits.last().copied().unwrap_or(0);
            let found = (self.next_end..=entry.len())
                .find(|&end| self.is_word(&entry[start..end]));
            match found {
                Some(end) => {
                    self.splits.push(end);
                    self.next_end = end + 1;
                    if end == entry.len() {
                        let words = self.current();
                        self.backtrack();
                        return Some(words);
                    }
                }
                None => {
                    if !self.backtrack() {
                        return None;
                    }
                }
            }
        }
    }
}
