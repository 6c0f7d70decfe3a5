use serde::{Deserialize, Serialize};

/// Word score like 30 or 50 on the shared 0-100ish scale.
pub type Score = u16;

/// A score as a source file states it, before normalization. Sources get
/// to be sloppy here: negative and absurdly large values are legal input
/// and are left to the band tables (or the final range check) to absorb.
pub type RawScore = i64;

/// One step of a normalizer chain. Each step either rewrites the score or
/// rejects the word outright, dropping it from that source's contribution.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Reject words scoring below the bound.
    MinScore(Score),
    /// Reject words scoring above the bound.
    MaxScore(Score),
    /// Reject words shorter than the bound.
    MinLength(usize),
    /// Reject words longer than the bound.
    MaxLength(usize),
    /// Ordered score bands, evaluated top-down. The first band whose floor
    /// the raw score reaches decides the output; no match rejects. A band
    /// with floor 0 acts as a catch-all.
    Bands(Vec<Band>),
}

/// A `raw >= floor` threshold mapped to a fixed output score.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub floor: Score,
    pub score: Score,
}

impl Band {
    pub fn new(floor: Score, score: Score) -> Self {
        Band { floor, score }
    }
}

impl Rule {
    /// Applies this step to `(word, score)`. `None` means the word is
    /// rejected. Out-of-range scores are never an error; they either fall
    /// through to a catch-all band or reject.
    pub fn apply(&self, word: &str, score: RawScore) -> Option<RawScore> {
        match self {
            Rule::MinScore(min) => (score >= *min as RawScore).then_some(score),
            Rule::MaxScore(max) => (score <= *max as RawScore).then_some(score),
            Rule::MinLength(min) => (word.len() >= *min).then_some(score),
            Rule::MaxLength(max) => (word.len() <= *max).then_some(score),
            Rule::Bands(bands) => bands
                .iter()
                .find(|b| score >= b.floor as RawScore)
                .map(|b| b.score as RawScore),
        }
    }
}

/// Runs a normalizer chain left to right. Any rejection stops the chain,
/// as does a final value outside the `Score` range (a negative or huge
/// raw score that no band caught rejects the word, it does not error).
pub fn normalize(rules: &[Rule], word: &str, raw: RawScore) -> Option<Score> {
    let mut score = raw;
    for rule in rules {
        score = rule.apply(word, score)?;
    }
    Score::try_from(score).ok()
}

/// Rule chains for the source lists the merged vocabulary is usually built
/// from. Each list scores on its own incompatible scale, so each gets its
/// own band table.
pub mod presets {
    use super::{Band, Rule};

    /// XWI scores 1-100 in a wide, linear way; collapse to coarse bands.
    pub fn xwi() -> Vec<Rule> {
        vec![Rule::Bands(vec![
            Band::new(60, 60),
            Band::new(50, 50),
            Band::new(30, 30),
            Band::new(0, 20),
        ])]
    }

    /// STWL is only trusted as a pass/fail signal at 50.
    pub fn stwl() -> Vec<Rule> {
        vec![Rule::Bands(vec![Band::new(50, 50)])]
    }

    /// Broda entries are only worth keeping when long and highly scored.
    pub fn broda() -> Vec<Rule> {
        vec![Rule::MinLength(7), Rule::Bands(vec![Band::new(80, 60)])]
    }

    pub fn by_name(name: &str) -> Option<Vec<Rule>> {
        match name {
            "xwi" => Some(xwi()),
            "stwl" => Some(stwl()),
            "broda" => Some(broda()),
            _ => None,
        }
    }
}
