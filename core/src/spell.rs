use crate::vocab::Vocabulary;

/// A theme entry and the string it contributes to each meta answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Themer {
    pub entry: String,
    pub contributions: Vec<String>,
}

impl Themer {
    pub fn new(entry: &str, contributions: &[&str]) -> Themer {
        Themer {
            entry: entry.to_string(),
            contributions: contributions.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Enumerates the ordered sequences of themers that spell `meta`: each
/// chosen themer contributes its (single) contribution in turn, and the
/// concatenation must equal `meta` exactly. `min_count` and `max_count`
/// bound how many themers a spelling may use.
pub fn spell_meta<'a>(
    meta: &'a str,
    themers: &'a [Themer],
    min_count: Option<usize>,
    max_count: Option<usize>,
) -> SpellMetas<'a> {
    spell_metas(&[meta], themers, min_count, max_count)
}

/// Like [`spell_meta`], but every spelling must spell all the meta answers
/// at once: the i-th contribution of each chosen themer goes toward the
/// i-th meta.
pub fn spell_metas<'a>(
    metas: &[&'a str],
    themers: &'a [Themer],
    min_count: Option<usize>,
    max_count: Option<usize>,
) -> SpellMetas<'a> {
    SpellMetas {
        themers,
        min_count: min_count.unwrap_or(0),
        max_count: max_count.unwrap_or(usize::MAX),
        used: vec![false; themers.len()],
        chosen: Vec::new(),
        remainders: vec![metas.to_vec()],
        next: 0,
        done: false,
    }
}

/// Lazy iterator over spellings, yielding the chosen themer entries in
/// order. A depth-first search with an explicit stack: `chosen` holds the
/// themer indices picked so far, `remainders` the unspelled tail of every
/// meta at each depth, and `next` the next candidate index at the current
/// depth.
#[derive(Clone, Debug)]
pub struct SpellMetas<'a> {
    themers: &'a [Themer],
    min_count: usize,
    max_count: usize,
    used: Vec<bool>,
    chosen: Vec<usize>,
    remainders: Vec<Vec<&'a str>>,
    next: usize,
    done: bool,
}

impl<'a> Iterator for SpellMetas<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Vec<&'a str>> {
        if self.done {
            return None;
        }
        loop {
            let remainders = self.remainders.last().unwrap();
            let spelled = remainders.iter().all(|meta| meta.is_empty());

            // A fully spelled state is terminal; a state at the count cap
            // is a dead end unless it is spelled.
            if !spelled && self.chosen.len() < self.max_count {
                let mut found = None;
                while self.next < self.themers.len() {
                    let i = self.next;
                    if !self.used[i] {
                        if let Some(stripped) =
                            strip_all(remainders, &self.themers[i].contributions)
                        {
                            found = Some((i, stripped));
                            break;
                        }
                    }
                    self.next += 1;
                }
                if let Some((i, stripped)) = found {
                    self.used[i] = true;
                    self.chosen.push(i);
                    self.remainders.push(stripped);
                    self.next = 0;
                    continue;
                }
            }

            let result = (spelled && self.chosen.len() >= self.min_count).then(|| {
                self.chosen
                    .iter()
                    .map(|&i| self.themers[i].entry.as_str())
                    .collect()
            });
            match self.chosen.pop() {
                Some(i) => {
                    self.used[i] = false;
                    self.remainders.pop();
                    self.next = i + 1;
                }
                None => self.done = true,
            }
            if result.is_some() {
                return result;
            }
            if self.done {
                return None;
            }
        }
    }
}

/// Strips the i-th contribution off the front of the i-th meta remainder.
/// `None` if any contribution is not a prefix of its meta (or the counts
/// do not line up).
fn strip_all<'a>(metas: &[&'a str], contributions: &[String]) -> Option<Vec<&'a str>> {
    if metas.len() != contributions.len() {
        return None;
    }
    metas
        .iter()
        .zip(contributions)
        .map(|(meta, contribution)| meta.strip_prefix(contribution.as_str()))
        .collect()
}

/// Whether a set of theme entries has symmetrical lengths, so that it can
/// be placed symmetrically in a grid.
pub fn is_symmetrical(themers: &[&str]) -> bool {
    let lengths: Vec<usize> = themers.iter().map(|themer| themer.len()).collect();
    lengths.iter().eq(lengths.iter().rev())
}

/// Finds vocabulary words that a set of potential theme entries can spell,
/// yielding each word with the spellings `filter` accepts. Pass
/// [`is_symmetrical`] to only accept grid-symmetric theme sets.
pub fn spellable_metas<'a>(
    themers: &'a [Themer],
    vocab: &'a Vocabulary,
    min_count: Option<usize>,
    max_count: Option<usize>,
    filter: impl Fn(&[&str]) -> bool + 'a,
) -> impl Iterator<Item = (&'a str, Vec<Vec<&'a str>>)> + 'a {
    vocab.iter().filter_map(move |(word, _)| {
        let spellings: Vec<Vec<&str>> = spell_meta(word, themers, min_count, max_count)
            .filter(|spelling| filter(spelling))
            .collect();
        (!spellings.is_empty()).then_some((word, spellings))
    })
}
