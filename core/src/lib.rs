//! Core of the word-list engine: load scored word lists, renumber their
//! incompatible scoring scales onto one shared scale, merge them into a
//! single vocabulary, enumerate the ways an entry splits into vocabulary
//! words, and search for the meta answers a set of theme entries can
//! spell.

pub mod load;
pub mod score;
pub mod segment;
pub mod spell;
pub mod vocab;
pub mod word;

pub use load::{load_bonuses, parse_bonuses, Source};
pub use score::{normalize, Band, RawScore, Rule, Score};
pub use segment::{segmentations, Segmentations};
pub use spell::{is_symmetrical, spell_meta, spell_metas, spellable_metas, SpellMetas, Themer};
pub use vocab::Vocabulary;
