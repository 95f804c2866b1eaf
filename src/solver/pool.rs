//! Candidate pool: lexicon words still consistent with what has been learned

use super::Knowledge;
use crate::core::Word;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Check a single word against every constraint in `knowledge`
#[must_use]
pub fn is_consistent(word: &Word, knowledge: &Knowledge) -> bool {
    knowledge.present_letters().all(|letter| word.has_letter(letter))
        && !knowledge.eliminated_letters().any(|letter| word.has_letter(letter))
        && knowledge
            .known_positions()
            .all(|(position, letter)| word.char_at(position) == letter)
        && !knowledge
            .excluded_positions()
            .any(|(position, letter)| word.char_at(position) == letter)
}

/// Keep the words that satisfy every constraint in `knowledge`
///
/// Pure: the relative order of `words` is preserved, and filtering the output
/// again with the same knowledge returns it unchanged.
///
/// # Examples
/// ```
/// use wordle_solver::core::{Feedback, Word};
/// use wordle_solver::solver::{Knowledge, filter};
/// use wordle_solver::wordlists::loader::words_from_slice;
///
/// let lexicon = words_from_slice(&["crane", "slate", "trace", "brine", "grape"]);
/// let mut knowledge = Knowledge::new();
/// knowledge
///     .learn(&lexicon[0], &Feedback::parse("YGGBG").unwrap())
///     .unwrap();
///
/// let pool = filter(&lexicon, &knowledge);
/// assert_eq!(pool.len(), 1);
/// assert_eq!(pool[0].text(), "trace");
/// ```
pub fn filter<'a, I>(words: I, knowledge: &Knowledge) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| is_consistent(word, knowledge))
        .collect()
}

/// Drop one specific word from a pool, leaving everything else in order
///
/// Returns whether the word was present.
pub fn remove(pool: &mut Vec<&Word>, word: &Word) -> bool {
    let before = pool.len();
    pool.retain(|&candidate| candidate != word);
    pool.len() != before
}

/// Working set of possible answers for one game
///
/// Always derived from the full lexicon: after every learning step the pool is
/// recomputed from scratch against the entire accumulated knowledge, minus any
/// word the game has rejected.
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    lexicon: &'a [Word],
    rejected: FxHashSet<&'a Word>,
    words: Vec<&'a Word>,
}

impl<'a> CandidatePool<'a> {
    /// Start with the whole lexicon
    #[must_use]
    pub fn new(lexicon: &'a [Word]) -> Self {
        Self {
            lexicon,
            rejected: FxHashSet::default(),
            words: lexicon.iter().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(&word)
    }

    /// Words the game refused to accept
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Remove a word the game does not recognize
    ///
    /// The rejection is remembered so later recomputations keep it out.
    /// Knowledge is not touched.
    pub fn reject(&mut self, word: &'a Word) {
        self.rejected.insert(word);
        if remove(&mut self.words, word) {
            debug!(word = word.text(), remaining = self.words.len(), "word rejected");
        }
    }

    /// Recompute the pool from the lexicon and the full knowledge
    pub fn refine(&mut self, knowledge: &Knowledge) {
        let before = self.words.len();
        self.words = filter(
            self.lexicon.iter().filter(|w| !self.rejected.contains(w)),
            knowledge,
        );
        debug!(before, after = self.words.len(), "candidate pool recomputed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::wordlists::loader::words_from_slice;

    fn lexicon() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "trace", "brine", "grape"])
    }

    fn knowledge_from(word: &str, feedback: &str) -> Knowledge {
        let mut knowledge = Knowledge::new();
        knowledge
            .learn(&Word::new(word).unwrap(), &Feedback::parse(feedback).unwrap())
            .unwrap();
        knowledge
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn empty_knowledge_keeps_everything() {
        let lexicon = lexicon();
        let pool = filter(&lexicon, &Knowledge::new());
        assert_eq!(pool.len(), lexicon.len());
    }

    #[test]
    fn crane_feedback_for_trace_isolates_trace() {
        let lexicon = lexicon();
        let knowledge = knowledge_from("crane", "YGGBG");
        assert_eq!(texts(&filter(&lexicon, &knowledge)), vec!["trace"]);
    }

    #[test]
    fn eliminated_c_and_n_leaves_grape() {
        // Same greens, but C reported gray: only GRAPE avoids both C and N
        let lexicon = lexicon();
        let knowledge = knowledge_from("crane", "BGGBG");
        assert_eq!(texts(&filter(&lexicon, &knowledge)), vec!["grape"]);
    }

    #[test]
    fn present_letters_are_required() {
        let lexicon = lexicon();
        let knowledge = knowledge_from("brine", "BBBBB");
        let pool = filter(&lexicon, &knowledge);
        // B, R, I, N, E all gray: every word in the lexicon has an E
        assert!(pool.is_empty());

        let knowledge = knowledge_from("slate", "BBYBB");
        // E eliminated: every word in the lexicon has one
        assert!(filter(&lexicon, &knowledge).is_empty());
    }

    #[test]
    fn excluded_positions_are_enforced() {
        let lexicon = lexicon();
        // A required but never at index 2, which is where every A in the lexicon sits
        let knowledge = knowledge_from("quack", "BBYBB");
        assert!(filter(&lexicon, &knowledge).is_empty());
    }

    #[test]
    fn filter_preserves_lexicon_order() {
        let lexicon = lexicon();
        let knowledge = knowledge_from("howdy", "BBBBB");
        assert_eq!(
            texts(&filter(&lexicon, &knowledge)),
            vec!["crane", "slate", "trace", "brine", "grape"]
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let lexicon = lexicon();
        let knowledge = knowledge_from("crane", "BGGBG");
        let once = filter(&lexicon, &knowledge);
        let twice = filter(once.iter().copied(), &knowledge);
        assert_eq!(once, twice);
    }

    #[test]
    fn remove_drops_only_that_word() {
        let lexicon = lexicon();
        let mut pool: Vec<&Word> = lexicon.iter().collect();

        assert!(remove(&mut pool, &lexicon[1]));
        assert_eq!(texts(&pool), vec!["crane", "trace", "brine", "grape"]);
        assert!(!remove(&mut pool, &lexicon[1]));
    }

    #[test]
    fn rejected_words_stay_out_after_refine() {
        let lexicon = lexicon();
        let mut pool = CandidatePool::new(&lexicon);
        pool.reject(&lexicon[2]);
        assert!(!pool.contains(&lexicon[2]));
        assert_eq!(pool.rejected_count(), 1);

        pool.refine(&knowledge_from("howdy", "BBBBB"));
        assert_eq!(pool.len(), 4);
        assert!(!pool.contains(&lexicon[2]));
    }

    #[test]
    fn refine_recomputes_from_lexicon() {
        let lexicon = lexicon();
        let mut pool = CandidatePool::new(&lexicon);
        pool.refine(&knowledge_from("crane", "YGGBG"));
        assert_eq!(texts(pool.words()), vec!["trace"]);
        assert!(!pool.is_empty());
    }
}
