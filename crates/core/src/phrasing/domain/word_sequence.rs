use std::fmt;

use thiserror::Error;

use super::sequence_filter::SequenceFilter;
use super::word_info::WordInfo;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("cannot create a word sequence from an empty word list")]
pub struct EmptySequenceError;

/// An ordered, non-empty run of recognized words — a sentence, or any
/// contiguous slice of one.
///
/// The sequence exclusively owns its words and is never mutated in
/// place; `wrap` and `transform` produce fresh owned sequences.
#[derive(Clone, Debug, PartialEq)]
pub struct WordSequence {
    words: Vec<WordInfo>,
}

impl WordSequence {
    pub fn new(words: Vec<WordInfo>) -> Result<Self, EmptySequenceError> {
        if words.is_empty() {
            return Err(EmptySequenceError);
        }
        Ok(Self { words })
    }

    /// Internal constructor for callers that already hold a non-empty list.
    pub(crate) fn from_words(words: Vec<WordInfo>) -> Self {
        debug_assert!(!words.is_empty());
        Self { words }
    }

    pub fn words(&self) -> &[WordInfo] {
        &self.words
    }

    /// Number of words, not counting standalone punctuation tokens.
    /// Punctuation attached to a word (`"there."`) counts as one word.
    pub fn word_count(&self) -> usize {
        self.words.iter().filter(|w| !w.is_punctuation()).count()
    }

    /// The rendered subtitle line: every token joined with single spaces,
    /// attached punctuation preserved exactly as recognized.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push_str(&word.word);
        }
        text
    }

    pub fn start_time(&self) -> f64 {
        self.words[0].start_time
    }

    pub fn end_time(&self) -> f64 {
        self.words[self.words.len() - 1].end_time
    }

    pub fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    /// Applies a filter to this sequence and builds one new sequence per
    /// non-empty replacement list it returns.
    ///
    /// Each call recomputes from scratch over the immutable word list,
    /// so repeated calls are independent.
    pub fn transform(&self, filter: &dyn SequenceFilter) -> Vec<WordSequence> {
        filter
            .apply(self)
            .into_iter()
            .filter(|words| !words.is_empty())
            .map(WordSequence::from_words)
            .collect()
    }

    /// Splits the sequence into chunks whose rendered text is at most
    /// `width` characters, except that a single word longer than `width`
    /// still gets a chunk of its own rather than being rejected or
    /// truncated. A `width` of zero disables wrapping.
    ///
    /// Chunks preserve the original word order, and concatenating them
    /// reproduces this sequence exactly.
    pub fn wrap(&self, width: usize) -> Vec<WordSequence> {
        if width == 0 {
            return vec![self.clone()];
        }

        let mut chunks = Vec::new();
        let mut current: Vec<WordInfo> = Vec::new();
        let mut current_len = 0;

        for word in &self.words {
            let word_len = word.word.chars().count();
            // Rendered length if this word joined the current line.
            let tentative_len = if current.is_empty() {
                word_len
            } else {
                current_len + 1 + word_len
            };

            if tentative_len <= width {
                current.push(word.clone());
                current_len = tentative_len;
            } else if current.is_empty() {
                // A single word longer than the line goes on a line by itself.
                chunks.push(WordSequence::from_words(vec![word.clone()]));
            } else {
                chunks.push(WordSequence::from_words(std::mem::take(&mut current)));
                current.push(word.clone());
                current_len = word_len;
            }
        }

        if !current.is_empty() {
            chunks.push(WordSequence::from_words(current));
        }

        chunks
    }
}

impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn sequence(text: &str) -> WordSequence {
        let words = text
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| WordInfo::new(w, i as f64, (i + 1) as f64))
            .collect();
        WordSequence::new(words).unwrap()
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        assert_eq!(WordSequence::new(vec![]), Err(EmptySequenceError));
    }

    #[test]
    fn test_text_joins_words_with_spaces() {
        assert_eq!(sequence("Hello there.").text(), "Hello there.");
        assert_eq!(sequence("Hello there.").to_string(), "Hello there.");
    }

    #[test]
    fn test_word_count_skips_standalone_punctuation() {
        assert_eq!(sequence("Hello there .").word_count(), 2);
        assert_eq!(sequence("Hello there.").word_count(), 2);
        assert_eq!(sequence(", . ! ?").word_count(), 0);
    }

    #[test]
    fn test_derived_timing() {
        let seq = WordSequence::new(vec![
            WordInfo::new("Hello", 0.1, 1.0),
            WordInfo::new("there.", 1.1, 1.5),
        ])
        .unwrap();
        assert_relative_eq!(seq.start_time(), 0.1);
        assert_relative_eq!(seq.end_time(), 1.5);
        assert_relative_eq!(seq.duration(), 1.4, epsilon = 1e-9);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(sequence("What... are you doing?"), sequence("What... are you doing?"));
        assert_ne!(sequence("What... are you doing?"), sequence("What are you doing?"));
    }

    // ── Wrapping ──────────────────────────────────────────────────────

    #[test]
    fn test_wrap_zero_width_returns_sequence_unchanged() {
        let seq = sequence("Hello there general Kenobi");
        let chunks = seq.wrap(0);
        assert_eq!(chunks, vec![seq]);
    }

    #[test]
    fn test_wrap_splits_two_words_at_width_five() {
        let chunks = sequence("Hello there").wrap(5);
        let lines: Vec<String> = chunks.iter().map(WordSequence::text).collect();
        assert_eq!(lines, vec!["Hello", "there"]);
    }

    #[test]
    fn test_wrap_keeps_sequence_that_fits() {
        let seq = sequence("Hello there");
        assert_eq!(seq.wrap(11), vec![seq]);
    }

    #[test]
    fn test_wrap_oversized_word_gets_its_own_chunk() {
        let chunks = sequence("a Supercalifragilistic b").wrap(4);
        let lines: Vec<String> = chunks.iter().map(WordSequence::text).collect();
        assert_eq!(lines, vec!["a", "Supercalifragilistic", "b"]);
    }

    #[rstest]
    #[case::tight(5)]
    #[case::typical(35)]
    #[case::wide(200)]
    fn test_wrap_conserves_words(#[case] width: usize) {
        let seq = sequence(
            "So they kind of work out what it is that we want to know \
             more information about it and make sure the information \
             gets disseminated to the people that need to know it.",
        );
        let chunks = seq.wrap(width);

        let rejoined: Vec<WordInfo> = chunks
            .iter()
            .flat_map(|chunk| chunk.words().iter().cloned())
            .collect();
        assert_eq!(rejoined, seq.words());

        let total: usize = chunks.iter().map(WordSequence::word_count).sum();
        assert_eq!(total, seq.word_count());
    }

    #[rstest]
    #[case::tight(10)]
    #[case::standard(35)]
    fn test_wrap_respects_width_for_multi_word_chunks(#[case] width: usize) {
        for chunk in sequence(
            "Today we're going to be having a look at the syllabus.",
        )
        .wrap(width)
        {
            if chunk.words().len() > 1 {
                assert!(chunk.text().chars().count() <= width);
            }
        }
    }
}
