use super::word_info::WordInfo;
use super::word_sequence::WordSequence;

/// The full ordered word list recognized from one audio source.
///
/// Built once from recognizer output and read-only afterward; words are
/// in recognition order, so start times are non-decreasing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    words: Vec<WordInfo>,
}

impl Transcript {
    pub fn new(words: Vec<WordInfo>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[WordInfo] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the sentences of the transcript, in order.
    ///
    /// Each sentence runs from the current position through the first
    /// sentence-ending token inclusive; words after the last terminator
    /// form a final unterminated sentence. The sentences partition the
    /// word list with no gaps or overlaps.
    ///
    /// Every call starts a fresh scan over the immutable word list, so
    /// iterators are independent and abandoning one has no effect.
    pub fn sentences(&self) -> Sentences<'_> {
        Sentences {
            remaining: &self.words,
        }
    }
}

/// Iterator over a transcript's sentences. See [`Transcript::sentences`].
pub struct Sentences<'a> {
    remaining: &'a [WordInfo],
}

impl Iterator for Sentences<'_> {
    type Item = WordSequence;

    fn next(&mut self) -> Option<WordSequence> {
        if self.remaining.is_empty() {
            return None;
        }

        let end = self
            .remaining
            .iter()
            .position(|word| word.ends_sentence())
            .map_or(self.remaining.len(), |i| i + 1);

        let (sentence, rest) = self.remaining.split_at(end);
        self.remaining = rest;
        log::debug!("next sentence spans {} words", sentence.len());
        Some(WordSequence::from_words(sentence.to_vec()))
    }
}
