/// Characters that count as punctuation when stripping tokens and when
/// deciding whether a token is a standalone punctuation mark.
pub const PUNCTUATION_CHARACTERS: [char; 4] = [',', '.', '!', '?'];

const SENTENCE_ENDING_SUFFIXES: [&str; 6] = [".", "!", "?", ".\"", "!\"", "?\""];
const ELLIPSIS: &str = "...";

/// One recognized token with word-level timing, as produced by a
/// speech recognizer.
///
/// `word` may carry attached punctuation exactly as recognized
/// (`"there."`), or be a standalone punctuation token (`"."`); the
/// two styles are treated independently by `is_punctuation` and
/// `ends_sentence`.
#[derive(Clone, Debug, PartialEq)]
pub struct WordInfo {
    pub word: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl WordInfo {
    pub fn new(word: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            word: word.into(),
            start_time,
            end_time,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// True iff the token is exactly one punctuation character
    /// (`,` `.` `!` `?`). Punctuation attached to a word does not count.
    pub fn is_punctuation(&self) -> bool {
        let mut chars = self.word.chars();
        matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if PUNCTUATION_CHARACTERS.contains(&c)
        )
    }

    /// True iff the token terminates a sentence: it ends with `.` `!` `?`,
    /// optionally followed by a closing quote, and does not end with the
    /// three-period ellipsis. The ellipsis exception wins, so a trailing
    /// `...` never ends a sentence.
    pub fn ends_sentence(&self) -> bool {
        if self.word.ends_with(ELLIPSIS) {
            return false;
        }
        SENTENCE_ENDING_SUFFIXES
            .iter()
            .any(|suffix| self.word.ends_with(suffix))
    }

    /// The token with leading and trailing punctuation characters stripped.
    pub fn without_punctuation(&self) -> &str {
        self.word.trim_matches(&PUNCTUATION_CHARACTERS[..])
    }

    /// A new token with the first character upper-cased and identical
    /// timing. A no-op for an empty `word`.
    pub fn capitalized(&self) -> WordInfo {
        let mut chars = self.word.chars();
        let word = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        WordInfo {
            word,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}
