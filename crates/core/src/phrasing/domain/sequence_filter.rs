use super::word_info::WordInfo;
use super::word_sequence::WordSequence;

/// Domain interface for sentence-level cleanup passes.
///
/// A filter maps one sequence to zero or more replacement word lists.
/// Plain lists rather than sequences, because a filter may legitimately
/// drop every word, and may split one input into several outputs.
/// Filters must preserve the relative order and original timing of the
/// words they keep; they never fabricate timing data.
pub trait SequenceFilter {
    fn apply(&self, sequence: &WordSequence) -> Vec<Vec<WordInfo>>;
}

/// Default filler tokens dropped by [`FillerWordFilter`].
pub const DEFAULT_FILLER_WORDS: &[&str] = &["um", "uh"];

/// Drops spoken disfluencies ("um", "uh") from a sequence.
///
/// A token is a filler when its punctuation-stripped form matches one
/// of the configured fillers case-insensitively, so both `"um,"` and
/// `"um..."` are caught. A standalone comma token immediately after a
/// removed filler is dropped with it, covering recognizers that emit
/// punctuation as separate tokens.
pub struct FillerWordFilter {
    fillers: Vec<String>,
}

impl FillerWordFilter {
    pub fn new(fillers: &[&str]) -> Self {
        Self {
            fillers: fillers.iter().map(|f| f.to_lowercase()).collect(),
        }
    }

    fn is_filler(&self, word: &WordInfo) -> bool {
        let stripped = word.without_punctuation().to_lowercase();
        self.fillers.contains(&stripped)
    }
}

impl Default for FillerWordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_FILLER_WORDS)
    }
}

impl SequenceFilter for FillerWordFilter {
    fn apply(&self, sequence: &WordSequence) -> Vec<Vec<WordInfo>> {
        let mut kept = Vec::with_capacity(sequence.words().len());
        let mut after_filler = false;

        for word in sequence.words() {
            if after_filler && word.word == "," {
                after_filler = false;
                continue;
            }
            if self.is_filler(word) {
                after_filler = true;
                continue;
            }
            after_filler = false;
            kept.push(word.clone());
        }

        if kept.is_empty() {
            return Vec::new();
        }
        vec![kept]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(text: &str) -> WordSequence {
        let words = text
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| WordInfo::new(w, i as f64, (i + 1) as f64))
            .collect();
        WordSequence::new(words).unwrap()
    }

    fn filtered_text(text: &str) -> Vec<String> {
        sequence(text)
            .transform(&FillerWordFilter::default())
            .iter()
            .map(WordSequence::text)
            .collect()
    }

    #[test]
    fn test_removes_fillers_with_attached_punctuation() {
        assert_eq!(
            filtered_text("Hello, um, my name is um... Monty."),
            vec!["Hello, my name is Monty."],
        );
    }

    #[test]
    fn test_removes_standalone_comma_after_filler() {
        assert_eq!(
            filtered_text("Hello , um , my name is Monty ."),
            vec!["Hello , my name is Monty ."],
        );
    }

    #[test]
    fn test_is_case_insensitive() {
        assert_eq!(filtered_text("Um well Uh okay"), vec!["well okay"]);
    }

    #[test]
    fn test_keeps_comma_not_following_a_filler() {
        assert_eq!(filtered_text("well , okay"), vec!["well , okay"]);
    }

    #[test]
    fn test_sequence_of_only_fillers_yields_nothing() {
        assert!(filtered_text("um uh um").is_empty());
    }

    #[test]
    fn test_survivors_keep_their_original_timing() {
        let seq = sequence("Hello um there");
        let transformed = seq.transform(&FillerWordFilter::default());
        assert_eq!(transformed.len(), 1);
        assert_eq!(
            transformed[0].words(),
            &[seq.words()[0].clone(), seq.words()[2].clone()],
        );
    }

    #[test]
    fn test_transform_is_restartable() {
        let seq = sequence("Hello um there");
        let filter = FillerWordFilter::default();
        assert_eq!(seq.transform(&filter), seq.transform(&filter));
    }
}
