use serde::Deserialize;
use thiserror::Error;

use crate::phrasing::domain::transcript::Transcript;
use crate::phrasing::domain::word_info::WordInfo;

#[derive(Error, Debug)]
pub enum RecognizerResponseError {
    #[error("failed to parse recognizer response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A `{seconds, nanos}` timing pair as emitted by word-level speech
/// recognizers. Either component may be absent and defaults to zero.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeOffset {
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i64,
}

impl TimeOffset {
    pub fn as_seconds(self) -> f64 {
        self.seconds as f64 + self.nanos as f64 * 1e-9
    }
}

/// One recognized token with its timing offsets.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RecognizedWord {
    pub word: String,
    #[serde(default)]
    pub start_time: TimeOffset,
    #[serde(default)]
    pub end_time: TimeOffset,
}

impl RecognizedWord {
    pub fn to_word_info(&self) -> WordInfo {
        WordInfo::new(
            self.word.clone(),
            self.start_time.as_seconds(),
            self.end_time.as_seconds(),
        )
    }
}

/// One transcription hypothesis; only the first alternative of each
/// result is used downstream.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RecognitionAlternative {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub words: Vec<RecognizedWord>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct RecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<RecognitionAlternative>,
}

/// A recognize response in either of the shapes the recognizer emits:
/// a multi-result long-running response (`results`), or a single-result
/// response with `alternatives` at the top level.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<RecognitionResult>,
    #[serde(default)]
    pub alternatives: Vec<RecognitionAlternative>,
}

impl RecognizeResponse {
    fn best_alternatives(&self) -> impl Iterator<Item = &RecognitionAlternative> {
        let from_results = self
            .results
            .iter()
            .filter_map(|result| result.alternatives.first());
        // Single-result shape carries alternatives at the top level.
        let top_level = if self.results.is_empty() {
            self.alternatives.first()
        } else {
            None
        };
        from_results.chain(top_level)
    }
}

/// Parses a JSON recognize response.
pub fn parse_recognize_response(json: &str) -> Result<RecognizeResponse, RecognizerResponseError> {
    Ok(serde_json::from_str(json)?)
}

/// Builds a transcript from the best alternative of every result, in
/// recognition order.
pub fn transcript_from_response(response: &RecognizeResponse) -> Transcript {
    let mut words = Vec::new();
    for alternative in response.best_alternatives() {
        if let Some(transcript) = &alternative.transcript {
            log::debug!("transcript: {transcript}");
        }
        if let Some(confidence) = alternative.confidence {
            log::debug!("confidence: {confidence}");
        }
        words.extend(alternative.words.iter().map(RecognizedWord::to_word_info));
    }
    Transcript::new(words)
}
