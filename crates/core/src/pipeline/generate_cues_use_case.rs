use crate::phrasing::domain::sequence_filter::SequenceFilter;
use crate::phrasing::domain::transcript::Transcript;
use crate::phrasing::domain::word_sequence::WordSequence;
use crate::shared::constants::MAX_CHARACTERS_PER_LINE;
use crate::subtitling::domain::cue::Cue;
use crate::subtitling::domain::cue_sink::CueSink;

/// Orchestrates the phrasing flow: transcript → sentences → cleanup
/// filters → width-bounded lines → cues for the formatter collaborator.
pub struct GenerateCuesUseCase {
    filters: Vec<Box<dyn SequenceFilter>>,
    line_width: usize,
}

impl GenerateCuesUseCase {
    /// `line_width` is the character budget per cue; zero disables
    /// wrapping, leaving one cue per sentence.
    pub fn new(filters: Vec<Box<dyn SequenceFilter>>, line_width: usize) -> Self {
        Self {
            filters,
            line_width,
        }
    }

    pub fn run(&self, transcript: &Transcript) -> Vec<Cue> {
        let mut cues = Vec::new();

        for sentence in transcript.sentences() {
            for sequence in self.apply_filters(sentence) {
                for chunk in sequence.wrap(self.line_width) {
                    cues.push(Cue::from_sequence(&chunk));
                }
            }
        }

        log::debug!("generated {} cues", cues.len());
        cues
    }

    /// Generates cues and pushes them through the formatter seam.
    pub fn run_into(
        &self,
        transcript: &Transcript,
        sink: &mut dyn CueSink,
    ) -> Result<(), Box<dyn std::error::Error>> {
        for cue in self.run(transcript) {
            sink.write_cue(&cue)?;
        }
        Ok(())
    }

    fn apply_filters(&self, sentence: WordSequence) -> Vec<WordSequence> {
        let mut sequences = vec![sentence];
        for filter in &self.filters {
            sequences = sequences
                .iter()
                .flat_map(|sequence| sequence.transform(filter.as_ref()))
                .collect();
        }
        sequences
    }
}

impl Default for GenerateCuesUseCase {
    fn default() -> Self {
        Self::new(Vec::new(), MAX_CHARACTERS_PER_LINE)
    }
}
