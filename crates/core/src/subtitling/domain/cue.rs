use crate::phrasing::domain::word_sequence::WordSequence;

/// One display cue: a rendered line of text with the timing of the
/// words it was built from. This is the unit handed to the external
/// subtitle formatter; writing a concrete subtitle format is its job,
/// not this crate's.
#[derive(Clone, Debug, PartialEq)]
pub struct Cue {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

impl Cue {
    pub fn from_sequence(sequence: &WordSequence) -> Self {
        Self {
            start_time: sequence.start_time(),
            end_time: sequence.end_time(),
            text: sequence.text(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}
