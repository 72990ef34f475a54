use super::cue::Cue;

/// Domain interface for the subtitle formatter collaborator.
///
/// Implementations serialize cues into a concrete subtitle format or
/// forward them elsewhere; the core only pushes `(start, end, text)`
/// triples through this seam and never touches files or the network.
pub trait CueSink {
    fn write_cue(&mut self, cue: &Cue) -> Result<(), Box<dyn std::error::Error>>;
}
