// Subtitling guidelines from http://translationjournal.net/journal/04stndrd.htm:
// fewer than 35 characters per line, at most two simultaneous lines,
// and a display rate of roughly 2.5-3 words per second.

pub const MAX_CHARACTERS_PER_LINE: usize = 35;
pub const MAX_LINES_VISIBLE: usize = 2;
