pub mod sequence_filter;
pub mod transcript;
pub mod word_info;
pub mod word_sequence;
