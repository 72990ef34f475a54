pub mod phrasing;
pub mod pipeline;
pub mod shared;
pub mod subtitling;
