//! CLI command implementations

pub mod concat;
pub mod inspect;
pub mod pcm2wav;

mod reporting;
