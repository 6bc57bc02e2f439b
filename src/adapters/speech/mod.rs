//! Speech adapters - voice transcription and synthesis.

mod openai_speech;

pub use openai_speech::{OpenAISpeechConfig, OpenAISpeechService};
