//! Generation backends.

mod openai;

pub use openai::{API_BASE_ENV, API_KEY_ENV, OpenAiBackend};

use crate::error::Result;
use crate::prompt::ChatMessage;

/// A text generation service.
///
/// Implementations receive the full prompt message sequence and return the
/// raw assistant reply. Parsing of the reply is the caller's concern so
/// that a misbehaving backend can still be reported with its output intact.
pub trait Backend {
    fn generate(&self, messages: &[ChatMessage]) -> Result<String>;
}
