//! Prompt construction for specification generation.
//!
//! Builds the fixed two-turn message sequence sent to the generation backend:
//! a system instruction naming the five categories and the required response
//! shape, and a single user turn aggregating the description, the loaded
//! reference documents, and the current specification content.
//!
//! Construction is pure. The same description, documents, and snapshot
//! always produce the same messages, which is what makes dry runs an honest
//! preview of the real request.

use crate::docs::DocSet;
use crate::spec::SpecSnapshot;
use serde::Serialize;

/// System instruction sent with every generation request.
const SYSTEM_PROMPT: &str = "You generate JSON specifications for interactive objects. \
    The user provides a description of the desired interaction, documentation of the \
    involved files and the current specifications. Produce updated JSON for \
    InteractionElements, States, Transitions, VisualizationElements and \
    VisualizationArrays. Return a JSON object with the keys 'InteractionElements', \
    'States', 'Transitions', 'VisualizationElements' and 'VisualizationArrays', each \
    containing the JSON file content as a string.";

/// Chat role of a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single message in the generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Build the message sequence for a generation request.
///
/// The user turn concatenates, in order: the description, each loaded
/// document labeled with its name, then each non-empty current
/// specification labeled `Current <file name>`. Empty categories are
/// omitted entirely so their absence reads as "no data yet".
pub fn build_messages(description: &str, docs: &DocSet, specs: &SpecSnapshot) -> Vec<ChatMessage> {
    let mut sections = vec![format!("User description:\n{}", description)];

    for (name, content) in docs.iter() {
        sections.push(format!("---\n{}:\n{}", name, content));
    }

    for category in specs.non_empty() {
        sections.push(format!(
            "---\nCurrent {}:\n{}",
            category.file_name(),
            specs.get(category)
        ));
    }

    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(sections.join("\n\n")),
    ]
}
