//! Reference document loading for whittle.
//!
//! The prompt ships a fixed set of named markdown documents describing the
//! specification format. Documents are optional context: an absent file is
//! simply left out of the prompt, while an unreadable existing file is fatal.

use crate::error::{Result, WhittleError};
use std::io::ErrorKind;
use std::path::Path;

/// Reference documents included in the generation prompt, in prompt order.
const DOC_FILES: [&str; 4] = [
    "InteractionElementsDocu.md",
    "StatesDocu.md",
    "TransitionsDocu.md",
    "VisualizationElementsDocu.md",
];

/// Reference documents loaded from the docs directory.
///
/// Holds name/content pairs for exactly the documents whose files exist,
/// preserving the fixed document order.
#[derive(Debug, Clone, Default)]
pub struct DocSet {
    entries: Vec<(String, String)>,
}

impl DocSet {
    /// Load the reference documents from `docs_dir`.
    ///
    /// Names whose file is absent are omitted; a missing directory yields an
    /// empty set. Any other read error is fatal.
    pub fn load<P: AsRef<Path>>(docs_dir: P) -> Result<Self> {
        let docs_dir = docs_dir.as_ref();
        let mut entries = Vec::new();

        for name in DOC_FILES {
            let path = docs_dir.join(name);
            match std::fs::read_to_string(&path) {
                Ok(content) => entries.push((name.to_string(), content)),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(WhittleError::Io(format!(
                        "failed to read document '{}': {}",
                        path.display(),
                        e
                    )));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Iterate over loaded documents as (name, content) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    /// Names of the loaded documents, in order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// True when no document file was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
