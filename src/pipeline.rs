//! End-to-end generation pipeline.
//!
//! Ties the stages together: load documents and the current specification,
//! build the prompt, call the backend, parse the reply, and write the
//! returned categories. The prepare and execute halves are split so a dry
//! run can stop after preparation with nothing sent anywhere.

use std::path::PathBuf;

use crate::backend::Backend;
use crate::bundle::ResultBundle;
use crate::docs::DocSet;
use crate::error::Result;
use crate::prompt::{self, ChatMessage};
use crate::spec::SpecSnapshot;
use crate::writer::{self, CategoryWrite};

/// One generation run over a documentation and specification directory pair.
pub struct Pipeline {
    docs_dir: PathBuf,
    spec_dir: PathBuf,
}

/// Inputs gathered for a run, before any network traffic.
pub struct PreparedPrompt {
    pub docs: DocSet,
    pub snapshot: SpecSnapshot,
    pub messages: Vec<ChatMessage>,
}

impl Pipeline {
    pub fn new(docs_dir: impl Into<PathBuf>, spec_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            spec_dir: spec_dir.into(),
        }
    }

    /// Load all inputs and build the prompt. Touches only the filesystem.
    pub fn prepare(&self, description: &str) -> Result<PreparedPrompt> {
        let docs = DocSet::load(&self.docs_dir)?;
        let snapshot = SpecSnapshot::load(&self.spec_dir)?;
        let messages = prompt::build_messages(description, &docs, &snapshot);

        Ok(PreparedPrompt {
            docs,
            snapshot,
            messages,
        })
    }

    /// Send the prepared prompt and write whatever the backend returned.
    ///
    /// Returns one write record per category in the reply. A reply that is
    /// not a JSON object fails before any file is touched.
    pub fn execute(
        &self,
        backend: &dyn Backend,
        prepared: &PreparedPrompt,
    ) -> Result<Vec<CategoryWrite>> {
        let raw = backend.generate(&prepared.messages)?;
        let bundle = ResultBundle::parse(&raw)?;

        Ok(writer::write_bundle(&self.spec_dir, &bundle))
    }
}
