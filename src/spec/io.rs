//! File I/O for the specification snapshot.

use super::{Category, SpecSnapshot};
use crate::error::{Result, WhittleError};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

impl SpecSnapshot {
    /// Load the current specification from `spec_dir`.
    ///
    /// Every category gets an entry. A category whose file does not exist
    /// loads as an empty string (a missing directory therefore loads as an
    /// all-empty snapshot). Any read error other than "not found" is fatal:
    /// an unreadable existing file means the prompt would misrepresent the
    /// current state.
    pub fn load<P: AsRef<Path>>(spec_dir: P) -> Result<Self> {
        let spec_dir = spec_dir.as_ref();
        let mut entries = BTreeMap::new();

        for category in Category::ALL {
            let path = spec_dir.join(category.file_name());
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
                Err(e) => {
                    return Err(WhittleError::Io(format!(
                        "failed to read specification file '{}': {}",
                        path.display(),
                        e
                    )));
                }
            };
            entries.insert(category, content);
        }

        Ok(Self { entries })
    }
}
