//! Working directory resolution for commands.
//!
//! Every command operates on a specification directory plus a documentation
//! directory, with an optional config file adjusting defaults. Resolution
//! order for the docs directory is CLI flag, then config, then the built-in
//! default carried by [`Config`].

use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;

/// Resolved directories and config for one command invocation.
pub struct Workspace {
    pub spec_dir: PathBuf,
    pub docs_dir: PathBuf,
    pub config: Config,
}

impl Workspace {
    /// Resolve the workspace for a command.
    ///
    /// An explicitly given config path must exist and parse. Without one,
    /// `whittle.yaml` in the working directory is used when present and
    /// silently skipped when absent.
    pub fn resolve(
        spec_dir: &Path,
        docs_dir_flag: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(DEFAULT_CONFIG_FILE)?,
        };

        let docs_dir = docs_dir_flag
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&config.docs_dir));

        Ok(Self {
            spec_dir: spec_dir.to_path_buf(),
            docs_dir,
            config,
        })
    }
}
