use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::spec::{Category, SpecSnapshot};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Write one category file into `spec_dir`, creating the directory as needed.
pub(crate) fn write_category(spec_dir: &Path, category: Category, content: &str) {
    std::fs::create_dir_all(spec_dir).unwrap();
    std::fs::write(spec_dir.join(category.file_name()), content).unwrap();
}

/// Write one reference document into `docs_dir`, creating the directory as needed.
pub(crate) fn write_doc(docs_dir: &Path, name: &str, content: &str) {
    std::fs::create_dir_all(docs_dir).unwrap();
    std::fs::write(docs_dir.join(name), content).unwrap();
}

/// Load a snapshot from `spec_dir`, panicking on errors.
pub(crate) fn load_snapshot(spec_dir: &Path) -> SpecSnapshot {
    SpecSnapshot::load(spec_dir).unwrap()
}

// Process environment mutation is unsafe since Rust 2024. These wrappers keep
// the unsafety in one place; callers still need #[serial] to avoid races.

pub(crate) fn set_env(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

pub(crate) fn remove_env(key: &str) {
    unsafe { std::env::remove_var(key) };
}
