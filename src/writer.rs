//! Specification file output.
//!
//! Writes a parsed [`ResultBundle`] back to the specification directory,
//! one file per returned category. Content that parses as JSON is
//! canonicalized with two-space indentation before writing; anything else
//! is written verbatim so a malformed payload is still preserved for
//! inspection. Each write is atomic and failures are collected per
//! category instead of aborting the batch.

use std::path::{Path, PathBuf};

use crate::bundle::ResultBundle;
use crate::fs::atomic_write_file;
use crate::spec::Category;

/// How a single category file write ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content parsed as JSON and was written in canonical form.
    Canonical,
    /// Content did not parse as JSON and was written verbatim.
    RawFallback,
    /// The write itself failed.
    Failed(String),
}

/// Record of one attempted category file write.
#[derive(Debug, Clone)]
pub struct CategoryWrite {
    pub category: Category,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Write every category in the bundle to `spec_dir`.
///
/// Categories absent from the bundle are left untouched. A failed write
/// does not stop the remaining categories from being attempted.
pub fn write_bundle(spec_dir: &Path, bundle: &ResultBundle) -> Vec<CategoryWrite> {
    bundle
        .iter()
        .map(|(category, content)| write_category(spec_dir, category, content))
        .collect()
}

fn write_category(spec_dir: &Path, category: Category, content: &str) -> CategoryWrite {
    let path = spec_dir.join(category.file_name());
    let (text, outcome) = match canonicalize(content) {
        Some(pretty) => (pretty, WriteOutcome::Canonical),
        None => (content.to_string(), WriteOutcome::RawFallback),
    };
    let outcome = match atomic_write_file(&path, &text) {
        Ok(()) => outcome,
        Err(err) => WriteOutcome::Failed(err.to_string()),
    };

    CategoryWrite {
        category,
        path,
        outcome,
    }
}

fn canonicalize(content: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(content).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_only_returned_categories() {
        let temp_dir = TempDir::new().unwrap();
        let bundle = ResultBundle::parse(r#"{"States": "{}"}"#).unwrap();

        let writes = write_bundle(temp_dir.path(), &bundle);

        assert_eq!(writes.len(), 1);
        assert!(temp_dir.path().join("States.json").exists());
        assert!(!temp_dir.path().join("InteractionElements.json").exists());
    }

    #[test]
    fn records_carry_the_resolved_path() {
        let temp_dir = TempDir::new().unwrap();
        let bundle = ResultBundle::parse(r#"{"States": "{}"}"#).unwrap();

        let writes = write_bundle(temp_dir.path(), &bundle);

        assert_eq!(writes[0].path, temp_dir.path().join("States.json"));
    }

    #[test]
    fn canonicalizes_json_content() {
        let temp_dir = TempDir::new().unwrap();
        let bundle = ResultBundle::parse(r#"{"States": "{\"idle\": {}}"}"#).unwrap();

        let writes = write_bundle(temp_dir.path(), &bundle);

        assert_eq!(writes[0].outcome, WriteOutcome::Canonical);
        let written = fs::read_to_string(temp_dir.path().join("States.json")).unwrap();
        assert_eq!(written, "{\n  \"idle\": {}\n}");
    }

    #[test]
    fn canonical_form_sorts_object_keys() {
        let temp_dir = TempDir::new().unwrap();
        let bundle = ResultBundle::parse(r#"{"States": "{\"b\": 1, \"a\": 2}"}"#).unwrap();

        write_bundle(temp_dir.path(), &bundle);

        let written = fs::read_to_string(temp_dir.path().join("States.json")).unwrap();
        assert_eq!(written, "{\n  \"a\": 2,\n  \"b\": 1\n}");
    }

    #[test]
    fn written_file_round_trips_structurally() {
        let temp_dir = TempDir::new().unwrap();
        let original = r#"{"on": {"brightness": 0.5}, "off": {}}"#;
        let bundle =
            ResultBundle::parse(&serde_json::json!({ "States": original }).to_string()).unwrap();

        write_bundle(temp_dir.path(), &bundle);

        let written = fs::read_to_string(temp_dir.path().join("States.json")).unwrap();
        let reread: serde_json::Value = serde_json::from_str(&written).unwrap();
        let expected: serde_json::Value = serde_json::from_str(original).unwrap();
        assert_eq!(reread, expected);
    }

    #[test]
    fn keeps_non_json_content_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let bundle = ResultBundle::parse(r#"{"Transitions": "not { json"}"#).unwrap();

        let writes = write_bundle(temp_dir.path(), &bundle);

        assert_eq!(writes[0].outcome, WriteOutcome::RawFallback);
        let written = fs::read_to_string(temp_dir.path().join("Transitions.json")).unwrap();
        assert_eq!(written, "not { json");
    }

    #[test]
    fn reports_failed_write_without_aborting() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("States.json")).unwrap();
        let bundle = ResultBundle::parse(r#"{"States": "{}", "Transitions": "[]"}"#).unwrap();

        let writes = write_bundle(temp_dir.path(), &bundle);

        assert_eq!(writes.len(), 2);
        assert!(matches!(writes[0].outcome, WriteOutcome::Failed(_)));
        assert_eq!(writes[1].outcome, WriteOutcome::Canonical);
        assert!(temp_dir.path().join("Transitions.json").is_file());
    }

    #[test]
    fn creates_missing_spec_directory() {
        let temp_dir = TempDir::new().unwrap();
        let spec_dir = temp_dir.path().join("Specifications");
        let bundle = ResultBundle::parse(r#"{"VisualizationArrays": "[]"}"#).unwrap();

        let writes = write_bundle(&spec_dir, &bundle);

        assert_eq!(writes[0].outcome, WriteOutcome::Canonical);
        assert!(spec_dir.join("VisualizationArrays.json").is_file());
    }

    #[test]
    fn untouched_categories_keep_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("States.json"), "keep me").unwrap();
        let bundle = ResultBundle::parse(r#"{"Transitions": "[]"}"#).unwrap();

        write_bundle(temp_dir.path(), &bundle);

        let kept = fs::read_to_string(temp_dir.path().join("States.json")).unwrap();
        assert_eq!(kept, "keep me");
    }
}
