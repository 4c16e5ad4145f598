//! Implementation of the `whittle status` command.
//!
//! Displays which category files exist in a specification directory,
//! whether each holds valid JSON, and when it was last modified.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::cli::StatusArgs;
use crate::error::{Result, WhittleError};
use crate::spec::Category;

/// Execute the `whittle status` command.
pub fn cmd_status(args: StatusArgs) -> Result<()> {
    println!("Specification directory: {}", args.spec_dir.display());
    println!();

    let mut present = 0;
    for category in Category::ALL {
        let path = args.spec_dir.join(category.file_name());
        match describe_file(&path)? {
            Some(summary) => {
                present += 1;
                println!("  {:26} {}", category.file_name(), summary);
            }
            None => println!("  {:26} absent", category.file_name()),
        }
    }

    println!();
    println!(
        "{} of {} specification files present.",
        present,
        Category::ALL.len()
    );
    if present == 0 {
        println!("Run `whittle generate` to create them from a description.");
    }

    Ok(())
}

/// Summarize one category file, or `None` when it does not exist.
fn describe_file(path: &Path) -> Result<Option<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(WhittleError::Io(format!(
                "cannot read '{}': {}",
                path.display(),
                e
            )));
        }
    };

    let form = if serde_json::from_str::<serde_json::Value>(&content).is_ok() {
        "valid JSON"
    } else {
        "raw text"
    };

    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(|time| {
            DateTime::<Utc>::from(time)
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
        });

    let summary = match modified {
        Some(stamp) => format!("{}, {} bytes, modified {}", form, content.len(), stamp),
        None => format!("{}, {} bytes", form, content.len()),
    };

    Ok(Some(summary))
}
