//! Implementation of the `generate` command.
//!
//! Resolves the workspace, gathers the description, prepares the prompt,
//! and either reports what would be sent (dry run) or calls the backend
//! and writes the returned specification files.

use std::io::{self, BufRead, Write};

use crate::backend::{API_BASE_ENV, API_KEY_ENV, OpenAiBackend};
use crate::cli::GenerateArgs;
use crate::error::{Result, WhittleError};
use crate::pipeline::{Pipeline, PreparedPrompt};
use crate::workspace::Workspace;
use crate::writer::{CategoryWrite, WriteOutcome};

/// Run one generation over the specification directory.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let workspace = Workspace::resolve(
        &args.spec_dir,
        args.docs_dir.as_deref(),
        args.config.as_deref(),
    )?;

    let description = resolve_description(args.description)?;

    let pipeline = Pipeline::new(&workspace.docs_dir, &workspace.spec_dir);
    let prepared = pipeline.prepare(&description)?;

    if args.dry_run {
        print_dry_run_report(&workspace, args.model.as_deref(), &prepared);
        return Ok(());
    }

    let backend = OpenAiBackend::from_env(&workspace.config, args.model.as_deref())?;
    let writes = pipeline.execute(&backend, &prepared)?;

    report_writes(&writes)
}

/// Take the description from the flag, or prompt for one interactively.
fn resolve_description(flag: Option<String>) -> Result<String> {
    let raw = match flag {
        Some(text) => text,
        None => prompt_for_description()?,
    };

    let description = raw.trim().to_string();
    if description.is_empty() {
        return Err(WhittleError::Config(
            "description must not be empty".to_string(),
        ));
    }

    Ok(description)
}

fn prompt_for_description() -> Result<String> {
    print!("Description: ");
    io::stdout()
        .flush()
        .map_err(|e| WhittleError::Io(format!("cannot flush stdout: {}", e)))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| WhittleError::Io(format!("cannot read description from stdin: {}", e)))?;

    Ok(line)
}

fn print_dry_run_report(
    workspace: &Workspace,
    model_override: Option<&str>,
    prepared: &PreparedPrompt,
) {
    let model = model_override.unwrap_or(&workspace.config.model);
    let endpoint = std::env::var(API_BASE_ENV)
        .ok()
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| workspace.config.api_base.clone());
    let prompt_chars: usize = prepared.messages.iter().map(|m| m.content.len()).sum();
    let api_key_state = match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => "set",
        _ => "not set",
    };

    println!("Prepared generation request (dry run, nothing sent):");
    println!();
    println!("  Model:      {}", model);
    println!("  Endpoint:   {}", endpoint);
    println!("  Messages:   {}", prepared.messages.len());
    println!("  Prompt:     {} characters", prompt_chars);

    if prepared.docs.is_empty() {
        println!("  Documents:  none");
    } else {
        println!("  Documents:  {}", prepared.docs.names().join(", "));
    }

    let current: Vec<String> = prepared
        .snapshot
        .non_empty()
        .map(|category| category.to_string())
        .collect();
    if current.is_empty() {
        println!("  Current:    none");
    } else {
        println!("  Current:    {}", current.join(", "));
    }

    println!("  API key:    {} ({})", api_key_state, API_KEY_ENV);
}

/// Print the per-file outcome and fail if any write did not land.
fn report_writes(writes: &[CategoryWrite]) -> Result<()> {
    if writes.is_empty() {
        println!("The service returned no specification content; nothing was written.");
        return Ok(());
    }

    println!("Updated specification files:");

    let mut raw_fallbacks: Vec<String> = Vec::new();
    let mut failures: Vec<String> = Vec::new();
    for write in writes {
        match &write.outcome {
            WriteOutcome::Canonical => {
                println!("  {}: written", write.path.display());
            }
            WriteOutcome::RawFallback => {
                println!(
                    "  {}: written raw (payload is not valid JSON)",
                    write.path.display()
                );
                raw_fallbacks.push(write.category.to_string());
            }
            WriteOutcome::Failed(reason) => {
                println!("  {}: FAILED ({})", write.path.display(), reason);
                failures.push(format!("{}: {}", write.path.display(), reason));
            }
        }
    }

    if !raw_fallbacks.is_empty() {
        eprintln!(
            "Warning: the payload for {} did not parse as JSON and was written verbatim.",
            raw_fallbacks.join(", ")
        );
    }

    if !failures.is_empty() {
        return Err(WhittleError::Io(format!(
            "failed to write {} specification file(s): {}",
            failures.len(),
            failures.join("; ")
        )));
    }

    Ok(())
}
