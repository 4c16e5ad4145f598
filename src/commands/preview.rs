//! Implementation of the `preview` command.
//!
//! Renders the seed JSON for named elements and optionally summarizes an
//! existing specification directory. Nothing here talks to the network.

use crate::cli::PreviewArgs;
use crate::elements::seed_document;
use crate::error::{Result, WhittleError};
use crate::spec::{Category, SpecSnapshot};

pub fn cmd_preview(args: PreviewArgs) -> Result<()> {
    println!("Description: {}", args.description);

    if args.elements.is_empty() {
        println!();
        println!("No seed elements given. Use --element NAME or --element NAME:KIND.");
    } else {
        println!();
        println!("Seed elements:");
        for element in &args.elements {
            println!("  {} ({})", element.name, element.kind);
        }

        let document = seed_document(&args.elements);
        let rendered = serde_json::to_string_pretty(&document)
            .map_err(|e| WhittleError::Io(format!("cannot render seed document: {}", e)))?;

        println!();
        println!("Seed InteractionElements.json:");
        println!("{}", rendered);
    }

    if let Some(spec_dir) = &args.spec_dir {
        let snapshot = SpecSnapshot::load(spec_dir)?;

        println!();
        println!("Current specification in {}:", spec_dir.display());
        for category in Category::ALL {
            let content = snapshot.get(category);
            if content.is_empty() {
                println!("  {}: empty", category.file_name());
            } else {
                println!("  {}: {} bytes", category.file_name(), content.len());
            }
        }
    }

    Ok(())
}
