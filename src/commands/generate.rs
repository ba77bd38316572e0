//! Generate command implementation
//!
//! Loads a Postman collection and writes one Playwright test per request.

use crate::config::EnvConfig;
use crate::error::Result;
use crate::generator::{GeneratedTest, PlaywrightEmitter, TreeWalker, WalkOptions};
use crate::loader::{load_collection, load_variables};
use colored::Colorize;
use std::path::Path;

/// Arguments for the generate command
#[derive(Debug, Clone, Copy)]
pub struct GenerateCommandArgs<'a> {
    pub collection_path: &'a Path,
    pub variables_path: Option<&'a Path>,
    pub output_dir: &'a Path,
    pub dry_run: bool,
}

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub collection_name: Option<String>,
    pub schema: Option<String>,
    pub tests: Vec<GeneratedTest>,
}

/// Execute the generate command
pub fn execute_generate(args: GenerateCommandArgs<'_>, env: &EnvConfig) -> Result<GenerationSummary> {
    let collection = load_collection(args.collection_path)?;
    println!(
        "{} Loaded collection: {}",
        "✓".green(),
        args.collection_path.display()
    );

    let vars = match args.variables_path {
        Some(path) => {
            let vars = load_variables(path)?;
            println!("{} Loaded variables: {}", "✓".green(), path.display());
            vars
        }
        None => {
            tracing::debug!("no variables file given, using environment defaults");
            env.default_variables()
        }
    };

    let emitter = PlaywrightEmitter::new();
    let walker = TreeWalker::new(
        &emitter,
        &vars,
        WalkOptions {
            dry_run: args.dry_run,
        },
    );
    let tests = walker.walk(&collection.items, args.output_dir)?;

    let verb = if args.dry_run { "Planned" } else { "Generated" };
    for test in &tests {
        println!("{} {}: {}", "✓".green(), verb, test.path.display());
    }

    println!();
    println!(
        "  Collection: {}",
        collection.info.name.as_deref().unwrap_or("(unnamed)").bold()
    );
    println!(
        "  Schema: {}",
        collection.info.schema.as_deref().unwrap_or("(unknown)")
    );
    println!("  Test files: {}", tests.len());

    Ok(GenerationSummary {
        collection_name: collection.info.name,
        schema: collection.info.schema,
        tests,
    })
}
