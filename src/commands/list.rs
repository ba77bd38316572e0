use crate::models::CollectionNode;
use crate::{Result, loader};
use colored::*;
use std::path::Path;

pub fn execute_list(collection_path: &Path) -> Result<()> {
    println!("{}", "Loading collection...".bright_blue());
    println!("  Path: {}", collection_path.display());

    let collection = loader::load_collection(collection_path)?;

    println!("\n{}", "✓ Collection loaded successfully".green());
    println!(
        "  Name: {}",
        collection.info.name.as_deref().unwrap_or("(unnamed)").bold()
    );
    println!(
        "  Schema: {}",
        collection.info.schema.as_deref().unwrap_or("(unknown)")
    );
    println!();

    if collection.items.is_empty() {
        println!("{}", "No requests found".yellow());
        return Ok(());
    }

    let (folders, requests) = count_nodes(&collection.items);
    println!(
        "{}",
        format!("Items ({} folders, {} requests):", folders, requests).bold()
    );
    print_nodes(&collection.items, 1);

    Ok(())
}

fn count_nodes(nodes: &[CollectionNode]) -> (usize, usize) {
    nodes.iter().fold((0, 0), |(folders, requests), node| match node {
        CollectionNode::Folder(folder) => {
            let (f, r) = count_nodes(&folder.children);
            (folders + 1 + f, requests + r)
        }
        CollectionNode::Request(_) => (folders, requests + 1),
    })
}

fn print_nodes(nodes: &[CollectionNode], depth: usize) {
    let indent = "  ".repeat(depth);

    for node in nodes {
        match node {
            CollectionNode::Folder(folder) => {
                println!("{}{} {}", indent, "▸".bright_cyan(), folder.name.bold());
                print_nodes(&folder.children, depth + 1);
            }
            CollectionNode::Request(request) => {
                let tests = if request.test_script.is_some() {
                    " (tests)".green().to_string()
                } else {
                    String::new()
                };
                println!(
                    "{}{} {}{}",
                    indent,
                    request.method.bright_yellow(),
                    request.name,
                    tests
                );
                if let Some(ref url) = request.url {
                    println!("{}  {}", indent, url.dimmed());
                }
            }
        }
    }
}
