use clap::{Parser, Subcommand};
use flowtree::io::DirectorySink;
use flowtree::prelude::*;
use std::fs;
use std::process;

#[derive(Parser)]
#[command(name = "flowtree-cli")]
#[command(about = "Inspect, validate, and create workflow documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a workflow document, check its invariants, and print an outline
    Inspect {
        /// Path to a workflow JSON document
        path: String,
    },
    /// Write a fresh single-start workflow document into a directory
    New {
        /// Target directory for the exported document
        #[arg(default_value = ".")]
        dir: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Inspect { path } => inspect(&path),
        Command::New { dir } => create(&dir),
    }
}

fn inspect(path: &str) {
    let document = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read workflow file '{}': {}", path, e);
            process::exit(1);
        }
    };

    let tree = match parse_document(&document) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Failed to parse '{}': {}", path, e);
            process::exit(1);
        }
    };

    if let Err(violation) = tree.validate() {
        eprintln!("Workflow is not a valid tree: {}", violation);
        process::exit(1);
    }

    println!("Workflow '{}' is valid ({} nodes)", path, tree.len());
    if let Some(start) = tree.start() {
        print_outline(&tree, &start.id, 0);
    }
}

fn print_outline(tree: &WorkflowTree, id: &str, depth: usize) {
    if let Some(node) = tree.get(id) {
        println!(
            "{}{} [{}] ({})",
            "  ".repeat(depth),
            node.label,
            node.node_type,
            node.id
        );
        for child in &node.children {
            print_outline(tree, child, depth + 1);
        }
    }
}

fn create(dir: &str) {
    let store = WorkflowStore::new();
    let mut sink = DirectorySink::new(dir);
    match store.export_workflow(&mut sink) {
        Ok(file_name) => println!("Wrote {}/{}", dir.trim_end_matches('/'), file_name),
        Err(e) => {
            eprintln!("Failed to export workflow: {}", e);
            process::exit(1);
        }
    }
}
