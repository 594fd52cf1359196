//! RAML views CLI
//!
//! Command-line interface for planning views from parsed RAML resource trees.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use raml_views::{
    build_plan, load_json_auto, load_method_names, model_name, normalize_str, tree_from_value,
    MethodNameMap,
};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "raml-views")]
#[command(about = "Derive view names and method sets from RAML resource trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan one view per resource of a parsed resource tree
    Plan {
        /// Resource tree source: file path or URL (http:// or https://)
        tree: String,

        /// JSON file with collection_methods/item_methods overrides
        #[arg(long)]
        methods: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the model name for a route
    ModelName {
        /// Route name, e.g. "comments"
        route: String,

        /// Colon-separated uid of the parent resource
        #[arg(long, default_value = "")]
        parent: String,
    },

    /// Normalize a body schema into field descriptors
    Fields {
        /// Schema source: file path or URL (http:// or https://)
        schema: String,

        /// Media type the schema is declared under
        #[arg(long, default_value = "application/json")]
        content_type: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan {
            tree,
            methods,
            output,
            pretty,
        } => run_plan(&tree, methods.as_deref(), output, pretty),

        Commands::ModelName { route, parent } => {
            println!("{}", model_name(&parent, &route));
            Ok(())
        }

        Commands::Fields {
            schema,
            content_type,
            pretty,
        } => run_fields(&schema, &content_type, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_plan(
    tree_source: &str,
    methods: Option<&Path>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<(), u8> {
    let names = match methods {
        Some(path) => load_method_names(path).map_err(|e| {
            eprintln!("Error loading method names: {}", e);
            e.exit_code() as u8
        })?,
        None => MethodNameMap::default(),
    };

    let tree = load_json_auto(tree_source)
        .and_then(tree_from_value)
        .map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        })?;
    debug!(source = tree_source, "resource tree loaded");

    let plans = build_plan(&tree, &names).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let json_output = to_json(&plans, pretty)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

fn run_fields(schema_source: &str, content_type: &str, pretty: bool) -> Result<(), u8> {
    let schema = load_json_auto(schema_source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let fields = normalize_str(&schema, content_type).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    if fields.is_none() {
        eprintln!("Warning: normalization is not available for {}", content_type);
    }

    println!("{}", to_json(&fields, pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, u8> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })
}
