use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fetchgen_core::parse;
use fetchgen_core::parse::document::Document;
use fetchgen_core::parse::ref_resolve::RefResolver;
use fetchgen_core::walk;
use fetchgen_ts::{ClientOptions, TsClientGenerator};

#[derive(Parser)]
#[command(
    name = "fetchgen",
    about = "Typed fetch-client generator for OpenAPI documents",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a typed client module from an API document
    Generate {
        /// Path to the API document (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Path of the TypeScript module to write
        #[arg(short, long)]
        output: PathBuf,

        /// Absolute base URL, or a dotted reference into ambient configuration
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            base_url,
        } => cmd_generate(input, output, base_url),
    }
}

fn load_document(input: &PathBuf) -> Result<Document> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let doc = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };
    Ok(doc)
}

fn cmd_generate(input: PathBuf, output: PathBuf, base_url: Option<String>) -> Result<()> {
    let doc = load_document(&input)?;

    let mut resolver = RefResolver::new(&doc);
    let resolved = resolver.resolve_document(&doc)?;

    let operations = walk::walk(&resolved)?;
    eprintln!(
        "Synthesizing {} operations from {}",
        operations.len(),
        input.display()
    );

    let options = ClientOptions { base_url };
    let module = TsClientGenerator.generate(&operations, &options);

    for diagnostic in module.diagnostics.iter() {
        log::warn!("{diagnostic}");
    }

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&output, &module.content)
        .with_context(|| format!("failed to write {}", output.display()))?;
    eprintln!("  wrote {}", output.display());

    Ok(())
}
