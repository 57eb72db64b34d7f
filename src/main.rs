//! agentdex: compile markdown agent definitions into a JSON capability
//! catalog with cross-reference indices.

mod catalog;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Compile a directory of agent definition files into one JSON catalog.
#[derive(Parser, Debug)]
#[command(name = "agentdex", version, about)]
struct Args {
    /// Root directory of agent definition files
    #[arg(long, default_value = "agents")]
    agents_dir: PathBuf,

    /// Where to write the compiled catalog
    #[arg(long, default_value = ".agency/agent-capabilities.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let files = catalog::discover(&args.agents_dir)
        .with_context(|| format!("scanning {}", args.agents_dir.display()))?;

    let mut agents = Vec::new();
    for path in &files {
        println!("Processing: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        if let Some(record) = catalog::process_agent(path, &content) {
            agents.push(record);
        }
    }

    let indices = catalog::build_indices(&agents);
    let catalog = catalog::Catalog::new(agents, indices);

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(&catalog).context("serializing catalog")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("\n✅ Successfully processed {} agents", catalog.total_agents);
    println!("📄 Output written to: {}", args.output.display());
    println!("\nBreakdown by category:");
    for (category, names) in &catalog.indices.by_category {
        println!("  {}: {} agents", category, names.len());
    }

    Ok(())
}
