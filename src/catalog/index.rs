//! Cross-reference indices and the assembled output document.

use super::record::AgentRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Catalog format version.
const VERSION: &str = "1.0.0";
/// Generation date stamped into the document.
const GENERATED_AT: &str = "2025-12-11";

/// Five independent name lookup tables over the record list.
///
/// Each key maps to the agent `name`s that produced it, in file processing
/// order, without deduplication. A key exists only if at least one record
/// produced it, so every list is non-empty.
#[derive(Debug, Default, Serialize)]
pub struct CatalogIndices {
    pub by_category: BTreeMap<String, Vec<String>>,
    pub by_technology: BTreeMap<String, Vec<String>>,
    pub by_command: BTreeMap<String, Vec<String>>,
    pub by_capability: BTreeMap<String, Vec<String>>,
    pub by_skill: BTreeMap<String, Vec<String>>,
}

/// Build all five indices in a single pass over the records.
pub fn build_indices(agents: &[AgentRecord]) -> CatalogIndices {
    let mut indices = CatalogIndices::default();
    for agent in agents {
        let name = &agent.name;
        push(&mut indices.by_category, &agent.category, name);
        for tech in &agent.technologies {
            push(&mut indices.by_technology, tech, name);
        }
        for cmd in &agent.commands.primary {
            push(&mut indices.by_command, &cmd.command, name);
        }
        for cap in &agent.capabilities {
            push(&mut indices.by_capability, cap, name);
        }
        for skill in &agent.skills.all {
            push(&mut indices.by_skill, skill, name);
        }
    }
    indices
}

fn push(table: &mut BTreeMap<String, Vec<String>>, key: &str, name: &str) {
    table.entry(key.to_string()).or_default().push(name.to_string());
}

/// The complete catalog document written to disk.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub version: String,
    pub generated_at: String,
    pub total_agents: usize,
    pub agents: Vec<AgentRecord>,
    pub indices: CatalogIndices,
}

impl Catalog {
    pub fn new(agents: Vec<AgentRecord>, indices: CatalogIndices) -> Self {
        Catalog {
            version: VERSION.to_string(),
            generated_at: GENERATED_AT.to_string(),
            total_agents: agents.len(),
            agents,
            indices,
        }
    }
}
