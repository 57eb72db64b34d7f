//! Record assembly: combine the extraction outputs for one file into a
//! catalog record.

use super::frontmatter;
use super::infer;
use super::sections::{self, Commands};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Category for files that do not sit under an `agents/<category>/` parent.
const DEFAULT_CATEGORY: &str = "meta";
/// Color assigned when the frontmatter declares none.
const DEFAULT_COLOR: &str = "gray";

/// Skills every agent carries regardless of frontmatter.
const ESSENTIAL_SKILLS: &[&str] = &["agency-workflow-patterns"];

/// Substrings marking a skill as technology-specific.
const TECH_SKILL_MARKERS: &[&str] = &["-expert", "framework", "sdk"];
/// Substrings marking a skill as quality-related.
const QUALITY_SKILL_MARKERS: &[&str] = &["testing", "review", "quality"];

/// Skill groupings derived from the raw frontmatter skill list.
///
/// A skill may land in both `technology` and `quality`, or in neither; the
/// groupings are computed independently over `all`.
#[derive(Debug, Clone, Serialize)]
pub struct SkillGroups {
    pub essential: Vec<String>,
    pub technology: Vec<String>,
    pub quality: Vec<String>,
    pub all: Vec<String>,
}

/// One compiled catalog entry, serialized as-is into the output document.
#[derive(Debug, Clone, Serialize)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub category: String,
    pub file_path: String,
    pub description: String,
    pub color: String,
    pub primary_use_cases: Vec<String>,
    pub when_to_select: Vec<String>,
    pub commands: Commands,
    pub skills: SkillGroups,
    pub tools: BTreeMap<String, Vec<String>>,
    pub technologies: Vec<String>,
    pub capabilities: Vec<String>,
}

/// Compile one agent definition file into a record.
///
/// Returns `None` when the file has no frontmatter block or the frontmatter
/// carries no `name`; such files are dropped from the catalog entirely.
pub fn process_agent(path: &Path, content: &str) -> Option<AgentRecord> {
    let fm = frontmatter::extract(content)?;
    let name = fm.name?;

    let commands = sections::extract_commands(content);
    let when_to_select = commands
        .primary
        .iter()
        .map(|cmd| cmd.selection_criteria.clone())
        .collect();

    Some(AgentRecord {
        id: name.replace(' ', "-").to_lowercase(),
        display_name: title_case(&name.replace('-', " ")),
        category: derive_category(path),
        file_path: path.display().to_string(),
        description: fm.description.unwrap_or_default(),
        color: fm.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        primary_use_cases: sections::extract_use_cases(content),
        when_to_select,
        commands,
        technologies: infer::infer_technologies(&fm.skills),
        capabilities: infer::infer_capabilities(content),
        skills: group_skills(fm.skills),
        tools: fm.tools,
        name,
    })
}

/// A file shaped `agents/<category>/<file>.md` takes its parent directory as
/// category; anything shallower or rooted elsewhere falls into the default.
fn derive_category(path: &Path) -> String {
    let parts: Vec<&str> = path.iter().filter_map(|part| part.to_str()).collect();
    if parts.len() >= 3 && parts[parts.len() - 3] == "agents" {
        parts[parts.len() - 2].to_string()
    } else {
        DEFAULT_CATEGORY.to_string()
    }
}

fn group_skills(all: Vec<String>) -> SkillGroups {
    let matches_any =
        |skill: &&String, markers: &[&str]| markers.iter().any(|marker| skill.contains(marker));
    SkillGroups {
        essential: ESSENTIAL_SKILLS.iter().map(|s| s.to_string()).collect(),
        technology: all
            .iter()
            .filter(|s| matches_any(s, TECH_SKILL_MARKERS))
            .cloned()
            .collect(),
        quality: all
            .iter()
            .filter(|s| matches_any(s, QUALITY_SKILL_MARKERS))
            .cloned()
            .collect(),
        all,
    }
}

/// Title-case for display names: an alphabetic character is uppercased when
/// the preceding character is non-alphabetic, lowercased otherwise.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
