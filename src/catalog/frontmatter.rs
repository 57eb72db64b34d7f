//! Frontmatter extraction from agent definition files.
//!
//! The metadata block is YAML-shaped but deliberately not run through a YAML
//! parser: agent files are hand-written and frequently sloppy, so each field
//! is pulled out with its own tolerant pattern match. A field that does not
//! match is simply absent.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?ms)^---\n(.*?)\n---").unwrap());
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^name:\s*(.+)$").unwrap());
static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^description:\s*(.+)$").unwrap());
static COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^color:\s*(.+)$").unwrap());
static TOOLS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"tools:\s*\n((?:  .+\n)+)").unwrap());
static SKILLS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"skills:\s*\n((?:  - .+\n)+)").unwrap());

/// Fields recovered from a frontmatter block. Any of them may be missing.
#[derive(Debug, Default)]
pub struct Frontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub tools: BTreeMap<String, Vec<String>>,
    pub skills: Vec<String>,
}

/// Extract frontmatter fields from the full file text.
///
/// Returns `None` when no `---` delimited block exists; the caller drops the
/// file in that case.
pub fn extract(content: &str) -> Option<Frontmatter> {
    let caps = BLOCK_RE.captures(content)?;
    let block = caps.get(1).map_or("", |m| m.as_str());

    let field = |re: &Regex| re.captures(block).map(|c| c[1].trim().to_string());

    let mut fm = Frontmatter {
        name: field(&NAME_RE),
        description: field(&DESCRIPTION_RE),
        color: field(&COLOR_RE),
        ..Default::default()
    };

    // tools is a nested block of `  key: [a, b]` lines; values that are not
    // bracket-delimited have no agreed shape and drop the key
    if let Some(caps) = TOOLS_RE.captures(block) {
        for line in caps[1].lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
                fm.tools.insert(
                    key.trim().to_string(),
                    inner.split(',').map(|item| item.trim().to_string()).collect(),
                );
            }
        }
    }

    if let Some(caps) = SKILLS_RE.captures(block) {
        for line in caps[1].lines() {
            if let Some(item) = line.trim().strip_prefix("- ") {
                fm.skills.push(item.trim().to_string());
            }
        }
    }

    Some(fm)
}
