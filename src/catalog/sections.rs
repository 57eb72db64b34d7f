//! Prose-section extraction: primary command blocks and mission use cases.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const COMMANDS_HEADER: &str = "### Commands This Agent Responds To\n\n**Primary Commands**:";
const SECONDARY_MARKER: &str = "**Secondary Commands**:";
const MISSION_HEADER: &str = "## 🎯 Your Core Mission\n\n";
const MAX_USE_CASES: usize = 5;

static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"- \*\*`([^`]+)`\*\* - ([^\n]+)\n\s+- \*\*When Selected\*\*: ([^\n]+)\n\s+- \*\*Responsibilities\*\*: ([^\n]+)",
    )
    .unwrap()
});
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- (.+)$").unwrap());

/// One fully-formed primary command entry.
#[derive(Debug, Clone, Serialize)]
pub struct CommandEntry {
    pub command: String,
    pub description: String,
    pub selection_criteria: String,
    pub responsibilities: String,
}

/// Primary and secondary command lists.
///
/// `secondary` stays empty: agent files declare a Secondary Commands
/// subsection but no agreed entry shape exists for it yet, so nothing is
/// extracted from it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Commands {
    pub primary: Vec<CommandEntry>,
    pub secondary: Vec<CommandEntry>,
}

/// Extract primary command entries from the commands section.
///
/// The primary span runs from the section header to the Secondary Commands
/// marker, the next header, or end of text. Entries that do not match the
/// full four-line shape are skipped whole; there are no partial entries.
pub fn extract_commands(content: &str) -> Commands {
    let mut commands = Commands::default();
    let Some(start) = content.find(COMMANDS_HEADER) else {
        return commands;
    };
    let rest = &content[start + COMMANDS_HEADER.len()..];
    let end = [rest.find(SECONDARY_MARKER), rest.find("##")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());

    for caps in COMMAND_RE.captures_iter(&rest[..end]) {
        commands.primary.push(CommandEntry {
            command: caps[1].to_string(),
            description: caps[2].trim().to_string(),
            selection_criteria: caps[3].trim().to_string(),
            responsibilities: caps[4].trim().to_string(),
        });
    }
    commands
}

/// Collect the top-level bullets of the Core Mission section, capped at five.
pub fn extract_use_cases(content: &str) -> Vec<String> {
    let Some(start) = content.find(MISSION_HEADER) else {
        return Vec::new();
    };
    let rest = &content[start + MISSION_HEADER.len()..];
    let end = rest.find("##").unwrap_or(rest.len());

    BULLET_RE
        .captures_iter(&rest[..end])
        .take(MAX_USE_CASES)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMANDS_SECTION: &str = "\
### Commands This Agent Responds To

**Primary Commands**:
- **`build-api`** - Scaffold a REST endpoint
  - **When Selected**: API work is requested
  - **Responsibilities**: Routes, handlers, validation
- **`review-api`** - Review endpoint changes
  - **When Selected**: A PR touches API routes
  - **Responsibilities**: Contract and error review

**Secondary Commands**:
- **`ignored`** - Never extracted
  - **When Selected**: Never
  - **Responsibilities**: None

## Next Section
";

    #[test]
    fn test_extract_commands() {
        let commands = extract_commands(COMMANDS_SECTION);
        assert_eq!(commands.primary.len(), 2);
        assert_eq!(commands.primary[0].command, "build-api");
        assert_eq!(commands.primary[0].description, "Scaffold a REST endpoint");
        assert_eq!(commands.primary[0].selection_criteria, "API work is requested");
        assert_eq!(commands.primary[1].responsibilities, "Contract and error review");
    }

    #[test]
    fn test_secondary_commands_never_extracted() {
        let commands = extract_commands(COMMANDS_SECTION);
        assert!(commands.secondary.is_empty());
        assert!(!commands.primary.iter().any(|c| c.command == "ignored"));
    }

    #[test]
    fn test_malformed_entry_skipped_whole() {
        let content = "\
### Commands This Agent Responds To

**Primary Commands**:
- **`good-cmd`** - Has both sub-bullets
  - **When Selected**: Always
  - **Responsibilities**: Everything
- **`bad-cmd`** - Missing the responsibilities line
  - **When Selected**: Sometimes
";
        let commands = extract_commands(content);
        assert_eq!(commands.primary.len(), 1);
        assert_eq!(commands.primary[0].command, "good-cmd");
    }

    #[test]
    fn test_no_commands_section() {
        let commands = extract_commands("# Agent\n\nNo commands here.\n");
        assert!(commands.primary.is_empty());
        assert!(commands.secondary.is_empty());
    }

    #[test]
    fn test_use_cases_capped_at_five() {
        let content = "\
## 🎯 Your Core Mission

- one
- two
- three
- four
- five
- six
- seven

## Another Section
";
        let cases = extract_use_cases(content);
        assert_eq!(cases, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn test_use_cases_stop_at_next_header() {
        let content = "## 🎯 Your Core Mission\n\n- only one\n\n## Later\n\n- not this\n";
        assert_eq!(extract_use_cases(content), vec!["only one"]);
    }

    #[test]
    fn test_missing_mission_section() {
        assert!(extract_use_cases("## Some Other Heading\n\n- bullet\n").is_empty());
    }
}
