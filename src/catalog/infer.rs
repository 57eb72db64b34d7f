//! Derived attributes: technology names from skill identifiers, capability
//! tags from keyword presence in the file body.

/// Skill identifier to technology display name.
const TECHNOLOGY_TABLE: &[(&str, &str)] = &[
    ("nextjs-16-expert", "Next.js"),
    ("typescript-5-expert", "TypeScript"),
    ("tailwindcss-4-expert", "Tailwind CSS"),
    ("prisma-latest-expert", "Prisma"),
    ("drizzle-0-expert", "Drizzle ORM"),
    ("supabase-latest-expert", "Supabase"),
    ("shadcn-latest-expert", "shadcn/ui"),
    ("ai-5-expert", "Vercel AI SDK"),
    ("mastra-latest-expert", "Mastra"),
    ("fastmcp-2-expert", "FastMCP"),
    ("pixeltable-0-expert", "Pixeltable"),
    ("next-auth-beta-expert", "NextAuth.js"),
    ("acli-latest-expert", "Atlassian CLI"),
];

/// Capability tag and the keywords that trigger it.
const CAPABILITY_TABLE: &[(&str, &[&str])] = &[
    ("api", &["api", "endpoint", "backend"]),
    ("frontend", &["ui", "component", "react"]),
    ("testing", &["test", "qa", "validation"]),
    ("design", &["design", "ux", "visual"]),
    ("orchestration", &["orchestrate", "coordinate", "pipeline"]),
    ("analytics", &["analytics", "data", "metrics"]),
    ("mobile", &["mobile", "ios", "android"]),
    ("devops", &["devops", "deploy", "infrastructure"]),
];

/// Map skill identifiers to technology display names.
///
/// Unknown skills are skipped; input order and duplicates are kept.
pub fn infer_technologies(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .filter_map(|skill| {
            TECHNOLOGY_TABLE
                .iter()
                .find(|(id, _)| *id == skill.as_str())
                .map(|(_, tech)| (*tech).to_string())
        })
        .collect()
}

/// Derive capability tags from keyword presence anywhere in the file.
///
/// Each tag appears at most once. Emission follows the table order, but the
/// result is semantically a set; consumers must not rely on ordering.
pub fn infer_capabilities(content: &str) -> Vec<String> {
    let content_lower = content.to_lowercase();
    CAPABILITY_TABLE
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| content_lower.contains(kw)))
        .map(|(tag, _)| (*tag).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_infer_technologies() {
        let techs = infer_technologies(&skills(&[
            "nextjs-16-expert",
            "custom-skill",
            "typescript-5-expert",
        ]));
        assert_eq!(techs, vec!["Next.js", "TypeScript"]);
    }

    #[test]
    fn test_infer_technologies_keeps_duplicates() {
        let techs = infer_technologies(&skills(&["prisma-latest-expert", "prisma-latest-expert"]));
        assert_eq!(techs, vec!["Prisma", "Prisma"]);
    }

    #[test]
    fn test_infer_technologies_empty() {
        assert!(infer_technologies(&skills(&["unmapped-skill"])).is_empty());
    }

    #[test]
    fn test_deploy_keyword_yields_devops() {
        let caps = infer_capabilities("This agent can deploy services.");
        assert!(caps.contains(&"devops".to_string()));
    }

    #[test]
    fn test_capability_matching_is_case_insensitive() {
        let caps = infer_capabilities("Handles REACT Components.");
        assert!(caps.contains(&"frontend".to_string()));
    }

    #[test]
    fn test_capability_tags_unique() {
        // both keywords of the same tag present, tag emitted once
        let caps = infer_capabilities("api work on every endpoint");
        assert_eq!(caps.iter().filter(|c| *c == "api").count(), 1);
    }
}
