//! Skill matching: highlights which known skills a posting's summary mentions.
//!
//! Matching is a plain case-insensitive substring test. There is no stemming and no
//! word-boundary check, so "Java" matches inside "JavaScript". That behaviour is kept
//! as-is; callers that need stricter matching should not use this module.

use std::sync::Arc;

/// Skill catalog used when `SKILLS` is not configured. Order is the display order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "SQL",
    "TensorFlow",
    "PyTorch",
    "Scikit-learn",
    "LangChain",
    "Hugging Face",
    "Pandas",
    "NumPy",
    "AWS",
    "Azure",
    "PostgreSQL",
    "MongoDB",
    "React.js",
    "Next.js",
    "Node.js",
    "Express",
    "Tailwind CSS",
    "Docker",
    "GitHub",
    "AWS DevOps",
    "Version Control",
    "Jira",
];

/// Ordered, read-only list of skill names.
///
/// Cheap to clone; carried in `AppState` and handed to the renderer per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSet {
    skills: Arc<[String]>,
}

impl SkillSet {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma-separated list. Entries are trimmed; empty entries are dropped.
    pub fn parse(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty()),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills from this set found in `description`, in set order.
    pub fn matches_in<'a>(&'a self, description: &str) -> Vec<&'a str> {
        match_skills(description, self.as_slice())
    }
}

impl Default for SkillSet {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

/// Returns the skills that occur in `description` as case-insensitive substrings,
/// preserving the order of `skills`.
pub fn match_skills<'a, S: AsRef<str>>(description: &str, skills: &'a [S]) -> Vec<&'a str> {
    if description.is_empty() {
        return Vec::new();
    }

    let haystack = description.to_lowercase();
    skills
        .iter()
        .map(|skill| skill.as_ref())
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_matches_are_ordered_subsequence_of_skills(
            description in ".{0,80}",
            skills in proptest::collection::vec("[A-Za-z.+# ]{1,12}", 0..8),
        ) {
            let matched = match_skills(&description, &skills);
            let haystack = description.to_lowercase();

            let mut cursor = skills.iter();
            for m in &matched {
                prop_assert!(cursor.any(|s| s.as_str() == *m), "{} out of order", m);
                prop_assert!(haystack.contains(&m.to_lowercase()));
            }

            let expected = skills
                .iter()
                .filter(|s| haystack.contains(&s.to_lowercase()))
                .count();
            prop_assert_eq!(matched.len(), expected);
        }

        #[test]
        fn prop_embedded_skill_always_matches(
            prefix in "[ -~]{0,20}",
            skill in "[A-Za-z][A-Za-z.+# ]{0,11}",
            suffix in "[ -~]{0,20}",
            upper in any::<bool>(),
        ) {
            let embedded = if upper { skill.to_uppercase() } else { skill.to_lowercase() };
            let description = format!("{prefix}{embedded}{suffix}");
            let skills = [skill.as_str()];
            prop_assert_eq!(match_skills(&description, &skills), vec![skill.as_str()]);
        }

        #[test]
        fn prop_empty_description_or_skills_match_nothing(
            description in ".{0,40}",
            skills in proptest::collection::vec("[A-Za-z]{1,8}", 1..6),
        ) {
            prop_assert!(match_skills("", &skills).is_empty());
            let none: [&str; 0] = [];
            prop_assert!(match_skills(&description, &none).is_empty());
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(match_skills("I KNOW python", &["Python"]), vec!["Python"]);
    }

    #[test]
    fn test_empty_description_matches_nothing() {
        assert!(match_skills("", &["Python", "SQL"]).is_empty());
    }

    #[test]
    fn test_empty_skill_list_matches_nothing() {
        let skills: [&str; 0] = [];
        assert!(match_skills("Python and SQL everywhere", &skills).is_empty());
    }

    #[test]
    fn test_result_follows_skill_list_order() {
        // "SQL" appears before "Python" in the text; output follows list order.
        let matched = match_skills("SQL first, then Python", &["Python", "Docker", "SQL"]);
        assert_eq!(matched, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_java_matches_inside_javascript() {
        let matched = match_skills("I use Java daily", &["Java", "JavaScript"]);
        assert_eq!(matched, vec!["Java"]);

        // Substring match: "Java" is found inside "JavaScript".
        let matched = match_skills("I use JavaScript daily", &["Java"]);
        assert_eq!(matched, vec!["Java"]);
    }

    #[test]
    fn test_result_is_ordered_subsequence_of_skills() {
        let skills = SkillSet::default();
        let description = "Docker, AWS DevOps pipelines, PostgreSQL and a bit of Jira.";
        let matched = skills.matches_in(description);

        let mut cursor = skills.as_slice().iter();
        for m in &matched {
            assert!(
                cursor.any(|s| s.as_str() == *m),
                "{m} out of order or not in the skill list"
            );
            assert!(description.to_lowercase().contains(&m.to_lowercase()));
        }
        // "SQL" is found inside "PostgreSQL", "AWS" inside "AWS DevOps".
        assert_eq!(
            matched,
            vec!["SQL", "AWS", "PostgreSQL", "Docker", "AWS DevOps", "Jira"]
        );
    }

    #[test]
    fn test_default_catalog_matches_python_and_sql() {
        let skills = SkillSet::default();
        let matched = skills.matches_in("Looking for Python and SQL expert");
        assert_eq!(matched, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_parse_trims_and_drops_empty_entries() {
        let skills = SkillSet::parse(" Rust , ,Go,  ");
        assert_eq!(skills.as_slice(), &["Rust".to_string(), "Go".to_string()]);
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_parse_empty_string_yields_empty_set() {
        assert!(SkillSet::parse("").is_empty());
    }
}
