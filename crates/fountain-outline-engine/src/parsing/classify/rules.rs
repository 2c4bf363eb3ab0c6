use std::sync::LazyLock;

use regex::Regex;

use super::category::LineCategory;

/// A single line-matching rule.
///
/// Rules only look at the line itself; none consults neighbouring lines.
#[derive(Debug)]
pub enum Rule {
    /// Line starts with the given literal.
    Prefix(&'static str),
    /// Line starts with any of the literals, ignoring ASCII case.
    PrefixIgnoreCase(&'static [&'static str]),
    /// Line matches an anchored pattern.
    Pattern(Regex),
    /// Line is empty or whitespace only.
    Blank,
    /// Line contains no upper-case ASCII letter.
    NoUppercase,
    /// Always matches.
    Any,
}

impl Rule {
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Rule::Prefix(prefix) => line.starts_with(*prefix),
            Rule::PrefixIgnoreCase(prefixes) => prefixes.iter().any(|p| {
                line.get(..p.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(p))
            }),
            Rule::Pattern(re) => re.is_match(line),
            Rule::Blank => line.trim().is_empty(),
            Rule::NoUppercase => !line.chars().any(|c| c.is_ascii_uppercase()),
            Rule::Any => true,
        }
    }
}

/// Scene heading prefixes. `INT./EXT.` is listed for completeness even
/// though `INT` already covers it.
pub const SCENE_HEADING_PREFIXES: &[&str] = &["INT./EXT.", "INT", "EXT", "EST"];

fn pattern(re: &str) -> Rule {
    // Patterns are literals below; a failure here is a programming error.
    Rule::Pattern(Regex::new(re).unwrap_or_else(|e| panic!("invalid rule pattern {re:?}: {e}")))
}

/// The ordered rule table. The first matching rule decides the category,
/// so the order here is part of the classifier's contract.
pub static RULES: LazyLock<Vec<(Rule, LineCategory)>> = LazyLock::new(|| {
    vec![
        (Rule::Prefix("#"), LineCategory::Comment),
        (
            Rule::PrefixIgnoreCase(SCENE_HEADING_PREFIXES),
            LineCategory::SceneHeading,
        ),
        (pattern(r"^[A-Z][A-Z0-9\s]*(\(.*\))?$"), LineCategory::Character),
        (pattern(r"^\(.*\)$"), LineCategory::Parenthetical),
        (Rule::Prefix(">"), LineCategory::Transition),
        (pattern(r"^\[\[.*\]\]$"), LineCategory::Note),
        (Rule::Prefix("==="), LineCategory::PageBreak),
        (Rule::Prefix("="), LineCategory::SynopsisSeparator),
        (Rule::Prefix("."), LineCategory::SceneNumber),
        (Rule::Prefix("*"), LineCategory::Emphasis),
        (pattern(r"^_.*_$"), LineCategory::Underline),
        (Rule::Blank, LineCategory::Blank),
        (Rule::NoUppercase, LineCategory::Dialogue),
        (Rule::Any, LineCategory::Action),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_category_in_order() {
        let order: Vec<LineCategory> = RULES.iter().map(|(_, c)| *c).collect();
        assert_eq!(order, LineCategory::ALL.to_vec());
    }

    #[test]
    fn last_rule_is_exhaustive() {
        let (rule, category) = RULES.last().expect("rule table is not empty");
        assert!(matches!(rule, Rule::Any));
        assert_eq!(*category, LineCategory::Action);
    }

    #[test]
    fn prefix_ignore_case_handles_short_and_multibyte_lines() {
        let rule = Rule::PrefixIgnoreCase(SCENE_HEADING_PREFIXES);
        assert!(rule.matches("int. kitchen"));
        assert!(rule.matches("Ext"));
        assert!(!rule.matches("IN"));
        assert!(!rule.matches("Ié"));
        assert!(!rule.matches(""));
    }

    #[test]
    fn no_uppercase_ignores_non_ascii_capitals() {
        assert!(Rule::NoUppercase.matches("élan"));
        assert!(Rule::NoUppercase.matches("Élan"));
        assert!(!Rule::NoUppercase.matches("hello World"));
    }
}
