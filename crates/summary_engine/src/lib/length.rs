use serde::Deserialize;

use crate::config::LengthTable;

pub const MIN_COMPLETION_TOKENS: u32 = 64;
pub const MAX_COMPLETION_TOKENS: u32 = 4096;

/// Requested summary length as it arrives from callers: either an
/// approximate word count or a symbolic tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LengthSpec {
    Words(u32),
    Tag(String),
}

impl Default for LengthSpec {
    fn default() -> Self {
        LengthSpec::Tag("short".to_string())
    }
}

/// Interpreted summary length. Unrecognized tags map to the fallback
/// variant rather than failing; that permissiveness is part of the
/// summarize contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
    Words(u32),
    Unrecognized(String),
}

impl SummaryLength {
    pub fn from_spec(spec: &LengthSpec) -> Self {
        match spec {
            LengthSpec::Words(n) if *n > 0 => SummaryLength::Words(*n),
            LengthSpec::Words(n) => SummaryLength::Unrecognized(n.to_string()),
            LengthSpec::Tag(tag) => match tag.to_lowercase().as_str() {
                "short" => SummaryLength::Short,
                "medium" => SummaryLength::Medium,
                "long" => SummaryLength::Long,
                other => SummaryLength::Unrecognized(other.to_string()),
            },
        }
    }

    /// Length directive included in the user prompt.
    pub fn instruction(&self) -> String {
        match self {
            SummaryLength::Short => "Summarize concisely in 1 to 3 sentences.".to_string(),
            SummaryLength::Medium => {
                "Summarize at medium length, in 3 to 6 sentences.".to_string()
            }
            SummaryLength::Long => {
                "Summarize in detail, in at least 6 sentences with supporting specifics."
                    .to_string()
            }
            SummaryLength::Words(n) => {
                format!("Produce a summary of approximately {n} words.")
            }
            SummaryLength::Unrecognized(_) => {
                "Summarize concisely in a few sentences.".to_string()
            }
        }
    }

    /// Completion budget for the remote call, assuming 1 token is roughly
    /// 4 characters. Clamped to [64, 4096].
    pub fn max_tokens(&self, table: &LengthTable) -> u32 {
        let target_chars = match self {
            SummaryLength::Short => table.short,
            SummaryLength::Medium => table.medium,
            SummaryLength::Long => table.long,
            SummaryLength::Words(n) => *n,
            SummaryLength::Unrecognized(_) => table.medium,
        };
        (target_chars / 4).clamp(MIN_COMPLETION_TOKENS, MAX_COMPLETION_TOKENS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbolic_tags_parse_case_insensitively() {
        for tag in ["short", "Short", "SHORT"] {
            assert_eq!(
                SummaryLength::from_spec(&LengthSpec::Tag(tag.to_string())),
                SummaryLength::Short
            );
        }
        assert_eq!(
            SummaryLength::from_spec(&LengthSpec::Tag("Medium".to_string())),
            SummaryLength::Medium
        );
        assert_eq!(
            SummaryLength::from_spec(&LengthSpec::Tag("LONG".to_string())),
            SummaryLength::Long
        );
    }

    #[test]
    fn unrecognized_tag_falls_back_instead_of_failing() {
        let length = SummaryLength::from_spec(&LengthSpec::Tag("banana".to_string()));
        assert_eq!(length, SummaryLength::Unrecognized("banana".to_string()));
        assert_eq!(length.instruction(), "Summarize concisely in a few sentences.");
    }

    #[test]
    fn zero_word_count_falls_back() {
        let length = SummaryLength::from_spec(&LengthSpec::Words(0));
        assert!(matches!(length, SummaryLength::Unrecognized(_)));
    }

    #[test]
    fn word_count_drives_the_instruction() {
        let length = SummaryLength::from_spec(&LengthSpec::Words(250));
        assert_eq!(
            length.instruction(),
            "Produce a summary of approximately 250 words."
        );
    }

    #[test]
    fn short_budget_is_clamped_to_the_floor() {
        // 100 chars / 4 = 25, below the floor of 64
        let table = LengthTable::default();
        assert_eq!(SummaryLength::Short.max_tokens(&table), 64);
    }

    #[test]
    fn numeric_budget_within_bounds_is_not_clamped() {
        let table = LengthTable::default();
        assert_eq!(SummaryLength::Words(4000).max_tokens(&table), 1000);
    }

    #[test]
    fn huge_budget_is_clamped_to_the_ceiling() {
        let table = LengthTable::default();
        assert_eq!(SummaryLength::Words(1_000_000).max_tokens(&table), 4096);
    }

    #[test]
    fn budget_is_monotonic_over_tags() {
        let table = LengthTable::default();
        let short = SummaryLength::Short.max_tokens(&table);
        let medium = SummaryLength::Medium.max_tokens(&table);
        let long = SummaryLength::Long.max_tokens(&table);
        assert!(short <= medium);
        assert!(medium <= long);
    }

    #[test]
    fn unrecognized_tag_uses_the_medium_budget() {
        let table = LengthTable::default();
        assert_eq!(
            SummaryLength::Unrecognized("banana".to_string()).max_tokens(&table),
            SummaryLength::Medium.max_tokens(&table)
        );
    }

    #[test]
    fn budget_respects_a_custom_table() {
        let table = LengthTable {
            short: 400,
            medium: 2000,
            long: 40_000,
        };
        assert_eq!(SummaryLength::Short.max_tokens(&table), 100);
        assert_eq!(SummaryLength::Medium.max_tokens(&table), 500);
        assert_eq!(SummaryLength::Long.max_tokens(&table), 4096);
    }
}
