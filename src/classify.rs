// src/classify.rs
use crate::config::rules::RoleKeywordTable;

/// Category of the first table key (in table order) contained in `role_text`.
///
/// Text position is irrelevant: for "strategy analyst, sales strategy" the
/// table decides which of the two keys is tried first.
pub fn classify<'t>(role_text: &str, table: &'t RoleKeywordTable) -> Option<&'t str> {
    let lower = role_text.to_lowercase();
    table
        .entries()
        .iter()
        .find(|(key, _)| lower.contains(key.as_str()))
        .map(|(_, category)| category.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> RoleKeywordTable {
        RoleKeywordTable::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn no_keyword_no_category() {
        let t = RoleKeywordTable::default();
        assert_eq!(classify("Marketing Intern 2025", &t), None);
        assert_eq!(classify("", &t), None);
    }

    #[test]
    fn case_insensitive_match() {
        let t = table(&[("strategy", "Strategy")]);
        assert_eq!(classify("Business STRATEGY Intern 2025", &t), Some("Strategy"));
    }

    #[test]
    fn table_order_beats_text_position() {
        // "analyst" appears later in the text but is declared first.
        let t = table(&[("analyst", "Analyst"), ("sales", "Sales")]);
        assert_eq!(classify("Sales Analyst Intern", &t), Some("Analyst"));

        let t = table(&[("sales", "Sales"), ("analyst", "Analyst")]);
        assert_eq!(classify("Sales Analyst Intern", &t), Some("Sales"));
    }

    #[test]
    fn shorter_key_declared_first_wins_over_specific() {
        let t = table(&[("strategy", "Strategy"), ("sales strategy", "Sales Strategy")]);
        assert_eq!(classify("Sales Strategy Intern", &t), Some("Strategy"));
    }

    #[test]
    fn compiled_table_examples() {
        let t = RoleKeywordTable::default();
        assert_eq!(classify("Investment Banking Summer Analyst", &t), Some("Investment Banking"));
        assert_eq!(classify("Business Development Intern", &t), Some("Business Development"));
        assert_eq!(classify("Management Consultant Intern", &t), Some("Management Consultant"));
    }
}
