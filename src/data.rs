// src/data.rs
//
// View-layer filtering over a loaded ListingTable.
//
// - Filters: the sidebar selections (search text + three exact-match selectors).
// - ListingView: zero-copy projection (row indices into the table) after
//                filtering and the date-descending sort.
// - Summary: distinct counts over a view, shown above the table.

use std::collections::HashSet;

use crate::config::consts::FILTER_ALL;
use crate::records::{ListingRecord, ListingTable};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filters {
    /// Case-insensitive substring of title, company or location
    pub search: String,
    pub company: String,
    pub location: String,
    pub category: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search: s!(),
            company: s!(FILTER_ALL),
            location: s!(FILTER_ALL),
            category: s!(FILTER_ALL),
        }
    }
}

impl Filters {
    pub fn matches(&self, r: &ListingRecord) -> bool {
        let needle = self.search.to_lowercase();
        let searched = needle.is_empty()
            || r.title.to_lowercase().contains(&needle)
            || r.company.to_lowercase().contains(&needle)
            || r.location.to_lowercase().contains(&needle);

        searched
            && selected(&self.company, &r.company)
            && selected(&self.location, &r.location)
            && selected(&self.category, &r.category)
    }

    /// Reset any selector whose value no longer exists in `table`.
    pub fn retain_valid(&mut self, table: &ListingTable) {
        let fix = |sel: &mut String, col: fn(&ListingRecord) -> &str| {
            if sel.as_str() != FILTER_ALL && !table.rows.iter().any(|r| col(r) == sel.as_str()) {
                *sel = s!(FILTER_ALL);
            }
        };
        fix(&mut self.company, |r| &r.company);
        fix(&mut self.location, |r| &r.location);
        fix(&mut self.category, |r| &r.category);
    }
}

#[inline]
fn selected(choice: &str, value: &str) -> bool {
    choice == FILTER_ALL || choice == value
}

/// Filtered + sorted projection of a table.
#[derive(Clone, Debug)]
pub struct ListingView<'a> {
    /// Positions of kept rows in the table, display order
    pub row_ix: Vec<usize>,
    raw: &'a ListingTable,
}

impl<'a> ListingView<'a> {
    /// Apply `filters`, then order by `date_posted` descending.
    /// The sort is stable, so equal dates keep file order.
    pub fn new(raw: &'a ListingTable, filters: &Filters) -> Self {
        let mut row_ix: Vec<usize> = raw
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| filters.matches(r))
            .map(|(i, _)| i)
            .collect();
        row_ix.sort_by(|&a, &b| raw.rows[b].date_posted.cmp(&raw.rows[a].date_posted));
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &'a ListingRecord> + '_ {
        self.row_ix.iter().map(|&ix| &self.raw.rows[ix])
    }

    /// Materialize owned rows (for copy/export boundaries).
    pub fn to_table(&self) -> ListingTable {
        ListingTable::new(self.iter().cloned().collect())
    }

    pub fn summary(&self) -> Summary {
        Summary::of(self.iter())
    }
}

/// Owned form of `ListingView::new`.
pub fn filter_table(table: &ListingTable, filters: &Filters) -> ListingTable {
    ListingView::new(table, filters).to_table()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub companies: usize,
    pub locations: usize,
    pub categories: usize,
}

impl Summary {
    pub fn of<'r>(rows: impl IntoIterator<Item = &'r ListingRecord>) -> Self {
        let mut companies = HashSet::new();
        let mut locations = HashSet::new();
        let mut categories = HashSet::new();
        let mut total = 0;
        for r in rows {
            total += 1;
            companies.insert(r.company.as_str());
            locations.insert(r.location.as_str());
            categories.insert(r.category.as_str());
        }
        Self {
            total,
            companies: companies.len(),
            locations: locations.len(),
            categories: categories.len(),
        }
    }
}

/// Selector options: `"All"` followed by the sorted distinct values of a column.
pub fn choices(table: &ListingTable, col: fn(&ListingRecord) -> &str) -> Vec<String> {
    let mut values: Vec<&str> = table.rows.iter().map(col).collect();
    values.sort_unstable();
    values.dedup();

    let mut out = Vec::with_capacity(values.len() + 1);
    out.push(s!(FILTER_ALL));
    out.extend(values.into_iter().map(String::from));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, company: &str, location: &str, category: &str, date: &str) -> ListingRecord {
        ListingRecord {
            title: s!(title),
            company: s!(company),
            location: s!(location),
            category: s!(category),
            date_posted: s!(date),
            ..ListingRecord::default()
        }
    }

    fn table() -> ListingTable {
        ListingTable::new(vec![
            rec("Strategy Intern", "Acme", "New York, NY", "Strategy", "2025-01-01"),
            rec("IB Analyst", "Globex", "Chicago, IL", "Finance", "2025-01-03"),
            rec("Corp Strategy Intern", "Initech", "Austin, TX", "Strategy", "2025-01-02"),
        ])
    }

    #[test]
    fn category_filter_sorted_by_date_desc() {
        let t = table();
        let f = Filters { category: s!("Strategy"), ..Filters::default() };
        let out = filter_table(&t, &f);
        let titles: Vec<_> = out.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Corp Strategy Intern", "Strategy Intern"]);
    }

    #[test]
    fn search_is_or_across_fields() {
        let t = table();
        let by_location = Filters { search: s!("chicago"), ..Filters::default() };
        assert_eq!(filter_table(&t, &by_location).len(), 1);

        let by_company = Filters { search: s!("ACME"), ..Filters::default() };
        assert_eq!(filter_table(&t, &by_company).rows[0].company, "Acme");

        let by_title = Filters { search: s!("strategy"), ..Filters::default() };
        assert_eq!(filter_table(&t, &by_title).len(), 2);
    }

    #[test]
    fn search_whitespace_is_significant() {
        let t = table();
        let trailing = Filters { search: s!("york "), ..Filters::default() };
        assert!(filter_table(&t, &trailing).is_empty());

        let inner = Filters { search: s!("new york"), ..Filters::default() };
        assert_eq!(filter_table(&t, &inner).len(), 1);
    }

    #[test]
    fn filters_compose_conjunctively() {
        let t = table();
        let f = Filters {
            search: s!("intern"),
            company: s!("Initech"),
            ..Filters::default()
        };
        let out = filter_table(&t, &f);
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows[0].company, "Initech");

        let none = Filters { company: s!("Initech"), category: s!("Finance"), ..Filters::default() };
        assert!(filter_table(&t, &none).is_empty());
    }

    #[test]
    fn equal_dates_keep_file_order() {
        let t = ListingTable::new(vec![
            rec("a", "A", "X", "C", "2025-01-01"),
            rec("b", "B", "X", "C", "2025-01-02"),
            rec("c", "C", "X", "C", "2025-01-01"),
            rec("d", "D", "X", "C", "2025-01-02"),
        ]);
        let out = filter_table(&t, &Filters::default());
        let titles: Vec<_> = out.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["b", "d", "a", "c"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let t = table();
        let f = Filters { search: s!("in"), category: s!("Strategy"), ..Filters::default() };
        let once = filter_table(&t, &f);
        let twice = filter_table(&once, &f);
        assert_eq!(once, twice);
    }

    #[test]
    fn summary_counts() {
        let t = table();
        let view = ListingView::new(&t, &Filters::default());
        assert_eq!(
            view.summary(),
            Summary { total: 3, companies: 3, locations: 3, categories: 2 }
        );
        assert_eq!(Summary::of(&[]), Summary::default());
    }

    #[test]
    fn choices_are_sorted_with_all_first() {
        let t = table();
        assert_eq!(choices(&t, |r| &r.category), ["All", "Finance", "Strategy"]);
    }

    #[test]
    fn stale_selection_resets() {
        let t = table();
        let mut f = Filters { company: s!("Hooli"), category: s!("Finance"), ..Filters::default() };
        f.retain_valid(&t);
        assert_eq!(f.company, "All");
        assert_eq!(f.category, "Finance");
    }
}
