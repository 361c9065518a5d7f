//! Static catalogs (skills, projects, experience) and the filter/sort engine
//! that derives what each section shows.

pub mod data;
mod experience;
mod project;
mod skill;

pub use experience::{CompanyType, EmploymentType, Experience};
pub use project::Project;
pub use skill::{ring_offset, Skill, SkillBadge, SkillCategory};

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Orderable fields a record exposes to the sort modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortKeys {
    pub featured: bool,
    /// Larger is more recent.
    pub recency: i64,
    pub score: Option<u32>,
}

pub trait CatalogRecord {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn tags(&self) -> Vec<&str>;
    /// Display strings the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;
    fn sort_keys(&self) -> SortKeys;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    #[default]
    Featured,
    Newest,
    Oldest,
    /// Numeric score descending: impact for projects, proficiency for skills.
    Impact,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Featured,
        SortMode::Newest,
        SortMode::Oldest,
        SortMode::Impact,
    ];

    /// Orders offered by the project gallery. Oldest-first only suits the timeline.
    pub const GALLERY: [SortMode; 3] = [SortMode::Featured, SortMode::Newest, SortMode::Impact];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::Impact => "impact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Featured => "Featured",
            SortMode::Newest => "Newest",
            SortMode::Oldest => "Oldest",
            SortMode::Impact => "Impact",
        }
    }

    pub fn compare(self, a: &SortKeys, b: &SortKeys) -> Ordering {
        match self {
            SortMode::Featured => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.recency.cmp(&a.recency)),
            SortMode::Newest => b.recency.cmp(&a.recency),
            SortMode::Oldest => a.recency.cmp(&b.recency),
            SortMode::Impact => b.score.unwrap_or(0).cmp(&a.score.unwrap_or(0)),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or(())
    }
}

/// What the user has asked a section to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub tags: BTreeSet<String>,
    pub sort: SortMode,
}

impl FilterState {
    pub fn with_sort(sort: SortMode) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_string());
        }
    }

    /// Replaces the selection with a single tag, or clears it with `None`.
    pub fn select_only(&mut self, tag: Option<&str>) {
        self.tags.clear();
        if let Some(tag) = tag {
            self.tags.insert(tag.to_string());
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_filtered(&self) -> bool {
        !self.tags.is_empty() || !self.query.trim().is_empty()
    }

    /// Drops query and tags; the sort mode is kept.
    pub fn clear(&mut self) {
        self.query.clear();
        self.tags.clear();
    }

    fn matches_tags<R: CatalogRecord>(&self, record: &R) -> bool {
        self.tags.is_empty() || record.tags().iter().any(|t| self.tags.contains(*t))
    }
}

fn matches_query<R: CatalogRecord>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
        || record.tags().join(" ").to_lowercase().contains(needle)
}

/// Derives the visible, ordered subset of `catalog` for `state`.
///
/// Records are matched on tags (any selected tag) and on the trimmed,
/// case-insensitive query, then stable-sorted by the active sort mode, so
/// records with equal keys keep their catalog order.
pub fn filter<'a, R: CatalogRecord>(catalog: &'a [R], state: &FilterState) -> Vec<&'a R> {
    let needle = state.query.trim().to_lowercase();
    let mut visible = catalog
        .iter()
        .filter(|r| state.matches_tags(*r) && matches_query(*r, &needle))
        .collect::<Vec<_>>();
    visible.sort_by(|a, b| state.sort.compare(&a.sort_keys(), &b.sort_keys()));
    visible
}

/// Sorted, de-duplicated union of every tag in `catalog`.
pub fn all_tags<R: CatalogRecord>(catalog: &[R]) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|r| r.tags().into_iter().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// "Load more" paging over a derived list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    visible: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            visible: page_size,
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn show_more(&mut self) {
        self.visible += self.page_size;
    }

    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.visible
    }

    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..items.len().min(self.visible)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: &'static str,
        tags: Vec<&'static str>,
        keys: SortKeys,
    }

    impl CatalogRecord for Item {
        fn id(&self) -> &str {
            self.id
        }

        fn title(&self) -> &str {
            self.id
        }

        fn tags(&self) -> Vec<&str> {
            self.tags.clone()
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.id]
        }

        fn sort_keys(&self) -> SortKeys {
            self.keys
        }
    }

    fn item(id: &'static str, tags: &[&'static str], featured: bool, recency: i64) -> Item {
        Item {
            id,
            tags: tags.to_vec(),
            keys: SortKeys {
                featured,
                recency,
                score: None,
            },
        }
    }

    fn ids<R: CatalogRecord>(records: &[&R]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    fn gallery() -> Vec<Item> {
        vec![
            item("chatbot", &["Next.js", "Python"], true, 2024),
            item("health", &["Next.js"], true, 2024),
            item("vision", &["Python"], false, 2023),
            item("cli", &["Go"], false, 2022),
        ]
    }

    #[test]
    fn test_tag_selection_keeps_catalog_order() {
        let catalog = gallery();
        let mut state = FilterState::default();
        state.toggle_tag("Next.js");

        let visible = filter(&catalog, &state);
        assert_eq!(ids(&visible), vec!["chatbot", "health"]);
    }

    #[test]
    fn test_unknown_tag_yields_nothing() {
        let catalog = gallery();
        let mut state = FilterState::default();
        state.toggle_tag("COBOL");

        assert!(filter(&catalog, &state).is_empty());
    }

    #[test]
    fn test_empty_state_returns_everything_sorted() {
        let catalog = vec![
            item("old", &["Go"], false, 2019),
            item("new", &["Go"], false, 2024),
            item("star", &["Go"], true, 2020),
        ];

        let featured = filter(&catalog, &FilterState::default());
        assert_eq!(ids(&featured), vec!["star", "new", "old"]);

        let newest = filter(&catalog, &FilterState::with_sort(SortMode::Newest));
        assert_eq!(ids(&newest), vec!["new", "star", "old"]);

        let oldest = filter(&catalog, &FilterState::with_sort(SortMode::Oldest));
        assert_eq!(ids(&oldest), vec!["old", "star", "new"]);
    }

    #[test]
    fn test_impact_treats_missing_score_as_zero() {
        let mut catalog = gallery();
        catalog[2].keys.score = Some(80);
        catalog[3].keys.score = Some(95);

        let visible = filter(&catalog, &FilterState::with_sort(SortMode::Impact));
        assert_eq!(ids(&visible), vec!["cli", "vision", "chatbot", "health"]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let catalog = gallery();
        let mut state = FilterState::default();

        state.set_query("  VISION ");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["vision"]);

        // tags are searchable as a joined list
        state.set_query("python");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["chatbot", "vision"]);

        state.set_query("next.js python");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["chatbot"]);
    }

    #[test]
    fn test_query_and_tags_combine() {
        let catalog = gallery();
        let mut state = FilterState::default();
        state.toggle_tag("Python");
        state.set_query("chat");

        assert_eq!(ids(&filter(&catalog, &state)), vec!["chatbot"]);
    }

    #[test]
    fn test_filter_is_deterministic() {
        let catalog = gallery();
        let mut state = FilterState::with_sort(SortMode::Newest);
        state.toggle_tag("Python");
        state.toggle_tag("Go");

        let first = ids(&filter(&catalog, &state));
        let second = ids(&filter(&catalog, &state));
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut state = FilterState::with_sort(SortMode::Impact);
        assert!(!state.is_filtered());

        state.toggle_tag("Go");
        assert!(state.is_selected("Go"));
        state.toggle_tag("Go");
        assert!(!state.is_selected("Go"));

        state.select_only(Some("Rust"));
        state.set_query("x");
        assert!(state.is_filtered());

        state.clear();
        assert!(!state.is_filtered());
        assert_eq!(state.sort, SortMode::Impact);

        // whitespace-only queries do not count as a filter
        state.set_query("   ");
        assert!(!state.is_filtered());
    }

    #[test]
    fn test_all_tags_sorted_unique() {
        let catalog = gallery();
        assert_eq!(all_tags(&catalog), vec!["Go", "Next.js", "Python"]);
    }

    #[test]
    fn test_sort_mode_round_trips_through_str() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>(), Ok(mode));
        }
        assert!("popular".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_gallery_sort_modes() {
        assert!(!SortMode::GALLERY.contains(&SortMode::Oldest));
        assert_eq!(SortMode::GALLERY[0], SortMode::default());
        for mode in SortMode::GALLERY {
            assert!(SortMode::ALL.contains(&mode));
        }
    }

    #[test]
    fn test_paginator() {
        let items = (0..14).collect::<Vec<_>>();
        let mut pages = Paginator::new(6);
        assert_eq!(pages.page(&items).len(), 6);
        assert!(pages.has_more(items.len()));

        pages.show_more();
        pages.show_more();
        assert_eq!(pages.page(&items).len(), 14);
        assert!(!pages.has_more(items.len()));

        pages.reset();
        assert_eq!(pages.visible(), 6);
        assert_eq!(pages.page(&items[..3]).len(), 3);
    }
}
