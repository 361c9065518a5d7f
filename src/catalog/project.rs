use super::{CatalogRecord, SortKeys};

/// Number of tech badges a project card shows before collapsing into "+N".
pub const CARD_TECH_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub role: &'static str,
    pub year: i32,
    pub tech: &'static [&'static str],
    pub thumbnail: &'static str,
    /// Extra screenshots shown after the thumbnail in the detail carousel.
    pub gallery: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub featured: bool,
    pub impact_score: Option<u32>,
}

impl Project {
    /// Carousel slides: the thumbnail first, then the gallery.
    pub fn slides(&self) -> Vec<&'static str> {
        std::iter::once(self.thumbnail)
            .chain(self.gallery.iter().copied())
            .collect()
    }

    pub fn slide_count(&self) -> usize {
        1 + self.gallery.len()
    }

    /// Badges for the card, and how many were left out.
    pub fn card_tech(&self) -> (&'static [&'static str], usize) {
        let shown = self.tech.len().min(CARD_TECH_LIMIT);
        (&self.tech[..shown], self.tech.len() - shown)
    }
}

impl CatalogRecord for Project {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn tags(&self) -> Vec<&str> {
        self.tech.to_vec()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.summary, self.role]
    }

    fn sort_keys(&self) -> SortKeys {
        SortKeys {
            featured: self.featured,
            recency: self.year.into(),
            score: self.impact_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter, FilterState, SortMode};

    fn project(id: &'static str, tech: &'static [&'static str]) -> Project {
        Project {
            id,
            title: id,
            summary: "",
            role: "Developer",
            year: 2024,
            tech,
            thumbnail: "/img/thumb.jpg",
            gallery: &[],
            live_url: None,
            repo_url: None,
            featured: false,
            impact_score: None,
        }
    }

    #[test]
    fn test_next_js_selection_from_four_projects() {
        let catalog = vec![
            project("a", &["Next.js", "Python"]),
            project("b", &["Next.js"]),
            project("c", &["Python"]),
            project("d", &["Go"]),
        ];
        let mut state = FilterState::with_sort(SortMode::Featured);
        state.toggle_tag("Next.js");

        let visible = filter(&catalog, &state)
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(visible, vec!["a", "b"]);
    }

    #[test]
    fn test_role_is_searchable() {
        let mut catalog = vec![project("a", &["Go"]), project("b", &["Go"])];
        catalog[1].role = "Medical AI Developer";
        let mut state = FilterState::default();
        state.set_query("medical");

        let visible = filter(&catalog, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "b");
    }

    #[test]
    fn test_slides_start_with_thumbnail() {
        let mut p = project("a", &["Go"]);
        assert_eq!(p.slides(), vec!["/img/thumb.jpg"]);

        p.gallery = &["/img/one.jpg", "/img/two.jpg"];
        assert_eq!(p.slide_count(), 3);
        assert_eq!(p.slides()[0], "/img/thumb.jpg");
        assert_eq!(p.slides()[2], "/img/two.jpg");
    }

    #[test]
    fn test_card_tech_collapses_overflow() {
        let p = project("a", &["A", "B", "C", "D", "E", "F"]);
        let (shown, hidden) = p.card_tech();
        assert_eq!(shown, &["A", "B", "C", "D"]);
        assert_eq!(hidden, 2);

        let p = project("b", &["A"]);
        assert_eq!(p.card_tech(), (&["A"][..], 0));
    }
}
