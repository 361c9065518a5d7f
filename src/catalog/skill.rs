use super::{CatalogRecord, SortKeys};
use crate::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillCategory {
    Frontend,
    Backend,
    AiMl,
    Languages,
    Frameworks,
    Tools,
}

impl SkillCategory {
    /// Display order of the category toggles.
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::AiMl,
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::AiMl => "AI/ML",
            SkillCategory::Languages => "Languages",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Tools => "Tools",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            SkillCategory::Frontend => Icon::Globe,
            SkillCategory::Backend => Icon::Database,
            SkillCategory::AiMl => Icon::Brain,
            SkillCategory::Languages => Icon::Code,
            SkillCategory::Frameworks => Icon::Layers,
            SkillCategory::Tools => Icon::Settings,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillBadge {
    Expert,
    Primary,
    Familiar,
}

impl SkillBadge {
    pub fn label(self) -> &'static str {
        match self {
            SkillBadge::Expert => "Expert",
            SkillBadge::Primary => "Primary",
            SkillBadge::Familiar => "Familiar",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SkillBadge::Expert => "Deep expertise with proven track record",
            SkillBadge::Primary => "Frequently used in production environments",
            SkillBadge::Familiar => "Working knowledge and practical experience",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            SkillBadge::Expert => "bg-cyan/20 text-cyan border-cyan/30",
            SkillBadge::Primary => "bg-purple/20 text-purple border-purple/30",
            SkillBadge::Familiar => "bg-muted/20 text-muted border-muted/30",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub categories: &'static [SkillCategory],
    pub icon: Icon,
    pub summary: &'static str,
    /// Proficiency, 0 to 100.
    pub percent: u8,
    pub badge: Option<SkillBadge>,
    pub notes: &'static [&'static str],
    pub key_skill: bool,
}

impl Skill {
    pub fn is_key(&self) -> bool {
        self.key_skill || self.badge == Some(SkillBadge::Expert) || self.percent >= 85
    }
}

impl CatalogRecord for Skill {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.name
    }

    fn tags(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.as_str()).collect()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name, self.summary];
        fields.extend(self.notes.iter().copied());
        fields
    }

    fn sort_keys(&self) -> SortKeys {
        SortKeys {
            featured: self.is_key(),
            recency: 0,
            score: Some(self.percent.into()),
        }
    }
}

/// Dash offset that fills a progress ring of `radius` to `percent`.
pub fn ring_offset(percent: u8, radius: f64) -> f64 {
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let clamped = f64::from(percent.min(100));
    circumference - clamped / 100.0 * circumference
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter, FilterState, SortMode};

    fn skill(id: &'static str, categories: &'static [SkillCategory], percent: u8) -> Skill {
        Skill {
            id,
            name: id,
            categories,
            icon: Icon::Code,
            summary: "",
            percent,
            badge: None,
            notes: &[],
            key_skill: false,
        }
    }

    #[test]
    fn test_category_toggles_sort_by_proficiency() {
        let catalog = vec![
            skill("vue", &[SkillCategory::Frontend], 78),
            skill("python", &[SkillCategory::Backend, SkillCategory::AiMl], 93),
            skill("react", &[SkillCategory::Frontend], 95),
            skill("docker", &[SkillCategory::Tools], 83),
        ];
        let mut state = FilterState::with_sort(SortMode::Impact);
        state.toggle_tag(SkillCategory::Frontend.as_str());
        state.toggle_tag(SkillCategory::AiMl.as_str());

        let visible = filter(&catalog, &state)
            .into_iter()
            .map(|s| s.id)
            .collect::<Vec<_>>();
        assert_eq!(visible, vec!["react", "python", "vue"]);
    }

    #[test]
    fn test_notes_are_searchable() {
        let mut catalog = vec![skill("git", &[SkillCategory::Tools], 94)];
        catalog[0].notes = &["Advanced branching strategies"];
        let mut state = FilterState::default();
        state.set_query("branching");
        assert_eq!(filter(&catalog, &state).len(), 1);

        state.set_query("kubernetes");
        assert!(filter(&catalog, &state).is_empty());
    }

    #[test]
    fn test_key_skill_rules() {
        let mut s = skill("go", &[SkillCategory::Languages], 60);
        assert!(!s.is_key());
        s.badge = Some(SkillBadge::Expert);
        assert!(s.is_key());
        s.badge = Some(SkillBadge::Primary);
        s.percent = 85;
        assert!(s.is_key());
    }

    #[test]
    fn test_ring_offset_bounds() {
        let full = 2.0 * std::f64::consts::PI * 10.0;
        assert_eq!(ring_offset(0, 10.0), full);
        assert!(ring_offset(100, 10.0).abs() < 1e-9);
        assert!(ring_offset(250, 10.0).abs() < 1e-9);
        assert!((ring_offset(50, 10.0) - full / 2.0).abs() < 1e-9);
    }
}
