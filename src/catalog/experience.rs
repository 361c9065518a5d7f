use chrono::{Datelike, NaiveDate};

use super::{CatalogRecord, SortKeys};
use crate::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyType {
    Startup,
    Enterprise,
    Contract,
}

impl CompanyType {
    pub fn icon(self) -> Icon {
        match self {
            CompanyType::Startup => Icon::Rocket,
            CompanyType::Enterprise => Icon::Building,
            CompanyType::Contract => Icon::FileText,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentType {
    FullTime,
    Contract,
    OpenSource,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 3] = [
        EmploymentType::FullTime,
        EmploymentType::Contract,
        EmploymentType::OpenSource,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::Contract => "contract",
            EmploymentType::OpenSource => "open-source",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::OpenSource => "Open-source",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            EmploymentType::FullTime => Icon::Building,
            EmploymentType::Contract => Icon::FileText,
            EmploymentType::OpenSource => Icon::Github,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub id: &'static str,
    pub company: &'static str,
    pub company_type: CompanyType,
    pub role: &'static str,
    pub start: NaiveDate,
    /// `None` while the role is ongoing.
    pub end: Option<NaiveDate>,
    pub bullets: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
    pub employment_type: EmploymentType,
    /// CSS colour for the timeline dot and accent bar.
    pub accent: &'static str,
    pub highlight: bool,
}

impl Experience {
    pub fn period(&self) -> String {
        let end = match self.end {
            Some(end) => end.format("%b %Y").to_string(),
            None => "Present".to_string(),
        };
        format!("{} — {}", self.start.format("%b %Y"), end)
    }

    /// Whole months between start and end (or `today` for ongoing roles), at least one.
    pub fn months(&self, today: NaiveDate) -> u32 {
        let end = self.end.unwrap_or(today);
        let months = (end.year() - self.start.year()) * 12 + end.month() as i32
            - self.start.month() as i32;
        months.max(1) as u32
    }

    /// Human tenure such as "2 yrs 3 mos", derived from [`Experience::months`].
    pub fn tenure(&self, today: NaiveDate) -> String {
        let months = self.months(today);
        let (years, rest) = (months / 12, months % 12);
        let unit = |n: u32, one: &str, many: &str| format!("{n} {}", if n == 1 { one } else { many });
        match (years, rest) {
            (0, m) => unit(m, "mo", "mos"),
            (y, 0) => unit(y, "yr", "yrs"),
            (y, m) => format!("{} {}", unit(y, "yr", "yrs"), unit(m, "mo", "mos")),
        }
    }
}

impl CatalogRecord for Experience {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.role
    }

    fn tags(&self) -> Vec<&str> {
        vec![self.employment_type.as_str()]
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.role, self.company];
        fields.extend(self.bullets.iter().copied());
        fields.extend(self.technologies.iter().copied());
        fields
    }

    fn sort_keys(&self) -> SortKeys {
        // ongoing roles are always the most recent
        let recency = self
            .end
            .map(|d| i64::from(d.num_days_from_ce()))
            .unwrap_or(i64::MAX);
        SortKeys {
            featured: self.highlight,
            recency,
            score: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter, FilterState, SortMode};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn role(id: &'static str, end: Option<&str>, employment_type: EmploymentType) -> Experience {
        Experience {
            id,
            company: "Acme",
            company_type: CompanyType::Startup,
            role: "Engineer",
            start: date("2020-01-01"),
            end: end.map(date),
            bullets: &[],
            technologies: &["Rust"],
            link: None,
            employment_type,
            accent: "#64d7c2",
            highlight: false,
        }
    }

    #[test]
    fn test_present_sorts_newest() {
        let catalog = vec![
            role("old", Some("2021-03-01"), EmploymentType::FullTime),
            role("current", None, EmploymentType::OpenSource),
            role("mid", Some("2022-06-01"), EmploymentType::Contract),
        ];

        let newest = filter(&catalog, &FilterState::with_sort(SortMode::Newest))
            .into_iter()
            .map(|e| e.id)
            .collect::<Vec<_>>();
        assert_eq!(newest, vec!["current", "mid", "old"]);

        let oldest = filter(&catalog, &FilterState::with_sort(SortMode::Oldest))
            .into_iter()
            .map(|e| e.id)
            .collect::<Vec<_>>();
        assert_eq!(oldest, vec!["old", "mid", "current"]);
    }

    #[test]
    fn test_employment_type_filter() {
        let catalog = vec![
            role("a", None, EmploymentType::OpenSource),
            role("b", Some("2022-06-01"), EmploymentType::FullTime),
            role("c", Some("2019-06-01"), EmploymentType::OpenSource),
        ];
        let mut state = FilterState::with_sort(SortMode::Newest);
        state.select_only(Some(EmploymentType::OpenSource.as_str()));

        let visible = filter(&catalog, &state)
            .into_iter()
            .map(|e| e.id)
            .collect::<Vec<_>>();
        assert_eq!(visible, vec!["a", "c"]);

        state.select_only(None);
        assert_eq!(filter(&catalog, &state).len(), 3);
    }

    #[test]
    fn test_period_and_months() {
        let ongoing = role("a", None, EmploymentType::FullTime);
        assert_eq!(ongoing.period(), "Jan 2020 — Present");
        assert_eq!(ongoing.months(date("2021-01-15")), 12);

        let short = role("b", Some("2020-01-20"), EmploymentType::Contract);
        assert_eq!(short.period(), "Jan 2020 — Jan 2020");
        assert_eq!(short.months(date("2024-01-01")), 1);
    }

    #[test]
    fn test_tenure() {
        let ongoing = role("a", None, EmploymentType::FullTime);
        assert_eq!(ongoing.tenure(date("2020-02-01")), "1 mo");
        assert_eq!(ongoing.tenure(date("2020-08-01")), "7 mos");
        assert_eq!(ongoing.tenure(date("2021-01-01")), "1 yr");
        assert_eq!(ongoing.tenure(date("2022-04-01")), "2 yrs 3 mos");
    }
}
