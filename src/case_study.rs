//! Long-form project write-ups, embedded from `content/projects/<id>.md`.

use chrono::NaiveDate;
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

#[cfg(feature = "ssr")]
use crate::highlight::highlight;

/// Rendered case studies by project id. The server fills it on first render;
/// the browser fills it from server-function responses.
pub static GLOBAL_CASE_STUDY_CACHE: LazyLock<DashMap<String, CaseStudy>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content/projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct CaseStudyFiles;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    role: String,
    duration: String,
    stack: Vec<String>,
    updated: NaiveDate,
    #[serde(default)]
    outcomes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub role: String,
    pub duration: String,
    pub stack: Vec<String>,
    pub updated: NaiveDate,
    pub outcomes: Vec<String>,
    /// Body rendered to HTML, code blocks already highlighted.
    pub html: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseStudyError {
    #[error("No case study for project {0:?}")]
    NotFound(String),
    #[error("Couldn't parse case study {0:?}")]
    Parse(String),
}

fn file_name(id: &str) -> String {
    format!("{id}.md")
}

/// Project ids that have a write-up.
pub fn available() -> Vec<String> {
    let mut ids = CaseStudyFiles::iter()
        .filter_map(|f| f.strip_suffix(".md").map(str::to_string))
        .collect::<Vec<_>>();
    ids.sort();
    ids
}

pub fn has_case_study(id: &str) -> bool {
    CaseStudyFiles::iter().any(|f| f == file_name(id))
}

#[cfg(feature = "ssr")]
fn render(id: &str, source: &str) -> Result<CaseStudy, CaseStudyError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| CaseStudyError::Parse(id.to_string()))?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, highlight(parser));

    let fm = parsed.data;
    Ok(CaseStudy {
        id: id.to_string(),
        title: fm.title,
        role: fm.role,
        duration: fm.duration,
        stack: fm.stack,
        updated: fm.updated,
        outcomes: fm.outcomes,
        html,
    })
}

/// Loads and renders the write-up for `id`, caching successful renders.
#[cfg(feature = "ssr")]
pub fn load_case_study(id: &str) -> Result<CaseStudy, CaseStudyError> {
    if let Some(hit) = GLOBAL_CASE_STUDY_CACHE.get(id) {
        return Ok(hit.clone());
    }
    // ids come from the query string, so never treat them as paths
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(CaseStudyError::NotFound(id.to_string()));
    }
    let file = CaseStudyFiles::get(&file_name(id))
        .ok_or_else(|| CaseStudyError::NotFound(id.to_string()))?;
    let source =
        String::from_utf8(file.data.into()).map_err(|_| CaseStudyError::Parse(id.to_string()))?;

    let study = render(id, &source)?;
    tracing::debug!("rendered case study {id}");
    GLOBAL_CASE_STUDY_CACHE.insert(id.to_string(), study.clone());
    Ok(study)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::PROJECTS;

    #[test]
    fn test_every_project_has_a_case_study() {
        for project in PROJECTS {
            assert!(has_case_study(project.id), "missing {}", project.id);
        }
        assert_eq!(available().len(), PROJECTS.len());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_case_studies_render() {
        for project in PROJECTS {
            let study = load_case_study(project.id).unwrap();
            assert_eq!(study.id, project.id);
            assert!(!study.title.is_empty());
            assert!(!study.stack.is_empty());
            assert!(study.html.contains("<h2>"));
            // front matter is not part of the body
            assert!(!study.html.contains("stack:"));
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_unknown_and_hostile_ids() {
        assert_eq!(
            load_case_study("nope"),
            Err(CaseStudyError::NotFound("nope".to_string()))
        );
        assert!(matches!(
            load_case_study("../Cargo"),
            Err(CaseStudyError::NotFound(_))
        ));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_bad_front_matter() {
        let source = "---\ntitle: Missing fields\n---\n\nBody\n";
        assert_eq!(
            render("broken", source),
            Err(CaseStudyError::Parse("broken".to_string()))
        );
    }
}
