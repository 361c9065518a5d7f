use std::sync::LazyLock;

use chrono::NaiveDate;

use super::{CompanyType, EmploymentType, Experience, Project, Skill, SkillBadge, SkillCategory};
use crate::icons::Icon;

use SkillCategory::*;

pub static PROJECTS: &[Project] = &[
    Project {
        id: "ai-chatbot",
        title: "AI Chatbot",
        summary: "Intelligent conversational AI chatbot with advanced natural language processing capabilities.",
        role: "Full Stack AI Developer",
        year: 2024,
        tech: &["Next.js", "TypeScript", "OpenAI", "Tailwind", "Vercel", "AI/ML"],
        thumbnail: "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?q=80&w=1200&auto=format&fit=crop",
        gallery: &[
            "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?q=80&w=1200&auto=format&fit=crop&crop=focalpoint&fp-x=0.35&fp-y=0.45&fp-z=1.6",
            "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?q=80&w=1200&auto=format&fit=crop&crop=focalpoint&fp-x=0.7&fp-y=0.5&fp-z=2",
        ],
        live_url: Some("https://new-git-fix-question-mark-issue-abdullas-projects-eced2102.vercel.app/"),
        repo_url: Some("https://github.com/Abdulla090/ai-chatbot"),
        featured: true,
        impact_score: Some(95),
    },
    Project {
        id: "ai-healthcare",
        title: "AI Healthcare Platform",
        summary: "Comprehensive healthcare platform with AI-powered diagnostics, patient management, and telemedicine features.",
        role: "Healthcare AI Developer",
        year: 2024,
        tech: &["React", "TypeScript", "Medical AI", "Node.js", "MongoDB", "WebRTC"],
        thumbnail: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?q=80&w=1200&auto=format&fit=crop",
        gallery: &[
            "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?q=80&w=1200&auto=format&fit=crop&crop=focalpoint&fp-x=0.3&fp-y=0.4&fp-z=1.5",
            "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?q=80&w=1200&auto=format&fit=crop&crop=focalpoint&fp-x=0.65&fp-y=0.5&fp-z=1.8",
            "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?q=80&w=1200&auto=format&fit=crop&crop=focalpoint&fp-x=0.5&fp-y=0.7&fp-z=2.2",
        ],
        live_url: Some("https://nestro-health-rho.vercel.app/"),
        repo_url: Some("https://github.com/Abdulla090/ai-healthcare"),
        featured: true,
        impact_score: Some(92),
    },
    Project {
        id: "ai-try-it-on",
        title: "AI Try-It-On (Clothing)",
        summary: "Virtual try-on platform using AI for clothing visualization and personalized fashion recommendations.",
        role: "AI/AR Developer",
        year: 2024,
        tech: &["React", "Computer Vision", "AR", "TensorFlow.js", "WebGL", "AI/ML"],
        thumbnail: "https://images.unsplash.com/photo-1445205170230-053b83016050?q=80&w=1200&auto=format&fit=crop",
        gallery: &["https://images.unsplash.com/photo-1445205170230-053b83016050?q=80&w=1200&auto=format&fit=crop&crop=focalpoint&fp-x=0.5&fp-y=0.4&fp-z=1.7"],
        live_url: Some("https://closet-fusion-suggestions.lovable.app/"),
        repo_url: Some("https://github.com/Abdulla090/ai-try-it-on"),
        featured: true,
        impact_score: Some(89),
    },
    Project {
        id: "medical-imaging",
        title: "AI-Powered Medical Imaging Analysis",
        summary: "Advanced medical imaging platform with AI analysis for radiology reports, diagnosis assistance, and automated insights.",
        role: "Medical AI Developer",
        year: 2024,
        tech: &["React", "Python", "TensorFlow", "Medical AI", "DICOM", "FastAPI"],
        thumbnail: "https://images.unsplash.com/photo-1559757175-0eb30cd8c063?q=80&w=1200&auto=format&fit=crop",
        gallery: &[
            "https://images.unsplash.com/photo-1559757175-0eb30cd8c063?q=80&w=1200&auto=format&fit=crop&crop=focalpoint&fp-x=0.4&fp-y=0.5&fp-z=1.6",
            "https://images.unsplash.com/photo-1559757175-0eb30cd8c063?q=80&w=1200&auto=format&fit=crop&crop=focalpoint&fp-x=0.6&fp-y=0.35&fp-z=2",
        ],
        live_url: Some("https://medai-insight-reports.lovable.app/"),
        repo_url: Some("https://github.com/Abdulla090/medical-imaging-ai"),
        featured: false,
        impact_score: Some(94),
    },
];

pub static SKILLS: &[Skill] = &[
    Skill {
        id: "react",
        name: "React",
        categories: &[Frontend, Frameworks],
        icon: Icon::Code,
        summary: "Component-based UI development with hooks and state management",
        percent: 95,
        badge: Some(SkillBadge::Expert),
        notes: &[
            "Advanced React patterns and performance optimization",
            "Custom hooks and context management",
            "Server-side rendering and hydration",
        ],
        key_skill: true,
    },
    Skill {
        id: "nextjs",
        name: "Next.js",
        categories: &[Frontend, Frameworks],
        icon: Icon::Globe,
        summary: "Full-stack React framework with SSR and API routes",
        percent: 92,
        badge: Some(SkillBadge::Expert),
        notes: &[
            "App Router and Server Components",
            "API routes and middleware",
            "Performance optimization and SEO",
        ],
        key_skill: true,
    },
    Skill {
        id: "vue",
        name: "Vue.js",
        categories: &[Frontend, Frameworks],
        icon: Icon::Layers,
        summary: "Progressive framework for building user interfaces",
        percent: 78,
        badge: Some(SkillBadge::Primary),
        notes: &[
            "Vue 3 Composition API",
            "Vuex state management",
            "Component lifecycle and reactivity",
        ],
        key_skill: false,
    },
    Skill {
        id: "javascript",
        name: "JavaScript",
        categories: &[Languages],
        icon: Icon::Code,
        summary: "Modern ES6+ JavaScript for web development",
        percent: 96,
        badge: Some(SkillBadge::Expert),
        notes: &[
            "Advanced ES6+ features and async programming",
            "Functional programming patterns",
            "Browser APIs and DOM manipulation",
        ],
        key_skill: true,
    },
    Skill {
        id: "typescript",
        name: "TypeScript",
        categories: &[Languages],
        icon: Icon::FileText,
        summary: "Strongly typed superset of JavaScript",
        percent: 90,
        badge: Some(SkillBadge::Expert),
        notes: &[
            "Advanced type system and generics",
            "Type-safe API development",
            "Integration with modern frameworks",
        ],
        key_skill: true,
    },
    Skill {
        id: "python",
        name: "Python",
        categories: &[Backend, Languages, AiMl],
        icon: Icon::Bot,
        summary: "Versatile language for backend development and AI",
        percent: 93,
        badge: Some(SkillBadge::Expert),
        notes: &[
            "Django and FastAPI for web development",
            "Data science and machine learning libraries",
            "API development and microservices",
        ],
        key_skill: true,
    },
    Skill {
        id: "nodejs",
        name: "Node.js",
        categories: &[Backend, Frameworks],
        icon: Icon::Settings,
        summary: "Server-side JavaScript runtime environment",
        percent: 87,
        badge: Some(SkillBadge::Primary),
        notes: &[
            "Express.js and API development",
            "Real-time applications with Socket.io",
            "Microservices architecture",
        ],
        key_skill: false,
    },
    Skill {
        id: "ai-model-training",
        name: "AI Model Training",
        categories: &[AiMl],
        icon: Icon::Brain,
        summary: "LLMs, computer vision, NLP training workflows",
        percent: 95,
        badge: Some(SkillBadge::Expert),
        notes: &[
            "Fine-tuning LLMs for domain-specific tasks",
            "Training computer vision models for production",
            "Optimizing training pipelines and hyperparameters",
        ],
        key_skill: true,
    },
    Skill {
        id: "pytorch",
        name: "PyTorch",
        categories: &[AiMl, Tools],
        icon: Icon::Bot,
        summary: "Deep learning framework for model development",
        percent: 86,
        badge: Some(SkillBadge::Primary),
        notes: &[
            "Custom model architectures",
            "Distributed training setups",
            "Performance optimization techniques",
        ],
        key_skill: false,
    },
    Skill {
        id: "tensorflow",
        name: "TensorFlow",
        categories: &[AiMl, Tools],
        icon: Icon::Database,
        summary: "ML platform for production deployment",
        percent: 82,
        badge: Some(SkillBadge::Primary),
        notes: &[
            "TensorFlow Serving for production",
            "TensorBoard for experiment tracking",
            "TensorFlow Extended (TFX) pipelines",
        ],
        key_skill: false,
    },
    Skill {
        id: "git",
        name: "Git",
        categories: &[Tools],
        icon: Icon::Settings,
        summary: "Version control and collaboration",
        percent: 94,
        badge: Some(SkillBadge::Expert),
        notes: &[
            "Advanced Git workflows and branching strategies",
            "Code review and collaboration processes",
            "CI/CD integration and automation",
        ],
        key_skill: false,
    },
    Skill {
        id: "docker",
        name: "Docker",
        categories: &[Tools],
        icon: Icon::Layers,
        summary: "Containerization and deployment",
        percent: 83,
        badge: Some(SkillBadge::Primary),
        notes: &[
            "Container orchestration with Docker Compose",
            "Multi-stage builds and optimization",
            "Production deployment strategies",
        ],
        key_skill: false,
    },
];

fn date(s: &str) -> NaiveDate {
    s.parse().expect("catalog dates are ISO-8601")
}

pub static EXPERIENCE: LazyLock<Vec<Experience>> = LazyLock::new(|| {
    vec![
        Experience {
            id: "os-core-kit",
            company: "Open Source Core Kit",
            company_type: CompanyType::Startup,
            role: "Maintainer & Lead Developer",
            start: date("2023-03-01"),
            end: None,
            bullets: &[
                "Designed modular UI primitives with accessible defaults and zero-runtime theming.",
                "Established comprehensive test suite; reduced regressions by 40%.",
                "Guided community contributions and code reviews; merged 250+ PRs.",
                "Introduced performance budgets; cut bundle size by 18%.",
            ],
            technologies: &["TypeScript", "Next.js", "Tailwind", "Radix", "Vite"],
            link: Some("https://github.com/"),
            employment_type: EmploymentType::OpenSource,
            accent: "#64d7c2",
            highlight: true,
        },
        Experience {
            id: "acme-enterprise",
            company: "Acme Enterprise",
            company_type: CompanyType::Enterprise,
            role: "Senior Frontend Engineer",
            start: date("2022-04-01"),
            end: Some(date("2024-06-01")),
            bullets: &[
                "Led migration to Next.js app router with granular caching and RSC.",
                "Improved Lighthouse performance from 68 to 96 on key flows.",
                "Shipped design system with shadcn/ui primitives; 30+ apps adopted.",
                "Partnered with Design/UX to refine flows; increased conversion 11%.",
            ],
            technologies: &["Next.js", "TypeScript", "Tailwind", "shadcn/ui", "Vitest"],
            link: Some("https://example.com/case-study"),
            employment_type: EmploymentType::FullTime,
            accent: "#2ed3b7",
            highlight: true,
        },
        Experience {
            id: "nova-startup",
            company: "Nova Labs",
            company_type: CompanyType::Startup,
            role: "Founding Frontend Engineer",
            start: date("2021-01-01"),
            end: Some(date("2022-03-01")),
            bullets: &[
                "Built MVP dashboard and analytics with charts and real-time updates.",
                "Implemented typed API layer; reduced runtime errors by 35%.",
                "Bootstrapped CI/CD and preview deployments for rapid iteration.",
            ],
            technologies: &["React", "Next.js", "SWR", "Tailwind", "Playwright"],
            link: None,
            employment_type: EmploymentType::FullTime,
            accent: "#f0b289",
            highlight: false,
        },
        Experience {
            id: "freelance-fintech",
            company: "Fintech Co. (Contract)",
            company_type: CompanyType::Contract,
            role: "Frontend Consultant",
            start: date("2020-07-01"),
            end: Some(date("2020-12-01")),
            bullets: &[
                "Delivered responsive component library and templates in 8 weeks.",
                "Optimized render paths; reduced TTI by 28% on mobile.",
                "Paired with team to level-up TypeScript patterns and accessibility.",
            ],
            technologies: &["React", "TypeScript", "Tailwind", "Storybook"],
            link: None,
            employment_type: EmploymentType::Contract,
            accent: "#22c55e",
            highlight: false,
        },
        Experience {
            id: "oss-cli",
            company: "DevTools CLI",
            company_type: CompanyType::Startup,
            role: "Contributor",
            start: date("2019-05-01"),
            end: Some(date("2021-03-01")),
            bullets: &[
                "Added plugin system and config DX; 1.6k stars growth.",
                "Built robust docs site with versioned releases.",
                "Improved error reporting and typed logs.",
            ],
            technologies: &["Node.js", "TypeScript", "MDX", "Next.js"],
            link: Some("https://github.com/"),
            employment_type: EmploymentType::OpenSource,
            accent: "#ef4444",
            highlight: false,
        },
    ]
});

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::{filter, CatalogRecord, FilterState, SortMode};

    fn assert_unique_ids<R: CatalogRecord>(catalog: &[R]) {
        let mut seen = HashSet::new();
        for record in catalog {
            assert!(seen.insert(record.id()), "duplicate id {}", record.id());
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        assert_unique_ids(PROJECTS);
        assert_unique_ids(SKILLS);
        assert_unique_ids(&EXPERIENCE);
    }

    #[test]
    fn test_skill_percentages_in_range() {
        assert!(SKILLS.iter().all(|s| s.percent <= 100));
        assert!(SKILLS.iter().all(|s| !s.categories.is_empty()));
    }

    #[test]
    fn test_default_project_order() {
        let visible = filter(PROJECTS, &FilterState::default())
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        // three featured 2024 projects keep catalog order, then the rest
        assert_eq!(
            visible,
            vec!["ai-chatbot", "ai-healthcare", "ai-try-it-on", "medical-imaging"]
        );

        let by_impact = filter(PROJECTS, &FilterState::with_sort(SortMode::Impact));
        assert_eq!(by_impact[0].id, "ai-chatbot");
        assert_eq!(by_impact[1].id, "medical-imaging");
    }

    #[test]
    fn test_timeline_filters_by_employment_type() {
        use crate::catalog::{EmploymentType, Experience};

        let mut filters = FilterState::with_sort(SortMode::Newest);
        filters.select_only(Some(EmploymentType::Contract.as_str()));
        let contracts: Vec<&Experience> = filter(EXPERIENCE.as_slice(), &filters);
        assert!(!contracts.is_empty());
        assert!(contracts
            .iter()
            .all(|role| role.employment_type == EmploymentType::Contract));

        filters.select_only(None);
        assert_eq!(filter(EXPERIENCE.as_slice(), &filters).len(), EXPERIENCE.len());
    }

    #[test]
    fn test_project_images_are_hosted_or_bundled() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for project in PROJECTS {
            for src in project.slides() {
                match src.strip_prefix('/') {
                    Some(local) => assert!(public.join(local).is_file(), "{src} is not in public/"),
                    None => assert!(src.starts_with("https://"), "{src} is neither local nor https"),
                }
            }
        }
    }

    #[test]
    fn test_timeline_starts_with_current_role() {
        let newest = filter(&EXPERIENCE, &FilterState::with_sort(SortMode::Newest));
        assert_eq!(newest[0].id, "os-core-kit");
        assert!(newest[0].end.is_none());
    }
}
