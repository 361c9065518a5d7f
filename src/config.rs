//! Site identity and contact settings, fixed at compile time so the server
//! render and the WASM bundle agree.

use http::Uri;
use thiserror::Error;

use crate::contact::TransportError;

pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1200;
pub const SIMULATED_FAILURE_MESSAGE: &str = "Network error. Please try again.";
pub const FAVICON_PATH: &str = "/favicon.svg";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("contact endpoint {0:?} is not a valid URI")]
    InvalidEndpoint(String),
    #[error("contact endpoint {0:?} must be an absolute http(s) URL")]
    UnsupportedEndpoint(String),
    #[error("simulated delay {0:?} is not a number of milliseconds")]
    InvalidDelay(String),
}

/// What the stand-in transport does when no endpoint is configured.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SimulatedOutcome {
    #[default]
    Deliver,
    Fail(String),
}

impl SimulatedOutcome {
    pub fn result(&self) -> Result<(), TransportError> {
        match self {
            SimulatedOutcome::Deliver => Ok(()),
            SimulatedOutcome::Fail(message) => Err(TransportError::Network(message.clone())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: crate::icons::Icon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub avatar: Option<&'static str>,
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub contact_email: &'static str,
    pub calendly_url: &'static str,
    pub resume_url: &'static str,
    pub source_url: &'static str,
    pub socials: &'static [SocialLink],
    pub contact_endpoint: Option<String>,
    pub simulated_delay_ms: u64,
    pub simulated_outcome: SimulatedOutcome,
}

static SOCIALS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Abdulla090",
        icon: crate::icons::Icon::Github,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/abdulla-aziz",
        icon: crate::icons::Icon::Linkedin,
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com/abdulla_aziz",
        icon: crate::icons::Icon::Twitter,
    },
];

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Abdulla",
            initials: "AC",
            headline: "AI Trainer & Machine Learning Specialist",
            bio: "Specialized in training and deploying AI models across diverse domains. \
                  Front-end and web app development, and AI-powered products for businesses \
                  of every size.",
            avatar: Some("https://github.com/Abdulla090.png"),
            site_name: "Abdulla Portfolio",
            tagline: "Full Stack Development & AI Solutions",
            contact_email: "abdullaazizb58@gmail.com",
            calendly_url: "https://calendly.com/abdulla/intro",
            resume_url: "/resume.pdf",
            source_url: "https://github.com/Abdulla090/portfolio-site",
            socials: SOCIALS,
            contact_endpoint: None,
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
            simulated_outcome: SimulatedOutcome::Deliver,
        }
    }
}

/// Accepts absolute `http`/`https` URIs only.
pub fn parse_endpoint(raw: &str) -> Result<Uri, ConfigError> {
    let uri = raw
        .parse::<Uri>()
        .map_err(|_| ConfigError::InvalidEndpoint(raw.to_string()))?;
    match (uri.scheme_str(), uri.host()) {
        (Some("http" | "https"), Some(_)) => Ok(uri),
        _ => Err(ConfigError::UnsupportedEndpoint(raw.to_string())),
    }
}

fn parse_delay(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidDelay(raw.to_string()))
}

fn parse_outcome(raw: &str) -> SimulatedOutcome {
    match raw.trim() {
        "" | "0" | "false" | "no" => SimulatedOutcome::Deliver,
        "1" | "true" | "yes" => SimulatedOutcome::Fail(SIMULATED_FAILURE_MESSAGE.to_string()),
        message => SimulatedOutcome::Fail(message.to_string()),
    }
}

impl SiteConfig {
    /// Reads `CONTACT_ENDPOINT`, `CONTACT_SIMULATED_DELAY_MS` and
    /// `CONTACT_SIMULATE_FAILURE` as they were at build time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CONTACT_ENDPOINT"),
            option_env!("CONTACT_SIMULATED_DELAY_MS"),
            option_env!("CONTACT_SIMULATE_FAILURE"),
        )
    }

    /// Bad values are logged and replaced by their defaults.
    pub fn from_values(
        endpoint: Option<&str>,
        delay_ms: Option<&str>,
        simulate_failure: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let contact_endpoint = endpoint
            .filter(|e| !e.trim().is_empty())
            .and_then(|e| match parse_endpoint(e.trim()) {
                Ok(uri) => Some(uri.to_string()),
                Err(e) => {
                    log::warn!("{e}; falling back to the simulated transport");
                    None
                }
            });

        let simulated_delay_ms = match delay_ms.map(parse_delay) {
            Some(Ok(ms)) => ms,
            Some(Err(e)) => {
                log::warn!("{e}; using {DEFAULT_SIMULATED_DELAY_MS}ms");
                DEFAULT_SIMULATED_DELAY_MS
            }
            None => DEFAULT_SIMULATED_DELAY_MS,
        };

        Self {
            contact_endpoint,
            simulated_delay_ms,
            simulated_outcome: simulate_failure.map(parse_outcome).unwrap_or_default(),
            ..defaults
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_validation() {
        assert!(parse_endpoint("https://formspree.io/f/abc").is_ok());
        assert!(parse_endpoint("http://localhost:8080/contact").is_ok());
        assert_eq!(
            parse_endpoint("/api/contact"),
            Err(ConfigError::UnsupportedEndpoint("/api/contact".to_string()))
        );
        assert_eq!(
            parse_endpoint("ftp://example.com/drop"),
            Err(ConfigError::UnsupportedEndpoint(
                "ftp://example.com/drop".to_string()
            ))
        );
        assert!(matches!(
            parse_endpoint("https://exa mple.com"),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_from_values() {
        let config = SiteConfig::from_values(Some("https://example.com/contact"), Some("50"), None);
        assert_eq!(
            config.contact_endpoint.as_deref(),
            Some("https://example.com/contact")
        );
        assert_eq!(config.simulated_delay_ms, 50);
        assert_eq!(config.simulated_outcome, SimulatedOutcome::Deliver);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = SiteConfig::from_values(Some("not a url"), Some("soon"), Some(""));
        assert_eq!(config.contact_endpoint, None);
        assert_eq!(config.simulated_delay_ms, DEFAULT_SIMULATED_DELAY_MS);

        let blank = SiteConfig::from_values(Some("  "), None, None);
        assert_eq!(blank.contact_endpoint, None);
    }

    #[test]
    fn test_simulated_failure() {
        let config = SiteConfig::from_values(None, None, Some("true"));
        assert_eq!(
            config.simulated_outcome,
            SimulatedOutcome::Fail(SIMULATED_FAILURE_MESSAGE.to_string())
        );

        let custom = SiteConfig::from_values(None, None, Some("Mail server down"));
        assert_eq!(
            custom.simulated_outcome,
            SimulatedOutcome::Fail("Mail server down".to_string())
        );
    }

    #[test]
    fn test_simulated_outcome_result() {
        assert_eq!(SimulatedOutcome::Deliver.result(), Ok(()));
        assert_eq!(
            SimulatedOutcome::Fail("Mail server down".to_string()).result(),
            Err(TransportError::Network("Mail server down".to_string()))
        );

        let config = SiteConfig::from_values(None, None, Some("yes"));
        assert_eq!(
            config.simulated_outcome.result().unwrap_err().to_string(),
            SIMULATED_FAILURE_MESSAGE
        );
    }

    #[test]
    fn test_linked_assets_resolve() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let config = SiteConfig::default();
        for href in [Some(FAVICON_PATH), Some(config.resume_url), config.avatar]
            .into_iter()
            .flatten()
        {
            match href.strip_prefix('/') {
                Some(local) => assert!(public.join(local).is_file(), "{href} is not in public/"),
                None => assert!(href.starts_with("https://"), "{href} is neither local nor https"),
            }
        }
    }

    #[test]
    fn test_mailto() {
        assert_eq!(SiteConfig::default().mailto(), "mailto:abdullaazizb58@gmail.com");
    }
}
